use dossier_auth::token_store::TokenSource;
use dossier_client::ApiClient;
use dossier_config::DossierConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DossierConfig,
    pub client: ApiClient,
    pub token_source: Option<TokenSource>,
}

impl AppContext {
    /// Build the API client, authenticating with the stored session if any.
    pub fn init(config: DossierConfig) -> anyhow::Result<Self> {
        let (token, token_source) = dossier_auth::resolve_live_session().unzip();
        let client = ApiClient::new(&config.server, token)?;
        tracing::debug!(
            server = client.base_url(),
            authenticated = client.has_session(),
            "client ready"
        );
        Ok(Self {
            config,
            client,
            token_source,
        })
    }
}

