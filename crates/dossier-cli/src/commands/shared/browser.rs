use anyhow::Context;

/// Open `url` in the default browser.
pub fn open_page(url: &str) -> anyhow::Result<()> {
    tracing::debug!(url, "opening browser");
    open::that(url).with_context(|| format!("failed to open {url} in a browser"))
}
