use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password and store the session.
    Login(AuthLoginArgs),
    /// Create an account and store its session.
    Register(AuthRegisterArgs),
    /// Log out and clear the stored session.
    Logout,
    /// Show whether a session is stored and when it expires.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    #[command(flatten)]
    pub password: PasswordArgs,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    /// Username for the new account.
    #[arg(long)]
    pub username: String,
    /// Account email.
    #[arg(long)]
    pub email: String,
    #[command(flatten)]
    pub password: PasswordArgs,
}

#[derive(Clone, Debug, Args)]
pub struct PasswordArgs {
    /// Account password. Prefer --password-stdin.
    #[arg(long, conflicts_with = "password_stdin")]
    pub password: Option<String>,
    /// Read the password from the first line of stdin.
    #[arg(long)]
    pub password_stdin: bool,
}
