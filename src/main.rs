use anyhow::Result;
use clap::{Parser, Subcommand};
use workspace_snippets::{
    chat, create_membership_for_group, logging::init_logging, GoogleAuthService,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a Chat space membership for a Google Group
    CreateMembership {
        /// Google OAuth access token
        #[arg(long, env = "ACCESS_TOKEN")]
        access_token: String,
        /// Space resource name, e.g. spaces/AAAA1234
        #[arg(long, default_value = chat::DEFAULT_SPACE)]
        space: String,
        /// Group resource name, e.g. groups/01234abc
        #[arg(long, default_value = chat::DEFAULT_GROUP)]
        group: String,
    },
    /// Exchange a refresh token for an access token
    Refresh {
        /// Google OAuth client ID
        #[arg(long, env = "GOOGLE_CLIENT_ID")]
        client_id: String,
        /// Google OAuth client secret
        #[arg(long, env = "GOOGLE_CLIENT_SECRET")]
        client_secret: String,
        /// Refresh token
        #[arg(long, env = "GOOGLE_REFRESH_TOKEN")]
        refresh_token: String,
        /// Scope to request; repeat the flag for multiple scopes
        #[arg(long = "scope", default_value = chat::MEMBERSHIP_SCOPE)]
        scopes: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("info");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateMembership {
            access_token,
            space,
            group,
        } => {
            create_membership_for_group(&access_token, &space, &group).await?;
        }
        Commands::Refresh {
            client_id,
            client_secret,
            refresh_token,
            scopes,
        } => {
            let auth_service = GoogleAuthService::new(client_id, client_secret)?;
            let scopes: Vec<&str> = scopes.iter().map(String::as_str).collect();
            let token_response = auth_service.refresh_token(&refresh_token, &scopes).await?;
            println!("Token response: {token_response:#?}");
        }
    }

    Ok(())
}
