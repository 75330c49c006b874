//! Entry point: parse the CLI, resolve the API key once, dispatch.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cfbd_client::{
    auth::{ApiToken, TokenStore},
    cli::{Cfbd, Commands},
    client::CfbdClient,
    commands::{
        handle_coaches, handle_conferences, handle_drives, handle_set_token, handle_venues,
    },
    Result,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = Cfbd::parse();

    match app.command {
        Commands::SetToken { token } => handle_set_token(&token, app.key_dir.as_deref()),
        command => {
            // The token is resolved once here and handed to the client;
            // nothing downstream re-reads the environment or the key file.
            let token = match &app.key_dir {
                Some(dir) => {
                    ApiToken::resolve_with_store(app.api_key.as_deref(), &TokenStore::in_dir(dir))?
                }
                None => ApiToken::resolve(app.api_key.as_deref())?,
            };
            let client = CfbdClient::new(token)?;

            match command {
                Commands::SetToken { .. } => unreachable!("handled above"),
                Commands::Coaches { query, output } => handle_coaches(&client, query, output),
                Commands::Conferences { output } => handle_conferences(&client, output),
                Commands::Venues { output } => handle_venues(&client, output),
                Commands::Drives { query, output } => handle_drives(&client, query, output),
            }
        }
    }
}
