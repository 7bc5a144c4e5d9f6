use auth::KalshiCredentials;
use common::KalshiEnvironment;
use kalshi_rest::KalshiRestClient;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    common::init_logging();

    let credentials = match KalshiCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Failed to load Kalshi credentials");
            std::process::exit(1);
        }
    };

    let environment = KalshiEnvironment::from_env();

    info!(
        environment = %environment,
        api_key_id = credentials.api_key_id(),
        "Starting Kalshi market fetch"
    );

    let client = match KalshiRestClient::with_environment(&credentials, environment) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build Kalshi client");
            std::process::exit(1);
        }
    };

    match client.get_markets().await {
        Ok(body) => {
            info!(bytes = body.len(), "Fetched markets");
            println!("{body}");
        }
        Err(e) => {
            error!(error = %e, "Markets request failed");
            std::process::exit(1);
        }
    }
}
