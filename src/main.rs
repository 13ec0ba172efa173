use std::env;
use std::path::Path;

use dotenvy::dotenv;

use toolsvault::models::config::{DEFAULT_APP_ENV, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());

    let server_config = match ServerConfig::load(Path::new("config"), &app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    toolsvault::run(server_config).await
}
