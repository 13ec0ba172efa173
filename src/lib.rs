pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
pub mod tools;

pub const SERVICE_ADMIN_ROLE: &str = "admin";

/// Shortest secret accepted as a cookie signing key.
#[cfg(feature = "server")]
const MIN_SECRET_LEN: usize = 64;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_identity::IdentityMiddleware;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::middleware::{Compress, Logger, from_fn};
    use actix_web::{App, HttpServer, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::middleware::redirect_unauthorized;
    use crate::repository::{ApiRepository, StaticToolRepository};
    use crate::routes::admin::{delete_connection, show_admin_tools, show_connections, show_users};
    use crate::routes::api::{api_v1_run_tool, api_v1_tools};
    use crate::routes::auth::{logout, show_signin, signin};
    use crate::routes::main::{default_not_found, show_catalog, show_index};
    use crate::routes::tools::{run_tool, show_tool};

    let api_repo = ApiRepository::from_config(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build the API client: {e}")))?;
    let tool_repo = StaticToolRepository::new();

    if server_config.secret.len() < MIN_SECRET_LEN {
        return Err(std::io::Error::other(format!(
            "secret must be at least {MIN_SECRET_LEN} bytes"
        )));
    }

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving on {}:{}, admin API at {}",
        bind_address.0,
        bind_address.1,
        server_config.api_base_url
    );

    // Browsers reject an explicit `Domain=localhost`.
    let cookie_domain =
        (server_config.domain != "localhost").then(|| server_config.domain.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(cookie_domain.clone())
                    .build(),
            )
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_tools)
                    .service(api_v1_run_tool),
            )
            .service(
                web::scope("/admin")
                    .wrap(from_fn(redirect_unauthorized))
                    .service(show_signin)
                    .service(signin)
                    .service(logout)
                    .service(show_connections)
                    .service(delete_connection)
                    .service(show_users)
                    .service(show_admin_tools),
            )
            .service(show_index)
            .service(show_catalog)
            .service(show_tool)
            .service(run_tool)
            .default_service(web::to(default_not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api_repo.clone()))
            .app_data(web::Data::new(tool_repo))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
