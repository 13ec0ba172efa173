use std::time::Duration;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::middleware::from_fn;
use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use serde_json::{Value, json};
use tera::Tera;

use toolsvault::middleware::{SIGNIN_PATH, redirect_unauthorized};
use toolsvault::models::config::ServerConfig;
use toolsvault::repository::{ApiRepository, StaticToolRepository};
use toolsvault::routes::admin::{delete_connection, show_admin_tools, show_connections, show_users};
use toolsvault::routes::alert_level_to_str;
use toolsvault::routes::api::{api_v1_run_tool, api_v1_tools};
use toolsvault::routes::auth::{logout, show_signin, signin};
use toolsvault::routes::main::{default_not_found, show_catalog, show_index};
use toolsvault::routes::tools::{run_tool, show_tool};

const ACCESS_KEY: &str = "open-sesame";

fn server_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        templates_dir: "templates/**/*".to_string(),
        secret: "x".repeat(64),
        admin_access_key: ACCESS_KEY.to_string(),
        // Nothing listens on the discard port, so every API call fails fast.
        api_base_url: "http://127.0.0.1:9".to_string(),
        api_secret: "shared".to_string(),
        api_timeout_secs: 1,
    }
}

macro_rules! test_app {
    () => {{
        let key = Key::generate();
        let message_store = CookieMessageStore::builder(key.clone()).build();
        let api_repo =
            ApiRepository::new("http://127.0.0.1:9", "shared", Duration::from_secs(1)).unwrap();

        test::init_service(
            App::new()
                .wrap(FlashMessagesFramework::builder(message_store).build())
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key)
                        .cookie_secure(false)
                        .build(),
                )
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
                .app_data(web::Data::new(Tera::new("templates/**/*").unwrap()))
                .app_data(web::Data::new(StaticToolRepository::new()))
                .app_data(web::Data::new(api_repo))
                .app_data(web::Data::new(server_config())),
        )
        .await
    }};
}

fn location(resp: &actix_web::dev::ServiceResponse) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

#[::core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn home_page_shows_featured_tools() {
    let app = test_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("JSON Formatter"));
    assert!(!body.contains("Age Calculator"));
}

#[actix_web::test]
async fn catalog_filters_by_category() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/tools?category=Converters")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Length Converter"));
    assert!(!body.contains("JSON Formatter"));
}

#[actix_web::test]
async fn catalog_paginates() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/tools?page=2").to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("Showing 8 of 17 tools"));
    assert!(body.contains("page=1\">Previous</a>"));
}

#[actix_web::test]
async fn unknown_tool_is_not_found() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/tools/flux-capacitor")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn tool_form_renders_result() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/tools/scientific-calculator")
        .set_form([("expression", "6 * 7"), ("angle", "deg")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("<pre>42</pre>"));
}

#[actix_web::test]
async fn tool_form_reports_invalid_input() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/tools/date-difference")
        .set_form([("start", "yesterday"), ("end", "2024-01-01")])
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;

    assert!(body.contains("<pre>Invalid Date</pre>"));
}

#[actix_web::test]
async fn api_lists_filtered_tools() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/tools?q=converter")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pages"], json!([]));
    assert_eq!(body["tools"][0]["link"], "/tools/case-converter");
}

#[actix_web::test]
async fn api_runs_tools() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/run")
        .set_json(json!({ "tool": "base64", "input": "hi" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "output": "aGk=", "is_error": false }));
}

#[actix_web::test]
async fn api_rejects_unknown_tools() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/tools/run")
        .set_json(json!({ "tool": "teleporter" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn admin_pages_redirect_to_signin() {
    let app = test_app!();

    for uri in ["/admin/connections", "/admin/users", "/admin/tools"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp), SIGNIN_PATH);
    }
}

#[actix_web::test]
async fn signin_page_renders() {
    let app = test_app!();

    let req = test::TestRequest::get().uri(SIGNIN_PATH).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Admin sign in"));
}

#[actix_web::test]
async fn wrong_access_key_returns_to_signin() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri(SIGNIN_PATH)
        .set_form([("email", "ops@toolsvault.dev"), ("access_key", "guess")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), SIGNIN_PATH);
}

#[actix_web::test]
async fn signed_in_admin_sees_dashboard() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri(SIGNIN_PATH)
        .set_form([("email", "ops@toolsvault.dev"), ("access_key", ACCESS_KEY)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/connections");

    let cookies: Vec<Cookie<'static>> = resp
        .response()
        .cookies()
        .map(|cookie| cookie.into_owned())
        .collect();

    let mut req = test::TestRequest::get().uri("/admin/tools?q=text");
    for cookie in &cookies {
        req = req.cookie(cookie.clone());
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Text Diff"));

    // The admin API is unreachable, so the table falls back to a notice.
    let mut req = test::TestRequest::get().uri("/admin/connections");
    for cookie in &cookies {
        req = req.cookie(cookie.clone());
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Could not load connections"));
}
