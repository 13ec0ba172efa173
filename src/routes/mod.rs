//! HTTP handlers and the helpers they share.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::session::SessionUser;

pub mod admin;
pub mod api;
pub mod auth;
pub mod main;
pub mod tools;

/// Maps a flash message level to the CSS class of its alert.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context every page starts from: alerts, the signed-in admin (if any) and
/// the active navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&SessionUser>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn not_found(tera: &Tera, flash_messages: &IncomingFlashMessages) -> HttpResponse {
    let context = base_context(flash_messages, None, "");
    match tera.render("errors/not_found.html", &context) {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render the not found page: {err}");
            HttpResponse::NotFound().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Reads the [`SessionUser`] stored by the sign-in handler. Requests without
/// a valid identity are rejected with `401 Unauthorized`.
impl FromRequest for SessionUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|id| serde_json::from_str::<SessionUser>(&id).ok());

        ready(user.ok_or_else(|| error::ErrorUnauthorized("sign in required")))
    }
}
