use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::SessionUser;
use crate::forms::auth::SignInForm;
use crate::middleware::SIGNIN_PATH;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};

/// Where admins land after signing in.
pub const ADMIN_HOME_PATH: &str = "/admin/connections";

#[get("/signin")]
pub async fn show_signin(
    user: Option<SessionUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect(ADMIN_HOME_PATH);
    }
    let context = base_context(&flash_messages, None, "signin");
    render_template(&tera, "admin/signin.html", &context)
}

#[post("/signin")]
pub async fn signin(
    request: HttpRequest,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    let user = match auth_service::sign_in(form, &server_config.admin_access_key) {
        Ok(user) => user,
        Err(ServiceError::Unauthorized) => {
            log::warn!("Rejected admin sign-in");
            FlashMessage::error("Invalid email or access key.").send();
            return redirect(SIGNIN_PATH);
        }
        Err(ServiceError::Form(message)) => {
            log::warn!("Invalid sign-in form: {message}");
            FlashMessage::error("Enter a valid email and access key.").send();
            return redirect(SIGNIN_PATH);
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let stored = match serde_json::to_string(&user) {
        Ok(stored) => stored,
        Err(err) => {
            log::error!("Failed to serialize the session user: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if let Err(err) = Identity::login(&request.extensions(), stored) {
        log::error!("Failed to store the identity: {err}");
        return HttpResponse::InternalServerError().finish();
    }

    FlashMessage::success(format!("Signed in as {}.", user.email)).send();
    redirect(ADMIN_HOME_PATH)
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect(SIGNIN_PATH)
}
