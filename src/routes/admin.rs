//! Admin dashboard pages. Every handler requires a [`SessionUser`]; the
//! extractor answers 401 without one and the admin scope turns that into a
//! redirect to the sign-in page.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::SessionUser;
use crate::dto::ListQuery;
use crate::middleware::SIGNIN_PATH;
use crate::repository::{ApiRepository, StaticToolRepository};
use crate::routes::{base_context, redirect, render_template};
use crate::services::{
    ServiceError, catalog as catalog_service, connections as connections_service,
    users as users_service,
};

fn insufficient_rights() -> HttpResponse {
    FlashMessage::error("Insufficient rights.").send();
    redirect(SIGNIN_PATH)
}

#[get("/connections")]
pub async fn show_connections(
    params: web::Query<ListQuery>,
    user: SessionUser,
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match connections_service::load_connections_page(repo.get_ref(), &user, &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "connections");
            context.insert("connections", &data.connections);
            context.insert("search", &data.filter);
            context.insert("categories", &data.services);
            context.insert("load", &data.load);

            render_template(&tera, "admin/connections.html", &context)
        }
        Err(ServiceError::Unauthorized) => insufficient_rights(),
        Err(err) => {
            log::error!("Failed to show connections: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/connections/{connection_id}/delete")]
pub async fn delete_connection(
    connection_id: web::Path<String>,
    user: SessionUser,
    repo: web::Data<ApiRepository>,
) -> impl Responder {
    match connections_service::delete_connection(repo.get_ref(), &user, &connection_id).await {
        Ok(()) => {
            FlashMessage::success("Connection deleted.").send();
        }
        Err(ServiceError::Unauthorized) => return insufficient_rights(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Connection not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete connection {connection_id}: {err}");
            FlashMessage::error(format!("Could not delete the connection: {err}")).send();
        }
    }
    redirect("/admin/connections")
}

#[get("/users")]
pub async fn show_users(
    params: web::Query<ListQuery>,
    user: SessionUser,
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match users_service::load_users_page(repo.get_ref(), &user, &params).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "users");
            context.insert("users", &data.users);
            context.insert("search", &data.filter);
            context.insert("categories", &data.roles);
            context.insert("load", &data.load);

            render_template(&tera, "admin/users.html", &context)
        }
        Err(ServiceError::Unauthorized) => insufficient_rights(),
        Err(err) => {
            log::error!("Failed to show users: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/tools")]
pub async fn show_admin_tools(
    params: web::Query<ListQuery>,
    user: SessionUser,
    repo: web::Data<StaticToolRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match catalog_service::load_admin_tools_page(repo.get_ref(), &user, &params) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "admin-tools");
            context.insert("tools", &data.tools);
            context.insert("search", &data.filter);
            context.insert("categories", &data.categories);

            render_template(&tera, "admin/tools.html", &context)
        }
        Err(ServiceError::Unauthorized) => insufficient_rights(),
        Err(err) => {
            log::error!("Failed to show tools: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
