use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::session::SessionUser;
use crate::dto::ListQuery;
use crate::repository::StaticToolRepository;
use crate::routes::{base_context, not_found, render_template};
use crate::services::catalog as catalog_service;

#[get("/")]
pub async fn show_index(
    user: Option<SessionUser>,
    repo: web::Data<StaticToolRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match catalog_service::load_home_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "index");
            context.insert("featured", &data.featured);
            context.insert("categories", &data.categories);
            context.insert("tool_count", &data.tool_count);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/tools")]
pub async fn show_catalog(
    params: web::Query<ListQuery>,
    user: Option<SessionUser>,
    repo: web::Data<StaticToolRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match catalog_service::load_catalog_page(repo.get_ref(), &params) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "tools");
            context.insert("tools", &data.tools);
            context.insert("search", &data.filter);
            context.insert("categories", &data.categories);

            render_template(&tera, "catalog/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the catalog: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn default_not_found(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    not_found(&tera, &flash_messages)
}
