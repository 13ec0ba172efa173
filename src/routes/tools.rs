use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::session::SessionUser;
use crate::dto::tools::ToolPageData;
use crate::forms::tools::ToolForm;
use crate::repository::StaticToolRepository;
use crate::routes::{base_context, not_found, render_template};
use crate::services::{ServiceError, ServiceResult, tools as tools_service};

fn render_tool_page(
    result: ServiceResult<ToolPageData>,
    user: Option<&SessionUser>,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    match result {
        Ok(data) => {
            let mut context = base_context(flash_messages, user, "tools");
            context.insert("tool", &data.tool);
            context.insert("form", &data.form);
            context.insert("outcome", &data.outcome);
            context.insert("units", &data.units);

            render_template(tera, "tools/show.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(tera, flash_messages),
        Err(err) => {
            log::error!("Failed to load the tool page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/tools/{slug}")]
pub async fn show_tool(
    slug: web::Path<String>,
    user: Option<SessionUser>,
    repo: web::Data<StaticToolRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = tools_service::load_tool_page(repo.get_ref(), &slug);
    render_tool_page(result, user.as_ref(), &flash_messages, &tera)
}

#[post("/tools/{slug}")]
pub async fn run_tool(
    slug: web::Path<String>,
    user: Option<SessionUser>,
    repo: web::Data<StaticToolRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ToolForm>,
) -> impl Responder {
    let result = tools_service::run_tool(repo.get_ref(), &slug, form);
    render_tool_page(result, user.as_ref(), &flash_messages, &tera)
}
