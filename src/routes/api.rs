use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::ListQuery;
use crate::repository::StaticToolRepository;
use crate::services::{catalog as catalog_service, tools as tools_service};
use crate::tools::ToolRequest;

#[get("/v1/tools")]
pub async fn api_v1_tools(
    params: web::Query<ListQuery>,
    repo: web::Data<StaticToolRepository>,
) -> impl Responder {
    match catalog_service::load_catalog_json(repo.get_ref(), &params) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list tools: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/v1/tools/run")]
pub async fn api_v1_run_tool(web::Json(request): web::Json<ToolRequest>) -> impl Responder {
    HttpResponse::Ok().json(tools_service::run_request(&request))
}
