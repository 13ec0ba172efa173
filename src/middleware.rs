//! Middleware shared by the admin scope.

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse};

pub const SIGNIN_PATH: &str = "/admin/signin";

/// Replaces any `401 Unauthorized` response with a redirect to the sign-in
/// page. Use with [`actix_web::middleware::from_fn`].
pub async fn redirect_unauthorized<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody,
{
    let res = next.call(req).await?;

    if res.status() != StatusCode::UNAUTHORIZED {
        return Ok(res.map_into_left_body());
    }

    let (req, _) = res.into_parts();
    let response = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, SIGNIN_PATH))
        .finish();
    Ok(ServiceResponse::new(req, response).map_into_right_body())
}
