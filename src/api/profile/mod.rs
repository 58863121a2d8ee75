use actix_web::{web, HttpResponse};

mod get;
mod patch;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(get::profile))
            .route(web::patch().to(patch::profile))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
