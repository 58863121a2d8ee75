use actix_web::{web, HttpResponse};

mod get;
mod patch;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin/transactions")
            .route(web::get().to(get::transactions))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/admin/transactions/{id}")
            .route(web::patch().to(patch::transaction))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
