use actix_web::{web, HttpResponse};

mod get;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/pages")
            .route(web::get().to(get::pages))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/pages/{slug}")
            .route(web::get().to(get::page))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
