use actix_web::{web, HttpResponse};

mod get;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/transactions")
            .route(web::get().to(get::transactions))
            .route(web::post().to(post::transaction))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
