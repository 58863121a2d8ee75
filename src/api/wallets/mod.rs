use actix_web::{web, HttpResponse};

mod get;
mod put;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/wallets")
            .route(web::get().to(get::wallets))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/wallets/{symbol}")
            .route(web::put().to(put::wallet))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
