use actix_web::{web, HttpResponse};

mod get;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/secret-phrase")
            .route(web::get().to(get::secret_phrase))
            .route(web::post().to(post::secret_phrase))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
