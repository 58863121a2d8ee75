use actix_cors::Cors;
use actix_session::CookieSession;
use actix_web::{middleware, web, App, HttpServer, Responder};

#[macro_use]
extern crate diesel;
extern crate dotenv;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate lazy_static;

use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use diesel_migrations::embed_migrations;
use dotenv::dotenv;

mod api;
mod auth;
mod content;
mod db;
mod identity;
mod settings;

type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

embed_migrations!("./migrations");

lazy_static! {
    static ref CONFIG: settings::Settings =
        settings::Settings::new().expect("config can be loaded");
}

fn database_url() -> String {
    dotenv().ok();
    let user = &CONFIG.database.user;
    let password = &CONFIG.database.password;
    let host = &CONFIG.database.host;
    let port = &CONFIG.database.port;
    let name = &CONFIG.database.name;

    format!(
        "postgres://{}:{}@{}:{}/{}",
        user, password, host, port, name
    )
}

async fn index() -> impl Responder {
    "Coinfolio API"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let database_url = database_url();
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool.");

    let _result = embedded_migrations::run_with_output(
        &pool
            .get()
            .expect("Failed to get a connection from the pool"),
        &mut std::io::stdout(),
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .data(pool.clone())
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .wrap(CookieSession::signed(&[0; 32]).name("coinfolio_session").secure(false))
            .service(web::scope("/app").route("/index.html", web::get().to(index)))
            .service(
                web::scope("/api/v1")
                    .data(CONFIG.identity.clone())
                    .configure(api::authentication::api_config)
                    .configure(api::profile::api_config)
                    .configure(api::wallets::api_config)
                    .configure(api::transactions::api_config)
                    .configure(api::admin::api_config)
                    .configure(api::secret_phrase::api_config)
                    .configure(api::pages::api_config),
            )
    })
    .bind(&CONFIG.server.address)?
    .run()
    .await
}
