use actix_session::Session;
use actix_web::{web, HttpResponse};
use log::info;

use crate::{
    api::models::{
        error::APIError,
        secret_phrase::{SecretPhraseRequest, SecretPhraseResponse},
    },
    auth::get_current_user,
    db::models::secret_phrase::{NewSecretPhrase, SecretPhrase as DBSecretPhrase},
    DbPool,
};

pub async fn secret_phrase(
    pool: web::Data<DbPool>,
    body: web::Json<SecretPhraseRequest>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;
    let user_id = current_user.id;
    let body = body.into_inner();

    body.validate()?;

    let conn = pool.get()?;
    let db_secret_phrase = web::block(move || {
        let new_secret_phrase = NewSecretPhrase {
            user_id,
            phrase: body.normalized(),
        };

        DBSecretPhrase::upsert(&conn, &new_secret_phrase)
    })
    .await?;

    info!("User {} saved a secret phrase", user_id);

    Ok(HttpResponse::Ok().json(SecretPhraseResponse::from(db_secret_phrase)))
}
