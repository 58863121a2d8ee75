use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::{
    api::models::{error::APIError, secret_phrase::SecretPhraseResponse},
    auth::get_current_user,
    db::models::secret_phrase::SecretPhrase as DBSecretPhrase,
    DbPool,
};

pub async fn secret_phrase(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;

    let conn = pool.get()?;
    let db_secret_phrase =
        web::block(move || DBSecretPhrase::get_by_user_id(&conn, &current_user.id)).await?;

    Ok(HttpResponse::Ok().json(SecretPhraseResponse::from(db_secret_phrase)))
}
