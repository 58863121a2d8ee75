use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::{
    api::models::{asset::wallet_address_fields, error::APIError, profile::Profile},
    auth::get_current_user,
    db::models::profile::Profile as DBProfile,
    DbPool,
};

pub async fn wallets(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;

    let conn = pool.get()?;
    let db_profile = web::block(move || DBProfile::get_by_id(&conn, &current_user.id)).await?;

    let projection =
        serde_json::to_value(Profile::try_from(db_profile)?).map_err(|error| APIError::Internal {
            description: error.to_string(),
        })?;

    Ok(HttpResponse::Ok().json(wallet_address_fields(&projection)))
}
