use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::{
    api::models::{error::APIError, profile::Profile},
    auth::get_current_user,
    db::models::profile::Profile as DBProfile,
    DbPool,
};

pub async fn profile(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;

    let conn = pool.get()?;
    let db_profile = web::block(move || DBProfile::get_by_id(&conn, &current_user.id)).await?;

    Ok(HttpResponse::Ok().json(Profile::try_from(db_profile)?))
}
