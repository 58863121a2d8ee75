use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{http::StatusCode, web, HttpResponse};
use log::info;

use crate::{
    api::models::{
        authentication::{ChangeEmailRequest, ChangePasswordRequest},
        error::APIError,
        profile::Profile,
    },
    auth::get_current_user,
    db::models::profile::Profile as DBProfile,
    identity, settings, DbPool,
};

pub async fn password(
    body: web::Json<ChangePasswordRequest>,
    identity_settings: web::Data<settings::Identity>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;
    let body = body.into_inner();

    identity::change_password(
        &identity_settings.base_url,
        &current_user.id,
        &body.current_password,
        &body.new_password,
    )
    .await?;

    info!("User {} changed their password", current_user.id);

    Ok(HttpResponse::Ok().status(StatusCode::NO_CONTENT).finish())
}

// The identity service write and the profile row write happen in sequence,
// there is no rollback if the second one fails.
pub async fn email(
    pool: web::Data<DbPool>,
    body: web::Json<ChangeEmailRequest>,
    identity_settings: web::Data<settings::Identity>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;
    let user_id = current_user.id;
    let body = body.into_inner();

    identity::change_email(&identity_settings.base_url, &user_id, &body.new_email).await?;

    let conn = pool.get()?;
    let db_profile =
        web::block(move || DBProfile::update_email(&conn, &user_id, &body.new_email)).await?;

    info!("User {} changed their email", user_id);

    Ok(HttpResponse::Ok().json(Profile::try_from(db_profile)?))
}
