use std::convert::{TryFrom, TryInto};

use actix_session::Session;
use actix_web::{web, HttpResponse};
use log::info;
use uuid::Uuid;

use crate::{
    api::models::{
        authentication::SignInRequest,
        error::APIError,
        profile::{Profile, UserRole},
    },
    auth::{set_current_user, SessionUser},
    db::models::profile::{NewProfile, Profile as DBProfile},
    identity, settings, DbPool,
};

pub async fn sign_in(
    pool: web::Data<DbPool>,
    body: web::Json<SignInRequest>,
    identity_settings: web::Data<settings::Identity>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let body = body.into_inner();
    let account =
        identity::sign_in(&identity_settings.base_url, &body.email, &body.password).await?;

    let conn = pool.get()?;
    let db_profile = web::block::<_, _, APIError>(move || {
        match DBProfile::get_by_id(&conn, &account.id) {
            Ok(profile) => Ok(profile),
            Err(diesel::result::Error::NotFound) => {
                // First sign-in on this backend: mirror the account as a
                // fresh profile row.
                let new_profile = NewProfile {
                    id: account.id,
                    display_name: account
                        .display_name
                        .clone()
                        .unwrap_or_else(|| account.email.clone()),
                    email: account.email,
                    role: UserRole::Member.into(),
                    referral_code: referral_code(),
                    referred_by: None,
                };

                Ok(DBProfile::insert(&conn, &new_profile)?)
            }
            Err(error) => Err(error.into()),
        }
    })
    .await?;

    let session_user = SessionUser::new(db_profile.id, db_profile.role.try_into()?);
    set_current_user(&session, &session_user).map_err(|_error| APIError::Internal {
        description: "failed to set current user".into(),
    })?;
    session.renew();

    info!("User {} signed in", session_user.id);

    Ok(HttpResponse::Ok().json(Profile::try_from(db_profile)?))
}

fn referral_code() -> String {
    Uuid::new_v4().to_simple().to_string()[..8].to_string()
}
