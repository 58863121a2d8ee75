use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::{
    api::models::{
        error::APIError,
        profile::{Profile, UpdateProfileRequest},
    },
    auth::get_current_user,
    db::models::profile::{Profile as DBProfile, UpdateProfile},
    DbPool,
};

pub async fn profile(
    pool: web::Data<DbPool>,
    body: web::Json<UpdateProfileRequest>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;
    let body = body.into_inner();

    let conn = pool.get()?;
    let db_profile = web::block(move || {
        let update = UpdateProfile {
            display_name: body.display_name,
            phone: body.phone,
        };

        DBProfile::update(&conn, &current_user.id, &update)
    })
    .await?;

    Ok(HttpResponse::Ok().json(Profile::try_from(db_profile)?))
}
