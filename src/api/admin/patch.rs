use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{
    web::{self, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::models::{
        error::APIError,
        transaction::{AdminDecisionRequest, Transaction},
    },
    auth::get_current_user,
    db::models::transaction::Transaction as DBTransaction,
    DbPool,
};

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

pub async fn transaction(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    body: web::Json<AdminDecisionRequest>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;
    current_user.require_admin()?;

    let id = path.id;
    let decision = body.into_inner().decision;
    let state = decision.terminal_state();

    let conn = pool.get()?;
    let db_transaction =
        web::block(move || DBTransaction::set_state(&conn, &id, state)).await?;

    info!(
        "Admin {} marked transaction {} as {:?}",
        current_user.id, db_transaction.id, decision
    );

    Ok(HttpResponse::Ok().json(Transaction::try_from(db_transaction)?))
}
