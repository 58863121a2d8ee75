use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{
    web::{self, Query},
    HttpResponse,
};
use diesel::{r2d2::ConnectionManager, r2d2::PooledConnection, PgConnection};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::models::{
        common::ListResponse,
        error::APIError,
        transaction::{Transaction, TransactionKind, TransactionState},
    },
    auth::get_current_user,
    db::models::transaction::Transaction as DBTransaction,
    DbPool,
};

#[derive(Deserialize)]
pub struct Info {
    kind: Option<TransactionKind>,
    state: Option<TransactionState>,
    page: Option<i64>,
    limit: Option<i64>,
}

pub async fn transactions(
    pool: web::Data<DbPool>,
    query: Query<Info>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;

    let conn = pool.get()?;

    let page = query.page.unwrap_or(0);
    let limit = query.limit.unwrap_or(10);
    let kind = query.kind;
    let state = query.state;

    let result = web::block(move || {
        load_transactions(&conn, current_user.id, page, limit, kind, state)
    })
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

fn load_transactions(
    conn: &PooledConnection<ConnectionManager<PgConnection>>,
    user_id: Uuid,
    page: i64,
    limit: i64,
    kind: Option<TransactionKind>,
    state: Option<TransactionState>,
) -> Result<ListResponse<Transaction>, APIError> {
    let (transactions, total_pages) =
        DBTransaction::get_list(conn, Some(user_id), kind, state, page, limit)?;

    let results = transactions
        .into_iter()
        .map(|transaction| Transaction::try_from(transaction))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListResponse {
        page,
        total_pages,
        results,
    })
}
