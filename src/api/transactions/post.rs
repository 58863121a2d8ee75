use std::convert::TryFrom;
use std::str::FromStr;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use log::info;
use uuid::Uuid;

use crate::{
    api::models::{
        error::APIError,
        transaction::{NewTransactionRequest, Transaction, TransactionState},
    },
    auth::get_current_user,
    db::models::transaction::{NewTransaction, Transaction as DBTransaction},
    DbPool,
};

pub async fn transaction(
    pool: web::Data<DbPool>,
    body: web::Json<NewTransactionRequest>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;
    let user_id = current_user.id;
    let body = body.into_inner();

    let amount =
        BigDecimal::from_str(body.amount.as_str()).map_err(|_error| APIError::InvalidValue {
            description: format!("amount cannot be {}", body.amount),
        })?;

    let conn = pool.get()?;
    let db_transaction = web::block(move || {
        let new_transaction = NewTransaction {
            user_id,
            kind: body.kind.into(),
            symbol: body.symbol.code().to_string(),
            amount,
            state: TransactionState::Pending.into(),
            reference: body
                .reference
                .unwrap_or_else(|| Uuid::new_v4().to_simple().to_string()),
        };

        DBTransaction::insert(&conn, &new_transaction)
    })
    .await?;

    info!(
        "User {} submitted a {:?} transaction {}",
        user_id, db_transaction.kind, db_transaction.id
    );

    Ok(HttpResponse::Ok().json(Transaction::try_from(db_transaction)?))
}
