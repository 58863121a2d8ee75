use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::api::models::transaction::{TransactionKind, TransactionState};
use crate::db::models::profile::Profile;
use crate::db::schema::*;

use super::pagination::Paginate;

#[derive(Queryable, Identifiable, Associations, Debug)]
#[belongs_to(Profile, foreign_key = "user_id")]
pub struct Transaction {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_id: Uuid,
    pub kind: i16,
    pub symbol: String,
    pub amount: BigDecimal,
    pub state: i16,
    pub reference: String,
}

impl Transaction {
    pub fn get_by_id(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<Transaction, diesel::result::Error> {
        transactions::table.find(id).first(conn)
    }

    pub fn get_list(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_id: Option<Uuid>,
        kind: Option<TransactionKind>,
        state: Option<TransactionState>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Transaction>, i64), diesel::result::Error> {
        let mut query = transactions::table
            .order_by(transactions::dsl::created_at.desc())
            .into_boxed();

        if let Some(user_id) = user_id {
            query = query.filter(transactions::dsl::user_id.eq(user_id));
        }

        if let Some(kind) = kind {
            query = query.filter(transactions::dsl::kind.eq::<i16>(kind.into()));
        }

        if let Some(state) = state {
            query = query.filter(transactions::dsl::state.eq::<i16>(state.into()));
        }

        query
            .paginate(page)
            .per_page(limit)
            .load_and_count_pages(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_transaction: &NewTransaction,
    ) -> Result<Transaction, diesel::result::Error> {
        diesel::insert_into(transactions::table)
            .values(new_transaction)
            .get_result(conn)
    }

    /// One unconditional status update. Nothing checks the prior state and
    /// nothing records who flipped it.
    pub fn set_state(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        state: TransactionState,
    ) -> Result<Transaction, diesel::result::Error> {
        diesel::update(transactions::table.find(id))
            .set(transactions::dsl::state.eq::<i16>(state.into()))
            .get_result(conn)
    }
}

#[derive(Insertable)]
#[table_name = "transactions"]
pub struct NewTransaction {
    pub user_id: Uuid,
    pub kind: i16,
    pub symbol: String,
    pub amount: BigDecimal,
    pub state: i16,
    pub reference: String,
}
