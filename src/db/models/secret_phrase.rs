use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::db::models::profile::Profile;
use crate::db::schema::*;

/// Stored in plaintext and returned as entered.
#[derive(Queryable, Identifiable, Associations, Debug)]
#[belongs_to(Profile, foreign_key = "user_id")]
pub struct SecretPhrase {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_id: Uuid,
    pub phrase: String,
}

impl SecretPhrase {
    pub fn get_by_user_id(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_id: &Uuid,
    ) -> Result<SecretPhrase, diesel::result::Error> {
        secret_phrases::table
            .filter(secret_phrases::dsl::user_id.eq(user_id))
            .first(conn)
    }

    pub fn upsert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_secret_phrase: &NewSecretPhrase,
    ) -> Result<SecretPhrase, diesel::result::Error> {
        diesel::insert_into(secret_phrases::table)
            .values(new_secret_phrase)
            .on_conflict(secret_phrases::dsl::user_id)
            .do_update()
            .set(secret_phrases::dsl::phrase.eq(&new_secret_phrase.phrase))
            .get_result(conn)
    }
}

#[derive(Insertable)]
#[table_name = "secret_phrases"]
pub struct NewSecretPhrase {
    pub user_id: Uuid,
    pub phrase: String,
}
