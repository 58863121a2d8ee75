use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::api::models::asset::AssetSymbol;
use crate::db::schema::*;

/// The wide per-user row: identity fields, the primary balance and one
/// balance/address column pair per supported asset.
#[derive(Queryable, Identifiable, Debug)]
pub struct Profile {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: i16,
    pub referral_code: String,
    pub referred_by: Option<String>,
    pub balance: BigDecimal,
    pub btcwallet_balance: BigDecimal,
    pub btcwallet_address: Option<String>,
    pub ethwallet_balance: BigDecimal,
    pub ethwallet_address: Option<String>,
    pub usdtwallet_balance: BigDecimal,
    pub usdtwallet_address: Option<String>,
    pub bnbwallet_balance: BigDecimal,
    pub bnbwallet_address: Option<String>,
    pub xrpwallet_balance: BigDecimal,
    pub xrpwallet_address: Option<String>,
    pub adawallet_balance: BigDecimal,
    pub adawallet_address: Option<String>,
    pub solwallet_balance: BigDecimal,
    pub solwallet_address: Option<String>,
    pub dogewallet_balance: BigDecimal,
    pub dogewallet_address: Option<String>,
    pub ltcwallet_balance: BigDecimal,
    pub ltcwallet_address: Option<String>,
    pub trxwallet_balance: BigDecimal,
    pub trxwallet_address: Option<String>,
}

impl Profile {
    pub fn get_by_id(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<Profile, diesel::result::Error> {
        profiles::table.find(id).first(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_profile: &NewProfile,
    ) -> Result<Profile, diesel::result::Error> {
        diesel::insert_into(profiles::table)
            .values(new_profile)
            .get_result(conn)
    }

    pub fn update(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        update: &UpdateProfile,
    ) -> Result<Profile, diesel::result::Error> {
        diesel::update(profiles::table.find(id))
            .set(update)
            .get_result(conn)
    }

    pub fn update_email(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        email: &str,
    ) -> Result<Profile, diesel::result::Error> {
        diesel::update(profiles::table.find(id))
            .set(profiles::dsl::email.eq(email))
            .get_result(conn)
    }

    /// Writes a single `{symbol}wallet_address` column, nothing else on the
    /// row is touched.
    pub fn update_wallet_address(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        symbol: AssetSymbol,
        address: &str,
    ) -> Result<Profile, diesel::result::Error> {
        let target = profiles::table.find(id);

        match symbol {
            AssetSymbol::Btc => diesel::update(target)
                .set(profiles::dsl::btcwallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Eth => diesel::update(target)
                .set(profiles::dsl::ethwallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Usdt => diesel::update(target)
                .set(profiles::dsl::usdtwallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Bnb => diesel::update(target)
                .set(profiles::dsl::bnbwallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Xrp => diesel::update(target)
                .set(profiles::dsl::xrpwallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Ada => diesel::update(target)
                .set(profiles::dsl::adawallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Sol => diesel::update(target)
                .set(profiles::dsl::solwallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Doge => diesel::update(target)
                .set(profiles::dsl::dogewallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Ltc => diesel::update(target)
                .set(profiles::dsl::ltcwallet_address.eq(address))
                .get_result(conn),
            AssetSymbol::Trx => diesel::update(target)
                .set(profiles::dsl::trxwallet_address.eq(address))
                .get_result(conn),
        }
    }

    fn asset_columns(&self) -> [(AssetSymbol, &BigDecimal, &Option<String>); 10] {
        [
            (
                AssetSymbol::Btc,
                &self.btcwallet_balance,
                &self.btcwallet_address,
            ),
            (
                AssetSymbol::Eth,
                &self.ethwallet_balance,
                &self.ethwallet_address,
            ),
            (
                AssetSymbol::Usdt,
                &self.usdtwallet_balance,
                &self.usdtwallet_address,
            ),
            (
                AssetSymbol::Bnb,
                &self.bnbwallet_balance,
                &self.bnbwallet_address,
            ),
            (
                AssetSymbol::Xrp,
                &self.xrpwallet_balance,
                &self.xrpwallet_address,
            ),
            (
                AssetSymbol::Ada,
                &self.adawallet_balance,
                &self.adawallet_address,
            ),
            (
                AssetSymbol::Sol,
                &self.solwallet_balance,
                &self.solwallet_address,
            ),
            (
                AssetSymbol::Doge,
                &self.dogewallet_balance,
                &self.dogewallet_address,
            ),
            (
                AssetSymbol::Ltc,
                &self.ltcwallet_balance,
                &self.ltcwallet_address,
            ),
            (
                AssetSymbol::Trx,
                &self.trxwallet_balance,
                &self.trxwallet_address,
            ),
        ]
    }

    /// Full projection of the per-asset columns keyed by their store column
    /// names. Balances render as strings, absent addresses as null.
    pub fn wallet_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        for (symbol, balance, address) in self.asset_columns().iter() {
            fields.insert(
                symbol.balance_column(),
                Value::String(balance.to_string()),
            );
            fields.insert(
                symbol.address_column(),
                address
                    .as_ref()
                    .map(|address| Value::String(address.clone()))
                    .unwrap_or(Value::Null),
            );
        }

        fields
    }
}

#[derive(Insertable)]
#[table_name = "profiles"]
pub struct NewProfile {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub role: i16,
    pub referral_code: String,
    pub referred_by: Option<String>,
}

#[derive(AsChangeset, Debug)]
#[table_name = "profiles"]
pub struct UpdateProfile {
    pub display_name: Option<String>,
    pub phone: Option<String>,
}
