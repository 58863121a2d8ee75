use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{
    web::{self, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;

use crate::{
    api::models::{
        asset::{wallet_address_fields, AssetSymbol},
        error::APIError,
        profile::Profile,
    },
    auth::get_current_user,
    db::models::profile::Profile as DBProfile,
    DbPool,
};

#[derive(Deserialize)]
pub struct PathInfo {
    symbol: String,
}

#[derive(Deserialize)]
pub struct SaveWalletAddress {
    address: String,
}

// Addresses are persisted as entered, the store column is the only thing
// the symbol selects.
pub async fn wallet(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    body: web::Json<SaveWalletAddress>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session)?;
    let user_id = current_user.id;
    let symbol = AssetSymbol::try_from(path.symbol.as_str())?;
    let address = body.into_inner().address;

    let conn = pool.get()?;
    let db_profile = web::block(move || {
        DBProfile::update_wallet_address(&conn, &user_id, symbol, &address)
    })
    .await?;

    info!("User {} saved a {} wallet address", user_id, symbol);

    let projection =
        serde_json::to_value(Profile::try_from(db_profile)?).map_err(|error| APIError::Internal {
            description: error.to_string(),
        })?;

    Ok(HttpResponse::Ok().json(wallet_address_fields(&projection)))
}
