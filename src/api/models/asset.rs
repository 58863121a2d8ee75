use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::APIError;

pub const WALLET_ADDRESS_SUFFIX: &str = "wallet_address";
pub const WALLET_BALANCE_SUFFIX: &str = "wallet_balance";

/// The fixed set of assets a profile row carries columns for. Every symbol
/// maps to exactly one `{symbol}wallet_address` / `{symbol}wallet_balance`
/// column pair on the profiles table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum AssetSymbol {
    Btc,
    Eth,
    Usdt,
    Bnb,
    Xrp,
    Ada,
    Sol,
    Doge,
    Ltc,
    Trx,
}

impl AssetSymbol {
    pub fn all() -> [AssetSymbol; 10] {
        [
            AssetSymbol::Btc,
            AssetSymbol::Eth,
            AssetSymbol::Usdt,
            AssetSymbol::Bnb,
            AssetSymbol::Xrp,
            AssetSymbol::Ada,
            AssetSymbol::Sol,
            AssetSymbol::Doge,
            AssetSymbol::Ltc,
            AssetSymbol::Trx,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            AssetSymbol::Btc => "btc",
            AssetSymbol::Eth => "eth",
            AssetSymbol::Usdt => "usdt",
            AssetSymbol::Bnb => "bnb",
            AssetSymbol::Xrp => "xrp",
            AssetSymbol::Ada => "ada",
            AssetSymbol::Sol => "sol",
            AssetSymbol::Doge => "doge",
            AssetSymbol::Ltc => "ltc",
            AssetSymbol::Trx => "trx",
        }
    }

    pub fn address_column(&self) -> String {
        format!("{}{}", self.code(), WALLET_ADDRESS_SUFFIX)
    }

    pub fn balance_column(&self) -> String {
        format!("{}{}", self.code(), WALLET_BALANCE_SUFFIX)
    }
}

impl std::fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::convert::TryFrom<&str> for AssetSymbol {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "btc" => Ok(AssetSymbol::Btc),
            "eth" => Ok(AssetSymbol::Eth),
            "usdt" => Ok(AssetSymbol::Usdt),
            "bnb" => Ok(AssetSymbol::Bnb),
            "xrp" => Ok(AssetSymbol::Xrp),
            "ada" => Ok(AssetSymbol::Ada),
            "sol" => Ok(AssetSymbol::Sol),
            "doge" => Ok(AssetSymbol::Doge),
            "ltc" => Ok(AssetSymbol::Ltc),
            "trx" => Ok(AssetSymbol::Trx),
            _ => Err(APIError::InvalidValue {
                description: format!("asset symbol cannot be {}", value),
            }),
        }
    }
}

/// Filters a full profile projection down to the wallet address fields.
/// Balance and identity keys are dropped, only keys ending in the wallet
/// address suffix survive.
pub fn wallet_address_fields(projection: &Value) -> Map<String, Value> {
    match projection.as_object() {
        Some(object) => object
            .iter()
            .filter(|(key, _value)| key.ends_with(WALLET_ADDRESS_SUFFIX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        None => Map::new(),
    }
}

#[cfg(test)]
mod test {
    use std::convert::TryFrom;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(AssetSymbol::Btc.address_column(), "btcwallet_address");
        assert_eq!(AssetSymbol::Btc.balance_column(), "btcwallet_balance");
        assert_eq!(AssetSymbol::Usdt.address_column(), "usdtwallet_address");
        assert_eq!(AssetSymbol::Trx.balance_column(), "trxwallet_balance");
    }

    #[test]
    fn test_column_names_are_unique() {
        let mut columns: Vec<String> = AssetSymbol::all()
            .iter()
            .map(|symbol| symbol.address_column())
            .collect();
        columns.sort();
        columns.dedup();

        assert_eq!(columns.len(), 10);
    }

    #[test]
    fn test_parse() {
        assert_eq!(AssetSymbol::try_from("eth").unwrap(), AssetSymbol::Eth);
        assert!(AssetSymbol::try_from("shib").is_err());
        assert!(AssetSymbol::try_from("BTC").is_err());
    }

    #[test]
    fn test_wallet_address_fields() {
        let projection = json!({
            "display_name": "Jane",
            "balance": "100.5",
            "btcwallet_address": "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            "btcwallet_balance": "0.5",
            "ethwallet_address": null,
        });

        let fields = wallet_address_fields(&projection);

        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("btcwallet_address"));
        assert!(fields.contains_key("ethwallet_address"));
        assert!(!fields.contains_key("btcwallet_balance"));
        assert!(!fields.contains_key("display_name"));
    }

    #[test]
    fn test_wallet_address_fields_non_object() {
        let fields = wallet_address_fields(&json!("not an object"));
        assert!(fields.is_empty());
    }
}
