use std::convert::{TryFrom, TryInto};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::error::APIError;
use crate::db::models::profile::Profile as DBProfile;

#[derive(Debug, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub referral_code: String,
    pub referred_by: Option<String>,
    pub balance: String,
    #[serde(flatten)]
    pub wallets: Map<String, Value>,
}

impl TryFrom<DBProfile> for Profile {
    type Error = APIError;

    fn try_from(value: DBProfile) -> Result<Self, Self::Error> {
        let wallets = value.wallet_fields();

        Ok(Profile {
            id: value.id,
            created_at: value.created_at,
            updated_at: value.updated_at,
            display_name: value.display_name,
            email: value.email,
            phone: value.phone,
            role: value.role.try_into()?,
            referral_code: value.referral_code,
            referred_by: value.referred_by,
            balance: value.balance.to_string(),
            wallets,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member = 0,
    Admin = 1,
}

const MEMBER: &'static str = "member";
const ADMIN: &'static str = "admin";

impl TryFrom<&str> for UserRole {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            MEMBER => Ok(UserRole::Member),
            ADMIN => Ok(UserRole::Admin),
            _ => Err(APIError::InvalidValue {
                description: format!("user role cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for UserRole {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::Member),
            1 => Ok(UserRole::Admin),
            _ => Err(APIError::InvalidValue {
                description: format!("user role cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for UserRole {
    fn into(self) -> &'static str {
        match self {
            UserRole::Member => MEMBER,
            UserRole::Admin => ADMIN,
        }
    }
}

impl Into<i16> for UserRole {
    fn into(self) -> i16 {
        match self {
            UserRole::Member => 0,
            UserRole::Admin => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use std::convert::TryFrom;

    use super::*;

    #[test]
    fn test_user_role_conversions() {
        assert_eq!(UserRole::try_from(0).unwrap(), UserRole::Member);
        assert_eq!(UserRole::try_from(1).unwrap(), UserRole::Admin);
        assert!(UserRole::try_from(2).is_err());

        assert_eq!(UserRole::try_from("admin").unwrap(), UserRole::Admin);
        assert!(UserRole::try_from("superuser").is_err());

        let value: i16 = UserRole::Admin.into();
        assert_eq!(value, 1);
    }
}
