pub mod asset;
pub mod authentication;
pub mod common;
pub mod error;
pub mod profile;
pub mod secret_phrase;
pub mod transaction;
