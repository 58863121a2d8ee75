pub mod pagination;
pub mod profile;
pub mod secret_phrase;
pub mod transaction;
