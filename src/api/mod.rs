pub mod admin;
pub mod authentication;
pub mod models;
pub mod pages;
pub mod profile;
pub mod secret_phrase;
pub mod transactions;
pub mod wallets;
