pub mod auth;
pub mod marine;
