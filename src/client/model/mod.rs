pub mod cache;
pub mod error;
pub mod toast;
pub mod user;
