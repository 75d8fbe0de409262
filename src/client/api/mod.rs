#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod audit_log;
#[cfg(feature = "web")]
pub mod billing;
#[cfg(feature = "web")]
pub mod guild;
#[cfg(feature = "web")]
pub mod moderation;
#[cfg(feature = "web")]
pub mod settings;
#[cfg(feature = "web")]
pub mod ticket;
#[cfg(feature = "web")]
pub mod user;
#[cfg(feature = "web")]
pub mod verification;
