pub mod guild;
pub mod login;
pub mod not_found;
pub mod servers;

pub use login::Login;
pub use not_found::NotFound;
pub use servers::Servers;
