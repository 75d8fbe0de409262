use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// In-memory database connection, schema creation or session table migration failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The mock HTTP server could not bind a local port.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
