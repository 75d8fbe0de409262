use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value can't be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// A configured URL could not be turned into an OAuth2 endpoint.
    #[error("Invalid OAuth2 URL: {0}")]
    InvalidOAuthUrl(#[from] oauth2::url::ParseError),
}
