use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(id) => Ok(id),
        Err(source) => Err(InternalError::ParseStringId { value, source }.into()),
    }
}

/// Validates an id taken from the request path before it is put into an upstream URL.
///
/// Ids of tickets, sanctions and verifications are opaque to the dashboard but only
/// ever consist of ASCII letters, digits, `-` and `_`.
///
/// # Returns
/// - `Ok(&str)` - The id unchanged
/// - `Err(AppError::BadRequest)` - Empty, too long, or containing other characters
pub fn validate_path_id(value: &str) -> Result<&str, AppError> {
    let valid = !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(value)
    } else {
        Err(AppError::BadRequest(format!("Invalid id '{}'", value)))
    }
}
