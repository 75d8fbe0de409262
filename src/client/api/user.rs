use crate::{
    client::{
        api::helper::{get, parse_optional_response, send_request},
        model::error::ApiError,
    },
    model::user::UserDto,
};

/// Returns the session user, `None` when not logged in.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let request = get("/api/auth/user");
    let response = send_request(request).await?;
    parse_optional_response(response).await
}
