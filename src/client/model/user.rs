use crate::model::user::UserDto;

/// Session user as known to the client.
#[derive(Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether `/api/auth/user` has answered yet.
    pub fetched: bool,
}

impl UserState {
    pub fn fetched(user: Option<UserDto>) -> Self {
        Self {
            user,
            fetched: true,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
