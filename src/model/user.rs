use serde::{Deserialize, Serialize};

/// The logged-in Discord user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    pub name: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

impl UserDto {
    /// Display name if set, otherwise the unique username.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.name)
    }

    /// CDN URL for the user's avatar, falling back to Discord's default avatar.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png?size=64",
                self.discord_id, hash
            ),
            None => format!(
                "https://cdn.discordapp.com/embed/avatars/{}.png",
                (self.discord_id >> 22) % 6
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(global_name: Option<&str>, avatar: Option<&str>) -> UserDto {
        UserDto {
            discord_id: 80351110224678912,
            name: "nelly".to_string(),
            global_name: global_name.map(str::to_string),
            avatar: avatar.map(str::to_string),
        }
    }

    #[test]
    fn display_name_prefers_global_name() {
        assert_eq!(user(Some("Nelly"), None).display_name(), "Nelly");
        assert_eq!(user(None, None).display_name(), "nelly");
    }

    #[test]
    fn avatar_url_uses_hash_or_default() {
        assert_eq!(
            user(None, Some("8342729096ea3675442027381ff50dfe")).avatar_url(),
            "https://cdn.discordapp.com/avatars/80351110224678912/8342729096ea3675442027381ff50dfe.png?size=64"
        );
        assert!(user(None, None)
            .avatar_url()
            .starts_with("https://cdn.discordapp.com/embed/avatars/"));
    }
}
