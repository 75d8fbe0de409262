use serde::{Deserialize, Serialize};

/// A guild the logged-in user is allowed to manage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GuildDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub owner: bool,
}

impl GuildDto {
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|hash| {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!(
                "https://cdn.discordapp.com/icons/{}/{}.{}?size=128",
                self.id, hash, ext
            )
        })
    }

    /// Initials shown in place of a missing icon, Discord style.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(3)
            .collect()
    }
}

/// Guild summary returned by the external API.
///
/// A `404` from the API for this resource means the bot has not been added to the guild.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct GuildOverviewDto {
    pub name: Option<String>,
    pub member_count: Option<u64>,
    pub premium: bool,
    pub plan_name: Option<String>,
    pub open_tickets: Option<u64>,
    pub pending_verifications: Option<u64>,
    pub sanctions_last_week: Option<u64>,
    pub raids_blocked: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChannelDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: u8,
}

impl ChannelDto {
    /// Text and announcement channels, the only ones a setting can point at.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, 0 | 5)
    }

    /// Category channels, used as the parent for ticket channels.
    pub fn is_category(&self) -> bool {
        self.kind == 4
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoleDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub managed: bool,
}

impl RoleDto {
    pub fn color_hex(&self) -> Option<String> {
        (self.color != 0).then(|| format!("#{:06x}", self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild(name: &str, icon: Option<&str>) -> GuildDto {
        GuildDto {
            id: 41771983423143937,
            name: name.to_string(),
            icon: icon.map(str::to_string),
            owner: false,
        }
    }

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(guild("Fluffy Paws Den", None).initials(), "FPD");
        assert_eq!(guild("solo", None).initials(), "s");
        assert_eq!(guild("a b c d e", None).initials(), "abc");
    }

    #[test]
    fn icon_url_uses_gif_for_animated_icons() {
        assert!(guild("x", Some("a_abc")).icon_url().unwrap().ends_with("a_abc.gif?size=128"));
        assert!(guild("x", Some("abc")).icon_url().unwrap().ends_with("abc.png?size=128"));
        assert!(guild("x", None).icon_url().is_none());
    }

    #[test]
    fn overview_tolerates_partial_payload() {
        let overview: GuildOverviewDto =
            serde_json::from_str(r#"{"member_count": 1200, "unknown": true}"#).unwrap();

        assert_eq!(overview.member_count, Some(1200));
        assert!(!overview.premium);
        assert!(overview.plan_name.is_none());
    }

    #[test]
    fn role_color_hex_skips_default_color() {
        let role: RoleDto = serde_json::from_str(r#"{"id":"1","name":"Mods","color":16711680}"#).unwrap();
        assert_eq!(role.color_hex().as_deref(), Some("#ff0000"));

        let plain: RoleDto = serde_json::from_str(r#"{"id":"2","name":"everyone"}"#).unwrap();
        assert!(plain.color_hex().is_none());
    }
}
