use serenity::all::Permissions;

/// Whether a member with these guild-level flags may configure the bot.
///
/// Owners always can; otherwise `ADMINISTRATOR` or `MANAGE_GUILD` is required.
pub fn can_manage_guild(owner: bool, permissions: Permissions) -> bool {
    owner
        || permissions.contains(Permissions::ADMINISTRATOR)
        || permissions.contains(Permissions::MANAGE_GUILD)
}

/// Parses the decimal permission string Discord returns for partial guilds.
///
/// Unknown bits are dropped and an unparsable value yields no permissions.
pub fn parse_permissions(raw: &str) -> Permissions {
    raw.trim()
        .parse::<u64>()
        .map(Permissions::from_bits_truncate)
        .unwrap_or_else(|_| Permissions::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_can_manage_without_flags() {
        assert!(can_manage_guild(true, Permissions::empty()));
    }

    #[test]
    fn administrator_or_manage_guild_grants_access() {
        assert!(can_manage_guild(false, Permissions::ADMINISTRATOR));
        assert!(can_manage_guild(false, Permissions::MANAGE_GUILD));
        assert!(can_manage_guild(
            false,
            Permissions::MANAGE_GUILD | Permissions::SEND_MESSAGES
        ));
    }

    #[test]
    fn moderation_flags_alone_do_not_grant_access() {
        let perms = Permissions::KICK_MEMBERS
            | Permissions::BAN_MEMBERS
            | Permissions::MANAGE_MESSAGES
            | Permissions::MANAGE_ROLES;
        assert!(!can_manage_guild(false, perms));
    }

    #[test]
    fn parses_discord_permission_strings() {
        assert_eq!(parse_permissions("8"), Permissions::ADMINISTRATOR);
        assert_eq!(parse_permissions("32"), Permissions::MANAGE_GUILD);
        assert_eq!(parse_permissions("garbage"), Permissions::empty());
        assert_eq!(parse_permissions(""), Permissions::empty());
    }
}
