use std::str::FromStr;

/// The bot was historically deployed as two near-identical cron entries that
/// differed only in which dfx identity they signed with and how the message
/// was worded. A profile captures that pair of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Xbot,
    Icbot,
}

impl Profile {
    /// Name passed to `dfx --identity`.
    pub fn identity(self) -> &'static str {
        match self {
            Profile::Xbot => "xbot",
            Profile::Icbot => "icbot",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "xbot" => Ok(Profile::Xbot),
            "icbot" => Ok(Profile::Icbot),
            other => Err(format!("Unknown bot profile: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_profiles() {
        assert_eq!("xbot".parse::<Profile>().unwrap(), Profile::Xbot);
        assert_eq!("icbot".parse::<Profile>().unwrap(), Profile::Icbot);
    }

    #[test]
    fn rejects_unknown_profile() {
        assert!("slackbot".parse::<Profile>().is_err());
    }
}
