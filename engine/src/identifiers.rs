use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores are keyed by email, so two players sharing a display name stay apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl PlayerIdentity {
    pub fn new(name: &str, email: &str, avatar: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            avatar: avatar.to_string(),
        }
    }

    pub fn player_id(&self) -> PlayerId {
        PlayerId::new(self.email.to_lowercase())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Player name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Player email is required".to_string());
        }
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| {
                !user.is_empty()
                    && !email.contains(char::is_whitespace)
                    && domain
                        .split_once('.')
                        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            });
        if !valid_email {
            return Err(format!("Player email '{}' is not valid", email));
        }
        Ok(())
    }
}

impl Default for PlayerIdentity {
    fn default() -> Self {
        Self::new("Player", "player@localhost.local", "snake1")
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_is_lowercased_email() {
        let player = PlayerIdentity::new("Ana", " Ana@Example.com ", "snake2");
        assert_eq!(player.player_id().as_str(), "ana@example.com");
        assert_eq!(player.email, "Ana@Example.com");
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let player = PlayerIdentity::new("  ", "a@b.c", "snake1");
        assert!(player.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        for email in ["", "no-at-sign", "@b.c", "a@nodot", "a@.c", "a b@c.d"] {
            let player = PlayerIdentity::new("Ana", email, "snake1");
            assert!(player.validate().is_err(), "{} should be rejected", email);
        }
    }

    #[test]
    fn test_default_player_is_valid() {
        assert!(PlayerIdentity::default().validate().is_ok());
    }
}
