use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorDocument {
    pub id: String,
}

/// Identity of the account the archive belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    /// Full actor id, e.g. `https://mastodon.social/users/alice`.
    pub id: String,
    /// Instance base including the scheme, e.g. `https://mastodon.social`.
    pub domain: String,
    pub username: String,
}

impl Owner {
    pub fn from_actor_id(id: &str) -> Result<Self> {
        let (domain, username) = id
            .split_once("/users/")
            .ok_or_else(|| Error::InvalidProfile(format!("unexpected actor id: {}", id)))?;

        if username.is_empty() || username.contains('/') || !domain.contains("://") {
            return Err(Error::InvalidProfile(format!("unexpected actor id: {}", id)));
        }

        Ok(Self {
            id: id.to_string(),
            domain: domain.to_string(),
            username: username.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        self.domain
            .split_once("://")
            .map(|(_, host)| host)
            .unwrap_or(&self.domain)
    }

    /// Fediverse handle, `@name@host`.
    pub fn handle(&self) -> String {
        format!("@{}@{}", self.username, self.host())
    }
}

impl TryFrom<&ActorDocument> for Owner {
    type Error = Error;

    fn try_from(actor: &ActorDocument) -> Result<Self> {
        Owner::from_actor_id(&actor.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_from_actor_id() {
        let owner = Owner::from_actor_id("https://mastodon.social/users/alice").unwrap();
        assert_eq!(owner.domain, "https://mastodon.social");
        assert_eq!(owner.username, "alice");
        assert_eq!(owner.handle(), "@alice@mastodon.social");
    }

    #[test]
    fn test_owner_rejects_foreign_id_shape() {
        assert!(Owner::from_actor_id("https://example.com/@alice").is_err());
        assert!(Owner::from_actor_id("https://example.com/users/").is_err());
    }
}
