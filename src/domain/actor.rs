//! Actor domain model
//!
//! An actor is a facility user: staff, trustee or founder. The optional
//! higher-authority flag is meaningful only for staff and grants them
//! health-record approval rights independent of the role tier.

use super::ids::ActorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role tier of a facility user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Day-to-day care staff
    Staff,
    /// Trustee of the facility
    Trustee,
    /// Founder, with full administrative rights
    Founder,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Staff => "staff",
            Role::Trustee => "trustee",
            Role::Founder => "founder",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staff" => Ok(Role::Staff),
            "trustee" => Ok(Role::Trustee),
            "founder" => Ok(Role::Founder),
            other => Err(format!(
                "Invalid role: {other}. Must be one of: staff, trustee, founder"
            )),
        }
    }
}

/// A facility user
///
/// # Examples
///
/// ```
/// use ashraya::domain::actor::{ActorBuilder, Role};
///
/// let actor = ActorBuilder::new()
///     .id("3")
///     .email("staff@oldhome.example")
///     .name("Ravi Shankar")
///     .role(Role::Staff)
///     .higher_authority(true)
///     .build()
///     .unwrap();
///
/// assert!(actor.is_higher_authority);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier
    pub id: ActorId,

    /// Login email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Role tier
    pub role: Role,

    /// Higher-authority flag; meaningful only when `role` is [`Role::Staff`]
    #[serde(default)]
    pub is_higher_authority: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Actor {
    /// Creates a new builder for constructing an Actor
    pub fn builder() -> ActorBuilder {
        ActorBuilder::default()
    }

    /// Short human-readable description for logs and error messages
    pub fn describe(&self) -> String {
        format!("{} {}", self.role, self.name)
    }
}

/// Builder for constructing Actor instances
#[derive(Debug, Default)]
pub struct ActorBuilder {
    id: Option<ActorId>,
    email: Option<String>,
    name: Option<String>,
    role: Option<Role>,
    is_higher_authority: bool,
    created_at: Option<DateTime<Utc>>,
}

impl ActorBuilder {
    /// Creates a new ActorBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the actor id; falls back to a generated id at build time
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = ActorId::new(id).ok();
        self
    }

    /// Sets the email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the role
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the higher-authority flag
    ///
    /// Ignored at build time unless the role is staff.
    pub fn higher_authority(mut self, flag: bool) -> Self {
        self.is_higher_authority = flag;
        self
    }

    /// Sets the creation timestamp; defaults to now
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Builds the Actor
    ///
    /// # Errors
    ///
    /// Returns an error if email, name or role is missing
    pub fn build(self) -> Result<Actor, String> {
        let role = self.role.ok_or("role is required")?;
        Ok(Actor {
            id: self.id.unwrap_or_else(ActorId::generate),
            email: self.email.ok_or("email is required")?,
            name: self.name.ok_or("name is required")?,
            role,
            // The flag has no meaning outside the staff tier.
            is_higher_authority: self.is_higher_authority && role == Role::Staff,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_builder() {
        let actor = ActorBuilder::new()
            .id("1")
            .email("founder@oldhome.example")
            .name("Dr. Ramesh Kumar")
            .role(Role::Founder)
            .build()
            .unwrap();

        assert_eq!(actor.id.as_str(), "1");
        assert_eq!(actor.role, Role::Founder);
        assert!(!actor.is_higher_authority);
    }

    #[test]
    fn test_actor_builder_missing_field() {
        let result = ActorBuilder::new().email("x@y.example").build();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("role is required"));
    }

    #[test]
    fn test_higher_authority_only_for_staff() {
        let trustee = ActorBuilder::new()
            .email("trustee@oldhome.example")
            .name("Mrs. Lakshmi Devi")
            .role(Role::Trustee)
            .higher_authority(true)
            .build()
            .unwrap();
        assert!(!trustee.is_higher_authority);

        let staff = ActorBuilder::new()
            .email("staff@oldhome.example")
            .name("Ravi Shankar")
            .role(Role::Staff)
            .higher_authority(true)
            .build()
            .unwrap();
        assert!(staff.is_higher_authority);
    }

    #[test]
    fn test_actor_generated_id_when_absent() {
        let actor = ActorBuilder::new()
            .email("a@b.example")
            .name("A")
            .role(Role::Staff)
            .build()
            .unwrap();
        assert!(!actor.id.as_str().is_empty());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
        assert_eq!("Trustee".parse::<Role>().unwrap(), Role::Trustee);
        assert_eq!("FOUNDER".parse::<Role>().unwrap(), Role::Founder);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Trustee).unwrap(), "\"trustee\"");
        let role: Role = serde_json::from_str("\"founder\"").unwrap();
        assert_eq!(role, Role::Founder);
    }
}
