//! Actors and roles for QBoard.
//!
//! Role and user name are supplied by the caller; this core never
//! authenticates them against a user table.

use std::fmt;
use std::str::FromStr;

/// Role of the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Regular member.
    #[default]
    Member,
    /// Administrator; may modify any entity and accept answers.
    Admin,
}

impl Role {
    /// Convert role to its string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Check whether this role is the admin role.
    pub fn is_admin(&self) -> bool {
        *self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" | "user" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// Entities that carry an author user name.
pub trait Authored {
    /// The user name of the entity's author.
    fn author(&self) -> &str;
}

/// The user performing an action: user name plus role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// User name of the acting user.
    pub username: String,
    /// Role of the acting user.
    pub role: Role,
}

impl Actor {
    /// Create a new actor.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Create a member actor.
    pub fn member(username: impl Into<String>) -> Self {
        Self::new(username, Role::Member)
    }

    /// Create an admin actor.
    pub fn admin(username: impl Into<String>) -> Self {
        Self::new(username, Role::Admin)
    }

    /// Check whether this actor has the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if this actor may edit or delete the given entity.
    ///
    /// True iff the actor is an admin or authored the entity. Returns
    /// a plain bool; the caller decides how to surface a refusal.
    pub fn can_modify<E: Authored>(&self, entity: &E) -> bool {
        self.is_admin() || entity.author() == self.username
    }
}
