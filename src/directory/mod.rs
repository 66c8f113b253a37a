//! User directory and session identity
//!
//! Holds the facility's user accounts and performs the demo login that
//! stands in for real authentication. A successful login yields a
//! [`Session`] carrying the authenticated actor, which callers pass into
//! store mutators. User management (adding accounts, toggling the staff
//! higher-authority flag) is founder-only.

pub mod secret;

use crate::auth::can_manage_users;
use crate::domain::{Actor, ActorBuilder, ActorId, AshrayaError, Result, Role};
use chrono::{TimeZone, Utc};
use secret::{matches, password, Password};

/// An authenticated session
///
/// Dropping the session is logout; there is no server-side state.
#[derive(Debug, Clone)]
pub struct Session {
    actor: Actor,
}

impl Session {
    /// The authenticated actor
    pub fn actor(&self) -> &Actor {
        &self.actor
    }
}

struct Account {
    actor: Actor,
    password: Password,
}

/// Input for creating a new user account
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Role tier
    pub role: Role,
    /// Higher-authority flag; honored only for staff
    pub is_higher_authority: bool,
}

/// Directory of facility user accounts
pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl UserDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Creates the demo directory: founder, trustee, one higher-authority
    /// staff member and one plain staff member
    pub fn seeded() -> Self {
        Self {
            accounts: vec![
                seed_account(
                    "1",
                    "founder@oldhome.example",
                    "Dr. Ramesh Kumar",
                    Role::Founder,
                    false,
                    (2020, 1, 1),
                    "founder123",
                ),
                seed_account(
                    "2",
                    "trustee@oldhome.example",
                    "Mrs. Lakshmi Devi",
                    Role::Trustee,
                    false,
                    (2021, 3, 15),
                    "trustee123",
                ),
                seed_account(
                    "3",
                    "staff@oldhome.example",
                    "Ravi Shankar",
                    Role::Staff,
                    true,
                    (2022, 6, 1),
                    "staff123",
                ),
                seed_account(
                    "4",
                    "staff2@oldhome.example",
                    "Priya Sharma",
                    Role::Staff,
                    false,
                    (2023, 1, 10),
                    "staff123",
                ),
            ],
        }
    }

    /// All actors in the directory
    pub fn actors(&self) -> Vec<&Actor> {
        self.accounts.iter().map(|a| &a.actor).collect()
    }

    /// Looks up an actor by id
    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.accounts
            .iter()
            .map(|a| &a.actor)
            .find(|a| &a.id == id)
    }

    /// Authenticates a user
    ///
    /// Email matching is case-insensitive; the password and the declared
    /// role must both match the account. Every failure mode returns the
    /// same [`AshrayaError::InvalidCredentials`] so login cannot be used
    /// to probe which emails exist.
    pub fn login(&self, email: &str, pass: &str, role: Role) -> Result<Session> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.actor.email.eq_ignore_ascii_case(email.trim()));

        match account {
            Some(a) if matches(&a.password, pass) && a.actor.role == role => {
                tracing::info!(actor_id = %a.actor.id, role = %a.actor.role, "Login succeeded");
                Ok(Session {
                    actor: a.actor.clone(),
                })
            }
            _ => {
                tracing::warn!(email = %email, "Login failed");
                Err(AshrayaError::InvalidCredentials)
            }
        }
    }

    /// Adds a user account; founder-only
    ///
    /// # Errors
    ///
    /// - [`AshrayaError::Forbidden`] when the session actor is not a founder
    /// - [`AshrayaError::Validation`] for blank fields or a duplicate email
    pub fn add_user(&mut self, session: &Session, user: NewUser, pass: &str) -> Result<&Actor> {
        self.require_admin(session, "manage users")?;

        if user.email.trim().is_empty() || user.name.trim().is_empty() {
            return Err(AshrayaError::Validation(
                "email and name are required".to_string(),
            ));
        }
        if self
            .accounts
            .iter()
            .any(|a| a.actor.email.eq_ignore_ascii_case(user.email.trim()))
        {
            return Err(AshrayaError::Validation(format!(
                "email already registered: {}",
                user.email
            )));
        }

        let actor = ActorBuilder::new()
            .email(user.email.trim().to_string())
            .name(user.name)
            .role(user.role)
            .higher_authority(user.is_higher_authority)
            .build()
            .map_err(AshrayaError::Validation)?;

        tracing::info!(
            actor_id = %actor.id,
            role = %actor.role,
            added_by = %session.actor().id,
            "User account created"
        );

        self.accounts.push(Account {
            actor,
            password: password(pass),
        });
        Ok(&self.accounts.last().expect("just pushed").actor)
    }

    /// Sets the higher-authority flag on a staff account; founder-only
    ///
    /// # Errors
    ///
    /// - [`AshrayaError::Forbidden`] when the session actor is not a founder
    /// - [`AshrayaError::UserNotFound`] for an unknown id
    /// - [`AshrayaError::Validation`] when the target is not staff
    pub fn set_higher_authority(
        &mut self,
        session: &Session,
        actor_id: &ActorId,
        flag: bool,
    ) -> Result<&Actor> {
        self.require_admin(session, "manage user authority")?;

        let account = self
            .accounts
            .iter_mut()
            .find(|a| &a.actor.id == actor_id)
            .ok_or_else(|| AshrayaError::UserNotFound(actor_id.to_string()))?;

        if account.actor.role != Role::Staff {
            return Err(AshrayaError::Validation(format!(
                "higher authority applies only to staff, not {}",
                account.actor.role
            )));
        }

        account.actor.is_higher_authority = flag;
        tracing::info!(
            actor_id = %account.actor.id,
            higher_authority = flag,
            changed_by = %session.actor().id,
            "Staff authority updated"
        );
        Ok(&account.actor)
    }

    fn require_admin(&self, session: &Session, action: &str) -> Result<()> {
        if can_manage_users(session.actor().role) {
            Ok(())
        } else {
            tracing::warn!(
                actor_id = %session.actor().id,
                role = %session.actor().role,
                action = action,
                "Authorization denied"
            );
            Err(AshrayaError::forbidden(session.actor().describe(), action))
        }
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_account(
    id: &str,
    email: &str,
    name: &str,
    role: Role,
    higher_authority: bool,
    created: (i32, u32, u32),
    pw: &str,
) -> Account {
    let (year, month, day) = created;
    Account {
        actor: ActorBuilder::new()
            .id(id)
            .email(email)
            .name(name)
            .role(role)
            .higher_authority(higher_authority)
            .created_at(
                Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
                    .single()
                    .expect("valid seed timestamp"),
            )
            .build()
            .expect("valid seed account"),
        password: password(pw),
    }
}
