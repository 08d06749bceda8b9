//! JWT claim types and role-based authorization checks

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use crate::error::AppError;

/// Application roles carried in the token's client-scoped role claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Map a role claim string to an application role.
    ///
    /// Unknown strings yield `None`; callers ignore them rather than fail the
    /// whole request.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// Raw claims decoded from a verified bearer token
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Principal name claim
    pub preferred_username: Option<String>,
    /// Per-client role assignments, keyed by client identifier
    #[serde(default)]
    pub resource_access: HashMap<String, ResourceAccess>,
    pub exp: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Roles granted to this token for the given client.
    ///
    /// A missing or malformed `resource_access` entry is an empty role set,
    /// not an error; authorization then fails at the role check.
    pub fn roles_for(&self, client_id: &str) -> BTreeSet<Role> {
        self.resource_access
            .get(client_id)
            .map(|access| {
                access
                    .roles
                    .iter()
                    .filter_map(|r| Role::parse(r))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn principal_name(&self) -> &str {
        self.preferred_username.as_deref().unwrap_or("unknown")
    }
}

/// Authenticated request identity: principal name plus granted roles
#[derive(Debug, Clone)]
pub struct Principal {
    pub name: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    pub fn from_claims(claims: &Claims, client_id: &str) -> Self {
        Self {
            name: claims.principal_name().to_string(),
            roles: claims.roles_for(client_id),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Require at least one of the listed roles.
    pub fn require_any(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.iter().any(|role| self.has_role(*role)) {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "Requires one of the roles: {}",
                allowed
                    .iter()
                    .map(Role::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT_ID: &str = "bookstore-client-id";

    fn claims(json: serde_json::Value) -> Claims {
        serde_json::from_value(json).expect("claims should deserialize")
    }

    #[test]
    fn roles_are_scoped_to_the_configured_client() {
        let claims = claims(serde_json::json!({
            "preferred_username": "alice",
            "resource_access": {
                "bookstore-client-id": {"roles": ["ADMIN"]},
                "other-client": {"roles": ["USER"]}
            },
            "exp": 4102444800i64
        }));

        let roles = claims.roles_for(CLIENT_ID);
        assert!(roles.contains(&Role::Admin));
        assert!(!roles.contains(&Role::User));
    }

    #[test]
    fn unknown_role_strings_are_ignored() {
        let claims = claims(serde_json::json!({
            "preferred_username": "bob",
            "resource_access": {
                "bookstore-client-id": {"roles": ["USER", "SUPERVISOR", ""]}
            },
            "exp": 4102444800i64
        }));

        assert_eq!(claims.roles_for(CLIENT_ID), BTreeSet::from([Role::User]));
    }

    #[test]
    fn missing_resource_access_yields_no_roles() {
        let claims = claims(serde_json::json!({
            "preferred_username": "carol",
            "exp": 4102444800i64
        }));

        assert!(claims.roles_for(CLIENT_ID).is_empty());

        let principal = Principal::from_claims(&claims, CLIENT_ID);
        assert!(principal.require_any(&[Role::User, Role::Admin]).is_err());
    }

    #[test]
    fn require_any_accepts_any_listed_role() {
        let claims = claims(serde_json::json!({
            "preferred_username": "dave",
            "resource_access": {
                "bookstore-client-id": {"roles": ["USER"]}
            },
            "exp": 4102444800i64
        }));
        let principal = Principal::from_claims(&claims, CLIENT_ID);

        assert!(principal.require_any(&[Role::User, Role::Admin]).is_ok());
        assert!(principal.require_any(&[Role::Admin]).is_err());
    }

    #[test]
    fn principal_name_falls_back_when_claim_is_absent() {
        let claims = claims(serde_json::json!({"exp": 4102444800i64}));
        assert_eq!(claims.principal_name(), "unknown");
    }
}
