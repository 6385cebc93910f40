//! Role-name normalization and the authorization predicate.
//!
//! Backend authorities arrive as `ROLE_`-prefixed uppercase strings
//! (`ROLE_ADMIN`, `ROLE_MEDICO`, ...). UI code refers to them loosely
//! ("admin", "Medico"); both spellings must match the same authority.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

/// Authority prefix used by the backend's security layer.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Canonical form of a role name: uppercase, `ROLE_`-prefixed.
///
/// An empty name normalizes to the bare prefix, which matches no real
/// authority; callers get "no access" rather than an error.
pub fn normalize_role(name: &str) -> String {
    let upper = name.to_uppercase();
    if upper.starts_with(ROLE_PREFIX) {
        upper
    } else {
        format!("{ROLE_PREFIX}{upper}")
    }
}

/// True when `name` matches one of `roles`, case-insensitively and
/// regardless of whether either side carries the prefix.
pub fn has_role(roles: &[String], name: &str) -> bool {
    let wanted = normalize_role(name);
    roles.iter().any(|role| role.to_uppercase() == wanted)
}
