//! Well-known role name constants carried in JWT claims.
//!
//! Derived from `users.is_staff`; there is no roles table.

pub const ROLE_STAFF: &str = "staff";
pub const ROLE_CITIZEN: &str = "citizen";

/// Resolve the role name for a user row.
pub fn role_for(is_staff: bool) -> &'static str {
    if is_staff {
        ROLE_STAFF
    } else {
        ROLE_CITIZEN
    }
}
