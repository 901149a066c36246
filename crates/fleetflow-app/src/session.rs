//! Session resolution

use fleetflow_domain::model::User;
use fleetflow_domain::EntityStore;
use fleetflow_types::AuthError;

/// Resolve login credentials to a user record
///
/// The identifier matches either the login handle or the user id; the secret
/// must match exactly. Both inputs are trimmed. The store does not enforce
/// handle uniqueness beyond id uniqueness, so the first match wins.
pub fn authenticate<'a>(
    store: &'a EntityStore,
    identifier: &str,
    secret: &str,
) -> Result<&'a User, AuthError> {
    let identifier = identifier.trim();
    let secret = secret.trim();
    store
        .users
        .iter()
        .find(|u| (u.login == identifier || u.id == identifier) && u.secret == secret)
        .ok_or(AuthError::InvalidCredentials)
}
