//! Client API calls for auth endpoints.

use common::session::{AuthSession, User};
use dioxus::prelude::*;


#[server]
pub async fn login(username: String, password: String) -> Result<AuthSession, ServerFnError> {
    let x = backend::api::auth::login(username, password).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<(), ServerFnError> {
    let x = backend::api::auth::register(username, email, password).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

/// `Ok(None)` means the remote rejected the token; transport failures stay
/// errors so the caller can keep its stored mirror.
#[server]
pub async fn validate_session(token: String) -> Result<Option<User>, ServerFnError> {
    let x = backend::api::auth::validate_session(token).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
