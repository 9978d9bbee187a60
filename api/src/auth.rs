//! Login and logout against `/auth/login`.

use serde::Serialize;
use serde_json::Value;
use session::UserProfile;

use crate::client::ApiClient;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/auth/login";
pub const CURRENT_USER_PATH: &str = "/auth/me";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Token and optional profile pulled out of a login reply.
///
/// Borrowed from the raw payload so the caller still receives the payload
/// untouched.
#[derive(Debug, PartialEq)]
pub(crate) struct IssuedCredentials<'a> {
    pub token: &'a str,
    pub user: Option<&'a Value>,
}

/// Pick `access_token` and `user` out of a login reply. Returns `None` when
/// no usable token is present; a `null` user is treated as absent.
pub(crate) fn issued_credentials(payload: &Value) -> Option<IssuedCredentials<'_>> {
    let token = payload
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())?;
    let user = payload.get("user").filter(|u| !u.is_null());
    Some(IssuedCredentials { token, user })
}

impl ApiClient {
    /// Exchange credentials for a token and persist it.
    ///
    /// On success the reply's `access_token` is stored as `token` and its
    /// `user` (if any) as `user`. The raw reply is returned unchanged. A
    /// reply without `access_token` is returned but nothing is stored.
    ///
    /// # Errors
    ///
    /// Any transport or status error from the request, unchanged. A `401`
    /// here goes through the same expiry path as every other request.
    pub async fn login(&self, username: &str, password: &str) -> Result<Value, ApiError> {
        let payload: Value = self
            .post_json(LOGIN_PATH, &LoginRequest { username, password })
            .await?;

        match issued_credentials(&payload) {
            Some(creds) => {
                self.session().begin(creds.token, creds.user)?;
                tracing::info!(username, with_profile = creds.user.is_some(), "signed in");
            }
            None => tracing::warn!(username, "login reply carried no access_token; nothing stored"),
        }
        Ok(payload)
    }

    /// Forget the stored session. Local only; the server is not contacted.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("signed out");
    }

    /// Fetch the profile behind the current token.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get_json(CURRENT_USER_PATH).await
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
