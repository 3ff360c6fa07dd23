//! Account use-cases: login, registration and the backend health probe.

use log::info;
use serde_json::Value;

use crate::gateway::{application_message, endpoints, FetchError, Gateway, GatewayResult};
use crate::session::SessionIdentity;

use super::fetch_value;

pub struct AuthService<G> {
    gateway: G,
}

impl<G: Gateway> AuthService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Exchanges credentials for a session identity.
    ///
    /// The login route returns the numeric user id bare; the username is
    /// the one the caller just authenticated with.
    pub fn login(&self, username: &str, password: &str) -> GatewayResult<SessionIdentity> {
        let value = fetch_value(&self.gateway, &endpoints::login(username, password))?;
        let user_id = parse_user_id(&value).ok_or_else(|| FetchError::Application {
            message: application_message(&value),
        })?;
        info!("event=login module=auth status=ok user_id={user_id}");
        Ok(SessionIdentity::new(user_id, username))
    }

    pub fn register(
        &self,
        name: &str,
        age: i64,
        username: &str,
        password: &str,
    ) -> GatewayResult<()> {
        fetch_value(
            &self.gateway,
            &endpoints::register(name, age, username, password),
        )?;
        info!("event=register module=auth status=ok username={username}");
        Ok(())
    }

    /// Backend reachability probe.
    pub fn hello(&self) -> GatewayResult<Value> {
        fetch_value(&self.gateway, &endpoints::hello())
    }
}

/// The backend has returned the id both as a number and as a string.
fn parse_user_id(value: &Value) -> Option<i64> {
    let raw = value.get("user_id")?;
    raw.as_i64()
        .or_else(|| raw.as_str().and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_id_parses_from_number_or_string() {
        assert_eq!(parse_user_id(&json!({"user_id": 12})), Some(12));
        assert_eq!(parse_user_id(&json!({"user_id": "12"})), Some(12));
        assert_eq!(parse_user_id(&json!({"error": "bad credentials"})), None);
    }
}
