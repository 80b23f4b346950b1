//! Sessions established through the access service.
//!
//! This module provides the [`Session`] type returned by a successful login.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::auth::{ClientContext, LoginParams};
use crate::config::Language;
use crate::proto::access;

/// An authenticated session.
///
/// Holds the session identifier the backend issued plus the role,
/// organization and warehouse scopes it was opened with. The identifier is
/// what a [`ClientContext`] carries on every storefront call.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use storefront_rpc::{Session, Language};
///
/// let session = Session::new(1, "session-uuid", Language::default());
/// assert!(session.is_active());
/// assert_eq!(session.context().session_uuid(), "session-uuid");
/// ```
#[derive(Clone)]
pub struct Session {
    /// Numeric session id.
    pub id: i32,

    /// Session identifier used to build client contexts.
    pub uuid: String,

    /// Display name of the session.
    pub name: String,

    /// Role the session was opened with, if any.
    pub role_uuid: Option<String>,

    /// Organization the session was opened with, if any.
    pub organization_uuid: Option<String>,

    /// Warehouse the session was opened with, if any.
    pub warehouse_uuid: Option<String>,

    /// Language of the session.
    pub language: Language,

    /// When the login completed.
    pub established_at: DateTime<Utc>,
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

impl Session {
    /// Creates a session with no scopes, established now.
    #[must_use]
    pub fn new(id: i32, uuid: impl Into<String>, language: Language) -> Self {
        Self {
            id,
            uuid: uuid.into(),
            name: String::new(),
            role_uuid: None,
            organization_uuid: None,
            warehouse_uuid: None,
            language,
            established_at: Utc::now(),
        }
    }

    /// Builds a session from a login reply.
    ///
    /// Scopes the backend echoes back win; otherwise the requested ones are
    /// kept.
    pub(crate) fn from_reply(
        reply: access::Session,
        params: &LoginParams,
        default_language: &Language,
    ) -> Self {
        let language = Language::new(reply.language)
            .ok()
            .or_else(|| params.language.clone())
            .unwrap_or_else(|| default_language.clone());

        Self {
            id: reply.id,
            uuid: reply.uuid,
            name: reply.name,
            role_uuid: non_empty(reply.role_uuid).or_else(|| params.role_uuid.clone()),
            organization_uuid: non_empty(reply.organization_uuid)
                .or_else(|| params.organization_uuid.clone()),
            warehouse_uuid: non_empty(reply.warehouse_uuid)
                .or_else(|| params.warehouse_uuid.clone()),
            language,
            established_at: Utc::now(),
        }
    }

    /// Returns `true` if the backend issued a usable session identifier.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.uuid.is_empty()
    }

    /// Builds the client context for this session.
    #[must_use]
    pub fn context(&self) -> ClientContext {
        ClientContext::new(self.uuid.clone(), self.language.clone())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("uuid", &"*****")
            .field("name", &self.name)
            .field("role_uuid", &self.role_uuid)
            .field("organization_uuid", &self.organization_uuid)
            .field("warehouse_uuid", &self.warehouse_uuid)
            .field("language", &self.language)
            .field("established_at", &self.established_at)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reply_prefers_echoed_scopes() {
        let reply = access::Session {
            id: 3,
            uuid: "u".to_string(),
            role_uuid: "echoed-role".to_string(),
            ..access::Session::default()
        };
        let params = LoginParams::with_token("T").role("asked-role").warehouse("w");

        let session = Session::from_reply(reply, &params, &Language::default());

        assert_eq!(session.role_uuid.as_deref(), Some("echoed-role"));
        assert_eq!(session.warehouse_uuid.as_deref(), Some("w"));
        assert!(session.organization_uuid.is_none());
        assert_eq!(session.language.as_ref(), "en_US");
    }

    #[test]
    fn test_from_reply_uses_reply_language() {
        let reply = access::Session {
            uuid: "u".to_string(),
            language: "es_VE".to_string(),
            ..access::Session::default()
        };
        let session = Session::from_reply(reply, &LoginParams::with_token("T"), &Language::default());
        assert_eq!(session.context().language().as_ref(), "es_VE");
    }

    #[test]
    fn test_session_is_active() {
        assert!(Session::new(1, "u", Language::default()).is_active());
        assert!(!Session::new(1, "", Language::default()).is_active());
    }

    #[test]
    fn test_debug_masks_uuid() {
        let debug = format!("{:?}", Session::new(1, "secret-uuid", Language::default()));
        assert!(!debug.contains("secret-uuid"));
    }
}
