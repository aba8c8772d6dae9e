//! Read-only view of the visitor's session as supplied by the host app.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketTier {
    #[default]
    None,
    Regular,
    Platinum,
    Secret,
}

impl TicketTier {
    pub fn slug(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Regular => Some("regular"),
            Self::Platinum => Some("platinum"),
            Self::Secret => Some("secret"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub ticket_tier: TicketTier,
}

impl UserSession {
    pub fn new(display_name: Option<&str>, ticket_tier: TicketTier) -> Self {
        Self {
            display_name: display_name.map(str::to_string),
            ticket_tier,
        }
    }

    /// First word of the display name, used for the compact ticket badge.
    pub fn first_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
    }

    pub fn has_ticket(&self) -> bool {
        self.ticket_tier != TicketTier::None
    }

    /// Icon matching the highest tier held.
    pub fn ticket_icon(&self) -> Option<String> {
        self.ticket_tier
            .slug()
            .map(|slug| format!("/images/launch-week/tickets/icon/ticket-icon-{slug}.png"))
    }
}

/// Session resolution as seen by the header. `Loading` keeps the
/// call-to-action slot empty so it never flashes the wrong buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Loading,
    SignedOut,
    SignedIn(UserSession),
}

impl AuthState {
    pub fn session(&self) -> Option<&UserSession> {
        match self {
            Self::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    /// Resolve from a cached session document. Absent or unreadable data
    /// means signed out; the header then offers "Sign in".
    pub fn from_cached(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::SignedOut;
        };
        match serde_json::from_str::<UserSession>(raw) {
            Ok(session) => Self::SignedIn(session),
            Err(err) => {
                tracing::warn!("ignoring unreadable cached session: {err}");
                Self::SignedOut
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_takes_first_word() {
        let s = UserSession::new(Some("Ada  Lovelace"), TicketTier::Regular);
        assert_eq!(s.first_name(), Some("Ada"));
        assert_eq!(UserSession::new(Some("   "), TicketTier::None).first_name(), None);
        assert_eq!(UserSession::default().first_name(), None);
    }

    #[test]
    fn ticket_icon_follows_tier() {
        assert!(UserSession::default().ticket_icon().is_none());
        let icon = UserSession::new(None, TicketTier::Secret).ticket_icon().unwrap();
        assert!(icon.ends_with("ticket-icon-secret.png"));
        let icon = UserSession::new(None, TicketTier::Platinum).ticket_icon().unwrap();
        assert!(icon.ends_with("ticket-icon-platinum.png"));
    }

    #[test]
    fn auth_state_resolution() {
        assert_eq!(AuthState::default(), AuthState::Loading);
        assert!(AuthState::Loading.session().is_none());
        let signed_in = AuthState::SignedIn(UserSession::default());
        assert!(signed_in.session().is_some());
        assert!(AuthState::SignedOut.session().is_none());
    }

    #[test]
    fn cached_session_resolution() {
        assert_eq!(AuthState::from_cached(None), AuthState::SignedOut);
        assert_eq!(AuthState::from_cached(Some("not json")), AuthState::SignedOut);
        let state = AuthState::from_cached(Some(r#"{ "display_name": "Ada Lovelace" }"#));
        let session = state.session().expect("signed in");
        assert_eq!(session.first_name(), Some("Ada"));
        assert_eq!(session.ticket_tier, TicketTier::None);
    }

    #[test]
    fn tier_deserializes_lowercase() {
        let s: UserSession =
            serde_json::from_str(r#"{ "display_name": "Lin", "ticket_tier": "platinum" }"#)
                .unwrap();
        assert_eq!(s.ticket_tier, TicketTier::Platinum);
    }
}
