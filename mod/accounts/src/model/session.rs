/// Which table a session's subject lives in. A session is scoped to exactly
/// one of the two — never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Restaurant,
    Client,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Restaurant => "restaurant",
            SessionKind::Client => "client",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "restaurant" => Some(SessionKind::Restaurant),
            "client" => Some(SessionKind::Client),
            _ => None,
        }
    }
}

/// An issued session. The token is the opaque identifier clients present
/// as `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub kind: SessionKind,
    pub subject_id: i64,
    pub revoked: bool,
    pub issued_at: String,
    pub expires_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips() {
        assert_eq!(SessionKind::parse("restaurant"), Some(SessionKind::Restaurant));
        assert_eq!(SessionKind::parse("client"), Some(SessionKind::Client));
        assert_eq!(SessionKind::parse("admin"), None);
        assert_eq!(SessionKind::Restaurant.as_str(), "restaurant");
    }
}
