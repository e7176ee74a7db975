use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored length of a user name, in characters.
pub const MAX_USER_LEN: usize = 100;

/// A single logged exchange: what the user sent and what the bot replied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Assigned by storage; `None` until the message has been saved.
    id: Option<i64>,
    user: String,
    message: String,
    response: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        user: impl Into<String>,
        message: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user: user.into(),
            message: message.into(),
            response: response.into(),
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(
        id: i64,
        user: String,
        message: String,
        response: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            user,
            message,
            response,
            timestamp,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Storage keeps microseconds, so finer precision is dropped here.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp.trunc_subsecs(6);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// RFC 3339 rendering with six fractional digits and an explicit `+00:00` offset.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn new_message_is_unsaved() {
        let msg = Message::new("alice", "hi", "(echo) hi");

        assert_eq!(msg.user(), "alice");
        assert_eq!(msg.message(), "hi");
        assert_eq!(msg.response(), "(echo) hi");
        assert_eq!(msg.id(), None);
        assert!(!msg.is_persisted());
    }

    #[test]
    fn with_id_marks_persisted() {
        let msg = Message::new("bob", "yo", "yo").with_id(7);
        assert_eq!(msg.id(), Some(7));
        assert!(msg.is_persisted());
    }

    #[test]
    fn timestamp_renders_with_utc_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let msg = Message::reconstitute(1, "a".into(), "m".into(), "r".into(), ts);
        assert_eq!(msg.timestamp_rfc3339(), "2024-01-02T03:04:05.000000+00:00");
    }

    #[test]
    fn timestamps_keep_microsecond_precision() {
        let msg = Message::new("alice", "hi", "hi");
        assert_eq!(msg.timestamp().timestamp_subsec_nanos() % 1_000, 0);

        let ts = Utc.timestamp_nanos(1_704_164_645_123_456_789);
        let msg = msg.with_timestamp(ts);
        assert_eq!(msg.timestamp().timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(msg.timestamp_rfc3339(), "2024-01-02T03:04:05.123456+00:00");
    }
}
