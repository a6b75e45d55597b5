//! Session domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a message, unique within its transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Append-only ordered sequence of messages.
///
/// Ids come from a counter that starts at 1 and never goes backwards, so
/// later messages always carry larger ids.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new message stamped with the current time.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_increasing() {
        let mut t = Transcript::new();
        let a = t.append(Role::Assistant, "hi").id;
        let b = t.append(Role::User, "hello").id;
        let c = t.append(Role::Assistant, "how can I help?").id;
        assert_eq!(a.value(), 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_append_preserves_order_and_content() {
        let mut t = Transcript::new();
        t.append(Role::User, "first");
        t.append(Role::Assistant, "second");
        let contents: Vec<_> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
        assert_eq!(t.len(), 2);
        assert!(t.messages().last().unwrap().is_assistant());
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let mut t = Transcript::new();
        t.append(Role::User, "a");
        t.append(Role::Assistant, "b");
        let m = t.messages();
        assert!(m[0].timestamp <= m[1].timestamp);
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let mut t = Transcript::new();
        let msg = t.append(Role::User, "q").clone();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["id"], 1);
    }
}
