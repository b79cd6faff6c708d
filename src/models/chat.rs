use chrono::{ DateTime, Utc };
use serde::{ Serialize, Deserialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

/// One entry in the conversation log. Immutable once appended; ids are
/// allocated by the store and strictly increase within a history epoch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn message_serializes_with_wire_field_names() {
        let msg = Message {
            id: 7,
            role: Role::Assistant,
            content: "hello".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["_id"], 7);
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hello");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }
}
