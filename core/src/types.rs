/// Shared domain types for the event-networking core
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of interest topics. No dynamic topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "UX/UI Design")]
    UxUiDesign,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
    #[serde(rename = "Blockchain")]
    Blockchain,
}

impl Interest {
    /// All topics, in display order.
    pub const ALL: [Interest; 5] = [
        Interest::AiMl,
        Interest::WebDevelopment,
        Interest::UxUiDesign,
        Interest::Cybersecurity,
        Interest::Blockchain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::AiMl => "AI/ML",
            Interest::WebDevelopment => "Web Development",
            Interest::UxUiDesign => "UX/UI Design",
            Interest::Cybersecurity => "Cybersecurity",
            Interest::Blockchain => "Blockchain",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Case-insensitive, to be forgiving at the CLI boundary
        let lower = s.trim().to_lowercase();
        Interest::ALL
            .into_iter()
            .find(|i| i.as_str().to_lowercase() == lower)
            .ok_or_else(|| format!("Unknown interest: {}", s))
    }
}

/// Attendance tier, derived from `events_attended` — never stored.
/// Variant order matches tier order, so `Ord` gives tier comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Badge {
    Newcomer,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Newcomer => "Newcomer",
            Badge::Bronze => "Bronze",
            Badge::Silver => "Silver",
            Badge::Gold => "Gold",
            Badge::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional per-channel contact links attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactCard {
    pub fn is_empty(&self) -> bool {
        self.linkedin.is_none()
            && self.twitter.is_none()
            && self.github.is_none()
            && self.website.is_none()
    }
}

/// An attendee profile. `id` is opaque, stable and unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    /// Nonempty; selected at profile creation
    pub interests: Vec<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_card: Option<ContactCard>,
    pub events_attended: u32,
}

impl UserProfile {
    pub fn avatar_url(&self) -> String {
        avatar_url(&self.id)
    }
}

/// Avatar URL derived from an attendee id.
pub fn avatar_url(id: &str) -> String {
    format!("https://i.pravatar.cc/150?u={}", id)
}

/// Denormalized author info carried on each message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAuthor {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl MessageAuthor {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            avatar: profile.avatar_url(),
        }
    }
}

/// A single chat message. Append-only within its thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: MessageAuthor,
    /// Non-empty after trimming
    pub text: String,
    /// Display-formatted local time, e.g. "10:30 AM"
    pub timestamp: String,
}

/// One direct-message thread between exactly two attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectChat {
    /// Canonical ID: "dm:{min_id}:{max_id}"
    pub id: String,
    pub participants: [UserProfile; 2],
    pub messages: Vec<Message>,
}

impl DirectChat {
    /// The participant that is not `user_id`, if any.
    pub fn peer_of(&self, user_id: &str) -> Option<&UserProfile> {
        self.participants.iter().find(|p| p.id != user_id)
    }
}

/// One entry in the event schedule (seed data; listing only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub time: String,
    pub end_time: String,
    pub title: String,
    pub speaker: String,
    pub location: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_serde_uses_display_strings() {
        let json = serde_json::to_string(&Interest::AiMl).unwrap();
        assert_eq!(json, "\"AI/ML\"");

        let parsed: Interest = serde_json::from_str("\"UX/UI Design\"").unwrap();
        assert_eq!(parsed, Interest::UxUiDesign);
    }

    #[test]
    fn test_interest_from_str() {
        assert_eq!("ai/ml".parse::<Interest>().unwrap(), Interest::AiMl);
        assert_eq!(
            "Web Development".parse::<Interest>().unwrap(),
            Interest::WebDevelopment
        );
        assert!("Quantum Basket Weaving".parse::<Interest>().is_err());
    }

    #[test]
    fn test_badge_order_follows_tiers() {
        assert!(Badge::Newcomer < Badge::Bronze);
        assert!(Badge::Bronze < Badge::Silver);
        assert!(Badge::Silver < Badge::Gold);
        assert!(Badge::Gold < Badge::Platinum);
    }

    #[test]
    fn test_contact_card_is_empty() {
        assert!(ContactCard::default().is_empty());
        let card = ContactCard {
            github: Some("https://github.com/alexj".to_string()),
            ..Default::default()
        };
        assert!(!card.is_empty());
    }
}
