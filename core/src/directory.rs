/// Attendee directory
///
/// The pool of checked-in attendees the ledger and chat registry operate over.
/// Ships with the builtin event seed; a JSON file can be supplied instead via
/// config. The core never fetches or persists this data.
use crate::error::{EventError, Result};
use crate::types::{avatar_url, ContactCard, Interest, Message, MessageAuthor, UserProfile};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AttendeeDirectory {
    attendees: Vec<UserProfile>,
}

impl AttendeeDirectory {
    pub fn new(attendees: Vec<UserProfile>) -> Self {
        Self { attendees }
    }

    /// The builtin checked-in attendee pool.
    pub fn seed() -> Self {
        Self::new(seed_attendees())
    }

    /// Load the pool from a JSON array of profiles.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(EventError::Io)?;
        let attendees: Vec<UserProfile> =
            serde_json::from_str(&raw).map_err(EventError::Serialization)?;
        if attendees.is_empty() {
            return Err(EventError::Directory(format!(
                "No attendees in {}",
                path.display()
            )));
        }
        info!("loaded {} attendees from {}", attendees.len(), path.display());
        Ok(Self::new(attendees))
    }

    pub fn find(&self, attendee_id: &str) -> Option<&UserProfile> {
        self.attendees.iter().find(|a| a.id == attendee_id)
    }

    /// Display name for an id, with the generic fallback used in
    /// notifications when the id is not in the pool.
    pub fn name_of(&self, attendee_id: &str) -> String {
        self.find(attendee_id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "an attendee".to_string())
    }

    /// Everyone except the current user.
    pub fn checked_in(&self, exclude_id: &str) -> Vec<&UserProfile> {
        self.attendees.iter().filter(|a| a.id != exclude_id).collect()
    }

    /// Roster for one interest channel, current user excluded.
    pub fn by_interest(&self, interest: Interest, exclude_id: &str) -> Vec<&UserProfile> {
        self.attendees
            .iter()
            .filter(|a| a.id != exclude_id && a.interests.contains(&interest))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.attendees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }
}

fn attendee(
    id: &str,
    name: &str,
    title: &str,
    company: &str,
    interests: &[Interest],
    contact_card: ContactCard,
    events_attended: u32,
) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        interests: interests.to_vec(),
        contact_card: if contact_card.is_empty() {
            None
        } else {
            Some(contact_card)
        },
        events_attended,
    }
}

fn seed_attendees() -> Vec<UserProfile> {
    vec![
        attendee(
            "user-1",
            "Alex Johnson",
            "AI Researcher",
            "Innovate AI",
            &[Interest::AiMl],
            ContactCard {
                linkedin: Some("https://linkedin.com/in/alexjohnson".to_string()),
                github: Some("https://github.com/alexj".to_string()),
                ..Default::default()
            },
            15,
        ),
        attendee(
            "user-2",
            "Brenda Smith",
            "ML Engineer",
            "DataCorp",
            &[Interest::AiMl, Interest::WebDevelopment],
            ContactCard {
                linkedin: Some("https://linkedin.com/in/brendasmith".to_string()),
                twitter: Some("https://twitter.com/brendas".to_string()),
                ..Default::default()
            },
            3,
        ),
        attendee(
            "user-3",
            "Chris Lee",
            "Frontend Dev",
            "WebFlows",
            &[Interest::WebDevelopment, Interest::UxUiDesign],
            ContactCard {
                github: Some("https://github.com/chrisl".to_string()),
                website: Some("https://chrislee.dev".to_string()),
                ..Default::default()
            },
            8,
        ),
        attendee(
            "user-4",
            "Diana Prince",
            "UX Designer",
            "Creative Solutions",
            &[Interest::UxUiDesign],
            ContactCard {
                linkedin: Some("https://linkedin.com/in/dianaprince".to_string()),
                website: Some("https://dianaprince.design".to_string()),
                ..Default::default()
            },
            1,
        ),
        attendee(
            "user-5",
            "Edward Nigma",
            "Security Analyst",
            "SecureNet",
            &[Interest::Cybersecurity],
            ContactCard {
                twitter: Some("https://twitter.com/enigma".to_string()),
                ..Default::default()
            },
            22,
        ),
        attendee(
            "user-6",
            "Fiona Glenanne",
            "Blockchain Dev",
            "CryptoChain",
            &[Interest::Blockchain],
            ContactCard {
                linkedin: Some("https://linkedin.com/in/fionag".to_string()),
                ..Default::default()
            },
            5,
        ),
        attendee(
            "user-7",
            "George Costanza",
            "Architect",
            "Vandelay Industries",
            &[Interest::WebDevelopment],
            ContactCard {
                website: Some("https://vandelay.com".to_string()),
                ..Default::default()
            },
            2,
        ),
        attendee(
            "user-8",
            "Helen Chu",
            "Product Manager",
            "Cyber Solutions",
            &[Interest::UxUiDesign, Interest::Cybersecurity],
            ContactCard {
                linkedin: Some("https://linkedin.com/in/helenchu".to_string()),
                twitter: Some("https://twitter.com/helenchu".to_string()),
                ..Default::default()
            },
            12,
        ),
    ]
}

fn seed_message(id: &str, author_id: &str, author_name: &str, text: &str, timestamp: &str) -> Message {
    Message {
        id: id.to_string(),
        author: MessageAuthor {
            id: author_id.to_string(),
            name: author_name.to_string(),
            avatar: avatar_url(author_id),
        },
        text: text.to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// Builtin prior messages for the interest channels. Topics not listed start
/// empty.
pub fn seed_channel_messages() -> HashMap<Interest, Vec<Message>> {
    let mut seed = HashMap::new();
    seed.insert(
        Interest::AiMl,
        vec![
            seed_message(
                "msg-1",
                "user-1",
                "Alex Johnson",
                "Excited for the keynote on generative models!",
                "10:30 AM",
            ),
            seed_message(
                "msg-2",
                "user-2",
                "Brenda Smith",
                "Me too! The applications are expanding so quickly.",
                "10:32 AM",
            ),
        ],
    );
    seed.insert(
        Interest::WebDevelopment,
        vec![seed_message(
            "msg-3",
            "user-3",
            "Chris Lee",
            "Anyone attending the workshop on modern CSS frameworks?",
            "11:00 AM",
        )],
    );
    seed
}
