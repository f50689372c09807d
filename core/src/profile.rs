/// Profile creation
///
/// Validates the creation form and assembles a `UserProfile`. Validation
/// failures are returned as inline errors, never panics; the boundary contract
/// guarantees a built profile has all required fields non-blank, a nonempty
/// interest set, and `events_attended` starting at 1.
use crate::error::{EventError, Result};
use crate::types::{ContactCard, Interest, UserProfile};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub title: String,
    pub company: String,
    pub interests: Vec<Interest>,
    pub linkedin: String,
    pub twitter: String,
    pub github: String,
    pub website: String,
}

fn optional_link(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ProfileForm {
    /// Validate the form and build the profile.
    pub fn build(&self) -> Result<UserProfile> {
        if self.name.trim().is_empty()
            || self.title.trim().is_empty()
            || self.company.trim().is_empty()
            || self.interests.is_empty()
        {
            return Err(EventError::Validation(
                "Please fill out all fields and select at least one interest.".to_string(),
            ));
        }

        // Dedup while keeping first-selected order; the first interest becomes
        // the default channel
        let mut interests = Vec::new();
        for interest in &self.interests {
            if !interests.contains(interest) {
                interests.push(*interest);
            }
        }

        let card = ContactCard {
            linkedin: optional_link(&self.linkedin),
            twitter: optional_link(&self.twitter),
            github: optional_link(&self.github),
            website: optional_link(&self.website),
        };

        Ok(UserProfile {
            id: format!("user-{}", Uuid::new_v4()),
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            interests,
            contact_card: if card.is_empty() { None } else { Some(card) },
            // Creating the profile counts as attending this event
            events_attended: 1,
        })
    }
}
