/// Per-interest chat channels
///
/// Each topic owns an independent message list: an injected seed plus whatever
/// the user posts during the session. Topics never leak into each other, and
/// posts survive navigating away and back.
use crate::chats::compose_message;
use crate::types::{Interest, Message, UserProfile};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct InterestChannelStore {
    channels: HashMap<Interest, Vec<Message>>,
}

impl InterestChannelStore {
    /// Empty channels for every topic.
    pub fn new() -> Self {
        Self::with_seed(HashMap::new())
    }

    /// Channels pre-populated from seed data. Topics absent from the seed
    /// start empty.
    pub fn with_seed(seed: HashMap<Interest, Vec<Message>>) -> Self {
        let mut channels = seed;
        for interest in Interest::ALL {
            channels.entry(interest).or_default();
        }
        Self { channels }
    }

    pub fn messages(&self, interest: Interest) -> &[Message] {
        self.channels
            .get(&interest)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Post to a topic. Same append contract as direct chats:
    /// whitespace-only text is a silent no-op.
    pub fn post(
        &mut self,
        interest: Interest,
        author: &UserProfile,
        text: &str,
    ) -> Option<&Message> {
        let message = compose_message(author, text)?;
        let channel = self.channels.entry(interest).or_default();
        channel.push(message);
        channel.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageAuthor;

    fn profile(id: &str, name: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: name.to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            interests: vec![Interest::AiMl],
            contact_card: None,
            events_attended: 1,
        }
    }

    fn seed_message(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            author: MessageAuthor {
                id: "user-1".to_string(),
                name: "Alex Johnson".to_string(),
                avatar: crate::types::avatar_url("user-1"),
            },
            text: text.to_string(),
            timestamp: "10:30 AM".to_string(),
        }
    }

    #[test]
    fn test_seed_is_injected_per_topic() {
        let mut seed = HashMap::new();
        seed.insert(Interest::AiMl, vec![seed_message("msg-1", "hello ai")]);
        let store = InterestChannelStore::with_seed(seed);

        assert_eq!(store.messages(Interest::AiMl).len(), 1);
        assert!(store.messages(Interest::Blockchain).is_empty());
    }

    #[test]
    fn test_post_appends_after_seed() {
        let mut seed = HashMap::new();
        seed.insert(Interest::AiMl, vec![seed_message("msg-1", "hello ai")]);
        let mut store = InterestChannelStore::with_seed(seed);
        let me = profile("me", "Me");

        store.post(Interest::AiMl, &me, "new message").unwrap();
        let texts: Vec<&str> = store
            .messages(Interest::AiMl)
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, ["hello ai", "new message"]);
    }

    #[test]
    fn test_topics_do_not_leak() {
        let mut store = InterestChannelStore::new();
        let me = profile("me", "Me");

        store.post(Interest::Cybersecurity, &me, "zero trust").unwrap();
        assert_eq!(store.messages(Interest::Cybersecurity).len(), 1);
        for interest in Interest::ALL {
            if interest != Interest::Cybersecurity {
                assert!(store.messages(interest).is_empty());
            }
        }
    }

    #[test]
    fn test_posts_survive_topic_switching() {
        let mut store = InterestChannelStore::new();
        let me = profile("me", "Me");

        store.post(Interest::AiMl, &me, "one").unwrap();
        store.post(Interest::WebDevelopment, &me, "two").unwrap();
        store.post(Interest::AiMl, &me, "three").unwrap();

        let texts: Vec<&str> = store
            .messages(Interest::AiMl)
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, ["one", "three"]);
        assert_eq!(store.messages(Interest::WebDevelopment).len(), 1);
    }

    #[test]
    fn test_blank_post_is_noop() {
        let mut store = InterestChannelStore::new();
        let me = profile("me", "Me");
        assert!(store.post(Interest::AiMl, &me, "  ").is_none());
        assert!(store.messages(Interest::AiMl).is_empty());
    }
}
