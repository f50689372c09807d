/// Direct-message chat registry
///
/// One thread per unordered pair of attendees, addressed by a canonical
/// order-independent key and created lazily on first contact. Messages are
/// append-only; there is a single local author per session, so no ordering
/// or dedup logic beyond strict append is needed.
use crate::types::{DirectChat, Message, MessageAuthor, UserProfile};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Canonical ID for the thread between `a` and `b`: "dm:{min_id}:{max_id}".
/// Same key regardless of argument order.
pub fn chat_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("dm:{}:{}", a, b)
    } else {
        format!("dm:{}:{}", b, a)
    }
}

/// Build a message from trimmed user input. Returns None for
/// empty/whitespace-only text.
pub(crate) fn compose_message(author: &UserProfile, text: &str) -> Option<Message> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(Message {
        id: format!("msg-{}", Uuid::new_v4()),
        author: MessageAuthor::from_profile(author),
        text: text.to_string(),
        timestamp: chrono::Local::now().format("%I:%M %p").to_string(),
    })
}

#[derive(Debug, Clone, Default)]
pub struct DirectChatRegistry {
    chats: HashMap<String, DirectChat>,
}

impl DirectChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the thread for this pair, creating an empty one on first
    /// contact. Safe to call repeatedly with either argument order; always
    /// yields the same logical thread.
    pub fn open_or_create(&mut self, me: &UserProfile, other: &UserProfile) -> &DirectChat {
        let key = chat_key(&me.id, &other.id);
        self.chats.entry(key.clone()).or_insert_with(|| {
            debug!("created direct chat {}", key);
            DirectChat {
                id: key,
                participants: [me.clone(), other.clone()],
                messages: Vec::new(),
            }
        })
    }

    /// Append a message to an existing thread, replacing the stored chat in
    /// place. Whitespace-only text and unknown chat ids are silent no-ops.
    pub fn append_message(
        &mut self,
        chat_id: &str,
        author: &UserProfile,
        text: &str,
    ) -> Option<&Message> {
        let chat = self.chats.get_mut(chat_id)?;
        let message = compose_message(author, text)?;
        chat.messages.push(message);
        chat.messages.last()
    }

    pub fn get(&self, chat_id: &str) -> Option<&DirectChat> {
        self.chats.get(chat_id)
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}
