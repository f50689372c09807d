/// Contact-request ledger
///
/// Tracks the relationship between the current user and every other attendee
/// as three pairwise-disjoint id sets: established connections, outgoing
/// pending requests, and incoming pending requests. Operations are pure state
/// transitions returning whether anything changed; user-facing notifications
/// are composed by the session on top of these.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Render state of the contact-card button for one attendee.
///
/// Precedence when several could apply: Connected > RequestSent > Respond >
/// RequestCard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardButton {
    /// Already connected; terminal
    Connected,
    /// Outgoing request pending
    RequestSent,
    /// They requested us; action surfaces the incoming request
    Respond,
    /// Default action
    RequestCard,
}

impl CardButton {
    pub fn label(&self) -> &'static str {
        match self {
            CardButton::Connected => "Connected",
            CardButton::RequestSent => "Request Sent",
            CardButton::Respond => "Respond",
            CardButton::RequestCard => "Request Card",
        }
    }

    pub fn enabled(&self) -> bool {
        matches!(self, CardButton::Respond | CardButton::RequestCard)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactLedger {
    connections: BTreeSet<String>,
    sent_requests: BTreeSet<String>,
    incoming_requests: BTreeSet<String>,
}

impl ContactLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-populated with existing connections and incoming requests.
    /// Ids appearing in both are kept as connections only, so the disjointness
    /// invariant holds from the start.
    pub fn seeded(
        connections: impl IntoIterator<Item = String>,
        incoming_requests: impl IntoIterator<Item = String>,
    ) -> Self {
        let connections: BTreeSet<String> = connections.into_iter().collect();
        let incoming_requests = incoming_requests
            .into_iter()
            .filter(|id| !connections.contains(id))
            .collect();
        Self {
            connections,
            sent_requests: BTreeSet::new(),
            incoming_requests,
        }
    }

    /// Send a contact-card request. No-op when the attendee is already
    /// connected, already requested, or has a pending incoming request (the
    /// button precedence never offers Request Card for those ids). Returns
    /// true when a new request was recorded.
    pub fn request_card(&mut self, attendee_id: &str) -> bool {
        if self.connections.contains(attendee_id)
            || self.sent_requests.contains(attendee_id)
            || self.incoming_requests.contains(attendee_id)
        {
            return false;
        }
        self.sent_requests.insert(attendee_id.to_string());
        debug!("contact request sent to {}", attendee_id);
        true
    }

    /// Accept an incoming request, moving the id to connections.
    /// Silent no-op when no such request is pending.
    pub fn accept_incoming(&mut self, attendee_id: &str) -> bool {
        if !self.incoming_requests.remove(attendee_id) {
            return false;
        }
        self.connections.insert(attendee_id.to_string());
        debug!("accepted contact request from {}", attendee_id);
        true
    }

    /// Decline an incoming request. Silent no-op when absent.
    pub fn decline_incoming(&mut self, attendee_id: &str) -> bool {
        self.incoming_requests.remove(attendee_id)
    }

    /// Pure projection of the ledger plus a target id into the card-button
    /// state, applying the precedence rule.
    pub fn card_button(&self, attendee_id: &str) -> CardButton {
        if self.connections.contains(attendee_id) {
            CardButton::Connected
        } else if self.sent_requests.contains(attendee_id) {
            CardButton::RequestSent
        } else if self.incoming_requests.contains(attendee_id) {
            CardButton::Respond
        } else {
            CardButton::RequestCard
        }
    }

    pub fn connections(&self) -> &BTreeSet<String> {
        &self.connections
    }

    pub fn sent_requests(&self) -> &BTreeSet<String> {
        &self.sent_requests
    }

    pub fn incoming_requests(&self) -> &BTreeSet<String> {
        &self.incoming_requests
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Badge count shown on the Connections nav entry.
    pub fn pending_incoming_count(&self) -> usize {
        self.incoming_requests.len()
    }

    /// The three sets must never overlap.
    pub fn is_disjoint(&self) -> bool {
        self.connections.is_disjoint(&self.sent_requests)
            && self.connections.is_disjoint(&self.incoming_requests)
            && self.sent_requests.is_disjoint(&self.incoming_requests)
    }
}
