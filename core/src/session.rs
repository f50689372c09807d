/// Session controller
///
/// Owns the current user's profile and every stateful component of the shell:
/// the contact ledger, direct-chat registry, interest channels, view router,
/// and the single transient notification slot. All user actions flow through
/// here: the session calls the pure component operations, then composes
/// notifications and navigation on top of the results.
use crate::badge::badge_for_events;
use crate::channels::InterestChannelStore;
use crate::chats::DirectChatRegistry;
use crate::directory::{seed_channel_messages, AttendeeDirectory};
use crate::error::Result;
use crate::ledger::ContactLedger;
use crate::qr::{decode_scan, encode_profile, ScanOutcome};
use crate::types::{Badge, Interest, Message, UserProfile};
use crate::view::{ActiveView, ResolvedView, ViewRouter};
use std::collections::HashMap;
use tracing::{info, warn};

pub struct Session {
    profile: UserProfile,
    directory: AttendeeDirectory,
    ledger: ContactLedger,
    chats: DirectChatRegistry,
    channels: InterestChannelStore,
    router: ViewRouter,
    notification: Option<String>,
}

impl Session {
    pub fn new(
        profile: UserProfile,
        directory: AttendeeDirectory,
        channel_seed: HashMap<Interest, Vec<Message>>,
        ledger: ContactLedger,
    ) -> Self {
        let mut router = ViewRouter::new();
        // The user's first interest is the default channel
        if let Some(first) = profile.interests.first() {
            router.select_interest(*first);
        }
        info!("session started for {} ({})", profile.name, profile.id);
        Self {
            profile,
            directory,
            ledger,
            chats: DirectChatRegistry::new(),
            channels: InterestChannelStore::with_seed(channel_seed),
            router,
            notification: None,
        }
    }

    /// Session over the builtin event seed: the checked-in pool, the seeded
    /// channels, one existing connection and one pending incoming request.
    pub fn with_event_seed(profile: UserProfile) -> Self {
        Self::new(
            profile,
            AttendeeDirectory::seed(),
            seed_channel_messages(),
            ContactLedger::seeded(["user-1".to_string()], ["user-8".to_string()]),
        )
    }

    // ─── Profile & badge ─────────────────────────────────────────────────────

    pub fn me(&self) -> &UserProfile {
        &self.profile
    }

    pub fn badge(&self) -> Badge {
        badge_for_events(self.profile.events_attended)
    }

    /// External amendment hook: attendance only ever increases in-scope.
    pub fn record_event_attendance(&mut self) {
        self.profile.events_attended += 1;
    }

    // ─── Contact requests ────────────────────────────────────────────────────

    pub fn request_card(&mut self, attendee_id: &str) {
        if self.ledger.request_card(attendee_id) {
            let name = self.directory.name_of(attendee_id);
            info!("contact request sent to {}", attendee_id);
            self.notify(format!("Contact request sent to {}.", name));
        }
    }

    pub fn accept_request(&mut self, attendee_id: &str) {
        if self.ledger.accept_incoming(attendee_id) {
            let name = self.directory.name_of(attendee_id);
            info!("connected with {}", attendee_id);
            self.notify(format!("You are now connected with {}!", name));
        }
    }

    pub fn decline_request(&mut self, attendee_id: &str) {
        self.ledger.decline_incoming(attendee_id);
    }

    // ─── Direct messages ─────────────────────────────────────────────────────

    /// Open (or lazily create) the thread with an attendee and switch to the
    /// DM screen. Referential miss on the id is a silent no-op.
    pub fn start_direct_chat(&mut self, attendee_id: &str) -> Option<String> {
        let other = self.directory.find(attendee_id)?.clone();
        let chat_id = self.chats.open_or_create(&self.profile, &other).id.clone();
        self.router.open_direct_chat(chat_id.clone());
        Some(chat_id)
    }

    /// Send into the active thread. No active thread or blank text: no-op.
    pub fn send_direct_message(&mut self, text: &str) -> bool {
        let Some(chat_id) = self.router.active_chat().map(str::to_string) else {
            return false;
        };
        self.chats
            .append_message(&chat_id, &self.profile, text)
            .is_some()
    }

    // ─── Interest channels ───────────────────────────────────────────────────

    pub fn open_interest(&mut self, interest: Interest) {
        self.router.open_interest(interest);
    }

    /// Post into the selected channel. No selection or blank text: no-op.
    pub fn post_channel_message(&mut self, text: &str) -> bool {
        let Some(interest) = self.router.selected_interest() else {
            return false;
        };
        self.channels.post(interest, &self.profile, text).is_some()
    }

    // ─── QR flow ─────────────────────────────────────────────────────────────

    /// Payload for the QR display collaborator.
    pub fn qr_payload(&self) -> Result<String> {
        encode_profile(&self.profile)
    }

    /// One-shot decode callback from the scan collaborator.
    pub fn handle_scan_success(&mut self, decoded_text: &str) {
        match decode_scan(decoded_text) {
            ScanOutcome::Connected { id, name } => {
                info!("scanned card of {} ({})", name, id);
                self.notify(format!("Successfully connected with {}!", name));
            }
            ScanOutcome::Anonymous => {
                self.notify("Connected with a new attendee!".to_string());
            }
            ScanOutcome::Invalid => {
                warn!("invalid QR code payload");
                self.notify("Scanned an invalid QR code.".to_string());
            }
        }
    }

    /// Failure callback from the scan collaborator; the message is surfaced
    /// as-is. The scan is user-retriable, so no retry logic here.
    pub fn handle_scan_error(&mut self, error: &str) {
        warn!("QR scan failed: {}", error);
        self.notify(error.to_string());
    }

    // ─── Navigation & rendering ──────────────────────────────────────────────

    pub fn navigate(&mut self, view: ActiveView) {
        self.router.navigate(view);
    }

    pub fn resolve_view(&self) -> ResolvedView {
        self.router.resolve()
    }

    /// Header title for the current screen.
    pub fn view_title(&self) -> String {
        match self.router.resolve() {
            ResolvedView::Profile => "My Profile".to_string(),
            ResolvedView::Schedule => "Event Schedule".to_string(),
            ResolvedView::CheckedIn => "Checked-In Attendees".to_string(),
            ResolvedView::Connections => "Connections".to_string(),
            ResolvedView::InterestChat(interest) => format!("# {}", interest),
            ResolvedView::NoInterestSelected => "Chat".to_string(),
            ResolvedView::DirectMessage(chat_id) => self
                .chats
                .get(&chat_id)
                .and_then(|c| c.peer_of(&self.profile.id))
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Direct Message".to_string()),
            ResolvedView::NoActiveChat => "Direct Message".to_string(),
        }
    }

    // ─── Notifications ───────────────────────────────────────────────────────

    fn notify(&mut self, text: String) {
        self.notification = Some(text);
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Consume the transient notification (the UI auto-dismisses it).
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }

    // ─── Component access ────────────────────────────────────────────────────

    pub fn directory(&self) -> &AttendeeDirectory {
        &self.directory
    }

    pub fn ledger(&self) -> &ContactLedger {
        &self.ledger
    }

    pub fn chats(&self) -> &DirectChatRegistry {
        &self.chats
    }

    pub fn channels(&self) -> &InterestChannelStore {
        &self.channels
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }
}
