/// Session-level tests
/// End-to-end scenarios over the session controller and its components
use eventlink_core::badge::badge_for_events;
use eventlink_core::types::{Badge, Interest, UserProfile};
use eventlink_core::view::{ActiveView, ResolvedView};
use eventlink_core::Session;

fn me() -> UserProfile {
    UserProfile {
        id: "user-me".to_string(),
        name: "Morgan Reyes".to_string(),
        title: "Platform Engineer".to_string(),
        company: "Northwind".to_string(),
        interests: vec![Interest::AiMl, Interest::Cybersecurity],
        contact_card: None,
        events_attended: 9,
    }
}

#[test]
fn test_badge_upgrades_with_attendance() {
    let mut session = Session::with_event_seed(me());
    assert_eq!(session.badge(), Badge::Silver);

    // External update: 9 -> 10 events
    session.record_event_attendance();
    assert_eq!(session.badge(), Badge::Gold);
    assert_eq!(badge_for_events(session.me().events_attended), Badge::Gold);
}

#[test]
fn test_accept_seeded_incoming_request() {
    let mut session = Session::with_event_seed(me());
    assert!(session.ledger().incoming_requests().contains("user-8"));

    session.accept_request("user-8");
    assert!(session.ledger().connections().contains("user-8"));
    assert!(!session.ledger().incoming_requests().contains("user-8"));
    assert_eq!(
        session.take_notification().as_deref(),
        Some("You are now connected with Helen Chu!")
    );
}

#[test]
fn test_request_card_twice_records_once() {
    let mut session = Session::with_event_seed(me());

    session.request_card("user-7");
    assert_eq!(
        session.take_notification().as_deref(),
        Some("Contact request sent to George Costanza.")
    );

    session.request_card("user-7");
    assert!(session.take_notification().is_none());

    let sent: Vec<&String> = session.ledger().sent_requests().iter().collect();
    assert_eq!(sent, [&"user-7".to_string()]);
}

#[test]
fn test_accept_unknown_attendee_is_best_effort() {
    let mut session = Session::with_event_seed(me());
    // Not in the directory and not pending: silent no-op
    session.accept_request("user-404");
    assert!(session.take_notification().is_none());
    assert!(!session.ledger().connections().contains("user-404"));
}

#[test]
fn test_ledger_stays_disjoint_through_session_flow() {
    let mut session = Session::with_event_seed(me());
    session.request_card("user-2");
    session.request_card("user-8"); // pending incoming, must not double-track
    session.accept_request("user-8");
    session.decline_request("user-2"); // not incoming, no-op
    session.request_card("user-1"); // seeded connection, no-op
    assert!(session.ledger().is_disjoint());
}

#[test]
fn test_direct_chat_identity_is_stable() {
    let mut session = Session::with_event_seed(me());

    let first = session.start_direct_chat("user-2").unwrap();
    assert!(session.send_direct_message("hey Brenda"));

    // Re-opening yields the same thread with history intact
    let second = session.start_direct_chat("user-2").unwrap();
    assert_eq!(first, second);
    assert_eq!(session.chats().len(), 1);
    let chat = session.chats().get(&second).unwrap();
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].text, "hey Brenda");
}

#[test]
fn test_direct_chat_rejects_blank_and_missing_target() {
    let mut session = Session::with_event_seed(me());
    assert!(session.start_direct_chat("user-404").is_none());

    // No active chat yet
    assert!(!session.send_direct_message("hello?"));

    session.start_direct_chat("user-3").unwrap();
    assert!(!session.send_direct_message("   "));
    let chat_id = session.router().active_chat().unwrap().to_string();
    assert!(session.chats().get(&chat_id).unwrap().messages.is_empty());
}

#[test]
fn test_channel_posts_scoped_per_topic() {
    let mut session = Session::with_event_seed(me());

    session.open_interest(Interest::AiMl);
    assert!(session.post_channel_message("loved the keynote"));

    session.open_interest(Interest::Cybersecurity);
    assert!(session.post_channel_message("zero trust all the things"));

    // Back to the first topic: seed plus our post, nothing leaked
    session.open_interest(Interest::AiMl);
    let texts: Vec<&str> = session
        .channels()
        .messages(Interest::AiMl)
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(
        texts,
        [
            "Excited for the keynote on generative models!",
            "Me too! The applications are expanding so quickly.",
            "loved the keynote"
        ]
    );
    assert_eq!(session.channels().messages(Interest::Cybersecurity).len(), 1);
}

#[test]
fn test_default_channel_is_first_interest() {
    let mut session = Session::with_event_seed(me());
    assert_eq!(session.router().selected_interest(), Some(Interest::AiMl));
    session.navigate(ActiveView::Chat);
    assert_eq!(
        session.resolve_view(),
        ResolvedView::InterestChat(Interest::AiMl)
    );
    assert_eq!(session.view_title(), "# AI/ML");
}

#[test]
fn test_dm_view_placeholder_and_title() {
    let mut session = Session::with_event_seed(me());
    session.navigate(ActiveView::DirectMessage);
    assert_eq!(session.resolve_view(), ResolvedView::NoActiveChat);
    assert_eq!(session.view_title(), "Direct Message");

    session.start_direct_chat("user-4").unwrap();
    assert_eq!(session.view_title(), "Diana Prince");
}

#[test]
fn test_scan_outcomes_surface_as_notifications() {
    let mut session = Session::with_event_seed(me());

    let payload = session.qr_payload().unwrap();
    session.handle_scan_success(&payload);
    assert_eq!(
        session.take_notification().as_deref(),
        Some("Successfully connected with Morgan Reyes!")
    );

    session.handle_scan_success("{\"company\":\"Orbit\"}");
    assert_eq!(
        session.take_notification().as_deref(),
        Some("Connected with a new attendee!")
    );

    session.handle_scan_success("not a payload");
    assert_eq!(
        session.take_notification().as_deref(),
        Some("Scanned an invalid QR code.")
    );

    session.handle_scan_error("Camera permission denied");
    assert_eq!(
        session.take_notification().as_deref(),
        Some("Camera permission denied")
    );

    // No state corruption on any scan path
    assert!(session.ledger().is_disjoint());
}

#[test]
fn test_notification_is_transient() {
    let mut session = Session::with_event_seed(me());
    session.request_card("user-6");
    assert!(session.notification().is_some());
    session.take_notification();
    assert!(session.notification().is_none());
}
