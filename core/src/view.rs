/// View router for the application shell
///
/// Holds which top-level screen is active plus the sub-entity needed to render
/// it (selected interest channel, active direct chat). Selections persist
/// across navigation; screens whose sub-entity is missing resolve to explicit
/// placeholders instead of erroring.
use crate::types::Interest;
use tracing::debug;

/// The closed set of top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Profile,
    Schedule,
    CheckedIn,
    Connections,
    Chat,
    DirectMessage,
}

/// What the shell should actually render for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView {
    Profile,
    Schedule,
    CheckedIn,
    Connections,
    InterestChat(Interest),
    /// Chat screen with no interest selected yet
    NoInterestSelected,
    DirectMessage(String),
    /// DM screen with no active thread
    NoActiveChat,
}

#[derive(Debug, Clone)]
pub struct ViewRouter {
    active: ActiveView,
    selected_interest: Option<Interest>,
    active_chat: Option<String>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            active: ActiveView::Profile,
            selected_interest: None,
            active_chat: None,
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, view: ActiveView) {
        debug!("navigate {:?} -> {:?}", self.active, view);
        self.active = view;
    }

    /// Select an interest channel and switch to the chat screen.
    pub fn open_interest(&mut self, interest: Interest) {
        self.selected_interest = Some(interest);
        self.navigate(ActiveView::Chat);
    }

    /// Pre-select a channel without leaving the current screen.
    pub fn select_interest(&mut self, interest: Interest) {
        self.selected_interest = Some(interest);
    }

    /// Make a direct chat active and switch to the DM screen.
    pub fn open_direct_chat(&mut self, chat_id: String) {
        self.active_chat = Some(chat_id);
        self.navigate(ActiveView::DirectMessage);
    }

    pub fn active(&self) -> ActiveView {
        self.active
    }

    pub fn selected_interest(&self) -> Option<Interest> {
        self.selected_interest
    }

    pub fn active_chat(&self) -> Option<&str> {
        self.active_chat.as_deref()
    }

    pub fn resolve(&self) -> ResolvedView {
        match self.active {
            ActiveView::Profile => ResolvedView::Profile,
            ActiveView::Schedule => ResolvedView::Schedule,
            ActiveView::CheckedIn => ResolvedView::CheckedIn,
            ActiveView::Connections => ResolvedView::Connections,
            ActiveView::Chat => match self.selected_interest {
                Some(interest) => ResolvedView::InterestChat(interest),
                None => ResolvedView::NoInterestSelected,
            },
            ActiveView::DirectMessage => match &self.active_chat {
                Some(id) => ResolvedView::DirectMessage(id.clone()),
                None => ResolvedView::NoActiveChat,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_profile() {
        let router = ViewRouter::new();
        assert_eq!(router.active(), ActiveView::Profile);
        assert_eq!(router.resolve(), ResolvedView::Profile);
    }

    #[test]
    fn test_chat_without_interest_degrades_to_placeholder() {
        let mut router = ViewRouter::new();
        router.navigate(ActiveView::Chat);
        assert_eq!(router.resolve(), ResolvedView::NoInterestSelected);
    }

    #[test]
    fn test_dm_without_chat_degrades_to_placeholder() {
        let mut router = ViewRouter::new();
        router.navigate(ActiveView::DirectMessage);
        assert_eq!(router.resolve(), ResolvedView::NoActiveChat);
    }

    #[test]
    fn test_open_interest_selects_and_navigates() {
        let mut router = ViewRouter::new();
        router.open_interest(Interest::Blockchain);
        assert_eq!(router.resolve(), ResolvedView::InterestChat(Interest::Blockchain));
    }

    #[test]
    fn test_selection_persists_across_navigation() {
        let mut router = ViewRouter::new();
        router.open_interest(Interest::AiMl);
        router.open_direct_chat("dm:a:b".to_string());
        router.navigate(ActiveView::Schedule);

        router.navigate(ActiveView::Chat);
        assert_eq!(router.resolve(), ResolvedView::InterestChat(Interest::AiMl));
        router.navigate(ActiveView::DirectMessage);
        assert_eq!(
            router.resolve(),
            ResolvedView::DirectMessage("dm:a:b".to_string())
        );
    }
}
