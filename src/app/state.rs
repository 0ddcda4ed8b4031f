//! Application state and the pure reducer driving navigation.
//!
//! One immutable snapshot (`AppState`) transitioned by `apply`. The reducer
//! owns the auth gate: while logged out, the only reachable pages are
//! `Login` and `Register` - any protected navigation lands back on `Login`.
//! Storage side effects live in the controller, never here.

use crate::app::api::{Customer, Room, UserIdentity};

/// Every screen in the app. Exactly one is current at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    CustomerList,
    CustomerForm,
    RoomList,
    RoomForm,
    ReservationList,
    ReservationForm,
}

impl Page {
    /// Only the auth screens are reachable while logged out.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Login | Page::Register)
    }
}

/// The entity a form page is bound to. Present = edit mode, absent = create.
#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget {
    Customer(Customer),
    Room(Room),
}

impl EditTarget {
    /// The form page this target belongs on.
    pub fn form_page(&self) -> Page {
        match self {
            EditTarget::Customer(_) => Page::CustomerForm,
            EditTarget::Room(_) => Page::RoomForm,
        }
    }
}

/// State transitions. Everything the UI can do to the snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Go to a page in create/plain mode. Clears any pending edit target.
    Navigate(Page),
    /// Go to the matching form page bound to an existing entity.
    Edit(EditTarget),
    /// A login or registration succeeded.
    LoggedIn(UserIdentity),
    Logout,
    ToggleMenu,
    CloseMenu,
}

/// Immutable application snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub page: Page,
    pub user: Option<UserIdentity>,
    pub edit_target: Option<EditTarget>,
    pub menu_open: bool,
}

impl AppState {
    pub fn logged_out() -> Self {
        AppState {
            page: Page::Login,
            user: None,
            edit_target: None,
            menu_open: false,
        }
    }

    /// Initial state from whatever the session store restored.
    pub fn restored(user: Option<UserIdentity>) -> Self {
        match user {
            Some(user) => AppState {
                page: Page::Dashboard,
                user: Some(user),
                edit_target: None,
                menu_open: false,
            },
            None => AppState::logged_out(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Pure transition. Invariants:
    /// - logged out => page is `Login` or `Register`
    /// - every navigation closes the mobile drawer
    /// - leaving a form page clears its edit target
    pub fn apply(&self, action: Action) -> AppState {
        let mut next = self.clone();
        match action {
            Action::Navigate(page) => {
                if page.requires_auth() && !self.is_logged_in() {
                    tracing::warn!(?page, "blocked protected navigation while logged out");
                    next.page = Page::Login;
                } else {
                    next.page = page;
                }
                next.edit_target = None;
                next.menu_open = false;
            }
            Action::Edit(target) => {
                if !self.is_logged_in() {
                    next.page = Page::Login;
                    next.edit_target = None;
                } else {
                    next.page = target.form_page();
                    next.edit_target = Some(target);
                }
                next.menu_open = false;
            }
            Action::LoggedIn(user) => {
                next.user = Some(user);
                next.page = Page::Dashboard;
                next.edit_target = None;
                next.menu_open = false;
            }
            Action::Logout => {
                next = AppState::logged_out();
            }
            Action::ToggleMenu => {
                next.menu_open = !self.menu_open;
            }
            Action::CloseMenu => {
                next.menu_open = false;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api::{RoomStatus, RoomType};

    fn user() -> UserIdentity {
        serde_json::from_str(r#"{"id":1,"name":"A"}"#).unwrap()
    }

    fn room() -> Room {
        Room {
            id: 5,
            number: "101".into(),
            room_type: RoomType::Silver,
            daily_rate: 150.0,
            status: RoomStatus::Available,
        }
    }

    fn customer() -> Customer {
        serde_json::from_str(r#"{"id":3,"name":"Maria"}"#).unwrap()
    }

    #[test]
    fn protected_pages_redirect_to_login_while_logged_out() {
        let state = AppState::logged_out();
        for page in [
            Page::Dashboard,
            Page::CustomerList,
            Page::CustomerForm,
            Page::RoomList,
            Page::RoomForm,
            Page::ReservationList,
            Page::ReservationForm,
        ] {
            let next = state.apply(Action::Navigate(page));
            assert_eq!(next.page, Page::Login, "{page:?} must redirect");
        }
    }

    #[test]
    fn register_is_reachable_while_logged_out() {
        let next = AppState::logged_out().apply(Action::Navigate(Page::Register));
        assert_eq!(next.page, Page::Register);
    }

    #[test]
    fn login_lands_on_dashboard() {
        let next = AppState::logged_out().apply(Action::LoggedIn(user()));
        assert_eq!(next.page, Page::Dashboard);
        assert!(next.is_logged_in());
        assert!(next.edit_target.is_none());
    }

    #[test]
    fn logout_resets_everything() {
        let state = AppState::restored(Some(user()))
            .apply(Action::Edit(EditTarget::Room(room())))
            .apply(Action::ToggleMenu);
        let next = state.apply(Action::Logout);
        assert_eq!(next, AppState::logged_out());
    }

    #[test]
    fn edit_binds_the_matching_form() {
        let state = AppState::restored(Some(user()));

        let next = state.apply(Action::Edit(EditTarget::Customer(customer())));
        assert_eq!(next.page, Page::CustomerForm);
        assert!(matches!(next.edit_target, Some(EditTarget::Customer(_))));

        let next = state.apply(Action::Edit(EditTarget::Room(room())));
        assert_eq!(next.page, Page::RoomForm);
        assert!(matches!(next.edit_target, Some(EditTarget::Room(_))));
    }

    #[test]
    fn plain_navigation_clears_the_edit_target() {
        let state = AppState::restored(Some(user()))
            .apply(Action::Edit(EditTarget::Customer(customer())));
        // create mode: same form, no target
        let next = state.apply(Action::Navigate(Page::CustomerForm));
        assert_eq!(next.page, Page::CustomerForm);
        assert!(next.edit_target.is_none());
        // leaving the form also clears it
        let next = state.apply(Action::Navigate(Page::CustomerList));
        assert!(next.edit_target.is_none());
    }

    #[test]
    fn navigation_closes_the_drawer() {
        let state = AppState::restored(Some(user())).apply(Action::ToggleMenu);
        assert!(state.menu_open);
        let next = state.apply(Action::Navigate(Page::RoomList));
        assert!(!next.menu_open);
    }

    #[test]
    fn menu_toggles_independently_of_page() {
        let state = AppState::restored(Some(user()));
        let open = state.apply(Action::ToggleMenu);
        assert!(open.menu_open);
        assert_eq!(open.page, state.page);
        assert!(!open.apply(Action::ToggleMenu).menu_open);
        assert!(!open.apply(Action::CloseMenu).menu_open);
    }

    #[test]
    fn restored_session_opens_on_dashboard() {
        assert_eq!(AppState::restored(Some(user())).page, Page::Dashboard);
        assert_eq!(AppState::restored(None).page, Page::Login);
    }
}
