//! Context handle wiring the pure reducer to Dioxus and to the session
//! store. Pages dispatch through this; only `login`/`logout` touch storage.

use dioxus::prelude::*;

use crate::app::api::{Customer, Room, UserIdentity};
use crate::app::session::SessionStore;
use crate::app::state::{Action, AppState, EditTarget, Page};

/// Cheap copyable handle over the app state signal.
#[derive(Clone, Copy)]
pub struct AppController {
    state: Signal<AppState>,
}

/// Install the state context at the app root. Restores any persisted session
/// so a remembered user lands straight on the dashboard.
pub fn use_app_provider() -> AppController {
    let state = use_context_provider(|| {
        Signal::new(AppState::restored(SessionStore::runtime().restore()))
    });
    AppController { state }
}

/// Grab the controller anywhere below the root.
pub fn use_app() -> AppController {
    AppController {
        state: use_context::<Signal<AppState>>(),
    }
}

impl AppController {
    fn dispatch(&mut self, action: Action) {
        let next = self.state.peek().apply(action);
        self.state.set(next);
    }

    // ---- reads (subscribe the calling component) ----

    pub fn page(&self) -> Page {
        self.state.read().page
    }

    pub fn menu_open(&self) -> bool {
        self.state.read().menu_open
    }

    pub fn user_name(&self) -> Option<String> {
        self.state.read().user.as_ref().map(|u| u.name.clone())
    }

    pub fn editing_customer(&self) -> Option<Customer> {
        match self.state.read().edit_target.as_ref() {
            Some(EditTarget::Customer(c)) => Some(c.clone()),
            _ => None,
        }
    }

    pub fn editing_room(&self) -> Option<Room> {
        match self.state.read().edit_target.as_ref() {
            Some(EditTarget::Room(r)) => Some(r.clone()),
            _ => None,
        }
    }

    // ---- transitions ----

    pub fn navigate(&mut self, page: Page) {
        self.dispatch(Action::Navigate(page));
    }

    pub fn edit(&mut self, target: EditTarget) {
        self.dispatch(Action::Edit(target));
    }

    /// Successful login: persist to the scope picked by `remember`, then
    /// transition to the dashboard.
    pub fn login(&mut self, user: UserIdentity, remember: bool) {
        SessionStore::runtime().login(&user, remember);
        self.dispatch(Action::LoggedIn(user));
    }

    /// Registration auto-login: always the ephemeral scope.
    pub fn register_login(&mut self, user: UserIdentity) {
        self.login(user, false);
    }

    pub fn logout(&mut self) {
        SessionStore::runtime().logout();
        self.dispatch(Action::Logout);
    }

    pub fn toggle_menu(&mut self) {
        self.dispatch(Action::ToggleMenu);
    }

    pub fn close_menu(&mut self) {
        self.dispatch(Action::CloseMenu);
    }
}
