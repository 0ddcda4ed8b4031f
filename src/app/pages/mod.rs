//! Screen components, one per `Page` variant.
//!
//! List screens share the load/delete pattern helpers below; form screens
//! share the validation in `app::validate`.

mod customer_form;
mod customer_list;
mod dashboard;
mod login;
mod register;
mod reservation_form;
mod reservation_list;
mod room_form;
mod room_list;

pub use customer_form::CustomerForm;
pub use customer_list::CustomerList;
pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
pub use reservation_form::ReservationForm;
pub use reservation_list::ReservationList;
pub use room_form::RoomForm;
pub use room_list::RoomList;

/// Collection load lifecycle for the list screens.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Optimistic local removal after a confirmed, successful delete - the list
/// is not re-fetched.
pub(crate) fn remove_by_id<T>(items: &mut Vec<T>, id: i64, id_of: impl Fn(&T) -> i64) {
    items.retain(|item| id_of(item) != id);
}

/// Detail-panel selection after a delete: collapse only when the deleted row
/// was the one expanded.
pub(crate) fn selection_after_delete(selected: Option<i64>, deleted_id: i64) -> Option<i64> {
    if selected == Some(deleted_id) {
        None
    } else {
        selected
    }
}

/// Browser confirmation gate in front of every destructive call.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_by_id_only_touches_the_matching_item() {
        let mut items = vec![(1, "a"), (2, "b"), (3, "c")];
        remove_by_id(&mut items, 2, |item| item.0);
        assert_eq!(items, vec![(1, "a"), (3, "c")]);

        // unknown id leaves the list alone (failed delete rolls back to this)
        remove_by_id(&mut items, 99, |item| item.0);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn deleting_another_row_keeps_the_detail_panel_open() {
        assert_eq!(selection_after_delete(Some(2), 2), None);
        assert_eq!(selection_after_delete(Some(2), 5), Some(2));
        assert_eq!(selection_after_delete(None, 5), None);
    }
}
