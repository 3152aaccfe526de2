use dioxus::prelude::*;

use crate::t;

/// Option value of the logout entry. Display names always contain a space
/// (`"<first> <last>"`), so they can never collide with it.
pub const LOGOUT_VALUE: &str = "__logout__";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuEntry {
    /// The read-only display-name row; selecting it changes nothing.
    DisplayName,
    Logout,
}

impl UserMenuEntry {
    pub fn from_value(value: &str) -> Self {
        if value == LOGOUT_VALUE {
            UserMenuEntry::Logout
        } else {
            UserMenuEntry::DisplayName
        }
    }
}

/// Remount counter for the native `select`.
///
/// A `select` keeps whatever option the user picked, and re-rendering with an
/// unchanged `value` leaves the DOM alone. Keying the element on this counter
/// and bumping it after every pick remounts it showing the display name again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionEpoch(u32);

impl SelectionEpoch {
    #[must_use]
    pub fn after_pick(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn key(self) -> String {
        format!("user-menu-{}", self.0)
    }
}

/// Selector showing the current user's name with a logout entry.
#[component]
pub fn UserMenu(full_name: String, on_select: EventHandler<UserMenuEntry>) -> Element {
    let mut epoch = use_signal(SelectionEpoch::default);
    let key = epoch().key();

    rsx! {
        div { class: "user-menu",
            for key in std::iter::once(key) {
                select {
                    key: "{key}",
                    class: "user-menu__select",
                    aria_label: t!("nav-user-menu-label"),
                    value: "{full_name}",
                    onchange: move |evt: FormEvent| {
                        on_select.call(UserMenuEntry::from_value(&evt.value()));
                        let next = epoch.peek().after_pick();
                        epoch.set(next);
                    },
                    option { value: "{full_name}", selected: true, "{full_name}" }
                    option { value: LOGOUT_VALUE, {t!("nav-logout")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_value_maps_to_logout() {
        assert_eq!(UserMenuEntry::from_value(LOGOUT_VALUE), UserMenuEntry::Logout);
    }

    #[test]
    fn every_pick_moves_the_select_to_a_fresh_key() {
        let start = SelectionEpoch::default();
        let after_logout = start.after_pick();
        let after_name = after_logout.after_pick();
        assert_ne!(start.key(), after_logout.key());
        assert_ne!(after_logout.key(), after_name.key());
    }

    #[test]
    fn display_name_rows_are_inert() {
        for value in ["Ada Lovelace", "undefined undefined", "logout", ""] {
            assert_eq!(UserMenuEntry::from_value(value), UserMenuEntry::DisplayName);
        }
    }
}
