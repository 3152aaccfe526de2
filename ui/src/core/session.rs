//! Authenticated-user records as the navigation chrome sees them.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for each missing name part.
pub const MISSING_NAME_PART: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl CurrentUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

/// Slice of the auth store the navbar reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default)]
    pub current_user: Option<CurrentUser>,
}

impl AuthState {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            current_user: Some(user),
        }
    }

    pub fn display_name(&self) -> String {
        display_name(self.current_user.as_ref())
    }
}

/// `"<first> <last>"`. Missing parts (or a missing user) render as `undefined`
/// rather than failing; callers that need a guard must add it themselves.
pub fn display_name(user: Option<&CurrentUser>) -> String {
    let first = user
        .and_then(|u| u.first_name.as_deref())
        .unwrap_or(MISSING_NAME_PART);
    let last = user
        .and_then(|u| u.last_name.as_deref())
        .unwrap_or(MISSING_NAME_PART);
    format!("{first} {last}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_first_and_last_name() {
        let user = CurrentUser::new("Ada", "Lovelace");
        assert_eq!(display_name(Some(&user)), "Ada Lovelace");
        assert_eq!(AuthState::signed_in(user).display_name(), "Ada Lovelace");
    }

    #[test]
    fn absent_user_degrades_to_placeholder() {
        assert_eq!(display_name(None), "undefined undefined");
        assert_eq!(AuthState::default().display_name(), "undefined undefined");
    }

    #[test]
    fn missing_field_degrades_only_that_part() {
        let user: CurrentUser = serde_json::from_str(r#"{"firstName":"Grace"}"#).unwrap();
        assert_eq!(display_name(Some(&user)), "Grace undefined");
    }
}
