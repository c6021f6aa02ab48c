//! Dropdown contents built from a users listing.

use serde::Serialize;

use crate::models::user::UserRecord;

/// One selectable entry of the user dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    /// Submitted value (the user id rendered as text).
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Extra `avatar` attribute, set only when the endpoint supports avatars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl DropdownOption {
    /// Build an option from a record. The avatar is dropped unless
    /// `with_avatar` is set, even when the server sent one.
    pub fn from_record(record: &UserRecord, with_avatar: bool) -> Self {
        Self {
            value: record.user_id.to_string(),
            label: record.name.clone(),
            avatar: if with_avatar { record.avatar.clone() } else { None },
        }
    }
}

/// Ordered options held by the dropdown control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DropdownState {
    options: Vec<DropdownOption>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.options.clear();
    }

    pub fn push(&mut self, option: DropdownOption) {
        self.options.push(option);
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
