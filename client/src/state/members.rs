//! Member-search page state: results, open history, and the visit draft.
//!
//! DESIGN
//! ======
//! At most one member's visit history and one visit-entry form are open at a
//! time. Toggling the same member closes them; toggling another member moves
//! them.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use crate::net::types::{Member, NewVisitRecord, VisitRecord, non_blank};

/// Validation message for a malformed price field.
pub const INVALID_PRICE: &str = "가격은 0 이상의 숫자로 입력하세요.";
/// Validation message for a missing treatment.
pub const MISSING_TREATMENT: &str = "시술 내용을 입력하세요.";

/// One editable field of a [`VisitDraft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Treatment,
    Price,
    Memo,
    VisitedAt,
}

/// Raw visit-entry form fields for one member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitDraft {
    pub member_id: i64,
    pub treatment: String,
    pub price: String,
    pub memo: String,
    /// `datetime-local` input value, e.g. `2024-05-01T14:30`.
    pub visited_at: String,
}

impl VisitDraft {
    pub fn new(member_id: i64) -> Self {
        Self { member_id, ..Self::default() }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Treatment => &self.treatment,
            DraftField::Price => &self.price,
            DraftField::Memo => &self.memo,
            DraftField::VisitedAt => &self.visited_at,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Treatment => self.treatment = value,
            DraftField::Price => self.price = value,
            DraftField::Memo => self.memo = value,
            DraftField::VisitedAt => self.visited_at = value,
        }
    }

    /// Whether the save button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.treatment.trim().is_empty()
    }

    /// Convert the form into a request body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the treatment is blank or the price
    /// is not a non-negative integer.
    pub fn to_request(&self) -> Result<NewVisitRecord, &'static str> {
        let treatment = non_blank(&self.treatment).ok_or(MISSING_TREATMENT)?;
        let price = match self.price.trim() {
            "" => None,
            raw => Some(
                raw.parse::<i64>()
                    .ok()
                    .filter(|price| *price >= 0)
                    .ok_or(INVALID_PRICE)?,
            ),
        };
        Ok(NewVisitRecord {
            member_id: self.member_id,
            treatment,
            price,
            memo: non_blank(&self.memo),
            visited_at: non_blank(&self.visited_at),
        })
    }
}

/// Everything the member-search page shows besides its two search inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberSearchState {
    pub results: Vec<Member>,
    /// Member whose visit history is displayed.
    pub viewing_records: Option<i64>,
    pub records: Vec<VisitRecord>,
    /// Member whose visit-entry form is open, with its fields.
    pub draft: Option<VisitDraft>,
}

impl MemberSearchState {
    /// Open the entry form for `member_id`, or close it if already open.
    pub fn toggle_entry(&mut self, member_id: i64) {
        if self.entry_open_for(member_id) {
            self.draft = None;
        } else {
            self.draft = Some(VisitDraft::new(member_id));
        }
    }

    pub fn entry_open_for(&self, member_id: i64) -> bool {
        self.draft.as_ref().is_some_and(|d| d.member_id == member_id)
    }

    /// Blank the open form, keeping it open.
    pub fn reset_draft(&mut self) {
        if let Some(draft) = &mut self.draft {
            *draft = VisitDraft::new(draft.member_id);
        }
    }

    pub fn records_open_for(&self, member_id: i64) -> bool {
        self.viewing_records == Some(member_id)
    }

    /// Show `records` as the history of `member_id`.
    pub fn show_records(&mut self, member_id: i64, records: Vec<VisitRecord>) {
        self.viewing_records = Some(member_id);
        self.records = records;
    }

    pub fn hide_records(&mut self) {
        self.viewing_records = None;
        self.records.clear();
    }
}
