//! Success banner that hides itself after a delay.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Banner text plus the showing it belongs to. A delayed hide only applies to
/// the showing that scheduled it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimedNotice {
    text: String,
    generation: u64,
}

impl TimedNotice {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display `text`; pass the returned ticket to [`Self::expire`] later.
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.text = text.into();
        self.generation
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Hide the banner if it is still the showing identified by `ticket`.
    pub fn expire(&mut self, ticket: u64) {
        if self.generation == ticket {
            self.text.clear();
        }
    }
}
