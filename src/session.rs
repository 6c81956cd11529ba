// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session state the TUI runs against.

use crate::model::Profile;
use crate::query::{filter_profiles, NameMatchMode};

/// Owns the full fetched sequence and the active (possibly filtered) one.
///
/// The active sequence is always replaced wholesale: once at construction and
/// once per filter submission. Everything the gallery renders and every index
/// the overlay receives comes from `active()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySession {
    profiles: Vec<Profile>,
    active: Vec<Profile>,
    query: String,
    match_mode: NameMatchMode,
}

impl DirectorySession {
    pub fn new(profiles: Vec<Profile>, match_mode: NameMatchMode) -> Self {
        let active = profiles.clone();
        Self { profiles, active, query: String::new(), match_mode }
    }

    /// The sequence as fetched, untouched by filtering.
    pub fn full(&self) -> &[Profile] {
        &self.profiles
    }

    /// The most recently rendered sequence.
    pub fn active(&self) -> &[Profile] {
        &self.active
    }

    /// The lowercased query behind the current active sequence; empty when no
    /// filter is applied.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_mode(&self) -> NameMatchMode {
        self.match_mode
    }

    pub fn has_filter(&self) -> bool {
        !self.query.is_empty()
    }

    /// Applies a submitted search to the full sequence and replaces the
    /// active one with the matches.
    ///
    /// The submitted text is lowercased here, once; the filter engine always
    /// receives an already-lowercased needle. An empty submission clears the
    /// filter.
    pub fn apply_filter(&mut self, submitted: &str) {
        let needle = submitted.to_lowercase();
        self.active = filter_profiles(&self.profiles, &needle, self.match_mode);
        self.query = needle;
    }
}

#[cfg(test)]
mod tests {
    use super::DirectorySession;
    use crate::model::fixtures::profile_trio;
    use crate::query::NameMatchMode;

    fn session() -> DirectorySession {
        DirectorySession::new(profile_trio(), NameMatchMode::FoldCase)
    }

    #[test]
    fn starts_with_active_equal_to_full() {
        let session = session();
        assert_eq!(session.active(), session.full());
        assert!(!session.has_filter());
    }

    #[test]
    fn apply_filter_replaces_active_wholesale() {
        let mut session = session();
        session.apply_filter("a");
        assert_eq!(session.active().len(), 2);
        assert_eq!(session.full().len(), 3);
        assert_eq!(session.query(), "a");
        assert!(session.has_filter());
    }

    #[test]
    fn submitted_text_is_lowercased_once() {
        let mut session = session();
        session.apply_filter("ALICE");
        assert_eq!(session.query(), "alice");
        assert_eq!(session.active().len(), 1);
        assert_eq!(session.active()[0].first_name(), "Alice");
    }

    #[test]
    fn empty_submission_clears_the_filter() {
        let mut session = session();
        session.apply_filter("zzz");
        assert!(session.active().is_empty());

        session.apply_filter("");
        assert_eq!(session.active(), session.full());
        assert!(!session.has_filter());
    }

    #[test]
    fn literal_mode_is_threaded_through() {
        let mut session = DirectorySession::new(profile_trio(), NameMatchMode::Literal);
        session.apply_filter("A");
        // Lowercased to "a"; only Carol (and her last name Diaz) matches as
        // stored.
        assert_eq!(session.active().len(), 1);
        assert_eq!(session.active()[0].first_name(), "Carol");
    }
}
