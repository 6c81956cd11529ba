// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filtering over the profile directory.
//!
//! The needle is expected to be lowercased by the caller before it reaches
//! this module; `NameMatchMode` decides whether the record names are folded
//! to match.

use crate::model::Profile;

/// How record names are compared against the (already lowercased) needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatchMode {
    /// Names are lowercased before comparison, so capitalization in the
    /// source data cannot hide a match.
    #[default]
    FoldCase,
    /// Names are compared exactly as stored.
    Literal,
}

/// Returns the subsequence of `profiles` whose first or last name contains
/// `needle`, preserving the original order. An empty needle matches every
/// record.
pub fn filter_profiles(profiles: &[Profile], needle: &str, mode: NameMatchMode) -> Vec<Profile> {
    if needle.is_empty() {
        return profiles.to_vec();
    }

    profiles
        .iter()
        .filter(|profile| name_matches(profile, needle, mode))
        .cloned()
        .collect()
}

fn name_matches(profile: &Profile, needle: &str, mode: NameMatchMode) -> bool {
    match mode {
        NameMatchMode::FoldCase => {
            profile.first_name().to_lowercase().contains(needle)
                || profile.last_name().to_lowercase().contains(needle)
        }
        NameMatchMode::Literal => {
            profile.first_name().contains(needle) || profile.last_name().contains(needle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_profiles, NameMatchMode};
    use crate::model::fixtures::profile_trio;
    use crate::model::Profile;

    fn first_names(profiles: &[Profile]) -> Vec<&str> {
        profiles.iter().map(Profile::first_name).collect()
    }

    #[test]
    fn empty_needle_is_identity() {
        let trio = profile_trio();
        let matches = filter_profiles(&trio, "", NameMatchMode::FoldCase);
        assert_eq!(matches, trio);

        let matches = filter_profiles(&trio, "", NameMatchMode::Literal);
        assert_eq!(matches, trio);
    }

    #[test]
    fn fold_case_matches_capitalized_names() {
        let trio = profile_trio();
        let matches = filter_profiles(&trio, "a", NameMatchMode::FoldCase);
        assert_eq!(first_names(&matches), vec!["Alice", "Carol"]);
    }

    #[test]
    fn literal_mode_compares_names_as_stored() {
        let trio = profile_trio();
        let matches = filter_profiles(&trio, "a", NameMatchMode::Literal);
        assert_eq!(first_names(&matches), vec!["Carol"]);
    }

    #[test]
    fn last_name_alone_is_enough() {
        let trio = profile_trio();
        let matches = filter_profiles(&trio, "mercer", NameMatchMode::FoldCase);
        assert_eq!(first_names(&matches), vec!["Bob"]);
    }

    #[test]
    fn matches_preserve_relative_order() {
        let trio = profile_trio();
        let matches = filter_profiles(&trio, "e", NameMatchMode::FoldCase);
        let positions: Vec<usize> = matches
            .iter()
            .map(|profile| trio.iter().position(|p| p == profile).expect("match from input"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn unmatched_needle_returns_empty() {
        let trio = profile_trio();
        assert!(filter_profiles(&trio, "zzz", NameMatchMode::FoldCase).is_empty());
    }

    #[test]
    fn other_fields_do_not_match() {
        let trio = profile_trio();
        // Every fixture email contains "example", no name does.
        assert!(filter_profiles(&trio, "example", NameMatchMode::FoldCase).is_empty());
    }
}
