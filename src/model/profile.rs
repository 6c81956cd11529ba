// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A single person entry in the directory.
///
/// Profiles are assembled once (from the wire or from fixtures) and never
/// mutated afterwards. Fields that the source may omit default to empty
/// strings rather than options; the record shape is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    first_name: String,
    last_name: String,
    email: String,
    cell: String,
    birth_date: String,
    street: String,
    city: String,
    state: String,
    postcode: String,
    thumbnail: String,
}

impl Profile {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_cell(mut self, cell: impl Into<String>) -> Self {
        self.cell = cell.into();
        self
    }

    /// Birth date as supplied by the source, an ISO-8601 timestamp.
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = birth_date.into();
        self
    }

    pub fn with_address(
        mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        self.street = street.into();
        self.city = city.into();
        self.state = state.into();
        self.postcode = postcode.into();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cell(&self) -> &str {
        &self.cell
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Uppercased first letters of both names, the card's stand-in for the
    /// thumbnail image.
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        for name in [&self.first_name, &self.last_name] {
            if let Some(ch) = name.chars().next() {
                initials.extend(ch.to_uppercase());
            }
        }
        initials
    }

    /// Calendar-day prefix of the birth date (`YYYY-MM-DD`), or the raw value
    /// when it is shorter than a full date.
    pub fn birth_date_day(&self) -> &str {
        self.birth_date.get(..10).unwrap_or(&self.birth_date)
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;

    fn sample() -> Profile {
        Profile::new("Meadow", "Hall", "meadow.hall@example.com")
            .with_cell("0412-345-678")
            .with_birth_date("1984-11-02T09:44:18.674Z")
            .with_address("13 George Street", "Carlton", "Victoria", "3053")
            .with_thumbnail("https://example.com/thumbs/meadow.jpg")
    }

    #[test]
    fn builder_fills_every_field() {
        let profile = sample();
        assert_eq!(profile.first_name(), "Meadow");
        assert_eq!(profile.last_name(), "Hall");
        assert_eq!(profile.email(), "meadow.hall@example.com");
        assert_eq!(profile.cell(), "0412-345-678");
        assert_eq!(profile.street(), "13 George Street");
        assert_eq!(profile.city(), "Carlton");
        assert_eq!(profile.state(), "Victoria");
        assert_eq!(profile.postcode(), "3053");
        assert_eq!(profile.thumbnail(), "https://example.com/thumbs/meadow.jpg");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample().full_name(), "Meadow Hall");
    }

    #[test]
    fn initials_take_one_letter_per_name() {
        assert_eq!(sample().initials(), "MH");
        assert_eq!(Profile::new("ada", "lovelace", "ada@example.com").initials(), "AL");
        assert_eq!(Profile::new("", "", "").initials(), "");
    }

    #[test]
    fn birth_date_day_truncates_to_the_date_part() {
        assert_eq!(sample().birth_date_day(), "1984-11-02");
        let short = Profile::new("A", "B", "ab@example.com").with_birth_date("1984");
        assert_eq!(short.birth_date_day(), "1984");
    }
}
