// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::profile::Profile;

fn person(
    first: &str,
    last: &str,
    cell: &str,
    dob: &str,
    street: &str,
    city: &str,
    postcode: &str,
) -> Profile {
    let email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
    let thumbnail = format!(
        "https://example.com/thumbs/{}-{}.jpg",
        first.to_lowercase(),
        last.to_lowercase()
    );
    Profile::new(first, last, email)
        .with_cell(cell)
        .with_birth_date(dob)
        .with_address(street, city, "Victoria", postcode)
        .with_thumbnail(thumbnail)
}

/// Twelve-entry built-in directory backing `--demo` mode.
pub(crate) fn profile_dozen() -> Vec<Profile> {
    vec![
        person("Meadow", "Hall", "0412-001-001", "1984-11-02T09:44:18.674Z", "13 George Street", "Carlton", "3053"),
        person("Angus", "Webb", "0412-001-002", "1990-04-12T08:15:00.120Z", "48 Flinders Lane", "Melbourne", "3000"),
        person("Isla", "Turner", "0412-001-003", "1976-01-30T17:02:41.009Z", "7 Station Road", "Brunswick", "3056"),
        person("Callum", "Reid", "0412-001-004", "1988-09-08T02:51:13.550Z", "221 Victoria Parade", "Fitzroy", "3065"),
        person("Savannah", "Brooks", "0412-001-005", "1995-06-19T11:33:27.301Z", "5 Ocean Drive", "Geelong", "3220"),
        person("Harrison", "Clarke", "0412-001-006", "1969-12-24T23:59:59.000Z", "90 High Street", "Bendigo", "3550"),
        person("Matilda", "Doyle", "0412-001-007", "1992-03-03T06:20:45.812Z", "16 Chapel Street", "Prahran", "3181"),
        person("Lachlan", "Price", "0412-001-008", "1981-07-14T14:08:02.477Z", "33 River Esplanade", "Docklands", "3008"),
        person("Evie", "Sharma", "0412-001-009", "1998-10-27T19:45:36.220Z", "2 Sydney Road", "Coburg", "3058"),
        person("Oscar", "Nguyen", "0412-001-010", "1973-05-05T05:05:05.005Z", "118 Lygon Street", "Carlton", "3053"),
        person("Ruby", "Fraser", "0412-001-011", "1986-08-21T10:12:53.940Z", "64 Beach Road", "St Kilda", "3182"),
        person("Theodore", "Walsh", "0412-001-012", "1979-02-09T21:30:10.333Z", "9 Garden Terrace", "Richmond", "3121"),
    ]
}

/// Minimal three-entry sequence with one name matching "a" case-sensitively,
/// two matching case-folded.
#[cfg(test)]
pub(crate) fn profile_trio() -> Vec<Profile> {
    vec![
        person("Alice", "Nguyen", "0412-002-001", "1991-01-01T00:00:00.000Z", "1 First Street", "Carlton", "3053"),
        person("Bob", "Mercer", "0412-002-002", "1992-02-02T00:00:00.000Z", "2 Second Street", "Fitzroy", "3065"),
        person("Carol", "Diaz", "0412-002-003", "1993-03-03T00:00:00.000Z", "3 Third Street", "Coburg", "3058"),
    ]
}
