// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire types for the directory response.

use serde::Deserialize;

use crate::model::Profile;

#[derive(Debug, Deserialize)]
pub(crate) struct DirectoryResponse {
    pub(crate) results: Vec<WireProfile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireProfile {
    name: WireName,
    email: String,
    cell: String,
    dob: WireDob,
    location: WireLocation,
    picture: WirePicture,
}

#[derive(Debug, Deserialize)]
struct WireName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct WireDob {
    date: String,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    street: WireStreet,
    city: String,
    state: String,
    postcode: WireScalar,
}

/// Older API revisions return the street as a flat string; newer ones split
/// it into number and name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireStreet {
    Flat(String),
    Structured { number: u64, name: String },
}

impl WireStreet {
    fn into_display(self) -> String {
        match self {
            Self::Flat(street) => street,
            Self::Structured { number, name } => format!("{number} {name}"),
        }
    }
}

/// Postcodes arrive as strings or bare numbers depending on nationality.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Text(String),
    Number(i64),
}

impl WireScalar {
    fn into_display(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WirePicture {
    thumbnail: String,
}

pub(crate) fn profiles_from_response(response: DirectoryResponse) -> Vec<Profile> {
    response.results.into_iter().map(profile_from_wire).collect()
}

fn profile_from_wire(wire: WireProfile) -> Profile {
    Profile::new(wire.name.first, wire.name.last, wire.email)
        .with_cell(wire.cell)
        .with_birth_date(wire.dob.date)
        .with_address(
            wire.location.street.into_display(),
            wire.location.city,
            wire.location.state,
            wire.location.postcode.into_display(),
        )
        .with_thumbnail(wire.picture.thumbnail)
}
