// Copyright 2026 Viktor Reusch
//
// This file is part of shelter_convert.
//
// shelter_convert is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// shelter_convert is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License
// for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with shelter_convert. If not, see <https://www.gnu.org/licenses/>.

//! Rendering shelters as comma-separated POI text.
//!
//! Each shelter becomes one `lon,lat,"title","description"` record. The
//! description spans several lines and lists the features first, followed by
//! the address and the booking notice.

use std::fmt::Write;

use crate::feature::Wording;
use crate::shelter::ShelterRecord;

/// Render all `shelters` as POI records.
///
/// # Example
/// ```
/// # use shelter_convert::{decode, render_poi};
/// #
/// let feed = br#"[{"name": "Skovly", "longitude": 10.2, "latitude": 56.1,
///                 "address": "", "booking": 0, "features": [9002]}]"#;
/// let poi = render_poi(&decode(feed).unwrap());
/// assert_eq!(poi, "10.2,56.1,\"Skovly\",\"Features:\nHas WC\n\"\n");
/// ```
pub fn render_poi(shelters: &[ShelterRecord]) -> String {
    let mut poi = String::new();
    for shelter in shelters {
        write_record(&mut poi, shelter);
    }
    poi
}

/// Append the POI record for a single `shelter` to `out`.
pub fn write_record(out: &mut String, shelter: &ShelterRecord) {
    writeln!(
        out,
        "{},{},\"{}\",\"Features:",
        shelter.longitude,
        shelter.latitude,
        shelter.unquoted_name()
    )
    .unwrap();
    for feature in &shelter.features {
        writeln!(out, "{}", feature.describe(Wording::Label)).unwrap();
    }
    if !shelter.address.is_empty() {
        writeln!(out, "Address: {}", shelter.address).unwrap();
    }
    if shelter.bookable {
        out.push_str("Booking possible\n");
    }
    out.push_str("\"\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FeatureCode;

    fn shelter(features: &[i64]) -> ShelterRecord {
        ShelterRecord {
            name: "Bålpladsen".to_string(),
            longitude: "12.5".into(),
            latitude: "55.7".into(),
            address: String::new(),
            bookable: false,
            features: features.iter().copied().map(FeatureCode).collect(),
        }
    }

    #[test]
    fn one_line_per_feature_in_order() {
        let poi = render_poi(&[shelter(&[10, 9, 10, 31337])]);
        assert_eq!(
            poi,
            "12.5,55.7,\"Bålpladsen\",\"Features:\n\
             Has fireplace\n\
             Has shelter\n\
             Has fireplace\n\
             Unknown feature: 31337\n\
             \"\n"
        );
    }

    #[test]
    fn address_and_booking_follow_features() {
        let mut record = shelter(&[0]);
        record.address = "Skovvej 3".to_string();
        record.bookable = true;
        assert_eq!(
            render_poi(&[record]),
            "12.5,55.7,\"Bålpladsen\",\"Features:\n\
             Putting up a tent is allowed\n\
             Address: Skovvej 3\n\
             Booking possible\n\
             \"\n"
        );
    }

    #[test]
    fn empty_address_is_omitted() {
        let poi = render_poi(&[shelter(&[])]);
        assert!(!poi.contains("Address"));
        assert!(!poi.contains("Booking"));
        assert_eq!(poi, "12.5,55.7,\"Bålpladsen\",\"Features:\n\"\n");
    }

    #[test]
    fn quotes_are_stripped_from_name() {
        let mut record = shelter(&[]);
        record.name = "\"Det gamle\" shelter \"".to_string();
        let poi = render_poi(&[record]);
        assert!(poi.starts_with("12.5,55.7,\"Det gamle shelter \",\"Features:\n"));
        assert_eq!(poi.matches('"').count(), 4);
    }

    #[test]
    fn no_shelters_render_nothing() {
        assert_eq!(render_poi(&[]), "");
    }
}
