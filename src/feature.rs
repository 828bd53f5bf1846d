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

//! Feature codes of the shelter feed and what they mean.
//!
//! The upstream API documents its amenity vocabulary at
//! <https://shelterapp.dk/api/features/>. Every code has a short label used in
//! POI descriptions and a full sentence used in KML descriptions.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};

/// Integer identifier for an amenity or property of a shelter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureCode(pub i64);

impl FeatureCode {
    pub const TENT: Self = Self(0);
    pub const DISABLED_ACCESS: Self = Self(1);
    pub const DRINKING_WATER: Self = Self(6);
    pub const SHELTER: Self = Self(9);
    pub const FIREPLACE: Self = Self(10);
    pub const CANOE_ACCESS: Self = Self(11);
    pub const SHOWER: Self = Self(12);
    pub const DOGS: Self = Self(13);
    pub const HORSES: Self = Self(14);
    pub const STROLLER_ACCESS: Self = Self(15);
    pub const HAMMOCK: Self = Self(3081);
    pub const TOILET_UNKNOWN: Self = Self(9000);
    pub const PRIMITIVE_TOILET: Self = Self(9001);
    pub const WC: Self = Self(9002);
    pub const BOOKABLE: Self = Self(9003);
    pub const PAID: Self = Self(9004);
    pub const PHOTOS: Self = Self(9005);

    /// Short label for POI descriptions, if the code is documented.
    pub fn label(self) -> Option<&'static str> {
        lookup(self).map(|text| text.label)
    }

    /// Full sentence for KML descriptions, if the code is documented.
    pub fn sentence(self) -> Option<&'static str> {
        lookup(self).map(|text| text.sentence)
    }

    /// Whether the code appears in the feature table.
    pub fn is_known(self) -> bool {
        lookup(self).is_some()
    }

    /// Text describing this feature in the given `wording`.
    ///
    /// Unknown codes never fail. They produce a fallback text which names the
    /// numeric code.
    ///
    /// # Example
    /// ```
    /// # use shelter_convert::{FeatureCode, Wording};
    /// #
    /// assert_eq!(FeatureCode::WC.describe(Wording::Label), "Has WC");
    /// assert!(FeatureCode(99999).describe(Wording::Sentence).contains("99999"));
    /// ```
    pub fn describe(self, wording: Wording) -> Cow<'static, str> {
        let text = match wording {
            Wording::Label => self.label(),
            Wording::Sentence => self.sentence(),
        };
        match text {
            Some(text) => Cow::Borrowed(text),
            None => {
                log::warn!("shelter has unknown feature code {self}");
                Cow::Owned(match wording {
                    Wording::Label => format!("Unknown feature: {self}"),
                    Wording::Sentence => format!(
                        "This shelter has an unknown feature: {self}. That's exciting! What will it be?"
                    ),
                })
            }
        }
    }
}

impl fmt::Display for FeatureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for FeatureCode {
    /// Accepts any integer as well as numeric strings like `"9002"`, which
    /// older versions of the feed used. Undocumented values are kept so they
    /// can be reported as unknown features.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(code) => Ok(Self(code)),
            Raw::Text(text) => text.trim().parse().map(Self).map_err(|_| {
                de::Error::invalid_value(Unexpected::Str(&text), &"a numeric feature code")
            }),
        }
    }
}

/// Which of the two texts of a feature to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wording {
    /// Short label, e.g. "Access to drinking water".
    Label,
    /// Full sentence, e.g. "Has access to drinking water.".
    Sentence,
}

/// Both texts for one documented feature code.
struct FeatureText {
    code: FeatureCode,
    label: &'static str,
    sentence: &'static str,
}

const fn text(code: FeatureCode, label: &'static str, sentence: &'static str) -> FeatureText {
    FeatureText {
        code,
        label,
        sentence,
    }
}

/// All documented feature codes.
const FEATURES: &[FeatureText] = &[
    text(FeatureCode::TENT, "Putting up a tent is allowed", "Putting up a tent is allowed."),
    text(FeatureCode::DISABLED_ACCESS, "Accessible for disabled", "Is accessible for disabled."),
    text(FeatureCode::DRINKING_WATER, "Access to drinking water", "Has access to drinking water."),
    text(FeatureCode::SHELTER, "Has shelter", "Has shelter."),
    text(FeatureCode::FIREPLACE, "Has fireplace", "Has fireplace."),
    text(FeatureCode::CANOE_ACCESS, "Accessible via canoe", "Is accessible via canoe."),
    text(FeatureCode::SHOWER, "Has shower facilities", "Has shower facilities."),
    text(FeatureCode::DOGS, "Dogs allowed", "Dogs allowed."),
    text(FeatureCode::HORSES, "Horses allowed", "Horses allowed."),
    text(FeatureCode::STROLLER_ACCESS, "Accessible with baby stroller", "Accessible with baby stroller."),
    text(FeatureCode::HAMMOCK, "Space for hammock", "Has space for hammock."),
    text(FeatureCode::TOILET_UNKNOWN, "No information on toilet", "No information on toilet."),
    text(FeatureCode::PRIMITIVE_TOILET, "Primitive toilet", "Has primitive toilet."),
    text(FeatureCode::WC, "Has WC", "Has WC."),
    text(FeatureCode::BOOKABLE, "Bookable", "Is bookable."),
    text(FeatureCode::PAID, "Paid", "Is paid."),
    text(FeatureCode::PHOTOS, "Photos in the app", "There are photos in the app."),
];

fn lookup(code: FeatureCode) -> Option<&'static FeatureText> {
    FEATURES.iter().find(|text| text.code == code)
}

/// Colour of the map marker for a shelter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconColor {
    #[default]
    Yellow,
    Green,
    Orange,
    Pink,
    Blue,
    Purple,
    Red,
}

impl IconColor {
    /// Classify a shelter by its `features`.
    ///
    /// The rules are evaluated in order and every rule that holds overwrites
    /// the colour chosen so far.
    ///
    /// # Example
    /// ```
    /// # use shelter_convert::{FeatureCode, IconColor};
    /// #
    /// let features = [FeatureCode::SHELTER, FeatureCode::TENT];
    /// assert_eq!(IconColor::for_features(&features), IconColor::Orange);
    /// ```
    pub fn for_features(features: &[FeatureCode]) -> Self {
        let has = |code| features.contains(&code);
        let tent = has(FeatureCode::TENT);
        let shelter = has(FeatureCode::SHELTER);
        let toilet = has(FeatureCode::PRIMITIVE_TOILET) || has(FeatureCode::WC);
        let paid = has(FeatureCode::PAID);
        let bookable = has(FeatureCode::BOOKABLE);

        let mut color = Self::Yellow;
        if tent && !shelter {
            color = Self::Green;
        }
        if shelter && tent {
            color = Self::Orange;
        }
        if shelter && tent && has(FeatureCode::DRINKING_WATER) && toilet {
            color = Self::Pink;
        }
        if shelter && !tent {
            color = Self::Blue;
        }
        if paid || bookable {
            color = Self::Purple;
        }
        if paid && bookable {
            color = Self::Red;
        }
        color
    }

    /// Lower-case colour name as used in style identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn codes(raw: &[i64]) -> Vec<FeatureCode> {
        raw.iter().copied().map(FeatureCode).collect()
    }

    #[rstest]
    #[case(&[], IconColor::Yellow)]
    #[case(&[0], IconColor::Green)]
    #[case(&[9, 0], IconColor::Orange)]
    #[case(&[9, 0, 6, 9002], IconColor::Pink)]
    #[case(&[9, 0, 6, 9001], IconColor::Pink)]
    #[case(&[9, 0, 6], IconColor::Orange)]
    #[case(&[9], IconColor::Blue)]
    #[case(&[9, 6, 9002], IconColor::Blue)]
    #[case(&[9003], IconColor::Purple)]
    #[case(&[9004], IconColor::Purple)]
    #[case(&[9, 0, 6, 9002, 9003], IconColor::Purple)]
    #[case(&[9003, 9004], IconColor::Red)]
    #[case(&[10, 12, 99999], IconColor::Yellow)]
    fn icon_color(#[case] features: &[i64], #[case] expected: IconColor) {
        assert_eq!(IconColor::for_features(&codes(features)), expected);
    }

    #[test]
    fn every_code_has_both_texts() {
        for text in FEATURES {
            assert!(!text.label.is_empty(), "{} has no label", text.code);
            assert!(text.sentence.ends_with('.'), "{} sentence", text.code);
            assert_ne!(text.label, text.sentence);
        }
    }

    #[test]
    fn table_matches_documented_codes() {
        let codes: Vec<i64> = FEATURES.iter().map(|text| text.code.0).collect();
        assert_eq!(
            codes,
            [0, 1, 6, 9, 10, 11, 12, 13, 14, 15, 3081, 9000, 9001, 9002, 9003, 9004, 9005]
        );
    }

    #[rstest]
    #[case(0, "Putting up a tent is allowed", "Putting up a tent is allowed.")]
    #[case(1, "Accessible for disabled", "Is accessible for disabled.")]
    #[case(6, "Access to drinking water", "Has access to drinking water.")]
    #[case(9, "Has shelter", "Has shelter.")]
    #[case(10, "Has fireplace", "Has fireplace.")]
    #[case(11, "Accessible via canoe", "Is accessible via canoe.")]
    #[case(12, "Has shower facilities", "Has shower facilities.")]
    #[case(13, "Dogs allowed", "Dogs allowed.")]
    #[case(14, "Horses allowed", "Horses allowed.")]
    #[case(15, "Accessible with baby stroller", "Accessible with baby stroller.")]
    #[case(3081, "Space for hammock", "Has space for hammock.")]
    #[case(9000, "No information on toilet", "No information on toilet.")]
    #[case(9001, "Primitive toilet", "Has primitive toilet.")]
    #[case(9002, "Has WC", "Has WC.")]
    #[case(9003, "Bookable", "Is bookable.")]
    #[case(9004, "Paid", "Is paid.")]
    #[case(9005, "Photos in the app", "There are photos in the app.")]
    fn every_documented_code(#[case] code: i64, #[case] label: &str, #[case] sentence: &str) {
        let code = FeatureCode(code);
        assert!(code.is_known());
        assert_eq!(code.label(), Some(label));
        assert_eq!(code.sentence(), Some(sentence));
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut seen: Vec<_> = FEATURES.iter().map(|text| text.code).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), FEATURES.len());
    }

    #[rstest]
    #[case(FeatureCode::TENT, "Putting up a tent is allowed", "Putting up a tent is allowed.")]
    #[case(FeatureCode::DRINKING_WATER, "Access to drinking water", "Has access to drinking water.")]
    #[case(FeatureCode::WC, "Has WC", "Has WC.")]
    #[case(FeatureCode::PAID, "Paid", "Is paid.")]
    fn documented_wording(
        #[case] code: FeatureCode,
        #[case] label: &str,
        #[case] sentence: &str,
    ) {
        assert_eq!(code.describe(Wording::Label), label);
        assert_eq!(code.describe(Wording::Sentence), sentence);
    }

    #[test]
    fn unknown_code_falls_back() {
        let code = FeatureCode(99999);
        assert!(!code.is_known());
        assert_eq!(code.label(), None);
        assert_eq!(code.describe(Wording::Label), "Unknown feature: 99999");
        assert_eq!(
            code.describe(Wording::Sentence),
            "This shelter has an unknown feature: 99999. That's exciting! What will it be?"
        );
    }

    #[rstest]
    #[case("9002", FeatureCode::WC)]
    #[case("\"9002\"", FeatureCode::WC)]
    #[case("0", FeatureCode::TENT)]
    fn deserializes_numbers_and_strings(#[case] json: &str, #[case] expected: FeatureCode) {
        let code: FeatureCode = serde_json::from_str(json).expect("valid code");
        assert_eq!(code, expected);
    }

    #[rstest]
    #[case("-1", FeatureCode(-1))]
    #[case("5000000000", FeatureCode(5_000_000_000))]
    #[case("\"-7\"", FeatureCode(-7))]
    fn keeps_undocumented_integers(#[case] json: &str, #[case] expected: FeatureCode) {
        let code: FeatureCode = serde_json::from_str(json).expect("integer code");
        assert_eq!(code, expected);
        assert!(!code.is_known());
        assert!(code.describe(Wording::Label).contains(&expected.to_string()));
    }

    #[rstest]
    #[case("\"toilet\"")]
    #[case("1.5")]
    #[case("null")]
    fn rejects_non_numeric_codes(#[case] json: &str) {
        assert!(serde_json::from_str::<FeatureCode>(json).is_err());
    }
}
