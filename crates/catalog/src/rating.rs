//! Discrete rating scale.

use serde::{Deserialize, Serialize};
use shopfront_core::ValueObject;

/// Fixed six-level rating scale, with `NotRated` at the low end.
///
/// The ordinal positions (0..=5) are what the aggregation arithmetic
/// operates on; declaration order is the total order of the scale.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    #[default]
    NotRated,
    OneStar,
    TwoStars,
    ThreeStars,
    FourStars,
    FiveStars,
}

impl Rating {
    /// Highest ordinal on the scale.
    pub const MAX_ORDINAL: i32 = 5;

    /// Level at the given ordinal.
    ///
    /// Out-of-range scores degrade silently to `NotRated`, never an error.
    /// Review aggregation relies on this exact policy.
    pub fn from_score(score: i32) -> Self {
        match score {
            0 => Rating::NotRated,
            1 => Rating::OneStar,
            2 => Rating::TwoStars,
            3 => Rating::ThreeStars,
            4 => Rating::FourStars,
            5 => Rating::FiveStars,
            _ => Rating::NotRated,
        }
    }

    /// Ordinal position on the scale (0..=5).
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Star-glyph label, filled up to the ordinal.
    pub fn stars(self) -> &'static str {
        match self {
            Rating::NotRated => "☆☆☆☆☆",
            Rating::OneStar => "★☆☆☆☆",
            Rating::TwoStars => "★★☆☆☆",
            Rating::ThreeStars => "★★★☆☆",
            Rating::FourStars => "★★★★☆",
            Rating::FiveStars => "★★★★★",
        }
    }
}

impl ValueObject for Rating {}
