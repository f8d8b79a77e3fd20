//! Consumer review value.

use serde::{Deserialize, Serialize};
use shopfront_core::ValueObject;

use crate::rating::Rating;

/// A single consumer review: a rating level plus free-text comments.
///
/// Immutable once created. Reports order reviews ascending by rating with a
/// stable sort keyed on the rating; no `Ord` is defined here because an
/// order over the rating alone would disagree with field equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    rating: Rating,
    comments: String,
}

impl Review {
    pub fn new(rating: Rating, comments: impl Into<String>) -> Self {
        Self {
            rating,
            comments: comments.into(),
        }
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }
}

impl ValueObject for Review {}
