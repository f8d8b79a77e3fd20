//! Rendering seam consumed at report time.

use crate::product::Product;
use crate::review::Review;

/// Locale-aware rendering contract.
///
/// The catalog passes product and review values through untouched; currency,
/// date patterns and translated templates all live behind this trait. The
/// active formatter is chosen by the caller and passed explicitly into
/// report generation; the catalog holds no formatter state.
pub trait ReportFormatter {
    /// One-line rendering of a product.
    fn format_product(&self, product: &Product) -> String;

    /// One-line rendering of a review.
    fn format_review(&self, review: &Review) -> String;

    /// Localized resource lookup. Unknown keys render as the key itself
    /// rather than failing.
    fn text(&self, key: &str) -> String;
}
