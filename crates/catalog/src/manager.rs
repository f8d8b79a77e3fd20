//! Catalog manager: owns the products and their reviews.

use std::cmp::Ordering;
use std::collections::HashMap;

use shopfront_core::{CatalogError, CatalogResult, Entity, ProductId};

use crate::product::Product;
use crate::rating::Rating;
use crate::report::ReportFormatter;
use crate::review::Review;

/// One product value plus the reviews submitted against it.
#[derive(Debug, Clone)]
struct CatalogEntry {
    product: Product,
    reviews: Vec<Review>,
}

/// In-memory catalog of products and their consumer reviews.
///
/// The catalog is the single owner of the authoritative product values;
/// callers only ever receive copies. Entries are keyed by [`ProductId`], so
/// replacing a product value on review is one in-place update; no
/// intermediate state (missing entry, stale rating) is observable. All
/// mutations take `&mut self`; an embedder with concurrent callers must wrap
/// the whole catalog in a single lock.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<ProductId, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a product with an empty review list, unless the id is taken.
    ///
    /// Create is idempotent on id: an existing entry keeps both its product
    /// value and its reviews, and that pre-existing value is what callers
    /// get back.
    pub fn create_product(&mut self, product: Product) -> Product {
        let id = product.id();
        let entry = self.entries.entry(id).or_insert_with(|| {
            tracing::debug!(product_id = %id, "catalog entry created");
            CatalogEntry {
                product,
                reviews: Vec::new(),
            }
        });
        entry.product.clone()
    }

    /// Submit a review for the product with this id.
    ///
    /// Appends the review, recomputes the aggregate rating and replaces the
    /// stored product value in one step. Returns the new product value; an
    /// unknown id leaves the catalog untouched.
    pub fn review_product(
        &mut self,
        id: ProductId,
        rating: Rating,
        comments: &str,
    ) -> CatalogResult<Product> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(CatalogError::not_found(id))?;

        entry.reviews.push(Review::new(rating, comments));
        let aggregate = aggregate_rating(&entry.reviews);
        entry.product = entry.product.apply_rating(aggregate);

        tracing::debug!(
            product_id = %id,
            aggregate = ?aggregate,
            reviews = entry.reviews.len(),
            "review recorded"
        );
        Ok(entry.product.clone())
    }

    /// [`Catalog::review_product`] with the identity taken from a product
    /// value.
    pub fn review(
        &mut self,
        product: &Product,
        rating: Rating,
        comments: &str,
    ) -> CatalogResult<Product> {
        self.review_product(product.id(), rating, comments)
    }

    /// Current product value for the id, if an entry exists.
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.entries.get(&id).map(|entry| &entry.product)
    }

    /// All current product values, sorted by the injected total order.
    pub fn list_products(
        &self,
        mut sorter: impl FnMut(&Product, &Product) -> Ordering,
    ) -> Vec<Product> {
        let mut products: Vec<Product> =
            self.entries.values().map(|e| e.product.clone()).collect();
        products.sort_by(|a, b| sorter(a, b));
        products
    }

    /// Render the product line plus its reviews, ascending by rating level.
    ///
    /// An empty review list renders the `no.reviews` placeholder line.
    pub fn report_for(
        &self,
        id: ProductId,
        formatter: &dyn ReportFormatter,
    ) -> CatalogResult<String> {
        let entry = self
            .entries
            .get(&id)
            .ok_or(CatalogError::not_found(id))?;

        let mut reviews = entry.reviews.clone();
        // Stable sort: submissions with equal ratings keep their order.
        reviews.sort_by_key(Review::rating);

        let mut txt = String::new();
        txt.push_str(&formatter.format_product(&entry.product));
        txt.push('\n');
        if reviews.is_empty() {
            txt.push_str(&formatter.text("no.reviews"));
            txt.push('\n');
        } else {
            for review in &reviews {
                txt.push_str(&formatter.format_review(review));
                txt.push('\n');
            }
        }
        Ok(txt)
    }

    /// [`Catalog::report_for`] with the identity taken from a product value.
    pub fn report(
        &self,
        product: &Product,
        formatter: &dyn ReportFormatter,
    ) -> CatalogResult<String> {
        self.report_for(product.id(), formatter)
    }
}

/// Round-half-up mean of the review ordinals, converted back to a level.
///
/// The conversion goes through [`Rating::from_score`], so a mean outside the
/// scale would degrade to `NotRated` rather than fail.
fn aggregate_rating(reviews: &[Review]) -> Rating {
    debug_assert!(!reviews.is_empty());
    let sum: u32 = reviews.iter().map(|r| r.rating().ordinal()).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    Rating::from_score(mean.round() as i32)
}
