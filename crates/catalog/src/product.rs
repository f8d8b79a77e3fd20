//! Product value types.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use shopfront_core::{Entity, ProductId};

use crate::rating::Rating;

/// Discount rate shared by every product variant (10%).
pub fn discount_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Catalog product.
///
/// A closed set of variants sharing id, name, price and rating. Values are
/// immutable: a rating change goes through [`Product::apply_rating`], which
/// returns a new value of the same variant and id. Identity lives in the id
/// alone (see the [`Entity`] impl); structural equality still compares all
/// fields, so two values of the same product can compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Product {
    /// Perishable product; its best-before date drives the discount.
    Food {
        id: ProductId,
        name: String,
        price: Decimal,
        rating: Rating,
        best_before: NaiveDate,
    },
    /// Non-perishable product; flat discount, no expiry date of its own.
    Drink {
        id: ProductId,
        name: String,
        price: Decimal,
        rating: Rating,
    },
}

impl Product {
    pub fn food(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        rating: Rating,
        best_before: NaiveDate,
    ) -> Self {
        Product::Food {
            id,
            name: name.into(),
            price,
            rating,
            best_before,
        }
    }

    pub fn drink(id: ProductId, name: impl Into<String>, price: Decimal, rating: Rating) -> Self {
        Product::Drink {
            id,
            name: name.into(),
            price,
            rating,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Food { name, .. } | Product::Drink { name, .. } => name,
        }
    }

    pub fn price(&self) -> Decimal {
        match self {
            Product::Food { price, .. } | Product::Drink { price, .. } => *price,
        }
    }

    pub fn rating(&self) -> Rating {
        match self {
            Product::Food { rating, .. } | Product::Drink { rating, .. } => *rating,
        }
    }

    /// Expiry date; `None` for variants that do not expire. Display surfaces
    /// substitute their own as-of date for `None`.
    pub fn best_before(&self) -> Option<NaiveDate> {
        match self {
            Product::Food { best_before, .. } => Some(*best_before),
            Product::Drink { .. } => None,
        }
    }

    /// Discount applicable on the given evaluation date.
    ///
    /// Perishables are discounted only on their best-before date; every
    /// other variant always gets the base discount.
    pub fn discount(&self, on: NaiveDate) -> Decimal {
        match self {
            Product::Food { best_before, .. } if *best_before != on => Decimal::ZERO,
            _ => self.base_discount(),
        }
    }

    /// `price * 0.10`, rounded to 2 decimal places, half-up.
    fn base_discount(&self) -> Decimal {
        (self.price() * discount_rate())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// New product value of the same variant and id, with only the rating
    /// replaced.
    pub fn apply_rating(&self, new_rating: Rating) -> Product {
        let mut next = self.clone();
        match &mut next {
            Product::Food { rating, .. } | Product::Drink { rating, .. } => *rating = new_rating,
        }
        next
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        match self {
            Product::Food { id, .. } | Product::Drink { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cookie() -> Product {
        Product::food(
            ProductId::new(3),
            "Cookie",
            Decimal::new(299, 2),
            Rating::NotRated,
            date(2026, 8, 10),
        )
    }

    fn coffee() -> Product {
        Product::drink(
            ProductId::new(2),
            "Coffee",
            Decimal::new(199, 2),
            Rating::FourStars,
        )
    }

    #[test]
    fn apply_rating_replaces_only_the_rating() {
        let before = cookie();
        let after = before.apply_rating(Rating::FiveStars);

        assert_eq!(after.rating(), Rating::FiveStars);
        assert_eq!(after.id(), before.id());
        assert_eq!(after.name(), before.name());
        assert_eq!(after.price(), before.price());
        assert_eq!(after.best_before(), before.best_before());
        assert!(matches!(after, Product::Food { .. }));
    }

    #[test]
    fn apply_rating_preserves_identity_not_value() {
        let before = coffee();
        let after = before.apply_rating(Rating::TwoStars);

        assert!(before.same_identity(&after));
        assert_ne!(before, after);
    }

    #[test]
    fn drink_discount_is_flat_ten_percent_half_up() {
        // 1.99 * 0.10 = 0.199, rounds up to 0.20.
        assert_eq!(
            coffee().discount(date(2026, 1, 1)),
            Decimal::new(20, 2)
        );
    }

    #[test]
    fn food_is_discounted_only_on_its_best_before_date() {
        let cookie = cookie();
        assert_eq!(cookie.discount(date(2026, 8, 10)), Decimal::new(30, 2));
        assert_eq!(cookie.discount(date(2026, 8, 9)), Decimal::ZERO);
        assert_eq!(cookie.discount(date(2026, 8, 11)), Decimal::ZERO);
    }

    #[test]
    fn only_perishables_carry_an_expiry_date() {
        assert_eq!(cookie().best_before(), Some(date(2026, 8, 10)));
        assert_eq!(coffee().best_before(), None);
    }

    #[test]
    fn product_serializes_under_its_variant_tag() {
        let value = serde_json::to_value(coffee()).unwrap();
        assert_eq!(value["kind"], "drink");
        assert_eq!(value["name"], "Coffee");
        assert_eq!(value["rating"], "four_stars");

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, coffee());
    }

    #[test]
    fn same_identity_ignores_every_other_field() {
        let a = Product::drink(ProductId::new(7), "Tea", Decimal::new(199, 2), Rating::NotRated);
        let b = Product::drink(ProductId::new(7), "Chai", Decimal::new(350, 2), Rating::FiveStars);
        let c = Product::drink(ProductId::new(8), "Tea", Decimal::new(199, 2), Rating::NotRated);

        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
    }
}
