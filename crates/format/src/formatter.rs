//! Locale-aware product/review rendering.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use shopfront_catalog::{Product, ReportFormatter, Review};

use crate::locale::Locale;

/// Per-locale renderer for catalog reports.
///
/// The as-of date stands in for the expiry date of products that have none,
/// and is fixed at construction so rendered output is reproducible.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    locale: Locale,
    as_of: NaiveDate,
}

impl LocaleFormatter {
    pub fn new(locale: Locale, as_of: NaiveDate) -> Self {
        Self { locale, as_of }
    }

    /// Formatter whose as-of date is the current local date.
    pub fn today(locale: Locale) -> Self {
        Self::new(locale, Local::now().date_naive())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn money(&self, mut amount: Decimal) -> String {
        amount.rescale(2);
        match self.locale {
            Locale::EnGb => format!("£{amount}"),
            Locale::EnUs => format!("${amount}"),
            Locale::FrFr => format!("{} €", amount.to_string().replace('.', ",")),
            Locale::RuRu => format!("{} ₽", amount.to_string().replace('.', ",")),
            Locale::ZhCn => format!("¥{amount}"),
        }
    }

    fn date(&self, date: NaiveDate) -> String {
        let pattern = match self.locale {
            Locale::EnGb | Locale::FrFr => "%d/%m/%Y",
            Locale::EnUs => "%-m/%-d/%y",
            Locale::RuRu => "%d.%m.%Y",
            Locale::ZhCn => "%Y/%-m/%-d",
        };
        date.format(pattern).to_string()
    }
}

impl ReportFormatter for LocaleFormatter {
    fn format_product(&self, product: &Product) -> String {
        let name = product.name();
        let price = self.money(product.price());
        let stars = product.rating().stars();
        let best_before = self.date(product.best_before().unwrap_or(self.as_of));

        match self.locale {
            Locale::EnGb | Locale::EnUs => format!(
                "Product: {name}, price: {price}, rating: {stars}, best before: {best_before}"
            ),
            Locale::FrFr => format!(
                "Produit : {name}, prix : {price}, évaluation : {stars}, à consommer avant : {best_before}"
            ),
            Locale::RuRu => format!(
                "Товар: {name}, цена: {price}, рейтинг: {stars}, годен до: {best_before}"
            ),
            Locale::ZhCn => {
                format!("商品：{name}，价格：{price}，评级：{stars}，此日期前最佳：{best_before}")
            }
        }
    }

    fn format_review(&self, review: &Review) -> String {
        let stars = review.rating().stars();
        let comments = review.comments();

        match self.locale {
            Locale::EnGb | Locale::EnUs => format!("Review: {stars}, {comments}"),
            Locale::FrFr => format!("Avis : {stars}, {comments}"),
            Locale::RuRu => format!("Отзыв: {stars}, {comments}"),
            Locale::ZhCn => format!("评论：{stars}，{comments}"),
        }
    }

    fn text(&self, key: &str) -> String {
        let resolved = match (key, self.locale) {
            ("no.reviews", Locale::EnGb | Locale::EnUs) => "No reviews yet",
            ("no.reviews", Locale::FrFr) => "Pas encore d'avis",
            ("no.reviews", Locale::RuRu) => "Пока нет отзывов",
            ("no.reviews", Locale::ZhCn) => "暂无评论",
            // Unknown keys degrade to the key itself.
            _ => key,
        };
        resolved.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::Rating;
    use shopfront_core::ProductId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tea() -> Product {
        Product::drink(
            ProductId::new(1),
            "Tea",
            Decimal::new(199, 2),
            Rating::FourStars,
        )
    }

    fn cookie() -> Product {
        Product::food(
            ProductId::new(2),
            "Cookie",
            Decimal::new(230, 2),
            Rating::TwoStars,
            date(2026, 8, 10),
        )
    }

    #[test]
    fn en_us_product_line() {
        let formatter = LocaleFormatter::new(Locale::EnUs, date(2026, 8, 5));
        assert_eq!(
            formatter.format_product(&tea()),
            "Product: Tea, price: $1.99, rating: ★★★★☆, best before: 8/5/26"
        );
    }

    #[test]
    fn fr_fr_uses_comma_decimal_and_trailing_euro() {
        let formatter = LocaleFormatter::new(Locale::FrFr, date(2026, 8, 5));
        assert_eq!(
            formatter.format_product(&cookie()),
            "Produit : Cookie, prix : 2,30 €, évaluation : ★★☆☆☆, à consommer avant : 10/08/2026"
        );
    }

    #[test]
    fn perishables_render_their_own_date_not_the_as_of_date() {
        let formatter = LocaleFormatter::new(Locale::EnGb, date(2026, 1, 1));
        assert_eq!(
            formatter.format_product(&cookie()),
            "Product: Cookie, price: £2.30, rating: ★★☆☆☆, best before: 10/08/2026"
        );
    }

    #[test]
    fn non_perishables_fall_back_to_the_as_of_date() {
        let formatter = LocaleFormatter::new(Locale::RuRu, date(2026, 8, 5));
        let line = formatter.format_product(&tea());
        assert!(line.ends_with("годен до: 05.08.2026"), "line: {line}");
    }

    #[test]
    fn review_lines_are_localized() {
        let review = Review::new(Rating::ThreeStars, "fine");
        assert_eq!(
            LocaleFormatter::new(Locale::EnGb, date(2026, 8, 5)).format_review(&review),
            "Review: ★★★☆☆, fine"
        );
        assert_eq!(
            LocaleFormatter::new(Locale::ZhCn, date(2026, 8, 5)).format_review(&review),
            "评论：★★★☆☆，fine"
        );
    }

    #[test]
    fn no_reviews_text_is_localized() {
        let at = date(2026, 8, 5);
        assert_eq!(
            LocaleFormatter::new(Locale::EnUs, at).text("no.reviews"),
            "No reviews yet"
        );
        assert_eq!(
            LocaleFormatter::new(Locale::FrFr, at).text("no.reviews"),
            "Pas encore d'avis"
        );
    }

    #[test]
    fn unknown_resource_keys_render_as_themselves() {
        let formatter = LocaleFormatter::new(Locale::EnUs, date(2026, 8, 5));
        assert_eq!(formatter.text("no.such.key"), "no.such.key");
    }

    #[test]
    fn today_pins_the_current_local_date() {
        let formatter = LocaleFormatter::today(Locale::EnGb);
        assert_eq!(formatter.locale(), Locale::EnGb);

        // A non-perishable rendered "today" carries the as-of date.
        let line = formatter.format_product(&tea());
        assert!(line.contains(&formatter.date(Local::now().date_naive())));
    }
}
