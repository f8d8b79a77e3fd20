//! Formatter configuration with locale fallback.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::formatter::LocaleFormatter;
use crate::locale::Locale;

/// Startup-time mapping from locale tag to formatter.
///
/// Built explicitly by the embedding process and passed around; there is no
/// global formatter state. Unsupported tags resolve to the designated
/// default instead of failing.
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    formatters: HashMap<Locale, LocaleFormatter>,
    default: Locale,
}

impl FormatterRegistry {
    /// Registry over the full supported set, with `en-US` as the fallback.
    pub fn new(as_of: NaiveDate) -> Self {
        Self::with_default(Locale::EnUs, as_of)
    }

    /// Registry with an explicit fallback locale.
    pub fn with_default(default: Locale, as_of: NaiveDate) -> Self {
        let formatters = Locale::ALL
            .iter()
            .map(|&locale| (locale, LocaleFormatter::new(locale, as_of)))
            .collect();
        Self {
            formatters,
            default,
        }
    }

    /// Formatter for the tag; unsupported tags get the default locale's.
    pub fn get(&self, tag: &str) -> &LocaleFormatter {
        let locale = Locale::from_tag(tag).unwrap_or(self.default);
        // The constructor registers every member of `Locale::ALL`.
        &self.formatters[&locale]
    }

    /// The fixed set of supported tags.
    pub fn supported_tags(&self) -> Vec<&'static str> {
        Locale::ALL.iter().map(|locale| locale.tag()).collect()
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }
}
