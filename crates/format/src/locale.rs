//! Supported locale set.

use serde::{Deserialize, Serialize};

/// The fixed set of locales reports can be rendered in.
///
/// A closed enum rather than free-form tags: requesting anything outside
/// this set is resolved by the registry's fallback, never by failing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "ru-RU")]
    RuRu,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// Every supported locale, in a stable order.
    pub const ALL: [Locale; 5] = [
        Locale::EnGb,
        Locale::EnUs,
        Locale::FrFr,
        Locale::RuRu,
        Locale::ZhCn,
    ];

    /// Parse a language tag; `None` for tags outside the supported set.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        match tag {
            "en-GB" => Some(Locale::EnGb),
            "en-US" => Some(Locale::EnUs),
            "fr-FR" => Some(Locale::FrFr),
            "ru-RU" => Some(Locale::RuRu),
            "zh-CN" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// The language tag this locale is addressed by.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnGb => "en-GB",
            Locale::EnUs => "en-US",
            Locale::FrFr => "fr-FR",
            Locale::RuRu => "ru-RU",
            Locale::ZhCn => "zh-CN",
        }
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}
