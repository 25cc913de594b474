//! Display locale for reports
//!
//! The locale decides the default first day of the week, the month names
//! used in range labels, and which digits numbers are rendered with. It is
//! always passed explicitly; nothing here reads process-wide state.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "en-US", alias = "english")]
    English,
    #[serde(rename = "ar", alias = "ar-EG", alias = "arabic")]
    Arabic,
}

impl Locale {
    /// First day of a displayed week for this locale
    pub fn default_week_start(&self) -> Weekday {
        match self {
            Locale::English => Weekday::Sun,
            Locale::Arabic => Weekday::Sat,
        }
    }

    /// Whether text is laid out right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Arabic)
    }

    /// Language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
        }
    }

    /// Month name for a 1-based month number; out-of-range months yield an empty string
    pub fn month_name(&self, month: u32) -> &'static str {
        let names = match self {
            Locale::English => &ENGLISH_MONTHS,
            Locale::Arabic => &ARABIC_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|index| names.get(index as usize))
            .copied()
            .unwrap_or("")
    }

    /// Rewrite ASCII digits with the locale's numbering system
    pub fn localize_digits(&self, text: &str) -> String {
        match self {
            Locale::English => text.to_string(),
            Locale::Arabic => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if c.is_ascii_digit() => ARABIC_INDIC_DIGITS[d as usize],
                    _ => c,
                })
                .collect(),
        }
    }

    /// Parse a language tag such as `en`, `en-US`, `ar` or `ar_EG`.
    ///
    /// Only the primary subtag matters. Unknown languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match primary.as_str() {
            "ar" | "arabic" => Locale::Arabic,
            _ => Locale::English,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_tag(s))
    }
}
