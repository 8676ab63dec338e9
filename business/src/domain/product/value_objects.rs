use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format for catalog dates, e.g. `16.04.2024`.
pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Format produced by HTML date pickers, e.g. `2024-04-16`.
pub const DATE_PICKER_FORMAT: &str = "%Y-%m-%d";

/// Unique catalog identifier. Issued once and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Strips every character that is not an ASCII digit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Non-negative numeric product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(u64);

impl ProductCode {
    pub fn new(code: u64) -> Self {
        Self(code)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parses free text into a code after dropping non-digits.
    ///
    /// An empty result falls back to `0`; values past `u64::MAX` saturate.
    pub fn from_digits(raw: &str) -> Self {
        let digits = digits_only(raw);
        if digits.is_empty() {
            return Self(0);
        }
        Self(digits.parse::<u64>().unwrap_or(u64::MAX))
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date a product was added to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProductDate(NaiveDate);

impl ProductDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Value suitable for an `<input type="date">`.
    pub fn to_picker_value(&self) -> String {
        self.0.format(DATE_PICKER_FORMAT).to_string()
    }
}

impl std::fmt::Display for ProductDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_DISPLAY_FORMAT))
    }
}

impl std::str::FromStr for ProductDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(trimmed, DATE_DISPLAY_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_PICKER_FORMAT))
            .map(Self)
            .map_err(|_| format!("Invalid product date: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// `http://` or `https://` address.
    Remote,
    /// Self-contained `data:` URI.
    Embedded,
    /// Free text that is neither; edit dialogs accept it as typed.
    Other,
}

/// Image source: a remote URL or an inlined data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage(String);

impl ProductImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn kind(&self) -> ImageKind {
        let source = self.0.trim_start();
        if source.starts_with("data:") {
            ImageKind::Embedded
        } else if source.starts_with("http://") || source.starts_with("https://") {
            ImageKind::Remote
        } else {
            ImageKind::Other
        }
    }
}

impl std::fmt::Display for ProductImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
