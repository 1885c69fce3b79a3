//! Localized text.

use serde::{Deserialize, Serialize};

/// A name carried in Japanese and English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilingualString {
    pub ja: String,
    pub en: String,
}

impl MultilingualString {
    pub fn new(ja: impl Into<String>, en: impl Into<String>) -> Self {
        Self { ja: ja.into(), en: en.into() }
    }
}
