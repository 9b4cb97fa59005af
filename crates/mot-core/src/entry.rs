use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""(.*?)""#).unwrap());
static QUOTE_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\s*"(.*)""#).unwrap());
static GUILLEMET: LazyLock<Regex> = LazyLock::new(|| Regex::new("«(.*?)»").unwrap());
static GUILLEMET_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*«(.*)»").unwrap());
static CATEGORY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*)\)").unwrap());
static CATEGORY_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\((.*)\)").unwrap());

/// One word to log: the bare word plus the optional grammatical category
/// and usage quote pulled out of a raw item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// NFC-normalized, casing untouched.
    pub word: String,
    pub category: Option<String>,
    pub quote: Option<String>,
}

impl WordEntry {
    /// Pull the quote first, then the category, off a working copy of the
    /// item; whatever survives is the word. The quote goes first so that
    /// parentheses inside a quote never leak into the category.
    pub fn extract(raw: &str) -> Self {
        let mut working = raw.trim().to_string();

        let mut quote = None;
        if let Some(caps) = QUOTE.captures(&working) {
            let found = caps[1].trim().to_string();
            working = QUOTE_STRIP.replace(&working, "").trim().to_string();
            if !found.is_empty() {
                quote = Some(found);
            }
        } else if let Some(caps) = GUILLEMET.captures(&working) {
            let found = caps[1].trim().to_string();
            working = GUILLEMET_STRIP.replace(&working, "").trim().to_string();
            if !found.is_empty() {
                quote = Some(found);
            }
        }

        let mut category = None;
        if let Some(caps) = CATEGORY.captures(&working) {
            let found = caps[1].trim().to_string();
            working = CATEGORY_STRIP.replace(&working, "").trim().to_string();
            if !found.is_empty() {
                category = Some(found);
            }
        }

        let word = working.nfc().collect::<String>().trim().to_string();

        Self { word, category, quote }
    }
}
