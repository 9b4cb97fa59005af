//! Plain-text Wiktionary extract parsing: language sections, category
//! sub-sections, definition blocks and line filtering.

use std::sync::LazyLock;

use regex::Regex;

static LANGUAGE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^==\s+(.*?)\s+==\s*$").unwrap());
static CATEGORY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^===\s+(.*?)\s+===\s*$").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Layered block patterns, tried strictest first: up to the next triple
/// newline, then up to the next single newline, then everything.
static BLOCK_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?s)\n\n(.*?)\n\n\n").unwrap(),
        Regex::new(r"(?s)\n\n(.*?)\n").unwrap(),
        Regex::new(r"(?s)\n\n(.*)").unwrap(),
    ]
});

/// Leading tokens that mark synonym and antonym lines.
const LABEL_PREFIXES: [&str; 4] = ["Synonyms:", "Synonym:", "Antonym:", "Antonyms:"];

/// Line filter profile; the two French strategies differ here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterProfile {
    /// English-gloss articles: drop the example lines joined with the
    /// horizontal bar.
    Gloss,
    /// Monolingual articles: em-dash example rule with the "— Note"
    /// exception, plus suppression of lines restating the word itself.
    Monolingual,
}

/// (header, body) pairs for every match of `header` in `text`. A body runs
/// to the start of the next header, trimmed.
fn sections<'a>(text: &'a str, header: &Regex) -> Vec<(String, &'a str)> {
    let positions: Vec<(std::ops::Range<usize>, String)> = header
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.range(), caps[1].to_string()))
        })
        .collect();

    let mut found = Vec::new();
    for (i, (range, name)) in positions.iter().enumerate() {
        let end = positions
            .get(i + 1)
            .map_or(text.len(), |(next, _)| next.start);
        found.push((name.clone(), text[range.end..end].trim()));
    }
    found
}

/// Body of the `== Language ==` section matching `language`, compared
/// case-insensitively.
pub fn language_section<'a>(extract: &'a str, language: &str) -> Option<&'a str> {
    let wanted = language.trim().to_lowercase();
    sections(extract, &LANGUAGE_HEADER)
        .into_iter()
        .find(|(name, _)| name.trim().to_lowercase() == wanted)
        .map(|(_, body)| body)
}

/// Body of the `=== Category ===` sub-section matching `category`. Headers
/// like "Nom commun 1" carry numbering; digits are stripped before the
/// case-insensitive comparison.
pub fn category_section<'a>(section: &'a str, category: &str) -> Option<&'a str> {
    let wanted = category.trim().to_lowercase();
    sections(section, &CATEGORY_HEADER)
        .into_iter()
        .find(|(name, _)| DIGITS.replace_all(name, "").trim().to_lowercase() == wanted)
        .map(|(_, body)| body)
}

/// The raw definition block of a sub-section body: the text after the first
/// blank line, bounded by the strictest layered pattern that matches.
pub fn definition_block(section_body: &str) -> Option<String> {
    BLOCK_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(section_body))
        .map(|caps| caps[1].trim().to_string())
}

/// Keep the definition lines of a block, dropping synonym/antonym labels,
/// example lines and (monolingual) lines restating the word itself.
pub fn filter_lines(block: &str, word: &str, profile: FilterProfile) -> Vec<String> {
    let word = word.to_lowercase();
    // Naive inflections: feminine and plural endings.
    let variants = [
        word.clone(),
        format!("{word}e"),
        format!("{word}s"),
        format!("{word}es"),
    ];

    block
        .split('\n')
        .filter(|line| {
            let Some(first) = line.split_whitespace().next() else {
                return false;
            };
            if LABEL_PREFIXES.contains(&first) {
                return false;
            }
            match profile {
                // U+2015 joins a French example with its translation.
                FilterProfile::Gloss => !line.contains('\u{2015}'),
                FilterProfile::Monolingual => {
                    // U+2014 introduces an example attribution.
                    if line.contains('\u{2014}') && !line.contains("\u{2014} Note") {
                        return false;
                    }
                    let lower = line.to_lowercase();
                    !variants.iter().any(|variant| lower.contains(variant))
                }
            }
        })
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shape of an en.wiktionary plain-text extract for "berger".
    const GLOSS_EXTRACT: &str = "== English ==\n\n\n=== Noun ===\nberger\n\nsomething else entirely\n\n\n== French ==\n\n\n=== Etymology ===\nFrom Old French bergier.\n\n\n=== Pronunciation ===\nIPA(key): /b\u{25b}\u{281}.\u{292}e/\n\n\n=== Noun ===\nberger m (plural bergers, feminine berg\u{e8}re)\n\nshepherd\nle berger garde les moutons \u{2015} the shepherd watches the sheep\nSynonyms: p\u{e2}tre, p\u{e2}tour\n\n\n==== Derived terms ====\nberger allemand\n\n\n=== Further reading ===\nberger on fr.wikipedia.org";

    #[test]
    fn finds_the_requested_language_section() {
        let section = language_section(GLOSS_EXTRACT, "french").unwrap();
        assert!(section.contains("=== Noun ==="));
        assert!(!section.contains("something else entirely"));
    }

    #[test]
    fn language_match_ignores_header_case() {
        assert!(language_section(GLOSS_EXTRACT, "French").is_some());
        assert!(language_section("== Fran\u{e7}ais ==\n\nbody", "fran\u{e7}ais").is_some());
    }

    #[test]
    fn missing_language_section_is_none() {
        assert!(language_section(GLOSS_EXTRACT, "spanish").is_none());
    }

    #[test]
    fn finds_the_category_sub_section() {
        let section = language_section(GLOSS_EXTRACT, "french").unwrap();
        let sub = category_section(section, "noun").unwrap();
        assert!(sub.starts_with("berger m"));
    }

    #[test]
    fn level_four_headers_stay_inside_their_sub_section() {
        let section = language_section(GLOSS_EXTRACT, "french").unwrap();
        let sub = category_section(section, "noun").unwrap();
        assert!(sub.contains("==== Derived terms ===="));
        let block = definition_block(sub).unwrap();
        assert_eq!(
            block,
            "shepherd\nle berger garde les moutons \u{2015} the shepherd watches the sheep\nSynonyms: p\u{e2}tre, p\u{e2}tour"
        );
    }

    #[test]
    fn numbered_category_headers_still_match() {
        let text = "=== Nom commun 1 ===\nchien\n\nAnimal.\n";
        assert!(category_section(text, "nom commun").is_some());
    }

    #[test]
    fn category_match_ignores_case() {
        let text = "=== Nom commun ===\nchien\n\nAnimal.\n";
        assert!(category_section(text, "Nom Commun").is_some());
    }

    #[test]
    fn block_stops_at_a_triple_newline() {
        let body = "headword line\n\nfirst sense\nsecond sense\n\n\ntrailing notes";
        assert_eq!(
            definition_block(body).unwrap(),
            "first sense\nsecond sense"
        );
    }

    #[test]
    fn block_falls_back_to_a_single_newline() {
        let body = "headword line\n\nonly sense\nsecond line";
        assert_eq!(definition_block(body).unwrap(), "only sense");
    }

    #[test]
    fn block_falls_back_to_the_rest_of_the_body() {
        let body = "headword line\n\nonly sense";
        assert_eq!(definition_block(body).unwrap(), "only sense");
    }

    #[test]
    fn body_without_a_blank_line_has_no_block() {
        assert!(definition_block("headword line only").is_none());
    }

    #[test]
    fn gloss_filter_drops_examples_and_labels() {
        let block = "shepherd\nle berger garde les moutons \u{2015} the shepherd watches the sheep\nSynonyms: p\u{e2}tre, p\u{e2}tour";
        let lines = filter_lines(block, "berger", FilterProfile::Gloss);
        assert_eq!(lines, vec!["shepherd"]);
    }

    #[test]
    fn monolingual_filter_drops_em_dash_examples() {
        let block = "Qui garde les moutons.\nLe chien du berger. \u{2014} (Victor Hugo, Les Mis\u{e9}rables)";
        let lines = filter_lines(block, "berger", FilterProfile::Monolingual);
        assert_eq!(lines, vec!["Qui garde les moutons."]);
    }

    #[test]
    fn monolingual_filter_keeps_note_lines() {
        let block = "Sens principal.\n\u{2014} Note d'usage : rare.";
        let lines = filter_lines(block, "mot", FilterProfile::Monolingual);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn monolingual_filter_drops_restatements_of_the_word() {
        let block = "Animal domestique.\nLes chiens aboient.\nF\u{e9}minin de chien.";
        let lines = filter_lines(block, "chien", FilterProfile::Monolingual);
        assert_eq!(lines, vec!["Animal domestique."]);
    }

    #[test]
    fn restatement_check_is_case_insensitive() {
        let block = "Un Chien de garde.\nAutre sens.";
        let lines = filter_lines(block, "chien", FilterProfile::Monolingual);
        assert_eq!(lines, vec!["Autre sens."]);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let lines = filter_lines("first\n\nsecond", "mot", FilterProfile::Gloss);
        assert_eq!(lines, vec!["first", "second"]);
    }
}
