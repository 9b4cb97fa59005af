use std::sync::LazyLock;

use regex::Regex;

/// Marker a multi-line definition line starts with. The no-break space is
/// part of the marker; the editor re-splits stored definitions on it.
pub const BULLET: &str = "\u{2022}\u{a0}";

static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new("\u{2022}\u{a0}[^\n]+").unwrap());

/// Join definition lines into the stored form: a single line stays bare,
/// several get the bullet prefix and newline separators.
pub fn join_definitions(lines: &[String]) -> String {
    if lines.len() == 1 {
        return lines[0].clone();
    }
    lines
        .iter()
        .map(|line| format!("{BULLET} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a stored definition back into its bulleted lines, markers kept.
/// A bare single-line definition has no marker and yields nothing.
pub fn split_bullets(definition: &str) -> Vec<String> {
    BULLET_LINE
        .find_iter(definition)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Drop every bullet marker from a line and trim the leftovers.
pub fn strip_bullet(line: &str) -> String {
    line.replace(BULLET, "").trim().to_string()
}

/// True when a stored definition uses the bulleted multi-line form.
pub fn is_bulleted(definition: &str) -> bool {
    definition.starts_with('\u{2022}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(defs: &[&str]) -> Vec<String> {
        defs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn single_line_stays_bare() {
        let stored = join_definitions(&lines(&["to move fast"]));
        assert_eq!(stored, "to move fast");
        assert!(!is_bulleted(&stored));
    }

    #[test]
    fn multiple_lines_get_bullets() {
        let stored = join_definitions(&lines(&["to move fast", "to operate"]));
        assert_eq!(stored, "\u{2022}\u{a0} to move fast\n\u{2022}\u{a0} to operate");
        assert!(is_bulleted(&stored));
    }

    #[test]
    fn split_recovers_every_bulleted_line() {
        let stored = join_definitions(&lines(&["one", "two", "three"]));
        let parts = split_bullets(&stored);
        assert_eq!(
            parts,
            vec!["\u{2022}\u{a0} one", "\u{2022}\u{a0} two", "\u{2022}\u{a0} three"]
        );
    }

    #[test]
    fn split_of_bare_definition_is_empty() {
        assert!(split_bullets("to move fast").is_empty());
    }

    #[test]
    fn strip_removes_marker_and_whitespace() {
        assert_eq!(strip_bullet("\u{2022}\u{a0} to move fast"), "to move fast");
    }

    #[test]
    fn join_then_split_round_trips() {
        let originals = lines(&["first sense", "second sense"]);
        let stored = join_definitions(&originals);
        let recovered: Vec<String> = split_bullets(&stored)
            .iter()
            .map(|line| strip_bullet(line))
            .collect();
        assert_eq!(recovered, originals);
    }
}
