//! Answer text formatter.
//!
//! The backend returns plain text with markdown-ish line conventions.
//! This is a pure line-by-line classifier: each input line becomes exactly
//! one display block, in order. No inline markup is interpreted beyond
//! whole-line patterns.

/// One display block produced from a single answer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# `, `## ` or `### ` heading; level is 1..=3.
    Heading { level: u8, text: String },
    /// `N.` numbered list item, prefix stripped.
    NumberedItem(String),
    /// `-`, `*` or `•` bullet item, marker stripped.
    BulletItem(String),
    /// Whole line wrapped in `**`, markers stripped.
    Bold(String),
    /// Any other non-empty line.
    Paragraph(String),
    /// Empty line, rendered as vertical space.
    Blank,
}

/// Classify a raw answer into display blocks.
///
/// Bold-wrapped lines are checked before the bullet rule, otherwise the
/// leading `*` of `**text**` would win and mangle the line.
pub fn format_answer(raw: &str) -> Vec<Block> {
    raw.lines().map(classify_line).collect()
}

fn classify_line(line: &str) -> Block {
    let trimmed = line.trim_end();

    if trimmed.trim().is_empty() {
        return Block::Blank;
    }

    if let Some(text) = strip_numbered_prefix(trimmed) {
        return Block::NumberedItem(text.to_string());
    }

    if let Some(level) = heading_level(trimmed) {
        let text = trimmed[level as usize..].trim_start();
        return Block::Heading {
            level,
            text: text.to_string(),
        };
    }

    if let Some(text) = strip_bold_wrapping(trimmed) {
        return Block::Bold(text.to_string());
    }

    if let Some(rest) = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        .or_else(|| trimmed.strip_prefix('•'))
    {
        return Block::BulletItem(rest.trim_start().to_string());
    }

    Block::Paragraph(trimmed.to_string())
}

/// Strip a leading `N.` and following whitespace, if present.
fn strip_numbered_prefix(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    rest.strip_prefix('.').map(str::trim_start)
}

/// Heading level for `#`, `##` or `###` followed by whitespace.
fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    line[hashes..]
        .chars()
        .next()
        .filter(|c| c.is_whitespace())
        .map(|_| hashes as u8)
}

/// Whole-line `**text**` wrapping; needs content between the markers.
fn strip_bold_wrapping(line: &str) -> Option<&str> {
    if line.len() <= 4 {
        return None;
    }
    line.strip_prefix("**")
        .and_then(|rest| rest.strip_suffix("**"))
        .filter(|inner| !inner.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_items() {
        assert_eq!(
            format_answer("1. First finding"),
            vec![Block::NumberedItem("First finding".to_string())]
        );
        assert_eq!(
            format_answer("12.No space after the dot"),
            vec![Block::NumberedItem("No space after the dot".to_string())]
        );
    }

    #[test]
    fn test_bullets_with_each_marker() {
        for line in ["- point", "* point", "• point"] {
            assert_eq!(
                format_answer(line),
                vec![Block::BulletItem("point".to_string())],
                "marker in {line:?}"
            );
        }
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            format_answer("# Title"),
            vec![Block::Heading {
                level: 1,
                text: "Title".to_string()
            }]
        );
        assert_eq!(
            format_answer("### Detail"),
            vec![Block::Heading {
                level: 3,
                text: "Detail".to_string()
            }]
        );
        // Four hashes is not a recognized heading.
        assert_eq!(
            format_answer("#### Too deep"),
            vec![Block::Paragraph("#### Too deep".to_string())]
        );
        // No space after the hashes is not a heading either.
        assert_eq!(
            format_answer("#nospace"),
            vec![Block::Paragraph("#nospace".to_string())]
        );
    }

    #[test]
    fn test_bold_line_beats_bullet_rule() {
        assert_eq!(
            format_answer("**Key takeaway**"),
            vec![Block::Bold("Key takeaway".to_string())]
        );
    }

    #[test]
    fn test_bare_markers_are_not_bold() {
        assert_eq!(
            format_answer("****"),
            vec![Block::BulletItem("***".to_string())]
        );
    }

    #[test]
    fn test_blank_lines_and_paragraphs() {
        let blocks = format_answer("Intro paragraph.\n\nSecond paragraph.");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("Intro paragraph.".to_string()),
                Block::Blank,
                Block::Paragraph("Second paragraph.".to_string()),
            ]
        );
    }

    #[test]
    fn test_mixed_answer() {
        let raw = "## Summary\n**Highlights**\n1. Alpha\n- Beta\n\nClosing note.";
        let blocks = format_answer(raw);
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 2,
                    text: "Summary".to_string()
                },
                Block::Bold("Highlights".to_string()),
                Block::NumberedItem("Alpha".to_string()),
                Block::BulletItem("Beta".to_string()),
                Block::Blank,
                Block::Paragraph("Closing note.".to_string()),
            ]
        );
    }
}
