//! `"family; style; height"` text form of a font
//!
//! Heights print with one decimal, so a round trip keeps family and style
//! exactly but rounds the height. Parsing never fails: missing fields come
//! back empty and an unusable height becomes [`FALLBACK_DESCRIPTION_HEIGHT`].

use crate::Font;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Height used when a description has none, or a non-positive one
pub const FALLBACK_DESCRIPTION_HEIGHT: f32 = 10.0;

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; {:.1}",
            self.typeface_name(),
            self.typeface_style(),
            self.height()
        )
    }
}

impl Font {
    /// Parses the form written by `Display`
    ///
    /// Family is everything before the first `;`, style runs to the next
    /// one, and the height is the number leading the rest. Without a first
    /// `;` the family is empty; without a second the style is empty and the
    /// height is read from the start of the whole text.
    pub fn from_description(description: &str) -> Font {
        let first = description.find(';');
        let name = field(description, 0, first);

        let start = first.map_or(0, |i| i + 1);
        let second = description[start..].find(';').map(|i| i + start);
        let style = field(description, start, second);

        let rest = match second {
            Some(i) => &description[i + 1..],
            None => description,
        };
        let mut height = parse_leading_float(rest);
        if height <= 0.0 {
            height = FALLBACK_DESCRIPTION_HEIGHT;
        }

        Font::with_family_and_style(name, style, height)
    }
}

impl FromStr for Font {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Font::from_description(s))
    }
}

/// Trimmed `text[start..end]`, empty when `end` is missing or not past `start`
fn field(text: &str, start: usize, end: Option<usize>) -> &str {
    match end {
        Some(end) if end > start => text[start..end].trim(),
        _ => "",
    }
}

/// Value of the number at the start of `text` (after whitespace), else 0.0
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// exponent when digits follow it. Trailing text is ignored.
fn parse_leading_float(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    if !bytes[digits_start..end].iter().any(u8::is_ascii_digit) {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let font = Font::with_family_and_style("Helvetica", "Bold", 12.34);
        assert_eq!(font.to_string(), "Helvetica; Bold; 12.3");
        assert_eq!(Font::new().to_string(), "<Sans-Serif>; <Style>; 14.0");
    }

    #[test]
    fn test_parse_full_description() {
        let font = Font::from_description("  Times New Roman ;  Italic ; 18.5");
        assert_eq!(font.typeface_name(), "Times New Roman");
        assert_eq!(font.typeface_style(), "Italic");
        assert_eq!(font.height(), 18.5);
    }

    #[test]
    fn test_parse_height_fallbacks() {
        assert_eq!(Font::from_description("A; B; 0").height(), 10.0);
        assert_eq!(Font::from_description("A; B; -4").height(), 10.0);
        assert_eq!(Font::from_description("A; B; big").height(), 10.0);
        assert_eq!(Font::from_description("A; B;").height(), 10.0);
        assert_eq!(Font::from_description("A; B; 12pt bold").height(), 12.0);
    }

    #[test]
    fn test_parse_without_separators() {
        let font = Font::from_description("Arial");
        assert_eq!(font.typeface_name(), "");
        assert_eq!(font.typeface_style(), "");
        assert_eq!(font.height(), 10.0);

        // The height is read from the start of the whole text
        let font = Font::from_description("16");
        assert_eq!(font.typeface_name(), "");
        assert_eq!(font.height(), 16.0);
    }

    #[test]
    fn test_parse_one_separator() {
        let font = Font::from_description("Arial; 12");
        assert_eq!(font.typeface_name(), "Arial");
        assert_eq!(font.typeface_style(), "");
        assert_eq!(font.height(), 10.0);
    }

    #[test]
    fn test_parse_extra_separators_go_to_height() {
        let font = Font::from_description("A;B;15;junk;more");
        assert_eq!(font.typeface_name(), "A");
        assert_eq!(font.typeface_style(), "B");
        assert_eq!(font.height(), 15.0);
    }

    #[test]
    fn test_parse_empty_fields() {
        let font = Font::from_description(";;");
        assert_eq!(font.typeface_name(), "");
        assert_eq!(font.typeface_style(), "");
        assert_eq!(font.height(), 10.0);
        assert_eq!(Font::from_description("").height(), 10.0);
    }

    #[test]
    fn test_parse_clamps_huge_heights() {
        assert_eq!(Font::from_description("A; B; 1e6").height(), 10_000.0);
    }

    #[test]
    fn test_from_str() {
        let font: Font = "Serif; Bold; 9.0".parse().unwrap();
        assert_eq!(font, Font::with_family_and_style("Serif", "Bold", 9.0));
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(parse_leading_float("  42"), 42.0);
        assert_eq!(parse_leading_float("+1.5x"), 1.5);
        assert_eq!(parse_leading_float(".25"), 0.25);
        assert_eq!(parse_leading_float("3."), 3.0);
        assert_eq!(parse_leading_float("2e2"), 200.0);
        assert_eq!(parse_leading_float("2e"), 2.0);
        assert_eq!(parse_leading_float("-"), 0.0);
        assert_eq!(parse_leading_float("."), 0.0);
        assert_eq!(parse_leading_float("abc"), 0.0);
    }
}
