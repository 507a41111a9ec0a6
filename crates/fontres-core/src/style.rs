//! Style flags and the style-name vocabulary they map onto
//!
//! A font's style lives in its style *name* ("Bold Italic", "Condensed
//! Black", ...). The flag view only understands a handful of those names, so
//! the mapping is lossy: a name outside the table reads back as plain.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Bit set of the three classic style toggles
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1;
        const ITALIC = 2;
        const UNDERLINED = 4;
    }
}

impl StyleFlags {
    /// No bits set
    pub const PLAIN: Self = Self::empty();

    pub const fn is_plain(self) -> bool {
        self.is_empty()
    }
}

impl fmt::Display for StyleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            return f.write_str("plain");
        }
        let names = [
            (Self::BOLD, "bold"),
            (Self::ITALIC, "italic"),
            (Self::UNDERLINED, "underlined"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

pub const REGULAR_STYLE: &str = "Regular";
pub const BOLD_STYLE: &str = "Bold";
pub const ITALIC_STYLE: &str = "Italic";
pub const BOLD_ITALIC_STYLE: &str = "Bold Italic";

/// Style name written by [`crate::Font::set_style_flags`] for a flag set
///
/// The underline bit never affects the name; it is stored separately.
pub fn style_name_for_flags(flags: StyleFlags) -> &'static str {
    let bold = flags.contains(StyleFlags::BOLD);
    let italic = flags.contains(StyleFlags::ITALIC);
    match (bold, italic) {
        (true, true) => BOLD_ITALIC_STYLE,
        (true, false) => BOLD_STYLE,
        (false, true) => ITALIC_STYLE,
        (false, false) => REGULAR_STYLE,
    }
}

/// Bold/italic bits recognised in a style name
pub fn flags_for_style_name(style_name: &str) -> StyleFlags {
    match style_name {
        "Bold" => StyleFlags::BOLD,
        "Italic" | "Oblique" => StyleFlags::ITALIC,
        "Bold Italic" | "Bold Oblique" => StyleFlags::BOLD | StyleFlags::ITALIC,
        _ => StyleFlags::PLAIN,
    }
}
