mod common;

use std::sync::Arc;

use common::{calls, counting_resolver, TestFace, ADVANCE, ASCENT};
use fontres_core::{Font, FontEnumerator, StyleFlags, Typeface, TypefaceCache};

fn cache() -> TypefaceCache {
    let (_, resolver) = counting_resolver();
    TypefaceCache::new(resolver)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_ascent_and_descent() {
    let cache = cache();
    let font = Font::with_family_and_style("A", "Regular", 20.0);
    assert_eq!(font.ascent(&cache), 20.0 * ASCENT);
    assert_eq!(font.descent(&cache), 20.0 - 20.0 * ASCENT);
    assert_eq!(font.attributes().cached_ascent_ratio(), ASCENT);
}

#[test]
fn test_typeface_is_memoized_in_font() {
    let (counter, resolver) = counting_resolver();
    let cache = TypefaceCache::with_capacity(resolver, 1);
    let font = Font::with_family_and_style("A", "Regular", 12.0);

    font.ascent(&cache);
    // Push A out of the only slot; the font still remembers its face
    Font::with_family_and_style("B", "Regular", 12.0).typeface(&cache);
    font.string_width_float(&cache, "abc");
    assert_eq!(calls(&counter), 2);
}

#[test]
fn test_clones_share_memo_until_family_changes() {
    let (counter, resolver) = counting_resolver();
    let cache = TypefaceCache::new(resolver);
    let a = Font::with_family_and_style("A", "Regular", 12.0);
    let mut b = a.clone();

    a.typeface(&cache);
    assert!(b.attributes().resolved_typeface().is_some());

    b.set_typeface_name("B");
    assert!(b.attributes().resolved_typeface().is_none());
    assert_eq!(b.attributes().cached_ascent_ratio(), 0.0);
    assert!(a.attributes().resolved_typeface().is_some());
    assert_eq!(b.typeface(&cache).name(), "B");
    assert_eq!(calls(&counter), 2);
}

#[test]
fn test_style_change_forgets_typeface() {
    let cache = cache();
    let mut font = Font::with_family_and_style("A", "Regular", 12.0);
    font.ascent(&cache);

    font.set_style_flags(StyleFlags::BOLD);
    assert!(font.attributes().resolved_typeface().is_none());
    assert_eq!(font.typeface(&cache).style(), "Bold");

    font.set_typeface_style("Light");
    assert!(font.attributes().resolved_typeface().is_none());
}

#[test]
fn test_height_change_keeps_typeface() {
    let cache = cache();
    let mut font = Font::with_family_and_style("A", "Regular", 12.0);
    font.typeface(&cache);
    font.set_height(30.0);
    assert!(font.attributes().resolved_typeface().is_some());
    assert_eq!(font.ascent(&cache), 30.0 * ASCENT);
}

#[test]
fn test_string_width() {
    let cache = cache();
    let font = Font::with_family_and_style("A", "Regular", 10.0);
    assert_eq!(font.string_width_float(&cache, "hello"), 5.0 * ADVANCE * 10.0);
    assert_eq!(font.string_width(&cache, "hello"), 25);
    assert_eq!(font.string_width_float(&cache, ""), 0.0);

    // Rounds to nearest
    let font = Font::with_family_and_style("A", "Regular", 3.0);
    assert_eq!(font.string_width_float(&cache, "a"), 1.5);
    assert_eq!(font.string_width(&cache, "a"), 2);
}

#[test]
fn test_kerning_is_added_per_character() {
    let cache = cache();
    let mut font = Font::with_family_and_style("A", "Regular", 10.0);
    font.set_extra_kerning_factor(0.1);
    // (4 * 0.5 + 0.1 * 4) * 10
    assert!(close(font.string_width_float(&cache, "abcd"), 24.0));
    // Characters, not bytes
    assert!(close(font.string_width_float(&cache, "éé"), (2.0 * ADVANCE + 0.2) * 10.0));
}

#[test]
fn test_glyph_positions_scale() {
    let cache = cache();
    let mut font = Font::with_family_and_style("A", "Regular", 10.0);
    font.set_horizontal_scale(2.0);

    let positions = font.glyph_positions(&cache, "ab");
    assert_eq!(positions.glyphs, vec!['a' as u32, 'b' as u32]);
    assert_eq!(positions.x_offsets, vec![0.0, 10.0, 20.0]);
}

#[test]
fn test_glyph_positions_with_kerning() {
    let cache = cache();
    let mut font = Font::with_family_and_style("A", "Regular", 10.0);
    font.set_extra_kerning_factor(0.25);

    let positions = font.glyph_positions(&cache, "abc");
    let expected = [0.0, (0.5 + 0.25) * 10.0, (1.0 + 0.5) * 10.0, (1.5 + 0.75) * 10.0];
    assert_eq!(positions.x_offsets.len(), expected.len());
    for (got, want) in positions.x_offsets.iter().zip(expected) {
        assert!(close(*got, want), "{got} != {want}");
    }
}

#[test]
fn test_height_without_changing_width_keeps_string_width() {
    let cache = cache();
    let mut font = Font::with_family_and_style("A", "Regular", 14.0);
    font.set_horizontal_scale(0.9);
    let before = font.string_width_float(&cache, "constant width");

    font.set_height_without_changing_width(33.0);
    let after = font.string_width_float(&cache, "constant width");

    assert!(close(font.horizontal_scale(), 0.9 * 14.0 / 33.0));
    assert!(close(before, after), "{before} != {after}");
}

#[test]
fn test_from_typeface_needs_no_cache_lookup() {
    let (counter, resolver) = counting_resolver();
    let cache = TypefaceCache::new(resolver);
    let face: Arc<dyn Typeface> = Arc::new(TestFace::new("Real Face", "Medium"));

    let font = Font::from_typeface(Arc::clone(&face));
    assert_eq!(font.typeface_name(), "Real Face");
    assert_eq!(font.typeface_style(), "Medium");
    assert_eq!(font.height(), 14.0);
    assert!(Arc::ptr_eq(&font.typeface(&cache), &face));
    assert_eq!(calls(&counter), 0);
}

struct Installed;

impl FontEnumerator for Installed {
    fn family_names(&self) -> Vec<String> {
        vec!["Alpha".into(), "Beta".into()]
    }

    fn styles_for_family(&self, family_name: &str) -> Vec<String> {
        match family_name {
            "Alpha" => vec!["Regular".into(), "Bold".into()],
            "Beta" => vec!["Book".into()],
            _ => Vec::new(),
        }
    }
}

#[test]
fn test_find_fonts() {
    let fonts = Font::find_fonts(&Installed);
    let described: Vec<String> = fonts.iter().map(Font::to_string).collect();
    assert_eq!(
        described,
        vec![
            "Alpha; Regular; 14.0",
            "Alpha; Bold; 14.0",
            "Beta; Book; 14.0"
        ]
    );
}
