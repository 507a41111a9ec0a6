mod common;

use common::counting_resolver;
use fontres_core::{limit_font_height, Font, TypefaceCache, MAX_FONT_HEIGHT, MIN_FONT_HEIGHT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn height_is_always_clamped(height in -1.0e6f32..1.0e6f32) {
        let font = Font::with_family_and_style("A", "Regular", height);
        prop_assert!(font.height() >= MIN_FONT_HEIGHT);
        prop_assert!(font.height() <= MAX_FONT_HEIGHT);
        prop_assert_eq!(font.height(), limit_font_height(height));
    }

    #[test]
    fn description_round_trips(
        family in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]",
        style in "[A-Za-z]{1,12}",
        tenths in 1u32..=100_000,
    ) {
        let height = tenths as f32 / 10.0;
        let font = Font::with_family_and_style(family.as_str(), style.as_str(), height);
        let parsed = Font::from_description(&font.to_string());

        prop_assert_eq!(parsed.typeface_name(), family.as_str());
        prop_assert_eq!(parsed.typeface_style(), style.as_str());
        prop_assert_eq!(parsed.height(), font.height());
    }

    #[test]
    fn width_grows_linearly_with_height(
        text in "[a-z]{0,32}",
        height in 1.0f32..500.0,
    ) {
        let (_, resolver) = counting_resolver();
        let cache = TypefaceCache::new(resolver);
        let unit = Font::with_family_and_style("A", "Regular", 1.0);
        let sized = unit.with_height(height);

        let expected = unit.string_width_float(&cache, &text) * height;
        let actual = sized.string_width_float(&cache, &text);
        prop_assert!((actual - expected).abs() <= 1e-3 * expected.max(1.0));
    }

    #[test]
    fn width_scales_with_horizontal_scale(
        text in "[a-z]{0,32}",
        height in 1.0f32..500.0,
        scale in 0.1f32..4.0,
    ) {
        let (_, resolver) = counting_resolver();
        let cache = TypefaceCache::new(resolver);
        let unit = Font::with_family_and_style("A", "Regular", 1.0);
        let stretched = unit.with_height(height).with_horizontal_scale(scale);

        let expected = unit.string_width_float(&cache, &text) * height * scale;
        let actual = stretched.string_width_float(&cache, &text);
        prop_assert!((actual - expected).abs() <= 1e-3 * expected.max(1.0));
    }

    #[test]
    fn clones_compare_equal_until_changed(height in 1.0f32..100.0, scale in 0.1f32..4.0) {
        let font = Font::with_family_and_style("A", "Regular", height);
        let mut copy = font.clone();
        prop_assert_eq!(&copy, &font);

        copy.set_horizontal_scale(scale);
        prop_assert!(!copy.shares_attributes_with(&font));
        prop_assert_eq!(copy == font, scale == 1.0);
    }
}
