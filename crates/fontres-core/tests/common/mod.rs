#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use fontres_core::{Font, GlyphPositions, Typeface, TypefaceResolver};

/// Every character advances by half the height
pub const ADVANCE: f32 = 0.5;
pub const ASCENT: f32 = 0.75;

pub struct TestFace {
    name: String,
    style: String,
    suitable: AtomicBool,
}

impl TestFace {
    pub fn new(name: &str, style: &str) -> Self {
        Self {
            name: name.to_owned(),
            style: style.to_owned(),
            suitable: AtomicBool::new(true),
        }
    }

    pub fn retire(&self) {
        self.suitable.store(false, Ordering::SeqCst);
    }
}

impl Typeface for TestFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn style(&self) -> &str {
        &self.style
    }

    fn ascent(&self) -> f32 {
        ASCENT
    }

    fn string_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * ADVANCE
    }

    fn glyph_positions(&self, text: &str) -> GlyphPositions {
        let glyphs: Vec<u32> = text.chars().map(|c| c as u32).collect();
        let x_offsets = (0..=glyphs.len()).map(|i| i as f32 * ADVANCE).collect();
        GlyphPositions { glyphs, x_offsets }
    }

    fn is_suitable_for(&self, _font: &Font) -> bool {
        self.suitable.load(Ordering::SeqCst)
    }
}

/// Resolver that counts calls and hands out a fresh face each time
pub struct CountingResolver {
    calls: Arc<AtomicUsize>,
}

impl CountingResolver {
    pub fn new(calls: Arc<AtomicUsize>) -> Self {
        Self { calls }
    }
}

impl TypefaceResolver for CountingResolver {
    fn resolve(&self, font: &Font) -> Option<Arc<dyn Typeface>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(Arc::new(TestFace::new(
            font.typeface_name(),
            font.typeface_style(),
        )))
    }
}

pub fn counting_resolver() -> (Arc<AtomicUsize>, Arc<dyn TypefaceResolver>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let resolver = Arc::new(CountingResolver::new(Arc::clone(&calls)));
    (calls, resolver)
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
