//! Integration tests for layout, measure and draw against the sample font.

use sdfont_core::math::Vec2;
use sdfont_test_utils::{MockTexture, MockTextureDecoder, RecordingRenderer, fixtures};
use sdfont_text::{DrawParams, FontDescriptor, LayoutOptions, draw_text};

fn sample() -> FontDescriptor<MockTexture> {
    fixtures::sample_font(MockTextureDecoder::new()).unwrap()
}

fn pen_xs(font: &FontDescriptor<MockTexture>, text: &str) -> Vec<f32> {
    font.layout(text, Vec2::ZERO)
        .map(|glyph| glyph.position.x - glyph.metrics.map_or(0, |m| m.x_offset()) as f32)
        .collect()
}

// ============================================================================
// Layout Properties
// ============================================================================

#[test]
fn test_height_follows_line_count() {
    let font = sample();
    let line_height = fixtures::SAMPLE_LINE_HEIGHT as f32;

    for text in ["A", "AB", "A\nB", "A\n\nB", "AV\nBA\nV"] {
        let lines = 1 + text.matches('\n').count();
        assert_eq!(font.measure(text).y, line_height * lines as f32, "{text:?}");
    }
}

#[test]
fn test_kerning_pairs_from_descriptor() {
    let font = sample();
    assert_eq!(pen_xs(&font, "AV"), vec![0.0, 8.0]);
    // V then A applies -1 on top of the earlier -2
    assert_eq!(pen_xs(&font, "AVA"), vec![0.0, 8.0, 17.0]);
}

#[test]
fn test_offsets_from_descriptor() {
    let font = sample();
    let glyphs: Vec<_> = font.layout("AB", Vec2::new(4.0, 8.0)).collect();
    assert_eq!(glyphs[0].position, Vec2::new(4.0, 12.0));
    assert_eq!(glyphs[1].position, Vec2::new(15.0, 12.0));
}

#[test]
fn test_missing_glyphs_keep_slots() {
    let font = sample();
    let glyphs: Vec<_> = font.layout("A?B", Vec2::ZERO).collect();
    assert_eq!(glyphs.len(), 3);
    assert!(glyphs[1].is_missing());
    assert_eq!(pen_xs(&font, "A?B"), vec![0.0, 10.0, 10.0]);
}

#[test]
fn test_utf16_buffer_matches_str() {
    let font = sample();
    let text = "AV \u{1F600}\nBA";
    let utf16: Vec<u16> = text.encode_utf16().collect();

    let a: Vec<_> = font.layout(text, Vec2::new(3.0, 3.0)).collect();
    let b: Vec<_> = font.layout(&utf16, Vec2::new(3.0, 3.0)).collect();
    assert_eq!(a, b);
    assert_eq!(font.measure(text), font.measure(&utf16));
}

#[test]
fn test_explicit_options_leave_font_untouched() {
    let font = sample();
    let options = LayoutOptions {
        letter_spacing: 2,
        use_kerning: false,
    };

    let spaced: Vec<_> = font
        .layout_with("AV", Vec2::ZERO, options)
        .map(|g| g.position.x)
        .collect();
    assert_eq!(spaced, vec![0.0, 12.0]);
    assert_eq!(font.layout_options(), LayoutOptions::default());
}

#[test]
fn test_shared_font_across_threads() {
    let font = sample();
    let expected = font.measure("AVB\nBA");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(font.measure("AVB\nBA"), expected));
        }
    });
}

// ============================================================================
// Draw
// ============================================================================

#[test]
fn test_draw_skips_missing_and_line_feeds() {
    let font = sample();
    let mut renderer = RecordingRenderer::new();

    let drawn = draw_text(
        &mut renderer,
        &font,
        "A?\n\u{1F600}",
        Vec2::new(10.0, 10.0),
        &DrawParams::default(),
    );

    assert_eq!(drawn, 2);
    assert_eq!(renderer.code_points(), vec![65, 0x1F600]);
    assert_eq!(renderer.count_page(0), 1);
    assert_eq!(renderer.count_page(1), 1);

    let emoji = &renderer.calls()[1];
    assert_eq!(emoji.position, Vec2::new(10.0, 10.0));
    assert_eq!(emoji.top_left(), Vec2::new(10.0, 32.0));
}

#[test]
fn test_draw_passes_params_through() {
    let font = sample();
    let mut renderer = RecordingRenderer::new();
    let params = DrawParams::new()
        .with_rotation(0.25)
        .with_uniform_scale(1.5)
        .with_layer_depth(0.3);

    draw_text(&mut renderer, &font, "B", Vec2::ZERO, &params);

    let call = &renderer.calls()[0];
    assert_eq!(call.rotation, 0.25);
    assert_eq!(call.scale, Vec2::splat(1.5));
    assert_eq!(call.layer_depth, 0.3);
    assert_eq!(call.source.x, 10);
}
