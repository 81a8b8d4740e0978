//! Tests for gradient tags.

use miniformat::color::Rgb;
use miniformat::gradient::interpolate;
use miniformat::parse;

fn hex(text: &miniformat::StyledText) -> Vec<String> {
    text.leaves()
        .iter()
        .map(|leaf| leaf.color.clone().unwrap_or_default())
        .collect()
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn first_position_is_first_stop() {
    let stops = vec!["#FF5555".to_string(), "#5555FF".to_string()];
    assert_eq!(interpolate(&stops, 0, 10), "#ff5555");
}

#[test]
fn two_stop_channels_are_monotonic() {
    let stops = vec!["#FF5555".to_string(), "#5555FF".to_string()];
    let total = 37;

    let rgb: Vec<Rgb> = (0..total)
        .map(|i| Rgb::from_hex(&interpolate(&stops, i, total)).unwrap())
        .collect();

    for pair in rgb.windows(2) {
        assert!(pair[1].r <= pair[0].r, "red not decreasing: {:?}", pair);
        assert_eq!(pair[1].g, 0x55);
        assert!(pair[1].b >= pair[0].b, "blue not increasing: {:?}", pair);
    }

    let last = rgb[rgb.len() - 1];
    assert!(last.r < 0x5f && last.b > 0xf5, "last color {:?} not near blue", last);
}

#[test]
fn segment_index_is_clamped() {
    let stops = vec!["#000000".to_string(), "#ffffff".to_string()];
    // Positions past the run stay on the last segment.
    assert_eq!(interpolate(&stops, 6, 4), "#7f7f7f");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn gradient_emits_one_unit_per_character() {
    let text = parse("<gradient:red:blue>héllo</gradient>");
    let leaves = text.leaves();
    assert_eq!(leaves.len(), 5);
    assert_eq!(leaves[1].text, "é");
    assert_eq!(text.plain_text(), "héllo");
}

#[test]
fn three_stop_gradient() {
    let text = parse("<gradient:#000000:#ff0000:#ffff00>abcd</gradient>");
    assert_eq!(hex(&text), ["#000000", "#7f0000", "#ff0000", "#ff7f00"]);
}

#[test]
fn unknown_stop_becomes_white() {
    let text = parse("<gradient:nope:#000000>ab</gradient>");
    assert_eq!(hex(&text), ["#ffffff", "#7f7f7f"]);
}

#[test]
fn single_character_uses_first_stop_verbatim() {
    let text = parse("<gradient:red:blue>x</gradient>");
    assert_eq!(hex(&text), ["#FF5555"]);
}

#[test]
fn nested_scope_resets_position() {
    let text = parse("<gradient:red:blue>AB<bold>CD</bold>EF</gradient>");
    insta::assert_snapshot!(text.describe(), @r#"
    "A" color=#ff5555
    "B" color=#e25571
    "C" bold color=#ff5555
    "D" bold color=#aa55aa
    "E" color=#c6558d
    "F" color=#aa55aa
    "#);
}

#[test]
fn nested_scope_uses_own_length() {
    // "CD" is painted over a run of 2, exactly like a standalone gradient.
    let nested = parse("<gradient:red:blue>AB<bold>CD</bold>EF</gradient>");
    let standalone = parse("<gradient:red:blue>CD</gradient>");
    assert_eq!(hex(&nested)[2..4], hex(&standalone)[..]);
}

#[test]
fn outer_position_skips_nested_text() {
    // E continues from B's position, not from after D.
    let nested = parse("<gradient:#000000:#ffffff>AB<i>CD</i>EF</gradient>");
    let colors = hex(&nested);
    // total 6: positions 0, 1, 2, 3 -> 0, 42.5, 85, 127.5
    assert_eq!(colors[0], "#000000");
    assert_eq!(colors[1], "#2a2a2a");
    assert_eq!(colors[4], "#555555");
    assert_eq!(colors[5], "#7f7f7f");
}

#[test]
fn malformed_stop_reaches_output() {
    let text = parse("<gradient:#zzzzzz:#000000>ab</gradient>");
    assert_eq!(hex(&text), ["#zzzzzz", "#zzzzzz"]);
}
