//! Line classification tests

use pretty_assertions::assert_eq;
use quillmark_core::ast::HeadingLevel;
use quillmark_core::classify::{classify, is_fence_delimiter, LineKind};
use rstest::rstest;

// ============================================================================
// Priority Order
// ============================================================================

#[rstest]
#[case("![video](clip.mp4)", LineKind::Video { url: "clip.mp4" })]
#[case("![video]()", LineKind::Video { url: "" })]
#[case("![Red dress](/img/dress.jpg)", LineKind::Image { alt: "Red dress", url: "/img/dress.jpg" })]
#[case("![](/img/x.png)", LineKind::Image { alt: "", url: "/img/x.png" })]
#[case("![Video](clip.mp4)", LineKind::Image { alt: "Video", url: "clip.mp4" })]
#[case("# Title", LineKind::Heading { level: HeadingLevel::H1, text: "Title" })]
#[case("## Title", LineKind::Heading { level: HeadingLevel::H2, text: "Title" })]
#[case("### Title", LineKind::Heading { level: HeadingLevel::H3, text: "Title" })]
#[case("> quoted", LineKind::Blockquote { text: "quoted" })]
#[case("- item", LineKind::UnorderedItem { text: "item" })]
#[case("12. item", LineKind::OrderedItem { number: 12, text: "item" })]
#[case("```", LineKind::Fence { inline: None })]
#[case("  ```rust", LineKind::Fence { inline: None })]
#[case("```let x```", LineKind::Fence { inline: Some("let x") })]
#[case("", LineKind::Blank)]
#[case(" \t ", LineKind::Blank)]
#[case("Hello world", LineKind::Paragraph { text: "Hello world" })]
fn test_classify(#[case] line: &str, #[case] expected: LineKind) {
    assert_eq!(classify(line), expected);
}

#[test]
fn test_video_is_never_image() {
    let kind = classify("![video](https://cdn.example.com/v.mp4)");
    assert!(matches!(kind, LineKind::Video { .. }));
    assert!(!matches!(kind, LineKind::Image { .. }));
}

// ============================================================================
// Boundary Conditions
// ============================================================================

#[rstest]
#[case("#### Not a heading")]
#[case("##### Also not")]
#[case("#NoSpace")]
#[case("-no space")]
#[case(">no space")]
#[case("1.no space")]
#[case("1) paren")]
#[case("![alt](unclosed")]
#[case("![alt] (spaced)")]
fn test_falls_through_to_paragraph(#[case] line: &str) {
    assert_eq!(classify(line), LineKind::Paragraph { text: line });
}

#[test]
fn test_image_alt_stops_at_first_bracket_paren() {
    assert_eq!(
        classify("![a](b)(c)"),
        LineKind::Image {
            alt: "a",
            url: "b)(c"
        }
    );
}

#[test]
fn test_ordered_item_keeps_extra_whitespace_in_text() {
    assert_eq!(
        classify("3.  spaced"),
        LineKind::OrderedItem {
            number: 3,
            text: " spaced"
        }
    );
}

#[test]
fn test_ordered_item_number_saturates() {
    assert_eq!(
        classify("99999999999999999999999. big"),
        LineKind::OrderedItem {
            number: u64::MAX,
            text: "big"
        }
    );
}

#[test]
fn test_fence_delimiter_detection() {
    assert!(is_fence_delimiter("```"));
    assert!(is_fence_delimiter("   ```python   "));
    assert!(!is_fence_delimiter("``"));
    assert!(!is_fence_delimiter("text ```"));
}

#[test]
fn test_heading_text_is_not_trimmed() {
    assert_eq!(
        classify("#  Spaced"),
        LineKind::Heading {
            level: HeadingLevel::H1,
            text: " Spaced"
        }
    );
}
