//! Inline formatter tests

use std::borrow::Cow;

use pretty_assertions::assert_eq;
use quillmark_core::inline::{format_inline, has_stray_marker, verbatim};
use quillmark_core::InlineRun;
use rstest::rstest;

fn plain(text: &str) -> InlineRun<'_> {
    InlineRun::Plain(Cow::Borrowed(text))
}

#[test]
fn test_empty_text_has_no_runs() {
    assert!(format_inline("").is_empty());
    assert!(verbatim("").is_empty());
}

#[test]
fn test_plain_text_is_one_run() {
    assert_eq!(format_inline("just words"), vec![plain("just words")]);
}

#[rstest]
#[case("**bold**", InlineRun::Bold("bold".into()))]
#[case("*italic*", InlineRun::Italic("italic".into()))]
#[case("***x***", InlineRun::BoldItalic("x".into()))]
#[case("`cargo run`", InlineRun::Code("cargo run".into()))]
#[case("[Shop now](/collections/new)", InlineRun::Link { text: "Shop now".into(), url: "/collections/new".into() })]
fn test_single_span(#[case] text: &str, #[case] expected: InlineRun) {
    assert_eq!(format_inline(text), vec![expected]);
}

#[test]
fn test_bold_italic_is_not_split() {
    let runs = format_inline("***x***");
    assert_eq!(runs.len(), 1);
    assert!(!runs.iter().any(|r| r.text().contains('*')));
}

#[test]
fn test_mixed_line_keeps_order() {
    assert_eq!(
        format_inline("Read [the guide](/guide), then **save** *now* with `CODE10`."),
        vec![
            plain("Read "),
            InlineRun::Link {
                text: "the guide".into(),
                url: "/guide".into()
            },
            plain(", then "),
            InlineRun::Bold("save".into()),
            plain(" "),
            InlineRun::Italic("now".into()),
            plain(" with "),
            InlineRun::Code("CODE10".into()),
            plain("."),
        ]
    );
}

#[test]
fn test_link_text_is_not_formatted() {
    assert_eq!(
        format_inline("[**big**](/big)"),
        vec![InlineRun::Link {
            text: "**big**".into(),
            url: "/big".into()
        }]
    );
}

#[test]
fn test_code_runs_last() {
    // Emphasis inside backticks is consumed before the code pass sees it.
    assert_eq!(
        format_inline("`**x**`"),
        vec![plain("`"), InlineRun::Bold("x".into()), plain("`")]
    );
}

#[test]
fn test_unmatched_markers_stay_plain() {
    assert_eq!(format_inline("price *"), vec![plain("price *")]);
    assert_eq!(format_inline("a ` b"), vec![plain("a ` b")]);
    assert_eq!(format_inline("[dangling](no-close"), vec![plain("[dangling](no-close")]);
}

#[test]
fn test_adjacent_spans_produce_no_empty_plain_runs() {
    assert_eq!(
        format_inline("**a****b**"),
        vec![InlineRun::Bold("a".into()), InlineRun::Bold("b".into())]
    );
}

#[test]
fn test_url_with_parenthesis_is_cut_at_first_close() {
    assert_eq!(
        format_inline("[wiki](https://en.wikipedia.org/wiki/Rust_(language))"),
        vec![
            InlineRun::Link {
                text: "wiki".into(),
                url: "https://en.wikipedia.org/wiki/Rust_(language".into()
            },
            plain(")"),
        ]
    );
}

#[test]
fn test_runs_borrow_from_input() {
    let runs = format_inline("**borrowed**");
    assert!(matches!(&runs[0], InlineRun::Bold(Cow::Borrowed(_))));
}

#[rstest]
#[case("*open", true)]
#[case("tick ` left", true)]
#[case("2 * 3", false)]
#[case("trailing *", false)]
#[case("nothing here", false)]
fn test_stray_marker_detection(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(has_stray_marker(text), expected);
}
