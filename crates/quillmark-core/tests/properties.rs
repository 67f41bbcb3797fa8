//! Property tests: purity, line-ending independence, list grouping and
//! cross-surface consistency over generated posts.

use proptest::collection::vec;
use proptest::prelude::*;
use quillmark_core::surface::{ArticleRenderer, PreviewRenderer, Renderer};
use quillmark_core::{render, Block, FenceMode, InlineRun, Parser};

fn cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(100)
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        Just("**bold**".to_string()),
        Just("*it*".to_string()),
        Just("***both***".to_string()),
        Just("`code`".to_string()),
        Just("[link](/x)".to_string()),
        Just("*".to_string()),
        Just("`".to_string()),
        Just("<b>".to_string()),
    ]
}

fn text() -> impl Strategy<Value = String> {
    vec(word(), 1..6).prop_map(|words| words.join(" "))
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        text(),
        text().prop_map(|t| format!("# {t}")),
        text().prop_map(|t| format!("## {t}")),
        text().prop_map(|t| format!("### {t}")),
        text().prop_map(|t| format!("#### {t}")),
        text().prop_map(|t| format!("> {t}")),
        text().prop_map(|t| format!("- {t}")),
        (0u64..20, text()).prop_map(|(n, t)| format!("{n}. {t}")),
        Just("![video](clip.mp4)".to_string()),
        Just("![alt](img.png)".to_string()),
        Just("```".to_string()),
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

fn post() -> impl Strategy<Value = String> {
    vec(line(), 0..24).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(cases()))]

    /// Rendering is a pure function of the text.
    #[test]
    fn prop_render_is_pure(input in post()) {
        prop_assert_eq!(render(&input), render(&input));
    }

    #[test]
    fn prop_crlf_matches_lf(input in post()) {
        let crlf = input.replace('\n', "\r\n");
        for mode in [FenceMode::Legacy, FenceMode::Multiline] {
            let parser = Parser::new().with_fence_mode(mode);
            prop_assert_eq!(parser.parse(&crlf), parser.parse(&input));
        }
    }

    /// No two lists of the same kind are ever adjacent, and the document
    /// never opens with a break.
    #[test]
    fn prop_block_sequence_is_well_formed(input in post()) {
        let doc = render(&input);
        let blocks = &doc.blocks;
        prop_assert!(!matches!(blocks.first(), Some(Block::Break)));
        for pair in blocks.windows(2) {
            if let (Block::List(a), Block::List(b)) = (&pair[0], &pair[1]) {
                prop_assert_ne!(a.kind, b.kind);
            }
        }
    }

    /// Every blank line after the first content line becomes one break.
    #[test]
    fn prop_breaks_match_blank_lines_after_content(input in post()) {
        let expected = input
            .lines()
            .skip_while(|line| line.trim().is_empty())
            .filter(|line| line.trim().is_empty())
            .count();
        let breaks = render(&input)
            .iter()
            .filter(|block| matches!(block, Block::Break))
            .count();
        prop_assert_eq!(breaks, expected);
    }

    /// Headings never contain styled runs.
    #[test]
    fn prop_headings_are_verbatim(input in post()) {
        for block in render(&input).iter() {
            if let Block::Heading(h) = block {
                prop_assert!(h.content.len() <= 1);
                prop_assert!(h.content.iter().all(|r| matches!(r, InlineRun::Plain(_))));
            }
        }
    }

    /// Diagnostics never change the document.
    #[test]
    fn prop_diagnostics_are_side_channel(input in post()) {
        let parser = Parser::new();
        prop_assert_eq!(parser.parse_with_diagnostics(&input).document, parser.parse(&input));
    }

    /// The preview and the article page see the same document.
    #[test]
    fn prop_surfaces_share_one_document(input in post()) {
        let for_preview = render(&input);
        let for_article = render(&input);
        prop_assert_eq!(&for_preview, &for_article);

        let preview = PreviewRenderer::default().render(&for_preview);
        let article = ArticleRenderer::default().render(&for_article);
        let block_lines = for_preview.len();
        prop_assert_eq!(preview.lines().count(), block_lines);
        // Wrapper open and close lines.
        prop_assert_eq!(article.lines().count(), block_lines + 2);
    }
}
