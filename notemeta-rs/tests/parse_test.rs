//! Library-level tests for note parsing.

use notemeta::{parse, Content, MarkdownParser, NoteError, OptString};

fn content(title: Option<&str>, body: Option<&str>, lead: Option<&str>) -> Content {
    Content {
        title: OptString::from(title.map(str::to_string)),
        body: OptString::from(body.map(str::to_string)),
        lead: OptString::from(lead.map(str::to_string)),
    }
}

mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frontmatter_title_keeps_heading_in_body() {
        let parsed = parse("---\ntitle: Hello\n---\n# World\nBody text\n\nmore").unwrap();
        assert_eq!(
            parsed,
            content(
                Some("Hello"),
                Some("# World\nBody text\n\nmore"),
                Some("# World\nBody text"),
            )
        );
    }

    #[test]
    fn heading_title_is_cut_from_body() {
        let parsed = parse("# Title\n\nLine1\nLine2\n\nPara2").unwrap();
        assert_eq!(
            parsed,
            content(Some("Title"), Some("Line1\nLine2\n\nPara2"), Some("Line1\nLine2"))
        );
    }

    #[test]
    fn level_one_heading_replaces_earlier_sub_heading() {
        let parsed = parse("## Sub\n# Main\ntext").unwrap();
        assert_eq!(parsed, content(Some("Main"), Some("text"), Some("text")));
    }

    #[test]
    fn malformed_frontmatter_fails() {
        let result = parse("---\n: bad yaml\n---\n");
        assert!(matches!(result, Err(NoteError::FrontmatterDecode { .. })));
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(parse("   \n\n  ").unwrap(), Content::default());
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input() {
        assert_eq!(parse("").unwrap(), Content::default());
    }

    #[test]
    fn plain_text_body_is_trimmed_source() {
        let source = "\n  First line\nsecond line\n\nThird paragraph  \n";
        let parsed = parse(source).unwrap();
        assert!(parsed.title.is_none());
        assert_eq!(parsed.body.as_deref(), Some(source.trim()));
        assert_eq!(parsed.lead.as_deref(), Some("First line\nsecond line"));
    }

    #[test]
    fn frontmatter_title_beats_level_one_heading() {
        let parsed = parse("---\nTitle: From metadata\n---\n# Heading\n\nText").unwrap();
        assert_eq!(parsed.title.as_deref(), Some("From metadata"));
        assert!(parsed.body.as_deref().unwrap().starts_with("# Heading"));
    }

    #[test]
    fn equal_level_heading_never_displaces_first() {
        let parsed = parse("## First\n\n## Second\n\n### Third").unwrap();
        assert_eq!(parsed.title.as_deref(), Some("First"));
        assert_eq!(parsed.body.as_deref(), Some("## Second\n\n### Third"));
    }

    #[test]
    fn smaller_level_displaces_larger() {
        let parsed = parse("### Deep\n\n## Shallower\n\nBody").unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Shallower"));
        assert_eq!(parsed.body.as_deref(), Some("Body"));
    }

    #[test]
    fn lead_is_line_prefix_of_body() {
        let sources = [
            "# T\n\nA\nB\n\nC",
            "---\ntitle: X\n---\nOne\nTwo\n   \nThree",
            "plain\ntext",
            "## Only heading",
        ];
        for source in sources {
            let parsed = parse(source).unwrap();
            match (parsed.body.as_deref(), parsed.lead.as_deref()) {
                (Some(body), Some(lead)) => {
                    assert!(body.starts_with(lead), "{source:?}");
                    let rest = &body[lead.len()..];
                    assert!(
                        rest.is_empty() || rest.starts_with('\n'),
                        "lead must end on a line boundary: {source:?}"
                    );
                }
                (None, lead) => assert_eq!(lead, None, "{source:?}"),
                (Some(_), None) => panic!("body without lead: {source:?}"),
            }
        }
    }

    #[test]
    fn frontmatter_without_title_falls_back_to_heading() {
        let parsed = parse("---\ntags: [a, b]\n---\n# Heading\n\nLead").unwrap();
        assert_eq!(parsed, content(Some("Heading"), Some("Lead"), Some("Lead")));
    }

    #[test]
    fn frontmatter_without_heading_is_not_body() {
        let parsed = parse("---\ndate: 2024-01-01\n---\nJust text").unwrap();
        assert_eq!(parsed, content(None, Some("Just text"), Some("Just text")));
    }

    #[test]
    fn non_mapping_frontmatter_fails() {
        let result = parse("---\n- one\n- two\n---\nBody");
        assert!(matches!(result, Err(NoteError::FrontmatterDecode { .. })));
    }
}

mod delimiters {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn long_dash_delimiters() {
        let parsed = parse("-----\ntitle: Hello\n-----\nBody").unwrap();
        assert_eq!(parsed, content(Some("Hello"), Some("Body"), Some("Body")));
    }

    #[test]
    fn indented_delimiters() {
        let parsed = parse("  ---  \ntitle: Hello\n---\nBody").unwrap();
        assert_eq!(parsed, content(Some("Hello"), Some("Body"), Some("Body")));
    }

    #[test]
    fn dot_closer_is_plain_markdown() {
        let source = "---\ntitle: Hello\n...\nBody";
        let parsed = parse(source).unwrap();
        assert!(parsed.title.is_none());
        assert_eq!(parsed.body.as_deref(), Some(source));
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deeply_nested_block_quotes() {
        let source = format!("{} text", ">".repeat(100_000));
        let parsed = parse(&source).unwrap();
        assert!(parsed.title.is_none());
        assert_eq!(parsed.body.as_deref(), Some(source.as_str()));
    }

    #[test]
    fn heading_below_many_levels_of_nesting() {
        let source = format!("{} # Deep\n\nafter", "> ".repeat(1_000));
        let parsed = parse(&source).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Deep"));
    }
}

mod concurrency {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shared_parser_across_threads() {
        let parser = MarkdownParser::new();
        let sources: Vec<String> = (0..32)
            .map(|i| {
                if i % 2 == 0 {
                    format!("---\ntitle: Note {i}\n---\nBody {i}")
                } else {
                    format!("# Heading {i}\n\nBody {i}")
                }
            })
            .collect();

        let parser = &parser;
        let results: Vec<Content> = std::thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .map(|source| scope.spawn(move || parser.parse(source).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (i, parsed) in results.iter().enumerate() {
            let title = if i % 2 == 0 {
                format!("Note {i}")
            } else {
                format!("Heading {i}")
            };
            assert_eq!(parsed.title.as_deref(), Some(title.as_str()));
            assert_eq!(parsed.body.as_deref(), Some(format!("Body {i}").as_str()));
        }
    }

    #[test]
    fn failed_parse_does_not_leak_into_next() {
        let parser = MarkdownParser::new();
        assert!(parser.parse("---\n: bad yaml\n---\n").is_err());

        let parsed = parser.parse("Plain note").unwrap();
        assert!(parsed.title.is_none());
        assert_eq!(parsed.body.as_deref(), Some("Plain note"));
    }
}
