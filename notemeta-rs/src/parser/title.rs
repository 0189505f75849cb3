//! Note title resolution.
//!
//! A `title` (or `Title`) string in the frontmatter always wins. Otherwise
//! the most significant heading of the document is used: the first level-1
//! heading, or failing that the first heading of the smallest level seen.
//! Headings starting inside the frontmatter block are not candidates.

use crate::error::Result;
use crate::parser::document::{walk, Node, WalkStatus};
use crate::parser::frontmatter::Frontmatter;
use crate::types::OptString;

/// Frontmatter keys holding the note title, by priority.
pub const TITLE_KEYS: [&str; 2] = ["title", "Title"];

/// Resolved title and the offset where the note body starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub title: OptString,
    pub body_start: usize,
}

/// Best heading seen so far during the walk.
struct HeadingCandidate {
    level: u8,
    text: String,
    end: Option<usize>,
}

impl HeadingCandidate {
    fn from_node<N: Node>(node: &N, level: u8) -> Self {
        Self {
            level,
            text: node.text(),
            end: node.lines().last().map(|line| line.stop),
        }
    }
}

/// Resolve the note title from the frontmatter and the document tree.
///
/// A frontmatter title leaves the document untouched: any heading that
/// follows stays part of the body. A heading title moves the body start past
/// the heading's last line.
pub fn resolve_title<N: Node>(frontmatter: &Frontmatter, root: &N) -> Result<ResolvedTitle> {
    let title = frontmatter.get_string(&TITLE_KEYS);
    if title.is_some() {
        log::debug!("title taken from frontmatter");
        return Ok(ResolvedTitle {
            title,
            body_start: frontmatter.end,
        });
    }

    let floor = frontmatter.body_floor();
    let mut best: Option<HeadingCandidate> = None;
    walk(root, |node: &N, entering| {
        if !entering {
            return Ok(WalkStatus::Continue);
        }

        if let Some(level) = node.heading_level() {
            if node.lines().first().is_some_and(|line| line.start < floor) {
                return Ok(WalkStatus::Continue);
            }
            if best.as_ref().is_none_or(|current| level < current.level) {
                best = Some(HeadingCandidate::from_node(node, level));
                if level == 1 {
                    return Ok(WalkStatus::Stop);
                }
            }
        }
        Ok(WalkStatus::Continue)
    })?;

    match best {
        Some(heading) => {
            log::debug!("title taken from level {} heading", heading.level);
            Ok(ResolvedTitle {
                title: OptString::new(heading.text),
                body_start: heading.end.unwrap_or(floor),
            })
        }
        None => Ok(ResolvedTitle {
            title: OptString::NONE,
            body_start: floor,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::document::{DocumentParser, LineSpan, ParseContext};
    use crate::parser::frontmatter::parse_frontmatter;
    use std::cell::Cell;

    /// Hand-built tree for exercising the walk without a Markdown parser.
    struct TestNode {
        level: Option<u8>,
        text: &'static str,
        lines: Vec<LineSpan>,
        children: Vec<TestNode>,
        visits: Option<&'static std::thread::LocalKey<Cell<usize>>>,
    }

    impl TestNode {
        fn root(children: Vec<TestNode>) -> Self {
            Self {
                level: None,
                text: "",
                lines: Vec::new(),
                children,
                visits: None,
            }
        }

        fn heading(level: u8, text: &'static str, stop: usize) -> Self {
            Self {
                level: Some(level),
                text,
                lines: vec![LineSpan { start: 0, stop }],
                children: Vec::new(),
                visits: None,
            }
        }
    }

    impl Node for TestNode {
        fn children(&self) -> &[Self] {
            &self.children
        }

        fn heading_level(&self) -> Option<u8> {
            if let Some(counter) = self.visits {
                counter.with(|c| c.set(c.get() + 1));
            }
            self.level
        }

        fn text(&self) -> String {
            self.text.to_string()
        }

        fn lines(&self) -> &[LineSpan] {
            &self.lines
        }
    }

    thread_local! {
        static AFTER_H1: Cell<usize> = const { Cell::new(0) };
    }

    fn resolve(source: &str) -> ResolvedTitle {
        let mut context = ParseContext::new();
        let root = DocumentParser::default().parse(source, &mut context);
        let frontmatter = parse_frontmatter(&mut context, source).unwrap();
        resolve_title(&frontmatter, &root).unwrap()
    }

    #[test]
    fn test_frontmatter_title_wins() {
        let resolved = resolve("---\ntitle: Hello\n---\n# World\n");
        assert_eq!(resolved.title.as_deref(), Some("Hello"));
        assert_eq!(resolved.body_start, 20);
    }

    #[test]
    fn test_capitalized_title_key() {
        let resolved = resolve("---\nTitle: Capital\n---\n# World\n");
        assert_eq!(resolved.title.as_deref(), Some("Capital"));
    }

    #[test]
    fn test_non_string_title_falls_back_to_heading() {
        let resolved = resolve("---\ntitle: 2024\n---\n# Heading\nText");
        assert_eq!(resolved.title.as_deref(), Some("Heading"));
    }

    #[test]
    fn test_first_h1_wins() {
        let resolved = resolve("## Sub\n# Main\n# Second\ntext");
        assert_eq!(resolved.title.as_deref(), Some("Main"));
        assert_eq!(resolved.body_start, 13);
    }

    #[test]
    fn test_smallest_level_wins_first_seen() {
        let resolved = resolve("### Deep\n## First\n## Second\n### Deeper");
        assert_eq!(resolved.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_no_heading() {
        let resolved = resolve("just text\n\nmore text");
        assert_eq!(resolved, ResolvedTitle::default());
    }

    #[test]
    fn test_no_heading_skips_frontmatter_block() {
        let resolved = resolve("---\ndate: 2024-01-01\n---\nText");
        assert!(resolved.title.is_none());
        assert_eq!(resolved.body_start, 24);
    }

    #[test]
    fn test_empty_heading_has_no_title_but_moves_body() {
        let resolved = resolve("#\nBody");
        assert!(resolved.title.is_none());
        assert_eq!(resolved.body_start, 1);
    }

    #[test]
    fn test_walk_stops_at_first_h1() {
        AFTER_H1.with(|c| c.set(0));
        let mut late = TestNode::heading(1, "Late", 30);
        late.visits = Some(&AFTER_H1);
        let root = TestNode::root(vec![
            TestNode::heading(2, "Sub", 6),
            TestNode::heading(1, "Main", 13),
            late,
        ]);

        let resolved = resolve_title(&Frontmatter::default(), &root).unwrap();
        assert_eq!(resolved.title.as_deref(), Some("Main"));
        assert_eq!(resolved.body_start, 13);
        assert_eq!(AFTER_H1.with(Cell::get), 0);
    }

    #[test]
    fn test_heading_without_lines_keeps_floor() {
        let mut heading = TestNode::heading(2, "No lines", 0);
        heading.lines.clear();
        let root = TestNode::root(vec![heading]);

        let resolved = resolve_title(&Frontmatter::default(), &root).unwrap();
        assert_eq!(resolved.title.as_deref(), Some("No lines"));
        assert_eq!(resolved.body_start, 0);
    }

    #[test]
    fn test_deeply_nested_heading_is_found() {
        let mut node = TestNode::heading(3, "Bottom", 1);
        for _ in 0..2_000 {
            node = TestNode::root(vec![node]);
        }

        let resolved = resolve_title(&Frontmatter::default(), &node).unwrap();
        assert_eq!(resolved.title.as_deref(), Some("Bottom"));
    }

    #[test]
    fn test_headings_inside_frontmatter_block_are_skipped() {
        let frontmatter = Frontmatter {
            values: Some(Default::default()),
            start: 0,
            end: 20,
        };
        let mut inside = TestNode::heading(1, "Inside", 19);
        inside.lines = vec![LineSpan { start: 6, stop: 19 }];
        let mut after = TestNode::heading(2, "After", 30);
        after.lines = vec![LineSpan { start: 21, stop: 30 }];
        let root = TestNode::root(vec![inside, after]);

        let resolved = resolve_title(&frontmatter, &root).unwrap();
        assert_eq!(resolved.title.as_deref(), Some("After"));
        assert_eq!(resolved.body_start, 30);
    }
}
