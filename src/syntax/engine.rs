//! Tokenizer engine
//!
//! Scans source text left to right against a grammar and turns it into
//! an ordered run of segments that covers every byte exactly once. The
//! engine is total: any input string produces output, and text no
//! category matches is carried through as an unclassified gap.

use std::ops::Range;

use tracing::trace;

use super::classify::Classifier;
use super::escape::escape_into;
use super::rules::{Category, Grammar, Match};
use super::tokens::{TokenClass, DEFAULT_CLASS_PREFIX};

/// A piece of the source, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Text between matches (or before the first / after the last)
    Gap { start: usize, end: usize },
    /// A matched token and the class it was given, if any
    Token {
        start: usize,
        end: usize,
        class: Option<TokenClass>,
    },
}

impl Segment {
    /// Byte range covered by this segment
    pub fn range(&self) -> Range<usize> {
        match *self {
            Segment::Gap { start, end } | Segment::Token { start, end, .. } => start..end,
        }
    }

    /// Source text covered by this segment
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.range()]
    }

    /// Class to render with; gaps never carry one
    pub fn class(&self) -> Option<TokenClass> {
        match *self {
            Segment::Gap { .. } => None,
            Segment::Token { class, .. } => class,
        }
    }
}

/// Cached position of a category's next match
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    Unknown,
    At(usize, usize),
    Exhausted,
}

/// Per-call scan state over one grammar
///
/// Each category remembers its next match. A cached match that still
/// starts at or after the cursor is the same match a fresh search would
/// find, so only categories the cursor has moved past are searched again.
struct Scanner<'g> {
    grammar: &'g Grammar,
    next: Vec<Lookahead>,
}

impl<'g> Scanner<'g> {
    fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            next: vec![Lookahead::Unknown; grammar.len()],
        }
    }

    /// Earliest match at or after `cursor`; ties go to the first category
    fn next_match<'t>(&mut self, text: &'t str, cursor: usize) -> Option<Match<'t>> {
        let mut best: Option<(usize, usize, usize)> = None;

        for (index, category) in self.grammar.categories().iter().enumerate() {
            let stale = match self.next[index] {
                Lookahead::Unknown => true,
                Lookahead::At(start, _) => start < cursor,
                Lookahead::Exhausted => false,
            };
            if stale {
                self.next[index] = match search(category, text, cursor) {
                    Some((start, end)) => Lookahead::At(start, end),
                    None => Lookahead::Exhausted,
                };
            }

            if let Lookahead::At(start, end) = self.next[index] {
                if best.map_or(true, |(best_start, _, _)| start < best_start) {
                    best = Some((start, end, index));
                }
            }
        }

        best.map(|(start, end, category)| Match {
            text: &text[start..end],
            start,
            end,
            category,
        })
    }
}

/// Search one category, stepping over any empty match it produces
fn search(category: &Category, text: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    loop {
        let (start, end) = category.find_at(text, pos)?;
        if start < end {
            return Some((start, end));
        }
        trace!(category = %category.name, offset = start, "skipping empty match");
        pos = start + text[start..].chars().next()?.len_utf8();
    }
}

/// Split `source` into gaps and classified tokens
pub fn tokenize(source: &str, grammar: &Grammar, classifier: &Classifier) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut scanner = Scanner::new(grammar);
    let mut cursor = 0;

    while let Some(token) = scanner.next_match(source, cursor) {
        if token.start > cursor {
            segments.push(Segment::Gap {
                start: cursor,
                end: token.start,
            });
        }
        segments.push(Segment::Token {
            start: token.start,
            end: token.end,
            class: classifier.classify(&token),
        });
        cursor = token.end;
    }

    if cursor < source.len() {
        segments.push(Segment::Gap {
            start: cursor,
            end: source.len(),
        });
    }

    segments
}

/// Render segments as markup
///
/// Every segment's text is escaped once. Classified tokens are wrapped
/// as `<span class="{prefix}{name}">...</span>`.
pub fn render(source: &str, segments: &[Segment], prefix: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    for segment in segments {
        let text = segment.text(source);
        match segment.class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(&class.css_class(prefix));
                out.push_str("\">");
                escape_into(&mut out, text);
                out.push_str("</span>");
            }
            None => escape_into(&mut out, text),
        }
    }
    out
}

/// Highlight `source` with the default `tok-` class prefix
pub fn highlight(source: &str, grammar: &Grammar, classifier: &Classifier) -> String {
    highlight_with_prefix(source, grammar, classifier, DEFAULT_CLASS_PREFIX)
}

/// Highlight `source`, prefixing every class tag with `prefix`
pub fn highlight_with_prefix(
    source: &str,
    grammar: &Grammar,
    classifier: &Classifier,
    prefix: &str,
) -> String {
    let segments = tokenize(source, grammar, classifier);
    render(source, &segments, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin;
    use crate::syntax::classify::Predicate;
    use proptest::prelude::*;
    use regex::Regex;

    fn test_language() -> (Grammar, Classifier) {
        let grammar = Grammar::from_rules(&[
            ("comment", r"//[^\n]*"),
            ("string", r#""(?:\\.|[^"\\])*""#),
            ("number", r"\b[0-9]+\b"),
            ("arrow", r"->"),
        ])
        .unwrap();
        let classifier = Classifier::new(Some(TokenClass::Number))
            .rule(Predicate::StartsWith("//"), TokenClass::Comment)
            .rule(Predicate::StartsWith("\""), TokenClass::String)
            .plain(Predicate::Equals("->"));
        (grammar, classifier)
    }

    /// Reverse `escape` so output text can be compared with the source
    fn unescape(text: &str) -> String {
        text.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&")
    }

    fn strip_spans(markup: &str) -> String {
        let wrapper = Regex::new(r#"<span class="tok-[a-z]+">|</span>"#).unwrap();
        wrapper.replace_all(markup, "").into_owned()
    }

    #[test]
    fn test_gaps_and_tokens() {
        let (grammar, classifier) = test_language();
        let source = "x = 42 // done";
        let segments = tokenize(source, &grammar, &classifier);

        assert_eq!(
            segments,
            vec![
                Segment::Gap { start: 0, end: 4 },
                Segment::Token { start: 4, end: 6, class: Some(TokenClass::Number) },
                Segment::Gap { start: 6, end: 7 },
                Segment::Token { start: 7, end: 14, class: Some(TokenClass::Comment) },
            ]
        );
    }

    #[test]
    fn test_render_wraps_and_escapes() {
        let (grammar, classifier) = test_language();
        let html = highlight(r#"a<b "x&y" 7"#, &grammar, &classifier);
        assert_eq!(
            html,
            r#"a&lt;b <span class="tok-string">"x&amp;y"</span> <span class="tok-number">7</span>"#
        );
    }

    #[test]
    fn test_unclassified_token_is_plain() {
        let (grammar, classifier) = test_language();
        assert_eq!(highlight("$a->b", &grammar, &classifier), "$a-&gt;b");
    }

    #[test]
    fn test_custom_prefix() {
        let (grammar, classifier) = test_language();
        let html = highlight_with_prefix("1", &grammar, &classifier, "hl-");
        assert_eq!(html, r#"<span class="hl-number">1</span>"#);
    }

    #[test]
    fn test_empty_source() {
        let (grammar, classifier) = test_language();
        assert!(tokenize("", &grammar, &classifier).is_empty());
        assert_eq!(highlight("", &grammar, &classifier), "");
    }

    #[test]
    fn test_empty_grammar_is_one_gap() {
        let grammar = Grammar::new();
        let classifier = Classifier::new(None);
        assert_eq!(
            tokenize("a & b", &grammar, &classifier),
            vec![Segment::Gap { start: 0, end: 5 }]
        );
        assert_eq!(highlight("a & b", &grammar, &classifier), "a &amp; b");
    }

    #[test]
    fn test_unterminated_string_degrades_to_gap() {
        let (grammar, classifier) = test_language();
        let html = highlight(r#"say "oops 3"#, &grammar, &classifier);
        assert_eq!(html, r#"say "oops <span class="tok-number">3</span>"#);
    }

    #[test]
    fn test_empty_match_is_skipped() {
        // Built by hand to bypass the construction-time check
        let mut grammar = Grammar::new();
        grammar.add_category(Category {
            name: "maybe".to_string(),
            pattern: Regex::new(r"x*").unwrap(),
        });
        let classifier = Classifier::new(Some(TokenClass::Keyword));
        let segments = tokenize("ab xx é", &grammar, &classifier);
        assert_eq!(
            segments,
            vec![
                Segment::Gap { start: 0, end: 3 },
                Segment::Token { start: 3, end: 5, class: Some(TokenClass::Keyword) },
                Segment::Gap { start: 5, end: 8 },
            ]
        );
    }

    #[test]
    fn test_cached_lookahead_matches_fresh_search() {
        let (grammar, classifier) = test_language();
        let source = "1 \"2\" 3 // 4\n5 -> \"6";
        let mut expected = Vec::new();
        let mut cursor = 0;
        while let Some(m) = grammar.find_at(source, cursor) {
            expected.push((m.start, m.end));
            cursor = m.end;
        }
        let actual: Vec<_> = tokenize(source, &grammar, &classifier)
            .into_iter()
            .filter(|s| matches!(s, Segment::Token { .. }))
            .map(|s| (s.range().start, s.range().end))
            .collect();
        assert_eq!(actual, expected);
    }

    proptest! {
        #[test]
        fn prop_segments_cover_source(source in "\\PC*") {
            for lang in builtin::all_languages().unwrap() {
                let segments = tokenize(&source, &lang.grammar, &lang.classifier);
                let mut cursor = 0;
                let mut rebuilt = String::new();
                for segment in &segments {
                    prop_assert_eq!(segment.range().start, cursor);
                    prop_assert!(segment.range().end > cursor);
                    rebuilt.push_str(segment.text(&source));
                    cursor = segment.range().end;
                }
                prop_assert_eq!(rebuilt, source.clone());
            }
        }

        #[test]
        fn prop_output_escapes_all_source_markup(
            source in "[<>&$#\"'a-z0-9 \\-\\n?/*.:=]{0,64}"
        ) {
            for lang in builtin::all_languages().unwrap() {
                let html = highlight(&source, &lang.grammar, &lang.classifier);
                let bare = strip_spans(&html);
                prop_assert!(!bare.contains('<'));
                prop_assert!(!bare.contains('>'));
                prop_assert_eq!(unescape(&bare), source.clone());
            }
        }
    }
}
