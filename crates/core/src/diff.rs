//! Plain-text comparison of two page versions.
//!
//! Page content is opaque rich-text HTML. For comparison it is flattened to
//! text: block boundaries become line breaks, all other markup is dropped,
//! and a handful of common entities are decoded. The result is diffed line
//! by line.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;
use serde::Serialize;
use similar::{capture_diff_slices_deadline, Algorithm, ChangeTag};

/// Wall-clock limit for computing a minimal diff of one version pair.
pub const DIFF_TIME_BUDGET: Duration = Duration::from_millis(500);

static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|h[1-6]|li|tr|pre|blockquote|table|ul|ol)\s*>")
        .expect("block break pattern is valid")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

static SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").expect("whitespace pattern is valid"));

/// Flatten rich-text HTML into trimmed, non-empty plain-text lines.
pub fn strip_markup(html: &str) -> Vec<String> {
    let with_breaks = BLOCK_BREAK.replace_all(html, "\n");
    let without_tags = ANY_TAG.replace_all(&with_breaks, "");
    let decoded = decode_entities(&without_tags);

    decoded
        .lines()
        .map(|line| SPACES.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn decode_entities(text: &str) -> String {
    // `&amp;` last so that "&amp;lt;" decodes to "&lt;" rather than "<".
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    pub kind: ChangeKind,
    pub text: String,
}

/// Line diff between two already-flattened texts, in reading order.
///
/// Uses Myers' algorithm, which needs memory linear in the input. Once
/// [`DIFF_TIME_BUDGET`] is spent the remaining region is reported as a plain
/// removal followed by an addition instead of a minimal edit script.
pub fn diff_lines(old: &[String], new: &[String]) -> Vec<LineChange> {
    let deadline = Instant::now() + DIFF_TIME_BUDGET;
    let ops = capture_diff_slices_deadline(Algorithm::Myers, old, new, Some(deadline));

    let mut changes = Vec::with_capacity(old.len().max(new.len()));
    for op in &ops {
        for line in op.iter_changes(old, new) {
            let kind = match line.tag() {
                ChangeTag::Equal => ChangeKind::Unchanged,
                ChangeTag::Delete => ChangeKind::Removed,
                ChangeTag::Insert => ChangeKind::Added,
            };
            changes.push(LineChange {
                kind,
                text: line.value(),
            });
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(kind: ChangeKind, text: &str) -> LineChange {
        LineChange {
            kind,
            text: text.to_string(),
        }
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_tags_and_splits_blocks() {
        let html = "<h1>Team Wiki</h1><p>Start <b>here</b>.</p><ul><li>One</li><li>Two</li></ul>";
        assert_eq!(
            strip_markup(html),
            lines(&["Team Wiki", "Start here.", "One", "Two"])
        );
    }

    #[test]
    fn decodes_entities_and_collapses_spaces() {
        let html = "<p>Tom&nbsp;&amp;&nbsp;Jerry   &lt;3</p>";
        assert_eq!(strip_markup(html), lines(&["Tom & Jerry <3"]));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markup("# Title\n\nBody"), lines(&["# Title", "Body"]));
    }

    #[test]
    fn identical_texts_are_unchanged() {
        let a = lines(&["a", "b"]);
        let diff = diff_lines(&a, &a);
        assert!(diff.iter().all(|c| c.kind == ChangeKind::Unchanged));
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn reports_replaced_line() {
        let diff = diff_lines(&lines(&["a", "b", "c"]), &lines(&["a", "x", "c"]));
        assert_eq!(
            diff,
            vec![
                change(ChangeKind::Unchanged, "a"),
                change(ChangeKind::Removed, "b"),
                change(ChangeKind::Added, "x"),
                change(ChangeKind::Unchanged, "c"),
            ]
        );
    }

    #[test]
    fn large_inputs_diff_in_linear_space() {
        let html: String = (0..120_000).map(|i| format!("{i}<br>")).collect();
        let old = strip_markup(&html);
        let mut new = old.clone();
        new[60_000] = "changed".to_string();

        let diff = diff_lines(&old, &new);

        assert_eq!(diff.len(), old.len() + 1);
        let edits: Vec<&LineChange> = diff
            .iter()
            .filter(|c| c.kind != ChangeKind::Unchanged)
            .collect();
        assert_eq!(
            edits,
            vec![
                &change(ChangeKind::Removed, "60000"),
                &change(ChangeKind::Added, "changed"),
            ]
        );
    }

    #[test]
    fn disjoint_large_inputs_finish_within_budget() {
        let old: Vec<String> = (0..50_000).map(|i| format!("a{i}")).collect();
        let new: Vec<String> = (0..50_000).map(|i| format!("b{i}")).collect();

        let started = Instant::now();
        let diff = diff_lines(&old, &new);

        assert!(started.elapsed() < DIFF_TIME_BUDGET * 10);
        assert_eq!(diff.len(), 100_000);
        assert_eq!(
            diff.iter().filter(|c| c.kind == ChangeKind::Removed).count(),
            50_000
        );
    }

    #[test]
    fn handles_empty_sides() {
        let added = diff_lines(&[], &lines(&["new"]));
        assert_eq!(added, vec![change(ChangeKind::Added, "new")]);
        let removed = diff_lines(&lines(&["old"]), &[]);
        assert_eq!(removed, vec![change(ChangeKind::Removed, "old")]);
    }
}
