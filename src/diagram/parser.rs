use std::str::Lines;

use tracing::trace;

use super::TreeEntry;

/// Connectors introducing an entry: middle sibling and last sibling.
const BRANCH_MARKERS: [&str; 2] = ["├── ", "└── "];
/// Drawn in a prefix for every ancestor branch that continues below.
const CONTINUATION_GLYPH: char = '│';
const COMMENT_INTRODUCER: &str = " //";
const ELLIPSIS: &str = "...";

/// A tree diagram borrowed from its source text.
///
/// Iterating is lazy and can be repeated; every pass yields the same entries.
#[derive(Debug, Clone, Copy)]
pub struct Diagram<'a> {
    text: &'a str,
}

impl<'a> Diagram<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn entries(&self) -> Entries<'a> {
        Entries {
            lines: self.text.trim().lines(),
        }
    }
}

impl<'a> IntoIterator for &Diagram<'a> {
    type Item = TreeEntry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Entries of a [`Diagram`] in document order.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    lines: Lines<'a>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = TreeEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.by_ref().find_map(parse_line)
    }
}

/// Parses a single diagram line.
///
/// Never fails: a line without a branch marker is a depth 0 root. Returns
/// `None` for blank lines and for elided lines containing `...`.
pub fn parse_line(line: &str) -> Option<TreeEntry<'_>> {
    let line = strip_comment(line);

    let entry = match split_on_marker(line) {
        Some((prefix, name)) => TreeEntry::new(continuation_depth(prefix), name.trim()),
        None => TreeEntry::new(0, line.trim()),
    };

    if entry.name.is_empty() {
        return None;
    }
    if entry.name.contains(ELLIPSIS) {
        trace!("Skipping elided line: {:?}", line);
        return None;
    }

    Some(entry)
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT_INTRODUCER)
        .map_or(line, |(content, _comment)| content)
}

/// Splits around whichever branch marker occurs first.
fn split_on_marker(line: &str) -> Option<(&str, &str)> {
    BRANCH_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker).map(|index| (index, marker.len())))
        .min_by_key(|(index, _)| *index)
        .map(|(index, len)| (&line[..index], &line[index + len..]))
}

fn continuation_depth(prefix: &str) -> usize {
    prefix
        .chars()
        .filter(|c| *c == CONTINUATION_GLYPH)
        .count()
}
