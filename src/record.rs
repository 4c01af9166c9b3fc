//! Parsing perft divide output into a [`Record`].
//!
//! Most engines print the node count for every legal root move when asked to
//! "divide" (e.g. Stockfish's `go perft <depth>`), one `<move>: <count>` pair per
//! line, possibly surrounded by headers and summaries.

use std::collections::HashMap;

use anyhow::Context;

/// Separates the move from its node count on every entry line.
pub const SEPARATOR: &str = ": ";

/// Node counts per root move in the order they were first listed.
///
/// Moves are kept verbatim, so `e1g1` and `O-O` are different keys. Listing the
/// same move twice keeps its original position and overwrites the count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses perft divide output.
    ///
    /// Lines without the `": "` separator (blank lines, headers) are skipped.
    /// Everything before the first separator is the move, the count is the
    /// text up to the next separator with surrounding whitespace trimmed. This
    /// means summary lines like `Nodes searched: 8902` end up in the record
    /// too.
    ///
    /// Counts follow [`u64`]'s `FromStr`: a leading `+` is accepted, digit
    /// group separators like `1_000` are not.
    ///
    /// # Errors
    ///
    /// Returns an error if a count is not a non-negative integer.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut record = Self::new();
        for (number, line) in text.lines().enumerate() {
            let Some((mv, rest)) = line.split_once(SEPARATOR) else {
                log::trace!("line {}: no separator, skipping {line:?}", number + 1);
                continue;
            };
            let count = rest.split_once(SEPARATOR).map_or(rest, |(count, _)| count);
            let count = count.trim().parse::<u64>().with_context(|| {
                format!(
                    "line {}: expected node count for {mv:?}, got {count:?}",
                    number + 1
                )
            })?;
            record.insert(mv, count);
        }
        log::debug!("parsed {} perft entries", record.len());
        Ok(record)
    }

    /// Sets the node count of a move, appending it if the move is new.
    pub fn insert(&mut self, mv: &str, count: u64) {
        if let Some(&position) = self.index.get(mv) {
            log::debug!("{mv} is listed more than once, keeping the last count");
            self.entries[position].1 = count;
        } else {
            let _ = self.index.insert(mv.to_owned(), self.entries.len());
            self.entries.push((mv.to_owned(), count));
        }
    }

    /// Node count of the move, if it is listed.
    #[must_use]
    pub fn get(&self, mv: &str) -> Option<u64> {
        self.index.get(mv).map(|&position| self.entries[position].1)
    }

    /// Moves and their counts in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(mv, count)| (mv.as_str(), *count))
    }

    /// Number of distinct moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no line had an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all node counts, i.e. the perft result one level up.
    ///
    /// # Errors
    ///
    /// Returns an error if the sum does not fit into [`u64`].
    pub fn total(&self) -> anyhow::Result<u64> {
        self.iter().try_fold(0u64, |total, (mv, count)| {
            total
                .checked_add(count)
                .with_context(|| format!("total node count overflows at {mv}"))
        })
    }
}

impl TryFrom<&str> for Record {
    type Error = anyhow::Error;

    fn try_from(text: &str) -> anyhow::Result<Self> {
        Self::parse(text)
    }
}
