//! Comparing two perft [`Record`]s move by move.
//!
//! When perft of a position disagrees with the reference, comparing the divide
//! output narrows the bug down to the root moves whose subtrees differ. Playing
//! one of them and repeating the process eventually reveals the position where
//! the move generator is wrong.

use std::collections::HashSet;
use std::fmt;

use anyhow::Context;

use crate::record::Record;

/// A move whose node counts in the two records differ. A move listed in only
/// one of the records has count 0 in the other one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difference {
    /// Move as listed in the record.
    pub mv: String,
    /// Node count in the first record.
    pub first: u64,
    /// Node count in the second record.
    pub second: u64,
}

impl Difference {
    fn new(mv: &str, first: u64, second: u64) -> Self {
        Self {
            mv: mv.to_owned(),
            first,
            second,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}, {}]", self.mv, self.first, self.second)
    }
}

/// Result of [`compare`]: the differing moves and the total node count of
/// each record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    differences: Vec<Difference>,
    first_total: u64,
    second_total: u64,
}

impl Comparison {
    /// Differing moves: the ones from the first record in its order, followed
    /// by the moves only the second record lists.
    #[must_use]
    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    /// Total node counts of the first and the second record.
    #[must_use]
    pub const fn totals(&self) -> (u64, u64) {
        (self.first_total, self.second_total)
    }

    /// Returns `true` if every move has the same count in both records.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.differences.is_empty()
    }

    /// The line that summarizes the comparison.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Differences: {} {}", self.first_total, self.second_total)
    }
}

impl fmt::Display for Comparison {
    /// Writes the summary followed by one `<move>: [<first>, <second>]` line
    /// per difference and an empty line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for difference in &self.differences {
            writeln!(f, "{difference}")?;
        }
        writeln!(f)
    }
}

fn accumulate(total: &mut u64, mv: &str, count: u64) -> anyhow::Result<()> {
    *total = total
        .checked_add(count)
        .with_context(|| format!("total node count overflows at {mv}"))?;
    Ok(())
}

/// Compares node counts of every move listed in either record.
///
/// # Errors
///
/// Returns an error if a total node count does not fit into [`u64`].
pub fn compare(first: &Record, second: &Record) -> anyhow::Result<Comparison> {
    let mut comparison = Comparison::default();
    let mut handled = HashSet::with_capacity(second.len());
    for (mv, first_count) in first.iter() {
        accumulate(&mut comparison.first_total, mv, first_count)?;
        match second.get(mv) {
            Some(second_count) => {
                accumulate(&mut comparison.second_total, mv, second_count)?;
                if first_count != second_count {
                    comparison
                        .differences
                        .push(Difference::new(mv, first_count, second_count));
                }
                let _ = handled.insert(mv);
            },
            None => comparison
                .differences
                .push(Difference::new(mv, first_count, 0)),
        }
    }
    for (mv, second_count) in second.iter().filter(|(mv, _)| !handled.contains(mv)) {
        accumulate(&mut comparison.second_total, mv, second_count)?;
        comparison
            .differences
            .push(Difference::new(mv, 0, second_count));
    }
    log::debug!(
        "compared {} and {} moves, {} differ",
        first.len(),
        second.len(),
        comparison.differences.len()
    );
    Ok(comparison)
}
