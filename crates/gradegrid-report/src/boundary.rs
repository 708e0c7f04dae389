//! Letter grade boundary table
//!
//! Ordered percentage cutoffs for letter grades. Lookup walks the
//! bounds in descending order and returns the letter of the first bound
//! at or below the percentage.

use crate::error::{ReportError, Result};

/// Placeholder returned below every bound, and for absent grades
pub const NO_LETTER: &str = "-";

/// One boundary entry: everything at or above `lower` (and below the
/// previous entry's lower bound) earns `letter`.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    /// Inclusive lower bound, in percent
    pub lower: f64,
    /// Letter awarded at this bound
    pub letter: String,
}

/// Legend view of one boundary entry, with its derived upper bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry<'a> {
    /// Inclusive lower bound
    pub lower: f64,
    /// Upper bound (100 for the top entry, the previous lower bound
    /// otherwise; exclusive except for the top entry)
    pub upper: f64,
    /// Letter awarded
    pub letter: &'a str,
}

/// Ordered letter-grade cutoff table over [0, 100]
///
/// Bounds are strictly decreasing; the constructor rejects anything
/// else since lookups on an inverted table cannot be trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryTable {
    entries: Vec<Boundary>,
}

impl BoundaryTable {
    /// Build a table from `(lower_bound, letter)` pairs sorted
    /// descending by bound
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        let mut previous = f64::INFINITY;
        for (index, (lower, letter)) in pairs.into_iter().enumerate() {
            if !lower.is_finite() || lower >= previous {
                return Err(ReportError::MalformedBoundaryTable {
                    index,
                    bound: lower,
                    previous,
                });
            }
            previous = lower;
            entries.push(Boundary {
                lower,
                letter: letter.into(),
            });
        }
        Ok(Self { entries })
    }

    /// Empty table: every lookup yields [`NO_LETTER`]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Letter for a percentage: the first bound at or below it wins
    pub fn letter_for(&self, percentage: f64) -> &str {
        self.entries
            .iter()
            .find(|b| b.lower <= percentage)
            .map(|b| b.letter.as_str())
            .unwrap_or(NO_LETTER)
    }

    /// Legend entries in table order, with derived upper bounds
    pub fn legend(&self) -> impl Iterator<Item = LegendEntry<'_>> + '_ {
        self.entries.iter().enumerate().map(|(i, b)| LegendEntry {
            lower: b.lower,
            upper: if i == 0 {
                100.0
            } else {
                self.entries[i - 1].lower
            },
            letter: &b.letter,
        })
    }

    /// Number of boundary entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BoundaryTable {
    /// System-wide default table used when no course-scope boundaries
    /// are configured
    fn default() -> Self {
        Self {
            entries: [(90.0, "A"), (80.0, "B"), (70.0, "C"), (60.0, "D"), (0.0, "F")]
                .into_iter()
                .map(|(lower, letter)| Boundary {
                    lower,
                    letter: letter.to_string(),
                })
                .collect(),
        }
    }
}
