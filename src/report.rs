use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Mutable cost counters threaded through a single sort run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub passes: u64,
    pub comparisons: u64,
    pub swaps: u64,
    pub shifts: u64,
}

impl Counters {
    /// Evaluates `compare(a, b) == Less` and records the comparison.
    #[inline]
    pub fn is_less<T, F>(&mut self, compare: &mut F, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.comparisons += 1;
        compare(a, b) == Ordering::Less
    }
}

/// Summary of one completed sort run.
///
/// Exchange based algorithms report `passes` and `swaps`, shifting algorithms report `shifts`. The
/// metrics an algorithm does not track are `None` and are left out of the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortReport {
    algorithm: &'static str,
    elements: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    passes: Option<u64>,
    comparisons: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    swaps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shifts: Option<u64>,
}

impl SortReport {
    pub fn from_exchanges(algorithm: &'static str, elements: usize, counters: Counters) -> Self {
        Self {
            algorithm,
            elements,
            passes: Some(counters.passes),
            comparisons: counters.comparisons,
            swaps: Some(counters.swaps),
            shifts: None,
        }
    }

    pub fn from_shifts(algorithm: &'static str, elements: usize, counters: Counters) -> Self {
        Self {
            algorithm,
            elements,
            passes: None,
            comparisons: counters.comparisons,
            swaps: None,
            shifts: Some(counters.shifts),
        }
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn elements(&self) -> usize {
        self.elements
    }

    pub fn passes(&self) -> Option<u64> {
        self.passes
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> Option<u64> {
        self.swaps
    }

    pub fn shifts(&self) -> Option<u64> {
        self.shifts
    }

    /// Element movements of either kind.
    pub fn moves(&self) -> u64 {
        self.swaps.or(self.shifts).unwrap_or(0)
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm:   {}", self.algorithm)?;
        writeln!(f, "Elements:    {}", self.elements)?;
        if let Some(passes) = self.passes {
            writeln!(f, "Passes:      {passes}")?;
        }
        write!(f, "Comparisons: {}", self.comparisons)?;
        if let Some(swaps) = self.swaps {
            write!(f, "\nSwaps:       {swaps}")?;
        }
        if let Some(shifts) = self.shifts {
            write!(f, "\nShifts:      {shifts}")?;
        }
        Ok(())
    }
}
