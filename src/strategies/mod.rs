use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::StrategyError;
use crate::{SortReport, SortStrategy};

pub mod bubble;
pub mod insertion;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;

/// The closed set of available sort strategies.
#[derive(Debug, Clone)]
pub enum Strategy {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
}

impl Strategy {
    /// Recognized labels, in presentation order. The CLI preselects the first one.
    pub const LABELS: [&'static str; 2] = [bubble::LABEL, insertion::LABEL];

    /// Resolves a strategy by label.
    ///
    /// Matching ignores case and surrounding whitespace. Besides the full labels the short names
    /// `bubble` and `insertion` are accepted. Anything else is an error, there is no fallback.
    pub fn from_label(label: &str) -> Result<Self, StrategyError> {
        let wanted = label.trim();

        let strategy = if wanted.eq_ignore_ascii_case(bubble::LABEL)
            || wanted.eq_ignore_ascii_case("bubble")
        {
            Strategy::Bubble(BubbleSort::new())
        } else if wanted.eq_ignore_ascii_case(insertion::LABEL)
            || wanted.eq_ignore_ascii_case("insertion")
        {
            Strategy::Insertion(InsertionSort::new())
        } else {
            log::debug!("no strategy matches {label:?}");
            return Err(StrategyError::UnknownStrategy {
                label: label.to_owned(),
                known: Self::LABELS.join(", "),
            });
        };

        log::debug!("resolved {label:?} to {}", strategy.label());
        Ok(strategy)
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl SortStrategy for Strategy {
    fn label(&self) -> &'static str {
        match self {
            Strategy::Bubble(s) => s.label(),
            Strategy::Insertion(s) => s.label(),
        }
    }

    fn sort_by<T, F>(&mut self, v: &mut [T], compare: F) -> &SortReport
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Strategy::Bubble(s) => s.sort_by(v, compare),
            Strategy::Insertion(s) => s.sort_by(v, compare),
        }
    }

    fn last_report(&self) -> Option<&SortReport> {
        match self {
            Strategy::Bubble(s) => s.last_report(),
            Strategy::Insertion(s) => s.last_report(),
        }
    }
}
