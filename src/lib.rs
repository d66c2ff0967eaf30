use std::cmp::Ordering;

pub use error::{InputError, StrategyError};
pub use report::{Counters, SortReport};
pub use strategies::{BubbleSort, InsertionSort, Strategy};

#[doc(hidden)]
pub use paste;

/// A sorting algorithm that can be swapped for another at runtime and that remembers what it did
/// during its most recent run.
pub trait SortStrategy {
    /// Human readable label, also used for lookup by [`Strategy::from_label`].
    fn label(&self) -> &'static str;

    fn sort_by<T, F>(&mut self, v: &mut [T], compare: F) -> &SortReport
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort<T>(&mut self, v: &mut [T]) -> &SortReport
    where
        T: Ord,
    {
        self.sort_by(v, T::cmp)
    }

    /// Report of the most recently completed sort, `None` if nothing has been sorted yet.
    fn last_report(&self) -> Option<&SortReport>;

    /// Textual sort information of the most recent run. Empty before the first sort.
    fn sort_info(&self) -> String {
        self.last_report()
            .map(|report| report.to_string())
            .unwrap_or_default()
    }
}

/// Generates the stateful strategy type for an algorithm module.
///
/// The module must provide `fn sort_by<T, F>(v: &mut [T], compare: F) -> SortReport`.
macro_rules! sort_impl {
    ($name:ident, $label:expr) => {
        pub const LABEL: &str = $label;

        #[derive(Debug, Default, Clone)]
        pub struct $name {
            last: Option<$crate::SortReport>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::SortStrategy for $name {
            fn label(&self) -> &'static str {
                LABEL
            }

            fn sort_by<T, F>(&mut self, v: &mut [T], compare: F) -> &$crate::SortReport
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                self.last.insert(sort_by(v, compare))
            }

            fn last_report(&self) -> Option<&$crate::SortReport> {
                self.last.as_ref()
            }
        }
    };
}

pub mod error;
pub mod input;
pub mod patterns;
pub mod report;
pub mod strategies;
