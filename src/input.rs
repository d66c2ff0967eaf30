//! Turning user text or a random generator into a list of numbers ready for sorting.

use rand::Rng;

use crate::error::InputError;

/// Parses whitespace separated integers.
///
/// Input that is empty after trimming is rejected, as is any token that isn't a valid `i32`. The
/// first offending token is reported with its zero based position.
pub fn parse_numbers(text: &str) -> Result<Vec<i32>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i32>().map_err(|_| InputError::InvalidNumber {
                token: token.to_owned(),
                position,
            })
        })
        .collect()
}

/// Renders numbers space separated, the same format [`parse_numbers`] accepts.
pub fn format_numbers(v: &[i32]) -> String {
    v.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bounds for [`random_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomListConfig {
    /// Exclusive upper bound of the list length.
    pub max_len: usize,
    /// Exclusive upper bound of each value, values start at 0.
    pub value_bound: i32,
}

impl RandomListConfig {
    pub const DEFAULT_MAX_LEN: usize = 10_000;
    pub const DEFAULT_VALUE_BOUND: i32 = 10_000;
    /// Largest accepted `max_len`. Both sorts are quadratic.
    pub const MAX_LEN_LIMIT: usize = 100_000;

    pub fn validate(&self) -> Result<(), InputError> {
        if self.max_len == 0 {
            return Err(InputError::InvalidConfig("max_len must be at least 1"));
        }
        if self.max_len > Self::MAX_LEN_LIMIT {
            return Err(InputError::InvalidConfig("max_len must be at most 100000"));
        }
        if self.value_bound <= 0 {
            return Err(InputError::InvalidConfig("value_bound must be at least 1"));
        }
        Ok(())
    }
}

impl Default for RandomListConfig {
    fn default() -> Self {
        Self {
            max_len: Self::DEFAULT_MAX_LEN,
            value_bound: Self::DEFAULT_VALUE_BOUND,
        }
    }
}

/// Generates a list whose length is drawn from `0..max_len` and whose values are drawn from
/// `0..value_bound`. The list may be empty.
pub fn random_list<R: Rng + ?Sized>(
    config: &RandomListConfig,
    rng: &mut R,
) -> Result<Vec<i32>, InputError> {
    config.validate()?;

    let len = rng.gen_range(0..config.max_len);
    let list = (0..len)
        .map(|_| rng.gen_range(0..config.value_bound))
        .collect::<Vec<_>>();

    log::debug!("generated random list of {len} values");
    Ok(list)
}
