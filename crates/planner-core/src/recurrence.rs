//! Recurrence rules and next-occurrence calculation.
//!
//! A task's `repeat` field uses a tiny grammar:
//!
//! - `""` - no recurrence, the task is one-shot
//! - `"y"` - every calendar year
//! - `"d N"` - every `N` days, `1 <= N <= 400`
//!
//! Checking a rule happens in two stages. [`is_valid_rule`] only looks at
//! the shape of the string and is what gates persistence. [`RepeatRule`]
//! parsing additionally enforces the day range, so `"d 9999"` is accepted
//! by the former and refused by [`next_occurrence`].

use chrono::{Datelike, Days, NaiveDate};
use std::str::FromStr;
use thiserror::Error;

/// Largest accepted day interval.
pub const MAX_DAY_INTERVAL: u32 = 400;

/// A parsed, computable recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatRule {
    Yearly,
    EveryDays(u32),
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid repeat rule: '{0}'")]
pub struct ParseRepeatRuleError(String);

impl FromStr for RepeatRule {
    type Err = ParseRepeatRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "y" {
            return Ok(RepeatRule::Yearly);
        }

        let days = s
            .strip_prefix("d ")
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| (1..=MAX_DAY_INTERVAL).contains(n))
            .ok_or_else(|| ParseRepeatRuleError(s.to_string()))?;

        Ok(RepeatRule::EveryDays(days))
    }
}

impl RepeatRule {
    /// Returns the first step from `from` that lands strictly after `now`.
    ///
    /// At least one step is always taken, even when `from` is already in the
    /// future. `None` only when the result would leave chrono's date range.
    pub fn next_after(&self, now: NaiveDate, from: NaiveDate) -> Option<NaiveDate> {
        match *self {
            RepeatRule::EveryDays(step) => {
                let step = i64::from(step);
                let behind = (now - from).num_days();
                // Smallest k >= 1 with from + k*step > now.
                let steps = if behind < 0 { 1 } else { behind / step + 1 };
                let offset = u64::try_from(steps.checked_mul(step)?).ok()?;
                from.checked_add_days(Days::new(offset))
            }
            RepeatRule::Yearly => {
                let mut next = add_one_year(from)?;
                while next <= now {
                    next = add_one_year(next)?;
                }
                Some(next)
            }
        }
    }
}

/// Adds one calendar year. Feb 29 becomes Mar 1 when the target year has
/// no leap day.
fn add_one_year(date: NaiveDate) -> Option<NaiveDate> {
    let year = date.year().checked_add(1)?;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Syntactic check used before a rule is persisted.
///
/// The day count is only required to be an integer here; its range is
/// enforced when a date is actually computed.
pub fn is_valid_rule(rule: &str) -> bool {
    if rule.is_empty() || rule == "y" {
        return true;
    }

    let parts: Vec<&str> = rule.split(' ').collect();
    matches!(parts.as_slice(), ["d", n] if n.parse::<i64>().is_ok())
}

/// Computes the next occurrence of `rule` after `now`, starting from `from`.
///
/// Returns `None` when the rule is empty, malformed or out of range. Callers
/// must check for `None` before treating the result as a date.
pub fn next_occurrence(now: NaiveDate, from: NaiveDate, rule: &str) -> Option<NaiveDate> {
    rule.parse::<RepeatRule>().ok()?.next_after(now, from)
}
