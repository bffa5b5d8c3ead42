// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};

/// Month key (`YYYY-MM`) for a calendar date.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Month key for today in the local calendar.
pub fn current_month_key() -> String {
    month_key(chrono::Local::now().date_naive())
}

/// Whole days from `b` to `a`; negative when `a` is in the past relative
/// to `b`. Calendar dates carry no sub-day component, so the difference is
/// exact and needs no rounding.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

/// Finite, restartable sequence of `count` consecutive month keys ending at
/// `end` (inclusive), oldest first. Used to build fixed-width time series
/// where months with no activity still get a zero bucket.
pub fn month_range(end: &str, count: usize) -> Result<MonthRange> {
    let (year, month) = split_month_key(end)?;
    let mut y = year;
    let mut m = month as i32;
    // Walk back count-1 months to find the start.
    for _ in 1..count {
        m -= 1;
        if m == 0 {
            m = 12;
            y -= 1;
        }
    }
    Ok(MonthRange {
        year: y,
        month: m as u32,
        remaining: count,
    })
}

#[derive(Debug, Clone)]
pub struct MonthRange {
    year: i32,
    month: u32,
    remaining: usize,
}

impl Iterator for MonthRange {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        let key = format!("{:04}-{:02}", self.year, self.month);
        self.remaining -= 1;
        self.month += 1;
        if self.month > 12 {
            self.month = 1;
            self.year += 1;
        }
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MonthRange {}

fn split_month_key(s: &str) -> Result<(i32, u32)> {
    let (y, m) = s
        .split_once('-')
        .ok_or_else(|| anyhow!("Invalid month '{}', expected YYYY-MM", s))?;
    let year: i32 = y
        .parse()
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    let month: u32 = m
        .parse()
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Invalid month number {} in '{}'", month, s));
    }
    Ok((year, month))
}
