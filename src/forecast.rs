//! Forecast aggregation
//!
//! Groups the provider's flat 3-hour sample list into per-day buckets with
//! weekday and date labels. This is a one-shot transform: a new fetch re-runs
//! it on the full new sample list rather than merging into old buckets.

use chrono::TimeZone;
use thiserror::Error;

use crate::data::{DayBucket, RawSample};

/// Errors from grouping forecast samples
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Grouping was invoked on an empty sample list
    #[error("cannot group an empty sample list")]
    EmptyInput,

    /// A sample's timestamp could not be represented as a date-time
    #[error("sample timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

/// Partitions chronological samples into buckets by local calendar day.
///
/// The day boundary is the calendar date of each sample's timestamp in `tz`,
/// not a fixed eight-sample window, so the first and last buckets are short
/// when the provider's window does not start at midnight. Buckets come out in
/// first-appearance order, which for chronological input is chronological.
/// Each bucket's `day_of_week` ("Mon") and `day_month` ("Sep 14") labels come
/// from its first sample.
///
/// # Arguments
/// * `samples` - forecast samples in ascending timestamp order
/// * `tz` - time zone whose calendar dates define the day boundaries
///
/// # Returns
/// * `Ok(Vec<DayBucket>)` with every input sample placed, in order
/// * `Err(AggregateError::EmptyInput)` if `samples` is empty
pub fn group_by_day<Tz: TimeZone>(
    samples: Vec<RawSample>,
    tz: &Tz,
) -> Result<Vec<DayBucket>, AggregateError> {
    if samples.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    // (local date, local date-time of first sample, samples)
    let mut grouped: Vec<(chrono::NaiveDate, chrono::NaiveDateTime, Vec<RawSample>)> = Vec::new();

    for sample in samples {
        let local = tz
            .timestamp_opt(sample.dt, 0)
            .single()
            .ok_or(AggregateError::TimestampOutOfRange(sample.dt))?
            .naive_local();
        let date = local.date();

        match grouped.iter_mut().find(|(day, _, _)| *day == date) {
            Some((_, _, bucket)) => bucket.push(sample),
            None => grouped.push((date, local, vec![sample])),
        }
    }

    Ok(grouped
        .into_iter()
        .map(|(_, first, samples)| DayBucket {
            day_of_week: first.format("%a").to_string(),
            day_month: first.format("%b %-d").to_string(),
            samples,
        })
        .collect())
}
