//! Process date extraction from raw folder names

use crate::error::{Error, Result};
use crate::types::MissingDatePolicy;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::fmt::Debug;
use std::sync::LazyLock;
use tracing::warn;

/// Batch folders are stamped `YYYY-MM-DDThhmmss`; only the date part is used
static DATE_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})T").expect("valid regex"));

/// Source of "today" for folders without a date stamp
pub trait Clock: Send + Sync + Debug {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock reading the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Find the first `YYYY-MM-DD` that is directly followed by `T`
pub fn find_date_stamp(path: &str) -> Option<&str> {
    DATE_STAMP
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Derive the process date for a raw folder
///
/// The first stamp in the path wins and must be a real calendar date in
/// year 1 or later.
/// Without a stamp, `policy` decides between the clock's date and an error.
pub fn extract_process_date(
    path: &str,
    clock: &dyn Clock,
    policy: MissingDatePolicy,
) -> Result<NaiveDate> {
    match find_date_stamp(path) {
        Some(stamp) => NaiveDate::parse_from_str(stamp, "%Y-%m-%d")
            .ok()
            .filter(|date| date.year() >= 1)
            .ok_or_else(|| Error::InvalidProcessDate {
                value: stamp.to_string(),
            }),
        None => match policy {
            MissingDatePolicy::Today => {
                let today = clock.today();
                warn!("No date stamp in folder '{path}', partitioning under {today}");
                Ok(today)
            }
            MissingDatePolicy::Fail => Err(Error::MissingProcessDate {
                path: path.to_string(),
            }),
        },
    }
}
