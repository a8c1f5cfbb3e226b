use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// how a partly elapsed month is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// any day past a month boundary starts a new full month
    #[default]
    RoundUp,
    /// a month counts only once it is fully over
    Floor,
}

/// whole calendar months between `start` and `now`, clamped to `minimum`
///
/// Months are counted by calendar arithmetic, not by day counts. Under
/// `Floor` the running month is dropped while `now.day < start.day`; under
/// `RoundUp` it is added as soon as `now.day > start.day`. The two differ by
/// exactly one month whenever the day of month differs.
///
/// `now` before `start` yields `minimum`; callers reject future starts first.
pub fn months_elapsed(
    start: CalendarDate,
    now: CalendarDate,
    policy: RoundingPolicy,
    minimum: u32,
) -> u32 {
    let mut months = (now.year() as i64 - start.year() as i64) * 12
        + (now.month() as i64 - start.month() as i64);

    match policy {
        RoundingPolicy::Floor => {
            if now.day() < start.day() {
                months -= 1;
            }
        }
        RoundingPolicy::RoundUp => {
            if now.day() > start.day() {
                months += 1;
            }
        }
    }

    let months = u32::try_from(months.max(0)).unwrap_or(u32::MAX);
    months.max(minimum)
}
