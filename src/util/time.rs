use chrono::{DateTime, Utc};

/// Value for the `created` search qualifier matching runs created after the
/// cutoff's calendar day. GitHub only accepts whole dates here.
pub fn created_after(cutoff: DateTime<Utc>) -> String {
    format!(">{}", cutoff.date_naive().format("%Y-%m-%d"))
}

/// Whole minutes from `start` to `end`, truncated toward zero.
pub fn whole_minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes()
}
