use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::server::error::AppError;

/// Request timestamp format, interpreted as UTC.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Filter date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD HH:MM` request timestamp as UTC.
///
/// # Arguments
/// - `value` - Timestamp string from the request body
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed timestamp
/// - `Err(AppError::BadRequest)` - Value does not match the expected format
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid datetime '{}', expected YYYY-MM-DD HH:MM: {}",
                value, e
            ))
        })
}

/// Parses a `YYYY-MM-DD` filter date.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid date '{}', expected YYYY-MM-DD: {}",
            value, e
        ))
    })
}

/// Converts a calendar day in the given offset into a half-open UTC range `[start, end)`.
///
/// # Arguments
/// - `date` - Calendar day
/// - `offset` - Timezone offset defining where the day starts
///
/// # Returns
/// - `Ok((start, end))` - UTC bounds of the day, `end` exactly 24 hours after `start`
/// - `Err(AppError::BadRequest)` - Date is outside the representable range
pub fn day_range_utc(
    date: NaiveDate,
    offset: FixedOffset,
) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let local_midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date '{}'", date)))?;

    let start = offset
        .from_local_datetime(&local_midnight)
        .single()
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date '{}'", date)))?
        .with_timezone(&Utc);

    Ok((start, start + Duration::days(1)))
}
