use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Render an Excel date/time serial the way agenda sheets display it.
///
/// - serial < 1        → time only, `HH:MM AM`
/// - integral serial   → date only, `MM/DD/YYYY`
/// - anything else     → `MM/DD/YYYY HH:MM AM`
pub(crate) fn excel_serial_to_text(serial: f64) -> Option<String> {
    let dt = excel_serial_to_datetime(serial)?;

    if serial < 1.0 {
        return Some(dt.format("%I:%M %p").to_string());
    }
    if serial.fract() == 0.0 {
        return Some(dt.format("%m/%d/%Y").to_string());
    }
    Some(dt.format("%m/%d/%Y %I:%M %p").to_string())
}

fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    // round to the second; Excel stores times as fractions of a day
    let total_secs = (serial * SECONDS_PER_DAY).round() as i64;
    excel_epoch.checked_add_signed(Duration::try_seconds(total_secs)?)
}
