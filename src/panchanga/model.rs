use crate::error::{PanchangaError, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A civil date and time of day as typed by the user.
///
/// Years are kept as plain integers so historical dates (year 0 and negative
/// years) survive parsing even when they fall outside what chrono can format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Moment {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    pub fn with_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    /// Parse `DD/MM/YYYY HH:MM:SS`, falling back to a manual numeric parse of
    /// `D/M/Y[ H:M:S]` for years the strict format rejects.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(Self::from(dt));
        }
        Self::parse_numeric(trimmed).ok_or_else(|| PanchangaError::Date(input.to_string()))
    }

    fn parse_numeric(input: &str) -> Option<Self> {
        let (date_part, time_part) = match input.split_once(char::is_whitespace) {
            Some((d, t)) => (d, Some(t.trim())),
            None => (input, None),
        };

        let mut fields = date_part.split('/');
        let day: u32 = fields.next()?.trim().parse().ok()?;
        let month: u32 = fields.next()?.trim().parse().ok()?;
        let year: i32 = fields.next()?.trim().parse().ok()?;
        if fields.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }

        let mut moment = Self::new(year, month, day);
        if let Some(time) = time_part {
            let mut hms = time.split(':').map(|p| p.trim().parse::<u32>());
            let hour = hms.next()?.ok()?;
            let minute = hms.next().unwrap_or(Ok(0)).ok()?;
            let second = hms.next().unwrap_or(Ok(0)).ok()?;
            if hour > 23 || minute > 59 || second > 59 {
                return None;
            }
            moment = moment.with_time(hour, minute, second);
        }
        Some(moment)
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Fraction of the day elapsed, in hours.
    pub fn hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt.year(), dt.month(), dt.day()).with_time(dt.hour(), dt.minute(), dt.second())
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute, self.second
        )
    }
}

/// A resolved observer location.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    /// UTC offset in hours, valid for the date the place was resolved for.
    pub tz_offset: f64,
    pub timezone: String,
}

/// Hours, minutes and seconds of a (possibly >24h) time span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Hms {
    /// Split decimal hours (or degrees) into whole units, rounding seconds.
    pub fn from_hours(value: f64) -> Self {
        let total = (value * 3600.0).round() as i64;
        let sign = if total < 0 { -1 } else { 1 };
        let total = total.abs();
        Self {
            hours: sign * (total / 3600),
            minutes: sign * ((total % 3600) / 60),
            seconds: sign * (total % 60),
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours < 0 || self.minutes < 0 || self.seconds < 0 {
            write!(
                f,
                "-{:02}:{:02}:{:02}",
                self.hours.abs(),
                self.minutes.abs(),
                self.seconds.abs()
            )
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        }
    }
}
