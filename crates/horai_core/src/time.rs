//! Civil date ↔ Julian Date (UTC) conversion.
//!
//! All instants inside the engine are Julian Dates on the UTC scale,
//! represented as `f64` days. Callers resolve named time zones or offsets
//! to UTC before any computation.

use std::fmt::{Display, Formatter};

/// A calendar date (proleptic Gregorian), resolved to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Julian Date at 00:00 UTC on this date.
    pub fn to_jd(self) -> f64 {
        civil_to_jd(self.year, self.month, self.day)
    }

    /// Date containing the given Julian Date.
    pub fn from_jd(jd_utc: f64) -> Self {
        jd_to_civil(jd_utc)
    }

    /// Date `n` whole days later.
    pub fn plus_days(self, n: i64) -> Self {
        Self::from_jd(self.to_jd() + n as f64)
    }

    /// True when the date names a real calendar day.
    pub const fn is_valid(self) -> bool {
        self.month >= 1
            && self.month <= 12
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
    }
}

/// Days in a Gregorian month; 0 for an invalid month number.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Julian Date at 00:00 UTC for a Gregorian calendar date (Meeus Ch. 7).
pub fn civil_to_jd(year: i32, month: u8, day: u8) -> f64 {
    let y = year as f64;
    let m = month as f64;
    let d = day as f64;

    let (y2, m2) = if m <= 2.0 { (y - 1.0, m + 12.0) } else { (y, m) };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + d + b - 1524.5
}

/// Gregorian calendar date containing a Julian Date (Meeus Ch. 7, inverse).
pub fn jd_to_civil(jd_utc: f64) -> CivilDate {
    let jd = jd_utc + 0.5;
    let z = jd.floor();
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor()) as u8;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u8;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    CivilDate { year, month, day }
}
