//! UTC dates without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct and a strftime subset,
//! enough to validate `DEFAULT_DATE_FORMAT` and to expand `{date:...}`
//! placeholders in URL templates.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2013-05-02").unwrap();
//! assert_eq!(dt.format("%b %d, %Y").unwrap(), "May 02, 2013");
//! ```

use anyhow::{Result, bail};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Indexed by Zeller's congruence (0 = Saturday).
const WEEKDAYS: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second) = if bytes.len() == 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// 1-based ordinal day within the year.
    fn day_of_year(self) -> u16 {
        let before: u16 = (1..self.month)
            .map(|m| u16::from(Self::days_in_month(self.year, m)))
            .sum();
        before + u16::from(self.day)
    }

    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }

    /// Format with a strftime pattern.
    ///
    /// Supported directives: `%Y %y %m %d %e %j %H %I %M %S %p %b %B %a %A %%`.
    /// A `-` flag (`%-d`) drops zero padding on numeric fields. Out-of-range
    /// fields are rejected before anything is formatted.
    pub fn format(self, pattern: &str) -> Result<String> {
        self.validate()?;
        let mut out = String::with_capacity(pattern.len() + 8);
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let mut directive = chars.next();
            let unpadded = directive == Some('-');
            if unpadded {
                directive = chars.next();
            }
            let Some(directive) = directive else {
                bail!("pattern ends with a dangling '%'");
            };

            let num = |value: u16, width: usize| {
                if unpadded {
                    value.to_string()
                } else {
                    format!("{value:0width$}")
                }
            };

            match directive {
                'Y' => out.push_str(&num(self.year, 4)),
                'y' => out.push_str(&num(self.year % 100, 2)),
                'm' => out.push_str(&num(self.month.into(), 2)),
                'd' => out.push_str(&num(self.day.into(), 2)),
                'e' => out.push_str(&format!("{:>2}", self.day)),
                'j' => out.push_str(&num(self.day_of_year(), 3)),
                'H' => out.push_str(&num(self.hour.into(), 2)),
                'I' => {
                    let hour12 = match self.hour % 12 {
                        0 => 12,
                        h => h,
                    };
                    out.push_str(&num(hour12.into(), 2));
                }
                'M' => out.push_str(&num(self.minute.into(), 2)),
                'S' => out.push_str(&num(self.second.into(), 2)),
                'p' => out.push_str(if self.hour < 12 { "AM" } else { "PM" }),
                'B' => out.push_str(self.month_name()),
                'b' => out.push_str(&self.month_name()[..3]),
                'A' => out.push_str(WEEKDAYS[self.weekday_index()]),
                'a' => out.push_str(&WEEKDAYS[self.weekday_index()][..3]),
                '%' if !unpadded => out.push('%'),
                other => {
                    let flag = if unpadded { "-" } else { "" };
                    bail!("unsupported directive '%{flag}{other}'");
                }
            }
        }

        Ok(out)
    }

    fn month_name(self) -> &'static str {
        MONTHS[usize::from(self.month - 1)]
    }
}

/// Check that a strftime pattern only uses supported directives.
pub fn check_format(pattern: &str) -> Result<()> {
    DateTimeUtc::from_ymd(2000, 1, 1).format(pattern).map(|_| ())
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2013-05-02").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2013, 5, 2));
    }

    #[test]
    fn test_parse_with_time() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateTimeUtc::parse("2013-5-2").is_none());
        assert!(DateTimeUtc::parse("2013-02-30").is_none());
        assert!(DateTimeUtc::parse("2013-05-02T10:00:00").is_none());
        assert!(DateTimeUtc::parse("not a date").is_none());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_fields() {
        assert!(DateTimeUtc::new(2024, 0, 15, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 4, 31, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }

    #[test]
    fn test_format_default_date_format() {
        let dt = DateTimeUtc::from_ymd(2013, 5, 2);
        assert_eq!(dt.format("%b %d, %Y").unwrap(), "May 02, 2013");
    }

    #[test]
    fn test_format_url_components() {
        let dt = DateTimeUtc::from_ymd(2013, 5, 2);
        assert_eq!(dt.format("%Y/%m/%d").unwrap(), "2013/05/02");
        assert_eq!(dt.format("%-m/%-d/%y").unwrap(), "5/2/13");
    }

    #[test]
    fn test_format_names() {
        // 2024-06-15 was a Saturday
        let dt = DateTimeUtc::new(2024, 6, 15, 14, 5, 9);
        assert_eq!(dt.format("%A %a").unwrap(), "Saturday Sat");
        assert_eq!(dt.format("%B %b").unwrap(), "June Jun");
        assert_eq!(dt.format("%I:%M:%S %p").unwrap(), "02:05:09 PM");
        assert_eq!(dt.format("%H%%").unwrap(), "14%");
    }

    #[test]
    fn test_format_day_of_year() {
        assert_eq!(DateTimeUtc::from_ymd(2024, 3, 1).format("%j").unwrap(), "061");
        assert_eq!(DateTimeUtc::from_ymd(2023, 3, 1).format("%j").unwrap(), "060");
        assert_eq!(DateTimeUtc::from_ymd(2023, 1, 9).format("%-j").unwrap(), "9");
    }

    #[test]
    fn test_format_padded_day() {
        assert_eq!(DateTimeUtc::from_ymd(2013, 5, 2).format("%e").unwrap(), " 2");
    }

    #[test]
    fn test_format_rejects_invalid_date() {
        assert!(DateTimeUtc::from_ymd(2013, 0, 2).format("%b").is_err());
        assert!(DateTimeUtc::from_ymd(2013, 13, 2).format("%B").is_err());
        assert!(DateTimeUtc::from_ymd(2013, 2, 30).format("%Y").is_err());
    }

    #[test]
    fn test_check_format() {
        assert!(check_format("%b %d, %Y").is_ok());
        assert!(check_format("plain text").is_ok());
        assert!(check_format("%Q").is_err());
        assert!(check_format("%Y %").is_err());
        assert!(check_format("%-%").is_err());
    }
}
