//! Parsing and serialization of the temporal value representations,
//! with partial precision.
//!
//! - _Date_ (DA): `YYYYMMDD`, `YYYYMM` or `YYYY`.
//!   Dates in the format of the old ACR-NEMA standard
//!   (`YYYY.MM.DD`, `YYYY.MM`) are accepted on request,
//!   and are always written back in the standard form.
//! - _Time_ (TM): `HHMMSS.FFFFFF`, where any number of trailing components
//!   may be omitted, down to `HH`,
//!   and the fraction of a second may have 1 to 6 digits.
//! - _Date Time_ (DT): `YYYYMMDDHHMMSS.FFFFFF&ZZXX`,
//!   where trailing components may be omitted down to `YYYY`,
//!   and the UTC offset suffix `&ZZXX` is optional.
//!
//! Each value keeps the [`Precision`] at which it was written.
//! Components which were not present take their minimum value
//! in the underlying [`chrono`] value,
//! but they are not written back.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The kind of temporal value being parsed or built.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// A date (DA)
    Date,
    /// A time (TM)
    Time,
    /// A combined date-time (DT)
    DateTime,
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
            TemporalKind::DateTime => "datetime",
        })
    }
}

/// Represents the components of date, time and date-time values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DateComponent {
    /// The year, 4 digits
    Year,
    /// The month of the year, 1 to 12
    Month,
    /// The day of the month
    Day,
    /// The hour of the day, 0 to 23
    Hour,
    /// The minute, 0 to 59
    Minute,
    /// The second, 0 to 59
    Second,
    /// The fraction of a second in microseconds
    Fraction,
    /// The offset from UTC in minutes
    UtcOffset,
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The text does not follow the grammar of its value representation,
    /// or one of its components is out of range.
    #[snafu(display("could not parse {} value '{}'", kind, value))]
    ParseTemporal {
        kind: TemporalKind,
        value: String,
        backtrace: Backtrace,
    },
    #[snafu(display("{:?} has invalid value {}, must be in {:?}", component, value, range))]
    InvalidComponent {
        component: DateComponent,
        value: u32,
        range: RangeInclusive<u32>,
        backtrace: Backtrace,
    },
    #[snafu(display("{} is not a valid date", date))]
    InvalidDate { date: String, backtrace: Backtrace },
    #[snafu(display("precision {} is not applicable to a {} value", precision, kind))]
    InvalidPrecision {
        kind: TemporalKind,
        precision: Precision,
        backtrace: Backtrace,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// The precision of a temporal value:
/// the last component which was effectively present.
///
/// Precisions are ordered from the coarsest to the finest,
/// and a fraction of a second keeps the number of digits written (1 to 6).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    /// `YYYY`
    Year,
    /// `YYYYMM`
    Month,
    /// `YYYYMMDD`
    Day,
    /// `HH`
    Hour,
    /// `HHMM`
    Minute,
    /// `HHMMSS`
    Second,
    /// `HHMMSS.F` to `HHMMSS.FFFFFF`, holding the number of fraction digits
    Fraction(u8),
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Precision::Year => f.write_str("Year"),
            Precision::Month => f.write_str("Month"),
            Precision::Day => f.write_str("Day"),
            Precision::Hour => f.write_str("Hour"),
            Precision::Minute => f.write_str("Minute"),
            Precision::Second => f.write_str("Second"),
            Precision::Fraction(n) => write!(f, "Fraction({})", n),
        }
    }
}

impl Precision {
    fn applies_to_date(self) -> bool {
        self <= Precision::Day
    }

    fn applies_to_time(self) -> bool {
        match self {
            Precision::Hour | Precision::Minute | Precision::Second => true,
            Precision::Fraction(n) => (1..=6).contains(&n),
            _ => false,
        }
    }

    fn applies_to_datetime(self) -> bool {
        self.applies_to_date() || self.applies_to_time()
    }
}

/// Fail with a detailed `InvalidComponent` error
/// if a date or time component is out of range.
pub fn check_component(component: DateComponent, value: u32) -> Result<()> {
    let range = match component {
        DateComponent::Year => 0..=9_999,
        DateComponent::Month => 1..=12,
        DateComponent::Day => 1..=31,
        DateComponent::Hour => 0..=23,
        DateComponent::Minute => 0..=59,
        DateComponent::Second => 0..=59,
        DateComponent::Fraction => 0..=999_999,
        DateComponent::UtcOffset => 0..=(14 * 60),
    };

    ensure!(
        range.contains(&value),
        InvalidComponentSnafu {
            component,
            value,
            range,
        }
    );
    Ok(())
}

fn naive_date(year: u32, month: u32, day: u32) -> Result<NaiveDate> {
    check_component(DateComponent::Year, year)?;
    check_component(DateComponent::Month, month)?;
    check_component(DateComponent::Day, day)?;
    NaiveDate::from_ymd_opt(year as i32, month, day).context(InvalidDateSnafu {
        date: format!("{:04}-{:02}-{:02}", year, month, day),
    })
}

fn naive_time(hour: u32, minute: u32, second: u32, micro: u32) -> Result<NaiveTime> {
    check_component(DateComponent::Hour, hour)?;
    check_component(DateComponent::Minute, minute)?;
    check_component(DateComponent::Second, second)?;
    check_component(DateComponent::Fraction, micro)?;
    // all components were checked, chrono accepts any combination of them
    NaiveTime::from_hms_micro_opt(hour, minute, second, micro).context(InvalidComponentSnafu {
        component: DateComponent::Fraction,
        value: micro,
        range: 0..=999_999_u32,
    })
}

/// A DICOM date (DA) value with partial precision.
///
/// # Example
///
/// ```
/// # use dicom_value_core::value::{DicomDate, Precision};
/// let date = DicomDate::parse("202003", false)?;
/// assert_eq!(date.precision(), Precision::Month);
/// assert_eq!(date.to_dicom_string(), "202003");
/// assert_eq!(date.to_string(), "2020-03");
/// # Ok::<_, dicom_value_core::value::temporal::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DicomDate {
    date: NaiveDate,
    precision: Precision,
}

impl DicomDate {
    /// Construct a date with year precision (`YYYY`).
    pub fn from_y(year: u16) -> Result<DicomDate> {
        Ok(DicomDate {
            date: naive_date(year.into(), 1, 1)?,
            precision: Precision::Year,
        })
    }

    /// Construct a date with month precision (`YYYYMM`).
    pub fn from_ym(year: u16, month: u8) -> Result<DicomDate> {
        Ok(DicomDate {
            date: naive_date(year.into(), month.into(), 1)?,
            precision: Precision::Month,
        })
    }

    /// Construct a date with day precision (`YYYYMMDD`).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<DicomDate> {
        Ok(DicomDate {
            date: naive_date(year.into(), month.into(), day.into())?,
            precision: Precision::Day,
        })
    }

    /// Construct a date from a calendar date and a precision.
    ///
    /// Components finer than the precision are reset to their minimum.
    pub fn from_naive_date(date: NaiveDate, precision: Precision) -> Result<DicomDate> {
        ensure!(
            precision.applies_to_date(),
            InvalidPrecisionSnafu {
                kind: TemporalKind::Date,
                precision,
            }
        );
        check_component(DateComponent::Year, date.year().max(0) as u32)?;
        let (month, day) = match precision {
            Precision::Year => (1, 1),
            Precision::Month => (date.month(), 1),
            _ => (date.month(), date.day()),
        };
        Ok(DicomDate {
            date: naive_date(date.year() as u32, month, day)?,
            precision,
        })
    }

    /// Parse a date from its textual DICOM representation.
    ///
    /// When `allow_legacy` is true,
    /// the dot-delimited form of the ACR-NEMA standard is also accepted.
    pub fn parse(text: &str, allow_legacy: bool) -> Result<DicomDate> {
        parse_date(text, allow_legacy)
    }

    /// Retrieve the calendar date,
    /// where missing components take their minimum value.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Retrieve the precision of this value.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Retrieve the year.
    pub fn year(&self) -> u16 {
        self.date.year() as u16
    }

    /// Retrieve the month, if present.
    pub fn month(&self) -> Option<u8> {
        (self.precision >= Precision::Month).then(|| self.date.month() as u8)
    }

    /// Retrieve the day of the month, if present.
    pub fn day(&self) -> Option<u8> {
        (self.precision >= Precision::Day).then(|| self.date.day() as u8)
    }

    /// Whether all components of the date are present.
    pub fn is_precise(&self) -> bool {
        self.precision == Precision::Day
    }

    /// Serialize into the standard DICOM form, at the recorded precision.
    pub fn to_dicom_string(&self) -> String {
        date_digits(self.date, self.precision)
    }
}

fn date_digits(date: NaiveDate, precision: Precision) -> String {
    let mut out = format!("{:04}", date.year());
    if precision >= Precision::Month {
        out.push_str(&format!("{:02}", date.month()));
    }
    if precision >= Precision::Day {
        out.push_str(&format!("{:02}", date.day()));
    }
    out
}

fn time_digits(time: NaiveTime, precision: Precision) -> String {
    let mut out = format!("{:02}", time.hour());
    if precision >= Precision::Minute {
        out.push_str(&format!("{:02}", time.minute()));
    }
    if precision >= Precision::Second {
        out.push_str(&format!("{:02}", time.second()));
    }
    if let Precision::Fraction(digits) = precision {
        let micro = format!("{:06}", time.nanosecond() / 1_000);
        out.push('.');
        out.push_str(&micro[..usize::from(digits.clamp(1, 6))]);
    }
    out
}

impl fmt::Display for DicomDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}", self.date.year())?;
        if self.precision >= Precision::Month {
            write!(f, "-{:02}", self.date.month())?;
        }
        if self.precision >= Precision::Day {
            write!(f, "-{:02}", self.date.day())?;
        }
        Ok(())
    }
}

impl FromStr for DicomDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_date(s, false)
    }
}

/// A DICOM time (TM) value with partial precision.
///
/// # Example
///
/// ```
/// # use dicom_value_core::value::{DicomTime, Precision};
/// let time: DicomTime = "103015.25".parse()?;
/// assert_eq!(time.precision(), Precision::Fraction(2));
/// assert_eq!(time.to_dicom_string(), "103015.25");
/// assert_eq!(time.to_string(), "10:30:15.25");
/// # Ok::<_, dicom_value_core::value::temporal::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DicomTime {
    time: NaiveTime,
    precision: Precision,
}

impl DicomTime {
    /// Construct a time with hour precision (`HH`).
    pub fn from_h(hour: u8) -> Result<DicomTime> {
        Ok(DicomTime {
            time: naive_time(hour.into(), 0, 0, 0)?,
            precision: Precision::Hour,
        })
    }

    /// Construct a time with minute precision (`HHMM`).
    pub fn from_hm(hour: u8, minute: u8) -> Result<DicomTime> {
        Ok(DicomTime {
            time: naive_time(hour.into(), minute.into(), 0, 0)?,
            precision: Precision::Minute,
        })
    }

    /// Construct a time with second precision (`HHMMSS`).
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<DicomTime> {
        Ok(DicomTime {
            time: naive_time(hour.into(), minute.into(), second.into(), 0)?,
            precision: Precision::Second,
        })
    }

    /// Construct a time with microsecond precision (`HHMMSS.FFFFFF`).
    pub fn from_hms_micro(hour: u8, minute: u8, second: u8, micro: u32) -> Result<DicomTime> {
        Ok(DicomTime {
            time: naive_time(hour.into(), minute.into(), second.into(), micro)?,
            precision: Precision::Fraction(6),
        })
    }

    /// Construct a time from a clock time and a precision.
    ///
    /// Components finer than the precision are reset to their minimum.
    pub fn from_naive_time(time: NaiveTime, precision: Precision) -> Result<DicomTime> {
        ensure!(
            precision.applies_to_time(),
            InvalidPrecisionSnafu {
                kind: TemporalKind::Time,
                precision,
            }
        );
        Ok(DicomTime {
            time: truncate_time(time, precision)?,
            precision,
        })
    }

    /// Parse a time from its textual DICOM representation.
    pub fn parse(text: &str) -> Result<DicomTime> {
        parse_time(text)
    }

    /// Retrieve the clock time,
    /// where missing components take their minimum value.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Retrieve the precision of this value.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Whether all components of the time are present,
    /// down to the microsecond.
    pub fn is_precise(&self) -> bool {
        self.precision == Precision::Fraction(6)
    }

    /// Serialize into the standard DICOM form, at the recorded precision.
    pub fn to_dicom_string(&self) -> String {
        time_digits(self.time, self.precision)
    }
}

fn truncate_time(time: NaiveTime, precision: Precision) -> Result<NaiveTime> {
    let micro = match precision {
        Precision::Fraction(digits) => {
            let scale = 10_u32.pow(6 - u32::from(digits.clamp(1, 6)));
            // leap seconds are folded into the last regular second
            (time.nanosecond() / 1_000).min(999_999) / scale * scale
        }
        _ => 0,
    };
    let minute = if precision >= Precision::Minute { time.minute() } else { 0 };
    let second = if precision >= Precision::Second { time.second() } else { 0 };
    naive_time(time.hour(), minute, second, micro)
}

impl fmt::Display for DicomTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}", self.time.hour())?;
        if self.precision >= Precision::Minute {
            write!(f, ":{:02}", self.time.minute())?;
        }
        if self.precision >= Precision::Second {
            write!(f, ":{:02}", self.time.second())?;
        }
        if let Precision::Fraction(digits) = self.precision {
            let micro = format!("{:06}", self.time.nanosecond() / 1_000);
            write!(f, ".{}", &micro[..usize::from(digits.clamp(1, 6))])?;
        }
        Ok(())
    }
}

impl FromStr for DicomTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_time(s)
    }
}

/// A DICOM date-time (DT) value with partial precision
/// and an optional offset from UTC.
///
/// # Example
///
/// ```
/// # use dicom_value_core::value::{DicomDateTime, Precision};
/// let dt: DicomDateTime = "20200304103015+0100".parse()?;
/// assert_eq!(dt.precision(), Precision::Second);
/// assert_eq!(dt.offset().map(|o| o.local_minus_utc()), Some(3600));
/// assert_eq!(dt.to_dicom_string(), "20200304103015+0100");
/// # Ok::<_, dicom_value_core::value::temporal::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DicomDateTime {
    date: NaiveDate,
    time: NaiveTime,
    offset: Option<FixedOffset>,
    precision: Precision,
}

impl DicomDateTime {
    /// Construct a date-time holding only a date,
    /// at the date's precision.
    pub fn from_date(date: DicomDate) -> DicomDateTime {
        DicomDateTime {
            date: date.date,
            time: NaiveTime::MIN,
            offset: None,
            precision: date.precision,
        }
    }

    /// Construct a date-time from a full date and a time,
    /// at the time's precision.
    ///
    /// Fails if the date does not have day precision,
    /// since components cannot be skipped.
    pub fn from_date_and_time(date: DicomDate, time: DicomTime) -> Result<DicomDateTime> {
        ensure!(
            date.is_precise(),
            InvalidPrecisionSnafu {
                kind: TemporalKind::DateTime,
                precision: date.precision,
            }
        );
        Ok(DicomDateTime {
            date: date.date,
            time: time.time,
            offset: None,
            precision: time.precision,
        })
    }

    /// Construct a date-time from a calendar date-time and a precision.
    ///
    /// Components finer than the precision are reset to their minimum.
    pub fn from_naive_datetime(
        datetime: NaiveDateTime,
        precision: Precision,
    ) -> Result<DicomDateTime> {
        ensure!(
            precision.applies_to_datetime(),
            InvalidPrecisionSnafu {
                kind: TemporalKind::DateTime,
                precision,
            }
        );
        if precision.applies_to_date() {
            let date = DicomDate::from_naive_date(datetime.date(), precision)?;
            return Ok(DicomDateTime::from_date(date));
        }
        let date = DicomDate::from_naive_date(datetime.date(), Precision::Day)?;
        let time = DicomTime::from_naive_time(datetime.time(), precision)?;
        DicomDateTime::from_date_and_time(date, time)
    }

    /// Return a copy of this value with the given offset from UTC.
    pub fn with_offset(self, offset: FixedOffset) -> DicomDateTime {
        DicomDateTime {
            offset: Some(offset),
            ..self
        }
    }

    /// Return a copy of this value without an offset from UTC.
    pub fn without_offset(self) -> DicomDateTime {
        DicomDateTime {
            offset: None,
            ..self
        }
    }

    /// Parse a date-time from its textual DICOM representation.
    pub fn parse(text: &str) -> Result<DicomDateTime> {
        parse_datetime(text)
    }

    /// Retrieve the calendar date,
    /// where missing components take their minimum value.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Retrieve the clock time,
    /// where missing components take their minimum value.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Retrieve the calendar date and time as a single value.
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Retrieve the offset from UTC, if it was specified.
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// Retrieve the precision of this value.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Serialize into the standard DICOM form, at the recorded precision.
    pub fn to_dicom_string(&self) -> String {
        let mut out = date_digits(self.date, self.precision);
        if self.precision >= Precision::Hour {
            out.push_str(&time_digits(self.time, self.precision));
        }
        if let Some(offset) = self.offset {
            out.push_str(&format_offset(offset, ""));
        }
        out
    }
}

fn format_offset(offset: FixedOffset, delimiter: &str) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{}{:02}{}{:02}", sign, minutes / 60, delimiter, minutes % 60)
}

impl fmt::Display for DicomDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let date = DicomDate {
            date: self.date,
            precision: self.precision.min(Precision::Day),
        };
        write!(f, "{}", date)?;
        if self.precision >= Precision::Hour {
            let time = DicomTime {
                time: self.time,
                precision: self.precision,
            };
            write!(f, " {}", time)?;
        }
        if let Some(offset) = self.offset {
            write!(f, " {}", format_offset(offset, ":"))?;
        }
        Ok(())
    }
}

impl FromStr for DicomDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_datetime(s)
    }
}

/// Read an unsigned decimal number made exclusively of ASCII digits.
fn read_number(buf: &[u8]) -> Option<u32> {
    if buf.is_empty() || buf.len() > 9 || !buf.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        buf.iter()
            .fold(0_u32, |acc, d| acc * 10 + u32::from(d - b'0')),
    )
}

/// Date components read from text: year, month and day,
/// where absent components are `None`.
type DateParts = (u32, Option<u32>, Option<u32>);

fn split_strict_date(buf: &[u8]) -> Option<DateParts> {
    match buf.len() {
        4 => Some((read_number(buf)?, None, None)),
        6 => Some((read_number(&buf[..4])?, Some(read_number(&buf[4..])?), None)),
        8 => Some((
            read_number(&buf[..4])?,
            Some(read_number(&buf[4..6])?),
            Some(read_number(&buf[6..])?),
        )),
        _ => None,
    }
}

fn split_legacy_date(text: &str) -> Option<DateParts> {
    let mut parts = text.split('.');
    let year = parts.next().filter(|p| p.len() == 4)?;
    let month = parts.next().filter(|p| p.len() == 2)?;
    let day = match parts.next() {
        Some(day) if day.len() == 2 => Some(day),
        Some(_) => return None,
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((
        read_number(year.as_bytes())?,
        Some(read_number(month.as_bytes())?),
        match day {
            Some(day) => Some(read_number(day.as_bytes())?),
            None => None,
        },
    ))
}

fn build_date((year, month, day): DateParts) -> Option<DicomDate> {
    let precision = match (month, day) {
        (None, _) => Precision::Year,
        (Some(_), None) => Precision::Month,
        (Some(_), Some(_)) => Precision::Day,
    };
    let date = naive_date(year, month.unwrap_or(1), day.unwrap_or(1)).ok()?;
    Some(DicomDate { date, precision })
}

/// Parse a DICOM date (DA) value.
///
/// The strict forms `YYYYMMDD`, `YYYYMM` and `YYYY` are always accepted.
/// If `allow_legacy` is true,
/// the ACR-NEMA forms `YYYY.MM.DD` and `YYYY.MM` are accepted as well.
/// The precision of the output reflects the components present.
pub fn parse_date(text: &str, allow_legacy: bool) -> Result<DicomDate> {
    let parts = if text.contains('.') && allow_legacy {
        let parts = split_legacy_date(text);
        if parts.is_some() {
            tracing::warn!("Accepting ACR-NEMA style date value '{}'", text);
        }
        parts
    } else {
        split_strict_date(text.as_bytes())
    };

    parts.and_then(build_date).context(ParseTemporalSnafu {
        kind: TemporalKind::Date,
        value: text,
    })
}

/// Time components read from text: hour, minute, second,
/// and the fraction of a second with its number of digits.
#[derive(Debug, Default)]
struct TimeParts {
    hour: u32,
    minute: Option<u32>,
    second: Option<u32>,
    fraction: Option<(u32, u8)>,
}

impl TimeParts {
    fn precision(&self) -> Precision {
        match self {
            TimeParts {
                fraction: Some((_, digits)),
                ..
            } => Precision::Fraction(*digits),
            TimeParts {
                second: Some(_), ..
            } => Precision::Second,
            TimeParts {
                minute: Some(_), ..
            } => Precision::Minute,
            _ => Precision::Hour,
        }
    }

    fn to_naive_time(&self) -> Option<NaiveTime> {
        let micro = match self.fraction {
            Some((value, digits)) => value * 10_u32.pow(6 - u32::from(digits)),
            None => 0,
        };
        naive_time(
            self.hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            micro,
        )
        .ok()
    }
}

fn split_time(buf: &[u8]) -> Option<TimeParts> {
    let mut parts = TimeParts::default();
    match buf.len() {
        2 => {
            parts.hour = read_number(buf)?;
        }
        4 => {
            parts.hour = read_number(&buf[..2])?;
            parts.minute = Some(read_number(&buf[2..])?);
        }
        len if len >= 6 => {
            parts.hour = read_number(&buf[..2])?;
            parts.minute = Some(read_number(&buf[2..4])?);
            parts.second = Some(read_number(&buf[4..6])?);
            let rest = &buf[6..];
            if !rest.is_empty() {
                if rest[0] != b'.' || !(2..=7).contains(&rest.len()) {
                    return None;
                }
                let digits = &rest[1..];
                parts.fraction = Some((read_number(digits)?, digits.len() as u8));
            }
        }
        _ => return None,
    }
    Some(parts)
}

/// Parse a DICOM time (TM) value.
///
/// The accepted forms are `HH`, `HHMM`, `HHMMSS`,
/// and `HHMMSS.F` through `HHMMSS.FFFFFF`.
pub fn parse_time(text: &str) -> Result<DicomTime> {
    split_time(text.as_bytes())
        .and_then(|parts| {
            Some(DicomTime {
                time: parts.to_naive_time()?,
                precision: parts.precision(),
            })
        })
        .context(ParseTemporalSnafu {
            kind: TemporalKind::Time,
            value: text,
        })
}

fn split_offset(text: &str) -> Option<(&str, Option<FixedOffset>)> {
    let Some(i) = text.find(|c: char| c == '+' || c == '-') else {
        return Some((text, None));
    };
    let (body, suffix) = text.split_at(i);
    let digits = &suffix.as_bytes()[1..];
    if digits.len() != 4 {
        return None;
    }
    let hours = read_number(&digits[..2])?;
    let minutes = read_number(&digits[2..])?;
    if minutes > 59 {
        return None;
    }
    let total = hours * 60 + minutes;
    check_component(DateComponent::UtcOffset, total).ok()?;
    let seconds = total as i32 * 60;
    let seconds = if suffix.starts_with('-') { -seconds } else { seconds };
    Some((body, Some(FixedOffset::east_opt(seconds)?)))
}

fn build_datetime(text: &str) -> Option<DicomDateTime> {
    let (body, offset) = split_offset(text)?;
    let buf = body.as_bytes();
    if buf.len() < 4 {
        return None;
    }
    let (date_buf, time_buf) = buf.split_at(buf.len().min(8));
    let date = build_date(split_strict_date(date_buf)?)?;

    if time_buf.is_empty() {
        return Some(DicomDateTime {
            offset,
            ..DicomDateTime::from_date(date)
        });
    }
    // time components require a complete date
    if !date.is_precise() {
        return None;
    }
    let parts = split_time(time_buf)?;
    Some(DicomDateTime {
        date: date.date,
        time: parts.to_naive_time()?,
        offset,
        precision: parts.precision(),
    })
}

/// Parse a DICOM date-time (DT) value.
///
/// The accepted form is `YYYYMMDDHHMMSS.FFFFFF&ZZXX`,
/// where trailing date and time components may be omitted down to `YYYY`,
/// and the UTC offset suffix `&ZZXX` (`&` being `+` or `-`) is optional.
pub fn parse_datetime(text: &str) -> Result<DicomDateTime> {
    build_datetime(text).context(ParseTemporalSnafu {
        kind: TemporalKind::DateTime,
        value: text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("20200304", 2020, 3, 4, Precision::Day)]
    #[case("202003", 2020, 3, 1, Precision::Month)]
    #[case("2020", 2020, 1, 1, Precision::Year)]
    #[case("19441231", 1944, 12, 31, Precision::Day)]
    #[case("00010101", 1, 1, 1, Precision::Day)]
    fn parse_strict_date(
        #[case] text: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] precision: Precision,
    ) {
        for allow_legacy in [false, true] {
            let date = parse_date(text, allow_legacy).unwrap();
            assert_eq!(date.date(), NaiveDate::from_ymd_opt(year, month, day).unwrap());
            assert_eq!(date.precision(), precision);
            assert_eq!(date.to_dicom_string(), text);
        }
    }

    #[rstest]
    #[case("2020.03.04", "20200304", Precision::Day)]
    #[case("2020.03", "202003", Precision::Month)]
    fn parse_legacy_date(#[case] text: &str, #[case] strict: &str, #[case] precision: Precision) {
        let date = parse_date(text, true).unwrap();
        assert_eq!(date.precision(), precision);
        assert_eq!(date, parse_date(strict, false).unwrap());
        // legacy values are normalized into the standard form
        assert_eq!(date.to_dicom_string(), strict);

        assert!(matches!(
            parse_date(text, false),
            Err(Error::ParseTemporal {
                kind: TemporalKind::Date,
                ..
            })
        ));
    }

    #[rstest]
    #[case("101002034")]
    #[case("1010023")]
    #[case("10102")]
    #[case("101")]
    #[case("")]
    #[case("2020-03-04")]
    #[case("2020O304")]
    #[case("20201304")]
    #[case("20200230")]
    #[case("20200100")]
    #[case("+2020")]
    #[case("2020.3.4")]
    #[case("2020.03.04.05")]
    #[case("2020.03.")]
    fn bad_dates_fail_to_parse(#[case] text: &str) {
        for allow_legacy in [false, true] {
            match parse_date(text, allow_legacy) {
                Err(Error::ParseTemporal { kind, value, .. }) => {
                    assert_eq!(kind, TemporalKind::Date);
                    assert_eq!(value, text);
                }
                other => panic!("unexpected outcome for {:?}: {:?}", text, other),
            }
        }
    }

    #[test]
    fn date_serializes_at_precision() {
        let date = NaiveDate::from_ymd_opt(1010, 2, 3).unwrap();
        let cases = [
            (Precision::Day, "10100203", "1010-02-03"),
            (Precision::Month, "101002", "1010-02"),
            (Precision::Year, "1010", "1010"),
        ];
        for (precision, dicom, human) in cases {
            let value = DicomDate::from_naive_date(date, precision).unwrap();
            assert_eq!(value.to_dicom_string(), dicom);
            assert_eq!(value.to_string(), human);
        }

        assert!(matches!(
            DicomDate::from_naive_date(date, Precision::Hour),
            Err(Error::InvalidPrecision { .. })
        ));
    }

    #[test]
    fn date_constructors_check_components() {
        assert_eq!(DicomDate::from_ymd(1944, 2, 29).unwrap().day(), Some(29));
        assert_eq!(DicomDate::from_ym(1944, 2).unwrap().day(), None);
        assert!(matches!(
            DicomDate::from_ym(1944, 13),
            Err(Error::InvalidComponent {
                component: DateComponent::Month,
                value: 13,
                ..
            })
        ));
        assert!(matches!(
            DicomDate::from_ymd(1945, 2, 29),
            Err(Error::InvalidDate { .. })
        ));
        assert!(DicomDate::from_y(10_000).is_err());
    }

    #[rstest]
    #[case("10", (10, 0, 0, 0), Precision::Hour, "10")]
    #[case("1030", (10, 30, 0, 0), Precision::Minute, "10:30")]
    #[case("103015", (10, 30, 15, 0), Precision::Second, "10:30:15")]
    #[case("103015.1", (10, 30, 15, 100_000), Precision::Fraction(1), "10:30:15.1")]
    #[case("103015.25", (10, 30, 15, 250_000), Precision::Fraction(2), "10:30:15.25")]
    #[case("235959.000001", (23, 59, 59, 1), Precision::Fraction(6), "23:59:59.000001")]
    #[case("000000.123456", (0, 0, 0, 123_456), Precision::Fraction(6), "00:00:00.123456")]
    fn parse_time_roundtrip(
        #[case] text: &str,
        #[case] (h, m, s, micro): (u32, u32, u32, u32),
        #[case] precision: Precision,
        #[case] human: &str,
    ) {
        let time = parse_time(text).unwrap();
        assert_eq!(time.time(), NaiveTime::from_hms_micro_opt(h, m, s, micro).unwrap());
        assert_eq!(time.precision(), precision);
        assert_eq!(time.to_dicom_string(), text);
        assert_eq!(time.to_string(), human);
    }

    #[rstest]
    #[case("1")]
    #[case("103")]
    #[case("10301")]
    #[case("240000")]
    #[case("106000")]
    #[case("103060")]
    #[case("103015.")]
    #[case("103015.1234567")]
    #[case("103015,5")]
    #[case("10:30:15")]
    #[case("1030a5")]
    fn bad_times_fail_to_parse(#[case] text: &str) {
        assert!(matches!(
            parse_time(text),
            Err(Error::ParseTemporal {
                kind: TemporalKind::Time,
                ..
            })
        ));
    }

    #[test]
    fn time_constructors() {
        let time = DicomTime::from_hms_micro(9, 1, 1, 1_234).unwrap();
        assert_eq!(time.to_dicom_string(), "090101.001234");
        assert!(time.is_precise());

        assert!(DicomTime::from_h(24).is_err());
        assert!(DicomTime::from_hms_micro(1, 1, 1, 1_000_000).is_err());

        let naive = NaiveTime::from_hms_micro_opt(12, 34, 56, 789_012).unwrap();
        let time = DicomTime::from_naive_time(naive, Precision::Fraction(3)).unwrap();
        assert_eq!(time.to_dicom_string(), "123456.789");
        assert_eq!(
            time.time(),
            NaiveTime::from_hms_micro_opt(12, 34, 56, 789_000).unwrap()
        );
        let time = DicomTime::from_naive_time(naive, Precision::Minute).unwrap();
        assert_eq!(time.to_dicom_string(), "1234");
        assert!(DicomTime::from_naive_time(naive, Precision::Day).is_err());
        assert!(DicomTime::from_naive_time(naive, Precision::Fraction(7)).is_err());
    }

    #[rstest]
    #[case("2020", Precision::Year, None)]
    #[case("202003", Precision::Month, None)]
    #[case("20200304", Precision::Day, None)]
    #[case("2020030410", Precision::Hour, None)]
    #[case("202003041030", Precision::Minute, None)]
    #[case("20200304103015", Precision::Second, None)]
    #[case("20200304103015.123", Precision::Fraction(3), None)]
    #[case("20200304103015.123456-0500", Precision::Fraction(6), Some(-5 * 3600))]
    #[case("2020+0100", Precision::Year, Some(3600))]
    #[case("20200304+1400", Precision::Day, Some(14 * 3600))]
    fn parse_datetime_roundtrip(
        #[case] text: &str,
        #[case] precision: Precision,
        #[case] offset: Option<i32>,
    ) {
        let dt = parse_datetime(text).unwrap();
        assert_eq!(dt.precision(), precision);
        assert_eq!(dt.offset().map(|o| o.local_minus_utc()), offset);
        assert_eq!(dt.to_dicom_string(), text);
    }

    #[test]
    fn datetime_defaults_missing_components() {
        let dt = parse_datetime("202003").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
        assert_eq!(dt.time(), NaiveTime::MIN);

        let dt = parse_datetime("2020030410-0330").unwrap();
        assert_eq!(
            dt.to_naive_datetime(),
            NaiveDate::from_ymd_opt(2020, 3, 4)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        assert_eq!(dt.to_string(), "2020-03-04 10 -03:30");
    }

    #[rstest]
    #[case("")]
    #[case("202")]
    #[case("20200")]
    #[case("2020030")]
    #[case("202003041")]
    #[case("20201304")]
    #[case("2020033210")]
    #[case("2020032624")]
    #[case("20200304103015.")]
    #[case("20200304103015.1234567")]
    #[case("20200304+01")]
    #[case("20200304+1500")]
    #[case("20200304+0160")]
    #[case("20200304+01:00")]
    #[case("2020.03.04")]
    fn bad_datetimes_fail_to_parse(#[case] text: &str) {
        assert!(matches!(
            parse_datetime(text),
            Err(Error::ParseTemporal {
                kind: TemporalKind::DateTime,
                ..
            })
        ));
    }

    #[test]
    fn datetime_constructors() {
        let date = DicomDate::from_ymd(2021, 12, 31).unwrap();
        let time = DicomTime::from_hm(23, 59).unwrap();
        let dt = DicomDateTime::from_date_and_time(date, time).unwrap();
        assert_eq!(dt.to_dicom_string(), "202112312359");

        let offset = FixedOffset::east_opt(-2 * 3600).unwrap();
        let dt = dt.with_offset(offset);
        assert_eq!(dt.to_dicom_string(), "202112312359-0200");
        assert_eq!(dt.without_offset().offset(), None);

        let partial = DicomDate::from_ym(2021, 12).unwrap();
        assert!(DicomDateTime::from_date_and_time(partial, time).is_err());
        assert_eq!(DicomDateTime::from_date(partial).to_dicom_string(), "202112");

        let naive = NaiveDate::from_ymd_opt(2021, 12, 31)
            .unwrap()
            .and_hms_micro_opt(23, 59, 58, 500_000)
            .unwrap();
        let dt = DicomDateTime::from_naive_datetime(naive, Precision::Fraction(1)).unwrap();
        assert_eq!(dt.to_dicom_string(), "20211231235958.5");
        let dt = DicomDateTime::from_naive_datetime(naive, Precision::Month).unwrap();
        assert_eq!(dt.to_dicom_string(), "202112");
    }

    #[test]
    fn serialized_digits_are_zero_padded() {
        let date = DicomDate::from_ymd(7, 1, 2).unwrap();
        assert_eq!(date.to_dicom_string(), "00070102");
        let time = DicomTime::from_hms_micro(1, 2, 3, 4_000).unwrap();
        assert_eq!(time.to_dicom_string(), "010203.004000");
        assert_eq!(parse_time("0102").unwrap().to_dicom_string(), "0102");

        let dt = parse_datetime("00070102010203.04-0500").unwrap();
        assert_eq!(dt.to_dicom_string(), "00070102010203.04-0500");
        let dt = DicomDateTime::from_date_and_time(date, time).unwrap();
        assert_eq!(dt.to_dicom_string(), "00070102010203.004000");
    }

    #[test]
    fn precisions_are_ordered() {
        assert!(Precision::Year < Precision::Month);
        assert!(Precision::Day < Precision::Hour);
        assert!(Precision::Second < Precision::Fraction(1));
        assert!(Precision::Fraction(1) < Precision::Fraction(6));
        assert_eq!(Precision::Fraction(3).to_string(), "Fraction(3)");
    }
}
