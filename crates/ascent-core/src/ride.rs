// File: crates/ascent-core/src/ride.rs
// Summary: Ride record model, MM:SS time parsing/formatting, and the raw JSON record shape.

use chrono::{NaiveTime, Timelike};
use serde::Deserialize;

use crate::error::{ChartError, Result};

/// Display format for ride times, also used on the Y axis.
pub const TIME_FORMAT: &str = "%M:%S";

/// One rider's timed ascent. Read-only after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ride {
    pub year: i32,
    /// Point on a 24-hour clock: 00:MM:SS.
    pub time: NaiveTime,
    pub name: String,
    pub nationality: String,
    /// Free-text allegation; empty when there is none.
    pub doping: String,
    pub place: Option<u32>,
    pub seconds: Option<u32>,
    pub url: Option<String>,
}

impl Ride {
    /// A non-empty doping annotation marks the ride as alleged.
    pub fn has_doping(&self) -> bool {
        !self.doping.is_empty()
    }

    pub fn doping_note(&self) -> Option<&str> {
        if self.has_doping() { Some(self.doping.as_str()) } else { None }
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.time)
    }
}

/// Record shape of the published cyclist dataset.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRide {
    pub time: String,
    pub year: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub doping: String,
    #[serde(default)]
    pub place: Option<u32>,
    #[serde(default)]
    pub seconds: Option<u32>,
    #[serde(default, rename = "URL")]
    pub url: Option<String>,
}

impl TryFrom<RawRide> for Ride {
    type Error = ChartError;

    fn try_from(raw: RawRide) -> Result<Self> {
        let time = parse_time(&raw.time)?;
        Ok(Self {
            year: raw.year,
            time,
            name: raw.name,
            nationality: raw.nationality,
            doping: raw.doping,
            place: raw.place,
            seconds: raw.seconds,
            url: raw.url.filter(|u| !u.is_empty()),
        })
    }
}

/// Parse "MM:SS" into 00:MM:SS. Minutes and seconds must both be below 60.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let invalid = || ChartError::InvalidTime { value: s.to_string() };
    let (mm, ss) = s.trim().split_once(':').ok_or_else(invalid)?;
    if mm.is_empty() || ss.is_empty() || ss.contains(':') {
        return Err(invalid());
    }
    let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !digits(mm) || !digits(ss) {
        return Err(invalid());
    }
    let minutes: u32 = mm.parse().map_err(|_| invalid())?;
    let seconds: u32 = ss.parse().map_err(|_| invalid())?;
    // from_hms_opt rejects minutes or seconds >= 60
    NaiveTime::from_hms_opt(0, minutes, seconds).ok_or_else(invalid)
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Seconds since midnight, the numeric domain the time scale works in.
pub fn seconds_of_day(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64
}

pub fn time_from_seconds(secs: f64) -> NaiveTime {
    let s = secs.round().clamp(0.0, 86_399.0) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(s, 0).unwrap_or(NaiveTime::MIN)
}
