// File: crates/ascent-core/src/dataset.rs
// Summary: Non-empty ordered collection of rides, parsed from JSON or CSV.

use std::io::Read;

use chrono::NaiveTime;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::ride::{parse_time, RawRide, Ride};

/// The full dataset. Never empty; never mutated after parsing.
#[derive(Clone, Debug)]
pub struct Dataset {
    rides: Vec<Ride>,
}

impl Dataset {
    pub fn new(rides: Vec<Ride>) -> Result<Self> {
        if rides.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Self { rides })
    }

    /// Parse the published JSON array. Any malformed record fails the whole parse.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: Vec<RawRide> = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw: Vec<RawRide> = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: Vec<RawRide>) -> Result<Self> {
        let rides = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| Ride::try_from(r).map_err(|e| ChartError::at(i, e)))
            .collect::<Result<Vec<_>>>()?;
        debug!(records = rides.len(), "parsed rides");
        Self::new(rides)
    }

    /// Load rides from CSV with a header row. Column names match case-insensitively.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        debug!(?headers, "csv headers");

        let idx = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &'static str| idx(name).ok_or(ChartError::MissingColumn(name));

        let i_time = required("time")?;
        let i_year = required("year")?;
        let i_name = idx("name");
        let i_nat = idx("nationality");
        let i_doping = idx("doping");
        let i_place = idx("place");
        let i_seconds = idx("seconds");
        let i_url = idx("url");

        let mut rides = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let text = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).unwrap_or("").to_string();
            let number = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<u32>().ok());

            let time = parse_time(rec.get(i_time).unwrap_or("")).map_err(|e| ChartError::at(row, e))?;
            let year_text = rec.get(i_year).unwrap_or("");
            let year = year_text.parse::<i32>().map_err(|_| {
                ChartError::at(row, ChartError::InvalidField { field: "year", value: year_text.to_string() })
            })?;

            let url = text(i_url);
            rides.push(Ride {
                year,
                time,
                name: text(i_name),
                nationality: text(i_nat),
                doping: text(i_doping),
                place: number(i_place),
                seconds: number(i_seconds),
                url: if url.is_empty() { None } else { Some(url) },
            });
        }
        debug!(records = rides.len(), "parsed csv rides");
        Self::new(rides)
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    pub fn get(&self, index: usize) -> Option<&Ride> {
        self.rides.get(index)
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    pub fn year_extent(&self) -> (i32, i32) {
        year_extent(&self.rides).unwrap_or((0, 0))
    }

    pub fn time_extent(&self) -> (NaiveTime, NaiveTime) {
        time_extent(&self.rides).unwrap_or((NaiveTime::MIN, NaiveTime::MIN))
    }

    pub fn doping_count(&self) -> usize {
        self.rides.iter().filter(|r| r.has_doping()).count()
    }
}

pub(crate) fn year_extent(rides: &[Ride]) -> Option<(i32, i32)> {
    let min = rides.iter().map(|r| r.year).min()?;
    let max = rides.iter().map(|r| r.year).max()?;
    Some((min, max))
}

pub(crate) fn time_extent(rides: &[Ride]) -> Option<(NaiveTime, NaiveTime)> {
    let min = rides.iter().map(|r| r.time).min()?;
    let max = rides.iter().map(|r| r.time).max()?;
    Some((min, max))
}
