// File: crates/ascent-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use ascent_core::{parse_time, Dataset, Ride};

pub fn ride(year: i32, time: &str, doping: &str, name: &str) -> Ride {
    Ride {
        year,
        time: parse_time(time).expect("fixture time"),
        name: name.to_string(),
        nationality: "ITA".to_string(),
        doping: doping.to_string(),
        place: None,
        seconds: None,
        url: None,
    }
}

/// A (1994, 23:20, clean), B (1995, 22:10, "EPO"), C (1996, 21:00, clean).
pub fn three_rides() -> Dataset {
    Dataset::new(vec![
        ride(1994, "23:20", "", "A"),
        ride(1995, "22:10", "EPO", "B"),
        ride(1996, "21:00", "", "C"),
    ])
    .expect("non-empty fixture")
}

pub const SAMPLE_JSON: &str = r#"[
  {
    "Time": "36:50",
    "Place": 1,
    "Seconds": 2210,
    "Name": "Marco Pantani",
    "Year": 1995,
    "Nationality": "ITA",
    "Doping": "Alleged drug use during 1995 due to high hematocrit levels",
    "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"
  },
  {
    "Time": "37:15",
    "Place": 3,
    "Seconds": 2235,
    "Name": "Marco Pantani",
    "Year": 1994,
    "Nationality": "ITA",
    "Doping": "",
    "URL": ""
  },
  {
    "Time": "39:50",
    "Place": 35,
    "Seconds": 2390,
    "Name": "Nairo Quintana",
    "Year": 2015,
    "Nationality": "COL",
    "Doping": "",
    "URL": ""
  }
]"#;
