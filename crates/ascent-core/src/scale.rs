// File: crates/ascent-core/src/scale.rs
// Summary: Year (X) and time-of-day (Y) scale transforms with nice tick generation.

use chrono::NaiveTime;

use crate::chart::RenderOptions;
use crate::dataset::{time_extent, year_extent, Dataset};
use crate::error::{ChartError, Result};
use crate::ride::{seconds_of_day, time_from_seconds, Ride};

/// Default number of ticks requested per axis.
pub const DEFAULT_TICKS: usize = 10;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Linear map from a numeric domain onto a pixel range. Either may be reversed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < 1e-12 {
            // degenerate domain collapses onto the middle of the range
            return (r0 + r1) * 0.5;
        }
        let t = (v - d0) / span;
        (r0 as f64 + t * (r1 - r0) as f64) as f32
    }

    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = (r1 - r0) as f64;
        if span.abs() < 1e-12 {
            return (d0 + d1) * 0.5;
        }
        d0 + ((px - r0) as f64 / span) * (d1 - d0)
    }

    /// Ordered domain extent (lo <= hi).
    pub fn extent(&self) -> (f64, f64) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.extent();
        nice_ticks(lo, hi, count)
    }
}

/// Round-number ticks (1, 2, 5 x 10^k) covering `[start, stop]`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (i1, i2, inc) = tick_spec(start, stop, count as f64);
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect()
}

// Returns (first index, last index, increment); a negative increment means "divide by -inc".
fn tick_spec(start: f64, stop: f64, count: f64) -> (i64, i64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let m = 10f64.powf(-power) / factor;
        i1 = js_round(start * m);
        i2 = js_round(stop * m);
        if (i1 as f64) / m < start { i1 += 1; }
        if (i2 as f64) / m > stop { i2 -= 1; }
        inc = -m;
    } else {
        let m = 10f64.powf(power) * factor;
        i1 = js_round(start / m);
        i2 = js_round(stop / m);
        if (i1 as f64) * m < start { i1 += 1; }
        if (i2 as f64) * m > stop { i2 -= 1; }
        inc = m;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Half rounds towards positive infinity.
#[inline]
pub(crate) fn js_round(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Candidate time tick intervals, in seconds.
const TIME_INTERVALS: [u32; 12] = [1, 5, 15, 30, 60, 300, 900, 1800, 3600, 10_800, 21_600, 43_200];

/// Maps a time-of-day domain onto a pixel range.
/// `domain.0` maps to `range.0`; the chart passes `(max, min)` so faster times sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveTime, NaiveTime),
    pub range: (f32, f32),
}

impl TimeScale {
    pub fn new(domain: (NaiveTime, NaiveTime), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    fn linear(&self) -> LinearScale {
        LinearScale::new((seconds_of_day(self.domain.0), seconds_of_day(self.domain.1)), self.range)
    }

    #[inline]
    pub fn apply(&self, t: NaiveTime) -> f32 {
        self.linear().apply(seconds_of_day(t))
    }

    pub fn invert(&self, py: f32) -> NaiveTime {
        time_from_seconds(self.linear().invert(py))
    }

    /// Tick interval (seconds) nearest to `span / count`.
    pub fn tick_interval(&self, count: usize) -> u32 {
        let (lo, hi) = self.linear().extent();
        let target = (hi - lo) / count.max(1) as f64;
        let i = TIME_INTERVALS.iter().take_while(|&&d| (d as f64) <= target).count();
        if i == 0 {
            TIME_INTERVALS[0]
        } else if i == TIME_INTERVALS.len() {
            TIME_INTERVALS[i - 1]
        } else {
            let below = TIME_INTERVALS[i - 1] as f64;
            let above = TIME_INTERVALS[i] as f64;
            if target / below < above / target { TIME_INTERVALS[i - 1] } else { TIME_INTERVALS[i] }
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<NaiveTime> {
        let (lo, hi) = self.linear().extent();
        let step = self.tick_interval(count) as f64;
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|k| time_from_seconds(k as f64 * step)).collect()
    }
}

/// The two chart scales. Both are `Copy` and free of side effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: TimeScale,
}

impl ChartScales {
    pub fn from_dataset(dataset: &Dataset, opts: &RenderOptions) -> Self {
        let (min_year, max_year) = dataset.year_extent();
        let (min_time, max_time) = dataset.time_extent();
        Self::with_extents((min_year, max_year), (min_time, max_time), opts)
    }

    /// Fails on an empty slice instead of producing a degenerate scale.
    pub fn from_rides(rides: &[Ride], opts: &RenderOptions) -> Result<Self> {
        let years = year_extent(rides).ok_or(ChartError::EmptyDataset)?;
        let times = time_extent(rides).ok_or(ChartError::EmptyDataset)?;
        Ok(Self::with_extents(years, times, opts))
    }

    fn with_extents(years: (i32, i32), times: (NaiveTime, NaiveTime), opts: &RenderOptions) -> Self {
        let w = opts.width as f32;
        let h = opts.height as f32;
        let p = opts.padding as f32;
        // padded in f64 so boundary years cannot overflow i32
        let x = LinearScale::new((years.0 as f64 - 1.0, years.1 as f64 + 1.0), (p, w - p));
        let y = TimeScale::new((times.1, times.0), (h - p, p));
        Self { x, y }
    }

    #[inline]
    pub fn x(&self, year: i32) -> f32 {
        self.x.apply(year as f64)
    }

    #[inline]
    pub fn y(&self, time: NaiveTime) -> f32 {
        self.y.apply(time)
    }
}
