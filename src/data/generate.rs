use chrono::{Datelike, NaiveDate};
use std::time::{SystemTime, UNIX_EPOCH};

use super::model::{SeriesDataset, WaterSample};

// ---------------------------------------------------------------------------
// Sampling ranges
// ---------------------------------------------------------------------------

/// Temperature draws are uniform over [-5, 35) °C.
pub const TEMPERATURE_RANGE: (f64, f64) = (-5.0, 35.0);

/// pH draws are uniform over [4, 7).
pub const PH_RANGE: (f64, f64) = (4.0, 7.0);

/// Chemical oxygen demand draws are uniform over [0, 4).
pub const COD_RANGE: (f64, f64) = (0.0, 4.0);

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generate one fully populated sample per month-end date in `[start, end]`.
///
/// All three measurements are drawn independently from one shared PRNG, so
/// any correlation observed downstream is sampling noise. `start > end`
/// yields an empty dataset. Passing a seed makes the output reproducible;
/// `None` seeds from the system clock.
pub fn generate(start: NaiveDate, end: NaiveDate, seed: Option<u64>) -> SeriesDataset {
    let mut rng = match seed {
        Some(s) => SampleRng::new(s),
        None => SampleRng::new(clock_seed()),
    };

    let samples = month_end_schedule(start, end)
        .into_iter()
        .map(|date| WaterSample {
            date,
            temperature: Some(rng.uniform(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1)),
            ph: Some(rng.uniform(PH_RANGE.0, PH_RANGE.1)),
            cod: Some(rng.uniform(COD_RANGE.0, COD_RANGE.1)),
        })
        .collect();

    SeriesDataset::new(samples)
}

/// The last calendar day of each month whose month-end falls in `[start, end]`,
/// ascending. Empty when `start > end` or no month-end lies in the range.
pub fn month_end_schedule(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    if start > end {
        return dates;
    }

    let mut year = start.year();
    let mut month = start.month();
    loop {
        let month_end = last_day_of_month(year, month);
        if month_end > end {
            break;
        }
        if month_end >= start {
            dates.push(month_end);
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    dates
}

/// Last calendar day of the given month.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid")
        .pred_opt()
        .expect("first of month has a predecessor")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}

// ---------------------------------------------------------------------------
// SampleRng – minimal deterministic PRNG (xoshiro256**)
// ---------------------------------------------------------------------------

/// Small seedable PRNG backing the generator; uniform draws only.
pub struct SampleRng {
    state: [u64; 4],
}

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SampleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform draw from the half-open interval [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn quarter_2013_has_exactly_three_month_ends() {
        let dates = month_end_schedule(date(2013, 1, 1), date(2013, 3, 31));
        assert_eq!(
            dates,
            vec![date(2013, 1, 31), date(2013, 2, 28), date(2013, 3, 31)]
        );
    }

    #[test]
    fn eight_years_of_monthly_dates() {
        let dates = month_end_schedule(date(2013, 1, 1), date(2020, 12, 31));
        assert_eq!(dates.len(), 96);
        assert_eq!(dates[0], date(2013, 1, 31));
        assert_eq!(dates[95], date(2020, 12, 31));
    }

    #[test]
    fn leap_year_february() {
        let dates = month_end_schedule(date(2016, 2, 1), date(2016, 2, 29));
        assert_eq!(dates, vec![date(2016, 2, 29)]);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(month_end_schedule(date(2020, 1, 1), date(2013, 1, 1)).is_empty());
        assert!(generate(date(2020, 1, 1), date(2013, 1, 1), Some(1)).is_empty());
    }

    #[test]
    fn range_without_a_month_end_is_empty() {
        assert!(month_end_schedule(date(2013, 2, 5), date(2013, 2, 10)).is_empty());
    }

    #[test]
    fn dates_are_strictly_increasing_and_unique() {
        let dates = month_end_schedule(date(2013, 1, 1), date(2015, 6, 30));
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn generated_values_stay_in_range() {
        let ds = generate(date(2013, 1, 1), date(2020, 12, 31), Some(7));
        for s in &ds.samples {
            let t = s.temperature.expect("generator fills every cell");
            let ph = s.ph.expect("generator fills every cell");
            let cod = s.cod.expect("generator fills every cell");
            assert!((-5.0..35.0).contains(&t), "temperature {t}");
            assert!((4.0..7.0).contains(&ph), "pH {ph}");
            assert!((0.0..4.0).contains(&cod), "cod {cod}");
        }
    }

    #[test]
    fn same_seed_same_series() {
        let a = generate(date(2013, 1, 1), date(2014, 12, 31), Some(42));
        let b = generate(date(2013, 1, 1), date(2014, 12, 31), Some(42));
        assert_eq!(a, b);
        let c = generate(date(2013, 1, 1), date(2014, 12, 31), Some(43));
        assert_ne!(a, c);
    }

    #[test]
    fn uniform_stays_in_half_open_interval() {
        let mut rng = SampleRng::new(123);
        for _ in 0..10_000 {
            let v = rng.uniform(-5.0, 35.0);
            assert!((-5.0..35.0).contains(&v));
        }
    }
}
