use std::path::Path;

use crate::error::Result;
use crate::models::{AnnualSeries, YearBuckets};
use crate::readers::line_source::{parse_value, read_lossy, ParseStats};
use crate::readers::ParsedSeries;
use crate::utils::constants::{CO2_MIN_FIELDS, CO2_MONTHLY_AVERAGE_FIELD};

/// Reader for NOAA GML monthly CO₂ tables (Mauna Loa CSV).
///
/// Fields: year, month, decimal date, monthly average, deseasonalized,
/// ndays, sdev, unc. Comment lines start with '#'. Monthly averages are
/// pooled per year and reduced to the arithmetic mean; a bad month drops
/// that month only, never the whole year.
pub struct Co2Reader;

impl Co2Reader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<ParsedSeries> {
        let text = read_lossy(path)?;
        let mut stats = ParseStats::default();
        let mut buckets = YearBuckets::new();

        for raw in text.lines() {
            stats.line();
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                stats.skip();
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            match self.parse_month(&fields) {
                Some((year, monthly_avg)) => {
                    stats.accept();
                    buckets.push(year, monthly_avg);
                }
                None => stats.skip(),
            }
        }

        Ok(ParsedSeries {
            series: buckets.into_mean_series(),
            stats,
        })
    }

    fn parse_month(&self, fields: &[&str]) -> Option<(i32, f64)> {
        if fields.len() < CO2_MIN_FIELDS {
            return None;
        }
        let year_token = fields[0];
        if year_token.is_empty() || !year_token.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let year: i32 = year_token.parse().ok()?;
        let monthly_avg = parse_value(fields[CO2_MONTHLY_AVERAGE_FIELD])?;
        Some((year, monthly_avg))
    }
}

impl Default for Co2Reader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_co2(path: &Path) -> Result<AnnualSeries> {
    Ok(Co2Reader::new().read(path)?.series)
}
