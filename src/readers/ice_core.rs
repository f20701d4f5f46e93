use std::path::Path;

use crate::error::Result;
use crate::models::{AnnualSeries, YearBuckets};
use crate::readers::line_source::{parse_value, read_lossy, ParseStats};
use crate::readers::ParsedSeries;
use crate::utils::constants::{
    B2K_REFERENCE_YEAR, ICE_CORE_FALLBACK_COLUMN, ICE_CORE_PRIMARY_COLUMN,
};

/// Reader for NGRIP Holocene δ18O at 20-year resolution (GICC05 chronology).
///
/// Columns by position: 0 is the ice age in years before 2000 (b2k);
/// the isotope value sits at index 3 (d18O_ngrip1) with index 5
/// (d18O_ngrip2) as fallback. First available wins; the two columns are
/// never averaged.
pub struct IceCoreReader;

impl IceCoreReader {
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

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match self.parse_line(&tokens) {
                Some((year, d18o)) => {
                    stats.accept();
                    buckets.push(year, d18o);
                }
                None => stats.skip(),
            }
        }

        Ok(ParsedSeries {
            series: buckets.into_mean_series(),
            stats,
        })
    }

    fn parse_line(&self, tokens: &[&str]) -> Option<(i32, f64)> {
        let age_b2k = parse_value(tokens.first()?)?;
        let d18o = self.isotope_value(tokens)?;
        let year = (B2K_REFERENCE_YEAR as f64 - age_b2k).round() as i32;
        Some((year, d18o))
    }

    /// Primary column first, fallback column second; NaN and sentinel
    /// values in the primary fall through to the fallback.
    fn isotope_value(&self, tokens: &[&str]) -> Option<f64> {
        for idx in [ICE_CORE_PRIMARY_COLUMN, ICE_CORE_FALLBACK_COLUMN] {
            if let Some(token) = tokens.get(idx) {
                if let Some(value) = parse_value(token) {
                    return Some(value);
                }
            }
        }
        None
    }
}

impl Default for IceCoreReader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_ice_core(path: &Path) -> Result<AnnualSeries> {
    Ok(IceCoreReader::new().read(path)?.series)
}
