use std::path::Path;

use crate::error::Result;
use crate::models::DatedRecord;
use crate::readers::line_source::{numeric_tokens, read_lossy, split_template_tokens, ParseStats};
use crate::readers::ParsedRecords;
use crate::utils::constants::{
    BP_REFERENCE_YEAR, GRAIN_SIZE_BP_LOWER_INDEX, GRAIN_SIZE_BP_UPPER_INDEX,
    GRAIN_SIZE_MIN_NUMERIC_TOKENS, GRAIN_SIZE_VALUE_INDEX,
};

/// Reader for varved lake-core grain-size tables (e.g. Lake Walker D50).
///
/// Numeric tokens are expected in the order: depth, varve age lower bound
/// (BP), varve age upper bound (BP), thickness, D50 (µm), further size
/// fractions. The age bounds are averaged to a midpoint before epoch
/// conversion; the grain size comes from the fifth numeric token.
pub struct GrainSizeReader {
    site_label: String,
}

impl GrainSizeReader {
    pub fn new(site_label: impl Into<String>) -> Self {
        Self {
            site_label: site_label.into(),
        }
    }

    pub fn read(&self, path: &Path) -> Result<ParsedRecords> {
        let text = read_lossy(path)?;
        let mut stats = ParseStats::default();
        let mut records = Vec::new();

        for raw in text.lines() {
            stats.line();
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                stats.skip();
                continue;
            }

            let tokens = split_template_tokens(line);
            match self.parse_line(&tokens) {
                Some((year, d50)) => {
                    stats.accept();
                    records.push(DatedRecord::new(self.site_label.clone(), year, d50));
                }
                None => stats.skip(),
            }
        }

        Ok(ParsedRecords { records, stats })
    }

    fn parse_line(&self, tokens: &[&str]) -> Option<(i32, f64)> {
        let nums = numeric_tokens(tokens);
        if nums.len() < GRAIN_SIZE_MIN_NUMERIC_TOKENS {
            return None;
        }
        let bp_lower = nums[GRAIN_SIZE_BP_LOWER_INDEX];
        let bp_upper = nums[GRAIN_SIZE_BP_UPPER_INDEX];
        let d50 = nums[GRAIN_SIZE_VALUE_INDEX];
        let bp_mid = (bp_lower + bp_upper) / 2.0;
        let year = (BP_REFERENCE_YEAR as f64 - bp_mid).round() as i32;
        Some((year, d50))
    }
}

pub fn parse_grain_size(path: &Path, site_label: &str) -> Result<Vec<DatedRecord>> {
    Ok(GrainSizeReader::new(site_label).read(path)?.records)
}
