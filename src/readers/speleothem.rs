use std::path::Path;

use crate::error::Result;
use crate::models::DatedRecord;
use crate::readers::line_source::{numeric_tokens, read_lossy, split_template_tokens, ParseStats};
use crate::readers::ParsedRecords;
use crate::utils::constants::BP_REFERENCE_YEAR;

/// Reader for speleothem growth-rate templates (NOAA paleo, e.g.
/// Xianglong XL-16).
///
/// The age column is calendar years before 1950 (BP). A qualifying line
/// has at least three tokens; the first two numeric tokens anywhere on it
/// are taken positionally as (age_BP, growth rate). This is deliberately
/// permissive rather than header-driven and is preserved as-is.
pub struct SpeleothemReader {
    site_label: String,
}

impl SpeleothemReader {
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
                Some((year, rate)) => {
                    stats.accept();
                    records.push(DatedRecord::new(self.site_label.clone(), year, rate));
                }
                None => stats.skip(),
            }
        }

        Ok(ParsedRecords { records, stats })
    }

    fn parse_line(&self, tokens: &[&str]) -> Option<(i32, f64)> {
        if tokens.len() < 3 {
            return None;
        }
        let nums = numeric_tokens(tokens);
        if nums.len() < 2 {
            return None;
        }
        let age_bp = nums[0];
        let rate = nums[1];
        let year = (BP_REFERENCE_YEAR as f64 - age_bp).round() as i32;
        Some((year, rate))
    }
}

pub fn parse_speleothem(path: &Path, site_label: &str) -> Result<Vec<DatedRecord>> {
    Ok(SpeleothemReader::new(site_label).read(path)?.records)
}
