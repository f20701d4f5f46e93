use std::path::Path;

use crate::models::{AnnualSeries, YearBuckets};
use crate::readers::line_source::{parse_value, read_lossy, split_template_tokens, ParseStats};
use crate::readers::ParsedSeries;
use crate::error::Result;

/// Reader for ITRDB tree-ring measurement templates (rwl-noaa.txt).
///
/// Lines are tab- or whitespace-delimited. The first token is the CE year
/// (float-parsed, truncated); every remaining valid token is a ring-width
/// measurement from a parallel sampled core. All values for a year are
/// pooled and averaged.
pub struct TreeRingReader;

impl TreeRingReader {
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

            let tokens = split_template_tokens(line);
            match self.parse_line(&tokens) {
                Some((year, values)) => {
                    stats.accept();
                    buckets.extend(year, values);
                }
                None => stats.skip(),
            }
        }

        Ok(ParsedSeries {
            series: buckets.into_mean_series(),
            stats,
        })
    }

    /// A line qualifies when its first token parses as a year and at least
    /// one measurement token survives sentinel filtering.
    fn parse_line(&self, tokens: &[&str]) -> Option<(i32, Vec<f64>)> {
        let year = parse_value(tokens.first()?)? as i32;
        let values: Vec<f64> = tokens[1..].iter().filter_map(|t| parse_value(t)).collect();
        if values.is_empty() {
            return None;
        }
        Some((year, values))
    }
}

impl Default for TreeRingReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper used by the lesson catalog.
pub fn parse_tree_ring(path: &Path) -> Result<AnnualSeries> {
    Ok(TreeRingReader::new().read(path)?.series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_pools_all_cores() {
        let reader = TreeRingReader::new();
        let (year, values) = reader
            .parse_line(&["1990.0", "1.2", "NaN", "1.4"])
            .unwrap();
        assert_eq!(year, 1990);
        assert_eq!(values, vec![1.2, 1.4]);
    }

    #[test]
    fn test_parse_line_rejects_non_year_first_token() {
        let reader = TreeRingReader::new();
        assert!(reader.parse_line(&["age_CE", "1.2"]).is_none());
        assert!(reader.parse_line(&["1990", "NaN", "NA"]).is_none());
    }

    #[test]
    fn test_read_averages_same_year() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "# NOAA/NCEI template header")?;
        writeln!(file, "# age_CE\tcore1\tcore2")?;
        writeln!(file, "1990\t1.2\t1.4")?;
        writeln!(file, "1991\t2.0\tNaN")?;
        writeln!(file, "not-a-year\t9.9")?;
        writeln!(file)?;

        let parsed = TreeRingReader::new().read(file.path())?;
        assert_eq!(parsed.series.len(), 2);
        assert!((parsed.series.value_for(1990).unwrap() - 1.3).abs() < 1e-9);
        assert_eq!(parsed.series.value_for(1991), Some(2.0));
        assert_eq!(parsed.stats.records, 2);
        assert_eq!(parsed.stats.skipped, 4);
        Ok(())
    }
}
