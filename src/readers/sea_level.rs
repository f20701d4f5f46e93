use std::path::Path;

use crate::error::Result;
use crate::models::{AnnualSeries, YearBuckets};
use crate::readers::line_source::{parse_value, read_lossy, split_mixed_tokens, ParseStats};
use crate::readers::ParsedSeries;
use crate::utils::constants::{
    CM_DETECTION_FRACTION, CM_DETECTION_THRESHOLD, CM_TO_MM, GMSL_FALLBACK_VALUE_COLUMN,
    GMSL_MIN_COLUMNS, GMSL_MISSING_SENTINEL, GMSL_PRIMARY_VALUE_COLUMN,
};

/// Reader for global mean sea level ASCII files.
///
/// Two real-world sub-dialects are supported, classified per line rather
/// than per file:
/// - the merged altimetry V5.x fixed-column format (integer type and
///   cycle columns, fractional-year column, GIA-applied smoothed value at
///   column 10 with column 7 as fallback, 99900 missing sentinel);
/// - the simpler indicator format (leading YYYY-MM-DD or bare-year token
///   followed by the sea-level value).
///
/// Units are resolved globally after the full parse: when more than 80%
/// of the sampled absolute values are below 20, the series is read as
/// centimeters and scaled to millimeters. The decision is computed over
/// the whole candidate population before any record is emitted.
pub struct SeaLevelReader;

impl SeaLevelReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<ParsedSeries> {
        let text = read_lossy(path)?;
        let mut stats = ParseStats::default();
        let mut buckets = YearBuckets::new();
        let mut magnitudes: Vec<f64> = Vec::new();

        // Phase one: classify lines, collect per-year values and the
        // magnitude population for the unit decision.
        for raw in text.lines() {
            stats.line();
            let line = raw.trim();
            if line.is_empty()
                || line.starts_with('#')
                || line.to_ascii_uppercase().starts_with("HDR")
                || line.contains("Header_End")
            {
                stats.skip();
                continue;
            }

            let tokens = split_mixed_tokens(line);
            match self.classify_line(&tokens) {
                Some((year, value)) => {
                    stats.accept();
                    magnitudes.push(value.abs());
                    buckets.push(year, value);
                }
                None => stats.skip(),
            }
        }

        // Phase two: unit normalization over the full population.
        let factor = if Self::looks_like_centimeters(&magnitudes) {
            CM_TO_MM
        } else {
            1.0
        };

        Ok(ParsedSeries {
            series: buckets.into_mean_series_scaled(factor),
            stats,
        })
    }

    /// Shape-based dispatch: fixed-column altimetry row, date-indicator
    /// row, or bare-year row. Anything else is skipped.
    fn classify_line(&self, tokens: &[&str]) -> Option<(i32, f64)> {
        let first = *tokens.first()?;

        if tokens.len() >= GMSL_MIN_COLUMNS
            && is_integral(first)
            && is_integral(tokens[1])
            && parse_value(tokens[2]).is_some()
        {
            return self.parse_altimetry_row(tokens);
        }

        if looks_like_date(first) {
            let year: i32 = first[..4].parse().ok()?;
            let value = tokens[1..].iter().find_map(|t| parse_value(t))?;
            return Some((year, value));
        }

        if leading_four_digits(first) {
            let year: i32 = first[..4].parse().ok()?;
            let value = tokens[1..].iter().find_map(|t| parse_value(t))?;
            return Some((year, value));
        }

        None
    }

    fn parse_altimetry_row(&self, tokens: &[&str]) -> Option<(i32, f64)> {
        let year = parse_value(tokens[2])? as i32;

        let mut column = GMSL_PRIMARY_VALUE_COLUMN;
        if parse_value(tokens[column]).is_none()
            && tokens.len() > GMSL_FALLBACK_VALUE_COLUMN
            && parse_value(tokens[GMSL_FALLBACK_VALUE_COLUMN]).is_some()
        {
            column = GMSL_FALLBACK_VALUE_COLUMN;
        }

        let value = parse_value(tokens[column])?;
        if value.abs() >= GMSL_MISSING_SENTINEL {
            return None;
        }
        Some((year, value))
    }

    fn looks_like_centimeters(magnitudes: &[f64]) -> bool {
        if magnitudes.is_empty() {
            return false;
        }
        let small = magnitudes
            .iter()
            .filter(|m| **m < CM_DETECTION_THRESHOLD)
            .count();
        small as f64 / magnitudes.len() as f64 > CM_DETECTION_FRACTION
    }
}

impl Default for SeaLevelReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_integral(token: &str) -> bool {
    let t = token.trim_start_matches(&['-', '+'][..]);
    !t.is_empty() && t.chars().all(|c| c.is_ascii_digit())
}

fn leading_four_digits(token: &str) -> bool {
    token.len() >= 4 && token.as_bytes()[..4].iter().all(|b| b.is_ascii_digit())
}

fn looks_like_date(token: &str) -> bool {
    let t = token.trim();
    t.len() >= 10 && leading_four_digits(t) && matches!(t.as_bytes()[4], b'-' | b'/')
}

pub fn parse_sea_level(path: &Path) -> Result<AnnualSeries> {
    Ok(SeaLevelReader::new().read(path)?.series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_altimetry_row_primary_column() {
        let reader = SeaLevelReader::new();
        let tokens = vec![
            "0", "11", "1993.012", "466462", "337277.0", "-37.24", "92.66", "-37.02", "92.66",
            "-37.20", "-36.99", "-37.18", "-36.87",
        ];
        let (year, value) = reader.classify_line(&tokens).unwrap();
        assert_eq!(year, 1993);
        assert_eq!(value, -36.99);
    }

    #[test]
    fn test_altimetry_row_fallback_column() {
        let reader = SeaLevelReader::new();
        let tokens = vec![
            "0", "11", "1993.012", "466462", "337277.0", "-37.24", "92.66", "-37.02", "92.66",
            "-37.20", "NaN", "-37.18", "-36.87",
        ];
        let (_, value) = reader.classify_line(&tokens).unwrap();
        assert_eq!(value, -37.02);
    }

    #[test]
    fn test_altimetry_missing_sentinel_dropped() {
        let reader = SeaLevelReader::new();
        let tokens = vec![
            "0", "11", "1993.012", "466462", "337277.0", "-37.24", "92.66", "-37.02", "92.66",
            "-37.20", "99900.000", "99900.000", "99900.000",
        ];
        // Column 10 parses but carries the missing sentinel
        assert!(reader.classify_line(&tokens).is_none());
    }

    #[test]
    fn test_date_indicator_row() {
        let reader = SeaLevelReader::new();
        let (year, value) = reader
            .classify_line(&["1993-01-15", "-3.71", "-3.69"])
            .unwrap();
        assert_eq!(year, 1993);
        assert_eq!(value, -3.71);
    }

    #[test]
    fn test_bare_year_row() {
        let reader = SeaLevelReader::new();

        let (year, value) = reader.classify_line(&["2020", "35.1"]).unwrap();
        assert_eq!(year, 2020);
        assert_eq!(value, 35.1);

        // Fractional-year token still yields the leading four digits
        let (year, value) = reader.classify_line(&["2020.5", "12.3"]).unwrap();
        assert_eq!(year, 2020);
        assert_eq!(value, 12.3);

        // No numeric token after the year
        assert!(reader.classify_line(&["2020", "n/a"]).is_none());
    }

    #[test]
    fn test_unit_heuristic_90_10_split_scales_to_mm() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "# synthetic indicator series")?;
        // 18 small-magnitude (cm-looking) values, 2 large outliers
        for i in 0..18 {
            writeln!(file, "19{:02}-06-15 {:.2}", 80 + i, -8.0 + i as f64)?;
        }
        writeln!(file, "1998-06-15 550.0")?;
        writeln!(file, "1999-06-15 560.0")?;

        let parsed = SeaLevelReader::new().read(file.path())?;
        // 90% of values below 20 -> centimeters, everything scaled x10
        assert_eq!(parsed.series.value_for(1980), Some(-80.0));
        assert_eq!(parsed.series.value_for(1998), Some(5500.0));
        Ok(())
    }

    #[test]
    fn test_unit_heuristic_mm_series_left_alone() {
        assert!(!SeaLevelReader::looks_like_centimeters(&[
            35.0, 40.0, 45.0, 50.0, 5.0
        ]));
        assert!(SeaLevelReader::looks_like_centimeters(&[
            1.0, 2.0, 3.0, 4.0, 500.0
        ]));
        assert!(!SeaLevelReader::looks_like_centimeters(&[]));
    }

    #[test]
    fn test_mixed_dialects_in_one_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "HDR merged sea level file")?;
        writeln!(file, "HDR Header_End---------------------------------------")?;
        writeln!(
            file,
            "0 11 1993.012 466462 337277.0 -37.24 92.66 -37.02 92.66 -37.20 -36.99 -37.18 -36.87"
        )?;
        writeln!(file, "2021-03-05 42.1")?;

        let parsed = SeaLevelReader::new().read(file.path())?;
        assert_eq!(parsed.series.len(), 2);
        assert_eq!(parsed.stats.records, 2);
        assert_eq!(parsed.stats.skipped, 2);
        Ok(())
    }
}
