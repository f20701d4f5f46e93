use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::{AnnualSeries, YearBuckets};
use crate::readers::line_source::{parse_value, read_lossy, ParseStats};
use crate::readers::ParsedSeries;
use crate::utils::constants::{GISTEMP_ANNUAL_MEAN_MARKER, GISTEMP_YEAR_MARKER};

/// How many preamble lines may precede the header row before the file is
/// declared malformed.
const MAX_HEADER_SCAN_LINES: usize = 200;

/// Reader for GISTEMP-style annual anomaly tables (GLB.Ts+dSST CSV).
///
/// The file opens with free-form preamble lines. Parsing scans forward for
/// the header row whose first field is "Year" and which also names the
/// annual-mean column "J-D", then reads one anomaly per year. The annual
/// column is located by name, never by fixed position.
pub struct GistempReader;

impl GistempReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<ParsedSeries> {
        let text = read_lossy(path)?;
        let mut stats = ParseStats::default();
        let mut lines = text.lines();

        let annual_column = self.locate_annual_column(&mut lines, &mut stats, path)?;

        let mut buckets = YearBuckets::new();
        for raw in lines {
            stats.line();
            let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
            match self.parse_row(&fields, annual_column) {
                Some((year, anomaly)) => {
                    stats.accept();
                    buckets.push(year, anomaly);
                }
                None => stats.skip(),
            }
        }

        Ok(ParsedSeries {
            series: buckets.into_mean_series(),
            stats,
        })
    }

    /// Scan the preamble for the header row and return the index of the
    /// annual-mean column. A missing header is fatal for the file: it
    /// signals the upstream format changed.
    fn locate_annual_column<'a>(
        &self,
        lines: &mut impl Iterator<Item = &'a str>,
        stats: &mut ParseStats,
        path: &Path,
    ) -> Result<usize> {
        for raw in lines.take(MAX_HEADER_SCAN_LINES) {
            stats.line();
            let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
            if fields.first() == Some(&GISTEMP_YEAR_MARKER) {
                if let Some(idx) = fields.iter().position(|f| *f == GISTEMP_ANNUAL_MEAN_MARKER) {
                    return Ok(idx);
                }
            }
            stats.skip();
        }

        Err(ProcessingError::MalformedHeader {
            path: path.to_path_buf(),
            expected: format!(
                "a row starting with '{}' containing '{}'",
                GISTEMP_YEAR_MARKER, GISTEMP_ANNUAL_MEAN_MARKER
            ),
        })
    }

    fn parse_row(&self, fields: &[&str], annual_column: usize) -> Option<(i32, f64)> {
        let year_token = fields.first()?.trim();
        if year_token.is_empty() || !year_token.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let year: i32 = year_token.parse().ok()?;
        let anomaly = parse_value(fields.get(annual_column)?)?;
        Some((year, anomaly))
    }
}

impl Default for GistempReader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_gistemp(path: &Path) -> Result<AnnualSeries> {
    Ok(GistempReader::new().read(path)?.series)
}
