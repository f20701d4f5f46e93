pub mod catalog;
pub mod report;

use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{ProcessingError, Result};
use crate::models::ProvenanceRecord;
use crate::processors::{moving_average, windowed_coregister, year_join};
use crate::readers::{
    parse_co2, parse_gistemp, parse_grain_size, parse_ice_core, parse_sea_level,
    parse_speleothem, parse_tree_ring,
};
use crate::utils::constants::{DEFAULT_COREGISTER_HALF_WIDTH, DEFAULT_SMOOTHING_WINDOW};
use crate::utils::filename::{lesson_csv_filename, lesson_metadata_filename, sidecar_path};
use crate::writers::{write_csv_with_backup, write_json_with_backup};

pub use catalog::{Dialect, GRAIN_SIZE_SITE, SPELEOTHEM_SITE};
pub use report::{LessonOutcome, LessonReport};

/// The teaching outputs this processor produces.
pub const LESSONS: [u8; 5] = [2, 3, 12, 15, 21];

const LICENSE_NOTE: &str = "NOAA/WDS Paleoclimatology data; follow NOAA citation guidelines.";

/// Metadata document written next to each lesson CSV.
#[derive(Debug, Serialize)]
struct LessonMetadata {
    sources: Vec<ProvenanceRecord>,
    derived_csv: String,
    download_date: String,
    license_note: String,
}

/// Aggregate provenance document for all raw sources present in the
/// data directory.
#[derive(Debug, Serialize)]
struct RawSourcesMetadata {
    download_date: String,
    sources: Vec<ProvenanceRecord>,
}

/// Drives lesson CSV generation from a directory of raw source files.
/// Each lesson is generated in isolation: one failure is reported and
/// the remaining lessons still run.
pub struct LessonGenerator {
    data_dir: PathBuf,
    output_dir: PathBuf,
}

impl LessonGenerator {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    fn input(&self, dialect: Dialect) -> PathBuf {
        dialect.input_path(&self.data_dir)
    }

    fn output_csv(&self, lesson: u8) -> PathBuf {
        self.output_dir.join(lesson_csv_filename(lesson))
    }

    /// Generate every lesson (or a single one), returning one report per
    /// attempted output. An unknown lesson number still produces a report
    /// so the failure is visible rather than an empty run.
    pub fn generate_all(&self, only: Option<u8>) -> Vec<LessonReport> {
        let targets: Vec<u8> = match only {
            Some(lesson) => vec![lesson],
            None => LESSONS.to_vec(),
        };
        targets
            .into_iter()
            .map(|lesson| match self.generate(lesson) {
                Ok(report) => report,
                Err(e) => {
                    warn!(target: "lessons", "lesson {:02} failed: {}", lesson, e);
                    LessonReport::skipped(lesson, e.to_string())
                }
            })
            .collect()
    }

    pub fn generate(&self, lesson: u8) -> Result<LessonReport> {
        let (path, rows, sources) = match lesson {
            2 => self.lesson02()?,
            3 => self.lesson03()?,
            12 => self.lesson12()?,
            15 => self.lesson15()?,
            21 => self.lesson21()?,
            other => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "unknown lesson number: {}",
                    other
                )))
            }
        };

        self.write_lesson_metadata(lesson, &path, &sources)?;
        info!(target: "lessons", "lesson {:02} -> {} ({} rows)", lesson, path.display(), rows);
        Ok(LessonReport::written(lesson, path, rows))
    }

    /// Lesson 2: tree-ring widths co-registered onto 20-year ice-core
    /// bins (±10-year window), merged per ice-core year.
    fn lesson02(&self) -> Result<(PathBuf, usize, Vec<Dialect>)> {
        let tree = parse_tree_ring(&self.input(Dialect::TreeRing))?;
        let ice = parse_ice_core(&self.input(Dialect::IceCore))?;

        let width_at_ice_years =
            windowed_coregister(&ice, &tree, DEFAULT_COREGISTER_HALF_WIDTH);
        let joined = year_join(&width_at_ice_years, "tree-ring widths", &ice, "ice-core d18O")?;

        let rows: Vec<Vec<String>> = joined
            .iter()
            .map(|r| vec![r.year.to_string(), fmt3(r.left), fmt3(r.right)])
            .collect();

        let path = self.output_csv(2);
        write_csv_with_backup(&path, &["year", "width_mm", "d18o_permille"], &rows)?;
        Ok((path, rows.len(), vec![Dialect::TreeRing, Dialect::IceCore]))
    }

    /// Lesson 3: speleothem growth rates and lake-core grain sizes in one
    /// site-tagged table; each row fills one value column, the other is
    /// left empty.
    fn lesson03(&self) -> Result<(PathBuf, usize, Vec<Dialect>)> {
        let speleo = parse_speleothem(&self.input(Dialect::Speleothem), SPELEOTHEM_SITE)?;
        let grains = parse_grain_size(&self.input(Dialect::GrainSize), GRAIN_SIZE_SITE)?;

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(speleo.len() + grains.len());
        for r in &speleo {
            rows.push(vec![r.site.clone(), r.year.to_string(), fmt3(r.value), String::new()]);
        }
        for r in &grains {
            rows.push(vec![r.site.clone(), r.year.to_string(), String::new(), fmt3(r.value)]);
        }
        rows.sort_by(|a, b| {
            (&a[0], a[1].parse::<i32>().unwrap_or(0))
                .cmp(&(&b[0], b[1].parse::<i32>().unwrap_or(0)))
        });

        let path = self.output_csv(3);
        write_csv_with_backup(
            &path,
            &["site", "year", "growth_mm_per_yr", "d50_um"],
            &rows,
        )?;
        Ok((path, rows.len(), vec![Dialect::Speleothem, Dialect::GrainSize]))
    }

    /// Lesson 12: annual temperature anomalies with a 5-year trailing
    /// moving average.
    fn lesson12(&self) -> Result<(PathBuf, usize, Vec<Dialect>)> {
        let temp = parse_gistemp(&self.input(Dialect::Gistemp))?;
        let smoothed = moving_average(&temp, DEFAULT_SMOOTHING_WINDOW);

        let rows: Vec<Vec<String>> = temp
            .iter()
            .zip(smoothed.iter())
            .map(|(t, s)| vec![t.year.to_string(), fmt3(t.value), fmt3(s.value)])
            .collect();

        let path = self.output_csv(12);
        write_csv_with_backup(&path, &["year", "temp_anomaly_c", "smoothed_c"], &rows)?;
        Ok((path, rows.len(), vec![Dialect::Gistemp]))
    }

    /// Lesson 15: temperature anomaly against annualized sea level.
    /// Millimeter values round to 2 decimals, anomalies to 3.
    fn lesson15(&self) -> Result<(PathBuf, usize, Vec<Dialect>)> {
        let temp = parse_gistemp(&self.input(Dialect::Gistemp))?;
        let sea = parse_sea_level(&self.input(Dialect::SeaLevel))?;

        let joined = year_join(&sea, "sea level", &temp, "temperature anomaly")?;
        let rows: Vec<Vec<String>> = joined
            .iter()
            .map(|r| vec![r.year.to_string(), fmt3(r.right), fmt2(r.left)])
            .collect();

        let path = self.output_csv(15);
        write_csv_with_backup(&path, &["year", "temp_anomaly_c", "gmsl_mm"], &rows)?;
        Ok((path, rows.len(), vec![Dialect::Gistemp, Dialect::SeaLevel]))
    }

    /// Lesson 21: annual CO₂ means against temperature anomalies.
    fn lesson21(&self) -> Result<(PathBuf, usize, Vec<Dialect>)> {
        let temp = parse_gistemp(&self.input(Dialect::Gistemp))?;
        let co2 = parse_co2(&self.input(Dialect::Co2))?;

        let joined = year_join(&co2, "annual CO2", &temp, "temperature anomaly")?;
        let rows: Vec<Vec<String>> = joined
            .iter()
            .map(|r| vec![r.year.to_string(), fmt3(r.left), fmt3(r.right)])
            .collect();

        let path = self.output_csv(21);
        write_csv_with_backup(&path, &["year", "co2_ppm", "temp_anomaly_c"], &rows)?;
        Ok((path, rows.len(), vec![Dialect::Co2, Dialect::Gistemp]))
    }

    fn write_lesson_metadata(
        &self,
        lesson: u8,
        derived_csv: &Path,
        sources: &[Dialect],
    ) -> Result<()> {
        let records: Vec<ProvenanceRecord> = sources
            .iter()
            .map(|d| d.descriptor().describe(&self.input(*d)))
            .collect::<Result<_>>()?;

        let meta = LessonMetadata {
            sources: records,
            derived_csv: derived_csv.display().to_string(),
            download_date: Utc::now().format("%Y-%m-%d").to_string(),
            license_note: LICENSE_NOTE.to_string(),
        };
        let path = self.output_dir.join(lesson_metadata_filename(lesson));
        write_json_with_backup(&path, &meta)?;
        Ok(())
    }

    /// Write a provenance sidecar next to every raw source file that is
    /// present, plus the aggregate raw-data-metadata.json in the output
    /// directory. Absent sources are passed over without error.
    pub fn write_sidecars(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let mut records = Vec::new();

        for dialect in Dialect::all() {
            let input = self.input(dialect);
            if !input.is_file() {
                continue;
            }
            let record = dialect.descriptor().describe(&input)?;
            let sidecar = sidecar_path(&input);
            write_json_with_backup(&sidecar, &record)?;
            written.push(sidecar);
            records.push(record);
        }

        if !records.is_empty() {
            let aggregate = RawSourcesMetadata {
                download_date: Utc::now().format("%Y-%m-%d").to_string(),
                sources: records,
            };
            let path = self.output_dir.join("raw-data-metadata.json");
            write_json_with_backup(&path, &aggregate)?;
            written.push(path);
        }

        Ok(written)
    }
}

fn fmt3(value: f64) -> String {
    format!("{:.3}", value)
}

fn fmt2(value: f64) -> String {
    format!("{:.2}", value)
}
