use std::fs;
use std::path::Path;

use paleoclim_processor::lessons::{LessonGenerator, LESSONS};
use paleoclim_processor::models::AnnualSeries;
use paleoclim_processor::processors::{moving_average, windowed_coregister, year_join};
use paleoclim_processor::readers::{parse_sea_level, parse_tree_ring};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn gistemp() -> &'static str {
    "Land-Ocean: Global Means\n\
     Year,Jan,Feb,Mar,J-D\n\
     2019,.90,.95,1.10,0.980\n\
     2020,1.10,1.20,1.30,1.010\n\
     2021,.80,.85,.90,0.850\n"
}

#[test]
fn test_full_run_with_partial_inputs() {
    let data = TempDir::new().expect("Failed to create temp directory");
    let out = TempDir::new().expect("Failed to create temp directory");

    write_file(data.path(), "gistemp_glb_ts_dsst.csv", gistemp());
    write_file(
        data.path(),
        "noaa_mauna_loa_co2_monthly.csv",
        "# comment\n2020,1,2020.042,410.1,410.0\n2020,2,2020.125,410.5,410.2\n2020,3,2020.208,411.0,410.4\n",
    );

    let generator = LessonGenerator::new(data.path(), out.path());
    let sidecars = generator.write_sidecars().unwrap();
    let reports = generator.generate_all(None);

    // Two sources present -> two sidecars plus the aggregate document
    assert_eq!(sidecars.len(), 3);
    assert!(out.path().join("raw-data-metadata.json").is_file());

    // Lessons 12 and 21 have their inputs; 2, 3 and 15 are skipped, not fatal
    assert_eq!(reports.len(), LESSONS.len());
    let written: Vec<u8> = reports
        .iter()
        .filter(|r| r.is_written())
        .map(|r| r.lesson)
        .collect();
    assert_eq!(written, vec![12, 21]);

    let lesson21 = fs::read_to_string(out.path().join("lesson-21-sample.csv")).unwrap();
    assert!(lesson21.starts_with("year,co2_ppm,temp_anomaly_c\n"));
    assert!(lesson21.contains("2020,410.533,1.010"));

    // Metadata sidecar for a written lesson exists and keeps non-ASCII literal
    let meta = fs::read_to_string(out.path().join("lesson-21-metadata.json")).unwrap();
    assert!(meta.contains("CO₂ (ppm, monthly)"));
}

#[test]
fn test_tree_ice_pipeline_end_to_end() {
    let data = TempDir::new().unwrap();
    write_file(
        data.path(),
        "rings.txt",
        "# age_CE core1 core2\n1980\t1.0\tNaN\n1990\t1.2\t1.2\n",
    );

    let tree = parse_tree_ring(&data.path().join("rings.txt")).unwrap();
    let ice = AnnualSeries::from_pairs([(1985, -35.25)]);

    let widths = windowed_coregister(&ice, &tree, 10);
    let joined = year_join(&widths, "widths", &ice, "d18O").unwrap();

    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].year, 1985);
    assert!((joined[0].left - 1.1).abs() < 1e-9);
    assert_eq!(joined[0].right, -35.25);
}

#[test]
fn test_sea_level_unit_normalization_end_to_end() {
    let data = TempDir::new().unwrap();
    let mut content = String::from("HDR Header_End\n");
    // Centimeter-scale indicator series
    for (i, v) in [(0, 1.2), (1, 2.4), (2, 3.1), (3, 4.0), (4, 5.5)] {
        content.push_str(&format!("200{}-06-15 {:.1}\n", i, v));
    }
    write_file(data.path(), "gmsl.txt", &content);

    let series = parse_sea_level(&data.path().join("gmsl.txt")).unwrap();
    // All values < 20 -> centimeters, scaled x10 to millimeters
    assert_eq!(series.value_for(2000), Some(12.0));
    assert_eq!(series.value_for(2004), Some(55.0));
}

#[test]
fn test_moving_average_whole_series_mean() {
    let series = AnnualSeries::from_pairs([(1990, 1.0), (1991, 2.0), (1992, 6.0)]);
    let smoothed = moving_average(&series, 100);
    assert_eq!(smoothed.value_for(1992), Some(3.0));
}

#[test]
fn test_rewrite_keeps_single_backup_and_fresh_content() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(data.path(), "gistemp_glb_ts_dsst.csv", gistemp());

    let generator = LessonGenerator::new(data.path(), out.path());
    generator.generate(12).unwrap();
    generator.generate(12).unwrap();

    let names: Vec<String> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    let fresh: Vec<&String> = names
        .iter()
        .filter(|n| *n == "lesson-12-sample.csv")
        .collect();
    let backups: Vec<&String> = names
        .iter()
        .filter(|n| n.starts_with("lesson-12-sample.csv.bak-"))
        .collect();
    assert_eq!(fresh.len(), 1);
    assert_eq!(backups.len(), 1);

    let content = fs::read_to_string(out.path().join("lesson-12-sample.csv")).unwrap();
    assert!(content.starts_with("year,temp_anomaly_c,smoothed_c\n"));
}
