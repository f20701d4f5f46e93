use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands, DialectArg};
use crate::error::Result;
use crate::lessons::{Dialect, LessonGenerator, GRAIN_SIZE_SITE, SPELEOTHEM_SITE};
use crate::models::AnnualSeries;
use crate::readers::{
    Co2Reader, GistempReader, GrainSizeReader, IceCoreReader, ParseStats, SeaLevelReader,
    SpeleothemReader, TreeRingReader,
};
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Process {
            data_dir,
            output_dir,
            lesson,
            skip_sidecars,
        } => {
            println!("Processing raw data from {}", data_dir.display());
            println!("Output directory: {}", output_dir.display());

            let progress = ProgressReporter::new_spinner("Generating lesson CSVs...", false);
            let generator = LessonGenerator::new(&data_dir, &output_dir);

            if !skip_sidecars {
                progress.set_message("Writing provenance sidecars...");
                match generator.write_sidecars() {
                    Ok(paths) => {
                        progress.println(&format!("Wrote {} provenance files", paths.len()))
                    }
                    Err(e) => progress.println(&format!("Sidecar metadata failed: {}", e)),
                }
            }

            progress.set_message("Generating lesson CSVs...");
            let reports = generator.generate_all(lesson);
            progress.finish_with_message("Generation complete");

            for report in &reports {
                println!("{}", report);
            }

            let written = reports.iter().filter(|r| r.is_written()).count();
            println!("\n{}/{} outputs written", written, reports.len());
        }

        Commands::Validate { data_dir } => {
            println!("Validating raw data in {}", data_dir.display());
            let mut any = false;

            for dialect in Dialect::all() {
                let path = dialect.input_path(&data_dir);
                if !path.is_file() {
                    continue;
                }
                any = true;
                match parse_for_stats(dialect, &path) {
                    Ok(stats) => println!(
                        "{:<28} {} records, {} skipped ({} lines)",
                        dialect.descriptor().short_name,
                        stats.records,
                        stats.skipped,
                        stats.lines_read,
                    ),
                    Err(e) => println!(
                        "{:<28} failed: {}",
                        dialect.descriptor().short_name,
                        e
                    ),
                }
            }

            if !any {
                println!("No known source files found");
            }
        }

        Commands::Info { file, format } => {
            println!("Analyzing {} as {:?}", file.display(), format);
            match format {
                DialectArg::Speleothem | DialectArg::GrainSize => {
                    let (site, reader_records) = match format {
                        DialectArg::Speleothem => (
                            SPELEOTHEM_SITE,
                            SpeleothemReader::new(SPELEOTHEM_SITE).read(&file)?,
                        ),
                        _ => (
                            GRAIN_SIZE_SITE,
                            GrainSizeReader::new(GRAIN_SIZE_SITE).read(&file)?,
                        ),
                    };
                    let records = &reader_records.records;
                    println!("Site: {}", site);
                    println!("Records: {}", records.len());
                    if let (Some(first), Some(last)) = (records.first(), records.last()) {
                        println!("Year span: {} to {}", first.year, last.year);
                    }
                    print_stats(&reader_records.stats);
                }
                _ => {
                    let parsed = match format {
                        DialectArg::TreeRing => TreeRingReader::new().read(&file)?,
                        DialectArg::IceCore => IceCoreReader::new().read(&file)?,
                        DialectArg::Gistemp => GistempReader::new().read(&file)?,
                        DialectArg::Co2 => Co2Reader::new().read(&file)?,
                        DialectArg::SeaLevel => SeaLevelReader::new().read(&file)?,
                        _ => unreachable!(),
                    };
                    summarize_series(&parsed.series);
                    print_stats(&parsed.stats);
                }
            }
        }
    }

    Ok(())
}

fn parse_for_stats(dialect: Dialect, path: &Path) -> Result<ParseStats> {
    Ok(match dialect {
        Dialect::TreeRing => TreeRingReader::new().read(path)?.stats,
        Dialect::IceCore => IceCoreReader::new().read(path)?.stats,
        Dialect::Speleothem => SpeleothemReader::new(SPELEOTHEM_SITE).read(path)?.stats,
        Dialect::GrainSize => GrainSizeReader::new(GRAIN_SIZE_SITE).read(path)?.stats,
        Dialect::Gistemp => GistempReader::new().read(path)?.stats,
        Dialect::Co2 => Co2Reader::new().read(path)?.stats,
        Dialect::SeaLevel => SeaLevelReader::new().read(path)?.stats,
    })
}

fn summarize_series(series: &AnnualSeries) {
    println!("Years: {}", series.len());
    if let (Some(first), Some(last)) = (series.first_year(), series.last_year()) {
        println!("Year span: {} to {}", first, last);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series.iter() {
        min = min.min(point.value);
        max = max.max(point.value);
    }
    if !series.is_empty() {
        println!("Value range: {:.3} to {:.3}", min, max);
    }
}

fn print_stats(stats: &ParseStats) {
    println!(
        "Parsed {} lines: {} records, {} skipped",
        stats.lines_read, stats.records, stats.skipped
    );
}
