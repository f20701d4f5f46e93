pub mod provenance;
pub mod series;

pub use provenance::{ProvenanceRecord, SourceDescriptor};
pub use series::{AnnualPoint, AnnualSeries, DatedRecord, YearBuckets};
