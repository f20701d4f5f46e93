pub mod co2;
pub mod gistemp;
pub mod grain_size;
pub mod ice_core;
pub mod line_source;
pub mod sea_level;
pub mod speleothem;
pub mod tree_ring;

use crate::models::{AnnualSeries, DatedRecord};
pub use line_source::ParseStats;

/// An annual series plus the skip accounting from its parse.
#[derive(Debug, Clone)]
pub struct ParsedSeries {
    pub series: AnnualSeries,
    pub stats: ParseStats,
}

/// Site-tagged records plus the skip accounting from their parse.
#[derive(Debug, Clone)]
pub struct ParsedRecords {
    pub records: Vec<DatedRecord>,
    pub stats: ParseStats,
}

pub use co2::{parse_co2, Co2Reader};
pub use gistemp::{parse_gistemp, GistempReader};
pub use grain_size::{parse_grain_size, GrainSizeReader};
pub use ice_core::{parse_ice_core, IceCoreReader};
pub use sea_level::{parse_sea_level, SeaLevelReader};
pub use speleothem::{parse_speleothem, SpeleothemReader};
pub use tree_ring::{parse_tree_ring, TreeRingReader};
