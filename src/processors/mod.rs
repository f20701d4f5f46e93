pub mod aligner;
pub mod joiner;

pub use aligner::{moving_average, windowed_coregister};
pub use joiner::{year_join, year_join3, JoinedPair, JoinedTriple};
