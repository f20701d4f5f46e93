/// Epoch reference years for proxy age scales
pub const B2K_REFERENCE_YEAR: i32 = 2000;
pub const BP_REFERENCE_YEAR: i32 = 1950;

/// Missing-value sentinels accepted across the text dialects
pub const NAN_SENTINELS: [&str; 4] = ["nan", "na", "-", "***"];

/// GISTEMP header markers (located by name, not position)
pub const GISTEMP_YEAR_MARKER: &str = "Year";
pub const GISTEMP_ANNUAL_MEAN_MARKER: &str = "J-D";

/// GMSL V5.x fixed-column layout
pub const GMSL_MIN_COLUMNS: usize = 11;
pub const GMSL_PRIMARY_VALUE_COLUMN: usize = 10;
pub const GMSL_FALLBACK_VALUE_COLUMN: usize = 7;
pub const GMSL_MISSING_SENTINEL: f64 = 99900.0;

/// Unit-normalization heuristic: if more than this fraction of sampled
/// absolute values fall below the threshold, values are centimeters.
pub const CM_DETECTION_FRACTION: f64 = 0.8;
pub const CM_DETECTION_THRESHOLD: f64 = 20.0;
pub const CM_TO_MM: f64 = 10.0;

/// NGRIP fixed logical columns: d18O_ngrip1 first, d18O_ngrip2 fallback
pub const ICE_CORE_PRIMARY_COLUMN: usize = 3;
pub const ICE_CORE_FALLBACK_COLUMN: usize = 5;

/// Lake-core grain size: numeric-token positions and minimum count.
/// Expected order: depth, varve BP lower, varve BP upper, thickness, D50.
pub const GRAIN_SIZE_MIN_NUMERIC_TOKENS: usize = 5;
pub const GRAIN_SIZE_BP_LOWER_INDEX: usize = 1;
pub const GRAIN_SIZE_BP_UPPER_INDEX: usize = 2;
pub const GRAIN_SIZE_VALUE_INDEX: usize = 4;

/// NOAA monthly CO2 CSV: minimum fields and the monthly-average field
pub const CO2_MIN_FIELDS: usize = 5;
pub const CO2_MONTHLY_AVERAGE_FIELD: usize = 3;

/// Alignment defaults
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;
pub const DEFAULT_COREGISTER_HALF_WIDTH: i32 = 10;
