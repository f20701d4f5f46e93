use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar-year observation in an annual series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualPoint {
    pub year: i32,
    pub value: f64,
}

/// An annual time series: at most one value per CE calendar year,
/// sorted ascending by year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnualSeries {
    points: Vec<AnnualPoint>,
}

impl AnnualSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from already-aggregated (year, value) pairs.
    /// Input order does not matter; output is sorted by year.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, f64)>) -> Self {
        let mut points: Vec<AnnualPoint> = pairs
            .into_iter()
            .map(|(year, value)| AnnualPoint { year, value })
            .collect();
        points.sort_by_key(|p| p.year);
        Self { points }
    }

    pub fn points(&self) -> &[AnnualPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn value_for(&self, year: i32) -> Option<f64> {
        self.points
            .binary_search_by_key(&year, |p| p.year)
            .ok()
            .map(|i| self.points[i].value)
    }

    pub fn first_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnualPoint> {
        self.points.iter()
    }
}

/// Pre-aggregation buffer: raw values pooled per year, reduced to an
/// `AnnualSeries` by arithmetic mean. Owned by a single parse call.
#[derive(Debug, Default)]
pub struct YearBuckets {
    buckets: BTreeMap<i32, Vec<f64>>,
}

impl YearBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, year: i32, value: f64) {
        self.buckets.entry(year).or_default().push(value);
    }

    pub fn extend(&mut self, year: i32, values: impl IntoIterator<Item = f64>) {
        self.buckets.entry(year).or_default().extend(values);
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Reduce each year's pooled values to their arithmetic mean.
    pub fn into_mean_series(self) -> AnnualSeries {
        AnnualSeries::from_pairs(self.buckets.into_iter().filter_map(|(year, values)| {
            if values.is_empty() {
                None
            } else {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                Some((year, mean))
            }
        }))
    }

    /// Reduce with a per-value scale factor applied before averaging.
    /// Used by the sea-level parser's deferred unit normalization.
    pub fn into_mean_series_scaled(self, factor: f64) -> AnnualSeries {
        AnnualSeries::from_pairs(self.buckets.into_iter().filter_map(|(year, values)| {
            if values.is_empty() {
                None
            } else {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                Some((year, mean * factor))
            }
        }))
    }
}

/// A site-tagged annual observation for multi-location proxy tables
/// (speleothem growth rates, lake-core grain sizes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedRecord {
    pub site: String,
    pub year: i32,
    pub value: f64,
}

impl DatedRecord {
    pub fn new(site: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            site: site.into(),
            year,
            value,
        }
    }
}
