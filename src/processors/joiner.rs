use crate::error::{ProcessingError, Result};
use crate::models::AnnualSeries;

/// One output row of a two-way year join.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedPair {
    pub year: i32,
    pub left: f64,
    pub right: f64,
}

/// Inner join of two annual series on exact year equality, ascending by
/// year. A year missing from either input is excluded. An empty
/// intersection is fatal for the output being built, so the caller can
/// report and skip it.
pub fn year_join(
    left: &AnnualSeries,
    left_name: &str,
    right: &AnnualSeries,
    right_name: &str,
) -> Result<Vec<JoinedPair>> {
    let rows: Vec<JoinedPair> = left
        .iter()
        .filter_map(|p| {
            right.value_for(p.year).map(|rv| JoinedPair {
                year: p.year,
                left: p.value,
                right: rv,
            })
        })
        .collect();

    if rows.is_empty() {
        return Err(ProcessingError::EmptyIntersection {
            left: left_name.to_string(),
            right: right_name.to_string(),
        });
    }
    Ok(rows)
}

/// One output row of a three-way year join.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedTriple {
    pub year: i32,
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

/// Inner join of three annual series on exact year equality, ascending
/// by year. A year must be present in every input to survive. An empty
/// intersection is fatal for the output being built.
pub fn year_join3(
    first: &AnnualSeries,
    first_name: &str,
    second: &AnnualSeries,
    second_name: &str,
    third: &AnnualSeries,
    third_name: &str,
) -> Result<Vec<JoinedTriple>> {
    let rows: Vec<JoinedTriple> = first
        .iter()
        .filter_map(|p| {
            let sv = second.value_for(p.year)?;
            let tv = third.value_for(p.year)?;
            Some(JoinedTriple {
                year: p.year,
                first: p.value,
                second: sv,
                third: tv,
            })
        })
        .collect();

    if rows.is_empty() {
        return Err(ProcessingError::EmptyIntersection {
            left: first_name.to_string(),
            right: format!("{} and {}", second_name, third_name),
        });
    }
    Ok(rows)
}
