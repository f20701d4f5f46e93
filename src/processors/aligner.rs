use crate::models::AnnualSeries;

/// Trailing simple moving average. Index i averages the last
/// min(window, i + 1) values, so the start of the series uses a shorter
/// window and there is no look-ahead. Output length equals input length.
pub fn moving_average(series: &AnnualSeries, window: usize) -> AnnualSeries {
    let window = window.max(1);
    let points = series.points();
    let mut out = Vec::with_capacity(points.len());

    for (i, point) in points.iter().enumerate() {
        let start = (i + 1).saturating_sub(window);
        let slice = &points[start..=i];
        let mean = slice.iter().map(|p| p.value).sum::<f64>() / slice.len() as f64;
        out.push((point.year, mean));
    }

    AnnualSeries::from_pairs(out)
}

/// Co-register a high-resolution series onto the years of a
/// low-resolution one. For each low-res point, every high-res value in
/// [year - half_width, year + half_width] inclusive is averaged; low-res
/// points whose window is empty are dropped. No interpolation.
pub fn windowed_coregister(
    low_res: &AnnualSeries,
    high_res: &AnnualSeries,
    half_width: i32,
) -> AnnualSeries {
    let half_width = half_width.max(0);
    let mut out = Vec::new();

    for point in low_res.iter() {
        let mut sum = 0.0;
        let mut count = 0usize;
        for year in (point.year - half_width)..=(point.year + half_width) {
            if let Some(value) = high_res.value_for(year) {
                sum += value;
                count += 1;
            }
        }
        if count > 0 {
            out.push((point.year, sum / count as f64));
        }
    }

    AnnualSeries::from_pairs(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn series(pairs: &[(i32, f64)]) -> AnnualSeries {
        AnnualSeries::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_moving_average_window_one_is_identity() {
        let input = series(&[(2000, 1.0), (2001, 3.0), (2002, 5.0)]);
        assert_eq!(moving_average(&input, 1), input);
    }

    #[test]
    fn test_moving_average_short_prefix() {
        let input = series(&[(2000, 1.0), (2001, 3.0), (2002, 5.0)]);
        let out = moving_average(&input, 3);
        assert_eq!(out.value_for(2000), Some(1.0));
        assert_eq!(out.value_for(2001), Some(2.0));
        assert_eq!(out.value_for(2002), Some(3.0));
    }

    #[test]
    fn test_moving_average_window_longer_than_series() {
        let input = series(&[(2000, 2.0), (2001, 4.0), (2002, 9.0)]);
        let out = moving_average(&input, 10);
        // Last output equals the mean of the whole series
        assert_eq!(out.value_for(2002), Some(5.0));
        assert_eq!(out.len(), input.len());
    }

    #[test]
    fn test_coregister_averages_window() {
        let ice = series(&[(1985, -35.0)]);
        let tree = series(&[(1980, 1.0), (1990, 1.2), (2005, 9.0)]);
        let out = windowed_coregister(&ice, &tree, 10);

        assert_eq!(out.len(), 1);
        assert!((out.value_for(1985).unwrap() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_coregister_drops_empty_windows() {
        let low = series(&[(1900, -35.0), (1985, -34.0)]);
        let high = series(&[(1980, 1.0)]);
        let out = windowed_coregister(&low, &high, 10);

        // 1900 has no high-res neighbors; it never appears in the output
        assert_eq!(out.len(), 1);
        assert_eq!(out.first_year(), Some(1985));
    }

    #[test]
    fn test_coregister_never_invents_years() {
        let low = series(&[(1985, -34.0)]);
        let high = series(&[(1980, 1.0), (1990, 1.2)]);
        let out = windowed_coregister(&low, &high, 10);

        for point in out.iter() {
            assert!(low.value_for(point.year).is_some());
        }
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let low = series(&[(1985, 0.0)]);
        let high = series(&[(1975, 2.0), (1995, 4.0), (1996, 100.0)]);
        let out = windowed_coregister(&low, &high, 10);
        // 1975 and 1995 are inside [1975, 1995]; 1996 is not
        assert_eq!(out.value_for(1985), Some(3.0));
    }
}
