use encoding_rs::UTF_8;
use std::fs;
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::NAN_SENTINELS;

/// Skip accounting for one parse call. Non-conforming lines are counted
/// here instead of being raised as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines_read: usize,
    pub records: usize,
    pub skipped: usize,
}

impl ParseStats {
    pub fn line(&mut self) {
        self.lines_read += 1;
    }

    pub fn accept(&mut self) {
        self.records += 1;
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }
}

/// Read a file as text, tolerating invalid UTF-8. Undecodable bytes are
/// replaced, never fatal. Fails with `MissingFile` if the path is absent.
pub fn read_lossy(path: &Path) -> Result<String> {
    ProcessingError::require_file(path)?;
    let bytes = fs::read(path)?;
    let (text, _, _) = UTF_8.decode(&bytes);
    Ok(text.into_owned())
}

/// Split a scientific template line: tab-delimited when tabs are present,
/// otherwise any whitespace.
pub fn split_template_tokens(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t').filter(|t| !t.trim().is_empty()).collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// Split a line that may be comma- or whitespace-delimited (GMSL ASCII).
pub fn split_mixed_tokens(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// True for documented missing-value markers ("NaN", "NA", "-", "***").
pub fn is_missing_sentinel(token: &str) -> bool {
    let t = token.trim();
    t.is_empty() || NAN_SENTINELS.contains(&t.to_ascii_lowercase().as_str())
}

/// Parse a numeric token, returning None for sentinels, NaN, and anything
/// that fails float conversion.
pub fn parse_value(token: &str) -> Option<f64> {
    if is_missing_sentinel(token) {
        return None;
    }
    match token.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Collect every parseable numeric token on a line, in order.
pub fn numeric_tokens(tokens: &[&str]) -> Vec<f64> {
    tokens.iter().filter_map(|t| parse_value(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_lossy_missing_file() {
        let err = read_lossy(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, ProcessingError::MissingFile { .. }));
    }

    #[test]
    fn test_read_lossy_tolerates_invalid_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"1990\t1.2\n\xff\xfe broken\n1991\t1.4\n")
            .unwrap();

        let text = read_lossy(file.path()).unwrap();
        assert!(text.contains("1990\t1.2"));
        assert!(text.contains("1991\t1.4"));
    }

    #[test]
    fn test_template_tokens_prefer_tabs() {
        assert_eq!(split_template_tokens("1990\t1.2\t\t1.4"), vec!["1990", "1.2", "1.4"]);
        assert_eq!(split_template_tokens("1990  1.2  1.4"), vec!["1990", "1.2", "1.4"]);
    }

    #[test]
    fn test_mixed_tokens() {
        assert_eq!(split_mixed_tokens("2020-01-15, 3.4 ,x"), vec!["2020-01-15", "3.4", "x"]);
        assert_eq!(split_mixed_tokens("  11 12  1992.96"), vec!["11", "12", "1992.96"]);
    }

    #[test]
    fn test_sentinels_rejected() {
        for s in ["NaN", "nan", "NA", "-", "***", ""] {
            assert!(parse_value(s).is_none(), "{s:?} should not parse");
        }
        assert_eq!(parse_value(" 1.25 "), Some(1.25));
        assert_eq!(parse_value("-0.43"), Some(-0.43));
    }

    #[test]
    fn test_numeric_tokens_keep_order() {
        let tokens = vec!["depth", "12.0", "NaN", "-3.5", "label", "7"];
        assert_eq!(numeric_tokens(&tokens), vec![12.0, -3.5, 7.0]);
    }
}
