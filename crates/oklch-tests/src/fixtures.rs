//! Scan fixtures
//!
//! Stylesheet snippets with the literals a scan must find, stored as JSON
//! under `fixtures/`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One expected literal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedMatch {
    /// Exact source text of the literal
    pub literal: String,
    pub l: f64,
    pub c: f64,
    pub h: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
    /// Canonical formatted form
    pub canonical: String,
}

fn opaque() -> f64 {
    1.0
}

/// A named text and everything a scan of it should report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanCase {
    pub name: String,
    /// Language identifier the snippet is written in
    pub language: String,
    pub text: String,
    pub expected: Vec<ExpectedMatch>,
}

/// Directory holding the JSON fixtures
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load scan cases from a JSON file
pub fn load_scan_cases(path: impl AsRef<Path>) -> Result<Vec<ScanCase>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing fixture {}", path.display()))
}

/// Load the bundled `scan_cases.json`
pub fn default_scan_cases() -> Result<Vec<ScanCase>> {
    load_scan_cases(fixtures_dir().join("scan_cases.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixtures_load() {
        let cases = default_scan_cases().unwrap();
        assert!(!cases.is_empty());
        assert!(cases.iter().all(|c| !c.name.is_empty()));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_scan_cases("/nonexistent/cases.json").unwrap_err();
        assert!(err.to_string().contains("reading fixture"), "{}", err);
    }

    #[test]
    fn test_alpha_defaults_to_opaque() {
        let m: ExpectedMatch = serde_json::from_str(
            r#"{"literal":"oklch(0 0 0)","l":0,"c":0,"h":0,"canonical":"oklch(0.000 0.000 0.0)"}"#,
        )
        .unwrap();
        assert_eq!(m.alpha, 1.0);
    }
}
