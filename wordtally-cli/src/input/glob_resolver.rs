//! File pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Pattern that stands for standard input
pub const STDIN_PATTERN: &str = "-";

/// Resolve file patterns to input sources
///
/// No patterns, or the pattern `-`, select standard input. Each glob
/// pattern must match at least one file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            sources.push(InputSource::Stdin);
            continue;
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let before = sources.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                sources.push(InputSource::File(path));
            }
        }

        if sources.len() == before {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }

    // Remove duplicates and sort
    sources.sort();
    sources.dedup();

    log::debug!("Resolved {} input(s)", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).display().to_string()
    }

    #[test]
    fn test_no_patterns_means_stdin() {
        assert_eq!(resolve_patterns(&[]).unwrap(), vec![InputSource::Stdin]);
        assert_eq!(
            resolve_patterns(&["-".to_string()]).unwrap(),
            vec![InputSource::Stdin]
        );
    }

    #[test]
    fn test_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let sources = resolve_patterns(&[
            pattern(&temp_dir, "*.txt"),
            pattern(&temp_dir, "a.txt"),
        ])
        .unwrap();

        let expected: Vec<InputSource> = ["a.txt", "b.txt"]
            .iter()
            .map(|name| InputSource::File(PathBuf::from(pattern(&temp_dir, name))))
            .collect();
        assert_eq!(sources, expected);
    }

    #[test]
    fn test_unmatched_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&temp_dir, "*.md")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern: [invalid"));
    }

    #[test]
    fn test_stdin_mixed_with_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let sources = resolve_patterns(&["-".to_string(), pattern(&temp_dir, "a.txt")]).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], InputSource::Stdin);
    }
}
