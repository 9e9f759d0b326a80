use crate::duration::Duration;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A batch of formatting jobs loaded from a TOML file.
///
/// Every section is optional, but the file must name at least one job.
/// Unknown keys are rejected to catch typos.
///
/// ```toml
/// [[durations]]
/// hours = 1
/// minutes = 2
///
/// total_seconds = [59, 3661]
/// round_values = [2.345, 1.005]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobFile {
    /// Durations constructed field-wise; unspecified fields default to 0
    pub durations: Vec<Duration>,
    /// Total-second counts decomposed into hours/minutes/seconds
    pub total_seconds: Vec<u64>,
    /// Floats rounded to two decimal places
    pub round_values: Vec<f64>,
}

impl JobFile {
    /// Loads and validates a job file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if
    /// the TOML is malformed, contains unknown keys, or names no jobs at all.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let jobs: JobFile = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse job file: {e}")))?;

        if jobs.is_empty() {
            return Err(AppError::InvalidInput(
                "Job file must contain at least one duration, total_seconds, or round_values entry"
                    .into(),
            ));
        }

        Ok(jobs)
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty() && self.total_seconds.is_empty() && self.round_values.is_empty()
    }

    /// Total number of jobs across all sections.
    pub fn len(&self) -> usize {
        self.durations.len() + self.total_seconds.len() + self.round_values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn minimal_toml_is_parsed_and_defaults_apply() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            [[durations]]
            hours = 1
            minutes = 2
            "#,
        )
        .unwrap();

        let jobs = JobFile::from_toml_file(tmp.path()).unwrap();
        assert_eq!(jobs.durations.len(), 1);
        assert_eq!(jobs.durations[0], Duration::new(1, 2, 0));
        assert!(jobs.total_seconds.is_empty());
        assert!(jobs.round_values.is_empty());
        assert_eq!(jobs.len(), 1);
    }

    #[test]
    fn all_sections_are_parsed() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            total_seconds = [59, 3661]
            round_values = [2.345]

            [[durations]]
            seconds = 9
            "#,
        )
        .unwrap();

        let jobs = JobFile::from_toml_file(tmp.path()).unwrap();
        assert_eq!(jobs.total_seconds, vec![59, 3661]);
        assert_eq!(jobs.round_values, vec![2.345]);
        assert_eq!(jobs.durations[0].seconds, 9);
        assert_eq!(jobs.len(), 4);
    }

    #[test]
    fn empty_job_file_errors() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "").unwrap();
        assert!(JobFile::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn unknown_key_errors() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            total_seconds = [59]
            extra_flag = true
            "#,
        )
        .unwrap();

        assert!(JobFile::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn unknown_duration_field_errors() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            [[durations]]
            hours = 1
            days = 2
            "#,
        )
        .unwrap();

        assert!(JobFile::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn nonexistent_file_errors() {
        let result = JobFile::from_toml_file(Path::new("nonexistent.toml"));
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
