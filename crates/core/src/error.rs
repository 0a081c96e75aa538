//! Error types for the terragen core.

use thiserror::Error;

/// Errors produced by dataset validation and source resolution.
///
/// Grid sampling itself has no error path: violating its preconditions is a
/// caller bug and panics instead (see [`crate::grid::Lattice::new`]).
#[derive(Debug, Error)]
pub enum ModelError {
    /// `from` and `to` disagree on the number of dimensions.
    #[error("bounds mismatch: from has {from_len} dimensions, to has {to_len}")]
    BoundsMismatch { from_len: usize, to_len: usize },

    /// A populated dataset carried a zero resolution.
    #[error("resolution must be a positive number of samples per unit")]
    InvalidResolution,

    /// A series required by the dataset's dimension count was absent.
    #[error("missing series '{0}'")]
    MissingSeries(String),

    /// A series was present that the dataset's dimension count does not allow.
    #[error("unexpected series '{0}'")]
    UnexpectedSeries(String),

    /// A series had a different length than the lattice prescribes.
    #[error("series '{label}' has {got} samples, expected {expected}")]
    SeriesLengthMismatch {
        label: String,
        expected: usize,
        got: usize,
    },

    /// A requested noise source name was not in the registry.
    #[error("unknown noise source: {0}")]
    UnknownSource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_mismatch_includes_both_lengths() {
        let err = ModelError::BoundsMismatch {
            from_len: 2,
            to_len: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains('2'), "missing from length in: {msg}");
        assert!(msg.contains('3'), "missing to length in: {msg}");
    }

    #[test]
    fn invalid_resolution_displays_readable_message() {
        let msg = format!("{}", ModelError::InvalidResolution);
        assert!(
            msg.contains("resolution"),
            "expected message mentioning resolution, got: {msg}"
        );
    }

    #[test]
    fn missing_series_includes_label() {
        let msg = format!("{}", ModelError::MissingSeries("t2".into()));
        assert!(msg.contains("t2"), "missing label in: {msg}");
    }

    #[test]
    fn unexpected_series_includes_label() {
        let msg = format!("{}", ModelError::UnexpectedSeries("t9".into()));
        assert!(msg.contains("t9"), "missing label in: {msg}");
    }

    #[test]
    fn series_length_mismatch_includes_all_fields() {
        let err = ModelError::SeriesLengthMismatch {
            label: "value".into(),
            expected: 16,
            got: 15,
        };
        let msg = format!("{err}");
        assert!(msg.contains("value"), "missing label in: {msg}");
        assert!(msg.contains("16"), "missing expected length in: {msg}");
        assert!(msg.contains("15"), "missing actual length in: {msg}");
    }

    #[test]
    fn unknown_source_includes_name() {
        let msg = format!("{}", ModelError::UnknownSource("teal".into()));
        assert!(msg.contains("teal"), "missing name in: {msg}");
    }

    #[test]
    fn model_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModelError>();
    }

    #[test]
    fn model_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ModelError>();
    }
}
