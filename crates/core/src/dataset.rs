//! The dataset produced by one grid-sampling pass.
//!
//! A [`Dataset`] holds one series of numbers per axis label: `t1`..`tN` carry
//! the grid coordinates, `value` carries the evaluated noise. All series of a
//! populated dataset have the same length, the total sample count. The struct
//! serializes with camelCase keys, the axis-label-keyed JSON shape the
//! browser client consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::grid::Lattice;
use crate::source::NoiseSource;

/// Label of the series holding evaluated noise values.
pub const VALUE_LABEL: &str = "value";

/// Label of the coordinate series for the given zero-based axis (`t1` for
/// axis 0, `t2` for axis 1, ...).
pub fn axis_label(axis: usize) -> String {
    format!("t{}", axis + 1)
}

/// Per-axis sample series over an axis-aligned bounding box.
///
/// Created empty via [`Dataset::new`], populated exactly once by
/// [`Dataset::generate`], and treated as immutable afterwards. The caller
/// owns it outright; nothing aliases the inputs it was generated from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    /// Axis label → sample series.
    pub raw_values: BTreeMap<String, Vec<f64>>,
    /// Lower bound per dimension.
    pub from: Vec<f64>,
    /// Upper (exclusive) bound per dimension.
    pub to: Vec<f64>,
    /// Samples per unit distance along every axis.
    pub resolution: u32,
    /// Identifier of the noise function that produced the data. Display
    /// metadata only; never used to recompute anything.
    pub noise_function: String,
}

impl Dataset {
    /// Creates an empty dataset tagged with a noise-function identifier.
    pub fn new(noise_function: impl Into<String>) -> Self {
        Self {
            noise_function: noise_function.into(),
            ..Self::default()
        }
    }

    /// Number of dimensions.
    pub fn dimension_count(&self) -> usize {
        self.from.len()
    }

    /// Number of samples in the dataset (zero before population).
    pub fn sample_count(&self) -> usize {
        self.raw_values
            .get(VALUE_LABEL)
            .map_or(0, |series| series.len())
    }

    /// The series stored under `label`, if any.
    pub fn series(&self, label: &str) -> Option<&[f64]> {
        self.raw_values.get(label).map(Vec::as_slice)
    }

    /// Samples `source` over the grid spanned by `from`/`to` at `resolution`
    /// samples per unit, filling this dataset's series.
    ///
    /// Grid points along each axis run from `from[i]` in steps of
    /// `1 / resolution`, up to but excluding `to[i]`; enumeration is
    /// row-major with the last dimension varying fastest. The bounds are
    /// copied in, never referenced.
    ///
    /// # Panics
    ///
    /// Panics if `from` and `to` differ in length or `resolution` is zero;
    /// both are caller contract violations.
    pub fn generate<S>(&mut self, from: &[f64], to: &[f64], resolution: u32, source: &S)
    where
        S: NoiseSource + ?Sized,
    {
        let lattice = Lattice::new(from, to, resolution);
        let total = lattice.len();

        let mut axes: Vec<Vec<f64>> = (0..lattice.dimension_count())
            .map(|_| Vec::with_capacity(total))
            .collect();
        let mut values = Vec::with_capacity(total);
        for point in lattice.points() {
            values.push(source.value(&point));
            for (axis, coordinate) in point.into_iter().enumerate() {
                axes[axis].push(coordinate);
            }
        }

        self.raw_values.clear();
        for (axis, series) in axes.into_iter().enumerate() {
            self.raw_values.insert(axis_label(axis), series);
        }
        self.raw_values.insert(VALUE_LABEL.to_string(), values);
        self.from = from.to_vec();
        self.to = to.to_vec();
        self.resolution = resolution;
    }

    /// Strict structural and value equality with another dataset.
    ///
    /// Bounds, label sets, series lengths, and every individual sample must
    /// match exactly: floating-point equality with no tolerance, so a
    /// divergence in the lowest-order bit is a mismatch. Symmetric and
    /// side-effect free; short-circuits on the first difference.
    ///
    /// `resolution` and `noise_function` do not participate; two datasets
    /// with identical bounds and series compare equal regardless of either.
    pub fn is_equal(&self, other: &Dataset) -> bool {
        if self.from != other.from || self.to != other.to {
            return false;
        }
        if self.raw_values.len() != other.raw_values.len() {
            return false;
        }
        for (label, series) in &self.raw_values {
            let theirs = match other.raw_values.get(label) {
                Some(series) => series,
                None => return false,
            };
            if series.len() != theirs.len() {
                return false;
            }
            if series.iter().zip(theirs).any(|(a, b)| a != b) {
                return false;
            }
        }
        true
    }

    /// Checks the structural invariants of a dataset that did not come from
    /// a local [`Dataset::generate`] call (typically one deserialized from
    /// JSON).
    ///
    /// An unpopulated dataset (empty series map) only needs matching bound
    /// lengths. A populated one additionally needs a positive resolution,
    /// exactly the labels `t1..tN` plus `value`, and every series sized to
    /// the lattice its bounds and resolution imply.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.from.len() != self.to.len() {
            return Err(ModelError::BoundsMismatch {
                from_len: self.from.len(),
                to_len: self.to.len(),
            });
        }
        if self.raw_values.is_empty() {
            return Ok(());
        }
        if self.resolution == 0 {
            return Err(ModelError::InvalidResolution);
        }

        let dimensions = self.from.len();
        for axis in 0..dimensions {
            let label = axis_label(axis);
            if !self.raw_values.contains_key(&label) {
                return Err(ModelError::MissingSeries(label));
            }
        }
        if !self.raw_values.contains_key(VALUE_LABEL) {
            return Err(ModelError::MissingSeries(VALUE_LABEL.to_string()));
        }
        for label in self.raw_values.keys() {
            if label != VALUE_LABEL && !(0..dimensions).any(|axis| *label == axis_label(axis)) {
                return Err(ModelError::UnexpectedSeries(label.clone()));
            }
        }

        let expected = Lattice::new(&self.from, &self.to, self.resolution).len();
        for (label, series) in &self.raw_values {
            if series.len() != expected {
                return Err(ModelError::SeriesLengthMismatch {
                    label: label.clone(),
                    expected,
                    got: series.len(),
                });
            }
        }
        Ok(())
    }
}
