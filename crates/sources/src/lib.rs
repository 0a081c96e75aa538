#![deny(unsafe_code)]
//! Source registry: maps noise-source names to implementations of the
//! [`NoiseSource`] capability.
//!
//! This crate sits between `terragen-core` (which defines the trait and
//! samples whatever it is handed) and the serving edges: the CLI and the
//! HTTP layer resolve a request's source name here and inject the result
//! into `Dataset::generate`. The noise math itself is delegated to the
//! `noise` crate; nothing in this workspace implements a generator.

use noise::{NoiseFn, OpenSimplex, Perlin};
use serde_json::Value;
use terragen_core::params::{param_f64, param_u32};
use terragen_core::{ModelError, NoiseSource};

/// All registered source names.
const SOURCE_NAMES: &[&str] = &["perlin", "simplex"];

/// Default generator seed when the params object carries none.
const DEFAULT_SEED: u32 = 0;
/// Default coordinate scale applied before sampling the generator.
const DEFAULT_FREQUENCY: f64 = 1.0;

/// Perlin gradient noise source.
pub struct PerlinSource {
    noise: Perlin,
    frequency: f64,
}

/// OpenSimplex gradient noise source, same shape as [`PerlinSource`].
pub struct SimplexSource {
    noise: OpenSimplex,
    frequency: f64,
}

impl PerlinSource {
    /// Creates a Perlin source with the given seed and coordinate frequency.
    pub fn new(seed: u32, frequency: f64) -> Self {
        Self {
            noise: Perlin::new(seed),
            frequency,
        }
    }

    /// Extracts `seed` and `frequency` from a JSON params object, falling
    /// back to the defaults.
    pub fn from_json(params: &Value) -> Self {
        Self::new(
            param_u32(params, "seed", DEFAULT_SEED),
            param_f64(params, "frequency", DEFAULT_FREQUENCY),
        )
    }
}

impl SimplexSource {
    /// Creates an OpenSimplex source with the given seed and frequency.
    pub fn new(seed: u32, frequency: f64) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
            frequency,
        }
    }

    /// Extracts `seed` and `frequency` from a JSON params object, falling
    /// back to the defaults.
    pub fn from_json(params: &Value) -> Self {
        Self::new(
            param_u32(params, "seed", DEFAULT_SEED),
            param_f64(params, "frequency", DEFAULT_FREQUENCY),
        )
    }
}

impl NoiseSource for PerlinSource {
    fn value(&self, t: &[f64]) -> f64 {
        sample_scaled(&self.noise, self.frequency, t)
    }
}

impl NoiseSource for SimplexSource {
    fn value(&self, t: &[f64]) -> f64 {
        sample_scaled(&self.noise, self.frequency, t)
    }
}

/// Scales coordinates by `frequency` and dispatches on dimension count.
///
/// The backing generators top out at four dimensions: coordinates below two
/// dimensions are zero-filled, coordinates past the fourth are ignored.
fn sample_scaled<N>(noise: &N, frequency: f64, t: &[f64]) -> f64
where
    N: NoiseFn<f64, 2> + NoiseFn<f64, 3> + NoiseFn<f64, 4>,
{
    let f = frequency;
    match t.len() {
        0 => NoiseFn::<f64, 2>::get(noise, [0.0, 0.0]),
        1 => NoiseFn::<f64, 2>::get(noise, [t[0] * f, 0.0]),
        2 => NoiseFn::<f64, 2>::get(noise, [t[0] * f, t[1] * f]),
        3 => NoiseFn::<f64, 3>::get(noise, [t[0] * f, t[1] * f, t[2] * f]),
        _ => NoiseFn::<f64, 4>::get(noise, [t[0] * f, t[1] * f, t[2] * f, t[3] * f]),
    }
}

/// Enumeration of all registered noise sources.
///
/// Wraps each source implementation and delegates [`NoiseSource`]. Use
/// [`SourceKind::from_name`] for string-based construction (CLI, HTTP).
pub enum SourceKind {
    /// Perlin gradient noise.
    Perlin(PerlinSource),
    /// OpenSimplex gradient noise.
    Simplex(SimplexSource),
}

impl SourceKind {
    /// Constructs a source by registry name.
    ///
    /// Returns `ModelError::UnknownSource` if the name is not registered.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, ModelError> {
        match name {
            "perlin" => Ok(SourceKind::Perlin(PerlinSource::from_json(params))),
            "simplex" => Ok(SourceKind::Simplex(SimplexSource::from_json(params))),
            _ => Err(ModelError::UnknownSource(name.to_string())),
        }
    }

    /// Returns a slice of all registered source names.
    pub fn list_sources() -> &'static [&'static str] {
        SOURCE_NAMES
    }
}

impl NoiseSource for SourceKind {
    fn value(&self, t: &[f64]) -> f64 {
        match self {
            SourceKind::Perlin(s) => s.value(t),
            SourceKind::Simplex(s) => s.value(t),
        }
    }
}
