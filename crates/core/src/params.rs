//! Pure helper functions for extracting typed parameters from a
//! `serde_json::Value` object.
//!
//! Noise sources and the request-parsing edges configure themselves from
//! loosely-typed JSON objects. These helpers never fail: a missing key or a
//! wrong type falls back to the supplied default.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// the wrong type. JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `u32` from `params[name]`, returning `default` if missing,
/// negative, fractional, or too large for `u32`.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"frequency": 2.5});
        assert!((param_f64(&params, "frequency", 1.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_widens_integers() {
        let params = json!({"frequency": 3});
        assert!((param_f64(&params, "frequency", 1.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "frequency", 0.5) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_wrong_type() {
        let params = json!({"frequency": "high"});
        assert!((param_f64(&params, "frequency", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!([1, 2, 3]);
        assert!((param_f64(&params, "frequency", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    // -- param_u32 --

    #[test]
    fn param_u32_extracts_existing_integer() {
        let params = json!({"seed": 42});
        assert_eq!(param_u32(&params, "seed", 0), 42);
    }

    #[test]
    fn param_u32_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_u32(&params, "seed", 9), 9);
    }

    #[test]
    fn param_u32_returns_default_for_negative_value() {
        let params = json!({"seed": -1});
        assert_eq!(param_u32(&params, "seed", 5), 5);
    }

    #[test]
    fn param_u32_returns_default_for_fractional_value() {
        let params = json!({"seed": 1.5});
        assert_eq!(param_u32(&params, "seed", 5), 5);
    }

    #[test]
    fn param_u32_returns_default_for_overflow() {
        let params = json!({"seed": u64::MAX});
        assert_eq!(param_u32(&params, "seed", 5), 5);
    }
}
