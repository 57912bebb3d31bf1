//! The validating conversion entry point.

use thiserror::Error;

use crate::category::Category;
use crate::registry::registry;

/// An error produced by [`convert`]. Neither kind is recoverable by
/// the library; the caller must supply identifiers from the registry's
/// closed sets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
  /// The supplied category tag is not one of the known categories.
  #[error("Unknown category: {0}")]
  UnknownCategory(String),
  /// The supplied unit code is not defined within the (valid) category.
  #[error("Unknown unit: {0}")]
  UnknownUnit(String),
}

/// Converts `value` from `from_unit` to `to_unit` within `category`.
///
/// Inputs are validated before any arithmetic runs: the category is
/// checked first, then `from_unit`, then `to_unit`, so when both units
/// are invalid the `from_unit` error is the one reported. When the two
/// unit codes are equal, `value` is returned unchanged rather than
/// routed through the reference unit, so the no-op case is exact.
///
/// ```
/// use unit_convert::convert;
///
/// assert_eq!(convert(100.0, "temperature", "C", "F").unwrap(), 212.0);
/// assert!(convert(1.0, "length", "m", "lightyear").is_err());
/// ```
pub fn convert(
  value: f64,
  category: &str,
  from_unit: &str,
  to_unit: &str,
) -> Result<f64, ConversionError> {
  let category: Category = category.parse()
    .map_err(|_| ConversionError::UnknownCategory(category.to_owned()))?;
  let units = registry().units(category);
  let from = units.get(from_unit)
    .ok_or_else(|| ConversionError::UnknownUnit(from_unit.to_owned()))?;
  let to = units.get(to_unit)
    .ok_or_else(|| ConversionError::UnknownUnit(to_unit.to_owned()))?;

  if from_unit == to_unit {
    return Ok(value);
  }
  Ok(to.from_base(from.to_base(value)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::{assert_abs_diff_eq, assert_relative_eq};

  #[test]
  fn test_length_conversion() {
    assert_eq!(convert(1.0, "length", "km", "m").unwrap(), 1000.0);
    assert_eq!(convert(1.0, "length", "in", "m").unwrap(), 0.0254);
    assert_abs_diff_eq!(
      convert(1.0, "length", "mi", "km").unwrap(),
      1.609344,
      epsilon = 1e-9
    );
  }

  #[test]
  fn test_temperature_conversion() {
    assert_eq!(convert(100.0, "temperature", "C", "F").unwrap(), 212.0);
    assert_eq!(convert(32.0, "temperature", "F", "C").unwrap(), 0.0);
    assert_eq!(convert(0.0, "temperature", "C", "K").unwrap(), 273.15);
    assert_abs_diff_eq!(
      convert(451.0, "temperature", "F", "K").unwrap(),
      505.9277777777778,
      epsilon = 1e-9
    );
  }

  #[test]
  fn test_mass_conversion() {
    assert_eq!(convert(1.0, "mass", "lb", "g").unwrap(), 453.59237);
    assert_abs_diff_eq!(
      convert(16.0, "mass", "oz", "lb").unwrap(),
      1.0,
      epsilon = 1e-9
    );
  }

  #[test]
  fn test_data_conversion() {
    assert_eq!(convert(1.0, "data", "GB", "MB").unwrap(), 1024.0);
    assert_eq!(convert(1.0, "data", "TB", "KB").unwrap(), 1024.0 * 1024.0 * 1024.0);
  }

  #[test]
  fn test_speed_conversion() {
    assert_relative_eq!(
      convert(60.0, "speed", "km/h", "m/s").unwrap(),
      50.0 / 3.0,
      max_relative = 1e-9
    );
  }

  #[test]
  fn test_fuel_conversion() {
    assert_eq!(convert(1.0, "fuel", "mpg", "km/l").unwrap(), 0.425144);
  }

  #[test]
  fn test_identity_is_exact() {
    // 0.1 + 0.2 is deliberately not representable cleanly; the
    // short-circuit must hand it back bit-for-bit.
    let awkward = 0.1 + 0.2;
    assert_eq!(convert(awkward, "length", "m", "m").unwrap(), awkward);
    assert_eq!(convert(awkward, "temperature", "F", "F").unwrap(), awkward);
    assert_eq!(convert(-40.0, "temperature", "K", "K").unwrap(), -40.0);
  }

  #[test]
  fn test_round_trip_every_unit_pair() {
    let registry = registry();
    for category in Category::ALL {
      let units = registry.units(category);
      for a in units.keys() {
        for b in units.keys() {
          let there = convert(12.5, category.code(), a, b).unwrap();
          let back = convert(there, category.code(), b, a).unwrap();
          assert_relative_eq!(back, 12.5, max_relative = 1e-9);
        }
      }
    }
  }

  #[test]
  fn test_base_invariance() {
    // Converting 1 of any unit to the reference yields to_base(1).
    assert_eq!(convert(1.0, "length", "ft", "m").unwrap(), 0.3048);
    assert_eq!(convert(1.0, "area", "ac", "m2").unwrap(), 4046.8564224);
    assert_eq!(convert(1.0, "volume", "gal", "l").unwrap(), 3.78541);
    assert_eq!(convert(1.0, "time", "w", "s").unwrap(), 604800.0);
    assert_eq!(convert(1.0, "power", "hp", "W").unwrap(), 745.699872);
    assert_eq!(convert(1.0, "energy", "kcal", "J").unwrap(), 4184.0);
  }

  #[test]
  fn test_unknown_category() {
    let err = convert(1.0, "bogus", "m", "cm").unwrap_err();
    assert_eq!(err, ConversionError::UnknownCategory("bogus".to_owned()));
    assert_eq!(err.to_string(), "Unknown category: bogus");
  }

  #[test]
  fn test_unknown_unit() {
    let err = convert(1.0, "length", "m", "lightyear").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("lightyear".to_owned()));
    assert_eq!(err.to_string(), "Unknown unit: lightyear");

    let err = convert(1.0, "length", "lightyear", "m").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("lightyear".to_owned()));
  }

  #[test]
  fn test_validation_order() {
    // Category outranks units; from_unit outranks to_unit.
    let err = convert(1.0, "bogus", "nope", "nah").unwrap_err();
    assert_eq!(err, ConversionError::UnknownCategory("bogus".to_owned()));

    let err = convert(1.0, "length", "nope", "nah").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("nope".to_owned()));
  }

  #[test]
  fn test_unit_known_only_in_other_category() {
    // "kg" exists, but not under length.
    let err = convert(1.0, "length", "kg", "m").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("kg".to_owned()));
  }

  #[test]
  fn test_identity_short_circuit_requires_valid_inputs() {
    // Validation runs even when from == to.
    let err = convert(1.0, "length", "lightyear", "lightyear").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("lightyear".to_owned()));
  }
}
