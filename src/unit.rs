//! Unit definitions and their transforms to and from a category's
//! reference unit.

/// A single convertible unit within a category.
///
/// Every unit carries a pair of pure transforms mapping a value to and
/// from the category's reference unit. The pair is stored as plain
/// function pointers rather than a scale factor so each unit's formula
/// is applied exactly as written, including operation order; this
/// matters for the affine temperature units and keeps the linear ones
/// honest too.
///
/// Invariant: `from_base(to_base(x)) == x` for all finite `x`, up to
/// floating-point rounding.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
  name: &'static str,
  to_base: fn(f64) -> f64,
  from_base: fn(f64) -> f64,
}

impl UnitDef {
  /// Constructs a unit from its display name and transform pair.
  pub const fn new(
    name: &'static str,
    to_base: fn(f64) -> f64,
    from_base: fn(f64) -> f64,
  ) -> Self {
    Self { name, to_base, from_base }
  }

  /// Constructs a category's reference unit, whose transforms are both
  /// the identity.
  pub const fn reference(name: &'static str) -> Self {
    Self::new(name, identity, identity)
  }

  /// The human-readable name of this unit, such as `"meter"`.
  pub fn name(&self) -> &'static str {
    self.name
  }

  /// Converts a value in this unit to the category's reference unit.
  pub fn to_base(&self, value: f64) -> f64 {
    (self.to_base)(value)
  }

  /// Converts a value in the category's reference unit to this unit.
  pub fn from_base(&self, value: f64) -> f64 {
    (self.from_base)(value)
  }
}

fn identity(value: f64) -> f64 {
  value
}
