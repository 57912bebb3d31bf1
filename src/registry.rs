//! The authoritative table of categories and their convertible units.

use once_cell::sync::Lazy;

use crate::category::Category;
use crate::unit::UnitDef;

use std::collections::HashMap;

/// The unit mapping for a single category, keyed by unit code.
pub type UnitTable = HashMap<&'static str, UnitDef>;

/// An immutable mapping from [`Category`] to that category's
/// [`UnitTable`]. The process-wide instance is available through
/// [`registry`]; it is built once and never mutated, so it can be
/// shared freely across threads.
#[derive(Debug)]
pub struct UnitRegistry {
  categories: HashMap<Category, UnitTable>,
}

static REGISTRY: Lazy<UnitRegistry> =
  Lazy::new(UnitRegistry::standard);

/// The shared registry holding the standard unit table.
pub fn registry() -> &'static UnitRegistry {
  &REGISTRY
}

impl UnitRegistry {
  /// Builds the standard registry, covering every [`Category`].
  pub fn standard() -> Self {
    let categories = HashMap::from([
      (Category::Length, length_units()),
      (Category::Mass, mass_units()),
      (Category::Temperature, temperature_units()),
      (Category::Area, area_units()),
      (Category::Volume, volume_units()),
      (Category::Time, time_units()),
      (Category::Speed, speed_units()),
      (Category::Data, data_units()),
      (Category::Power, power_units()),
      (Category::Energy, energy_units()),
      (Category::Fuel, fuel_units()),
    ]);
    debug_assert_eq!(categories.len(), Category::ALL.len());
    Self { categories }
  }

  /// The unit table for the given category.
  pub fn units(&self, category: Category) -> &UnitTable {
    // standard() populates every Category variant.
    &self.categories[&category]
  }

  /// Looks up a unit code within a category. Returns `None` if the
  /// code is not defined for that category, even if it exists under a
  /// different one.
  pub fn get(&self, category: Category, code: &str) -> Option<&UnitDef> {
    self.units(category).get(code)
  }
}

fn length_units() -> UnitTable {
  HashMap::from([
    ("m", UnitDef::reference("meter")),
    ("cm", UnitDef::new("centimeter", |v| v / 100.0, |v| v * 100.0)),
    ("mm", UnitDef::new("millimeter", |v| v / 1000.0, |v| v * 1000.0)),
    ("km", UnitDef::new("kilometer", |v| v * 1000.0, |v| v / 1000.0)),
    ("in", UnitDef::new("inch", |v| v * 0.0254, |v| v / 0.0254)),
    ("ft", UnitDef::new("foot", |v| v * 0.3048, |v| v / 0.3048)),
    ("yd", UnitDef::new("yard", |v| v * 0.9144, |v| v / 0.9144)),
    ("mi", UnitDef::new("mile", |v| v * 1609.344, |v| v / 1609.344)),
  ])
}

fn mass_units() -> UnitTable {
  HashMap::from([
    ("g", UnitDef::reference("gram")),
    ("kg", UnitDef::new("kilogram", |v| v * 1000.0, |v| v / 1000.0)),
    ("mg", UnitDef::new("milligram", |v| v / 1000.0, |v| v * 1000.0)),
    ("lb", UnitDef::new("pound", |v| v * 453.59237, |v| v / 453.59237)),
    ("oz", UnitDef::new("ounce", |v| v * 28.349523125, |v| v / 28.349523125)),
    ("t", UnitDef::new("ton", |v| v * 1_000_000.0, |v| v / 1_000_000.0)),
  ])
}

fn temperature_units() -> UnitTable {
  HashMap::from([
    ("C", UnitDef::reference("Celsius")),
    ("F", UnitDef::new("Fahrenheit", |v| (v - 32.0) * 5.0 / 9.0, |v| v * 9.0 / 5.0 + 32.0)),
    ("K", UnitDef::new("Kelvin", |v| v - 273.15, |v| v + 273.15)),
  ])
}

fn area_units() -> UnitTable {
  HashMap::from([
    ("m2", UnitDef::reference("square meter")),
    ("cm2", UnitDef::new("square centimeter", |v| v / 10_000.0, |v| v * 10_000.0)),
    ("mm2", UnitDef::new("square millimeter", |v| v / 1_000_000.0, |v| v * 1_000_000.0)),
    ("km2", UnitDef::new("square kilometer", |v| v * 1_000_000.0, |v| v / 1_000_000.0)),
    ("ft2", UnitDef::new("square foot", |v| v * 0.09290304, |v| v / 0.09290304)),
    ("in2", UnitDef::new("square inch", |v| v * 0.00064516, |v| v / 0.00064516)),
    ("ac", UnitDef::new("acre", |v| v * 4046.8564224, |v| v / 4046.8564224)),
    ("ha", UnitDef::new("hectare", |v| v * 10_000.0, |v| v / 10_000.0)),
  ])
}

fn volume_units() -> UnitTable {
  HashMap::from([
    ("l", UnitDef::reference("liter")),
    ("ml", UnitDef::new("milliliter", |v| v / 1000.0, |v| v * 1000.0)),
    ("m3", UnitDef::new("cubic meter", |v| v * 1000.0, |v| v / 1000.0)),
    ("cm3", UnitDef::new("cubic centimeter", |v| v / 1000.0, |v| v * 1000.0)),
    ("gal", UnitDef::new("US gallon", |v| v * 3.78541, |v| v / 3.78541)),
    ("pt", UnitDef::new("US pint", |v| v * 0.473176, |v| v / 0.473176)),
  ])
}

fn time_units() -> UnitTable {
  HashMap::from([
    ("s", UnitDef::reference("second")),
    ("ms", UnitDef::new("millisecond", |v| v / 1000.0, |v| v * 1000.0)),
    ("min", UnitDef::new("minute", |v| v * 60.0, |v| v / 60.0)),
    ("h", UnitDef::new("hour", |v| v * 3600.0, |v| v / 3600.0)),
    ("d", UnitDef::new("day", |v| v * 86400.0, |v| v / 86400.0)),
    ("w", UnitDef::new("week", |v| v * 604800.0, |v| v / 604800.0)),
    ("y", UnitDef::new("year", |v| v * 31_536_000.0, |v| v / 31_536_000.0)),
  ])
}

fn speed_units() -> UnitTable {
  HashMap::from([
    ("m/s", UnitDef::reference("meters per second")),
    ("km/h", UnitDef::new("kilometers per hour", |v| v / 3.6, |v| v * 3.6)),
    ("mph", UnitDef::new("miles per hour", |v| v * 0.44704, |v| v / 0.44704)),
    ("knot", UnitDef::new("knot", |v| v * 0.514444, |v| v / 0.514444)),
  ])
}

fn data_units() -> UnitTable {
  HashMap::from([
    ("B", UnitDef::reference("byte")),
    ("KB", UnitDef::new("kilobyte", |v| v * 1024.0, |v| v / 1024.0)),
    ("MB", UnitDef::new("megabyte", |v| v * 1024.0 * 1024.0, |v| v / (1024.0 * 1024.0))),
    ("GB", UnitDef::new("gigabyte", |v| v * 1024.0 * 1024.0 * 1024.0, |v| v / (1024.0 * 1024.0 * 1024.0))),
    ("TB", UnitDef::new("terabyte", |v| v * 1024.0 * 1024.0 * 1024.0 * 1024.0, |v| v / (1024.0 * 1024.0 * 1024.0 * 1024.0))),
  ])
}

fn power_units() -> UnitTable {
  HashMap::from([
    ("W", UnitDef::reference("watt")),
    ("kW", UnitDef::new("kilowatt", |v| v * 1000.0, |v| v / 1000.0)),
    ("MW", UnitDef::new("megawatt", |v| v * 1_000_000.0, |v| v / 1_000_000.0)),
    ("hp", UnitDef::new("horsepower", |v| v * 745.699872, |v| v / 745.699872)),
  ])
}

fn energy_units() -> UnitTable {
  HashMap::from([
    ("J", UnitDef::reference("joule")),
    ("kJ", UnitDef::new("kilojoule", |v| v * 1000.0, |v| v / 1000.0)),
    ("Wh", UnitDef::new("watt hour", |v| v * 3600.0, |v| v / 3600.0)),
    ("kWh", UnitDef::new("kilowatt hour", |v| v * 3_600_000.0, |v| v / 3_600_000.0)),
    ("cal", UnitDef::new("calorie", |v| v * 4.184, |v| v / 4.184)),
    ("kcal", UnitDef::new("kilocalorie", |v| v * 4184.0, |v| v / 4184.0)),
  ])
}

fn fuel_units() -> UnitTable {
  // km/l serves as the reference unit by convention; it is not an SI
  // base, but every fuel-economy conversion routes through it.
  HashMap::from([
    ("km/l", UnitDef::reference("kilometer per liter")),
    ("mpg", UnitDef::new("miles per gallon", |v| v * 0.425144, |v| v / 0.425144)),
  ])
}
