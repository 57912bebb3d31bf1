//! The closed set of measurement categories.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// A family of commensurable units. Every unit in the registry belongs
/// to exactly one category, and conversions never cross category
/// boundaries.
///
/// The string form of a category (as accepted by [`FromStr`] and
/// produced by [`Display`]) is its lowercase tag, such as `"length"`
/// or `"fuel"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Length,
  Mass,
  Temperature,
  Area,
  Volume,
  Time,
  Speed,
  Data,
  Power,
  Energy,
  Fuel,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown category: {input}")]
pub struct ParseCategoryError {
  pub input: String,
}

impl Category {
  /// All categories, in declaration order.
  pub const ALL: [Category; 11] = [
    Category::Length,
    Category::Mass,
    Category::Temperature,
    Category::Area,
    Category::Volume,
    Category::Time,
    Category::Speed,
    Category::Data,
    Category::Power,
    Category::Energy,
    Category::Fuel,
  ];

  /// The lowercase string tag for this category.
  pub fn code(self) -> &'static str {
    match self {
      Category::Length => "length",
      Category::Mass => "mass",
      Category::Temperature => "temperature",
      Category::Area => "area",
      Category::Volume => "volume",
      Category::Time => "time",
      Category::Speed => "speed",
      Category::Data => "data",
      Category::Power => "power",
      Category::Energy => "energy",
      Category::Fuel => "fuel",
    }
  }
}

impl ParseCategoryError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Category {
  type Err = ParseCategoryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "length" => Ok(Category::Length),
      "mass" => Ok(Category::Mass),
      "temperature" => Ok(Category::Temperature),
      "area" => Ok(Category::Area),
      "volume" => Ok(Category::Volume),
      "time" => Ok(Category::Time),
      "speed" => Ok(Category::Speed),
      "data" => Ok(Category::Data),
      "power" => Ok(Category::Power),
      "energy" => Ok(Category::Energy),
      "fuel" => Ok(Category::Fuel),
      _ => Err(ParseCategoryError::new(s)),
    }
  }
}
