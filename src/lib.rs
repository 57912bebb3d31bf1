//! Offline conversion of numeric values between units, within a fixed
//! set of measurement categories.
//!
//! Every category routes conversions through a single reference unit:
//! converting `a` to `b` computes `b.from_base(a.to_base(value))`. The
//! full category and unit table lives in [`registry`], built once per
//! process and never mutated afterward.
//!
//! The main entry point is [`convert`]:
//!
//! ```
//! let meters = unit_convert::convert(1.0, "length", "km", "m").unwrap();
//! assert_eq!(meters, 1000.0);
//! ```

pub mod category;
pub mod convert;
pub mod registry;
pub mod unit;

pub use category::Category;
pub use convert::{convert, ConversionError};
pub use registry::{registry, UnitRegistry, UnitTable};
pub use unit::UnitDef;
