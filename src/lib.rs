//! Physical quantity units for a millimeter-based CAD model
//!
//! Values are held in a canonical unit per [`Dimension`] and translated to
//! the display units of a [`Schema`]. User input such as `"25.4mm"` or
//! `"90°"` is parsed back into a literal, a factor and a dimension.

pub mod types;
pub mod tables;
pub mod translate;
pub mod parse;
pub mod settings;

pub use types::*;
pub use translate::{translate, translate_point, translate_quantity, translate_ranged};
pub use parse::{parse_quantity, parse_quantity_with, ParseError, ParsedQuantity};
pub use settings::{SettingsError, UnitSettings};
