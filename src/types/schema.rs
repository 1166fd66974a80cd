use std::fmt;
use serde::{Deserialize, Serialize};

/// Measurement system used to present canonical values to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Schema {
    #[default]
    SI,
    ImperialUK,
}

impl Schema {
    pub const ALL: [Schema; 2] = [Schema::SI, Schema::ImperialUK];
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::SI => f.write_str("SI"),
            Schema::ImperialUK => f.write_str("Imperial UK"),
        }
    }
}
