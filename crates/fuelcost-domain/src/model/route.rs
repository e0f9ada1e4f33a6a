//! Fixed travel routes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use fuelcost_types::Error;

/// A fixed route with a constant length and a difficulty multiplier
///
/// The efficiency factor scales the vehicle's efficiency: below 1.0 the route
/// costs more fuel per distance unit than nominal, above 1.0 it costs less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Backroad,
    Highway,
}

impl Route {
    /// Every route, in display order
    pub const ALL: [Route; 2] = [Route::Backroad, Route::Highway];

    /// Iterate over every route. Each call starts a fresh iterator.
    pub fn all() -> impl Iterator<Item = Route> + Clone {
        Self::ALL.into_iter()
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Route::Backroad => "Country road",
            Route::Highway => "Highway",
        }
    }

    /// Identifier accepted on the command line and used in JSON output
    pub fn slug(self) -> &'static str {
        match self {
            Route::Backroad => "backroad",
            Route::Highway => "highway",
        }
    }

    /// Route length in distance units
    pub fn distance(self) -> f64 {
        match self {
            Route::Backroad => 2324.5,
            Route::Highway => 2558.3,
        }
    }

    pub fn efficiency_factor(self) -> f64 {
        match self {
            Route::Backroad => 0.9,
            Route::Highway => 1.1,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "backroad" | "country-road" => Ok(Route::Backroad),
            "highway" => Ok(Route::Highway),
            _ => Err(Error::InvalidInput(format!(
                "unknown route {:?} (expected one of: backroad, highway)",
                s
            ))),
        }
    }
}
