use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Athlete;

/// A competition lift, or the total of all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
    Total,
}

impl Lift {
    pub const ALL: [Lift; 4] = [Lift::Squat, Lift::Bench, Lift::Deadlift, Lift::Total];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Bench => "bench",
            Self::Deadlift => "deadlift",
            Self::Total => "total",
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Squat => "best_squat",
            Self::Bench => "best_bench",
            Self::Deadlift => "best_deadlift",
            Self::Total => "total",
        }
    }

    /// The athlete's stored value for this lift.
    pub fn value_of(&self, athlete: &Athlete) -> i32 {
        match self {
            Self::Squat => athlete.best_squat,
            Self::Bench => athlete.best_bench,
            Self::Deadlift => athlete.best_deadlift,
            Self::Total => athlete.total,
        }
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Self::Squat),
            "bench" => Ok(Self::Bench),
            "deadlift" => Ok(Self::Deadlift),
            "total" => Ok(Self::Total),
            other => Err(format!("unrecognized lift '{}'", other)),
        }
    }
}
