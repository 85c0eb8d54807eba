use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::classification::{
    is_male_weight_class_value, is_valid_weight_class_value, weight_classes_for,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_is_male(is_male: bool) -> Self {
        if is_male { Self::Male } else { Self::Female }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the stored form (`Male` / `Female`). User input goes through
/// [`crate::services::classification::resolve_gender_with`] instead.
impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

/// A body-weight band. `threshold_kg` is the upper bound of the band, except
/// for the `plus` class where it is the lower bound of an open-ended band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct WeightClass {
    pub threshold_kg: i32,
    pub plus: bool,
    pub gender: Gender,
}

impl WeightClass {
    /// Label used in URLs and pages, e.g. `66kg` or `120kg+`.
    pub fn label(&self) -> String {
        if self.plus {
            format!("{}kg+", self.threshold_kg)
        } else {
            format!("{}kg", self.threshold_kg)
        }
    }

    /// Parses a label such as `74kg` or `84kg+`.
    ///
    /// The gender is inferred from the threshold since the male and female
    /// tables do not overlap.
    pub fn from_label(label: &str) -> Result<Self, String> {
        let (weight, suffix) = label
            .split_once("kg")
            .ok_or_else(|| format!("weight class '{}' must end in 'kg' or 'kg+'", label))?;

        let plus = match suffix {
            "" => false,
            "+" => true,
            _ => {
                return Err(format!(
                    "weight class '{}' must end in 'kg' or 'kg+'",
                    label
                ));
            }
        };

        let threshold_kg: i32 = weight
            .parse()
            .map_err(|_| format!("weight class '{}' is not a number", weight))?;

        if !is_valid_weight_class_value(threshold_kg) {
            return Err(format!("{}kg is not a recognized weight class", threshold_kg));
        }

        let gender = Gender::from_is_male(is_male_weight_class_value(threshold_kg));
        let heaviest = weight_classes_for(gender).last().copied();

        if plus && heaviest != Some(threshold_kg) {
            return Err(format!(
                "only the heaviest {} class can be a plus class",
                gender.as_str().to_lowercase()
            ));
        }

        Ok(Self {
            threshold_kg,
            plus,
            gender,
        })
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gender, self.label())
    }
}
