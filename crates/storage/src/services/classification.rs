//! Weight-class classification.
//!
//! Each table lists the upper bound of every class in ascending order. The
//! last entry doubles as the lower bound of the open-ended "plus" class.

use crate::models::{Gender, WeightClass};

pub const MALE_WEIGHT_CLASSES: [i32; 7] = [59, 66, 74, 83, 93, 105, 120];
pub const FEMALE_WEIGHT_CLASSES: [i32; 6] = [47, 52, 57, 63, 72, 84];

/// How to treat a gender string that is neither "male" nor "female".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderPolicy {
    /// Anything other than "male" falls back to the female table.
    #[default]
    Lenient,
    /// Only "male" and "female" are accepted.
    Strict,
}

impl GenderPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

pub fn weight_classes_for(gender: Gender) -> &'static [i32] {
    match gender {
        Gender::Male => &MALE_WEIGHT_CLASSES,
        Gender::Female => &FEMALE_WEIGHT_CLASSES,
    }
}

/// True iff `input` is "male", ignoring case.
pub fn resolve_gender(input: &str) -> bool {
    input.to_lowercase() == "male"
}

pub fn resolve_gender_with(input: &str, policy: GenderPolicy) -> Option<Gender> {
    match policy {
        GenderPolicy::Lenient => Some(Gender::from_is_male(resolve_gender(input))),
        GenderPolicy::Strict => match input.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        },
    }
}

pub fn is_male_weight_class_value(weight: i32) -> bool {
    MALE_WEIGHT_CLASSES.contains(&weight)
}

pub fn is_valid_weight_class_value(weight: i32) -> bool {
    MALE_WEIGHT_CLASSES.contains(&weight) || FEMALE_WEIGHT_CLASSES.contains(&weight)
}

/// Places a body weight into its class.
///
/// The weight is truncated to whole kilograms, then matched against the first
/// threshold strictly above it. A weight sitting exactly on a threshold
/// therefore lands in the next class up, except on the heaviest threshold,
/// which is the plus class.
pub fn classify(weight_kg: f64, is_male: bool) -> WeightClass {
    let gender = Gender::from_is_male(is_male);
    let table = weight_classes_for(gender);
    let weight = weight_kg.trunc() as i64;

    match table.iter().find(|&&threshold| weight < i64::from(threshold)) {
        Some(&threshold_kg) => WeightClass {
            threshold_kg,
            plus: false,
            gender,
        },
        None => WeightClass {
            threshold_kg: table[table.len() - 1],
            plus: true,
            gender,
        },
    }
}
