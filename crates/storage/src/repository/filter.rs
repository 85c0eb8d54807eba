use crate::models::{Athlete, Lift, WeightClass};

/// Lower bound on one of the stored lift values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftMinimum {
    pub lift: Lift,
    pub minimum: i32,
}

/// Conjunction of exact-match and range conditions. The default matches
/// every athlete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub weight_class: Option<WeightClass>,
    pub minimum: Option<LiftMinimum>,
}

impl AthleteFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive name match.
    pub fn by_name(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn in_weight_class(weight_class: WeightClass) -> Self {
        Self {
            weight_class: Some(weight_class),
            ..Self::default()
        }
    }

    pub fn at_least(lift: Lift, minimum: i32) -> Self {
        Self {
            minimum: Some(LiftMinimum { lift, minimum }),
            ..Self::default()
        }
    }

    pub fn matches(&self, athlete: &Athlete) -> bool {
        if let Some(ref first_name) = self.first_name
            && athlete.first_name != *first_name
        {
            return false;
        }

        if let Some(ref last_name) = self.last_name
            && athlete.last_name != *last_name
        {
            return false;
        }

        if let Some(weight_class) = self.weight_class
            && athlete.weight_class != weight_class
        {
            return false;
        }

        if let Some(LiftMinimum { lift, minimum }) = self.minimum
            && lift.value_of(athlete) < minimum
        {
            return false;
        }

        true
    }
}
