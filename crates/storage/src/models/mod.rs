mod athlete;
mod lift;
mod weight_class;
mod workout;

pub use athlete::{Athlete, LiftsUpdate};
pub use lift::Lift;
pub use weight_class::{Gender, WeightClass};
pub use workout::{Workout, WorkoutEntry};
