//! Option exercise schedules.
//!
//! An `Exercise` defines *when* an option can be exercised. Lattice engines
//! read the last exercise date as the option's maturity.

use lg_time::Date;
use std::fmt;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any time up to expiry.
    American,
}

/// Exercise terms of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    exercise_type: ExerciseType,
    earliest: Date,
    latest: Date,
}

impl Exercise {
    /// Create a European exercise (single expiry date).
    pub fn european(expiry: Date) -> Self {
        Self {
            exercise_type: ExerciseType::European,
            earliest: expiry,
            latest: expiry,
        }
    }

    /// Create an American exercise window. The bounds are reordered if
    /// given backwards.
    pub fn american(earliest: Date, latest: Date) -> Self {
        Self {
            exercise_type: ExerciseType::American,
            earliest: earliest.min(latest),
            latest: earliest.max(latest),
        }
    }

    /// The last possible exercise date.
    pub fn last_date(&self) -> Date {
        self.latest
    }

    /// The first possible exercise date.
    pub fn first_date(&self) -> Date {
        self.earliest
    }

    /// The type of exercise.
    pub fn exercise_type(&self) -> ExerciseType {
        self.exercise_type
    }

    /// Whether the holder may exercise before the last date.
    pub fn allows_early_exercise(&self) -> bool {
        self.exercise_type == ExerciseType::American
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exercise_type {
            ExerciseType::European => write!(f, "European({})", self.latest),
            ExerciseType::American => write!(f, "American({} – {})", self.earliest, self.latest),
        }
    }
}
