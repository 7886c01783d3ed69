//! Option exercise definitions.

use pricer_core::types::Date;

use super::error::InstrumentError;

/// When an option can be exercised.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any date in a window
/// - `Bermudan`: Exercise on specified dates
///
/// # Examples
/// ```
/// use pricer_models::instruments::Exercise;
/// use pricer_core::types::Date;
///
/// let expiry = Date::from_ymd(2026, 1, 1).unwrap();
/// let european = Exercise::european(expiry);
/// assert!(european.is_european());
/// assert_eq!(european.last_date(), expiry);
///
/// let bermudan = Exercise::bermudan(vec![
///     Date::from_ymd(2025, 7, 1).unwrap(),
///     expiry,
/// ]).unwrap();
/// assert_eq!(bermudan.last_date(), expiry);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Exercise {
    /// European style: exercise only at expiry.
    European {
        /// Expiry date
        date: Date,
    },

    /// American style: exercise at any date in `[earliest, latest]`.
    American {
        /// First exercise date
        earliest: Date,
        /// Last exercise date
        latest: Date,
    },

    /// Bermudan style: exercise on specific dates.
    Bermudan(ExerciseDates),
}

/// Non-empty, strictly increasing list of exercise dates.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDates {
    dates: Vec<Date>,
}

impl ExerciseDates {
    /// Exercise dates in increasing order.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Last exercise date.
    #[inline]
    pub fn last(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }
}

impl Exercise {
    /// European exercise at `date`.
    #[inline]
    pub fn european(date: Date) -> Self {
        Exercise::European { date }
    }

    /// American exercise window.
    ///
    /// # Errors
    /// `InstrumentError::InvalidExerciseSchedule` if `earliest > latest`.
    pub fn american(earliest: Date, latest: Date) -> Result<Self, InstrumentError> {
        if earliest > latest {
            return Err(InstrumentError::InvalidExerciseSchedule {
                message: format!("earliest {} after latest {}", earliest, latest),
            });
        }
        Ok(Exercise::American { earliest, latest })
    }

    /// Bermudan exercise on `dates`.
    ///
    /// # Errors
    /// `InstrumentError::InvalidExerciseSchedule` if `dates` is empty or
    /// not strictly increasing.
    pub fn bermudan(dates: Vec<Date>) -> Result<Self, InstrumentError> {
        if dates.is_empty() {
            return Err(InstrumentError::InvalidExerciseSchedule {
                message: "no exercise dates".to_string(),
            });
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(InstrumentError::InvalidExerciseSchedule {
                message: "exercise dates must be strictly increasing".to_string(),
            });
        }
        Ok(Exercise::Bermudan(ExerciseDates { dates }))
    }

    /// Final date on which the option can be exercised.
    pub fn last_date(&self) -> Date {
        match self {
            Exercise::European { date } => *date,
            Exercise::American { latest, .. } => *latest,
            Exercise::Bermudan(dates) => dates.last(),
        }
    }

    /// Returns whether this is European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, Exercise::European { .. })
    }

    /// Exercise style name.
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::European { .. } => "European",
            Exercise::American { .. } => "American",
            Exercise::Bermudan(_) => "Bermudan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_american_last_date() {
        let ex = Exercise::american(d(2025, 1, 1), d(2025, 12, 31)).unwrap();
        assert_eq!(ex.last_date(), d(2025, 12, 31));
        assert!(!ex.is_european());
        assert_eq!(ex.name(), "American");
    }

    #[test]
    fn test_american_rejects_inverted_window() {
        assert!(Exercise::american(d(2026, 1, 1), d(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_bermudan_rejects_empty_and_unsorted() {
        assert!(Exercise::bermudan(vec![]).is_err());
        assert!(Exercise::bermudan(vec![d(2025, 6, 1), d(2025, 3, 1)]).is_err());
    }
}
