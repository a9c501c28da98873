use serde::{Deserialize, Serialize};

/// Ordered meat consumption brackets offered by the habits form.
///
/// The discriminant doubles as the form's selector value and as the index into
/// the meat emission factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatFrequency {
    Rarely,
    Weekly,
    Frequently,
    Daily,
}

impl MeatFrequency {
    pub const fn ordered() -> [Self; 4] {
        [Self::Rarely, Self::Weekly, Self::Frequently, Self::Daily]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Rarely => 0,
            Self::Weekly => 1,
            Self::Frequently => 2,
            Self::Daily => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rarely => "Rarely or never",
            Self::Weekly => "Once or twice a week",
            Self::Frequently => "Most days of the week",
            Self::Daily => "Every day",
        }
    }
}

impl TryFrom<i64> for MeatFrequency {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rarely),
            1 => Ok(Self::Weekly),
            2 => Ok(Self::Frequently),
            3 => Ok(Self::Daily),
            other => Err(InputError::MeatFrequencyOutOfRange(other)),
        }
    }
}

/// Household habits captured by one form submission.
///
/// Distances are weekly kilometres. Negative or non-finite distances are
/// priced as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitInputs {
    pub meat_frequency: MeatFrequency,
    pub car_km: f64,
    pub moto_km: f64,
    pub public_km: f64,
    pub uses_led: bool,
}

/// Estimated annual footprint in metric tons CO2e, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub food: f64,
    pub transport: f64,
    pub home: f64,
    pub total: f64,
}

impl FootprintResult {
    /// Sum of the rounded categories; differs from `total` by at most one cent
    /// per category.
    pub fn category_sum(&self) -> f64 {
        self.food + self.transport + self.home
    }

    pub fn is_finite(&self) -> bool {
        [self.food, self.transport, self.home, self.total]
            .iter()
            .all(|value| value.is_finite())
    }
}

/// Validation failures for form input the calculator cannot price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("meat consumption bracket {0} is outside the supported range 0-3")]
    MeatFrequencyOutOfRange(i64),
    #[error("meat consumption '{0}' is not a bracket number")]
    MeatFrequencyNotInteger(String),
    #[error("weekly distances are too large to estimate a footprint")]
    FootprintOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_round_trip_through_their_index() {
        for frequency in MeatFrequency::ordered() {
            let parsed = MeatFrequency::try_from(frequency.index() as i64).expect("valid bracket");
            assert_eq!(parsed, frequency);
        }
    }

    #[test]
    fn rejects_brackets_outside_the_table() {
        assert_eq!(
            MeatFrequency::try_from(4),
            Err(InputError::MeatFrequencyOutOfRange(4))
        );
        assert_eq!(
            MeatFrequency::try_from(-1),
            Err(InputError::MeatFrequencyOutOfRange(-1))
        );
    }
}
