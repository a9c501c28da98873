use super::domain::FootprintResult;
use serde::{Deserialize, Serialize};

const FOOD_THRESHOLD: f64 = 1.0;
const TRANSPORT_HIGH_THRESHOLD: f64 = 1.5;
const TRANSPORT_MODERATE_THRESHOLD: f64 = 0.5;
const HOME_THRESHOLD: f64 = 1.0;

/// Footprint area a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Food,
    Transport,
    Home,
    Overall,
}

impl RecommendationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Home => "Home",
            Self::Overall => "Overall",
        }
    }
}

/// Pre-authored advice selected by the result thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    ReduceRedMeat,
    UsePublicTransport,
    MaintainMotorcycle,
    SwitchToLed,
    /// Fallback shown only when no other recommendation applies.
    AlreadyLowFootprint,
}

impl Recommendation {
    pub const fn id(self) -> &'static str {
        match self {
            Self::ReduceRedMeat => "reduce-red-meat",
            Self::UsePublicTransport => "use-public-transport",
            Self::MaintainMotorcycle => "maintain-motorcycle",
            Self::SwitchToLed => "switch-to-led",
            Self::AlreadyLowFootprint => "already-low-footprint",
        }
    }

    pub const fn category(self) -> RecommendationCategory {
        match self {
            Self::ReduceRedMeat => RecommendationCategory::Food,
            Self::UsePublicTransport | Self::MaintainMotorcycle => {
                RecommendationCategory::Transport
            }
            Self::SwitchToLed => RecommendationCategory::Home,
            Self::AlreadyLowFootprint => RecommendationCategory::Overall,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::ReduceRedMeat => {
                "Consider eating less red meat. Swapping it for chicken, fish or vegetables once a week can make a big difference."
            }
            Self::UsePublicTransport => {
                "Try to use public transport, cycle or walk for short trips. Car sharing is also an excellent option."
            }
            Self::MaintainMotorcycle => {
                "If you ride a motorcycle often, keep it properly maintained to optimize fuel consumption."
            }
            Self::SwitchToLed => {
                "If you have not done so yet, switching all your bulbs to LED technology can significantly reduce your electricity use."
            }
            Self::AlreadyLowFootprint => {
                "Congratulations! Your carbon footprint is relatively low. Keep it up."
            }
        }
    }
}

/// Derive the ordered advice list for a stored result.
///
/// Food, transport and home rules fire independently and in that order; the
/// two transport rules are mutually exclusive. The fallback is returned alone
/// when nothing else fires.
pub fn recommend(result: &FootprintResult) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(3);

    if result.food > FOOD_THRESHOLD {
        recommendations.push(Recommendation::ReduceRedMeat);
    }

    if result.transport > TRANSPORT_HIGH_THRESHOLD {
        recommendations.push(Recommendation::UsePublicTransport);
    } else if result.transport > TRANSPORT_MODERATE_THRESHOLD {
        recommendations.push(Recommendation::MaintainMotorcycle);
    }

    if result.home > HOME_THRESHOLD {
        recommendations.push(Recommendation::SwitchToLed);
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation::AlreadyLowFootprint);
    }

    recommendations
}
