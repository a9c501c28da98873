use super::domain::{FootprintResult, HabitInputs};
use super::factors::EmissionFactors;

/// Stateless calculator pricing household habits with linear emission factors.
#[derive(Debug, Clone, Default)]
pub struct FootprintCalculator {
    factors: EmissionFactors,
}

impl FootprintCalculator {
    pub fn new(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    /// Estimate the annual footprint for one household.
    ///
    /// Categories and total are rounded only here, at the output boundary; the
    /// total is summed from full-precision category values.
    pub fn compute(&self, inputs: &HabitInputs) -> FootprintResult {
        let factors = &self.factors;

        let food = factors.meat[inputs.meat_frequency.index()];

        let weekly = distance(inputs.car_km) * factors.car_per_km
            + distance(inputs.moto_km) * factors.moto_per_km
            + distance(inputs.public_km) * factors.public_per_km;
        let transport = weekly * factors.weeks_per_year;

        let mut home = factors.home_base;
        if inputs.uses_led {
            home -= factors.led_savings;
        }
        let home = home.max(0.0);

        let total = food + transport + home;

        FootprintResult {
            food: round2(food),
            transport: round2(transport),
            home: round2(home),
            total: round2(total),
        }
    }
}

/// Price `inputs` with the standard emission factors.
pub fn compute(inputs: &HabitInputs) -> FootprintResult {
    FootprintCalculator::default().compute(inputs)
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn distance(km: f64) -> f64 {
    if km.is_finite() && km > 0.0 {
        km
    } else {
        0.0
    }
}
