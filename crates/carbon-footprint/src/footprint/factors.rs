/// Annual tons CO2e for each meat consumption bracket, lowest first.
pub const MEAT_FACTORS: [f64; 4] = [0.6, 1.5, 2.5, 3.3];
/// Tons CO2e per kilometre driven by car.
pub const CAR_FACTOR_PER_KM: f64 = 0.17;
/// Tons CO2e per kilometre ridden by motorcycle.
pub const MOTO_FACTOR_PER_KM: f64 = 0.09;
/// Tons CO2e per kilometre travelled on public transport.
pub const PUBLIC_FACTOR_PER_KM: f64 = 0.04;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Baseline household electricity footprint without LED lighting.
pub const HOME_BASE: f64 = 1.2;
/// Annual reduction credited when the household lights with LEDs.
pub const LED_SAVINGS: f64 = 0.4;

/// Linear emission factors applied by the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    pub meat: [f64; 4],
    pub car_per_km: f64,
    pub moto_per_km: f64,
    pub public_per_km: f64,
    pub weeks_per_year: f64,
    pub home_base: f64,
    pub led_savings: f64,
}

impl EmissionFactors {
    pub const fn standard() -> Self {
        Self {
            meat: MEAT_FACTORS,
            car_per_km: CAR_FACTOR_PER_KM,
            moto_per_km: MOTO_FACTOR_PER_KM,
            public_per_km: PUBLIC_FACTOR_PER_KM,
            weeks_per_year: WEEKS_PER_YEAR,
            home_base: HOME_BASE,
            led_savings: LED_SAVINGS,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::standard()
    }
}
