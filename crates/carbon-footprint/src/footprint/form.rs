use super::domain::{HabitInputs, InputError, MeatFrequency};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw habits form payload, keyed by the form's field names.
///
/// Every field is kept as submitted text; JSON numbers and booleans are
/// accepted and stringified so API clients need not quote them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(rename = "meat-consumption", deserialize_with = "deserialize_field")]
    pub meat_consumption: String,
    #[serde(rename = "km-car", default, deserialize_with = "deserialize_field")]
    pub km_car: String,
    #[serde(rename = "km-moto", default, deserialize_with = "deserialize_field")]
    pub km_moto: String,
    #[serde(rename = "km-public", default, deserialize_with = "deserialize_field")]
    pub km_public: String,
    #[serde(rename = "led-usage", default, deserialize_with = "deserialize_field")]
    pub led_usage: String,
}

impl FormSubmission {
    /// Convert the raw fields into calculator inputs.
    ///
    /// Unparseable distances default to zero; only the meat bracket can fail.
    pub fn to_inputs(&self) -> Result<HabitInputs, InputError> {
        Ok(HabitInputs {
            meat_frequency: parse_meat_frequency(&self.meat_consumption)?,
            car_km: parse_distance(&self.km_car),
            moto_km: parse_distance(&self.km_moto),
            public_km: parse_distance(&self.km_public),
            uses_led: parse_led_usage(&self.led_usage),
        })
    }
}

/// Parse the leading integer of the selector value into a meat bracket.
pub fn parse_meat_frequency(raw: &str) -> Result<MeatFrequency, InputError> {
    let trimmed = raw.trim();
    let prefix = integer_prefix(trimmed);
    let value = prefix
        .parse::<i64>()
        .map_err(|_| InputError::MeatFrequencyNotInteger(trimmed.to_string()))?;
    MeatFrequency::try_from(value)
}

/// Parse a weekly distance, reading the leading decimal number of the text.
///
/// Anything that does not start with a finite, positive number is zero.
pub fn parse_distance(raw: &str) -> f64 {
    decimal_prefix(raw.trim())
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite() && *km > 0.0)
        .unwrap_or(0.0)
}

/// The LED radio button submits `"1"` when LEDs are in use.
pub fn parse_led_usage(raw: &str) -> bool {
    raw.trim() == "1"
}

fn integer_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return "";
    }
    &raw[..end]
}

fn decimal_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut seen_digit = false;
    let mut seen_dot = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }

    &raw[..end]
}

fn deserialize_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Bool(flag) => (if flag { "1" } else { "0" }).to_string(),
        other => other.to_string(),
    })
}
