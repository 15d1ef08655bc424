//! Temperature unit adapters.

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Converts a Celsius value into another temperature representation.
pub trait TemperatureAdapter {
    fn convert(&self, celsius: f64) -> f64;
}

/// Celsius to Kelvin.
///
/// No rounding and no bounds checking: values below absolute zero convert
/// to negative Kelvin without complaint.
#[derive(Debug, Default, Clone, Copy)]
pub struct CelsiusToKelvin;

impl TemperatureAdapter for CelsiusToKelvin {
    fn convert(&self, celsius: f64) -> f64 {
        celsius + KELVIN_OFFSET
    }
}

/// Render a temperature so whole values keep a fractional digit (`10.0`).
pub fn format_temperature(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_kelvin() {
        let adapter = CelsiusToKelvin;
        assert_eq!(adapter.convert(0.0), 273.15);
        assert_eq!(adapter.convert(10.0), 10.0 + 273.15);
        assert_eq!(adapter.convert(-273.15), 0.0);
    }

    #[test]
    fn test_below_absolute_zero_is_accepted() {
        assert!(CelsiusToKelvin.convert(-300.0) < 0.0);
    }

    #[test]
    fn test_inverse_within_precision() {
        for celsius in [-40.0, 0.5, 21.7, 100.0, 1.0e6] {
            let back = CelsiusToKelvin.convert(celsius) - KELVIN_OFFSET;
            assert!((back - celsius).abs() < 1e-9, "{celsius} came back as {back}");
        }
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(10.0), "10.0");
        assert_eq!(format_temperature(CelsiusToKelvin.convert(10.0)), "283.15");
        assert_eq!(format_temperature(-2.5), "-2.5");
    }
}
