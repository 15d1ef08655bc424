use clap::Parser;
use serde::{Deserialize, Serialize};

/// Runtime options for a climate scenario run.
///
/// Options are only read from the command line, so running without
/// arguments always reproduces the canonical 10 °C scenario. Thresholds are
/// not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "climate-patterns", version, about)]
pub struct Config {
    /// Temperature sample pushed through the sensor, in degrees Celsius.
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub celsius: f64,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the scenario report as JSON instead of text lines.
    #[arg(long)]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            celsius: 10.0,
            log_level: "info".to_string(),
            json: false,
        }
    }
}
