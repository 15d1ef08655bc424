use clap::Parser;
use climate_patterns::config::Config;
use climate_patterns::{AirConditioner, Heater, run_scenario};
use log::info;

fn init_logger(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

fn main() {
    let config = Config::parse();
    init_logger(&config.log_level);
    info!("Starting climate scenario");

    let heater = Heater::instance();
    let air_conditioner = AirConditioner::instance();

    let result = run_scenario(config.celsius, heater, air_conditioner)
        .and_then(|report| report.render(config.json));

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("Climate scenario failed: {}", e);
            std::process::exit(1);
        }
    }

    info!("Climate scenario finished");
}
