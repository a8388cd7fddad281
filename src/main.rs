use azure_resource_count::azure::AzCli;
use azure_resource_count::config::Config;
use azure_resource_count::{count_resources, logging};
use std::error::Error;
use std::io::IsTerminal;
use std::process;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logging::init(&config.log_config)?;
    config.log_rejected();
    log::info!("#Start main() {config:?}");

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let started = std::time::Instant::now();
    let runner = AzCli::new(config.max_output_bytes);
    let report = match count_resources(&runner) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Error listing subscriptions: {e}");
            process::exit(2);
        }
    };
    log::info!(
        "#End main() {} subscriptions in {:.1?}",
        report.subscriptions.len(),
        started.elapsed()
    );

    if config.fail_on_errors && report.has_failures() {
        process::exit(1);
    }
    Ok(())
}
