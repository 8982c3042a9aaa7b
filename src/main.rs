use azure_vm_inventory::config::Config;
use azure_vm_inventory::logging;
use azure_vm_inventory::output::print_summary;
use azure_vm_inventory::render_inventory;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    logging::init(logging::LOG_CONFIG_FILE);
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let result = Config::from_env().and_then(|config| {
        let document = render_inventory(&config)?;
        print_summary(&document, &config.output);
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
