use clap::Parser;
use colored::Colorize;
use oci_network_report::{config, logging, Args};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(config::EXIT_USAGE);
        }
        Err(e) => e.exit(),
    };
    logging::init(&args.log_config);
    log::info!("#Start main() instance={}", args.instance_id);

    match oci_network_report::run(&args) {
        Ok(path) => println!("{} report written to {}", "OK".green(), path.display()),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR:".on_red());
            std::process::exit(e.exit_code());
        }
    }
}
