use clap::Parser;
use limametrics::app::metrics::{metrics_app, CliArgs};

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CliArgs::parse();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    match metrics_app::run(&args) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
