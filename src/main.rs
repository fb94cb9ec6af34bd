mod app;
mod cat;
mod config;
mod platform;
mod render;

fn main() {
    env_logger::init();
    log::info!("deskcat starting up");

    let config = config::Config::from_env();

    if let Err(e) = app::run(config) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
