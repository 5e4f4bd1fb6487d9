use gridglow::{GridBackground, GridConfig};
use gridglow_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    let config = GridConfig::default()
        .radius(6.0)
        .falloff_width(3.0)
        .pulse_speed(2.0);

    log::info!("controls: arrows tune radius/speed, PageUp/PageDown spacing, D dark region, R reset, Esc quit");

    if let Err(err) = GridBackground::new()
        .title("gridglow studio")
        .size(1280.0, 720.0)
        .config(config)
        .run()
    {
        log::error!("gridglow runtime error: {err:#}");
        std::process::exit(1);
    }
}
