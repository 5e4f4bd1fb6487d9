use std::sync::OnceLock;

/// Logger setup for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. `"gridglow=debug,wgpu_core=warn"`.
    /// Falls back to `RUST_LOG`, then to `info` with wgpu quieted.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn directives(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
    }
}

const DEFAULT_DIRECTIVES: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs `env_logger` as the `log` backend. Only the first call has an
/// effect; returns whether this process ended up with our logger.
pub fn init_logging(config: LoggingConfig) -> bool {
    *INSTALLED.get_or_init(|| {
        let installed = env_logger::Builder::new()
            .parse_filters(&config.directives())
            .write_style(config.write_style)
            .try_init()
            .is_ok();
        if installed {
            log::debug!("logging initialized");
        }
        installed
    })
}
