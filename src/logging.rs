use log::LevelFilter;
use std::io::Write;

/// Logger settings, decided once at program start.
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    pub level: LevelFilter,
}
impl LogConfig {
    pub fn from_verbosity(is_verbose: bool) -> Self {
        let level = if is_verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        Self { level }
    }

    fn builder(self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        builder
            .filter_level(self.level)
            // RUST_LOG wins over the configured level
            .parse_default_env()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{} {}]: {}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            });

        builder
    }

    /// Installs the global logger. Only the first call can succeed.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        self.builder().try_init()
    }
}
impl Default for LogConfig {
    fn default() -> Self {
        Self::from_verbosity(false)
    }
}
