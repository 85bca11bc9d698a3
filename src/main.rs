//! ClickDemo - Floem GUI Entry Point
//!
//! # Building and Running
//!
//! ```bash
//! cargo run --bin clickdemo
//!
//! # Run with debug logging (every tap is logged)
//! CLICKDEMO_LOG=clickdemo=debug cargo run --bin clickdemo
//! ```
//!
//! # Configuration
//!
//! Optional settings in `~/.config/clickdemo/config.toml` (or `$CLICKDEMO_CONFIG`):
//! ```toml
//! window_title = "ClickDemo"
//! screen_width = 320.0
//! screen_height = 480.0
//! log_level = "info"
//! log_format = "compact"
//! ```

use std::process::ExitCode;

use clickdemo::config::{ConfigNotice, Settings};
use clickdemo::logging::{self, LoggingConfig};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("clickdemo: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> clickdemo::Result<()> {
    // The subscriber depends on the settings, so loading cannot log directly
    let (settings, notices) = Settings::load_reporting();
    logging::init_logging(&LoggingConfig::from_settings(&settings))?;
    notices.iter().for_each(ConfigNotice::log);

    // Held for the whole event loop; closes on every exit path
    let _launch = tracing::info_span!("launch").entered();

    tracing::info!("Starting ClickDemo (Floem GUI)");
    clickdemo::floem_app::run(&settings)
}
