//! `log` + `env_logger` setup.
//!
//! Logging is off unless `RUST_LOG` asks for it, so the default stderr
//! carries nothing but the usage and read-failure messages.
//!
//! ```bash
//! RUST_LOG=debug go2sponge main.go   # path, capture and directive counts
//! RUST_LOG=trace go2sponge main.go   # every dropped argument
//! ```

use env_logger::{Builder, Env};
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize from `RUST_LOG`, defaulting to off. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        Builder::from_env(Env::default().default_filter_or("off"))
            .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
            .init();
    });
}
