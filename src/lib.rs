pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod import;
pub mod live;
pub mod matcher;
pub mod overlay;
pub mod parks;
pub mod parser;
pub mod plan;
pub mod reservations;
pub mod state;

use env_logger::Env;

/// Timestamped log lines on stderr; `RUST_LOG` overrides the `warn` default.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use matcher::{lookup_wait, AliasTable, WaitRecord, WaitStatus, WaitTable};
pub use parser::{normalize_edit_time, parse_line, ParsedLine, TimeLabel};
pub use plan::{Plan, PlanItem};
