use log::LevelFilter;
use std::fs::File;
use std::io;
use std::path::Path;

/// Set up `env_logger`.
///
/// The game owns the terminal in raw mode, so log lines go to `log_file` when
/// one is given. Without a file only warnings reach stderr. `RUST_LOG`
/// overrides the level either way.
pub fn init_logger(debug_enabled: bool, log_file: Option<&Path>) -> io::Result<()> {
    let level = match (debug_enabled, log_file) {
        (true, _) => LevelFilter::Debug,
        (false, Some(_)) => LevelFilter::Info,
        (false, None) => LevelFilter::Warn,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp_millis()
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    log::info!("logger initialized at {level:?} level");
    Ok(())
}
