use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Write logs to the file named by `INFINITE_LOG`, if set.
///
/// Logging to the terminal would tear the inline prompt, so nothing is
/// installed without a file. The filter comes from `RUST_LOG` and is `off`
/// otherwise.
pub fn init() {
    let Some(path) = std::env::var_os("INFINITE_LOG") else {
        return;
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open log file {}: {err}", path.to_string_lossy());
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}
