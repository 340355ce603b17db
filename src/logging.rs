use tracing::Level;

/// Lenient level parsing; anything unrecognised means info.
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Installs the console subscriber. A second call is a no-op.
pub fn init(level: &str) {
    let level = parse_level(level);
    if dioxus_logger::init(level).is_err() {
        tracing::debug!("logging: subscriber already installed");
    }
}
