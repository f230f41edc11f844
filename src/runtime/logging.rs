use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

fn render_context(context: Option<&Value>) -> String {
    match context {
        Some(Value::Null) | None => String::new(),
        Some(value) => format!(" {value}"),
    }
}

pub fn log_event(level: LogLevel, message: &str, context: Option<Value>) {
    let context = render_context(context.as_ref());
    match level {
        LogLevel::Debug => tracing::debug!("[Reports] {}{}", message, context),
        LogLevel::Info => tracing::info!("[Reports] {}{}", message, context),
        LogLevel::Warn => tracing::warn!("[Reports] {}{}", message, context),
        LogLevel::Error => tracing::error!("[Reports] {}{}", message, context),
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}
