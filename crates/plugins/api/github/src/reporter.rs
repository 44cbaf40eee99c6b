//! Reporting through GitHub Actions workflow commands.
//!
//! Failures become `::error` annotations and notices become `::notice`
//! annotations. Metadata is passed as command properties.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use remote_link_core::{Error, Metadata, Reporter};
use tracing::{error, info, warn};

/// Writes workflow commands and remembers whether the step has failed.
pub struct ActionsReporter<W> {
    out: Mutex<W>,
    failed: AtomicBool,
}

impl ActionsReporter<io::Stdout> {
    /// Reporter writing to the process stdout, where the runner reads commands.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ActionsReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            failed: AtomicBool::new(false),
        }
    }

    /// Whether any failure has been reported; the step should exit non-zero.
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, command: &str, message: &str, metadata: &Metadata) {
        let line = format_command(command, message, metadata);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write workflow command");
        }
    }
}

impl<W: Write + Send> Reporter for ActionsReporter<W> {
    fn failure(&self, err: &Error, metadata: &Metadata) {
        error!(error = %err, ?metadata, "Failure reported");
        self.failed.store(true, Ordering::SeqCst);
        self.emit("error", &err.to_string(), metadata);
    }

    fn notice(&self, message: &str, metadata: &Metadata) {
        info!(?metadata, "{}", message);
        self.emit("notice", message, metadata);
    }
}

/// Render `::command key=value,...::message`.
fn format_command(command: &str, message: &str, metadata: &Metadata) -> String {
    let properties = metadata
        .iter()
        .map(|(key, value)| format!("{}={}", key, escape_property(value)))
        .collect::<Vec<_>>()
        .join(",");

    if properties.is_empty() {
        format!("::{}::{}", command, escape_data(message))
    } else {
        format!("::{} {}::{}", command, properties, escape_data(message))
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
