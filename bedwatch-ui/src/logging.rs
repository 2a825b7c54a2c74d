//! `tracing` output for the browser, one console call per event.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Receives one formatted event without its trailing newline.
pub type Sink = fn(Level, &str);

#[derive(Debug, Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

/// Buffers a single event and hands it to the sink when dropped.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

impl ConsoleMakeWriter {
    fn writer(&self, level: Level) -> ConsoleWriter {
        ConsoleWriter {
            level,
            buf: Vec::new(),
            sink: self.sink,
        }
    }
}

/// Formatting subscriber writing through `sink`, without timestamps.
pub fn subscriber(
    sink: Sink,
    max_level: Level,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(sink))
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_max_level(max_level)
        .finish()
}

#[cfg(target_arch = "wasm32")]
pub fn browser_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(line);
    if level == Level::ERROR {
        console::error_1(&line);
    } else if level == Level::WARN {
        console::warn_1(&line);
    } else if level == Level::INFO {
        console::info_1(&line);
    } else {
        console::debug_1(&line);
    }
}

/// Installs the browser subscriber once. Later calls keep the first one.
#[cfg(target_arch = "wasm32")]
pub fn init_browser_logging() {
    let subscriber = subscriber(browser_console, Level::INFO);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use bedwatch_core::{load_dataset, BedwatchConfig, GeoPoint};

    use super::*;
    use crate::screen::{ScreenAction, ScreenState};

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        CAPTURED.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn captured() -> Vec<(Level, String)> {
        CAPTURED.with(|lines| lines.borrow_mut().drain(..).collect())
    }

    #[test]
    fn location_events_reach_the_sink_with_their_level() {
        captured();
        tracing::subscriber::with_default(subscriber(capture, Level::INFO), || {
            let mut screen = ScreenState::new(load_dataset(), BedwatchConfig::default());
            screen.apply(ScreenAction::LocationResolved(GeoPoint::new(f64::NAN, 0.0)));
            screen.apply(ScreenAction::LocationFailed("denied".to_string()));
        });

        let lines = captured();
        assert_eq!(lines.len(), 2, "{lines:?}");
        assert_eq!(lines[0].0, Level::WARN);
        assert!(lines[0].1.contains("geolocation returned an unusable position"));
        assert_eq!(lines[1].0, Level::INFO);
        assert!(lines[1].1.contains("geolocation unavailable"));
        assert!(lines[1].1.contains("denied"));
        assert!(lines.iter().all(|(_, line)| !line.ends_with('\n')));
    }

    #[test]
    fn events_below_max_level_are_dropped() {
        captured();
        tracing::subscriber::with_default(subscriber(capture, Level::WARN), || {
            tracing::info!("quiet");
            tracing::error!("loud");
        });

        let lines = captured();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::ERROR);
        assert!(lines[0].1.contains("loud"));
    }
}
