//! JSON-lines display adapter.
//!
//! Writes one serialized `AtcSnapshot` per line and collects console input
//! (`spawn`, `quit`) from a reader thread through an `mpsc` channel.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use tracing::{error, warn};

use atc_core::commands::UiSignal;
use atc_core::state::AtcSnapshot;

use crate::game_loop::Renderer;

pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    /// `None` once the input side has hung up.
    input: Option<mpsc::Receiver<UiSignal>>,
}

impl<W: Write> JsonLinesRenderer<W> {
    /// Output only; never raises signals.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            input: None,
        }
    }

    pub fn with_input(writer: W, input: mpsc::Receiver<UiSignal>) -> Self {
        Self {
            writer,
            input: Some(input),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_snapshot(&mut self, snapshot: &AtcSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    fn drain_input(&mut self) -> Vec<UiSignal> {
        let Some(rx) = &self.input else {
            return Vec::new();
        };

        let mut signals = Vec::new();
        let mut hung_up = false;
        loop {
            match rx.try_recv() {
                Ok(signal) => signals.push(signal),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    hung_up = true;
                    break;
                }
            }
        }
        if hung_up {
            self.input = None;
        }
        signals
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn present(&mut self, snapshot: &AtcSnapshot) -> Vec<UiSignal> {
        if let Err(e) = self.write_snapshot(snapshot) {
            // Nobody is reading any more
            error!("failed to write snapshot: {e}");
            return vec![UiSignal::Quit];
        }
        self.drain_input()
    }
}

/// Forward signals parsed from `reader`, one per line, until EOF or until the
/// receiver is dropped.
pub fn forward_signals<R: BufRead>(reader: R, tx: &mpsc::Sender<UiSignal>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("input closed: {e}");
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match UiSignal::parse_line(&line) {
            Some(signal) => {
                if tx.send(signal).is_err() {
                    return;
                }
            }
            None => warn!(input = %line.trim(), "unrecognised command"),
        }
    }
}

/// Start a thread that reads commands from stdin.
pub fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<UiSignal>> {
    let (tx, rx) = mpsc::channel::<UiSignal>();

    std::thread::Builder::new()
        .name("atc-input".into())
        .spawn(move || {
            forward_signals(io::stdin().lock(), &tx);
        })?;

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use atc_core::config::AtcConfig;
    use atc_sim::AirspaceController;

    #[test]
    fn test_writes_one_line_per_snapshot() {
        let mut atc = AirspaceController::new(AtcConfig {
            name: "Tower".into(),
            ..Default::default()
        })
        .unwrap();
        atc.spawn();

        let mut renderer = JsonLinesRenderer::new(Vec::new());
        for _ in 0..3 {
            let signals = renderer.present(&atc.tick());
            assert!(signals.is_empty());
        }

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        let last: AtcSnapshot = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last.name, "Tower");
        assert_eq!(last.time.tick, 3);
        assert_eq!(last.aircraft.len(), 1);
    }

    #[test]
    fn test_forward_signals_parses_lines() {
        let (tx, rx) = mpsc::channel();
        let input = Cursor::new("spawn\n\n  S \nbogus\nQUIT\n");
        forward_signals(input, &tx);
        drop(tx);

        let signals: Vec<UiSignal> = rx.iter().collect();
        assert_eq!(
            signals,
            vec![
                UiSignal::SpawnRequested,
                UiSignal::SpawnRequested,
                UiSignal::Quit
            ]
        );
    }

    #[test]
    fn test_present_returns_queued_signals() {
        let (tx, rx) = mpsc::channel();
        let mut renderer = JsonLinesRenderer::with_input(Vec::new(), rx);
        let snapshot = AtcSnapshot::default();

        tx.send(UiSignal::SpawnRequested).unwrap();
        tx.send(UiSignal::Quit).unwrap();
        assert_eq!(
            renderer.present(&snapshot),
            vec![UiSignal::SpawnRequested, UiSignal::Quit]
        );
        assert!(renderer.present(&snapshot).is_empty());

        // Hanging up the input leaves output running
        drop(tx);
        assert!(renderer.present(&snapshot).is_empty());
        assert!(renderer.input.is_none());
        assert_eq!(String::from_utf8(renderer.into_inner()).unwrap().lines().count(), 3);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_requests_quit() {
        let mut renderer = JsonLinesRenderer::new(ClosedPipe);
        assert_eq!(
            renderer.present(&AtcSnapshot::default()),
            vec![UiSignal::Quit]
        );
    }
}
