use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    /// Left mouse button pressed at (column, row).
    Click { column: u16, row: u16 },
    Tick,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval =
                tokio::time::interval(std::time::Duration::from_millis(tick_rate_ms));

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        if let Some(Ok(evt)) = maybe_event {
                            match evt {
                                crossterm::event::Event::Key(key) => {
                                    // Filter for Press only (Windows compatibility)
                                    if key.kind == KeyEventKind::Press {
                                        if tx.send(Event::Key(key)).is_err() {
                                            break;
                                        }
                                    }
                                }
                                crossterm::event::Event::Mouse(mouse) => {
                                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                                        let click = Event::Click {
                                            column: mouse.column,
                                            row: mouse.row,
                                        };
                                        if tx.send(click).is_err() {
                                            break;
                                        }
                                    }
                                }
                                _ => {}
                            }
                        }
                    }
                    _ = tick_interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        EventHandler { rx }
    }

    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }
}
