//! Event loop.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use frozen_table_lib::load::Loader;
use frozen_table_lib::{RowSource, TableConfig};
use futures::StreamExt;
use tokio::time::MissedTickBehavior;

use crate::app::App;
use crate::error::AppError;
use crate::input::map_key;
use crate::render;
use crate::terminal::Terminal;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Runs the table until the user quits.
///
/// The fetch runs as its own task; its outcome is applied between frames.
pub async fn run(config: TableConfig, source: Arc<dyn RowSource>) -> Result<(), AppError> {
    let mut terminal = Terminal::new()?;
    let mut app = App::new(config);
    let (width, height) = terminal.size();
    app.set_viewport(width, height);

    let mut loader = Loader::spawn(source);
    let mut events = EventStream::new();
    let mut spinner = tokio::time::interval(SPINNER_INTERVAL);
    spinner.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|buf| render::draw(&app, buf))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    log::trace!("Key {:?}", key);
                    if let Some(action) = map_key(app.focus(), key) {
                        app.apply(action);
                    }
                }
                Some(Ok(Event::Resize(width, height))) => {
                    log::debug!("Resize {width}x{height}");
                    terminal.resize(width, height)?;
                    app.set_viewport(width, height);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            state = loader.changed(), if app.is_loading() => match state {
                Some(state) => app.on_load(state),
                None => {
                    log::error!("Load task ended without publishing a result");
                    app.on_load_lost();
                }
            },
            _ = spinner.tick(), if app.is_loading() => app.on_tick(),
        }
    }

    log::info!("Exiting");
    Ok(())
}
