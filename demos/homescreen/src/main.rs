//! Covid widget on a terminal home screen
//!
//! The pattern in one screen:
//! 1. Key press -> component handle_event -> Actions
//! 2. Actions dispatched to the reducer
//! 3. Reducer mutates AppState, returns whether to re-render
//! 4. Fetch intents spawn API tasks that send result actions back
//! 5. Every widget-state change persists to the preference slot
//!
//! # Usage
//!
//! ```sh
//! # Fresh widget over the bundled fixture feeds
//! cargo run -p homescreen-example -- --offline
//!
//! # Live data for one state, in a second widget instance
//! cargo run -p homescreen-example -- --location IN-KL --widget-id 2
//! ```

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Flex, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use covid_widget_core::{catalog, WidgetState};
use homescreen_example::action::Action;
use homescreen_example::api;
use homescreen_example::components::{
    Component, HelpBar, HelpBarProps, LocationPicker, LocationPickerProps, WidgetFace,
    WidgetFaceProps,
};
use homescreen_example::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use homescreen_example::prefs::{self, Prefs};
use homescreen_example::reducer::reducer;
use homescreen_example::state::{AppState, LOADING_ANIM_TICK_MS};

/// Covid widget home screen
#[derive(Parser, Debug)]
#[command(name = "homescreen")]
#[command(about = "A covid-19 statistics widget on a terminal home screen")]
struct Args {
    /// Location identifier for a fresh widget (a persisted slot wins)
    #[arg(long, short, default_value = "IN")]
    location: String,

    /// Widget instance id; each id gets its own preference slot
    #[arg(long, default_value = "1")]
    widget_id: u32,

    /// Auto-refresh interval in seconds
    #[arg(long, short, default_value = "300")]
    refresh_interval: u64,

    /// Serve the bundled fixture feeds instead of the network
    #[arg(long)]
    offline: bool,

    /// Directory for preference slots (defaults to the user config dir)
    #[arg(long)]
    state_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Resolve the preference slot before entering TUI mode.
    let dir = match args.state_dir.clone().or_else(prefs::default_dir) {
        Some(dir) => dir,
        None => {
            eprintln!("Error: no config directory found; pass --state-dir.");
            std::process::exit(1);
        }
    };
    let prefs = Prefs::new(dir);

    let widget = match prefs.load(args.widget_id) {
        Ok(Some(widget)) => widget,
        Ok(None) => {
            // First placement: seed from --location and persist the slot.
            let Some(location) = catalog::find(&args.location) else {
                eprintln!("Error: unknown location '{}'.", args.location);
                eprintln!("Examples: 'IN', 'IN-MH', 'IN-KL'.");
                std::process::exit(1);
            };
            let widget = WidgetState::initial().with_location(location);
            if let Err(e) = prefs.store(args.widget_id, &widget) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            widget
        }
        Err(e) => {
            // A corrupt slot is reported, never silently reset.
            eprintln!("Error: {e}");
            eprintln!("Delete the file to start this widget over.");
            std::process::exit(1);
        }
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, widget, prefs, &args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

struct HomescreenUi {
    face: WidgetFace,
    picker: LocationPicker,
    help: HelpBar,
}

impl HomescreenUi {
    fn new() -> Self {
        Self {
            face: WidgetFace,
            picker: LocationPicker,
            help: HelpBar,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        // The widget floats on an otherwise empty home screen, with a
        // hint bar along the bottom edge.
        let [screen, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let slot = widget_slot(screen);

        self.face.render(
            frame,
            slot,
            WidgetFaceProps {
                state,
                is_focused: state.picker.is_none(),
            },
        );

        self.help.render(frame, help_area, HelpBarProps);

        if let Some(picker) = state.picker {
            self.picker.render(
                frame,
                screen,
                LocationPickerProps {
                    selected: picker.selected,
                    is_focused: true,
                },
            );
        }
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        // The open picker captures all input.
        if let Some(picker) = state.picker {
            return self.picker.handle_event(
                event,
                LocationPickerProps {
                    selected: picker.selected,
                    is_focused: true,
                },
            );
        }
        self.face.handle_event(
            event,
            WidgetFaceProps {
                state,
                is_focused: true,
            },
        )
    }
}

/// Where the widget sits on the home screen: centered, at most 46x13.
fn widget_slot(area: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(area.height.min(13)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, slot, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(area.width.min(46)),
        Constraint::Fill(1),
    ])
    .flex(Flex::Center)
    .areas(row);
    slot
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    widget: WidgetState,
    prefs: Prefs,
    args: &Args,
) -> io::Result<()> {
    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut state = AppState::new(widget);

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    // Timers: spinner animation and auto-refresh. The first fetch is
    // enqueued below, so the refresh timer starts one period out.
    let mut tick = tokio::time::interval(Duration::from_millis(LOADING_ANIM_TICK_MS));
    let refresh_period = Duration::from_secs(args.refresh_interval.max(1));
    let mut refresh =
        tokio::time::interval_at(tokio::time::Instant::now() + refresh_period, refresh_period);

    let mut ui = HomescreenUi::new();

    // Fetch on start
    let _ = action_tx.send(Action::StatsFetch);

    let mut should_render = true;

    loop {
        // Render if state changed
        if should_render {
            terminal.draw(|frame| ui.render(frame, frame.area(), &state))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                if let EventKind::Resize(_, _) = event {
                    should_render = true;
                    continue;
                }
                for action in ui.map_event(&event, &state) {
                    let _ = action_tx.send(action);
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }

                debug!(action = action.name(), "dispatch");
                spawn_fetches(&action, &state, args.offline, &action_tx);

                let widget_before = state.widget;
                should_render |= reducer(&mut state, action);

                if state.widget != widget_before {
                    match prefs.store(args.widget_id, &state.widget) {
                        Ok(()) => {
                            info!(encoded = %state.widget.encode(), "widget state persisted");
                        }
                        Err(e) => {
                            // Keep running; the next change retries the slot.
                            error!(error = %e, "persist failed");
                        }
                    }
                }
            }

            _ = tick.tick() => {
                let _ = action_tx.send(Action::Tick);
            }

            _ = refresh.tick() => {
                let _ = action_tx.send(Action::StatsFetch);
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}

/// Spawn API tasks for the actions that need one.
///
/// Runs before the reducer sees the action: `StatsFetch` reads the
/// still-current location from state, a selection carries its own.
fn spawn_fetches(
    action: &Action,
    state: &AppState,
    offline: bool,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match action {
        Action::StatsFetch => {
            tokio::spawn(api::fetch_stats(
                state.widget.location,
                offline,
                action_tx.clone(),
            ));
        }
        Action::LocationDidSelect(location) => {
            tokio::spawn(api::fetch_stats(*location, offline, action_tx.clone()));
        }
        _ => {}
    }
}
