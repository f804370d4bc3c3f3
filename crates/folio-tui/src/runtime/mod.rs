//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Loaders send `UiEvent`s directly to `inbox_tx`
//! - The runtime drains `inbox_rx` each frame to collect results
//!
//! Structure:
//! - `mod.rs`: core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: inbox channel types
//! - `handlers.rs`: async effect handlers

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use folio_core::config::{Config, paths};
use folio_core::services::{ContentServices, ContentSource};
use folio_core::theme::{ConfigFilePersistence, EnvAppearance, ThemeStore};
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame budget while something animates (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (no loaders, drags or pending resizes).
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    services: Arc<ContentServices>,
    theme: ThemeStore<ConfigFilePersistence, EnvAppearance>,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last terminal event (for fast ticks during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    pub fn new(config: &Config) -> Result<Self> {
        let services =
            Arc::new(ContentServices::from_config(config).context("Failed to build loaders")?);
        let theme =
            ThemeStore::init(ConfigFilePersistence::new(paths::config_path()), EnvAppearance);

        // Panic hook goes in before the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config.resize_debounce(), theme.mode(), theme.appearance());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            services,
            theme,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let effects = update::load_all(&mut self.state.tui);
        self.execute_effects(effects);

        let result = self.event_loop();

        self.shutdown();
        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so layout is current for the other events.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render; this caps the frame rate at tick cadence.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Cancels loaders, pending resizes and the system theme subscription.
    fn shutdown(&mut self) {
        for source in ContentSource::ALL {
            if let Some(token) = self
                .state
                .tui
                .tasks
                .state(source)
                .and_then(|task| task.cancel.as_ref())
            {
                token.cancel();
            }
        }
        self.state.tui.sections.teardown();
        self.theme.dispose();
        tracing::debug!("tui runtime shut down");
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while loaders run, a drag or resize is live, or the
        // user is interacting. Otherwise slow polling to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running()
            || self.state.tui.sections.needs_frames()
            || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        self.collect_inbox_events(&mut events);

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            if let Some(appearance) = self.theme.poll_system() {
                events.push(UiEvent::ThemeApplied {
                    mode: self.theme.mode(),
                    appearance,
                });
            }
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn collect_inbox_events(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    /// Spawns a loader with a uniform TaskStarted/TaskCompleted lifecycle.
    ///
    /// A loader that resolves to `None` (cancelled) sends no completion.
    fn spawn_task<F, Fut>(&self, source: ContentSource, id: TaskId, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = Option<UiEvent>> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = Some(CancellationToken::new());
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { source, started });
        tokio::spawn(async move {
            let Some(inner) = f(cancel).await else {
                return;
            };
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { source, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::OpenBrowser { url } => {
                if let Err(err) = open::that(&url) {
                    tracing::warn!(%url, "Failed to open link: {err}");
                }
            }
            UiEffect::LoadContent { task, source } => {
                let Some(task) = task else {
                    return;
                };
                let services = Arc::clone(&self.services);
                self.spawn_task(source, task, move |cancel| {
                    handlers::load_content(services, source, cancel)
                });
            }
            UiEffect::SetTheme { mode } => {
                let appearance = self.theme.set(mode);
                self.dispatch_event(UiEvent::ThemeApplied { mode, appearance });
            }
            UiEffect::CancelTask { source, token } => {
                tracing::debug!(%source, "cancelling loader");
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
