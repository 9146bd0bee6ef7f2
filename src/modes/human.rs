use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::game::{
    GameEngine, GameState, RandomSource, TickOutcome, queue_direction, toggle_pause,
};
use crate::input::{InputHandler, KeyAction};
use crate::render::{BoardSize, Renderer};

/// Host-side game bookkeeping, independent of the terminal.
///
/// A fresh game waits paused on a welcome screen until the player presses
/// Space/P or a direction key.
pub struct Session<R: RandomSource> {
    engine: GameEngine<R>,
    config: AppConfig,
    state: GameState,
    has_started: bool,
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: AppConfig, columns: u16, rows: u16, rng: R) -> Self {
        let board = config.board_size(columns, rows);
        let mut engine = GameEngine::with_rng(config.game_options(board), rng);
        let state = waiting(engine.reset());
        info!(width = board.width, height = board.height, "new game");

        Self {
            engine,
            config,
            state,
            has_started: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn board(&self) -> BoardSize {
        BoardSize::new(self.state.width, self.state.height)
    }

    /// Apply a decoded key. Quitting is the caller's business.
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(direction) => {
                self.start();
                self.state = queue_direction(self.state.clone(), direction);
            }
            KeyAction::TogglePause => {
                if self.has_started {
                    self.state = toggle_pause(self.state.clone());
                    debug!(paused = self.state.paused, "pause toggled");
                } else {
                    self.start();
                }
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Quit | KeyAction::None => {}
        }
    }

    pub fn on_tick(&mut self) -> TickOutcome {
        let (next, outcome) = self.engine.tick_with_outcome(self.state.clone());
        self.state = next;

        match outcome {
            TickOutcome::Won => info!(score = self.state.score, "game won"),
            TickOutcome::Collided(kind) => {
                info!(score = self.state.score, ?kind, "game over")
            }
            _ => {}
        }
        outcome
    }

    /// Terminal changed size: rebuild the board and start over
    pub fn on_resize(&mut self, columns: u16, rows: u16) {
        let board = self.config.board_size(columns, rows);
        debug!(width = board.width, height = board.height, "resized");
        self.engine.set_options(self.config.game_options(board));
        self.restart();
    }

    pub fn restart(&mut self) {
        self.state = waiting(self.engine.reset());
        self.has_started = false;
        info!(
            width = self.state.width,
            height = self.state.height,
            "new game"
        );
    }

    fn start(&mut self) {
        if !self.has_started {
            self.has_started = true;
            self.state.paused = false;
        }
    }
}

/// Fresh games sit paused until the player starts them
fn waiting(state: GameState) -> GameState {
    GameState {
        paused: true,
        ..state
    }
}

/// Game clock. After a stall it resumes at the normal pace instead of
/// firing the missed ticks back to back.
fn game_tick_timer(period: Duration) -> Interval {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

pub struct HumanMode {
    session: Session<StdRng>,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context("Invalid configuration")?;

        let (columns, rows) = terminal::size().context("Failed to read terminal size")?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let tick_interval = config.tick_interval();

        Ok(Self {
            session: Session::new(config, columns, rows, rng),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = game_tick_timer(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.session.on_tick();
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.session.state(), self.session.has_started());
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => match self.input_handler.handle_key_event(key) {
                KeyAction::Quit => self.should_quit = true,
                action => self.session.handle(action),
            },
            Event::Resize(columns, rows) => self.session.on_resize(columns, rows),
            _ => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
