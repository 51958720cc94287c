//! Interaction controller
//!
//! The controller owns the grid and a tagged [`Mode`]. Every key is routed to
//! the handler of the active mode, which returns the next mode. Simulation
//! steps are driven separately by [`Controller::tick`] so the timing can be
//! exercised with explicit instants, and nothing here touches the terminal.
//!
//! # Transitions
//!
//! - Menu: Up/Down move the selection with wraparound, Enter dispatches
//! - Simulating: Left/Right change speed, `q` ends the run, and the run ends
//!   on its own once a step finds no living cell; an ended run keeps the
//!   final board on screen until any key returns to the menu
//! - Editing: arrows move the cursor across the torus, Space toggles a cell
//! - Loading: type a path, Enter loads it, Esc cancels; a failed load shows
//!   the error until any key is pressed

use std::path::Path;
use std::time::{Duration, Instant};

use crate::game::{Direction, Grid, GridError, LifeConfig, LifeEngine, Position, StepResult};
use crate::input::Key;
use crate::loader::PatternLoader;
use crate::metrics::RunMetrics;

use super::menu::{MenuItem, MenuState};
use super::speed::SpeedLevel;

/// Simulation playback state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub speed: SpeedLevel,
    /// When the next generation is due
    pub next_step_at: Instant,
    /// Set once the run has ended; no more steps, the next key goes to the menu
    pub finished: Option<String>,
}

impl Simulation {
    /// Start at the default speed with the first step due immediately
    fn start(now: Instant) -> Self {
        Self {
            speed: SpeedLevel::default(),
            next_step_at: now,
            finished: None,
        }
    }
}

/// Cell editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Editor {
    pub cursor: Position,
}

/// Pattern path prompt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathPrompt {
    pub input: String,
    /// Set after a failed load; the next key returns to the menu
    pub error: Option<String>,
}

/// The active interaction mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Simulating(Simulation),
    Editing(Editor),
    Loading(PathPrompt),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Simulating(_) => "simulating",
            Mode::Editing(_) => "editing",
            Mode::Loading(_) => "loading",
        }
    }
}

/// Whether the session keeps going after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Exit,
}

/// What the renderer draws on top of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay<'a> {
    Menu {
        selected: MenuItem,
        status: Option<&'a str>,
    },
    Simulation {
        speed: SpeedLevel,
        metrics: &'a RunMetrics,
        finished: Option<&'a str>,
    },
    Editor {
        cursor: Position,
    },
    Prompt {
        input: &'a str,
        error: Option<&'a str>,
    },
}

/// One frame's worth of state for a render adapter
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub grid: &'a Grid,
    pub overlay: Overlay<'a>,
}

/// Interaction state machine for one session
pub struct Controller {
    config: LifeConfig,
    engine: LifeEngine,
    grid: Grid,
    mode: Mode,
    menu: MenuState,
    metrics: RunMetrics,
    status: Option<String>,
}

impl Controller {
    /// Create a controller with an empty grid, sitting on the menu
    pub fn new(config: LifeConfig) -> Result<Self, GridError> {
        let grid = Grid::new(config.grid_height, config.grid_width)?;
        let engine = LifeEngine::new(config.rule);

        Ok(Self {
            config,
            engine,
            grid,
            mode: Mode::Menu,
            menu: MenuState::new(),
            metrics: RunMetrics::new(),
            status: None,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn menu_selection(&self) -> MenuItem {
        self.menu.selected()
    }

    /// Current speed, only while simulating
    pub fn speed(&self) -> Option<SpeedLevel> {
        match &self.mode {
            Mode::Simulating(sim) => Some(sim.speed),
            _ => None,
        }
    }

    /// Edit cursor, only while editing
    pub fn cursor(&self) -> Option<Position> {
        match &self.mode {
            Mode::Editing(editor) => Some(editor.cursor),
            _ => None,
        }
    }

    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Message shown under the menu, e.g. why the last run ended
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replace the grid contents with a loaded pattern
    pub fn apply_pattern(&mut self, pattern: &Grid) {
        self.grid.reset();
        self.grid.overwrite_with(pattern);
    }

    /// Dispatch one key to the active mode
    pub fn handle_key(&mut self, key: Key, now: Instant, loader: &dyn PatternLoader) -> Transition {
        if key == Key::Interrupt {
            tracing::info!(mode = self.mode.name(), "interrupted");
            return Transition::Exit;
        }

        let from = self.mode.name();
        let mode = std::mem::replace(&mut self.mode, Mode::Menu);

        let (next, transition) = match mode {
            Mode::Menu => self.on_menu_key(key, now),
            Mode::Simulating(sim) => (self.on_simulation_key(sim, key, now), Transition::Continue),
            Mode::Editing(editor) => (self.on_editor_key(editor, key), Transition::Continue),
            Mode::Loading(prompt) => (self.on_prompt_key(prompt, key, loader), Transition::Continue),
        };

        if next.name() != from {
            tracing::info!(from, to = next.name(), "mode changed");
        }
        self.mode = next;
        transition
    }

    fn on_menu_key(&mut self, key: Key, now: Instant) -> (Mode, Transition) {
        match key {
            Key::Up => self.menu.up(),
            Key::Down => self.menu.down(),
            Key::Enter => {
                let next = match self.menu.selected() {
                    MenuItem::Exit => return (Mode::Menu, Transition::Exit),
                    MenuItem::Start => {
                        self.metrics.on_run_start(self.grid.population());
                        Mode::Simulating(Simulation::start(now))
                    }
                    MenuItem::Upload => Mode::Loading(PathPrompt::default()),
                    MenuItem::Edit => Mode::Editing(Editor {
                        cursor: self.config.edit_cursor_start(),
                    }),
                };
                self.status = None;
                return (next, Transition::Continue);
            }
            _ => {}
        }
        (Mode::Menu, Transition::Continue)
    }

    fn on_simulation_key(&mut self, mut sim: Simulation, key: Key, now: Instant) -> Mode {
        // Any key acknowledges the end of the run
        if let Some(message) = sim.finished.take() {
            self.status = Some(message);
            return Mode::Menu;
        }

        match key {
            Key::Left => {
                sim.speed = sim.speed.slower();
            }
            Key::Right => {
                sim.speed = sim.speed.faster();
            }
            Key::Char('q') | Key::Char('Q') | Key::Esc => {
                let generations = self.metrics.generation;
                tracing::info!(generations, "run stopped");
                sim.finished = Some(format!("Stopped after {}", generation_count(generations)));
                return Mode::Simulating(sim);
            }
            _ => return Mode::Simulating(sim),
        }

        // Re-arm the clock so the new interval starts now
        if let Some(interval) = sim.speed.tick_interval(self.config.turn_interval()) {
            sim.next_step_at = now + interval;
        }
        tracing::debug!(speed = sim.speed.level(), "speed changed");
        Mode::Simulating(sim)
    }

    fn on_editor_key(&mut self, mut editor: Editor, key: Key) -> Mode {
        let (h, w) = (self.grid.height(), self.grid.width());
        match key {
            Key::Up => editor.cursor = editor.cursor.wrapped_step(Direction::Up, h, w),
            Key::Down => editor.cursor = editor.cursor.wrapped_step(Direction::Down, h, w),
            Key::Left => editor.cursor = editor.cursor.wrapped_step(Direction::Left, h, w),
            Key::Right => editor.cursor = editor.cursor.wrapped_step(Direction::Right, h, w),
            Key::Space => {
                let cell = self.grid.toggle(editor.cursor);
                tracing::trace!(row = editor.cursor.row, col = editor.cursor.col, ?cell, "cell toggled");
            }
            Key::Char('q') | Key::Char('Q') | Key::Esc => return Mode::Menu,
            _ => {}
        }
        Mode::Editing(editor)
    }

    fn on_prompt_key(&mut self, mut prompt: PathPrompt, key: Key, loader: &dyn PatternLoader) -> Mode {
        // Any key acknowledges a load error
        if prompt.error.is_some() {
            return Mode::Menu;
        }

        match key {
            Key::Char(c) => prompt.input.push(c),
            Key::Space => prompt.input.push(' '),
            Key::Backspace => {
                prompt.input.pop();
            }
            Key::Esc => return Mode::Menu,
            Key::Enter => return self.submit_path(prompt, loader),
            _ => {}
        }
        Mode::Loading(prompt)
    }

    fn submit_path(&mut self, mut prompt: PathPrompt, loader: &dyn PatternLoader) -> Mode {
        let path = prompt.input.trim();
        if path.is_empty() {
            return Mode::Menu;
        }

        let (h, w) = (self.grid.height(), self.grid.width());
        match loader.open_and_parse(Path::new(path), h, w) {
            Ok(pattern) => {
                self.apply_pattern(&pattern);
                let population = self.grid.population();
                tracing::info!(path, population, "pattern loaded");
                self.status = Some(format!("Loaded {path}: {population} live cells"));
                Mode::Menu
            }
            Err(err) => {
                tracing::warn!(path, error = %err, "pattern load failed");
                prompt.error = Some(err.to_string());
                Mode::Loading(prompt)
            }
        }
    }

    /// Advance the simulation if a generation is due at `now`
    ///
    /// Takes at most one step per call. When the step finds the board already
    /// empty the run ends; the final board stays up until the next key.
    pub fn tick(&mut self, now: Instant) -> Option<StepResult> {
        let Mode::Simulating(sim) = &mut self.mode else {
            return None;
        };
        if sim.finished.is_some() {
            return None;
        }

        self.metrics.update();
        let interval = sim.speed.tick_interval(self.config.turn_interval())?;
        if now < sim.next_step_at {
            return None;
        }
        sim.next_step_at = now + interval;

        let result = self.engine.step(&mut self.grid);
        if result.activity {
            self.metrics.on_generation(result.population);
        } else {
            let generations = self.metrics.generation;
            tracing::info!(generations, "board died out");
            sim.finished = Some(format!("Board died out after {}", generation_count(generations)));
        }

        Some(result)
    }

    /// How long the session loop may wait for input before the next tick
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let frame = self.config.frame_interval();
        match &self.mode {
            Mode::Simulating(sim) if sim.finished.is_none() && !sim.speed.is_paused() => {
                sim.next_step_at.saturating_duration_since(now).min(frame)
            }
            _ => frame,
        }
    }

    /// Snapshot of what should be on screen
    pub fn scene(&self) -> Scene<'_> {
        let overlay = match &self.mode {
            Mode::Menu => Overlay::Menu {
                selected: self.menu.selected(),
                status: self.status.as_deref(),
            },
            Mode::Simulating(sim) => Overlay::Simulation {
                speed: sim.speed,
                metrics: &self.metrics,
                finished: sim.finished.as_deref(),
            },
            Mode::Editing(editor) => Overlay::Editor {
                cursor: editor.cursor,
            },
            Mode::Loading(prompt) => Overlay::Prompt {
                input: &prompt.input,
                error: prompt.error.as_deref(),
            },
        };

        Scene {
            grid: &self.grid,
            overlay,
        }
    }
}

fn generation_count(n: u64) -> String {
    match n {
        1 => "1 generation".to_string(),
        n => format!("{n} generations"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crate::loader::LoadError;
    use std::io;
    use std::path::PathBuf;

    /// Serves one fixed pattern for a known path, NotFound for anything else
    struct StubLoader {
        path: &'static str,
        alive: Vec<(usize, usize)>,
    }

    impl StubLoader {
        fn empty() -> Self {
            Self {
                path: "",
                alive: Vec::new(),
            }
        }
    }

    impl PatternLoader for StubLoader {
        fn open_and_parse(&self, path: &Path, height: usize, width: usize) -> Result<Grid, LoadError> {
            if path != Path::new(self.path) {
                return Err(LoadError::NotFound {
                    path: PathBuf::from(path),
                    source: io::Error::from(io::ErrorKind::NotFound),
                });
            }
            let mut grid = Grid::new(height, width)?;
            for &(r, c) in &self.alive {
                grid.set(r, c, Cell::Alive);
            }
            Ok(grid)
        }
    }

    fn controller() -> Controller {
        Controller::new(LifeConfig::small()).unwrap()
    }

    fn press(ctl: &mut Controller, keys: &[Key]) -> Transition {
        let loader = StubLoader::empty();
        let now = Instant::now();
        let mut last = Transition::Continue;
        for &key in keys {
            last = ctl.handle_key(key, now, &loader);
        }
        last
    }

    fn type_path(ctl: &mut Controller, path: &str, loader: &StubLoader) {
        let now = Instant::now();
        for c in path.chars() {
            ctl.handle_key(Key::Char(c), now, loader);
        }
        ctl.handle_key(Key::Enter, now, loader);
    }

    fn blinker(ctl: &mut Controller) {
        for col in 1..=3 {
            ctl.grid_mut().set(2, col, Cell::Alive);
        }
    }

    #[test]
    fn test_starts_on_menu() {
        let ctl = controller();
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert_eq!(ctl.menu_selection(), MenuItem::Start);
        assert!(ctl.grid().is_extinct());
        assert_eq!(ctl.speed(), None);
        assert_eq!(ctl.cursor(), None);
    }

    #[test]
    fn test_menu_wraps_both_ways() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Up]);
        assert_eq!(ctl.menu_selection(), MenuItem::Exit);
        press(&mut ctl, &[Key::Down]);
        assert_eq!(ctl.menu_selection(), MenuItem::Start);
    }

    #[test]
    fn test_menu_exit() {
        let mut ctl = controller();
        assert_eq!(press(&mut ctl, &[Key::Up, Key::Enter]), Transition::Exit);
    }

    #[test]
    fn test_menu_dispatch() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Enter]);
        assert!(matches!(ctl.mode(), Mode::Loading(_)));

        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Down, Key::Enter]);
        assert!(matches!(ctl.mode(), Mode::Editing(_)));

        let mut ctl = controller();
        press(&mut ctl, &[Key::Enter]);
        assert!(matches!(ctl.mode(), Mode::Simulating(_)));
        assert_eq!(ctl.speed(), Some(SpeedLevel::default()));
    }

    #[test]
    fn test_interrupt_exits_from_any_mode() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Down, Key::Enter]);
        assert_eq!(press(&mut ctl, &[Key::Interrupt]), Transition::Exit);
    }

    #[test]
    fn test_speed_clamped() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Enter, Key::Right, Key::Right, Key::Right, Key::Right]);
        assert_eq!(ctl.speed(), Some(SpeedLevel::MAX));

        press(&mut ctl, &[Key::Left, Key::Left, Key::Left, Key::Left, Key::Left]);
        assert_eq!(ctl.speed(), Some(SpeedLevel::PAUSED));
    }

    #[test]
    fn test_speed_resets_on_each_start() {
        let mut ctl = controller();
        blinker(&mut ctl);
        press(&mut ctl, &[Key::Enter, Key::Right, Key::Char('q'), Key::Char('q')]);
        assert_eq!(ctl.mode(), &Mode::Menu);

        press(&mut ctl, &[Key::Enter]);
        assert_eq!(ctl.speed(), Some(SpeedLevel::default()));
    }

    #[test]
    fn test_first_step_is_immediate() {
        let mut ctl = controller();
        blinker(&mut ctl);
        let start = Instant::now();
        ctl.handle_key(Key::Enter, start, &StubLoader::empty());

        let result = ctl.tick(start).unwrap();
        assert!(result.activity);
        assert!(ctl.grid().is_alive(1, 2));
        assert_eq!(ctl.metrics().generation, 1);

        // Nothing more until a full interval has passed
        assert_eq!(ctl.tick(start + Duration::from_millis(89)), None);
        assert!(ctl.tick(start + Duration::from_millis(90)).is_some());
        assert_eq!(ctl.metrics().generation, 2);
    }

    #[test]
    fn test_one_step_per_tick_without_catch_up() {
        let mut ctl = controller();
        blinker(&mut ctl);
        let start = Instant::now();
        ctl.handle_key(Key::Enter, start, &StubLoader::empty());

        ctl.tick(start);
        // Far past due: still a single step, rescheduled from now
        let late = start + Duration::from_secs(5);
        assert!(ctl.tick(late).is_some());
        assert_eq!(ctl.tick(late), None);
        assert_eq!(ctl.metrics().generation, 2);
    }

    #[test]
    fn test_paused_never_steps() {
        let mut ctl = controller();
        blinker(&mut ctl);
        let start = Instant::now();
        let loader = StubLoader::empty();
        ctl.handle_key(Key::Enter, start, &loader);
        ctl.handle_key(Key::Left, start, &loader);

        let before = ctl.grid().clone();
        for secs in 0..5 {
            assert_eq!(ctl.tick(start + Duration::from_secs(secs)), None);
        }
        assert_eq!(ctl.grid(), &before);
        assert_eq!(ctl.poll_timeout(start), ctl.config().frame_interval());
    }

    #[test]
    fn test_faster_speed_shortens_interval() {
        let mut ctl = controller();
        blinker(&mut ctl);
        let start = Instant::now();
        let loader = StubLoader::empty();
        ctl.handle_key(Key::Enter, start, &loader);
        ctl.tick(start);

        // Level 3: 90ms / 27
        ctl.handle_key(Key::Right, start, &loader);
        ctl.handle_key(Key::Right, start, &loader);
        assert_eq!(ctl.tick(start + Duration::from_millis(3)), None);
        assert!(ctl.tick(start + Duration::from_millis(4)).is_some());
    }

    fn finished(ctl: &Controller) -> Option<&str> {
        match ctl.mode() {
            Mode::Simulating(sim) => sim.finished.as_deref(),
            _ => None,
        }
    }

    #[test]
    fn test_extinction_holds_final_board_until_key() {
        let mut ctl = controller();
        ctl.grid_mut().set(5, 5, Cell::Alive);
        let start = Instant::now();
        let loader = StubLoader::empty();
        ctl.handle_key(Key::Enter, start, &loader);

        // The lone cell dies but was alive going in
        let first = ctl.tick(start).unwrap();
        assert!(first.activity);
        assert_eq!(finished(&ctl), None);

        let second = ctl.tick(start + Duration::from_millis(90)).unwrap();
        assert!(!second.activity);
        assert_eq!(finished(&ctl), Some("Board died out after 1 generation"));
        assert!(matches!(
            ctl.scene().overlay,
            Overlay::Simulation {
                finished: Some(_),
                ..
            }
        ));

        // Ended runs never step again and do not busy-poll
        assert_eq!(ctl.tick(start + Duration::from_secs(10)), None);
        assert_eq!(ctl.poll_timeout(start), ctl.config().frame_interval());
        assert_eq!(ctl.metrics().generation, 1);

        ctl.handle_key(Key::Space, start, &loader);
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert_eq!(ctl.status(), Some("Board died out after 1 generation"));
        assert_eq!(ctl.menu_selection(), MenuItem::Start);
    }

    #[test]
    fn test_quit_holds_final_board_until_key() {
        let mut ctl = controller();
        blinker(&mut ctl);
        let start = Instant::now();
        let loader = StubLoader::empty();
        ctl.handle_key(Key::Enter, start, &loader);
        ctl.tick(start);
        ctl.tick(start + Duration::from_millis(90));

        ctl.handle_key(Key::Char('q'), start, &loader);
        assert_eq!(finished(&ctl), Some("Stopped after 2 generations"));
        let board = ctl.grid().clone();
        assert_eq!(ctl.tick(start + Duration::from_secs(1)), None);
        assert_eq!(ctl.grid(), &board);

        // Speed keys only acknowledge the end of the run
        ctl.handle_key(Key::Right, start, &loader);
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert_eq!(ctl.status(), Some("Stopped after 2 generations"));
    }

    #[test]
    fn test_stop_message_singular() {
        let mut ctl = controller();
        blinker(&mut ctl);
        let start = Instant::now();
        let loader = StubLoader::empty();
        ctl.handle_key(Key::Enter, start, &loader);
        ctl.tick(start);

        ctl.handle_key(Key::Esc, start, &loader);
        assert_eq!(finished(&ctl), Some("Stopped after 1 generation"));
    }

    #[test]
    fn test_interrupt_exits_ended_run() {
        let mut ctl = controller();
        let start = Instant::now();
        let loader = StubLoader::empty();
        ctl.handle_key(Key::Enter, start, &loader);
        ctl.tick(start);
        assert!(finished(&ctl).is_some());

        assert_eq!(ctl.handle_key(Key::Interrupt, start, &loader), Transition::Exit);
    }

    #[test]
    fn test_still_life_never_auto_stops() {
        let mut ctl = controller();
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            ctl.grid_mut().set(r, c, Cell::Alive);
        }
        let start = Instant::now();
        ctl.handle_key(Key::Enter, start, &StubLoader::empty());

        for i in 0..50 {
            ctl.tick(start + Duration::from_millis(90 * i));
        }
        assert!(matches!(ctl.mode(), Mode::Simulating(_)));
        assert_eq!(ctl.metrics().generation, 50);
    }

    #[test]
    fn test_empty_board_stops_immediately() {
        let mut ctl = controller();
        let start = Instant::now();
        ctl.handle_key(Key::Enter, start, &StubLoader::empty());

        let result = ctl.tick(start).unwrap();
        assert!(!result.activity);
        assert_eq!(finished(&ctl), Some("Board died out after 0 generations"));
    }

    #[test]
    fn test_editor_cursor_starts_at_default_and_wraps() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Down, Key::Enter]);
        assert_eq!(ctl.cursor(), Some(Position::new(4, 4)));

        press(&mut ctl, &[Key::Up; 5]);
        assert_eq!(ctl.cursor(), Some(Position::new(9, 4)));

        press(&mut ctl, &[Key::Right; 6]);
        assert_eq!(ctl.cursor(), Some(Position::new(9, 0)));

        press(&mut ctl, &[Key::Down, Key::Left]);
        assert_eq!(ctl.cursor(), Some(Position::new(0, 9)));
    }

    #[test]
    fn test_editor_toggles_and_quits() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Down, Key::Enter, Key::Space]);
        assert!(ctl.grid().is_alive(4, 4));
        assert_eq!(ctl.grid().population(), 1);

        press(&mut ctl, &[Key::Right, Key::Space, Key::Space]);
        assert!(!ctl.grid().is_alive(4, 5));

        press(&mut ctl, &[Key::Char('q')]);
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert!(ctl.grid().is_alive(4, 4));
    }

    #[test]
    fn test_editor_cursor_resets_on_reentry() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Down, Key::Enter, Key::Up, Key::Char('q')]);
        press(&mut ctl, &[Key::Enter]);
        assert_eq!(ctl.cursor(), Some(Position::new(4, 4)));
    }

    #[test]
    fn test_load_success_replaces_grid() {
        let mut ctl = controller();
        ctl.grid_mut().set(9, 9, Cell::Alive);
        let loader = StubLoader {
            path: "glider.txt",
            alive: vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        };

        press(&mut ctl, &[Key::Down, Key::Enter]);
        type_path(&mut ctl, "glider.txt", &loader);

        assert_eq!(ctl.mode(), &Mode::Menu);
        assert_eq!(ctl.grid().population(), 5);
        assert!(!ctl.grid().is_alive(9, 9));
        assert_eq!(ctl.status(), Some("Loaded glider.txt: 5 live cells"));
    }

    #[test]
    fn test_load_failure_keeps_grid_and_waits_for_key() {
        let mut ctl = controller();
        ctl.grid_mut().set(3, 3, Cell::Alive);
        let before = ctl.grid().clone();
        let loader = StubLoader::empty();

        press(&mut ctl, &[Key::Down, Key::Enter]);
        type_path(&mut ctl, "missing.txt", &loader);

        match ctl.mode() {
            Mode::Loading(prompt) => {
                assert!(prompt.error.as_deref().unwrap().contains("missing.txt"));
            }
            other => panic!("expected loading mode, got {other:?}"),
        }
        assert_eq!(ctl.grid(), &before);

        press(&mut ctl, &[Key::Char('x')]);
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert_eq!(ctl.grid(), &before);
    }

    #[test]
    fn test_prompt_editing() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Enter]);
        press(
            &mut ctl,
            &[Key::Char('a'), Key::Space, Key::Char('q'), Key::Char('x'), Key::Backspace],
        );

        match ctl.mode() {
            Mode::Loading(prompt) => assert_eq!(prompt.input, "a q"),
            other => panic!("expected loading mode, got {other:?}"),
        }

        press(&mut ctl, &[Key::Esc]);
        assert_eq!(ctl.mode(), &Mode::Menu);
    }

    #[test]
    fn test_empty_path_returns_to_menu() {
        let mut ctl = controller();
        press(&mut ctl, &[Key::Down, Key::Enter, Key::Space, Key::Enter]);
        assert_eq!(ctl.mode(), &Mode::Menu);
        assert_eq!(ctl.status(), None);
    }

    #[test]
    fn test_poll_timeout_tracks_next_step() {
        let mut ctl = controller();
        blinker(&mut ctl);
        let start = Instant::now();
        ctl.handle_key(Key::Enter, start, &StubLoader::empty());

        assert_eq!(ctl.poll_timeout(start), Duration::ZERO);
        ctl.tick(start);
        assert_eq!(
            ctl.poll_timeout(start + Duration::from_millis(80)),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_scene_follows_mode() {
        let mut ctl = controller();
        assert!(matches!(
            ctl.scene().overlay,
            Overlay::Menu {
                selected: MenuItem::Start,
                status: None
            }
        ));

        press(&mut ctl, &[Key::Down, Key::Down, Key::Enter]);
        assert_eq!(
            ctl.scene().overlay,
            Overlay::Editor {
                cursor: Position::new(4, 4)
            }
        );
    }
}
