mod direction;
mod grid;
mod placement;
mod snake;
use self::direction::Direction;
use self::grid::Grid;
use self::snake::{Snake, Step};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::record::{RecordStore, SaveError};
use crate::util::{center_rect, format_time, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
    Frame,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

static PAUSED_MESSAGE: &[&str] = &["Game Paused.", "Press any arrow key to continue."];

static WON_MESSAGE: &[&str] = &[
    "Congratulations! You have won the game.",
    "Click here or press enter key to restart the game.",
];

static LOST_MESSAGE: &[&str] = &[
    "Game Over! Click here or press",
    "enter key to restart the game.",
];

/// One round of snake: the session aggregate and its tick loop.
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    apple: Position,
    state: GameState,
    /// Apples eaten this round
    apples_eaten: u32,
    /// Best snake length across all sessions; never decreases
    record: u32,
    store: RecordStore,
    /// When the current round started
    started: Instant,
    /// Total time spent paused this round
    paused_total: Duration,
    /// While paused or after the round has ended, the instant the elapsed
    /// clock stopped at
    clock_stopped: Option<Instant>,
    /// When the tick currently being waited out began
    tick_start: Option<Instant>,
    /// Whether the player is holding the key for the current heading
    boost: bool,
    /// The terminal area we last drew into, for click hit-testing
    viewport: Rect,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(store: RecordStore, record: u32) -> Game {
        Game::new_with_rng(store, record, Grid::new(consts::GRID_SIZE), rand::rng())
    }
}

impl<R: Rng> Game<R> {
    fn new_with_rng(store: RecordStore, record: u32, grid: Grid, mut rng: R) -> Game<R> {
        let snake = spawn_snake(&mut rng, grid);
        let occupied = snake.cells().collect::<HashSet<_>>();
        let apple = placement::random_free_cell(&mut rng, grid, &occupied)
            .expect("a fresh arena should have a free cell for the apple");
        Game {
            rng,
            grid,
            snake,
            apple,
            state: GameState::Running,
            apples_eaten: 0,
            record,
            store,
            started: Instant::now(),
            paused_total: Duration::ZERO,
            clock_stopped: None,
            tick_start: None,
            boost: false,
            viewport: Rect::ZERO,
        }
    }

    /// Wait out the rest of the current tick, handling at most one input
    /// event.  While the game is not running, block on input instead.
    pub(crate) fn process_input(&mut self) -> anyhow::Result<Option<Screen>> {
        if self.running() {
            let start = *self.tick_start.get_or_insert_with(Instant::now);
            let due = start + self.tick_period();
            let wait = due.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick_start = None;
                self.advance_tick()?;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Advance the simulation by one tick
    fn advance_tick(&mut self) -> Result<(), SaveError> {
        if !self.running() {
            return Ok(());
        }
        self.boost = false;
        match self.snake.advance(self.grid, self.apple) {
            Step::Moved => (),
            Step::Ate => {
                self.apples_eaten += 1;
                if self.snake.len() == self.grid.total_cells() {
                    self.finish(GameState::Won)?;
                } else {
                    self.place_apple();
                }
            }
            Step::Collided => self.finish(GameState::Lost)?,
        }
        Ok(())
    }

    /// Move the apple to a random cell not occupied by the snake.  The
    /// caller is responsible for having ruled out a full arena (the win
    /// condition) first.
    fn place_apple(&mut self) {
        let occupied = self.snake.cells().collect::<HashSet<_>>();
        self.apple = placement::random_free_cell(&mut self.rng, self.grid, &occupied)
            .expect("the arena should have a free cell when the snake has not filled it");
    }

    /// End the round, freezing the clock and persisting a new record if one
    /// was set
    fn finish(&mut self, outcome: GameState) -> Result<(), SaveError> {
        self.state = outcome;
        self.clock_stopped = Some(Instant::now());
        self.tick_start = None;
        let length = u32::try_from(self.snake.len()).unwrap_or(u32::MAX);
        if length > self.record {
            self.record = length;
            self.store.save(length)?;
        }
        Ok(())
    }

    /// Start a fresh round, keeping the rng and the record
    fn restart(&mut self) {
        self.snake = spawn_snake(&mut self.rng, self.grid);
        self.place_apple();
        self.apples_eaten = 0;
        self.state = GameState::Running;
        self.started = Instant::now();
        self.paused_total = Duration::ZERO;
        self.clock_stopped = None;
        self.tick_start = None;
        self.boost = false;
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                    return None;
                }
                match Command::from_event(&event)? {
                    Command::Quit => return Some(Screen::Quit),
                    Command::Up => self.steer(Direction::North),
                    Command::Down => self.steer(Direction::South),
                    Command::Left => self.steer(Direction::West),
                    Command::Right => self.steer(Direction::East),
                    Command::Pause => self.pause(),
                    _ => (),
                }
            }
            GameState::Paused => match Command::from_event(&event)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.resume(Direction::North),
                Command::Down => self.resume(Direction::South),
                Command::Left => self.resume(Direction::West),
                Command::Right => self.resume(Direction::East),
                _ => (),
            },
            GameState::Won | GameState::Lost => match Command::from_event(&event)? {
                Command::Quit => return Some(Screen::Quit),
                Command::Confirm => self.restart(),
                Command::Click(pos) => {
                    if self.restart_zone().is_some_and(|zone| zone.contains(pos)) {
                        self.restart();
                    }
                }
                _ => (),
            },
        }
        None
    }

    /// Apply a direction input: buffer the turn for the next tick and note
    /// whether the player is leaning on the current heading
    fn steer(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
        self.boost = direction == self.snake.heading();
    }

    fn pause(&mut self) {
        self.state = GameState::Paused;
        self.clock_stopped = Some(Instant::now());
        self.tick_start = None;
        self.boost = false;
    }

    fn resume(&mut self, direction: Direction) {
        if let Some(stopped) = self.clock_stopped.take() {
            self.paused_total += stopped.elapsed();
        }
        self.state = GameState::Running;
        self.steer(direction);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>) {
        self.viewport = frame.area();
        frame.render_widget(&*self, frame.area());
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Wall-clock play time this round, excluding time spent paused
    fn elapsed(&self) -> Duration {
        self.clock_stopped
            .unwrap_or_else(Instant::now)
            .saturating_duration_since(self.started)
            .saturating_sub(self.paused_total)
    }

    fn tick_period(&self) -> Duration {
        if self.boost {
            consts::BOOST_TICK_PERIOD
        } else {
            consts::TICK_PERIOD
        }
    }

    fn message_box(&self) -> Option<MessageBox> {
        match self.state {
            GameState::Running => None,
            GameState::Paused => Some(MessageBox::new(PAUSED_MESSAGE)),
            GameState::Won => Some(MessageBox::new(WON_MESSAGE)),
            GameState::Lost => Some(MessageBox::new(LOST_MESSAGE)),
        }
    }

    /// The on-screen region a click restarts the game from, if any
    fn restart_zone(&self) -> Option<Rect> {
        if matches!(self.state, GameState::Won | GameState::Lost) {
            let display = get_display_area(self.viewport);
            self.message_box().map(|message| message.area_in(display))
        } else {
            None
        }
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, consts::STATUS_BAR_STYLE);
        Line::from(format!(" Apples: {}", self.apples_eaten)).render(area, buf);
        Line::from(format_time(self.elapsed()))
            .centered()
            .render(area, buf);
        Line::from(format!("Record: {} ", self.record))
            .right_aligned()
            .render(area, buf);
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, arena_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        self.render_status(status_area, buf);

        let mut block_size = self.grid.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(arena_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut arena = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        arena.draw_cell(self.apple, consts::APPLE_SYMBOL, consts::APPLE_STYLE);
        for (index, &pos) in self.snake.body().iter().rev().enumerate() {
            arena.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, body_style(index));
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.state == GameState::Lost {
            arena.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            arena.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_HEAD_STYLE,
            );
        }

        if let Some(message) = self.message_box() {
            message.render(message.area_in(display), buf);
        }
    }
}

/// Pick a random cell for a new snake's head and point it away from the
/// nearest wall
fn spawn_snake<R: Rng>(rng: &mut R, grid: Grid) -> Snake {
    let head = placement::random_free_cell(rng, grid, &HashSet::new())
        .expect("an empty arena should have free cells");
    let heading = Direction::away_from_nearest_edge(head, grid);
    Snake::spawn(head, heading)
}

/// Style for the snake's body, cycling deterministically from the neck
/// backwards
fn body_style(index: usize) -> Style {
    consts::SNAKE_PALETTE[index % consts::SNAKE_PALETTE.len()]
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// A centered pop-up of fixed message lines, cleared of whatever is beneath
/// it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct MessageBox {
    lines: &'static [&'static str],
}

impl MessageBox {
    fn new(lines: &'static [&'static str]) -> MessageBox {
        MessageBox { lines }
    }

    fn size(self) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Size {
            width: u16::try_from(width).unwrap_or(u16::MAX).saturating_add(4),
            height: u16::try_from(self.lines.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2),
        }
    }

    fn area_in(self, display: Rect) -> Rect {
        center_rect(display, self.size())
    }
}

impl Widget for MessageBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .padding(Padding::horizontal(1))
            .style(consts::MESSAGE_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        for (line, row) in self.lines.iter().zip(inner.rows()) {
            Line::from(*line).centered().render(row, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused,
    /// The snake has filled the arena; awaiting a restart
    Won,
    /// The snake hit a wall or itself; awaiting a restart
    Lost,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn game_at(record: u32, tmpdir: &TempDir) -> Game<ChaCha12Rng> {
        Game::new_with_rng(
            RecordStore::new(tmpdir.path().join("record.json")),
            record,
            Grid::new(consts::GRID_SIZE),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    /// Pin the snake to a known spot: head at (12, 12) heading east, body
    /// trailing west, apple at (2, 2)
    fn pin_snake(game: &mut Game<ChaCha12Rng>) {
        game.snake = Snake {
            head: Position::new(12, 12),
            body: VecDeque::from([Position::new(10, 12), Position::new(11, 12)]),
            len: 3,
            heading: Direction::East,
            pending: Direction::East,
        };
        game.apple = Position::new(2, 2);
    }

    #[test]
    fn spawn_satisfies_the_session_invariants() {
        let tmpdir = TempDir::new().unwrap();
        let game = game_at(0, &tmpdir);
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.apples_eaten, 0);
        assert!(game.grid.contains(game.snake.head()));
        assert!(game.grid.contains(game.apple));
        assert!(!game.snake.occupies(game.apple));
        // the first move leads away from the nearest wall
        let next = game
            .snake
            .heading()
            .advance(game.snake.head(), game.grid)
            .expect("the spawn heading should not lead into a wall");
        assert!(game.grid.contains(next));
    }

    #[test]
    fn eating_grows_and_relocates_the_apple() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        pin_snake(&mut game);
        game.apple = Position::new(13, 12);
        game.advance_tick().unwrap();
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.apples_eaten, 1);
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.snake.head(), Position::new(13, 12));
        assert_ne!(game.apple, Position::new(13, 12));
        assert!(game.grid.contains(game.apple));
        assert!(!game.snake.occupies(game.apple));
    }

    #[test]
    fn wall_collision_loses_and_updates_the_record() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(0, &tmpdir);
        pin_snake(&mut game);
        game.snake.head = Position::new(24, 12);
        game.snake.body = VecDeque::from([Position::new(22, 12), Position::new(23, 12)]);
        game.advance_tick().unwrap();
        assert_eq!(game.state, GameState::Lost);
        assert_eq!(game.record, 3);
        assert_eq!(game.store.load().unwrap(), 3);
    }

    #[test]
    fn self_collision_loses() {
        // A length-4 snake moving right into its own body cell one step east
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(0, &tmpdir);
        game.snake = Snake {
            head: Position::new(10, 10),
            body: VecDeque::from([
                Position::new(11, 10),
                Position::new(11, 9),
                Position::new(10, 9),
            ]),
            len: 4,
            heading: Direction::East,
            pending: Direction::East,
        };
        game.apple = Position::new(2, 2);
        game.advance_tick().unwrap();
        assert_eq!(game.state, GameState::Lost);
        assert_eq!(game.record, 4);
    }

    #[test]
    fn record_only_moves_upwards() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(10, &tmpdir);
        pin_snake(&mut game);
        game.snake.head = Position::new(24, 12);
        game.snake.body = VecDeque::from([Position::new(22, 12), Position::new(23, 12)]);
        game.advance_tick().unwrap();
        assert_eq!(game.state, GameState::Lost);
        assert_eq!(game.record, 10);
        // nothing was persisted
        assert_eq!(game.store.load().unwrap(), 0);
    }

    #[test]
    fn winning_fills_the_grid() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = Game::new_with_rng(
            RecordStore::new(tmpdir.path().join("record.json")),
            0,
            Grid::new(Size::new(2, 2)),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        game.snake = Snake {
            head: Position::new(0, 1),
            body: VecDeque::from([Position::new(1, 0), Position::new(1, 1)]),
            len: 3,
            heading: Direction::West,
            pending: Direction::North,
        };
        game.apple = Position::new(0, 0);
        game.advance_tick().unwrap();
        assert_eq!(game.state, GameState::Won);
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.apples_eaten, 1);
        // no free cell is left, so the apple was not relocated
        assert_eq!(game.apple, Position::new(0, 0));
        assert_eq!(game.record, 4);
        assert_eq!(game.store.load().unwrap(), 4);
    }

    #[test]
    fn restart_resets_the_session_but_not_the_record() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(0, &tmpdir);
        pin_snake(&mut game);
        game.snake.head = Position::new(24, 12);
        game.snake.body = VecDeque::from([Position::new(22, 12), Position::new(23, 12)]);
        game.apples_eaten = 5;
        game.advance_tick().unwrap();
        assert_eq!(game.state, GameState::Lost);
        assert!(game
            .handle_event(Event::Key(KeyCode::Enter.into()))
            .is_none());
        assert_eq!(game.state, GameState::Running);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.apples_eaten, 0);
        assert!(game.elapsed() < Duration::from_secs(1));
        assert!(!game.snake.occupies(game.apple));
        assert_eq!(game.record, 3);
    }

    #[test]
    fn click_inside_the_message_restarts() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        pin_snake(&mut game);
        game.state = GameState::Lost;
        game.viewport = Rect::new(0, 0, 80, 24);
        // the lost-message pop-up occupies Rect::new(23, 10, 34, 4)
        assert_eq!(game.restart_zone(), Some(Rect::new(23, 10, 34, 4)));
        let miss = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert!(game.handle_event(miss).is_none());
        assert_eq!(game.state, GameState::Lost);
        let hit = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 30,
            row: 11,
            modifiers: KeyModifiers::NONE,
        });
        assert!(game.handle_event(hit).is_none());
        assert_eq!(game.state, GameState::Running);
    }

    #[test]
    fn reverse_input_is_ignored_and_last_turn_wins() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        pin_snake(&mut game);
        assert!(game
            .handle_event(Event::Key(KeyCode::Left.into()))
            .is_none());
        assert_eq!(game.snake.pending, Direction::East);
        assert!(game.handle_event(Event::Key(KeyCode::Up.into())).is_none());
        assert!(game
            .handle_event(Event::Key(KeyCode::Down.into()))
            .is_none());
        game.advance_tick().unwrap();
        assert_eq!(game.snake.heading(), Direction::South);
        assert_eq!(game.snake.head(), Position::new(12, 13));
    }

    #[test]
    fn space_pauses_and_an_arrow_resumes() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        pin_snake(&mut game);
        assert!(game
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        assert_eq!(game.state, GameState::Paused);
        assert!(game.clock_stopped.is_some());
        // a second space while paused changes nothing
        assert!(game
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        assert_eq!(game.state, GameState::Paused);
        // the resuming arrow is applied as the new direction
        assert!(game
            .handle_event(Event::Key(KeyCode::Down.into()))
            .is_none());
        assert_eq!(game.state, GameState::Running);
        assert!(game.clock_stopped.is_none());
        assert_eq!(game.snake.pending, Direction::South);
    }

    #[test]
    fn focus_loss_pauses() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        pin_snake(&mut game);
        assert!(game.handle_event(Event::FocusLost).is_none());
        assert_eq!(game.state, GameState::Paused);
    }

    #[test]
    fn quit_works_in_every_state() {
        let tmpdir = TempDir::new().unwrap();
        for state in [
            GameState::Running,
            GameState::Paused,
            GameState::Won,
            GameState::Lost,
        ] {
            let mut game = game_at(99, &tmpdir);
            game.state = state;
            assert!(matches!(
                game.handle_event(Event::Key(KeyCode::Esc.into())),
                Some(Screen::Quit)
            ));
        }
    }

    #[test]
    fn elapsed_excludes_time_spent_paused() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        let now = Instant::now();
        game.started = now;
        game.paused_total = Duration::from_millis(10);
        game.clock_stopped = Some(now + Duration::from_millis(40));
        assert_eq!(game.elapsed(), Duration::from_millis(30));
    }

    #[test]
    fn boost_follows_the_heading() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        pin_snake(&mut game);
        assert_eq!(game.tick_period(), consts::TICK_PERIOD);
        // leaning on the current heading speeds the snake up
        assert!(game
            .handle_event(Event::Key(KeyCode::Right.into()))
            .is_none());
        assert_eq!(game.tick_period(), consts::BOOST_TICK_PERIOD);
        // a cross turn does not
        assert!(game.handle_event(Event::Key(KeyCode::Up.into())).is_none());
        assert_eq!(game.tick_period(), consts::TICK_PERIOD);
        // and each tick the boost must be re-asserted
        assert!(game
            .handle_event(Event::Key(KeyCode::Right.into()))
            .is_none());
        assert_eq!(game.tick_period(), consts::BOOST_TICK_PERIOD);
        game.advance_tick().unwrap();
        assert_eq!(game.tick_period(), consts::TICK_PERIOD);
    }

    #[test]
    fn render_running() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(0, &tmpdir);
        pin_snake(&mut game);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&game).render(area, &mut buffer);
        #[rustfmt::skip]
        let mut expected = Buffer::with_lines([
            " Apples: 0                           00:00                            Record: 0 ",
            "                                                                                ",
            "                                                                                ",
            "                          ┌─────────────────────────┐                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │  ●                      │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │          ⚬⚬<            │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          └─────────────────────────┘                           ",
            "                                                                                ",
            "                                                                                ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(29, 6, 1, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(38, 16, 1, 1), consts::SNAKE_PALETTE[0]);
        expected.set_style(Rect::new(37, 16, 1, 1), consts::SNAKE_PALETTE[1]);
        expected.set_style(Rect::new(39, 16, 1, 1), consts::SNAKE_HEAD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_paused() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(0, &tmpdir);
        pin_snake(&mut game);
        assert!(game
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&game).render(area, &mut buffer);
        #[rustfmt::skip]
        let mut expected = Buffer::with_lines([
            " Apples: 0                           00:00                            Record: 0 ",
            "                                                                                ",
            "                                                                                ",
            "                          ┌─────────────────────────┐                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │  ●                      │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                      ┌──────────────────────────────────┐                      ",
            "                      │           Game Paused.           │                      ",
            "                      │ Press any arrow key to continue. │                      ",
            "                      └──────────────────────────────────┘                      ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │          ⚬⚬<            │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          └─────────────────────────┘                           ",
            "                                                                                ",
            "                                                                                ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(29, 6, 1, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(38, 16, 1, 1), consts::SNAKE_PALETTE[0]);
        expected.set_style(Rect::new(37, 16, 1, 1), consts::SNAKE_PALETTE[1]);
        expected.set_style(Rect::new(39, 16, 1, 1), consts::SNAKE_HEAD_STYLE);
        expected.set_style(Rect::new(22, 10, 36, 4), consts::MESSAGE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_lost() {
        let tmpdir = TempDir::new().unwrap();
        let mut game = game_at(99, &tmpdir);
        pin_snake(&mut game);
        game.snake.head = Position::new(24, 16);
        game.snake.body = VecDeque::from([Position::new(22, 16), Position::new(23, 16)]);
        game.advance_tick().unwrap();
        assert_eq!(game.state, GameState::Lost);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&game).render(area, &mut buffer);
        #[rustfmt::skip]
        let mut expected = Buffer::with_lines([
            " Apples: 0                           00:00                           Record: 99 ",
            "                                                                                ",
            "                                                                                ",
            "                          ┌─────────────────────────┐                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │  ●                      │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                       ┌────────────────────────────────┐                       ",
            "                       │ Game Over! Click here or press │                       ",
            "                       │ enter key to restart the game. │                       ",
            "                       └────────────────────────────────┘                       ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                         │                           ",
            "                          │                      ⚬⚬×│                           ",
            "                          └─────────────────────────┘                           ",
            "                                                                                ",
            "                                                                                ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(29, 6, 1, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(50, 20, 1, 1), consts::SNAKE_PALETTE[0]);
        expected.set_style(Rect::new(49, 20, 1, 1), consts::SNAKE_PALETTE[1]);
        expected.set_style(Rect::new(51, 20, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(23, 10, 34, 4), consts::MESSAGE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
