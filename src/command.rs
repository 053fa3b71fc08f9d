use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Confirm,
    /// A left-button press, in terminal coordinates
    Click(Position),
}

impl Command {
    pub(crate) fn from_event(event: &Event) -> Option<Command> {
        match event {
            Event::Key(_) => Command::from_key_event(event.as_key_press_event()?),
            Event::Mouse(mev) => Command::from_mouse_event(*mev),
            _ => None,
        }
    }

    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Confirm),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Pause),
            _ => None,
        }
    }

    fn from_mouse_event(ev: MouseEvent) -> Option<Command> {
        if ev.kind == MouseEventKind::Down(MouseButton::Left) {
            Some(Command::Click(Position::new(ev.column, ev.row)))
        } else {
            None
        }
    }
}
