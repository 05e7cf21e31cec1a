//! Event mapping from terminal events to puzzle input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { column: u16, row: u16 },
    Move { column: u16, row: u16 },
    Up { column: u16, row: u16 },
}

/// Non-pointer user commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reshuffle at the current size.
    Reset,
    /// One step larger grid.
    Grow,
    /// One step smaller grid.
    Shrink,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Command(Command),
    Resize { width: u16, height: u16 },
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
            Some(Command::Grow)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left | KeyCode::Down => {
            Some(Command::Shrink)
        }
        _ => None,
    }
}

/// Map left-button mouse activity to pointer events.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { column, row }),
        _ => None,
    }
}

/// Map any terminal event. Key releases and repeats are dropped.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(*key).map(InputEvent::Command)
        }
        Event::Mouse(mouse) => handle_mouse_event(*mouse).map(InputEvent::Pointer),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
