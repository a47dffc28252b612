use std::fmt;
use std::str::FromStr;

use winit::keyboard::KeyCode;

/// Keys the demo reacts to. Discriminants index `InputSnapshot::keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    S,
    W,
    Left,
    Right,
    Down,
    Up,
    F,
    LeftBracket,
    RightBracket,
    Equals,
    Minus,
    Num0,
    Tab,
    Escape,
}

impl Key {
    pub const COUNT: usize = 16;

    pub const ALL: [Key; Key::COUNT] = [
        Key::A,
        Key::D,
        Key::S,
        Key::W,
        Key::Left,
        Key::Right,
        Key::Down,
        Key::Up,
        Key::F,
        Key::LeftBracket,
        Key::RightBracket,
        Key::Equals,
        Key::Minus,
        Key::Num0,
        Key::Tab,
        Key::Escape,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Key::A => "a",
            Key::D => "d",
            Key::S => "s",
            Key::W => "w",
            Key::Left => "left",
            Key::Right => "right",
            Key::Down => "down",
            Key::Up => "up",
            Key::F => "f",
            Key::LeftBracket => "[",
            Key::RightBracket => "]",
            Key::Equals => "=",
            Key::Minus => "-",
            Key::Num0 => "0",
            Key::Tab => "tab",
            Key::Escape => "escape",
        }
    }

    /// Map a winit physical key to a demo key
    pub fn from_keycode(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::KeyW => Some(Key::W),
            KeyCode::ArrowLeft => Some(Key::Left),
            KeyCode::ArrowRight => Some(Key::Right),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::KeyF => Some(Key::F),
            KeyCode::BracketLeft => Some(Key::LeftBracket),
            KeyCode::BracketRight => Some(Key::RightBracket),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(Key::Equals),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(Key::Minus),
            KeyCode::Digit0 | KeyCode::Numpad0 => Some(Key::Num0),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| format!("unknown key '{s}'"))
    }
}
