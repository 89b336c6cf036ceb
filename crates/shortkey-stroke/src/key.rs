use serde::{Deserialize, Serialize};

/// The non-modifier key half of a [`crate::Chord`].
///
/// This is a deliberately small, platform-neutral subset of a real keyboard
/// layout table: letters, digits, the common editing/navigation keys, the
/// function row, and a handful of punctuation keys. A production
/// canonicalizer would drive this from the host's layout tables; this crate
/// is the reference collaborator the engine is tested against; the engine
/// itself never inspects `Key` variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Space, Enter, Tab, Escape, Backspace, Delete,
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    Comma, Period, Semicolon, Slash, Minus, Equal,
}

impl Key {
    /// Parses a key spec such as `"k"`, `"space"`, `"f5"`, `"1"`, or `","`.
    /// Case-insensitive; aliases cover the most common spellings.
    pub fn from_spec(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase();
        Some(match lower.as_str() {
            "a" => Key::A, "b" => Key::B, "c" => Key::C, "d" => Key::D,
            "e" => Key::E, "f" => Key::F, "g" => Key::G, "h" => Key::H,
            "i" => Key::I, "j" => Key::J, "k" => Key::K, "l" => Key::L,
            "m" => Key::M, "n" => Key::N, "o" => Key::O, "p" => Key::P,
            "q" => Key::Q, "r" => Key::R, "s" => Key::S, "t" => Key::T,
            "u" => Key::U, "v" => Key::V, "w" => Key::W, "x" => Key::X,
            "y" => Key::Y, "z" => Key::Z,
            "0" => Key::Digit0, "1" => Key::Digit1, "2" => Key::Digit2,
            "3" => Key::Digit3, "4" => Key::Digit4, "5" => Key::Digit5,
            "6" => Key::Digit6, "7" => Key::Digit7, "8" => Key::Digit8,
            "9" => Key::Digit9,
            "space" | " " => Key::Space,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "escape" | "esc" => Key::Escape,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "up" | "arrowup" => Key::ArrowUp,
            "down" | "arrowdown" => Key::ArrowDown,
            "left" | "arrowleft" => Key::ArrowLeft,
            "right" | "arrowright" => Key::ArrowRight,
            "f1" => Key::F1, "f2" => Key::F2, "f3" => Key::F3, "f4" => Key::F4,
            "f5" => Key::F5, "f6" => Key::F6, "f7" => Key::F7, "f8" => Key::F8,
            "f9" => Key::F9, "f10" => Key::F10, "f11" => Key::F11, "f12" => Key::F12,
            "," => Key::Comma,
            "." => Key::Period,
            ";" => Key::Semicolon,
            "/" => Key::Slash,
            "-" => Key::Minus,
            "=" => Key::Equal,
            _ => return None,
        })
    }

    /// Canonical spec string for this key, always lowercase.
    pub fn to_spec(self) -> &'static str {
        match self {
            Key::A => "a", Key::B => "b", Key::C => "c", Key::D => "d",
            Key::E => "e", Key::F => "f", Key::G => "g", Key::H => "h",
            Key::I => "i", Key::J => "j", Key::K => "k", Key::L => "l",
            Key::M => "m", Key::N => "n", Key::O => "o", Key::P => "p",
            Key::Q => "q", Key::R => "r", Key::S => "s", Key::T => "t",
            Key::U => "u", Key::V => "v", Key::W => "w", Key::X => "x",
            Key::Y => "y", Key::Z => "z",
            Key::Digit0 => "0", Key::Digit1 => "1", Key::Digit2 => "2",
            Key::Digit3 => "3", Key::Digit4 => "4", Key::Digit5 => "5",
            Key::Digit6 => "6", Key::Digit7 => "7", Key::Digit8 => "8",
            Key::Digit9 => "9",
            Key::Space => "space",
            Key::Enter => "enter",
            Key::Tab => "tab",
            Key::Escape => "escape",
            Key::Backspace => "backspace",
            Key::Delete => "delete",
            Key::ArrowUp => "up",
            Key::ArrowDown => "down",
            Key::ArrowLeft => "left",
            Key::ArrowRight => "right",
            Key::F1 => "f1", Key::F2 => "f2", Key::F3 => "f3", Key::F4 => "f4",
            Key::F5 => "f5", Key::F6 => "f6", Key::F7 => "f7", Key::F8 => "f8",
            Key::F9 => "f9", Key::F10 => "f10", Key::F11 => "f11", Key::F12 => "f12",
            Key::Comma => ",",
            Key::Period => ".",
            Key::Semicolon => ";",
            Key::Slash => "/",
            Key::Minus => "-",
            Key::Equal => "=",
        }
    }
}
