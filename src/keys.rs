use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Non-character keys a layout row may contain.
///
/// `Suggestion(n)` is the n-th slot of the suggestion row; the slot index is
/// an explicit payload rather than a parsed string suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialKey {
    Backspace,
    Shift,
    Capslock,
    Ctrl,
    Enter,
    Escape,
    Spacer,
    Suggestion(usize),
}

impl FromStr for SpecialKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backspace" => Ok(Self::Backspace),
            "shift" => Ok(Self::Shift),
            "capslock" => Ok(Self::Capslock),
            "ctrl" => Ok(Self::Ctrl),
            "enter" => Ok(Self::Enter),
            "escape" => Ok(Self::Escape),
            "spacer" => Ok(Self::Spacer),
            _ => {
                if let Some(idx) = s.strip_prefix("sug") {
                    idx.parse()
                        .map(Self::Suggestion)
                        .map_err(|_| format!("Invalid suggestion slot '{}'", s))
                } else {
                    Err(format!("Unknown special key '{}'", s))
                }
            }
        }
    }
}

impl fmt::Display for SpecialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backspace => write!(f, "backspace"),
            Self::Shift => write!(f, "shift"),
            Self::Capslock => write!(f, "capslock"),
            Self::Ctrl => write!(f, "ctrl"),
            Self::Enter => write!(f, "enter"),
            Self::Escape => write!(f, "escape"),
            Self::Spacer => write!(f, "spacer"),
            Self::Suggestion(n) => write!(f, "sug{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Char(char),
    Special(SpecialKey),
}

/// One key of a layout row: display label, text inserted on press, the
/// action it triggers, and its width in layout units (1.0 = one key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub label: String,
    pub output: String,
    pub action: KeyAction,
    pub width: f32,
}

impl Key {
    pub fn ch(c: char) -> Self {
        Self {
            label: c.to_string(),
            output: c.to_string(),
            action: KeyAction::Char(c),
            width: 1.0,
        }
    }

    pub fn special(label: &str, special: SpecialKey, width: f32) -> Self {
        Self {
            label: label.to_string(),
            output: String::new(),
            action: KeyAction::Special(special),
            width,
        }
    }

    /// The character this key types, when it is a plain character key.
    pub fn character(&self) -> Option<char> {
        match self.action {
            KeyAction::Char(c) => Some(c),
            KeyAction::Special(_) => None,
        }
    }
}
