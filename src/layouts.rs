use crate::geometry::KeyLayout;
use crate::keys::{Key, SpecialKey};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Azerty,
    Dvorak,
}

impl KnownLayout {
    fn letter_rows(&self) -> [&'static str; 3] {
        match self {
            Self::Qwerty => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
            Self::Azerty => ["azertyuiop", "qsdfghjklm", "wxcvbn"],
            Self::Dvorak => ["pyfgcrl", "aoeuidhtns", "qjkxbmwvz"],
        }
    }

    /// Full row definitions: suggestion row on top, three letter rows, a
    /// bottom utility row. Matches the dock layout the engine was built for.
    pub fn rows(&self) -> Vec<Vec<Key>> {
        let [top, home, bottom] = self.letter_rows();

        let mut rows = Vec::with_capacity(5);
        rows.push(
            (0..6usize)
                .map(|i| Key::special("", SpecialKey::Suggestion(i), 2.5))
                .collect(),
        );
        rows.push(letter_row(top));
        rows.push(letter_row(home));

        let mut third = vec![Key::special("shift", SpecialKey::Shift, 1.5)];
        third.extend(letter_row(bottom));
        third.push(Key::special("bksp", SpecialKey::Backspace, 1.5));
        rows.push(third);

        rows.push(vec![
            Key::special("ctrl", SpecialKey::Ctrl, 1.5),
            Key::special("caps", SpecialKey::Capslock, 1.5),
            Key {
                label: "space".to_string(),
                output: " ".to_string(),
                action: crate::keys::KeyAction::Char(' '),
                width: 6.0,
            },
            Key::special("enter", SpecialKey::Enter, 2.0),
        ]);

        rows
    }

    pub fn key_layout(&self) -> KeyLayout {
        KeyLayout::from_rows(&self.rows(), 1.0, 1.0)
    }
}

fn letter_row(letters: &str) -> Vec<Key> {
    letters.chars().map(Key::ch).collect()
}

pub fn get_all_layouts() -> HashMap<KnownLayout, KeyLayout> {
    KnownLayout::iter().map(|l| (l, l.key_layout())).collect()
}
