//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 1.1.0
// License : Mulan PSL v2
//
// Character classes

use std::collections::HashSet;
use std::fmt;

pub const LOWERCASE: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const SPECIAL: [char; 34] = [
    '&', '~', '"', '#', '\'', '{', '(', '[', '-', '|', '`', '_', '^',
    '@', ')', ']', '°', '+', '=', '}', '¨', '£', '$', '¤', '%', 'µ',
    '*', '!', '§', ':', ';', '.', ',', '?',
];

/// 字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharClass {
    /// Generation order used by the password generator.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static [char] {
        match self {
            CharClass::Lower => &LOWERCASE,
            CharClass::Upper => &UPPERCASE,
            CharClass::Digit => &DIGITS,
            CharClass::Special => &SPECIAL,
        }
    }

    /// The class alphabet with every banned character removed, order kept.
    pub fn effective(self, banned: &HashSet<char>) -> Vec<char> {
        self.alphabet()
            .iter()
            .copied()
            .filter(|c| !banned.contains(c))
            .collect()
    }

    /// Which class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharClass> {
        CharClass::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(&c))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lower => "lowercase",
            CharClass::Upper => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Special => "special symbol",
        };
        f.write_str(name)
    }
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Digits and special symbols are carried verbatim by the sentence transforms.
pub fn is_digit_or_special(c: char) -> bool {
    c.is_ascii_digit() || SPECIAL.contains(&c)
}

pub fn is_special(c: char) -> bool {
    SPECIAL.contains(&c)
}
