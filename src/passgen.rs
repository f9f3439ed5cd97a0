//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-02
// Version : 1.1.0
// License : Mulan PSL v2
//
// Password generator

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::batch;
use crate::charset::CharClass;
use crate::error::GenerationError;
use crate::securerandom::{SecureRandomSource, shuffle};

/// 单个字符类别的需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassRequirement {
    /// Exactly this many characters from the class.
    Exact(usize),
    /// The class pads the password up to its total length.
    Fill,
    /// The class is not used.
    Absent,
}

impl FromStr for ClassRequirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "fill" | "random" => Ok(ClassRequirement::Fill),
            "none" | "absent" => Ok(ClassRequirement::Absent),
            other => other
                .parse::<usize>()
                .map(ClassRequirement::Exact)
                .map_err(|_| format!("'{}' is not a count, 'fill' or 'none'", s)),
        }
    }
}

impl fmt::Display for ClassRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassRequirement::Exact(n) => write!(f, "{}", n),
            ClassRequirement::Fill => f.write_str("fill"),
            ClassRequirement::Absent => f.write_str("none"),
        }
    }
}

/// One password request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    pub lowercase: ClassRequirement,
    pub uppercase: ClassRequirement,
    pub digits: ClassRequirement,
    pub special: ClassRequirement,
    /// Only used for padding when some class is `Fill`.
    pub total_length: Option<usize>,
    pub banned: HashSet<char>,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            lowercase: ClassRequirement::Fill,
            uppercase: ClassRequirement::Fill,
            digits: ClassRequirement::Fill,
            special: ClassRequirement::Fill,
            total_length: Some(16),
            banned: HashSet::new(),
        }
    }
}

impl GenerationSpec {
    pub fn requirement(&self, class: CharClass) -> ClassRequirement {
        match class {
            CharClass::Lower => self.lowercase,
            CharClass::Upper => self.uppercase,
            CharClass::Digit => self.digits,
            CharClass::Special => self.special,
        }
    }

    pub fn has_fill(&self) -> bool {
        CharClass::ALL
            .iter()
            .any(|class| self.requirement(*class) == ClassRequirement::Fill)
    }

    /// Sum of every `Exact` count.
    pub fn exact_total(&self) -> usize {
        CharClass::ALL
            .iter()
            .map(|class| match self.requirement(*class) {
                ClassRequirement::Exact(n) => n,
                _ => 0,
            })
            .sum()
    }
}

/// Builds one password from `spec`.
pub fn generate_password<R: SecureRandomSource>(
    spec: &GenerationSpec,
    rng: &mut R,
) -> Result<String, GenerationError> {
    let mut password_chars: Vec<char> = Vec::with_capacity(spec.total_length.unwrap_or(0));
    let mut fill_pool: Vec<char> = Vec::new();

    for class in CharClass::ALL {
        let chars = class.effective(&spec.banned);
        match spec.requirement(class) {
            ClassRequirement::Exact(0) | ClassRequirement::Absent => {}
            ClassRequirement::Exact(requested) => {
                if chars.is_empty() {
                    return Err(GenerationError::EmptyClass { class, requested });
                }
                for _ in 0..requested {
                    if let Some(c) = rng.choose(&chars) {
                        password_chars.push(*c);
                    }
                }
            }
            ClassRequirement::Fill => fill_pool.extend_from_slice(&chars),
        }
    }

    // 剩余长度由 Fill 类别随机补齐
    if let Some(total_length) = spec.total_length {
        let remaining = total_length.saturating_sub(password_chars.len());
        if remaining > 0 {
            if fill_pool.is_empty() {
                if spec.has_fill() {
                    tracing::warn!(remaining, "every fill class is banned out, password left short");
                }
            } else {
                for _ in 0..remaining {
                    if let Some(c) = rng.choose(&fill_pool) {
                        password_chars.push(*c);
                    }
                }
            }
        }
    }

    if password_chars.is_empty() {
        let length = if spec.has_fill() {
            spec.total_length.unwrap_or(0)
        } else {
            spec.exact_total()
        };
        return Err(GenerationError::InvalidLength { length });
    }

    // Shuffle the characters to avoid predictable pattern
    shuffle(&mut password_chars, rng);

    Ok(password_chars.into_iter().collect())
}

/// `count` independent passwords, one per line.
pub fn generate_passwords<R: SecureRandomSource>(
    spec: &GenerationSpec,
    count: usize,
    rng: &mut R,
) -> Result<String, GenerationError> {
    batch::repeat(count, || generate_password(spec, &mut *rng))
}
