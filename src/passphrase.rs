//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-13
// Version : 1.1.0
// License : Mulan PSL v2
//
// Passphrase generator

use crate::batch;
use crate::charset::{DIGITS, SPECIAL};
use crate::error::GenerationError;
use crate::securerandom::{SecureRandomSource, shuffle};

/// 记忆密码生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseSpec {
    pub word_count: usize,
    pub separator: String,
    pub digits: usize,
    pub symbols: usize,
    /// Capitalizes the first word drawn, before shuffling.
    pub capitalize: bool,
    pub words: Vec<String>,
}

impl PassphraseSpec {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            word_count: 6,
            separator: "-".to_string(),
            digits: 0,
            symbols: 0,
            capitalize: false,
            words,
        }
    }
}

/// Builds one passphrase from `spec`.
pub fn generate_passphrase<R: SecureRandomSource>(
    spec: &PassphraseSpec,
    rng: &mut R,
) -> Result<String, GenerationError> {
    if spec.word_count < 1 {
        return Err(GenerationError::InvalidWordCount { count: spec.word_count });
    }
    if spec.words.is_empty() {
        return Err(GenerationError::EmptyWordList);
    }

    let mut tokens: Vec<String> = Vec::with_capacity(spec.word_count + spec.digits + spec.symbols);

    // 随机选择单词
    for index in 0..spec.word_count {
        let word = rng.choose(&spec.words).ok_or(GenerationError::EmptyWordList)?;
        let word = if spec.capitalize && index == 0 {
            capitalize_first(word)
        } else {
            word.clone()
        };
        tokens.push(word + &spec.separator);
    }

    for _ in 0..spec.digits {
        if let Some(d) = rng.choose(&DIGITS) {
            tokens.push(d.to_string());
        }
    }
    for _ in 0..spec.symbols {
        if let Some(s) = rng.choose(&SPECIAL) {
            tokens.push(s.to_string());
        }
    }

    shuffle(&mut tokens, rng);

    // 删除最后一个分隔符
    if let Some(last) = tokens
        .iter_mut()
        .rev()
        .find(|token| token.ends_with(spec.separator.as_str()))
    {
        let trimmed = last.len() - spec.separator.len();
        last.truncate(trimmed);
    }

    Ok(tokens.concat())
}

/// `count` independent passphrases, one per line.
pub fn generate_passphrases<R: SecureRandomSource>(
    spec: &PassphraseSpec,
    count: usize,
    rng: &mut R,
) -> Result<String, GenerationError> {
    batch::repeat(count, || generate_passphrase(spec, &mut *rng))
}

/// Uppercases the first character, leaves the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
