//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-14
// Version : 1.1.0
// License : Mulan PSL v2
//
// Sentence <-> password transforms

use crate::charset::{is_digit_or_special, is_letter};
use crate::error::TransformError;
use crate::passphrase::capitalize_first;
use crate::securerandom::SecureRandomSource;

/// Sentence-based password: the initial of every word, with digits and
/// special symbols kept where they appear.
///
/// ```
/// let password = tkpass::sentence::derive_password("Hello World 2024!").unwrap();
/// assert_eq!(password, "HW2024!");
/// ```
pub fn derive_password(sentence: &str) -> Result<String, TransformError> {
    if sentence.is_empty() {
        return Err(TransformError::EmptyInput { what: "sentence" });
    }

    let chars: Vec<char> = sentence.chars().collect();
    let mut password = String::new();

    if is_letter(chars[0]) {
        password.push(chars[0]);
    }
    for (i, &c) in chars.iter().enumerate() {
        if is_digit_or_special(c) {
            password.push(c);
        } else if c == ' ' {
            // 空格后的字母是单词首字母
            if let Some(&next) = chars.get(i + 1) {
                if is_letter(next) {
                    password.push(next);
                }
            }
        }
    }

    Ok(password)
}

/// Expands a password back into a sentence, one word per letter.
///
/// Every line of `password` is handled on its own. The result is a
/// plausible sentence, almost never the one the password came from.
pub fn reconstruct_sentence<R: SecureRandomSource>(
    password: &str,
    words: &[String],
    rng: &mut R,
) -> Result<String, TransformError> {
    if password.is_empty() {
        return Err(TransformError::EmptyInput { what: "password" });
    }
    if words.is_empty() {
        return Err(TransformError::EmptyWordList);
    }

    let lines: Vec<String> = password
        .split('\n')
        .map(|line| reconstruct_line(line, words, rng))
        .collect();
    Ok(lines.join("\n"))
}

fn reconstruct_line<R: SecureRandomSource>(line: &str, words: &[String], rng: &mut R) -> String {
    let mut sentence = String::new();
    for c in line.chars() {
        if is_digit_or_special(c) {
            sentence.push(c);
            sentence.push(' ');
        } else if is_letter(c) {
            let initial = c.to_ascii_lowercase();
            let candidates: Vec<&String> = words
                .iter()
                .filter(|word| word.chars().next() == Some(initial))
                .collect();
            match rng.choose(&candidates) {
                Some(word) if c.is_ascii_uppercase() => sentence.push_str(&capitalize_first(word)),
                Some(word) => sentence.push_str(word),
                // 没有以该字母开头的单词
                None => sentence.push(c),
            }
            sentence.push(' ');
        }
    }
    sentence
}
