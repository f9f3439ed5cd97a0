//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-15
// Version : 1.1.0
// License : Mulan PSL v2
//
// Password strength check, powered by zxcvbn

use zxcvbn::matching::patterns::MatchPattern;
use zxcvbn::{Match, Score};
use zxcvbn::zxcvbn;

use crate::charset::{is_special, CharClass};
use crate::error::CheckError;
use crate::wordlist::NamedWordList;

pub const RECOMMENDED_LENGTH: usize = 14;
const USER_INPUTS: &str = "user inputs";
// Debug name of zxcvbn's user-input dictionary
const USER_INPUTS_DICTIONARY: &str = "UserInputs";

/// Estimated time to guess the password under four attack models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackTimesDisplay {
    pub offline_fast_hashing: String,
    pub offline_slow_hashing: String,
    pub online_no_throttling: String,
    pub online_throttling: String,
}

/// A dictionary word zxcvbn matched inside the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exposure {
    pub word: String,
    pub dictionary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub rating: &'static str,
    pub crack_times: CrackTimesDisplay,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    /// Length and dispersion remarks on top of zxcvbn's feedback.
    pub advice: Vec<String>,
    pub exposures: Vec<Exposure>,
}

/// 评估密码强度
///
/// `hints` are personal details (names, dates...) and `dictionaries` extra
/// word lists; both are handed to zxcvbn as user inputs.
pub fn assess_password_strength(
    password: &str,
    hints: &[String],
    dictionaries: &[NamedWordList],
) -> Result<StrengthReport, CheckError> {
    if password.is_empty() {
        return Err(CheckError::EmptyPassword);
    }

    let mut user_inputs: Vec<&str> = hints.iter().map(String::as_str).collect();
    for dictionary in dictionaries {
        user_inputs.extend(dictionary.words.iter().map(String::as_str));
    }
    tracing::debug!(user_inputs = user_inputs.len(), "running zxcvbn");

    let result = zxcvbn(password, &user_inputs);
    let (rating, score) = rate(result.score());

    let crack_times = result.crack_times();
    let crack_times = CrackTimesDisplay {
        offline_fast_hashing: crack_times.offline_fast_hashing_1e10_per_second().to_string(),
        offline_slow_hashing: crack_times.offline_slow_hashing_1e4_per_second().to_string(),
        online_no_throttling: crack_times.online_no_throttling_10_per_second().to_string(),
        online_throttling: crack_times.online_throttling_100_per_hour().to_string(),
    };

    let (warning, suggestions) = match result.feedback() {
        Some(feedback) => (
            feedback.warning().map(|w| w.to_string()),
            feedback.suggestions().iter().map(|s| s.to_string()).collect(),
        ),
        None => (None, Vec::new()),
    };

    Ok(StrengthReport {
        score,
        rating,
        crack_times,
        warning,
        suggestions,
        advice: password_advice(password),
        exposures: exposures(result.sequence(), dictionaries),
    })
}

// 确定安全评级
fn rate(score: Score) -> (&'static str, u8) {
    match score {
        Score::Zero => ("Very weak", 0),
        Score::One => ("Very weak", 1),
        Score::Two => ("Weak", 2),
        Score::Three => ("Medium", 3),
        Score::Four => ("Strong", 4),
        _ => ("Unknown", 0),
    }
}

/// Length and dispersion advice.
pub fn password_advice(password: &str) -> Vec<String> {
    let mut advice = Vec::new();
    let length = password.chars().count();
    if length <= 6 {
        advice.push(format!(
            "Your password is much too short. A minimum length of {} characters is recommended.",
            RECOMMENDED_LENGTH
        ));
    } else if length < RECOMMENDED_LENGTH {
        advice.push(format!(
            "A minimum length of {} characters is recommended.",
            RECOMMENDED_LENGTH
        ));
    }

    let chars: Vec<char> = password.chars().collect();
    let is_edge_char = |c: char| c.is_ascii_digit() || is_special(c);
    let leading = chars.iter().take_while(|c| is_edge_char(**c)).count();
    let trailing = if leading == chars.len() {
        0
    } else {
        chars.iter().rev().take_while(|c| is_edge_char(**c)).count()
    };

    let mut digits = 0;
    let mut specials = 0;
    let mut digits_at_edges = 0;
    let mut specials_at_edges = 0;
    for (i, c) in chars.iter().enumerate() {
        let at_edge = i < leading || i >= chars.len() - trailing;
        match CharClass::of(*c) {
            Some(CharClass::Digit) => {
                digits += 1;
                if at_edge {
                    digits_at_edges += 1;
                }
            }
            Some(CharClass::Special) => {
                specials += 1;
                if at_edge {
                    specials_at_edges += 1;
                }
            }
            _ => {}
        }
    }

    let digits_clustered = digits > 0 && digits_at_edges == digits;
    let specials_clustered = specials > 0 && specials_at_edges == specials;
    match (digits_clustered, specials_clustered) {
        (true, true) => advice.push("Numbers and special characters are not scattered correctly.".to_string()),
        (true, false) => advice.push("The numbers are not dispersed properly.".to_string()),
        (false, true) => advice.push("Special characters are not scattered correctly.".to_string()),
        (false, false) => {}
    }

    advice
}

/// Dictionary matches of the zxcvbn sequence.
///
/// Built-in dictionaries keep zxcvbn's name. A user-input match is credited
/// to the first named word list holding the word, otherwise to the hints.
pub fn exposures(sequence: &[Match], dictionaries: &[NamedWordList]) -> Vec<Exposure> {
    sequence
        .iter()
        .filter_map(|m| match &m.pattern {
            MatchPattern::Dictionary(pattern) => Some(pattern),
            _ => None,
        })
        .map(|pattern| {
            let source = format!("{:?}", pattern.dictionary_name);
            let dictionary = if source == USER_INPUTS_DICTIONARY {
                dictionaries
                    .iter()
                    .find(|d| d.words.iter().any(|w| w.to_lowercase() == pattern.matched_word))
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| USER_INPUTS.to_string())
            } else {
                source
            };
            Exposure {
                word: pattern.matched_word.clone(),
                dictionary,
            }
        })
        .collect()
}
