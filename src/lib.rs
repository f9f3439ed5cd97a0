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
// A password toolkit: random passwords, passphrases and sentence-based passwords.

pub mod batch;
pub mod charset;
pub mod configtool;
pub mod error;
pub mod exportfile;
pub mod logger;
pub mod passgen;
pub mod passphrase;
pub mod securerandom;
pub mod sentence;
pub mod setclip;
pub mod strength;
pub mod wordlist;

use rand::rngs::OsRng;

pub use charset::CharClass;
pub use error::{CheckError, GenerationError, TransformError};
pub use passgen::{ClassRequirement, GenerationSpec};
pub use passphrase::PassphraseSpec;
pub use securerandom::SecureRandomSource;

pub fn generate_password(spec: &GenerationSpec) -> Result<String, GenerationError> {
    passgen::generate_password(spec, &mut OsRng)
}

pub fn generate_passwords_batch(spec: &GenerationSpec, count: usize) -> Result<String, GenerationError> {
    passgen::generate_passwords(spec, count, &mut OsRng)
}

pub fn generate_passphrase(spec: &PassphraseSpec) -> Result<String, GenerationError> {
    passphrase::generate_passphrase(spec, &mut OsRng)
}

pub fn generate_passphrases_batch(spec: &PassphraseSpec, count: usize) -> Result<String, GenerationError> {
    passphrase::generate_passphrases(spec, count, &mut OsRng)
}

pub fn derive_password_from_sentence(sentence: &str) -> Result<String, TransformError> {
    sentence::derive_password(sentence)
}

pub fn reconstruct_sentence_from_password(
    password: &str,
    wordlist: &[String],
) -> Result<String, TransformError> {
    sentence::reconstruct_sentence(password, wordlist, &mut OsRng)
}
