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
// Error types

use thiserror::Error;

use crate::charset::CharClass;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("{requested} {class} character(s) requested, but every {class} character is banned")]
    EmptyClass { class: CharClass, requested: usize },

    #[error("Invalid length {length}: the generated value would be empty")]
    InvalidLength { length: usize },

    #[error("Invalid range [{min}, {max}]: the minimum must not exceed the maximum, which must be below {limit}", limit = usize::MAX)]
    InvalidRange { min: usize, max: usize },

    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Word count must be at least 1, got {count}")]
    InvalidWordCount { count: usize },

    #[error("Generation count must be at least 1, got {count}")]
    InvalidCount { count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("The {what} is empty")]
    EmptyInput { what: &'static str },

    #[error("Word list is empty")]
    EmptyWordList,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("The password is empty")]
    EmptyPassword,
}
