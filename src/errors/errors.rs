use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::DuplicateCategoryName { .. } => "DuplicateCategoryName",
            ErrorImpl::KeywordCategoryMismatch { .. } => "KeywordCategoryMismatch",
            ErrorImpl::MissingKeywordSpelling { .. } => "MissingKeywordSpelling",
            ErrorImpl::InputError { .. } => "InputError",
            ErrorImpl::IncorrectArguments { .. } => "IncorrectArguments",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Unrecognised character: `{}`, it was skipped",
                character.escape_default()
            )),
            ErrorImpl::DuplicateCategoryName { name } => {
                ErrorTip::Suggestion(format!("Category name `{}` is empty or used twice", name))
            }
            ErrorImpl::KeywordCategoryMismatch { spelling, category } => {
                ErrorTip::Suggestion(format!(
                    "Keyword `{}` maps to category `{}`",
                    spelling, category
                ))
            }
            ErrorImpl::MissingKeywordSpelling { category } => ErrorTip::Suggestion(format!(
                "Keyword category `{}` needs exactly one spelling",
                category
            )),
            ErrorImpl::InputError { .. } => ErrorTip::None,
            ErrorImpl::IncorrectArguments { received } => ErrorTip::Suggestion(format!(
                "Expected at most 1 argument, received {}",
                received
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("category name {name:?} is empty or duplicated")]
    DuplicateCategoryName { name: String },
    #[error("keyword {spelling:?} maps to category {category:?}")]
    KeywordCategoryMismatch { spelling: String, category: String },
    #[error("keyword category {category:?} has no unique spelling")]
    MissingKeywordSpelling { category: String },
    #[error("failed to read input: {message}")]
    InputError { message: String },
    #[error("incorrect arguments: received {received:?}")]
    IncorrectArguments { received: usize },
}
