use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::{error::Error, fmt};

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// Why a word list could not be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    NotFound(String),
    NotUtf8(String),
    Malformed { name: String, reason: String },
    Empty(String),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSourceError::NotFound(name) => write!(f, "word list '{name}' not found"),
            WordSourceError::NotUtf8(name) => write!(f, "word list '{name}' is not valid utf-8"),
            WordSourceError::Malformed { name, reason } => {
                write!(f, "word list '{name}' is malformed: {reason}")
            }
            WordSourceError::Empty(name) => write!(f, "word list '{name}' contains no words"),
        }
    }
}

impl Error for WordSourceError {}

/// An immutable, ordered list of candidate words
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    /// Load one of the word lists embedded at build time, e.g. `english`
    pub fn load(file_stem: &str) -> Result<Self, WordSourceError> {
        read_language_from_file(&format!("{file_stem}.json"))
    }

    /// Build a word list from whitespace separated text supplied by the user
    pub fn custom(text: &str) -> Result<Self, WordSourceError> {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        Self::from_words("custom", words)
    }

    pub fn from_words(name: &str, words: Vec<String>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::Empty(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            size: words.len() as u32,
            words,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn read_language_from_file(file_name: &str) -> Result<Language, WordSourceError> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| WordSourceError::NotFound(file_name.to_string()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| WordSourceError::NotUtf8(file_name.to_string()))?;

    let lang: Language = from_str(file_as_str).map_err(|e| WordSourceError::Malformed {
        name: file_name.to_string(),
        reason: e.to_string(),
    })?;

    // words with surrounding whitespace would never match a trimmed commit
    let words = lang
        .words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    Language::from_words(&lang.name, words)
}
