pub mod word_list;
pub mod shuffle;

pub use self::word_list::{Language, WordSourceError};
pub use self::shuffle::{shuffle, shuffle_with};

use clap::ValueEnum;

/// Word lists shipped with the binary
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum SupportedLanguage {
    English,
    EnglishLong,
}

impl SupportedLanguage {
    /// Name used for the embedded file and in the config file
    pub fn file_stem(&self) -> String {
        self.to_string().to_lowercase()
    }

    pub fn from_file_stem(stem: &str) -> Option<Self> {
        Self::value_variants()
            .iter()
            .copied()
            .find(|lang| lang.file_stem() == stem.to_lowercase())
    }

    pub fn as_lang(&self) -> Result<Language, WordSourceError> {
        Language::load(&self.file_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_language_loads() {
        for lang in SupportedLanguage::value_variants() {
            let loaded = lang.as_lang().unwrap();
            assert!(!loaded.is_empty(), "{lang} should have words");
        }
    }

    #[test]
    fn test_file_stem_round_trip() {
        assert_eq!(SupportedLanguage::English.file_stem(), "english");
        assert_eq!(SupportedLanguage::EnglishLong.file_stem(), "englishlong");
        assert_eq!(
            SupportedLanguage::from_file_stem("EnglishLong"),
            Some(SupportedLanguage::EnglishLong)
        );
        assert_eq!(SupportedLanguage::from_file_stem("nope"), None);
    }

    #[test]
    fn test_shuffled_language_keeps_its_words() {
        let lang = SupportedLanguage::English.as_lang().unwrap();
        let mut shuffled = shuffle(&lang.words);
        let mut original = lang.words.clone();
        shuffled.sort();
        original.sort();

        assert_eq!(shuffled, original);
    }
}
