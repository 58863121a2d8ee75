use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::APIError;
use crate::db::models::secret_phrase::SecretPhrase as DBSecretPhrase;

pub const PHRASE_WORD_COUNT: usize = 12;

#[derive(Debug, Deserialize)]
pub struct SecretPhraseRequest {
    pub phrase: String,
}

impl SecretPhraseRequest {
    /// The only check the original system performs: exactly 12 words. No
    /// wordlist lookup, no checksum.
    pub fn validate(&self) -> Result<(), APIError> {
        let words = self.phrase.split_whitespace().count();
        if words != PHRASE_WORD_COUNT {
            return Err(APIError::InvalidValue {
                description: format!(
                    "secret phrase must contain {} words, found {}",
                    PHRASE_WORD_COUNT, words
                ),
            });
        }

        Ok(())
    }

    pub fn normalized(&self) -> String {
        self.phrase.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug, Serialize)]
pub struct SecretPhraseResponse {
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub phrase: String,
}

impl From<DBSecretPhrase> for SecretPhraseResponse {
    fn from(value: DBSecretPhrase) -> Self {
        SecretPhraseResponse {
            created_at: value.created_at,
            updated_at: value.updated_at,
            phrase: value.phrase,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn request(phrase: &str) -> SecretPhraseRequest {
        SecretPhraseRequest {
            phrase: phrase.to_string(),
        }
    }

    #[test]
    fn test_accepts_twelve_words() {
        let result =
            request("abandon ability able about above absent absorb abstract absurd abuse access accident")
                .validate();
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_wrong_word_count() {
        assert!(request("one two three").validate().is_err());
        assert!(request("").validate().is_err());
        assert!(request(
            "a b c d e f g h i j k l m"
        )
        .validate()
        .is_err());
    }

    #[test]
    fn test_normalized_collapses_whitespace() {
        let req = request("  one  two\tthree four five six seven eight nine ten eleven twelve ");
        assert!(req.validate().is_ok());
        assert_eq!(
            req.normalized(),
            "one two three four five six seven eight nine ten eleven twelve"
        );
    }
}
