//! Header vocabularies used to recognize name, surname and phone columns.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::header::normalize_header;
use crate::error::{LimpaError, Result};

/// Default headers for given-name columns.
pub const NAME_HEADERS: &[&str] = &["nome", "name"];

/// Default headers for family-name columns.
pub const SURNAME_HEADERS: &[&str] = &["sobrenome", "lastname"];

/// Default headers for telephone columns.
pub const PHONE_HEADERS: &[&str] = &["telefone", "celular", "phone", "tel", "telephone"];

/// The sets of known header spellings for each role.
///
/// Entries are stored in normalized form so that vocabularies loaded from
/// configuration compare the same way as headers do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub surname: Vec<String>,
    #[serde(default)]
    pub phone: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(NAME_HEADERS, SURNAME_HEADERS, PHONE_HEADERS)
    }
}

impl Vocabulary {
    /// Build a vocabulary from raw header spellings.
    pub fn new<S: AsRef<str>>(name: &[S], surname: &[S], phone: &[S]) -> Self {
        Self {
            name: normalize_all(name),
            surname: normalize_all(surname),
            phone: normalize_all(phone),
        }
    }

    /// Load a vocabulary from a JSON file.
    ///
    /// The file replaces the defaults entirely; a missing key leaves that role
    /// without any spelling.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| LimpaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: Vocabulary = serde_json::from_reader(BufReader::new(file))?;
        let vocabulary = Self::new(&raw.name, &raw.surname, &raw.phone);

        if vocabulary.is_empty() {
            return Err(LimpaError::Config(format!(
                "Vocabulary '{}' lists no headers",
                path.display()
            )));
        }

        Ok(vocabulary)
    }

    /// Returns true if a normalized header is a known name spelling.
    pub fn is_name(&self, normalized: &str) -> bool {
        self.name.iter().any(|h| h == normalized)
    }

    /// Returns true if a normalized header is a known surname spelling.
    pub fn is_surname(&self, normalized: &str) -> bool {
        self.surname.iter().any(|h| h == normalized)
    }

    /// Returns true if a normalized header is a known phone spelling.
    pub fn is_phone(&self, normalized: &str) -> bool {
        self.phone.iter().any(|h| h == normalized)
    }

    /// Returns true if no role has any spelling.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.surname.is_empty() && self.phone.is_empty()
    }
}

fn normalize_all<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    headers
        .iter()
        .map(|h| normalize_header(h.as_ref()))
        .filter(|h| !h.is_empty())
        .collect()
}
