//! Speech segment model
//!
//! A segment is one partial or final interpretation delivered by the speech
//! recognizer. Segments are consumed once and never stored.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// High-level command recognized for a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AddExpense,
    AddIncome,
    CreateTransaction,
    CancelTransaction,
    /// Any tag the controller does not act on
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::AddExpense => "add_expense",
            Self::AddIncome => "add_income",
            Self::CreateTransaction => "create_transaction",
            Self::CancelTransaction => "cancel_transaction",
            Self::Unrecognized => "unrecognized",
        };
        f.write_str(tag)
    }
}

/// The recognizer sends the intent either as a bare tag or wrapped as
/// `{"intent": "...", "isFinal": ...}`
#[derive(Deserialize)]
#[serde(untagged)]
enum IntentField {
    Nested {
        #[serde(default)]
        intent: Intent,
    },
    Tag(Intent),
}

fn deserialize_intent<'de, D>(deserializer: D) -> Result<Intent, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IntentField::deserialize(deserializer)? {
        IntentField::Nested { intent } => intent,
        IntentField::Tag(intent) => intent,
    })
}

/// Which draft field an entity fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Amount,
    Category,
    Date,
    #[serde(other)]
    Unrecognized,
}

/// A typed value extracted from speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub value: String,
}

impl Entity {
    pub fn new(kind: EntityKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn amount(value: impl Into<String>) -> Self {
        Self::new(EntityKind::Amount, value)
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self::new(EntityKind::Category, value)
    }

    pub fn date(value: impl Into<String>) -> Self {
        Self::new(EntityKind::Date, value)
    }
}

/// A single spoken token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub value: String,
    #[serde(default)]
    pub index: usize,
}

/// One unit of speech-recognition output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default, deserialize_with = "deserialize_intent")]
    pub intent: Intent,
    /// No further entity revisions will follow for this utterance
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Segment {
    /// A partial segment with the given intent and no entities
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            ..Self::default()
        }
    }

    /// Mark this segment as the final one of its utterance
    pub fn finalized(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Attach words from a whitespace-separated phrase
    pub fn with_words(mut self, phrase: &str) -> Self {
        self.words = phrase
            .split_whitespace()
            .enumerate()
            .map(|(index, value)| Word {
                value: value.to_string(),
                index,
            })
            .collect();
        self
    }

    /// The spoken words joined by single spaces
    pub fn transcript(&self) -> String {
        self.words
            .iter()
            .map(|w| w.value.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
