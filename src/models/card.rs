//! Card Model
//!
//! A card pairs a source snippet with the outputs it produced. Cards are
//! created by the host and never mutated afterwards; the pane only reorders,
//! selects and hides them.
//!
//! ## Identity
//!
//! Every card gets a [`CardKey`] when it is constructed. Equality and hashing
//! go through that key alone, so two cards with identical content stay
//! distinct, while a clone of a card refers to the same card. The
//! host-supplied `id` is carried along but is not assumed to be unique.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use crate::models::{CardOutput, OutputCategory};

/// Opaque identity of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardKey(Uuid);

impl CardKey {
    /// Generate a fresh key
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CardKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CardKey {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A source snippet and its recorded outputs, displayed as one unit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Identity used by selection and visibility tracking
    #[serde(default)]
    key: CardKey,

    /// Host-supplied identifier
    #[serde(default)]
    id: u64,

    /// Display title
    title: String,

    /// Source code the card was produced from
    source_code: String,

    /// Outputs in the order they were produced
    #[serde(default)]
    outputs: Vec<CardOutput>,
}

impl Card {
    /// Create a new card with a fresh identity
    pub fn new(
        id: u64,
        title: impl Into<String>,
        source_code: impl Into<String>,
        outputs: Vec<CardOutput>,
    ) -> Self {
        Self {
            key: CardKey::new(),
            id,
            title: title.into(),
            source_code: source_code.into(),
            outputs,
        }
    }

    /// Identity of this card
    pub fn key(&self) -> CardKey {
        self.key
    }

    /// Host-supplied identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn outputs(&self) -> &[CardOutput] {
        &self.outputs
    }

    /// Check if the card produced any output
    pub fn has_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }

    /// Output categories present on this card
    ///
    /// A card without outputs counts as plain text.
    pub fn categories(&self) -> BTreeSet<OutputCategory> {
        if self.outputs.is_empty() {
            return BTreeSet::from([OutputCategory::Text]);
        }
        self.outputs.iter().map(CardOutput::category).collect()
    }

    /// Get the text of all plain-text outputs joined by newlines
    pub fn plain_output(&self) -> String {
        self.outputs
            .iter()
            .filter(|output| output.category() == OutputCategory::Text)
            .map(|output| output.value.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
