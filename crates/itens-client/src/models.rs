//! Wire types for the itens API.

use serde::{Deserialize, Serialize};

/// A single item as stored server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned, immutable once created.
    pub id: u32,
    pub nome: String,
    pub descricao: String,
}

/// Payload for creating an item, and the edit form's working copy.
/// Carries no `id`; the server assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub nome: String,
    pub descricao: String,
}
