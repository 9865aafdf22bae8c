//! Transaction models

use serde::{Deserialize, Deserializer, Serialize};

/// Categories with a dedicated filter. Anything else falls in the "other" bucket.
pub const KNOWN_KINDS: [&str; 2] = ["transfer", "swap"];

/// A single transaction as reported by the wallet provider.
///
/// Records are never modified after deserialization; filtering and sorting
/// always produce new sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub signature: String,
    /// Unix seconds. `None` means the transaction is still pending.
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub confirmation_status: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// RPC nodes send `null` for statuses they no longer track
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Transaction {
    /// Block time used for ordering, pending counts as 0
    pub fn effective_block_time(&self) -> i64 {
        self.block_time.unwrap_or(0)
    }

    /// Amount used for ordering, absent counts as 0
    pub fn effective_amount(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// True when the type is outside the known set (absent included)
    pub fn is_other_kind(&self) -> bool {
        match self.kind.as_deref() {
            Some(kind) => !KNOWN_KINDS.contains(&kind),
            None => true,
        }
    }
}
