//! Line codec
//!
//! One employee per line, as a flat JSON object:
//!
//! ```text
//! {"kind":"WageEmployee","id":7,"basic_salary":1000,"department":"IT","wage":20,"hours":10}
//! └───── tag ─────────┘└──────────── fields of the kind (flattened) ────────────────────┘
//! ```

use serde::Serialize;

use crate::error::{Result, RosterError};

use super::RecordKind;

/// Name of the discriminator field
pub const KIND_FIELD: &str = "kind";

#[derive(Serialize)]
struct Tagged<'a, T> {
    kind: &'static str,
    #[serde(flatten)]
    record: &'a T,
}

/// Encode a concrete kind as one persisted line
pub fn encode_line<T: RecordKind>(record: &T) -> Result<String> {
    let tagged = Tagged {
        kind: T::KIND,
        record,
    };
    serde_json::to_string(&tagged).map_err(|e| RosterError::Serialization(e.to_string()))
}

/// JSON has no NaN or infinity; serde_json would write `null`, which no
/// kind can read back.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RosterError::Serialization(format!(
            "`{}` must be finite, got {}",
            field, value
        )))
    }
}
