//! Update accumulation.

use crate::types::{BatchPayload, UpdateFragment};

/// Collects per-row fragments into the payload for a single batch write.
///
/// Input order is preserved and nothing is deduplicated: if two source rows
/// share a row number both fragments are kept and the later one wins when
/// the sheet applies the batch.
#[must_use]
pub fn accumulate<I>(fragments: I) -> BatchPayload
where
    I: IntoIterator<Item = UpdateFragment>,
{
    BatchPayload {
        data: fragments.into_iter().collect(),
    }
}
