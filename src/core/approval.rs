//! Approval workflow: the one-way `approved` transition.

use crate::errors::AppResult;
use crate::store::EntityStore;

/// Mark a record as approved. Returns `Ok(true)` when the record was found
/// (and the collection re-persisted, even when it was already approved) and
/// `Ok(false)` for an unknown id, which is a silent no-op.
///
/// `approved` only ever goes false -> true; nothing un-approves a record.
pub fn approve(store: &mut EntityStore, record_id: i64) -> AppResult<bool> {
    let Some(rec) = store.records.iter_mut().find(|r| r.id == record_id) else {
        return Ok(false);
    };
    rec.approved = true;
    store.persist_records()?;
    Ok(true)
}
