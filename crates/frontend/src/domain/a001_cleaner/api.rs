use contracts::domain::a001_cleaner::Cleaner;
use contracts::domain::common::ListEnvelope;

use crate::shared::api_utils;

/// Fetch the full cleaner directory. The endpoint answers either a DRF
/// page envelope or a bare array depending on gateway config; the
/// envelope type absorbs both.
pub async fn fetch_cleaners() -> Result<Vec<Cleaner>, String> {
    let envelope: ListEnvelope<Cleaner> = api_utils::get_json("/api/users/cleaners/").await?;
    Ok(envelope.into_results())
}
