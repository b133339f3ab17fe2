use serde_json::json;

use contracts::domain::a004_shortlist::ShortlistEntry;
use contracts::domain::common::{EntityId, ListEnvelope};

use crate::shared::api_utils;

pub async fn fetch_shortlist() -> Result<Vec<ShortlistEntry>, String> {
    let envelope: ListEnvelope<ShortlistEntry> = api_utils::get_json("/api/shortlist/").await?;
    Ok(envelope.into_results())
}

pub async fn add_entry(job: EntityId, cleaner: EntityId) -> Result<ShortlistEntry, String> {
    api_utils::post_json("/api/shortlist/", &json!({ "job": job, "cleaner": cleaner })).await
}

pub async fn delete_entry(entry_id: EntityId) -> Result<(), String> {
    api_utils::delete_resource(&format!("/api/shortlist/{}/", entry_id)).await
}
