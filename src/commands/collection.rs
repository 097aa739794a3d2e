use crate::models::collection::{Collection, CollectionCard};
use tracing::{debug, instrument};

#[tauri::command]
#[specta::specta]
#[instrument(skip(collection), fields(id = %collection.id))]
pub fn get_collection_card(collection: Collection) -> CollectionCard {
    debug!(plugins = collection.plugins.len(), "Projecting collection card");
    collection.card()
}
