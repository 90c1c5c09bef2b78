#![allow(dead_code)]

use petsearch_core::{open_db_in_memory, PetStore};
use rusqlite::params;
use serde_json::{json, Value};
use uuid::Uuid;

/// Inserts one raw document into the `pets` collection and returns its id.
pub fn insert_document(store: &PetStore, document: Value) -> String {
    let id = Uuid::new_v4().to_string();
    store
        .lock()
        .unwrap()
        .execute(
            "INSERT INTO pets (id, document) VALUES (?1, ?2);",
            params![id, document.to_string()],
        )
        .unwrap();
    id
}

pub fn insert_pet(
    store: &PetStore,
    name: &str,
    breed: Option<&str>,
    location: Option<&str>,
) -> String {
    let mut document = json!({ "name": name });
    if let Some(breed) = breed {
        document["breed"] = json!(breed);
    }
    if let Some(location) = location {
        document["location"] = json!(location);
    }
    insert_document(store, document)
}

/// In-memory store holding a small mixed fixture set.
pub fn seeded_store() -> PetStore {
    let store = open_db_in_memory().unwrap();
    insert_document(
        &store,
        json!({
            "name": "Rex",
            "breed": "Labrador",
            "age": 4,
            "healthStatus": "vaccinated",
            "description": "Friendly and loud",
            "location": "Austin, TX",
            "images": ["https://img.example/rex-1.jpg", "https://img.example/rex-2.jpg"]
        }),
    );
    insert_pet(&store, "Bella", Some("Golden Retriever"), Some("Portland, OR"));
    insert_pet(&store, "Max", Some("labradoodle"), Some("Austin, TX"));
    insert_pet(&store, "Nameless Breed", None, Some("Denver, CO"));
    insert_pet(&store, "Homebody", Some("Beagle"), None);
    store
}

pub fn names(pets: &[petsearch_core::Pet]) -> Vec<String> {
    let mut names = pets.iter().map(|pet| pet.name.clone()).collect::<Vec<_>>();
    names.sort();
    names
}
