use async_graphql::{Request, Variables};
use petsearch_core::{
    open_db_in_memory, Pet, PetRepository, PetStore, RepoResult, SqlitePetRepository,
};
use petsearch_graphql::{build_schema, schema_sdl, shared_service, PetSchema};
use rusqlite::params;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn insert(store: &PetStore, document: Value) -> String {
    let id = uuid::Uuid::new_v4().to_string();
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

fn schema_over(store: PetStore) -> PetSchema {
    build_schema(shared_service(SqlitePetRepository::new(store)))
}

async fn execute(schema: &PetSchema, request: impl Into<Request>) -> Value {
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

/// Counts calls and always answers with an empty list.
struct CountingRepository {
    calls: Arc<AtomicUsize>,
}

impl PetRepository for CountingRepository {
    fn find_by_breed(&self, _breed: &str) -> RepoResult<Vec<Pet>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    fn find_by_location(&self, _location: &str) -> RepoResult<Vec<Pet>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

fn counting_schema() -> (PetSchema, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let repo = CountingRepository {
        calls: Arc::clone(&calls),
    };
    (build_schema(shared_service(repo)), calls)
}

#[tokio::test]
async fn lab_query_returns_rex() {
    let store = open_db_in_memory().unwrap();
    let id = insert(&store, json!({ "name": "Rex", "breed": "Labrador" }));
    let schema = schema_over(store);

    let body = execute(&schema, r#"{ getPetsByBreed(breed: "lab") { id name breed } }"#).await;

    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"],
        json!({ "getPetsByBreed": [{ "id": id, "name": "Rex", "breed": "Labrador" }] })
    );
}

#[tokio::test]
async fn unmatched_breed_returns_empty_list() {
    let store = open_db_in_memory().unwrap();
    insert(&store, json!({ "name": "Rex", "breed": "Labrador" }));
    let schema = schema_over(store);

    let body = execute(&schema, r#"{ getPetsByBreed(breed: "poodle") { name } }"#).await;

    assert!(body.get("errors").is_none());
    assert_eq!(body["data"], json!({ "getPetsByBreed": [] }));
}

#[tokio::test]
async fn empty_breed_is_invalid_argument_and_store_is_untouched() {
    let (schema, calls) = counting_schema();

    let body = execute(&schema, r#"{ getPetsByBreed(breed: "") { name } }"#).await;

    assert_eq!(body["data"], json!({ "getPetsByBreed": null }));
    assert_eq!(body["errors"][0]["message"], "Breed is required");
    assert_eq!(body["errors"][0]["extensions"]["code"], "INVALID_ARGUMENT");
    assert_eq!(body["errors"][0]["path"], json!(["getPetsByBreed"]));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_location_is_invalid_argument() {
    let (schema, calls) = counting_schema();

    let body = execute(&schema, r#"{ getPetsByLocation(location: "") { name } }"#).await;

    assert_eq!(body["errors"][0]["message"], "Location is required");
    assert_eq!(body["errors"][0]["extensions"]["code"], "INVALID_ARGUMENT");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_argument_is_rejected_before_resolvers_run() {
    let (schema, calls) = counting_schema();

    let body = execute(&schema, "{ getPetsByBreed { name } }").await;

    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn store_failure_propagates_message_unchanged() {
    let store = open_db_in_memory().unwrap();
    store.lock().unwrap().execute_batch("DROP TABLE pets;").unwrap();
    let expected = SqlitePetRepository::new(store.clone())
        .find_by_location("city")
        .unwrap_err()
        .to_string();
    let schema = schema_over(store);

    let body = execute(&schema, r#"{ getPetsByLocation(location: "city") { name } }"#).await;

    assert_eq!(body["data"], json!({ "getPetsByLocation": null }));
    assert_eq!(body["errors"][0]["message"], expected.as_str());
    assert_eq!(body["errors"][0]["extensions"]["code"], "STORE_FAILURE");
}

#[tokio::test]
async fn location_query_selects_every_declared_field() {
    let store = open_db_in_memory().unwrap();
    let id = insert(
        &store,
        json!({
            "name": "Bella",
            "breed": "Golden Retriever",
            "age": 3,
            "healthStatus": "healthy",
            "description": "Loves water",
            "location": "Portland, OR",
            "images": ["bella-1.jpg", "bella-2.jpg"]
        }),
    );
    insert(&store, json!({ "name": "Rex", "location": "Austin, TX" }));
    let schema = schema_over(store);

    let query = "query ($location: String!) {
        getPetsByLocation(location: $location) {
            id name breed age healthStatus description location images
        }
    }";
    let request =
        Request::new(query).variables(Variables::from_json(json!({ "location": "PORTLAND" })));
    let body = execute(&schema, request).await;

    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"]["getPetsByLocation"],
        json!([{
            "id": id,
            "name": "Bella",
            "breed": "Golden Retriever",
            "age": 3,
            "healthStatus": "healthy",
            "description": "Loves water",
            "location": "Portland, OR",
            "images": ["bella-1.jpg", "bella-2.jpg"]
        }])
    );
}

#[tokio::test]
async fn unset_optional_fields_resolve_to_null() {
    let store = open_db_in_memory().unwrap();
    insert(&store, json!({ "name": "Rex", "breed": "Labrador" }));
    let schema = schema_over(store);

    let body = execute(
        &schema,
        r#"{ getPetsByBreed(breed: "lab") { age healthStatus location images } }"#,
    )
    .await;

    assert_eq!(
        body["data"]["getPetsByBreed"],
        json!([{ "age": null, "healthStatus": null, "location": null, "images": [] }])
    );
}

#[tokio::test]
async fn record_without_name_nulls_only_its_entry() {
    let store = open_db_in_memory().unwrap();
    insert(&store, json!({ "name": "Rex", "breed": "Labrador" }));
    insert(&store, json!({ "breed": "Lab mix" }));
    let schema = schema_over(store);

    let body = execute(&schema, r#"{ getPetsByBreed(breed: "lab") { name } }"#).await;

    let list = body["data"]["getPetsByBreed"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.contains(&json!({ "name": "Rex" })));
    assert!(list.contains(&Value::Null));
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn case_variants_return_identical_results() {
    let store = open_db_in_memory().unwrap();
    insert(&store, json!({ "name": "Rex", "breed": "Labrador" }));
    insert(&store, json!({ "name": "Max", "breed": "Labradoodle" }));
    insert(&store, json!({ "name": "Bella", "breed": "Beagle" }));
    let schema = schema_over(store);

    let lower = execute(&schema, r#"{ getPetsByBreed(breed: "lab") { id } }"#).await;
    let upper = execute(&schema, r#"{ getPetsByBreed(breed: "LAB") { id } }"#).await;

    assert_eq!(lower["data"], upper["data"]);
    assert_eq!(lower["data"]["getPetsByBreed"].as_array().unwrap().len(), 2);
}

#[test]
fn sdl_declares_pet_type_and_queries() {
    let sdl = schema_sdl();

    assert!(sdl.contains("type Pet {"));
    assert!(sdl.contains("id: ID!"));
    assert!(sdl.contains("name: String!"));
    assert!(sdl.contains("healthStatus: String"));
    assert!(sdl.contains("images: [String]"));
    assert!(sdl.contains("getPetsByBreed(breed: String!): [Pet]"));
    assert!(sdl.contains("getPetsByLocation(location: String!): [Pet]"));
}

#[tokio::test]
async fn null_fields_do_not_fail_neighbouring_matches() {
    let store = open_db_in_memory().unwrap();
    insert(&store, json!({ "name": "Rex", "breed": "Labrador" }));
    insert(&store, json!({ "name": null, "breed": "Lab mix" }));
    insert(&store, json!({ "name": "Scout", "breed": "Labrador", "images": null, "age": -2 }));
    let schema = schema_over(store);

    let body = execute(&schema, r#"{ getPetsByBreed(breed: "lab") { name age images } }"#).await;

    let list = body["data"]["getPetsByBreed"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.contains(&json!({ "name": "Rex", "age": null, "images": [] })));
    assert!(list.contains(&json!({ "name": "Scout", "age": null, "images": [] })));
    assert!(list.contains(&Value::Null));
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_queries_on_one_schema_get_their_own_results() {
    let store = open_db_in_memory().unwrap();
    insert(&store, json!({ "name": "Rex", "breed": "Labrador", "location": "Austin, TX" }));
    insert(&store, json!({ "name": "Bella", "breed": "Beagle", "location": "Portland, OR" }));
    insert(&store, json!({ "name": "Max", "breed": "Labradoodle", "location": "Denver, CO" }));
    let schema = schema_over(store);

    let (labs, beagles, austin, portland, invalid) = tokio::join!(
        execute(&schema, r#"{ getPetsByBreed(breed: "lab") { name } }"#),
        execute(&schema, r#"{ getPetsByBreed(breed: "BEAGLE") { name } }"#),
        execute(&schema, r#"{ getPetsByLocation(location: "austin") { name } }"#),
        execute(&schema, r#"{ getPetsByLocation(location: "portland") { name } }"#),
        execute(&schema, r#"{ getPetsByLocation(location: "") { name } }"#),
    );

    let mut lab_names = labs["data"]["getPetsByBreed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pet| pet["name"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    lab_names.sort();
    assert_eq!(lab_names, vec!["Max", "Rex"]);
    assert_eq!(beagles["data"]["getPetsByBreed"], json!([{ "name": "Bella" }]));
    assert_eq!(austin["data"]["getPetsByLocation"], json!([{ "name": "Rex" }]));
    assert_eq!(portland["data"]["getPetsByLocation"], json!([{ "name": "Bella" }]));
    assert_eq!(invalid["errors"][0]["message"], "Location is required");
}
