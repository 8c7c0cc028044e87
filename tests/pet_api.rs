//! Functional tests against the live Swagger Petstore API.
//!
//! These tests issue real HTTP requests to an external service and are
//! `#[ignore]`d by default. They require network access.
//!
//! Run with: `cargo test --test pet_api -- --ignored`
//! Run specific: `cargo test --test pet_api create_pet -- --ignored`
//!
//! Environment variables:
//! - `PETSTORE_BASE_URL` - Override the pet endpoint (default: public Petstore)
//! - `PETSTORE_API_KEY` - Override the delete API key (default: special-key)
//!
//! Every test owns its `TestSession` and finishes with a teardown sweep, so
//! pets created here do not permanently pollute the external service.

use serde_json::json;

use petstore_e2e::{Pet, Status, TestSession};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn session() -> TestSession {
    init_tracing();
    TestSession::from_env().expect("failed to build test session")
}

async fn finish(session: TestSession) {
    let report = session.teardown().await;
    println!("\n=== Cleanup Report ===");
    print!("{}", report);
}

#[tokio::test]
#[ignore] // Hits the live petstore; run with --ignored
async fn create_pet() {
    let session = session();
    let pet = session.fresh_pet();

    let response = session
        .client()
        .create_pet(&pet)
        .await
        .expect("create request failed");
    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);

    let created: Pet = response.json().expect("create response was not a pet");
    assert_eq!(created.name, pet.name);
    assert_eq!(created.status, pet.status);
    assert_eq!(created.photo_urls, pet.photo_urls);

    finish(session).await;
}

#[tokio::test]
#[ignore]
async fn get_pet_by_id() {
    let session = session();
    let pet = session.fresh_pet();

    session
        .client()
        .create_pet(&pet)
        .await
        .expect("create request failed");

    let response = session
        .client()
        .get_pet(pet.id)
        .await
        .expect("get request failed");
    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);

    // Full field equality against what was submitted.
    let fetched: Pet = response.json().expect("get response was not a pet");
    assert_eq!(fetched.id, pet.id);
    assert_eq!(fetched.name, pet.name);
    assert_eq!(fetched.status, pet.status);
    assert_eq!(fetched.category, pet.category);
    assert_eq!(fetched.photo_urls, pet.photo_urls);
    assert_eq!(fetched.tags, pet.tags);

    finish(session).await;
}

async fn find_by_status_scenario(status: Status) {
    let session = session();
    let pet = session
        .create_pet_with_status(status)
        .await
        .expect("fixture creation failed");

    let response = session
        .client()
        .find_by_status(status)
        .await
        .expect("search request failed");
    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);

    let results: Vec<Pet> = response.json().expect("search response was not a list");
    assert!(
        results.iter().any(|p| p.id == pet.id),
        "created pet {} missing from {} results",
        pet.id,
        status.as_str()
    );
    assert!(
        results.iter().all(|p| p.status == status),
        "search returned a pet with a different status"
    );

    finish(session).await;
}

#[tokio::test]
#[ignore]
async fn find_pets_by_status_available() {
    find_by_status_scenario(Status::Available).await;
}

#[tokio::test]
#[ignore]
async fn find_pets_by_status_pending() {
    find_by_status_scenario(Status::Pending).await;
}

#[tokio::test]
#[ignore]
async fn find_pets_by_status_sold() {
    find_by_status_scenario(Status::Sold).await;
}

#[tokio::test]
#[ignore]
async fn get_pet_with_invalid_id() {
    let session = session();

    let response = session
        .client()
        .get_pet_raw("invalid_id")
        .await
        .expect("get request failed");
    assert_eq!(response.status.as_u16(), 404, "body: {}", response.body);

    finish(session).await;
}

#[tokio::test]
#[ignore]
async fn update_pet() {
    let session = session();
    let mut pet = session.fresh_pet();

    let response = session
        .client()
        .create_pet(&pet)
        .await
        .expect("create request failed");
    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);

    pet.name = "Max".to_string();
    pet.status = Status::Sold;

    let response = session
        .client()
        .update_pet(&pet)
        .await
        .expect("update request failed");
    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);

    let read_back = session
        .client()
        .get_pet(pet.id)
        .await
        .expect("get request failed");
    assert_eq!(read_back.status.as_u16(), 200, "body: {}", read_back.body);

    let updated: Pet = read_back.json().expect("get response was not a pet");
    assert_eq!(updated.name, "Max");
    assert_eq!(updated.status, Status::Sold);

    finish(session).await;
}

#[tokio::test]
#[ignore]
async fn update_pet_with_invalid_data() {
    let session = session();
    let pet = session.fresh_pet();

    let response = session
        .client()
        .create_pet(&pet)
        .await
        .expect("create request failed");
    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);

    // Empty name plus an unrecognized status. The upstream contract is
    // ambiguous between 400 and 405, so this is an accepted-set assertion.
    let invalid = json!({
        "id": pet.id,
        "name": "",
        "status": "unknown123",
    });

    let response = session
        .client()
        .update_pet_raw(&invalid)
        .await
        .expect("update request failed");
    assert!(
        [400, 405].contains(&response.status.as_u16()),
        "expected 400 or 405, got {} (body: {})",
        response.status,
        response.body
    );

    finish(session).await;
}

#[tokio::test]
#[ignore]
async fn delete_pet() {
    let session = session();
    let pet = session.fresh_pet();

    session
        .client()
        .create_pet(&pet)
        .await
        .expect("create request failed");

    let response = session
        .client()
        .delete_pet(pet.id)
        .await
        .expect("delete request failed");
    assert_eq!(response.status.as_u16(), 200, "body: {}", response.body);

    // The teardown sweep will see this id again and classify it as
    // already-absent rather than failing.
    finish(session).await;
}

#[tokio::test]
#[ignore]
async fn delete_pet_with_invalid_id() {
    let session = session();

    let response = session
        .client()
        .delete_pet_raw("invalid_id")
        .await
        .expect("delete request failed");
    assert_eq!(response.status.as_u16(), 404, "body: {}", response.body);

    finish(session).await;
}
