//! Test-data lifecycle: fixture generation, cleanup registration, and the
//! end-of-scenario teardown sweep.
//!
//! A [`TestSession`] is an explicit context object owned by one scenario. Test
//! code registers every pet id it submits (or intends to submit) to the API;
//! `teardown` consumes the session and attempts one delete per registered id,
//! tolerating pets that are already gone. The registry records intent to clean
//! up, not confirmed existence.

use std::fmt;
use std::sync::Mutex;

use tracing::{info, warn};

use crate::client::PetStoreClient;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::pet::{Pet, Status};

/// Append-only list of pet ids pending cleanup.
///
/// Appends are mutex-guarded so fixtures can be created from concurrent tasks;
/// the list is drained exactly once, at teardown.
#[derive(Debug, Default)]
pub struct CleanupRegistry {
    ids: Mutex<Vec<i64>>,
}

impl CleanupRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an id. Purely additive; duplicates are kept.
    pub fn register(&self, id: i64) {
        self.ids.lock().expect("registry lock poisoned").push(id);
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.ids.lock().expect("registry lock poisoned").len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes all registered ids, in registration order.
    fn drain(self) -> Vec<i64> {
        self.ids.into_inner().expect("registry lock poisoned")
    }
}

/// Outcome of one delete attempt during the teardown sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// Delete returned 200.
    Deleted,
    /// Delete returned 404; the pet was already gone or never existed.
    AlreadyAbsent,
    /// Delete returned some other status code.
    Unexpected(u16),
    /// The delete request itself failed to complete.
    TransportError(String),
}

impl CleanupOutcome {
    /// Classifies a delete status code. No retries; terminal on first attempt.
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => CleanupOutcome::Deleted,
            404 => CleanupOutcome::AlreadyAbsent,
            other => CleanupOutcome::Unexpected(other),
        }
    }
}

/// One line of the cleanup report.
#[derive(Debug, Clone)]
pub struct CleanupEntry {
    /// The pet id the delete was attempted for.
    pub id: i64,
    /// How the attempt ended.
    pub outcome: CleanupOutcome,
}

impl fmt::Display for CleanupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CleanupOutcome::Deleted => {
                write!(f, "Pet with ID {} successfully deleted.", self.id)
            }
            CleanupOutcome::AlreadyAbsent => write!(
                f,
                "Pet with ID {} was already deleted or does not exist.",
                self.id
            ),
            CleanupOutcome::Unexpected(status) => write!(
                f,
                "Unexpected status code {} when deleting pet with ID {}",
                status, self.id
            ),
            CleanupOutcome::TransportError(reason) => write!(
                f,
                "Delete request for pet with ID {} failed: {}",
                self.id, reason
            ),
        }
    }
}

/// Summary of a teardown sweep, one entry per registered id.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Entries in registration order.
    pub entries: Vec<CleanupEntry>,
}

impl CleanupReport {
    /// Returns true if every attempt ended in `Deleted` or `AlreadyAbsent`.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| {
            matches!(
                e.outcome,
                CleanupOutcome::Deleted | CleanupOutcome::AlreadyAbsent
            )
        })
    }
}

impl fmt::Display for CleanupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Context object owned by one test scenario.
///
/// Holds the API client and the cleanup registry. Constructed at scenario
/// start, consumed exactly once by [`TestSession::teardown`].
pub struct TestSession {
    client: PetStoreClient,
    registry: CleanupRegistry,
}

impl TestSession {
    /// Creates a session against the given endpoint configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            client: PetStoreClient::new(config)?,
            registry: CleanupRegistry::new(),
        })
    }

    /// Creates a session from the environment (`PETSTORE_BASE_URL` override,
    /// public Petstore by default).
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    /// The API client for this session.
    pub fn client(&self) -> &PetStoreClient {
        &self.client
    }

    /// Registers an id for the teardown sweep.
    pub fn register(&self, id: i64) {
        self.registry.register(id);
    }

    /// Generates a fresh pet with default status `available`. Pure data
    /// construction; the caller decides whether to register it.
    pub fn new_pet(&self) -> Pet {
        Pet::generate(Status::Available)
    }

    /// Generates a fresh pet and registers its id before any submission, so
    /// the teardown sweep covers it even if the test fails mid-way.
    pub fn fresh_pet(&self) -> Pet {
        let pet = self.new_pet();
        self.register(pet.id);
        pet
    }

    /// Generates a pet with the given status, submits it to the API, and
    /// registers it for cleanup. Fails fast if the create does not report 200.
    pub async fn create_pet_with_status(&self, status: Status) -> Result<Pet> {
        let pet = Pet::generate(status);
        self.register(pet.id);
        let response = self.client.create_pet(&pet).await?;
        if !response.is_success() {
            return Err(Error::Setup(format!(
                "create pet {} returned status {}",
                pet.id, response.status
            )));
        }
        info!(id = pet.id, status = %status.as_str(), "created fixture pet");
        Ok(pet)
    }

    /// Best-effort teardown sweep: one delete attempt per registered id, in
    /// registration order. Anomalies are recorded and logged, never raised.
    pub async fn teardown(self) -> CleanupReport {
        let ids = self.registry.drain();
        info!(count = ids.len(), "starting cleanup sweep");

        let mut report = CleanupReport::default();
        for id in ids {
            let outcome = match self.client.delete_pet(id).await {
                Ok(response) => CleanupOutcome::from_status(response.status.as_u16()),
                Err(e) => CleanupOutcome::TransportError(e.to_string()),
            };
            match &outcome {
                CleanupOutcome::Deleted | CleanupOutcome::AlreadyAbsent => {
                    info!(id, ?outcome, "cleanup attempt finished");
                }
                _ => {
                    warn!(id, ?outcome, "cleanup attempt did not confirm deletion");
                }
            }
            report.entries.push(CleanupEntry { id, outcome });
        }
        report
    }
}
