//! Integration test: the full age-verification handshake against a stub
//! server.
//!
//! Covers the happy path, short-circuiting on each kind of failure, the
//! resume path, and id threading between lifecycle calls.

mod common;

use chrono::NaiveDate;

use common::{proof_request, StubBehavior, StubResponse, StubServer};
use ocelot_cli::flow;
use ocelot_client::{ClientError, LifecycleClient};
use ocelot_core::{Mrz, RequestStatus};
use ocelot_prover::{
    Circuit, CircuitManifest, MockBackend, Proof, ProverError, ProvingBackend, Witness,
    PROOF_TAIL_BYTES,
};

fn demo_circuit() -> Box<dyn Circuit> {
    let manifest = CircuitManifest::from_bytes(br#"{"name": "proof_age"}"#).unwrap();
    MockBackend.create_circuit(manifest).unwrap()
}

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

// =========================================================================
// Happy path
// =========================================================================

#[tokio::test]
async fn test_full_handshake_happy_path() {
    let server = StubServer::spawn(StubBehavior::happy("r1")).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = demo_circuit();

    let outcome = flow::run_handshake(&client, circuit.as_ref(), &Mrz::specimen(), fixed_today(), 18)
        .await
        .expect("handshake should succeed");

    // The four endpoints are hit exactly once, in lifecycle order.
    assert_eq!(server.endpoints(), ["create", "start", "accept", "complete"]);

    // create carries the conditions to be met.
    let create_body = server.body(0);
    assert_eq!(create_body["min_age"], 18);
    assert_eq!(create_body["current_date"], "20260807");

    // Every later call threads the id the server assigned on create.
    for i in 1..4 {
        assert_eq!(server.body(i)["requestId"], "r1", "call #{}", i);
    }

    // The submitted proof is the fixed-width hex tail.
    let submitted = server.body(3)["proof"].as_str().unwrap().to_string();
    assert_eq!(submitted.len(), 2 * PROOF_TAIL_BYTES);
    assert_eq!(submitted, outcome.proof_tail_hex);

    assert_eq!(outcome.request.status, RequestStatus::Completed);
    assert!(outcome.verified);
}

/// A stub prover that returns a fixed 2208-byte buffer and a verifier
/// with a canned verdict.
struct FixedCircuit {
    verdict: bool,
}

impl Circuit for FixedCircuit {
    fn prove(&self, _witness: &Witness) -> Result<Proof, ProverError> {
        Ok(Proof::new(vec![0x5a; 2208]))
    }
    fn verify(&self, _proof: &Proof) -> Result<bool, ProverError> {
        Ok(self.verdict)
    }
}

#[tokio::test]
async fn test_fixed_prover_reports_verified() {
    let server = StubServer::spawn(StubBehavior::happy("r1")).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = FixedCircuit { verdict: true };

    let outcome = flow::run_handshake(&client, &circuit, &Mrz::specimen(), fixed_today(), 18)
        .await
        .unwrap();

    assert_eq!(server.endpoints(), ["create", "start", "accept", "complete"]);
    assert_eq!(outcome.proof_tail_hex.len(), 4288);
    assert!(outcome.verified);
}

#[tokio::test]
async fn test_failed_verification_is_reported_not_fatal() {
    let server = StubServer::spawn(StubBehavior::happy("r1")).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = FixedCircuit { verdict: false };

    let outcome = flow::run_handshake(&client, &circuit, &Mrz::specimen(), fixed_today(), 18)
        .await
        .unwrap();

    // The sequence ran to the end; only the local verdict is negative.
    assert_eq!(server.call_count(), 4);
    assert!(!outcome.verified);
}

// =========================================================================
// Short-circuiting
// =========================================================================

#[tokio::test]
async fn test_create_failure_stops_the_sequence() {
    let mut behavior = StubBehavior::happy("r1");
    behavior.create = StubResponse::Status(500);
    let server = StubServer::spawn(behavior).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = demo_circuit();

    let result =
        flow::run_handshake(&client, circuit.as_ref(), &Mrz::specimen(), fixed_today(), 18).await;

    let err = result.unwrap_err();
    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Api { status, .. }) => assert_eq!(*status, 500),
        other => panic!("expected Api error, got {:?}", other),
    }
    // Only create was attempted; nothing after it went out.
    assert_eq!(server.endpoints(), ["create"]);
}

#[tokio::test]
async fn test_start_decode_failure_stops_the_sequence() {
    let mut behavior = StubBehavior::happy("r1");
    behavior.start = StubResponse::Garbage;
    let server = StubServer::spawn(behavior).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = demo_circuit();

    let result =
        flow::run_handshake(&client, circuit.as_ref(), &Mrz::specimen(), fixed_today(), 18).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::Decode { .. })
    ));
    assert_eq!(server.endpoints(), ["create", "start"]);
}

#[tokio::test]
async fn test_accept_failure_stops_before_complete() {
    let mut behavior = StubBehavior::happy("r1");
    behavior.accept = StubResponse::Status(503);
    let server = StubServer::spawn(behavior).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = demo_circuit();

    let result =
        flow::run_handshake(&client, circuit.as_ref(), &Mrz::specimen(), fixed_today(), 18).await;

    assert!(result.is_err());
    assert_eq!(server.endpoints(), ["create", "start", "accept"]);
}

/// A circuit that cannot prove anything.
struct BrokenCircuit;

impl Circuit for BrokenCircuit {
    fn prove(&self, _witness: &Witness) -> Result<Proof, ProverError> {
        Err(ProverError::GenerationFailed("no backing library".into()))
    }
    fn verify(&self, _proof: &Proof) -> Result<bool, ProverError> {
        Ok(false)
    }
}

#[tokio::test]
async fn test_prover_failure_propagates_before_complete() {
    let server = StubServer::spawn(StubBehavior::happy("r1")).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();

    let result =
        flow::run_handshake(&client, &BrokenCircuit, &Mrz::specimen(), fixed_today(), 18).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProverError>(),
        Some(ProverError::GenerationFailed(_))
    ));
    // Proving happens after accept; complete must never have been sent.
    assert_eq!(server.endpoints(), ["create", "start", "accept"]);
}

// =========================================================================
// Resume and id threading
// =========================================================================

#[tokio::test]
async fn test_resume_skips_creation() {
    let server = StubServer::spawn(StubBehavior::happy("r9")).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = demo_circuit();

    let outcome = flow::resume_handshake(
        &client,
        circuit.as_ref(),
        "r9",
        &Mrz::specimen(),
        fixed_today(),
        18,
    )
    .await
    .unwrap();

    assert_eq!(server.endpoints(), ["start", "accept", "complete"]);
    assert_eq!(server.body(0)["requestId"], "r9");
    assert!(outcome.verified);
}

#[tokio::test]
async fn test_each_call_uses_id_from_previous_response() {
    // A server that renames the request between calls: the client must
    // follow what it reads, not what it sent.
    let behavior = StubBehavior {
        create: StubResponse::Json(proof_request("server-a", "created", None)),
        start: StubResponse::Json(proof_request("server-b", "pending", None)),
        accept: StubResponse::Json(proof_request("server-b", "accepted", None)),
        complete: StubResponse::Json(proof_request("server-b", "completed", Some("ab"))),
    };
    let server = StubServer::spawn(behavior).await;
    let client = LifecycleClient::new(&server.base_url).unwrap();
    let circuit = demo_circuit();

    flow::run_handshake(&client, circuit.as_ref(), &Mrz::specimen(), fixed_today(), 18)
        .await
        .unwrap();

    assert_eq!(server.body(1)["requestId"], "server-a"); // from create
    assert_eq!(server.body(2)["requestId"], "server-b"); // from start
    assert_eq!(server.body(3)["requestId"], "server-b"); // from accept
}

// =========================================================================
// Repo assets
// =========================================================================

#[test]
fn test_demo_manifest_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../proof_age.json");
    let manifest = CircuitManifest::load(path).expect("demo manifest should load");
    assert_eq!(manifest.name.as_deref(), Some("proof_age"));
    assert!(manifest.bytecode.is_some());
}
