//! The age-verification handshake flow.
//!
//! One strictly sequential pass over the proof-request lifecycle:
//! create → start → accept → prove → complete → verify. Every call awaits
//! the previous response and threads the `id` it returned into the next
//! call. The first failure stops the sequence — there is no retry and no
//! rollback, so a request abandoned mid-flight stays wherever the server
//! last put it.

use chrono::NaiveDate;

use ocelot_client::LifecycleClient;
use ocelot_core::{date, Mrz, ProofRequest, RequestEvent, RequestStateMachine, RequestStatus};
use ocelot_prover::{age_witness, Circuit, PROOF_TAIL_BYTES};

/// What a completed handshake produced.
#[derive(Debug)]
pub struct FlowOutcome {
    /// The proof request as last returned by the server.
    pub request: ProofRequest,
    /// The hex proof tail submitted on completion.
    pub proof_tail_hex: String,
    /// Local verification result for the full proof object.
    pub verified: bool,
}

/// Run one full handshake, starting with request creation.
///
/// This simulates the whole userflow between the website (create) and the
/// mobile app (start, accept, prove, complete).
pub async fn run_handshake(
    client: &LifecycleClient,
    circuit: &dyn Circuit,
    mrz: &Mrz,
    today: NaiveDate,
    min_age: i64,
) -> anyhow::Result<FlowOutcome> {
    let current_date = date::compact_date(today);

    // The website opens the request, stating the conditions to be met.
    // The response carries the server-assigned id used from here on.
    let request = client.create(min_age, &current_date).await?;
    tracing::info!(id = %request.id, status = %request.status, "proof request created");

    advance(client, circuit, &request.id, mrz, today, min_age).await
}

/// Resume a handshake from a known request id, skipping creation.
pub async fn resume_handshake(
    client: &LifecycleClient,
    circuit: &dyn Circuit,
    request_id: &str,
    mrz: &Mrz,
    today: NaiveDate,
    min_age: i64,
) -> anyhow::Result<FlowOutcome> {
    tracing::info!(id = %request_id, "resuming proof request");
    advance(client, circuit, request_id, mrz, today, min_age).await
}

async fn advance(
    client: &LifecycleClient,
    circuit: &dyn Circuit,
    request_id: &str,
    mrz: &Mrz,
    today: NaiveDate,
    min_age: i64,
) -> anyhow::Result<FlowOutcome> {
    // The app picked the request up: the server marks it pending.
    let mut local = RequestStateMachine::transition(RequestStatus::Created, RequestEvent::Start)?;
    let request = client.start(request_id).await?;
    note_divergence(&request, local);
    tracing::info!(id = %request.id, status = %request.status, "proof request started");

    // The user tapped Accept on the device.
    local = RequestStateMachine::transition(local, RequestEvent::Accept)?;
    let request = client.accept(&request.id).await?;
    note_divergence(&request, local);
    tracing::info!(id = %request.id, status = %request.status, "proof request accepted");

    // Assemble the witness and generate the proof. Prover failures
    // propagate as-is; nothing below this point catches them.
    let witness = age_witness(mrz, &date::compact_date_bytes(today), min_age);
    let proof = circuit.prove(&witness)?;
    let proof_tail_hex = proof.tail_hex(PROOF_TAIL_BYTES)?;
    tracing::info!(
        proof_len = proof.len(),
        tail_chars = proof_tail_hex.len(),
        "proof generated"
    );

    // Submit the proof tail; the server verifies it and completes the
    // request.
    local = RequestStateMachine::transition(local, RequestEvent::Complete)?;
    let request = client.complete(&request.id, &proof_tail_hex).await?;
    note_divergence(&request, local);
    tracing::info!(id = %request.id, status = %request.status, "proof request completed");

    // Local check of the full proof object (the server only ever saw the
    // tail).
    let verified = circuit.verify(&proof)?;

    Ok(FlowOutcome {
        request,
        proof_tail_hex,
        verified,
    })
}

/// The server owns the authoritative state; if it disagrees with the
/// local lifecycle model, say so and keep going.
fn note_divergence(request: &ProofRequest, expected: RequestStatus) {
    if request.status != expected {
        tracing::warn!(
            id = %request.id,
            status = %request.status,
            expected = %expected,
            "server status diverges from the local lifecycle model"
        );
    }
}
