//! `ocelot resume` — Resume a handshake from a known request id.
//!
//! Skips creation: the request already exists server-side (typically
//! scanned from a QR code) and the sequence picks up at `start`.

use clap::Args;

use ocelot_core::Mrz;

use crate::commands::{run::print_outcome, setup, CommonArgs};
use crate::flow;

#[derive(Args, Debug)]
pub struct ResumeArgs {
    /// The id of the existing proof request.
    #[arg(short, long)]
    pub request_id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn run(args: &ResumeArgs) -> anyhow::Result<()> {
    let (config, client, circuit) = setup(&args.common)?;
    let today = chrono::Utc::now().date_naive();

    let outcome = flow::resume_handshake(
        &client,
        circuit.as_ref(),
        &args.request_id,
        &Mrz::specimen(),
        today,
        config.policy.min_age,
    )
    .await?;

    print_outcome(&outcome);
    Ok(())
}
