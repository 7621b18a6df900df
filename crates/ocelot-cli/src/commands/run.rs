//! `ocelot run` — Run one full age-verification handshake.

use clap::Args;

use ocelot_core::Mrz;

use crate::commands::{setup, CommonArgs};
use crate::flow::{self, FlowOutcome};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn run(args: &RunArgs) -> anyhow::Result<()> {
    let (config, client, circuit) = setup(&args.common)?;
    let today = chrono::Utc::now().date_naive();

    let outcome = flow::run_handshake(
        &client,
        circuit.as_ref(),
        &Mrz::specimen(),
        today,
        config.policy.min_age,
    )
    .await?;

    print_outcome(&outcome);
    Ok(())
}

pub(crate) fn print_outcome(outcome: &FlowOutcome) {
    println!("Proof request {}:", outcome.request.id);
    println!("  Status:  {}", outcome.request.status);
    if let Some(min_age) = outcome.request.min_age {
        println!("  Min age: {}", min_age);
    }
    if let Some(ref proof) = outcome.request.proof {
        println!("  Proof:   {} hex chars", proof.len());
    }
    println!(
        "{}",
        if outcome.verified {
            "Verified!"
        } else {
            "Failed to verify"
        }
    );
}
