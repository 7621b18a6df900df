use std::path::PathBuf;

use ocelot_client::LifecycleClient;
use ocelot_prover::{Circuit, CircuitManifest, MockBackend, ProvingBackend};

use crate::config::OcelotConfig;

pub mod init;
pub mod resume;
pub mod run;

/// Flags shared by `run` and `resume`.
#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Path to the config file.
    #[arg(short, long, default_value = "ocelot.toml")]
    pub config: PathBuf,

    /// Override the server base URL.
    #[arg(long)]
    pub server: Option<String>,

    /// Override the circuit manifest path.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Override the minimum age condition.
    #[arg(long)]
    pub min_age: Option<i64>,
}

/// Load config, apply overrides, and build the client and circuit.
pub(crate) fn setup(
    common: &CommonArgs,
) -> anyhow::Result<(OcelotConfig, LifecycleClient, Box<dyn Circuit>)> {
    let mut config = OcelotConfig::load(&common.config)?;
    if let Some(ref server) = common.server {
        config.server.base_url = server.clone();
    }
    if let Some(ref manifest) = common.manifest {
        config.circuit.manifest_path = manifest.clone();
    }
    if let Some(min_age) = common.min_age {
        config.policy.min_age = min_age;
    }

    let client = LifecycleClient::new(&config.server.base_url)?;
    let manifest = CircuitManifest::load(&config.circuit.manifest_path)?;
    let circuit = MockBackend.create_circuit(manifest)?;

    Ok((config, client, circuit))
}
