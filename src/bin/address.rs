use anyhow::Result;
use clap::Parser;
use log::info;
use outbound_patch::config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "address")]
#[command(about = "Rewrite the server address of every vless outbound in an Xray config", long_about = None)]
struct Args {
    /// Path to the JSON config, rewritten in place
    config_file: PathBuf,

    /// Replacement server address, stored verbatim
    address: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    info!("Loading config: {}", args.config_file.display());
    let mut config = config::load_config(&args.config_file)?;

    let updated = config::outbound::update_address(&mut config, &args.address);
    info!("Set address {:?} on {} vnext entries", args.address, updated);

    config::write_config(&args.config_file, &config)?;
    info!("Wrote {}", args.config_file.display());

    Ok(())
}
