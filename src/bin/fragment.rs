use anyhow::Result;
use clap::Parser;
use log::info;
use outbound_patch::config;
use outbound_patch::config::fragment::Fragment;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fragment")]
#[command(about = "Rewrite the fragmentation settings of the `fragment` outbound in an Xray config", long_about = None)]
struct Args {
    /// Path to the JSON config, rewritten in place
    config_file: PathBuf,

    /// Fragment interval, e.g. "10-20"
    interval: String,

    /// Fragment length, e.g. "100-200"
    length: String,

    /// Packets to fragment, e.g. "1-3" or "tlshello"
    packets: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    info!("Loading config: {}", args.config_file.display());
    let mut config = config::load_config(&args.config_file)?;

    let fragment = Fragment {
        interval: args.interval,
        length: args.length,
        packets: args.packets,
    };
    let updated = config::fragment::update_fragment(&mut config, &fragment);
    info!("Updated fragment settings on {} outbounds", updated);

    config::write_config(&args.config_file, &config)?;
    info!("Wrote {}", args.config_file.display());

    Ok(())
}
