//! Resolve disk image layout settings and print the `dmgbuild` call.
//!
//! Usage: `dmglayout [-D key=value]... [-s FILE] <volume-name> <output>`

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

use dmglayout::{DEFAULT_BUILDER, Defines, SettingsFormat, prepare_image};

#[derive(Parser, Debug)]
#[command(name = "dmglayout")]
#[command(about = "Write dmgbuild settings for a macOS installer image")]
struct Args {
    /// Volume name shown when the image is mounted
    volume_name: String,

    /// Disk image the builder should create
    output: PathBuf,

    /// Override a default, e.g. -D app=/path/to/My.app
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    defines: Vec<String>,

    /// Settings file to write
    #[arg(short = 's', long = "settings", default_value = "dmg_settings.py")]
    settings: PathBuf,

    /// Settings file format (python or json); defaults to the file extension
    #[arg(long = "format")]
    format: Option<SettingsFormat>,

    /// Image builder program
    #[arg(long = "dmgbuild", default_value = DEFAULT_BUILDER)]
    dmgbuild: PathBuf,
}

fn main() {
    dmglayout::init_logging();

    let args = Args::parse();

    let defines = match Defines::parse(&args.defines) {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let format = args
        .format
        .unwrap_or_else(|| SettingsFormat::from_path(&args.settings));
    let invocation = match prepare_image(
        &defines,
        &args.settings,
        format,
        &args.volume_name,
        &args.output,
    ) {
        Ok(invocation) => invocation,
        Err(e) => {
            error!("Failed to prepare {}: {}", args.settings.display(), e);
            process::exit(1);
        }
    };

    if let Some(invocation) = invocation {
        let invocation = invocation.with_program(args.dmgbuild);
        info!("Run the image builder with:");
        println!("{}", invocation.display());
    }
}
