//! Main executable of a `.app` bundle: re-executes `../Libraries/main`
//! relative to itself, forwarding all arguments.

use std::env;
use std::path::Path;
use std::process;
use tracing::error;

use dmglayout::launcher::{DEFAULT_TARGET, launch};

fn main() {
    dmglayout::init_logging();

    if let Err(e) = launch(Path::new(DEFAULT_TARGET), env::args_os().skip(1)) {
        error!("Error launching process: {}", e);
        process::exit(1);
    }
}
