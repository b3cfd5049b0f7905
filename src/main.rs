use std::{
    env, io,
    path::PathBuf,
    process::{self, ExitCode},
    thread,
};

use clap::Parser;
use library_inventory::{
    LibraryInventory, Menu, TransitionLogger,
    config::{Cli, Config},
    logging,
};
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use tracing::{debug, error, warn};

fn main() -> ExitCode {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::from_cli(Cli::parse(), &cwd);

    logging::init(config.verbose);
    if !config.color {
        colored::control::set_override(false);
    }

    if let Err(err) = install_interrupt_handler() {
        warn!(error = %err, "could not install interrupt handler");
    }

    let mut inventory = LibraryInventory::open(&config.data_file);
    inventory.register_observer(Box::new(TransitionLogger));

    let mut menu = Menu::new(inventory, io::stdin().lock(), io::stdout(), config.color);
    match menu.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}

/// Exit with status 0 on Ctrl-C or SIGTERM.
///
/// Every mutation that reported success is already saved by the time the menu
/// prompts again. A signal that lands in the middle of an operation can exit
/// before that operation's save, but the user never saw it succeed.
fn install_interrupt_handler() -> io::Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            debug!(signal, "interrupted");
            println!("\nExiting.");
            #[allow(clippy::exit)]
            process::exit(0);
        }
    });
    Ok(())
}
