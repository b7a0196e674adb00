//! Main application entry point and CLI dispatch.
//!
//! Parses command-line arguments and hands control to the library: the
//! `Festr` coordinator for a normal run, the simulate command for
//! accelerated runs, or the help/version screens.

use festr::args::{CliAction, ParsedArgs};
use festr::commands::{help, simulate};
use festr::{Festr, config};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    let result = match parsed.action {
        CliAction::Run {
            debug_enabled,
            config_dir,
            target,
        } => {
            config::set_config_dir(config_dir.map(Into::into));
            Festr::new(debug_enabled).with_target(target).run()
        }
        CliAction::SimulateCommand {
            debug_enabled,
            config_dir,
            target,
            start_time,
            end_time,
            multiplier,
        } => {
            config::set_config_dir(config_dir.map(Into::into));
            simulate::run_simulation(&start_time, &end_time, multiplier, target, debug_enabled)
        }
        CliAction::ShowHelp => {
            help::display_help();
            return;
        }
        CliAction::ShowVersion => {
            help::display_version();
            return;
        }
        CliAction::ShowHelpDueToError => {
            help::display_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
