//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a
//! clean interface for the main application logic. It supports the standard
//! help, version, and debug flags while gracefully handling unknown
//! options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the countdown with these settings
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        target: Option<String>,
    },
    /// Run under simulated time
    SimulateCommand {
        debug_enabled: bool,
        config_dir: Option<String>,
        target: Option<String>,
        start_time: String,
        end_time: String,
        multiplier: Option<f64>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// Help and version flags take precedence over everything else. The
    /// only subcommand is `simulate` (alias `s`); anything else positional
    /// is an error that falls back to the help screen.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        // Help/version take precedence regardless of position
        if args_vec.iter().any(|arg| arg == "--help" || arg == "-h") {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if args_vec
            .iter()
            .any(|arg| arg == "--version" || arg == "-V" || arg == "-v")
        {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }

        let mut debug_enabled = false;
        let mut config_dir: Option<String> = None;
        let mut target: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();
        let mut unknown_arg_found = false;

        let mut idx = 0;
        while idx < args_vec.len() {
            let arg = &args_vec[idx];
            if arg.starts_with('-') {
                match arg.as_str() {
                    "--debug" | "-d" => debug_enabled = true,
                    "--config" | "-c" => {
                        idx += 1;
                        match args_vec.get(idx) {
                            Some(value) => config_dir = Some(value.clone()),
                            None => unknown_arg_found = true, // flag without its value
                        }
                    }
                    "--target" | "-t" => {
                        idx += 1;
                        match args_vec.get(idx) {
                            Some(value) => target = Some(value.clone()),
                            None => unknown_arg_found = true,
                        }
                    }
                    _ => unknown_arg_found = true,
                }
            } else {
                positionals.push(arg.clone());
            }
            idx += 1;
        }

        if unknown_arg_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let action = match positionals.first().map(String::as_str) {
            None => CliAction::Run {
                debug_enabled,
                config_dir,
                target,
            },
            Some("simulate") | Some("s") => {
                // simulate START END [MULTIPLIER]
                match (positionals.get(1), positionals.get(2)) {
                    (Some(start_time), Some(end_time)) => {
                        let multiplier = match positionals.get(3) {
                            Some(raw) => match raw.parse::<f64>() {
                                Ok(value) => Some(value),
                                Err(_) => {
                                    return ParsedArgs {
                                        action: CliAction::ShowHelpDueToError,
                                    };
                                }
                            },
                            None => None,
                        };
                        if positionals.len() > 4 {
                            CliAction::ShowHelpDueToError
                        } else {
                            CliAction::SimulateCommand {
                                debug_enabled,
                                config_dir,
                                target,
                                start_time: start_time.clone(),
                                end_time: end_time.clone(),
                                multiplier,
                            }
                        }
                    }
                    _ => CliAction::ShowHelpDueToError,
                }
            }
            Some(_) => CliAction::ShowHelpDueToError,
        };

        ParsedArgs { action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        ParsedArgs::parse(args.iter().copied()).action
    }

    #[test]
    fn bare_invocation_runs_with_defaults() {
        assert_eq!(
            parse(&["festr"]),
            CliAction::Run {
                debug_enabled: false,
                config_dir: None,
                target: None,
            }
        );
    }

    #[test]
    fn debug_config_and_target_flags_are_collected() {
        assert_eq!(
            parse(&["festr", "--debug", "--config", "/tmp/festr", "--target", "2026-03-14 09:00:00"]),
            CliAction::Run {
                debug_enabled: true,
                config_dir: Some("/tmp/festr".to_string()),
                target: Some("2026-03-14 09:00:00".to_string()),
            }
        );
    }

    #[test]
    fn short_flags_work() {
        assert_eq!(
            parse(&["festr", "-d", "-t", "2026-03-14 09:00:00"]),
            CliAction::Run {
                debug_enabled: true,
                config_dir: None,
                target: Some("2026-03-14 09:00:00".to_string()),
            }
        );
    }

    #[test]
    fn simulate_subcommand_parses_window_and_multiplier() {
        assert_eq!(
            parse(&["festr", "simulate", "2026-03-11 09:00:00", "2026-03-14 09:00:10", "3600"]),
            CliAction::SimulateCommand {
                debug_enabled: false,
                config_dir: None,
                target: None,
                start_time: "2026-03-11 09:00:00".to_string(),
                end_time: "2026-03-14 09:00:10".to_string(),
                multiplier: Some(3600.0),
            }
        );
    }

    #[test]
    fn simulate_carries_an_explicit_target() {
        assert_eq!(
            parse(&[
                "festr",
                "-t",
                "2026-03-14 09:00:00",
                "simulate",
                "2026-03-11 09:00:00",
                "2026-03-14 09:00:10",
            ]),
            CliAction::SimulateCommand {
                debug_enabled: false,
                config_dir: None,
                target: Some("2026-03-14 09:00:00".to_string()),
                start_time: "2026-03-11 09:00:00".to_string(),
                end_time: "2026-03-14 09:00:10".to_string(),
                multiplier: None,
            }
        );
    }

    #[test]
    fn simulate_multiplier_is_optional() {
        assert_eq!(
            parse(&["festr", "s", "2026-03-11 09:00:00", "2026-03-14 09:00:10"]),
            CliAction::SimulateCommand {
                debug_enabled: false,
                config_dir: None,
                target: None,
                start_time: "2026-03-11 09:00:00".to_string(),
                end_time: "2026-03-14 09:00:10".to_string(),
                multiplier: None,
            }
        );
    }

    #[test]
    fn simulate_with_missing_window_shows_help() {
        assert_eq!(
            parse(&["festr", "simulate", "2026-03-11 09:00:00"]),
            CliAction::ShowHelpDueToError
        );
    }

    #[test]
    fn simulate_with_bad_multiplier_shows_help() {
        assert_eq!(
            parse(&["festr", "simulate", "a", "b", "fast"]),
            CliAction::ShowHelpDueToError
        );
    }

    #[test]
    fn unknown_flag_shows_help() {
        assert_eq!(parse(&["festr", "--frobnicate"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn unknown_subcommand_shows_help() {
        assert_eq!(parse(&["festr", "launch"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn value_flag_without_value_shows_help() {
        assert_eq!(parse(&["festr", "--config"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn help_takes_precedence_over_everything() {
        assert_eq!(parse(&["festr", "simulate", "--help"]), CliAction::ShowHelp);
    }

    #[test]
    fn version_flags_are_recognized() {
        assert_eq!(parse(&["festr", "--version"]), CliAction::ShowVersion);
        assert_eq!(parse(&["festr", "-V"]), CliAction::ShowVersion);
    }
}
