use clap::Parser;
use serterm::cli::args::{Args, Command, ConfigCommand};

/// CLI interface tests
#[test]
fn test_no_subcommand_opens_terminal() {
    let args = Args::try_parse_from(["serterm"]).unwrap();
    assert!(args.command.is_none());
    assert!(!args.verbose);
    assert!(!args.quiet);
}

#[test]
fn test_tui_overrides_parse() {
    let args = Args::try_parse_from([
        "serterm",
        "tui",
        "--port",
        "/dev/ttyUSB0",
        "--baud",
        "9600",
        "--data-bits",
        "8",
        "--stop-bits",
        "1",
        "--parity",
        "none",
        "--flow-control",
        "none",
    ])
    .unwrap();

    match args.command {
        Some(Command::Tui(tui_args)) => {
            assert_eq!(tui_args.port.as_deref(), Some("/dev/ttyUSB0"));
            assert_eq!(tui_args.baud, Some(9600));
            assert_eq!(tui_args.data_bits, Some(8));
            assert_eq!(tui_args.stop_bits, Some(1));
        }
        other => panic!("expected tui command, got {:?}", other),
    }
}

#[test]
fn test_ports_command_with_output_format() {
    let args = Args::try_parse_from(["serterm", "--output", "json", "ports"]).unwrap();
    assert!(matches!(args.command, Some(Command::Ports)));
    assert_eq!(args.output.to_string(), "json");
}

#[test]
fn test_config_subcommands() {
    let args = Args::try_parse_from(["serterm", "config", "show"]).unwrap();
    match args.command {
        Some(Command::Config(config_args)) => {
            assert!(matches!(config_args.command, ConfigCommand::Show));
        }
        other => panic!("expected config command, got {:?}", other),
    }

    let args = Args::try_parse_from(["serterm", "config", "init"]).unwrap();
    match args.command {
        Some(Command::Config(config_args)) => {
            assert!(matches!(config_args.command, ConfigCommand::Init));
        }
        other => panic!("expected config command, got {:?}", other),
    }
}

#[test]
fn test_invalid_parity_rejected() {
    let result = Args::try_parse_from(["serterm", "tui", "--parity", "mark"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags() {
    let args = Args::try_parse_from(["serterm", "-v", "--config", "custom.toml", "ports"]).unwrap();
    assert!(args.verbose);
    assert_eq!(args.config.as_deref(), Some("custom.toml"));
}
