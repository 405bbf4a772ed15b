//! Library integration tests.

use tallyplate::TallyError;

#[test]
fn error_types_are_public() {
    let err = TallyError::InvalidContext {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> tallyplate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use tallyplate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["tallyplate", "check", "a.tpl", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
        assert_eq!(args.files.len(), 1);
    } else {
        panic!("Expected Check command");
    }
}
