//! Command-line parsing.

use std::path::PathBuf;

use clap::Parser;

/// Writes one scene file per part and hands it to the CAD compiler.
///
/// With no PART given, every part of the build configuration is generated.
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "hbot")]
#[command(about = "Scene generator for the hbot printed parts", long_about = None)]
#[command(version)]
pub struct Args {
    /// JSON build configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON table overriding catalog entries
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output directory for scene files
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Write scene files without launching the compiler
    #[arg(long)]
    pub no_compile: bool,

    /// Part names, in the order they are generated
    #[arg(value_name = "PART")]
    pub parts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("hbot").chain(args.iter().copied()))
    }

    #[test]
    fn test_empty_command_line() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_flags_and_parts_mix() {
        let args = parse(&["beltclamp", "--no-compile", "--config", "hbot.json", "yrodmount"])
            .unwrap();
        assert!(args.no_compile);
        assert_eq!(args.config, Some(PathBuf::from("hbot.json")));
        assert_eq!(args.parts, ["beltclamp", "yrodmount"]);
    }

    #[test]
    fn test_missing_value() {
        assert!(parse(&["--catalog"]).is_err());
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["--fast"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
