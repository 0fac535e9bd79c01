//! satzart command-line entry point

use anyhow::Result;
use clap::Parser;
use satzart_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(
    name = "satzart",
    version,
    about = "Clause-type classification for annotated German text",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_conflicts_with_format() {
        let result = Cli::try_parse_from(["satzart", "analyze", "--json", "-f", "text"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repeated_inputs_and_annotator_args() {
        let cli = Cli::try_parse_from([
            "satzart",
            "analyze",
            "-i",
            "a.conllu",
            "-i",
            "b/*.conllu",
            "--annotator",
            "udpipe",
            "--annotator-arg",
            "--tokenize",
            "--annotator-arg",
            "{model}",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.input, vec!["a.conllu", "b/*.conllu"]);
                assert_eq!(args.annotator_args, vec!["--tokenize", "{model}"]);
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }
}
