use crate::render::{run_assess, AssessArgs};
use crate::server;
use crate::wizard::run_wizard;
use clap::{Args, Parser, Subcommand};
use interview_ready::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "InterviewReady",
    about = "Score interview readiness and build a four-week preparation plan",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answers document and print the readiness report
    Assess(AssessArgs),
    /// Walk through the questionnaire interactively
    Wizard,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Wizard => run_wizard(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["interview-ready"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_assess_options() {
        let cli = Cli::try_parse_from([
            "interview-ready",
            "assess",
            "--answers",
            "answers.json",
            "--format",
            "json",
            "--details",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(
                    args.answers.as_deref(),
                    Some(std::path::Path::new("answers.json"))
                );
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.details);
            }
            other => panic!("expected assess, got {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["interview-ready", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
