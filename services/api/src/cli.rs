use crate::demo::{
    run_ask, run_dashboard, run_demo, run_engagement, run_interview, run_match, AskArgs,
    EngagementArgs, InterviewArgs, MatchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_intel::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GCC Hiring Intelligence",
    about = "Run the hiring intelligence service or evaluate candidates from the command line",
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
    /// Score a resume against a job description
    Match(MatchArgs),
    /// Turn interview feedback into a hiring recommendation
    Interview(InterviewArgs),
    /// Assess post-offer drop-off risk from the candidate interaction count
    Engagement(EngagementArgs),
    /// Ask the hiring assistant a question
    Ask(AskArgs),
    /// Print the executive hiring dashboard
    Dashboard,
    /// Walk through every panel with sample inputs
    Demo,
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
        Command::Match(args) => run_match(args),
        Command::Interview(args) => run_interview(args),
        Command::Engagement(args) => run_engagement(args),
        Command::Ask(args) => run_ask(args),
        Command::Dashboard => {
            run_dashboard();
            Ok(())
        }
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["hiring-intel-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_match_arguments() {
        let cli = Cli::try_parse_from([
            "hiring-intel-api",
            "match",
            "--job-description",
            "Rust engineer",
            "--resume",
            "@resume.txt",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Match(args)) => {
                assert_eq!(args.job_description, "Rust engineer");
                assert_eq!(args.resume, "@resume.txt");
            }
            other => panic!("expected match command, got {other:?}"),
        }
    }

    #[test]
    fn engagement_rejects_counts_outside_slider() {
        let err = Cli::try_parse_from(["hiring-intel-api", "engagement", "--interactions", "9"])
            .expect_err("out of range");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
