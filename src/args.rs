use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(name = "build", about = "Render every page into the dist folder. [default]")]
    Build(BuildArgs),
    #[command(
        name = "replay",
        about = "Apply navigation actions and print the resulting state."
    )]
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to the project directory.
    #[clap(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Path to the project directory.
    #[clap(short, long, default_value = ".")]
    pub path: PathBuf,
    /// Print the page rendered for the final state instead of state lines.
    #[clap(long, action)]
    pub html: bool,
    /// Actions such as `home`, `post 2`, `project:3`, `scroll 480`. Read
    /// one per line from stdin when omitted.
    pub actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn replay_collects_actions() {
        let args = Args::parse_from(["lumina", "replay", "--html", "post:2", "projects"]);
        match args.command {
            Some(Commands::Replay(replay)) => {
                assert!(replay.html);
                assert_eq!(replay.actions, vec!["post:2", "projects"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn build_is_optional() {
        let args = Args::parse_from(["lumina"]);
        assert!(args.command.is_none());
    }
}
