use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Manages the HR database schema", long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply pending migrations
    Up {
        /// Number of migrations to apply, all pending when omitted
        #[clap(short = 'n', long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations
    Down {
        #[clap(short = 'n', long, default_value = "1")]
        steps: u32,
    },
    /// Drop all tables and apply every migration again
    Fresh,
    /// Roll back all applied migrations
    Reset,
    /// Show applied and pending migrations
    Status {
        #[clap(long)]
        json: bool,
    },
    /// Compare the database schema with the table catalog
    Verify {
        #[clap(long)]
        json: bool,
    },
    /// Print the migration DDL without touching the database
    Script {
        /// Print the rollback script instead
        #[clap(long)]
        down: bool,
    },
    /// List catalog tables
    Tables {
        /// Only tables of this domain
        #[clap(long)]
        domain: Option<String>,
    },
}

impl Command {
    pub fn needs_database(&self) -> bool {
        !matches!(self, Command::Script { .. } | Command::Tables { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Command {
        Args::try_parse_from(std::iter::once("hr-schema").chain(args.iter().copied()))
            .expect("arguments must parse")
            .command
    }

    #[rstest]
    #[case(&["up"], Command::Up { steps: None })]
    #[case(&["up", "--steps", "2"], Command::Up { steps: Some(2) })]
    #[case(&["down"], Command::Down { steps: 1 })]
    #[case(&["down", "-n", "3"], Command::Down { steps: 3 })]
    #[case(&["fresh"], Command::Fresh)]
    #[case(&["reset"], Command::Reset)]
    #[case(&["status", "--json"], Command::Status { json: true })]
    #[case(&["verify"], Command::Verify { json: false })]
    #[case(&["script", "--down"], Command::Script { down: true })]
    #[case(&["tables", "--domain", "payroll"], Command::Tables { domain: Some("payroll".into()) })]
    fn parses_commands(#[case] args: &[&str], #[case] expected: Command) {
        assert_eq!(parse(args), expected);
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Args::try_parse_from(["hr-schema", "migrate"]).is_err());
    }

    #[rstest]
    #[case(Command::Script { down: false }, false)]
    #[case(Command::Tables { domain: None }, false)]
    #[case(Command::Status { json: false }, true)]
    #[case(Command::Down { steps: 1 }, true)]
    fn database_requirement(#[case] command: Command, #[case] expected: bool) {
        assert_eq!(command.needs_database(), expected);
    }
}
