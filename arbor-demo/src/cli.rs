use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("arbor-demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse, select and reorder a tree of items in the terminal")
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .value_name("FILE")
                .help("JSON file with the items to show (defaults to a built-in sample)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("select")
                .long("select")
                .short('s')
                .help("Allow selecting an item")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-drag")
                .long("no-drag")
                .help("Disable drag reordering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Write debug output to the log file")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub data: Option<PathBuf>,
    pub select: bool,
    pub drag: bool,
    pub verbose: bool,
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            data: matches.get_one::<PathBuf>("data").cloned(),
            select: matches.get_flag("select"),
            drag: !matches.get_flag("no-drag"),
            verbose: matches.get_flag("verbose"),
        }
    }
}
