// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line options and the validated run configuration.
//!
//! [`Args`] is the raw clap surface, one field per flag. [`Config`] is what the
//! driver runs on: exactly one [`Mode`] plus the two cross-cutting toggles.
//! The conversion rejects conflicting or out-of-range options before any
//! input is read.

use clap::Parser;
use std::fmt;
use thiserror::Error;

const HELP: &str = "\
Input graphs should be in graph6 format. Without any parameters, the program
outputs those graphs which contain at least one lonely edge.

Lonely edges are edges contained in exactly one perfect matching. Children of
a graph are obtained by blowing up one of its vertices to a triangle.";

/// Find the lonely edges of graphs read as graph6 lines from standard input.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "lonely-edges")]
#[command(author, version, about, long_about = HELP)]
pub struct Args {
    /// Only output those graphs with exactly # lonely edges
    #[arg(short = 'o', long = "output", value_name = "#", allow_negative_numbers = true)]
    pub output: Option<i64>,

    /// For every input graph, output all of its children which have the same
    /// number of lonely edges; children might be isomorphic
    #[arg(short = 'd', long = "descendants")]
    pub descendants: bool,

    /// Output all children of every input graph; children might be isomorphic
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Output extra information, such as the labeling of each graph and which
    /// lonely edges it has
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Output all perfect matchings of each graph; requires -v
    #[arg(short = 'm', long = "matchings")]
    pub matchings: bool,
}

/// What to do with each input graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Emit input graphs with at least one lonely edge, optionally only those
    /// with exactly `exact` lonely edges.
    Filter { exact: Option<usize> },
    /// Emit every triangle blow-up child of every input graph.
    AllChildren,
    /// Emit the children that keep the parent's lonely-edge count.
    PreservingChildren,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Filter { exact: None }
    }
}

/// A validated run configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Dump adjacency, lonely edges and blown-up vertices on the diagnostics stream.
    pub verbose: bool,
    /// Dump every matching found on the diagnostics stream.
    pub dump_matchings: bool,
}

/// One of the mutually exclusive mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFlag {
    Output,
    Descendants,
    All,
}

impl fmt::Display for ModeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self {
            ModeFlag::Output => "-o",
            ModeFlag::Descendants => "-d",
            ModeFlag::All => "-a",
        };
        write!(f, "{}", flag)
    }
}

/// Options that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("number of lonely edges should be at least 0, got {0}")]
    NegativeFilter(i64),

    #[error("cannot use {0} and {1} simultaneously")]
    ConflictingModes(ModeFlag, ModeFlag),

    #[error("use -m only with -v")]
    MatchingsWithoutVerbose,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let exact = match args.output {
            Some(n) if n < 0 => return Err(ConfigError::NegativeFilter(n)),
            Some(n) => Some(n as usize),
            None => None,
        };
        if args.matchings && !args.verbose {
            return Err(ConfigError::MatchingsWithoutVerbose);
        }

        let requested: Vec<ModeFlag> = [
            (exact.is_some(), ModeFlag::Output),
            (args.descendants, ModeFlag::Descendants),
            (args.all, ModeFlag::All),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect();

        let mode = match requested.as_slice() {
            [] | [ModeFlag::Output] => Mode::Filter { exact },
            [ModeFlag::Descendants] => Mode::PreservingChildren,
            [ModeFlag::All] => Mode::AllChildren,
            [first, second, ..] => return Err(ConfigError::ConflictingModes(*first, *second)),
        };

        Ok(Config {
            mode,
            verbose: args.verbose,
            dump_matchings: args.matchings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("lonely-edges").chain(argv.iter().copied()))
            .expect("arguments should parse");
        Config::try_from(args)
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(parse(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_exact_filter() {
        let config = parse(&["-o", "3", "-v"]).unwrap();
        assert_eq!(config.mode, Mode::Filter { exact: Some(3) });
        assert!(config.verbose);
        assert_eq!(parse(&["--output=0"]).unwrap().mode, Mode::Filter { exact: Some(0) });
    }

    #[test]
    fn test_children_modes() {
        assert_eq!(parse(&["-a"]).unwrap().mode, Mode::AllChildren);
        assert_eq!(parse(&["--descendants"]).unwrap().mode, Mode::PreservingChildren);
        let config = parse(&["-dvm"]).unwrap();
        assert_eq!(config.mode, Mode::PreservingChildren);
        assert!(config.dump_matchings);
    }

    #[test]
    fn test_negative_filter() {
        assert_eq!(parse(&["-o", "-1"]), Err(ConfigError::NegativeFilter(-1)));
    }

    #[test]
    fn test_conflicting_modes() {
        assert_eq!(
            parse(&["-a", "-d"]),
            Err(ConfigError::ConflictingModes(ModeFlag::Descendants, ModeFlag::All))
        );
        assert_eq!(
            parse(&["-o", "2", "-a"]),
            Err(ConfigError::ConflictingModes(ModeFlag::Output, ModeFlag::All))
        );
        assert_eq!(
            parse(&["-o", "2", "-d", "-a"]).unwrap_err().to_string(),
            "cannot use -o and -d simultaneously"
        );
    }

    #[test]
    fn test_matchings_need_verbose() {
        assert_eq!(parse(&["-m"]), Err(ConfigError::MatchingsWithoutVerbose));
    }

    #[test]
    fn test_unknown_option() {
        let err = Args::try_parse_from(["lonely-edges", "-x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
