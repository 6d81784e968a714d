// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The per-line processing loop.
//!
//! A [`Driver`] reads graph6 lines, runs the configured [`Mode`] on each graph
//! and writes graph6 lines to its output stream. Human-readable diagnostics
//! (adjacency dumps, lonely-edge listings, matching dumps) go to a separate
//! diagnostics stream. Each line produces its own [`Statistics`], merged into
//! the running total by [`Driver::run`].
//!
//! # Example
//!
//! ```
//! use lonely_edges::config::Config;
//! use lonely_edges::driver::{Counters, Driver};
//!
//! let input = "C~\nEFz_\nnot a graph\n";
//! let mut output = Vec::new();
//! let mut driver = Driver::new(Config::default(), &mut output, std::io::sink());
//! let stats = driver.run(input.as_bytes()).unwrap();
//!
//! // K4 has lonely edges, K3,3 has none, the last line is skipped.
//! assert_eq!(output, b"C~\n");
//! assert_eq!(stats.get(Counters::Checked), 2);
//! assert_eq!(stats.get(Counters::Skipped), 1);
//! assert_eq!(stats.frequency(6), 1);
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::children::{self, Child};
use crate::config::{Config, Mode};
use crate::graph::{graph6, Graph, GraphError};
use crate::lonely::{self, LonelyEdges};
use crate::matching::MatchingPrinter;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Runs a [`Config`] over graph6 input.
#[derive(Debug)]
pub struct Driver<O: Write, D: Write> {
    config: Config,
    output: O,
    diagnostics: D,
}

impl<O: Write, D: Write> Driver<O, D> {
    pub fn new(config: Config, output: O, diagnostics: D) -> Self {
        Self {
            config,
            output,
            diagnostics,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every line of `input` and return the merged statistics.
    ///
    /// # Errors
    ///
    /// Fails on the first I/O error reading input or writing either stream.
    /// Invalid graphs are not errors; they are counted as skipped.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<Statistics> {
        let mut total = Statistics::new();
        for line in input.split(b'\n') {
            let line = line?;
            total.merge(self.process_line(&String::from_utf8_lossy(&line))?);
        }
        self.output.flush()?;
        self.diagnostics.flush()?;
        Ok(total)
    }

    /// Process one graph6 line and return its statistics.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors writing the output or diagnostics streams.
    pub fn process_line(&mut self, line: &str) -> io::Result<Statistics> {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut stats = Statistics::new();

        let graph = match graph6::decode(line) {
            Ok(graph) => graph,
            Err(err) => {
                debug!(error = %err, line, "skipping invalid graph");
                if self.config.verbose {
                    writeln!(self.diagnostics, "Skipping invalid graph!")?;
                }
                stats.increment(Counters::Skipped);
                return Ok(stats);
            }
        };

        if self.config.verbose {
            writeln!(self.diagnostics, "\nLooking at: {}", line)?;
            write!(self.diagnostics, "{}", graph)?;
        }
        stats.increment(Counters::Checked);

        match self.config.mode {
            Mode::AllChildren => {
                for child in children::all_children(&graph) {
                    if self.emit_child(child)? {
                        stats.increment(Counters::Passed);
                    }
                }
            }
            Mode::PreservingChildren => {
                let lonely = self.classify(&graph)?;
                stats.record_lonely_count(lonely.count());
                let emitted = self.emit_preserving_children(&graph, &lonely)?;
                stats.add(Counters::Passed, emitted);
            }
            Mode::Filter { exact } => {
                let lonely = self.classify(&graph)?;
                let count = lonely.count();
                stats.record_lonely_count(count);
                if count > 0 {
                    if exact.map_or(true, |exact| exact == count) {
                        writeln!(self.output, "{}", line)?;
                        stats.increment(Counters::Passed);
                    }
                    if self.config.verbose {
                        writeln!(
                            self.diagnostics,
                            "{} lonely edges: {}",
                            count,
                            lonely.listing(&graph)
                        )?;
                    }
                }
            }
        }

        Ok(stats)
    }

    fn classify(&mut self, graph: &Graph) -> io::Result<LonelyEdges> {
        if !self.config.dump_matchings {
            return Ok(lonely::classify(graph));
        }
        let mut printer = MatchingPrinter::new(&mut self.diagnostics);
        let lonely = lonely::classify_with(graph, &mut printer);
        printer.finish()?;
        Ok(lonely)
    }

    /// Emit every child passing the v-join test, returning how many were written.
    ///
    /// v-joins are dumped into a buffer and copied out before each child, so
    /// the dump of a vertex precedes its "Blowing up" line.
    fn emit_preserving_children(&mut self, graph: &Graph, lonely: &LonelyEdges) -> io::Result<u64> {
        let mut dump = self
            .config
            .dump_matchings
            .then(|| MatchingPrinter::new(Vec::new()));
        let mut emitted = 0;

        let mut children = children::children_preserving_lonely_count(graph, lonely.edges(), &mut dump);
        while let Some(child) = children.next() {
            drain_dump(children.observer(), &mut self.diagnostics)?;
            if self.emit_child(child)? {
                emitted += 1;
            }
        }
        drain_dump(children.observer(), &mut self.diagnostics)?;

        Ok(emitted)
    }

    /// Write one child, returning whether it could be built.
    fn emit_child(&mut self, child: Result<Child, GraphError>) -> io::Result<bool> {
        match child {
            Ok(child) => {
                if self.config.verbose {
                    writeln!(self.diagnostics, "Blowing up {}", child.vertex)?;
                }
                writeln!(self.output, "{}", graph6::encode(&child.graph))?;
                Ok(true)
            }
            Err(err) => {
                warn!(error = %err, "skipping child");
                Ok(false)
            }
        }
    }
}

fn drain_dump<D: Write>(dump: &mut Option<MatchingPrinter<Vec<u8>>>, diagnostics: &mut D) -> io::Result<()> {
    if let Some(printer) = dump {
        let buffer = printer.get_mut();
        diagnostics.write_all(buffer)?;
        buffer.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETERSEN: &str = "IheA@GUAo";
    const K4: &str = "C~";
    const PRISM: &str = "E{Sw";

    fn run(config: Config, input: &str) -> (String, String, Statistics) {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();
        let stats = Driver::new(config, &mut output, &mut diagnostics)
            .run(input.as_bytes())
            .unwrap();
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(diagnostics).unwrap(),
            stats,
        )
    }

    fn config(mode: Mode) -> Config {
        Config {
            mode,
            ..Config::default()
        }
    }

    #[test]
    fn test_filter_emits_graphs_with_lonely_edges() {
        let input = format!("{}\n{}\n{}\n", K4, PETERSEN, PRISM);
        let (out, diagnostics, stats) = run(Config::default(), &input);
        assert_eq!(out, "C~\nE{Sw\n");
        assert!(diagnostics.is_empty());
        assert_eq!(stats.get(Counters::Checked), 3);
        assert_eq!(stats.get(Counters::Passed), 2);
        assert_eq!(stats.frequency(6), 2);
        assert_eq!(stats.frequency(0), 1);
    }

    #[test]
    fn test_filter_exact_count() {
        // P4 has 2 lonely edges, K4 has 6.
        let (out, _, stats) = run(config(Mode::Filter { exact: Some(2) }), "Ch\nC~\n");
        assert_eq!(out, "Ch\n");
        assert_eq!(stats.get(Counters::Passed), 1);
        assert_eq!(stats.frequency(6), 1);
    }

    #[test]
    fn test_skipped_lines() {
        let (out, _, stats) = run(Config::default(), "\n!!\nC~~\nC~\r\n");
        assert_eq!(out, "C~\n");
        assert_eq!(stats.get(Counters::Skipped), 3);
        assert_eq!(stats.get(Counters::Checked), 1);
    }

    #[test]
    fn test_all_children() {
        let (out, _, stats) = run(config(Mode::AllChildren), "C~\n");
        assert_eq!(out, "ENqg\nEVpg\nEfhg\nExdW\n");
        assert_eq!(stats.get(Counters::Passed), 4);
        assert_eq!(stats.frequency(6), 0);
    }

    #[test]
    fn test_all_children_skips_non_cubic_vertices() {
        // P4: no vertex has degree 3.
        let (out, _, stats) = run(config(Mode::AllChildren), "Ch\n");
        assert!(out.is_empty());
        assert_eq!(stats.get(Counters::Checked), 1);
        assert_eq!(stats.get(Counters::Passed), 0);
    }

    #[test]
    fn test_preserving_children() {
        let (out, _, stats) = run(config(Mode::PreservingChildren), "C~\nE{Sw\n");
        // Every child of K4 is kept, no child of the prism is.
        assert_eq!(out, "ENqg\nEVpg\nEfhg\nExdW\n");
        assert_eq!(stats.get(Counters::Passed), 4);
        assert_eq!(stats.frequency(6), 2);
    }

    #[test]
    fn test_verbose_filter() {
        let config = Config {
            verbose: true,
            ..Config::default()
        };
        let (_, diagnostics, _) = run(config, "Ch\n");
        assert_eq!(
            diagnostics,
            "\nLooking at: Ch\n0: 1 \n1: 0 2 \n2: 1 3 \n3: 2 \n\n2 lonely edges: (0,1) (2,3) \n"
        );
    }

    #[test]
    fn test_verbose_matchings() {
        let config = Config {
            verbose: true,
            dump_matchings: true,
            ..Config::default()
        };
        let (_, diagnostics, _) = run(config, "C~\n");
        assert!(diagnostics.contains("0-1 2-3 \n0-2 1-3 \n0-3 1-2 \n6 lonely edges: "));
    }

    #[test]
    fn test_verbose_preserving_dump_order() {
        let config = Config {
            mode: Mode::PreservingChildren,
            verbose: true,
            dump_matchings: true,
        };
        let (_, diagnostics, _) = run(config, "C~\n");
        // Each vertex of K4: its single empty v-join, then its blow-up.
        assert!(diagnostics.ends_with(
            "\n\nBlowing up 0\n\nBlowing up 1\n\nBlowing up 2\n\nBlowing up 3\n"
        ));
    }
}
