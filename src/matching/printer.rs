// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dump of every matching found, one line per matching.

use crate::graph::Graph;
use crate::matching::MatchingVisitor;
use crate::sets::EdgeSet;
use std::io::{self, Write};

/// Writes each visited matching as `"u-v u-v ... "` followed by a newline.
///
/// Write errors cannot surface through [`MatchingVisitor::visit`]; the first
/// one is kept, later matchings are not written, and [`MatchingPrinter::finish`]
/// reports it.
#[derive(Debug)]
pub struct MatchingPrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> MatchingPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Get a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Return the writer, or the first write error encountered.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_matching(&mut self, graph: &Graph, matching: &EdgeSet) -> io::Result<()> {
        for edge in matching {
            let (u, v) = graph.endpoints(edge);
            write!(self.out, "{}-{} ", u, v)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> MatchingVisitor for MatchingPrinter<W> {
    fn visit(&mut self, graph: &Graph, matching: &EdgeSet) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_matching(graph, matching) {
            self.error = Some(err);
        }
    }
}
