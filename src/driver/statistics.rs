// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are produced per input line by the driver and merged into a
//! running total, which is reported once the input is exhausted.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Input graphs decoded and processed.
    Checked,
    /// Graphs written to the output: input graphs or children.
    Passed,
    /// Input lines that could not be decoded or exceeded the capacity.
    Skipped,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
    /// Number of input graphs per lonely-edge count.
    frequencies: BTreeMap<usize, u64>,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Count one more input graph with `count` lonely edges.
    pub fn record_lonely_count(&mut self, count: usize) {
        *self.frequencies.entry(count).or_default() += 1;
    }

    /// Number of input graphs seen with `count` lonely edges.
    pub fn frequency(&self, count: usize) -> u64 {
        self.frequencies.get(&count).copied().unwrap_or(0)
    }

    /// Fold `other` into this total.
    pub fn merge(&mut self, other: Statistics) {
        for (total, value) in self.stats.iter_mut().zip(other.stats) {
            *total += value;
        }
        for (count, graphs) in other.frequencies {
            *self.frequencies.entry(count).or_default() += graphs;
        }
    }

    /// Write the end-of-run summary.
    ///
    /// The histogram of lonely-edge counts is only written when
    /// `include_histogram` is set.
    pub fn report<W: Write + ?Sized>(
        &self,
        elapsed: Duration,
        include_histogram: bool,
        out: &mut W,
    ) -> io::Result<()> {
        if include_histogram {
            writeln!(out)?;
            for (count, graphs) in &self.frequencies {
                writeln!(out, "\tInput graphs with {} lonely edges: {}", count, graphs)?;
            }
            writeln!(out)?;
        }

        writeln!(
            out,
            "\rChecked {} graphs in {:.6} seconds: {} passed.",
            self.get(Counters::Checked),
            elapsed.as_secs_f64(),
            self.get(Counters::Passed)
        )?;
        let skipped = self.get(Counters::Skipped);
        if skipped > 0 {
            writeln!(out, "Warning: {} graphs were skipped.", skipped)?;
        }
        Ok(())
    }
}
