use core::fmt;
use std::io::{self, Write};

use crate::core::grid::SampleGrid;
use crate::core::word::F32Word;

/// One table row: sample index, f64 input and output, narrowed word.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LutEntry {
    pub k: u32,
    pub x: f64,
    pub y: f64,
    pub word: F32Word,
}

impl fmt::Display for LutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LutEntry(k={}, x={}, y={:.8e}, y32={:.8e}, bits={})",
            self.k,
            self.x,
            self.y,
            self.word.to_f32(),
            self.word
        )
    }
}

/// A fully evaluated table over a [`SampleGrid`], in ascending `k`.
#[derive(Clone, Debug)]
pub struct LutTable {
    grid: SampleGrid,
    entries: Vec<LutEntry>,
}

impl LutTable {
    /// Evaluate `f` in f64 at every grid point and narrow each result to f32.
    pub fn generate<F>(grid: SampleGrid, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        tracing::debug!(%grid, "generating table");

        let mut entries = Vec::with_capacity(grid.len());
        for (k, x) in grid.samples() {
            let y = f(x);
            let word = F32Word::narrow(y);
            tracing::trace!(k, x, y, %word, "sample");
            entries.push(LutEntry { k, x, y, word });
        }

        tracing::debug!(entries = entries.len(), "table generated");
        Self { grid, entries }
    }

    #[inline]
    pub fn grid(&self) -> SampleGrid {
        self.grid
    }

    #[inline]
    pub fn entries(&self) -> &[LutEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = F32Word> + '_ {
        self.entries.iter().map(|e| e.word)
    }

    /// Write one word per line, `\n` terminated.
    pub fn write_hex<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{self}")
    }

    /// The same text `write_hex` produces, as a `String`.
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }
}

/// The table file text: one word per line.
impl fmt::Display for LutTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words() {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}
