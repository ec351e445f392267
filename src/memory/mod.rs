//! Memory model for the HanulLang interpreter
//!
//! A single flat address space of [`crate::interpreter::constants::MEMORY_CELLS`]
//! signed 64-bit cells, all zero at the start of a run. Addresses are decoded
//! from marker-repetition counts and are therefore never negative.
//!
//! Cells are stored sparsely: real programs touch a handful of the 65536
//! addresses, so an `FxHashMap` keyed by address backs the store and absent
//! cells read as 0.
//!
//! Addresses at or beyond the cell space are a reported error, not a clamp or
//! a wrap: reads and writes return [`Diagnostic::AddressOutOfRange`] and the
//! interpreter logs it and continues with a defaulted value.

use crate::interpreter::constants::MEMORY_CELLS;
use crate::interpreter::errors::Diagnostic;
use rustc_hash::FxHashMap;

/// The flat cell store for one run.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    cells: FxHashMap<usize, i64>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    /// Read a cell. Untouched cells are 0.
    pub fn read(&self, address: usize) -> Result<i64, Diagnostic> {
        if address >= MEMORY_CELLS {
            return Err(Diagnostic::AddressOutOfRange { address });
        }
        Ok(self.cells.get(&address).copied().unwrap_or(0))
    }

    /// Write a cell.
    pub fn write(&mut self, address: usize, value: i64) -> Result<(), Diagnostic> {
        if address >= MEMORY_CELLS {
            return Err(Diagnostic::AddressOutOfRange { address });
        }
        self.cells.insert(address, value);
        Ok(())
    }
}
