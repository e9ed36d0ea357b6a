// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};

use soc_sys::profiling::TickCounter;
use soc_sys::term::{DisplaySurface, Terminal, CELL_WIDTH, ROW_HEIGHT, ROW_SHIFT};

/// Cells per text row, as seen from the linear display offset.
const ROW_STRIDE: usize = (ROW_HEIGHT << ROW_SHIFT) as usize;

/// In-memory display keeping the last byte written to every cell.
#[derive(Default)]
pub struct Screen {
    cells: BTreeMap<usize, u8>,
    writes: usize,
}

impl Screen {
    /// Text of row `row`, from the first column up to the last written cell.
    /// Unwritten cells in between show up as spaces.
    pub fn row(&self, row: usize) -> String {
        let start = row * ROW_STRIDE;
        let mut text = Vec::new();
        for (offset, c) in self.cells.range(start..start + ROW_STRIDE) {
            let column = (offset - start) / CELL_WIDTH as usize;
            if text.len() < column {
                text.resize(column, b' ');
            }
            text.push(*c);
        }
        String::from_utf8(text).unwrap()
    }

    pub fn cell(&self, offset: usize) -> Option<u8> {
        self.cells.get(&offset).copied()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplaySurface for Screen {
    fn write_cell(&mut self, offset: usize, c: u8) {
        self.cells.insert(offset, c);
        self.writes += 1;
    }
}

/// Run `f` on a fresh terminal and return what ended up in the first row.
pub fn printed(f: impl FnOnce(&mut Terminal<Screen>)) -> String {
    let mut term = Terminal::new(Screen::default());
    f(&mut term);
    term.display().row(0)
}

/// Counter handing out a fixed list of readings.
pub struct ScriptedCounter {
    readings: RefCell<VecDeque<u32>>,
    reads: Cell<usize>,
}

impl ScriptedCounter {
    pub fn new(readings: &[u32]) -> Self {
        ScriptedCounter {
            readings: RefCell::new(readings.iter().copied().collect()),
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TickCounter for ScriptedCounter {
    fn now(&self) -> u32 {
        self.reads.set(self.reads.get() + 1);
        self.readings
            .borrow_mut()
            .pop_front()
            .expect("counter read more often than scripted")
    }
}

/// Counter advancing by a fixed step on every read.
pub struct SteppingCounter {
    value: Cell<u32>,
    step: u32,
}

impl SteppingCounter {
    pub fn new(start: u32, step: u32) -> Self {
        SteppingCounter {
            value: Cell::new(start),
            step,
        }
    }
}

impl TickCounter for SteppingCounter {
    fn now(&self) -> u32 {
        let now = self.value.get();
        self.value.set(now.wrapping_add(self.step));
        now
    }
}
