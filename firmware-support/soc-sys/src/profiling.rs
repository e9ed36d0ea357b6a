// SPDX-FileCopyrightText: 2023 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Checkpoint profiling against the free-running tick counter.

[`Profiler::reset`] captures the counter as the epoch of a session.
Every [`Profiler::log`] afterwards records the ticks since that epoch
together with a label, until [`PROFILING_CAPACITY`] checkpoints have been
recorded. Later checkpoints are dropped. [`Profiler::display`] prints one
line per checkpoint: the timestamp, the ticks since the previous checkpoint
and the label.
*/

use heapless::Vec;

use crate::term::{DisplaySurface, Terminal};

/// Number of checkpoints kept per session.
pub const PROFILING_CAPACITY: usize = 32;

/// Source of the profiler's timestamps.
pub trait TickCounter {
    /// Current counter value. Expected to never decrease within a session.
    fn now(&self) -> u32;
}

/// The memory mapped tick counter.
#[derive(Clone)]
pub struct HardwareCounter {
    addr: *const u32,
}

impl HardwareCounter {
    /// Create a new [`HardwareCounter`] given the address of its register.
    ///
    /// # Safety
    ///
    /// The `addr` pointer MUST BE a valid pointer that is backed by a
    /// memory mapped 32-bit counter.
    pub const unsafe fn new(addr: *const u32) -> HardwareCounter {
        HardwareCounter { addr }
    }
}

impl TickCounter for HardwareCounter {
    fn now(&self) -> u32 {
        unsafe { self.addr.read_volatile() }
    }
}

/// A recorded checkpoint.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProfilingEntry {
    /// Ticks between the session's epoch and this checkpoint.
    pub time: u32,
    pub label: &'static str,
}

pub struct Profiler<C> {
    counter: C,
    start_time: u32,
    entries: Vec<ProfilingEntry, PROFILING_CAPACITY>,
}

impl<C: TickCounter> Profiler<C> {
    /// Create a profiler with an empty log. Its epoch is zero until the first
    /// [`Profiler::reset`].
    pub const fn new(counter: C) -> Self {
        Profiler {
            counter,
            start_time: 0,
            entries: Vec::new(),
        }
    }

    /// Start a new session: take the current counter value as the epoch and
    /// forget all checkpoints.
    pub fn reset(&mut self) {
        self.start_time = self.counter.now();
        self.entries.clear();
    }

    /// Record a checkpoint. Does nothing once the log is full.
    pub fn log(&mut self, label: &'static str) {
        if self.entries.is_full() {
            log::trace!("profiling log full, dropping {}", label);
            return;
        }
        let time = self.counter.now().wrapping_sub(self.start_time);
        // cannot fail, capacity was checked above
        let _ = self.entries.push(ProfilingEntry { time, label });
    }

    /// Print every checkpoint in recording order as
    /// `<time> <delta> <label>`, time and delta as eight hex digits.
    /// The delta of the first checkpoint is its time.
    pub fn display<D: DisplaySurface>(&self, term: &mut Terminal<D>) {
        let mut previous = 0;
        for entry in &self.entries {
            term.print_unsigned_hex_int(entry.time);
            term.put_char(b' ');
            term.print_unsigned_hex_int(entry.time.wrapping_sub(previous));
            term.put_char(b' ');
            term.println_str(entry.label);
            previous = entry.time;
        }
    }

    pub fn entries(&self) -> &[ProfilingEntry] {
        &self.entries
    }

    pub fn start_time(&self) -> u32 {
        self.start_time
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }
}
