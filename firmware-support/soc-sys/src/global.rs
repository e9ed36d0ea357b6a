// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! The hardware instances behind the exported entry points.

use core::cell::UnsafeCell;

use crate::memmap;
use crate::profiling::{HardwareCounter, Profiler};
use crate::term::{CharacterDisplay, Terminal};

/// Interior mutable storage for a `static` on a single hart.
///
/// # Safety
///
/// Even though `SingleCore` is `Sync`, it does no synchronisation at all.
/// Sharing it is only sound when there is exactly one thread of execution
/// and nothing reenters through an interrupt while a reference obtained
/// from [`SingleCore::get`] is alive.
#[repr(transparent)]
pub struct SingleCore<T>(UnsafeCell<T>);

impl<T> SingleCore<T> {
    pub const fn new(value: T) -> Self {
        SingleCore(UnsafeCell::new(value))
    }

    /// Raw pointer to the contents. Turning it into a reference is up to
    /// the caller, who must make sure no other reference is alive.
    pub const fn get(&self) -> *mut T {
        self.0.get()
    }
}

unsafe impl<T> Sync for SingleCore<T> {}

pub type HardwareTerminal = Terminal<CharacterDisplay>;
pub type HardwareProfiler = Profiler<HardwareCounter>;

/// Terminal on the SoC's character display.
pub static TERMINAL: SingleCore<HardwareTerminal> = SingleCore::new(Terminal::new(unsafe {
    CharacterDisplay::new(memmap::CHARACTER_DISPLAY_ADDR)
}));

/// Profiler reading the SoC's tick counter.
pub static PROFILER: SingleCore<HardwareProfiler> = SingleCore::new(Profiler::new(unsafe {
    HardwareCounter::new(memmap::TICK_COUNTER_ADDR)
}));
