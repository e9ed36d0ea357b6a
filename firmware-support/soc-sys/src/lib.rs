// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Runtime support for the SoC's RISC-V core: software division, the
//! character display terminal and a tick-counter profiler.
//!
//! The core implements neither multiplication nor division in hardware. The
//! division routines and the terminal's number formatting therefore get by
//! with shifts, compares and subtractions.

#![no_std]

pub mod divrem;
pub mod exports;
pub mod global;
pub mod memmap;
#[cfg(feature = "panic-handler")]
pub mod panic_handler;
pub mod profiling;
pub mod term;
