// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed addresses of the devices this firmware talks to.

/// Base of the character display. Every cell is one 32-bit word of which
/// the display keeps the low byte.
pub const CHARACTER_DISPLAY_ADDR: *mut u32 = 0x0400_0000 as *mut u32;

/// Free-running tick counter, read-only.
pub const TICK_COUNTER_ADDR: *const u32 = 0x0700_0000 as *const u32;

