// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use core::fmt::{Display, Write};
use core::panic::PanicInfo;

use crate::global::TERMINAL;
use crate::term::{DisplaySurface, Terminal};

/// Print `info` on a fresh row of `term`.
fn report<D: DisplaySurface>(term: &mut Terminal<D>, info: &dyn Display) {
    term.newline();
    let _ = writeln!(term, "{}", info);
}

#[inline(never)]
#[cfg_attr(all(not(test), target_os = "none"), panic_handler)]
pub fn panic(info: &PanicInfo) -> ! {
    // SAFETY: whatever held the terminal when the panic started is never
    // going to run again.
    let term = unsafe { &mut *TERMINAL.get() };
    report(term, info);

    loop {
        continue;
    }
}
