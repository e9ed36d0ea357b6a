#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use ufmt::uwriteln;

use soc_sys::divrem::{div, udiv, urem};
use soc_sys::global::{PROFILER, TERMINAL};

#[cfg(not(test))]
use riscv_rt::entry;

/// Sum of the decimal digits of every number below `n`.
fn digit_sum_below(n: u32) -> u32 {
    let mut sum = 0;
    for i in 0..n {
        let mut rest = i;
        while rest != 0 {
            sum += urem(rest, 10);
            rest = udiv(rest, 10);
        }
    }
    sum
}

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    unsafe { soc_sys::term::log::init(LevelFilter::Info) };

    // The logger prints to the same terminal, so it must not be used while
    // `term` is alive.
    {
        let term = unsafe { &mut *TERMINAL.get() };
        term.initialize();
        term.println_str("Hello from Rust!");
        uwriteln!(term, "udiv(1000000, 7) = {}", udiv(1_000_000, 7)).unwrap();
        uwriteln!(term, "urem(1000000, 7) = {}", urem(1_000_000, 7)).unwrap();
        uwriteln!(term, "div(-1000000, 7) = {}", div(-1_000_000, 7)).unwrap();
        term.put_str("udiv(42, 0) = 0x");
        term.println_unsigned_hex_int(udiv(42, 0));
    }

    log::info!("profiling started");

    let prof = unsafe { &mut *PROFILER.get() };
    prof.reset();
    prof.log("start");
    let sum = digit_sum_below(1000);
    prof.log("digit sums");
    {
        let term = unsafe { &mut *TERMINAL.get() };
        term.put_str("digit sum below 1000: ");
        term.println_unsigned_int(sum);
        for i in [0, 7, -7, 1_000_000_000, i32::MIN] {
            term.print_int(i);
            term.put_char(b' ');
            term.println_hex_int(i);
        }
    }
    prof.log("printing");

    log::info!("profile:");
    {
        let term = unsafe { &mut *TERMINAL.get() };
        prof.display(term);
    }

    loop {
        continue;
    }
}
