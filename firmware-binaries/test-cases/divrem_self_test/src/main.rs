#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use ufmt::uwriteln;

use soc_sys::divrem::self_test::self_test;
use soc_sys::global::TERMINAL;
#[cfg(not(test))]
use riscv_rt::entry;

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    let term = unsafe { &mut *TERMINAL.get() };
    term.initialize();
    uwriteln!(term, "Start divrem self test").unwrap();
    for (name, result) in self_test() {
        match result {
            Some((msg, Some(value))) => {
                uwriteln!(term, "{}: Some({}, {:?})", name, msg, value).unwrap()
            }
            Some((msg, None)) => uwriteln!(term, "{}: Some({})", name, msg).unwrap(),
            None => uwriteln!(term, "{}: None", name).unwrap(),
        };
    }
    uwriteln!(term, "Done").unwrap();
    loop {
        continue;
    }
}
