// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! C entry points for firmware that is built separately from this crate.
//!
//! Every function here wraps the global [`TERMINAL`] or [`PROFILER`], or one
//! of the division routines. With the `c-exports` feature they are linked
//! under their C names; [`BUILTINS`] additionally lists them in a fixed
//! order so a separately loaded program can call through the table. The
//! table has no fixed address in the image: such a program finds it
//! through the `builtins` symbol.

use core::ffi::{c_char, CStr};

use crate::divrem;
use crate::global::{HardwareProfiler, HardwareTerminal, PROFILER, TERMINAL};

/// C names of the table slots, in slot order.
pub const BUILTIN_NAMES: [&str; 21] = [
    "udivrem",
    "udiv",
    "urem",
    "div",
    "termInitialize",
    "termPrintString",
    "termPrintChar",
    "termPrintInt",
    "termPrintUnsignedInt",
    "termPrintHexInt",
    "termPrintUnsignedHexInt",
    "termPrintln",
    "termPrintlnString",
    "termPrintlnChar",
    "termPrintlnInt",
    "termPrintlnUnsignedInt",
    "termPrintlnHexInt",
    "termPrintlnUnsignedHexInt",
    "profReset",
    "profLog",
    "profDisplay",
];

/// Entry points in slot order; see [`BUILTIN_NAMES`].
#[repr(C)]
pub struct BuiltinTable {
    pub udivrem: extern "C" fn(u32, u32, i32) -> u32,
    pub udiv: extern "C" fn(u32, u32) -> u32,
    pub urem: extern "C" fn(u32, u32) -> u32,
    pub div: extern "C" fn(i32, i32) -> i32,
    pub term_initialize: extern "C" fn(),
    pub term_print_string: unsafe extern "C" fn(*const c_char),
    pub term_print_char: extern "C" fn(c_char),
    pub term_print_int: extern "C" fn(i32),
    pub term_print_unsigned_int: extern "C" fn(u32),
    pub term_print_hex_int: extern "C" fn(i32),
    pub term_print_unsigned_hex_int: extern "C" fn(u32),
    pub term_println: extern "C" fn(),
    pub term_println_string: unsafe extern "C" fn(*const c_char),
    pub term_println_char: extern "C" fn(c_char),
    pub term_println_int: extern "C" fn(i32),
    pub term_println_unsigned_int: extern "C" fn(u32),
    pub term_println_hex_int: extern "C" fn(i32),
    pub term_println_unsigned_hex_int: extern "C" fn(u32),
    pub prof_reset: extern "C" fn(),
    pub prof_log: unsafe extern "C" fn(*const c_char),
    pub prof_display: extern "C" fn(),
}

#[used]
#[cfg_attr(feature = "c-exports", export_name = "builtins")]
#[cfg_attr(target_os = "none", link_section = ".builtin")]
pub static BUILTINS: BuiltinTable = BuiltinTable {
    udivrem,
    udiv,
    urem,
    div,
    term_initialize,
    term_print_string,
    term_print_char,
    term_print_int,
    term_print_unsigned_int,
    term_print_hex_int,
    term_print_unsigned_hex_int,
    term_println,
    term_println_string,
    term_println_char,
    term_println_int,
    term_println_unsigned_int,
    term_println_hex_int,
    term_println_unsigned_hex_int,
    prof_reset,
    prof_log,
    prof_display,
};

fn terminal() -> &'static mut HardwareTerminal {
    // SAFETY: single hart without reentrant interrupts, and none of the
    // entry points below hold on to the reference past their return.
    unsafe { &mut *TERMINAL.get() }
}

fn profiler() -> &'static mut HardwareProfiler {
    // SAFETY: see `terminal`.
    unsafe { &mut *PROFILER.get() }
}

//
// divrem
//

/// Quotient of `x / y`, or the remainder if `rem` is non-zero.
#[cfg_attr(feature = "c-exports", export_name = "udivrem")]
pub extern "C" fn udivrem(x: u32, y: u32, rem: i32) -> u32 {
    let result = divrem::udivrem(x, y);
    if rem != 0 {
        result.remainder
    } else {
        result.quotient
    }
}

#[cfg_attr(feature = "c-exports", export_name = "udiv")]
pub extern "C" fn udiv(x: u32, y: u32) -> u32 {
    divrem::udiv(x, y)
}

#[cfg_attr(feature = "c-exports", export_name = "urem")]
pub extern "C" fn urem(x: u32, y: u32) -> u32 {
    divrem::urem(x, y)
}

#[cfg_attr(feature = "c-exports", export_name = "div")]
pub extern "C" fn div(x: i32, y: i32) -> i32 {
    divrem::div(x, y)
}

//
// term
//

#[cfg_attr(feature = "c-exports", export_name = "termInitialize")]
pub extern "C" fn term_initialize() {
    terminal().initialize();
}

/// # Safety
///
/// `s` must point to a NUL terminated string.
#[cfg_attr(feature = "c-exports", export_name = "termPrintString")]
pub unsafe extern "C" fn term_print_string(s: *const c_char) {
    terminal().put_cstr(CStr::from_ptr(s));
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintChar")]
pub extern "C" fn term_print_char(c: c_char) {
    terminal().put_char(c as u8);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintInt")]
pub extern "C" fn term_print_int(i: i32) {
    terminal().print_int(i);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintUnsignedInt")]
pub extern "C" fn term_print_unsigned_int(i: u32) {
    terminal().print_unsigned_int(i);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintHexInt")]
pub extern "C" fn term_print_hex_int(i: i32) {
    terminal().print_hex_int(i);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintUnsignedHexInt")]
pub extern "C" fn term_print_unsigned_hex_int(i: u32) {
    terminal().print_unsigned_hex_int(i);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintln")]
pub extern "C" fn term_println() {
    terminal().newline();
}

/// # Safety
///
/// `s` must point to a NUL terminated string.
#[cfg_attr(feature = "c-exports", export_name = "termPrintlnString")]
pub unsafe extern "C" fn term_println_string(s: *const c_char) {
    terminal().println_cstr(CStr::from_ptr(s));
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintlnChar")]
pub extern "C" fn term_println_char(c: c_char) {
    terminal().println_char(c as u8);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintlnInt")]
pub extern "C" fn term_println_int(i: i32) {
    terminal().println_int(i);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintlnUnsignedInt")]
pub extern "C" fn term_println_unsigned_int(i: u32) {
    terminal().println_unsigned_int(i);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintlnHexInt")]
pub extern "C" fn term_println_hex_int(i: i32) {
    terminal().println_hex_int(i);
}

#[cfg_attr(feature = "c-exports", export_name = "termPrintlnUnsignedHexInt")]
pub extern "C" fn term_println_unsigned_hex_int(i: u32) {
    terminal().println_unsigned_hex_int(i);
}

//
// profiling
//

#[cfg_attr(feature = "c-exports", export_name = "profReset")]
pub extern "C" fn prof_reset() {
    profiler().reset();
}

/// # Safety
///
/// `label` must point to a NUL terminated string that stays valid and
/// unchanged until the profile has been displayed.
#[cfg_attr(feature = "c-exports", export_name = "profLog")]
pub unsafe extern "C" fn prof_log(label: *const c_char) {
    let label = CStr::from_ptr(label)
        .to_str()
        .unwrap_or("<label is not utf-8>");
    profiler().log(label);
}

#[cfg_attr(feature = "c-exports", export_name = "profDisplay")]
pub extern "C" fn prof_display() {
    profiler().display(terminal());
}
