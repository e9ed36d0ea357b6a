// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use std::ffi::CStr;

use proptest::prelude::*;
use test_strategy::proptest;
use ufmt::uwriteln;

use soc_sys::term::{Cursor, Terminal, CELL_WIDTH, ROW_HEIGHT, WRAP_COLUMN};

mod common;
use common::*;

#[derive(Debug, Clone, test_strategy::Arbitrary)]
enum Op {
    Char(#[strategy(b' '..=b'~')] u8),
    Newline,
}

#[test]
fn zero_prints_single_digit() {
    assert_eq!(printed(|t| t.print_unsigned_int(0)), "0");
    assert_eq!(printed(|t| t.print_int(0)), "0");
}

#[test]
fn largest_place_value() {
    assert_eq!(printed(|t| t.print_unsigned_int(1_000_000_000)), "1000000000");
    assert_eq!(printed(|t| t.print_unsigned_int(u32::MAX)), "4294967295");
}

#[test]
fn inner_zeroes_are_kept() {
    assert_eq!(printed(|t| t.print_unsigned_int(100_200)), "100200");
    assert_eq!(printed(|t| t.print_unsigned_int(10)), "10");
}

#[test]
fn negative_decimal() {
    assert_eq!(printed(|t| t.print_int(-42)), "-42");
    assert_eq!(printed(|t| t.print_int(i32::MIN)), "-2147483648");
}

#[test]
fn hex_is_zero_padded() {
    assert_eq!(printed(|t| t.print_unsigned_hex_int(0)), "00000000");
    assert_eq!(printed(|t| t.print_unsigned_hex_int(0xdeadbeef)), "deadbeef");
    assert_eq!(printed(|t| t.print_unsigned_hex_int(0xa)), "0000000a");
}

#[test]
fn negative_hex_prints_magnitude() {
    assert_eq!(printed(|t| t.print_hex_int(-1)), "-00000001");
    assert_eq!(printed(|t| t.print_hex_int(i32::MIN)), "-80000000");
    assert_eq!(printed(|t| t.print_hex_int(0x1234)), "00001234");
}

#[proptest]
fn unsigned_decimal_matches_std(i: u32) {
    prop_assert_eq!(printed(|t| t.print_unsigned_int(i)), format!("{i}"));
}

#[proptest]
fn signed_decimal_matches_std(i: i32) {
    prop_assert_eq!(printed(|t| t.print_int(i)), format!("{i}"));
}

#[proptest]
fn unsigned_hex_matches_std(i: u32) {
    prop_assert_eq!(printed(|t| t.print_unsigned_hex_int(i)), format!("{i:08x}"));
}

#[test]
fn wraps_at_column_512() {
    let mut term = Terminal::new(Screen::default());
    for _ in 0..63 {
        term.put_char(b'.');
    }
    assert_eq!(term.cursor(), Cursor { x: 504, y: 0 });

    term.put_char(b'a');
    assert_eq!(term.cursor(), Cursor { x: 0, y: 16 });
    term.put_char(b'b');
    assert_eq!(term.cursor(), Cursor { x: 8, y: 16 });

    assert_eq!(term.display().cell(504), Some(b'a'));
    assert_eq!(term.display().cell(16 << 7), Some(b'b'));
    assert_eq!(term.display().row(1), "b");
}

#[test]
fn newline_always_starts_a_new_row() {
    let mut term = Terminal::new(Screen::default());
    term.newline();
    assert_eq!(term.cursor(), Cursor { x: 0, y: 16 });
    term.put_str("ab");
    term.newline();
    assert_eq!(term.cursor(), Cursor { x: 0, y: 32 });
    assert_eq!(term.display().row(1), "ab");
}

#[test]
fn println_variants_end_the_line() {
    let mut term = Terminal::new(Screen::default());
    term.println_str("text");
    term.println_char(b'c');
    term.println_int(-5);
    term.println_unsigned_int(5);
    term.println_hex_int(-0x10);
    term.println_unsigned_hex_int(0x10);
    term.println_bytes(b"bytes\0ignored");
    term.println_cstr(CStr::from_bytes_with_nul(b"cstr\0").unwrap());

    let screen = term.display();
    let rows: Vec<String> = (0..8).map(|row| screen.row(row)).collect();
    assert_eq!(
        rows,
        [
            "text",
            "c",
            "-5",
            "5",
            "-00000010",
            "00000010",
            "bytes",
            "cstr"
        ]
    );
    assert_eq!(term.cursor(), Cursor { x: 0, y: 8 * 16 });
}

#[test]
fn string_stops_at_terminator() {
    let mut term = Terminal::new(Screen::default());
    term.put_str("abc\0def");
    assert_eq!(term.display().writes(), 3);
    assert_eq!(term.cursor(), Cursor { x: 24, y: 0 });
}

#[test]
fn empty_string_writes_nothing() {
    let mut term = Terminal::new(Screen::default());
    term.put_str("");
    term.put_bytes(b"\0abc");
    assert_eq!(term.display().writes(), 0);
    assert_eq!(term.cursor(), Cursor::default());
}

#[test]
fn initialize_only_moves_cursor() {
    let mut term = Terminal::new(Screen::default());
    term.println_str("first");
    term.initialize();
    assert_eq!(term.cursor(), Cursor::default());
    term.put_str("X");
    assert_eq!(term.display().row(0), "Xirst");
}

#[test]
fn ufmt_newlines_move_the_cursor() {
    let mut term = Terminal::new(Screen::default());
    uwriteln!(term, "x = {}", 17u32).unwrap();
    assert_eq!(term.display().row(0), "x = 17");
    assert_eq!(term.cursor(), Cursor { x: 0, y: 16 });
}

#[test]
fn core_fmt_newlines_move_the_cursor() {
    use core::fmt::Write;

    let mut term = Terminal::new(Screen::default());
    write!(term, "a\nb").unwrap();
    assert_eq!(term.display().row(0), "a");
    assert_eq!(term.display().row(1), "b");
    assert_eq!(term.cursor(), Cursor { x: 8, y: 16 });
}

#[proptest]
fn cursor_stays_on_the_grid(ops: Vec<Op>) {
    let mut term = Terminal::new(Screen::default());
    let mut last_y = 0;
    for op in ops {
        match op {
            Op::Char(c) => term.put_char(c),
            Op::Newline => term.newline(),
        }
        let Cursor { x, y } = term.cursor();
        prop_assert!(x < WRAP_COLUMN);
        prop_assert_eq!(x % CELL_WIDTH, 0);
        prop_assert_eq!(y % ROW_HEIGHT, 0);
        prop_assert!(y >= last_y);
        last_y = y;
    }
}
