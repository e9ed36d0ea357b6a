// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Terminal on top of the memory mapped character display.

The cursor is kept in display units: `x` moves in steps of [`CELL_WIDTH`]
and `y` in steps of [`ROW_HEIGHT`]. The cell under the cursor lives at
offset `(y << ROW_SHIFT) + x` of the display. Output wraps to the next row
when `x` reaches [`WRAP_COLUMN`]; the screen is wider than that, but the
monitor cuts off everything to the right of it. The terminal never scrolls:
`y` only grows until the next [`Terminal::initialize`].
*/

use core::ffi::CStr;

use ufmt::derive::uDebug;

use crate::divrem::{udiv, urem};

pub mod log;

/// Width of a character cell in display units.
pub const CELL_WIDTH: u32 = 8;
/// Height of a text row in display units.
pub const ROW_HEIGHT: u32 = 16;
/// Cursor column at which output continues on the next row.
pub const WRAP_COLUMN: u32 = 512;
/// Shift turning the cursor's `y` into a cell offset.
pub const ROW_SHIFT: u32 = 7;

/// Decimal place values, most significant first.
const DECIMAL_PLACES: [u32; 10] = [
    1_000_000_000,
    100_000_000,
    10_000_000,
    1_000_000,
    100_000,
    10_000,
    1_000,
    100,
    10,
    1,
];

/// Something that stores characters at linear cell offsets.
pub trait DisplaySurface {
    fn write_cell(&mut self, offset: usize, c: u8);
}

/// The memory mapped character display.
#[derive(Clone)]
pub struct CharacterDisplay {
    base_addr: *mut u32,
}

impl CharacterDisplay {
    /// Create a new [`CharacterDisplay`] instance given a base address.
    ///
    /// # Safety
    ///
    /// The `base_addr` pointer MUST BE a valid pointer that is backed
    /// by a memory mapped character display.
    pub const unsafe fn new(base_addr: *mut u32) -> CharacterDisplay {
        CharacterDisplay { base_addr }
    }
}

impl DisplaySurface for CharacterDisplay {
    fn write_cell(&mut self, offset: usize, c: u8) {
        unsafe {
            self.base_addr.add(offset).write_volatile(u32::from(c));
        }
    }
}

/// Cursor position in display units.
#[derive(uDebug, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: u32,
    pub y: u32,
}

impl Cursor {
    /// Offset of the cell under the cursor.
    pub fn offset(&self) -> usize {
        (self.y << ROW_SHIFT).wrapping_add(self.x) as usize
    }
}

/// A wrapping, non-scrolling text terminal.
pub struct Terminal<D> {
    display: D,
    cursor: Cursor,
}

impl<D: DisplaySurface> Terminal<D> {
    /// Create a terminal with its cursor in the top left corner.
    pub const fn new(display: D) -> Self {
        Terminal {
            display,
            cursor: Cursor { x: 0, y: 0 },
        }
    }

    /// Move the cursor back to the top left corner. Does not clear the display.
    pub fn initialize(&mut self) {
        self.cursor = Cursor::default();
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Write `c` under the cursor and advance it by one cell.
    pub fn put_char(&mut self, c: u8) {
        self.display.write_cell(self.cursor.offset(), c);
        self.advance();
    }

    fn advance(&mut self) {
        self.cursor.x += CELL_WIDTH;
        if self.cursor.x >= WRAP_COLUMN {
            self.cursor.x = 0;
            self.cursor.y += ROW_HEIGHT;
        }
    }

    /// Write bytes up to, not including, the first NUL.
    pub fn put_bytes(&mut self, s: &[u8]) {
        for &c in s.iter().take_while(|&&c| c != 0) {
            self.put_char(c);
        }
    }

    pub fn put_str(&mut self, s: &str) {
        self.put_bytes(s.as_bytes());
    }

    pub fn put_cstr(&mut self, s: &CStr) {
        self.put_bytes(s.to_bytes());
    }

    /// Continue at the start of the next row, wherever the cursor is.
    pub fn newline(&mut self) {
        self.cursor.x = 0;
        self.cursor.y += ROW_HEIGHT;
    }

    /// Print `i` in decimal without leading zeroes.
    pub fn print_unsigned_int(&mut self, i: u32) {
        // with leading zeroes suppressed, zero itself would print nothing
        if i == 0 {
            self.put_char(b'0');
            return;
        }

        let mut rest = i;
        let mut started = false;
        for place in DECIMAL_PLACES {
            let digit = udiv(rest, place);
            if started || digit != 0 {
                self.put_char(b'0' + digit as u8);
                started = true;
            }
            rest = urem(rest, place);
        }
    }

    /// Print `i` in decimal, preceded by `-` when negative.
    pub fn print_int(&mut self, i: i32) {
        if i < 0 {
            self.put_char(b'-');
        }
        self.print_unsigned_int(i.unsigned_abs());
    }

    /// Print `i` as exactly eight lowercase hex digits.
    pub fn print_unsigned_hex_int(&mut self, i: u32) {
        for shift in (0..u32::BITS).step_by(4).rev() {
            self.put_char(hex_digit((i >> shift) & 0xf));
        }
    }

    /// Print the magnitude of `i` as eight hex digits, preceded by `-` when
    /// negative.
    pub fn print_hex_int(&mut self, i: i32) {
        if i < 0 {
            self.put_char(b'-');
        }
        self.print_unsigned_hex_int(i.unsigned_abs());
    }

    pub fn println_str(&mut self, s: &str) {
        self.put_str(s);
        self.newline();
    }

    pub fn println_bytes(&mut self, s: &[u8]) {
        self.put_bytes(s);
        self.newline();
    }

    pub fn println_cstr(&mut self, s: &CStr) {
        self.put_cstr(s);
        self.newline();
    }

    pub fn println_char(&mut self, c: u8) {
        self.put_char(c);
        self.newline();
    }

    pub fn println_int(&mut self, i: i32) {
        self.print_int(i);
        self.newline();
    }

    pub fn println_unsigned_int(&mut self, i: u32) {
        self.print_unsigned_int(i);
        self.newline();
    }

    pub fn println_hex_int(&mut self, i: i32) {
        self.print_hex_int(i);
        self.newline();
    }

    pub fn println_unsigned_hex_int(&mut self, i: u32) {
        self.print_unsigned_hex_int(i);
        self.newline();
    }

    fn write_text(&mut self, s: &str) {
        for b in s.bytes() {
            match b {
                b'\n' => self.newline(),
                b => self.put_char(b),
            }
        }
    }
}

fn hex_digit(nibble: u32) -> u8 {
    if nibble < 10 {
        b'0' + nibble as u8
    } else {
        b'a' + (nibble - 10) as u8
    }
}

impl<D: DisplaySurface> ufmt::uWrite for Terminal<D> {
    type Error = ();

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_text(s);
        Ok(())
    }
}

impl<D: DisplaySurface> core::fmt::Write for Terminal<D> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_text(s);
        Ok(())
    }
}
