// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Software division.

The core has no divide unit, so quotients and remainders are computed with
restoring long division: one dividend bit per step, most significant bit
first, using only shifts, compares and subtractions.

Every call takes exactly 32 steps. There is no early exit and no special
case for small operands.

Dividing by zero is not an error. The comparison against a zero divisor
succeeds on every step, so the quotient comes out as all ones and the
remainder as zero:

```
use soc_sys::divrem::{udiv, urem};

assert_eq!(udiv(1234, 0), 0xffff_ffff);
assert_eq!(urem(1234, 0), 0);
```
*/

use ufmt::derive::uDebug;


/// Quotient and remainder of an unsigned division.
#[derive(uDebug, Debug, Copy, Clone, PartialEq, Eq)]
pub struct DivRem {
    pub quotient: u32,
    pub remainder: u32,
}

/// Divide `x` by `y`, producing both quotient and remainder.
///
/// For `y != 0` the result satisfies `quotient * y + remainder == x` and
/// `remainder < y`. For `y == 0` the quotient is `0xffff_ffff` and the
/// remainder is `0`.
pub const fn udivrem(x: u32, y: u32) -> DivRem {
    let mut dividend = x;
    let mut quotient = 0;
    let mut remainder = 0;
    let mut i = 0;
    while i < u32::BITS {
        remainder = (remainder << 1) | (dividend >> 31);
        dividend <<= 1;
        quotient <<= 1;
        if remainder >= y {
            remainder -= y;
            quotient |= 1;
        }
        i += 1;
    }
    DivRem {
        quotient,
        remainder,
    }
}

/// Unsigned quotient of `x / y`.
pub const fn udiv(x: u32, y: u32) -> u32 {
    udivrem(x, y).quotient
}

/// Unsigned remainder of `x / y`.
pub const fn urem(x: u32, y: u32) -> u32 {
    udivrem(x, y).remainder
}

/// Signed quotient of `x / y`, rounded towards zero.
///
/// Both operands are divided as magnitudes and the quotient is negated when
/// exactly one of them is negative. Negation wraps, so `i32::MIN` divides as
/// the magnitude `0x8000_0000` and `div(i32::MIN, -1)` is `i32::MIN`. A zero
/// divisor yields `-1` for non-negative `x` and `1` for negative `x`.
pub const fn div(x: i32, y: i32) -> i32 {
    let negative = (x < 0) ^ (y < 0);
    let quotient = udiv(x.unsigned_abs(), y.unsigned_abs()) as i32;
    if negative {
        quotient.wrapping_neg()
    } else {
        quotient
    }
}
