// Arithmetic over GF(2^8) using log/exp tables for the polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11d)

use core::iter::{Product, Sum};
use core::ops::{Add, Mul, Sub};

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

use crate::error::{Error, Result};

/// The irreducible polynomial defining the field.
pub const POLY: u16 = 0x11d;

// LOG[0] never holds a real logarithm, multiplication and division by zero bypass the tables.
const LOG_ZERO_SENTINEL: u8 = 255;

struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

impl Tables {
    // Walks the multiplicative group from 1, doubling and reducing by POLY.
    const fn generate() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        let mut i = 0;
        while i < 255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= POLY;
            }
            i += 1;
        }
        exp[255] = exp[0];
        log[0] = LOG_ZERO_SENTINEL;

        Tables { exp, log }
    }
}

static TABLES: Tables = Tables::generate();

/// Field addition, which is XOR.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication. Zero absorbs.
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_sum = (TABLES.log[a as usize] as usize + TABLES.log[b as usize] as usize) % 255;
    TABLES.exp[log_sum]
}

/// Field division. Fails with [`Error::DivisionByZero`] when `b` is zero.
#[inline]
pub fn div(a: u8, b: u8) -> Result<u8> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    let log_diff = (TABLES.log[a as usize] as usize + 255 - TABLES.log[b as usize] as usize) % 255;
    Ok(TABLES.exp[log_diff])
}

/// An element of GF(256).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary))]
pub struct GF256(pub u8);

#[cfg(feature = "zeroize_memory")]
impl zeroize::DefaultIsZeroes for GF256 {}

impl GF256 {
    pub const ZERO: GF256 = GF256(0);
    pub const ONE: GF256 = GF256(1);

    pub fn checked_div(self, other: GF256) -> Result<GF256> {
        div(self.0, other.0).map(GF256)
    }
}

impl Add for GF256 {
    type Output = GF256;

    fn add(self, other: GF256) -> GF256 {
        GF256(add(self.0, other.0))
    }
}

impl Sub for GF256 {
    type Output = GF256;

    fn sub(self, other: GF256) -> GF256 {
        GF256(add(self.0, other.0))
    }
}

impl Mul for GF256 {
    type Output = GF256;

    fn mul(self, other: GF256) -> GF256 {
        GF256(mul(self.0, other.0))
    }
}

impl Sum for GF256 {
    fn sum<I: Iterator<Item = GF256>>(iter: I) -> GF256 {
        iter.fold(GF256::ZERO, |acc, x| acc + x)
    }
}

impl Product for GF256 {
    fn product<I: Iterator<Item = GF256>>(iter: I) -> GF256 {
        iter.fold(GF256::ONE, |acc, x| acc * x)
    }
}
