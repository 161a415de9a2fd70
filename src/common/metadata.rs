use std::ops::Not;

// Symbol configuration
//------------------------------------------------------------------------------

pub const VERSION: usize = 1;

pub const WIDTH: usize = VERSION * 4 + 17;

pub const DATA_CODEWORDS: usize = 9;

pub const EC_CODEWORDS: usize = 17;

pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + EC_CODEWORDS;

// Modules left over after the last full codeword, zero for version 1
pub const REMAINDER_BITS: usize = 0;

// x^8 + x^4 + x^3 + x^2 + 1
pub const PRIMITIVE: u16 = 0b1_0001_1101;

// Two bit format indicator for error correction level H
pub const EC_LEVEL_H: u16 = 0b10;

// Segment header & padding
//------------------------------------------------------------------------------

pub const MODE_BITS: usize = 4;

pub const CHAR_CNT_BITS: usize = 9;

pub const TERMINATOR_BITS: usize = 4;

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

// Function pattern geometry
//------------------------------------------------------------------------------

pub const TIMING_LINE: i16 = 6;

// Last module on the data path for a 21x21 symbol
pub const TERMINAL_MODULE: (i16, i16) = (WIDTH as i16 - 9, 0);

pub const DARK_MODULE: (i16, i16) = (-8, 8);

// Format info
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const FORMAT_GENERATOR: u16 = 0b101_0011_0111;

pub const FORMAT_MASK: u16 = 0b101_0100_0001_0010;

// Most significant bit first, (row, col) with negative values wrapping from the far edge
pub static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); FORMAT_INFO_BIT_LEN] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
