use std::ops::Deref;

use super::metadata::{Color, EC_LEVEL_H, FORMAT_GENERATOR, FORMAT_MASK};
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    // (row + col) mod 3 == 0, the mask encoded in the fixed format information
    pub const DIAGONAL: Self = Self(3);

    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern & 0b111)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }
}

impl Default for MaskPattern {
    fn default() -> Self {
        Self::DIAGONAL
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    // Takes non-negative (row, col); true means the data bit is inverted
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern"),
        }
    }
}

// Format info
//------------------------------------------------------------------------------

// BCH(15, 5) code of the level H indicator and mask, XORed with the format mask
pub fn format_info(mask: MaskPattern) -> u16 {
    let data = (EC_LEVEL_H << 3) | *mask as u16;
    let mut rem = data << 10;
    for i in (10..15).rev() {
        if rem & (1 << i) != 0 {
            rem ^= FORMAT_GENERATOR << (i - 10);
        }
    }
    ((data << 10) | rem) ^ FORMAT_MASK
}

// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// Runs of 5 or more same colored modules cost 3, plus 1 per extra module
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    let run_penalty = |len: u32| if len >= 5 { len - 2 } else { 0 };

    let mut pen = 0;
    for is_hor in [true, false] {
        for i in 0..w {
            let get = |j| if is_hor { *qr.get(i, j) } else { *qr.get(j, i) };
            let mut last = get(0);
            let mut run = 1;
            for j in 1..w {
                let clr = get(j);
                if clr == last {
                    run += 1;
                } else {
                    pen += run_penalty(run);
                    last = clr;
                    run = 1;
                }
            }
            pen += run_penalty(run);
        }
    }
    pen
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// 1:1:3:1:1 finder-like runs with 4 light modules on either side, outside the symbol is light
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    static PATTERN: [Color; 7] = [
        Color::Dark,
        Color::Light,
        Color::Dark,
        Color::Dark,
        Color::Dark,
        Color::Light,
        Color::Dark,
    ];

    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let get = |j: i16| {
            if !(0..w).contains(&j) {
                Color::Light
            } else if is_hor {
                *qr.get(i, j)
            } else {
                *qr.get(j, i)
            }
        };
        for j in 0..w - 6 {
            if (j..j + 7).map(get).ne(PATTERN.iter().copied()) {
                continue;
            }
            let is_light = |x| get(x) == Color::Light;
            if (j - 4..j).all(is_light) || (j + 7..j + 11).all(is_light) {
                pen += 40;
            }
        }
    }
    pen
}

// 10 points per 5% deviation of dark modules from 50%
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules();
    let w = qr.width();
    let tot = w * w;
    let percent = dark_cnt * 100 / tot;
    let deviation = percent.abs_diff(50);
    (deviation / 5 * 10) as u32
}

#[cfg(test)]
mod mask_tests {
    use test_case::test_case;

    use super::{format_info, MaskPattern};

    #[test_case(0, 0b001011010001001)]
    #[test_case(1, 0b001001110111110)]
    #[test_case(2, 0b001110011100111)]
    #[test_case(3, 0b001100111010000)]
    #[test_case(4, 0b000011101100010)]
    #[test_case(5, 0b000001001010101)]
    #[test_case(6, 0b000110100001100)]
    #[test_case(7, 0b000100000111011)]
    fn test_format_info_level_h(mask: u8, exp: u16) {
        assert_eq!(format_info(MaskPattern::new(mask)), exp);
    }

    #[test]
    fn test_default_mask_is_diagonal() {
        let mask = MaskPattern::default();
        assert_eq!(*mask, 3);
        let mask_fn = mask.mask_function();
        assert!(mask_fn(0, 0));
        assert!(mask_fn(1, 2));
        assert!(mask_fn(20, 1));
        assert!(!mask_fn(0, 1));
        assert!(!mask_fn(10, 10));
    }

    #[test]
    fn test_mask_functions_are_distinct() {
        let grids = MaskPattern::all()
            .map(|m| {
                let f = m.mask_function();
                (0..21).flat_map(|r| (0..21).map(move |c| f(r, c))).collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        for i in 0..8 {
            for j in i + 1..8 {
                assert_ne!(grids[i], grids[j], "Mask {i} equals mask {j}");
            }
        }
    }

    #[test]
    fn test_vertical_lines_use_column() {
        let f = MaskPattern::new(2).mask_function();
        assert!(f(1, 0));
        assert!(f(4, 3));
        assert!(!f(3, 1));
    }
}
