use std::ops::Deref;

use crate::common::{
    iter::EncRegionIter,
    mask::{format_info, MaskPattern},
    metadata::*,
    utils::{PlacementViolation, QRResult},
    BitStream,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new() -> Self {
        Self { grid: vec![Module::Empty; WIDTH * WIDTH], w: WIDTH, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> String {
        match self.mask {
            Some(m) => format!("{{ Version: {VERSION}, Ec level: H, Mask: {} }}", *m),
            None => format!("{{ Version: {VERSION}, Ec level: H, Mask: None }}"),
        }
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    /// Finished symbol, `true` for dark modules.
    pub fn to_bool_matrix(&self) -> [[bool; WIDTH]; WIDTH] {
        let mut res = [[false; WIDTH]; WIDTH];
        for (r, row) in res.iter_mut().enumerate() {
            for (c, m) in row.iter_mut().enumerate() {
                *m = *self.get(r as i16, c as i16) == Color::Dark;
            }
        }
        res
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // 7x7 finder with its light separator, 8x8 in total
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        let (off, last) = (TIMING_LINE, w - 9);
        self.draw_line(off, 8, off, last);
        self.draw_line(8, off, last, off);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}


// Format info
//------------------------------------------------------------------------------

impl QR {
    // All ones placeholder, overwritten once the mask is known
    fn reserve_format_area(&mut self) {
        self.draw_format_info((1 << FORMAT_INFO_BIT_LEN) - 1);
    }

    // Set bits are dark, same polarity as data bits before masking
    fn draw_format_info(&mut self, format_info: u16) {
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_MAIN);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_SIDE);
        self.set(DARK_MODULE.0, DARK_MODULE.1, Module::Format(Color::Dark));
    }

    fn draw_number(&mut self, number: u16, bit_len: usize, coords: &[(i16, i16)]) {
        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            self.set(r, c, Module::Format(Color::from(number & mask != 0)));
            mask >>= 1;
        }
    }

    // Reads back the main copy of format info
    pub fn format_info(&self) -> u16 {
        FORMAT_INFO_COORDS_QR_MAIN
            .iter()
            .fold(0, |n, &(r, c)| (n << 1) | (*self.get(r, c) == Color::Dark) as u16)
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.reserve_format_area();
    }

    pub fn count_reserved_modules(&self) -> usize {
        self.grid.iter().filter(|m| matches!(m, Module::Func(_) | Module::Format(_))).count()
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_encoding_region(
        &mut self,
        payload: &BitStream,
        mask: MaskPattern,
    ) -> QRResult<()> {
        self.draw_payload(EncRegionIter::new(), payload, mask)?;
        self.mask = Some(mask);
        self.draw_format_info(format_info(mask));

        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if matches!(self.get(r, c), Module::Empty) {
                    return Err(PlacementViolation::UnsetModule { r, c }.into());
                }
            }
        }
        Ok(())
    }

    // Places payload bits along the data path, masking each bit as it is written.
    // Modules beyond the payload get zero bits
    fn draw_payload(
        &mut self,
        path: impl Iterator<Item = (i16, i16)>,
        payload: &BitStream,
        mask: MaskPattern,
    ) -> QRResult<()> {
        let mask_fn = mask.mask_function();
        let mut bits = payload.iter();
        let mut placed = 0;
        let mut last = None;

        for (r, c) in path {
            if !matches!(self.get(r, c), Module::Empty) {
                return Err(PlacementViolation::ReservedCollision { r, c }.into());
            }
            let bit = match bits.next() {
                Some(b) => {
                    placed += 1;
                    b
                }
                None => false,
            };
            self.set(r, c, Module::Data(Color::from(bit ^ mask_fn(r, c))));
            last = Some((r, c));
        }

        if placed < payload.len() {
            return Err(PlacementViolation::DataOverflow { placed, total: payload.len() }.into());
        }
        if last != Some(TERMINAL_MODULE) {
            return Err(PlacementViolation::UnexpectedTerminal { found: last }.into());
        }
        Ok(())
    }
}
