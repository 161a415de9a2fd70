use super::metadata::{TIMING_LINE, WIDTH};

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Walks the data modules in zigzag order: two column strips starting at the bottom right,
/// right column before left column on each row, alternating upward and downward. The strip
/// that would cover the vertical timing column shifts one column left. Modules reserved for
/// function patterns & format info are skipped.
#[derive(Debug, Clone)]
pub struct EncRegionIter {
    r: i16,
    // Right column of the current strip
    c: i16,
    // Next module is in the left column of the strip
    left: bool,
    dir: Direction,
    w: i16,
}

impl EncRegionIter {
    pub const fn new() -> Self {
        let w = WIDTH as i16;
        Self { r: w - 1, c: w - 1, left: false, dir: Direction::Up, w }
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    // Checks if the module is reserved for functional pattern or format info
    pub fn is_reserved(&self, r: i16, c: i16) -> bool {
        let w = self.w;

        // Top left finder & format info
        if r < 9 && c < 9 {
            return true;
        }

        // Top right finder & format info
        if r < 9 && c >= w - 8 {
            return true;
        }

        // Bottom left finder, format info & dark module
        if r >= w - 8 && c < 9 {
            return true;
        }

        // Timing patterns
        r == TIMING_LINE || c == TIMING_LINE
    }

    fn advance(&mut self) {
        if !self.left {
            self.left = true;
            return;
        }
        self.left = false;

        match self.dir {
            Direction::Up if self.r > 0 => self.r -= 1,
            Direction::Down if self.r < self.w - 1 => self.r += 1,
            // Strip exhausted, row stays at the edge
            _ => {
                self.c -= 2;
                if self.c == TIMING_LINE {
                    self.c -= 1;
                }
                self.dir = self.dir.reverse();
            }
        }
    }
}

impl Default for EncRegionIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        while self.c > 0 {
            let pos = (self.r, if self.left { self.c - 1 } else { self.c });
            self.advance();
            if !self.is_reserved(pos.0, pos.1) {
                return Some(pos);
            }
        }
        None
    }
}
