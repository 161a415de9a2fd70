use super::metadata::PRIMITIVE;
use super::utils::{QRError, QRResult};

// Galois field
//------------------------------------------------------------------------------

/// Exponent & logarithm tables of GF(256) under a primitive polynomial, with 2 as generator.
///
/// The exponent table is doubled so that adding two logarithms never needs a modulo.
/// Tables are filled once by [`GaloisField::build`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    exp: [u8; 512],
    log: [u8; 256],
}

/// Field used by QR codes, built at compile time and shared read-only.
pub static GF256: GaloisField = GaloisField::build(PRIMITIVE);

impl GaloisField {
    pub const fn build(primitive: u16) -> Self {
        assert!(primitive >> 8 == 1, "Primitive polynomial must have degree 8");

        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];

        // Repeated multiplication by 2, reducing whenever bit 8 is set
        let mut x: u16 = 1;
        let mut i = 0;
        while i < 255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= primitive;
            }
            i += 1;
        }
        while i < 512 {
            exp[i] = exp[i - 255];
            i += 1;
        }

        Self { exp, log }
    }

    // Generator raised to n
    pub fn exp(&self, n: usize) -> u8 {
        self.exp[n % 255]
    }

    pub fn log(&self, a: u8) -> QRResult<u8> {
        if a == 0 {
            return Err(QRError::FieldDomain);
        }
        Ok(self.log[a as usize])
    }

    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        debug_assert!(log_sum < 510, "Log sum has crossed 510: {log_sum}");
        self.exp[log_sum]
    }

    pub fn power(&self, a: u8, n: usize) -> u8 {
        match (a, n) {
            (_, 0) => 1,
            (0, _) => 0,
            _ => self.exp[(self.log[a as usize] as usize * (n % 255)) % 255],
        }
    }

    pub fn inverse(&self, a: u8) -> QRResult<u8> {
        let log_a = self.log(a)? as usize;
        Ok(self.exp[255 - log_a])
    }

    // Number of distinct nonzero elements reached by the generator
    pub fn order(&self) -> usize {
        let mut seen = [false; 256];
        self.exp[..255].iter().for_each(|&e| seen[e as usize] = true);
        seen.iter().filter(|&&s| s).count()
    }
}
