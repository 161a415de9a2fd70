use super::galois::GF256;

// Polynomial arithmetic over GF(256), coefficients ordered highest degree first
//------------------------------------------------------------------------------

pub fn poly_mul(p: &[u8], q: &[u8]) -> Vec<u8> {
    debug_assert!(!p.is_empty() && !q.is_empty(), "Empty polynomial");

    let mut res = vec![0; p.len() + q.len() - 1];
    for (j, &qj) in q.iter().enumerate() {
        for (i, &pi) in p.iter().enumerate() {
            res[i + j] ^= GF256.multiply(pi, qj);
        }
    }
    res
}

// Horner's rule
pub fn poly_eval(poly: &[u8], x: u8) -> u8 {
    poly.iter().fold(0, |acc, &coeff| GF256.multiply(acc, x) ^ coeff)
}

// Remainder of dividing by a monic divisor. Result has exactly deg(divisor) coefficients
pub fn poly_rem(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    debug_assert!(divisor.first() == Some(&1), "Divisor must be monic");

    let rem_len = divisor.len() - 1;
    if dividend.len() <= rem_len {
        let mut res = vec![0; rem_len - dividend.len()];
        res.extend_from_slice(dividend);
        return res;
    }

    let steps = dividend.len() - rem_len;
    let mut res = dividend.to_vec();
    for i in 0..steps {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }
        for (u, &v) in res[i + 1..].iter_mut().zip(divisor[1..].iter()) {
            *u ^= GF256.multiply(v, lead_coeff);
        }
    }
    res.split_off(steps)
}

// Reed-Solomon encoder
//------------------------------------------------------------------------------

/// Computes error correction codewords as the remainder of `data(x) * x^n` divided by the
/// generator polynomial `g(x) = (x - 2^0)(x - 2^1)...(x - 2^(n-1))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomonEncoder {
    gen_poly: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(ecc_count: usize) -> Self {
        Self { gen_poly: generator_polynomial(ecc_count) }
    }

    pub fn ecc_count(&self) -> usize {
        self.gen_poly.len() - 1
    }

    pub fn generator(&self) -> &[u8] {
        &self.gen_poly
    }

    // Long division of the data polynomial by the generator. The working buffer holds the
    // data followed by ecc_count zeros, so every write stays in bounds
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let len = data.len();
        let ecc_count = self.ecc_count();

        let mut res = data.to_vec();
        res.resize(len + ecc_count, 0);

        for i in 0..len {
            let lead_coeff = res[i];
            if lead_coeff == 0 {
                continue;
            }
            for (u, &v) in res[i + 1..].iter_mut().zip(self.gen_poly[1..].iter()) {
                *u ^= GF256.multiply(v, lead_coeff);
            }
        }

        res.split_off(len)
    }
}

pub fn generator_polynomial(ecc_count: usize) -> Vec<u8> {
    (0..ecc_count).fold(vec![1], |gen, i| poly_mul(&gen, &[1, GF256.exp(i)]))
}

// ECC: Error Correction Codeword generator
pub fn ecc(data: &[u8], ecc_count: usize) -> Vec<u8> {
    ReedSolomonEncoder::new(ecc_count).encode(data)
}
