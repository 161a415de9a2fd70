use super::bitstream::BitStream;
use super::metadata::{CHAR_CNT_BITS, MODE_BITS, PADDING_CODEWORDS, TERMINATOR_BITS};
use super::utils::{QRError, QRResult};

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Alphanumeric = 0b0010,
    Terminator = 0b0000,
}

impl Mode {
    // Digits map to 0-9, uppercase letters to 10-35
    #[inline]
    pub fn alphanumeric_digit(ch: char) -> Option<u16> {
        match ch {
            '0'..='9' => Some(ch as u16 - '0' as u16),
            'A'..='Z' => Some(ch as u16 - 'A' as u16 + 10),
            _ => None,
        }
    }

    pub fn encode_chunk(chunk: &[u16]) -> u16 {
        debug_assert!(
            (1..=2).contains(&chunk.len()),
            "Invalid alphanumeric chunk length: {}",
            chunk.len()
        );
        chunk.iter().fold(0, |n, d| n * 45 + d)
    }

    // 11 bits per pair, 6 bits for a trailing character
    pub fn encoded_len(char_cnt: usize) -> usize {
        (char_cnt >> 1) * 11 + (char_cnt & 1) * 6
    }
}

// Encoder
//------------------------------------------------------------------------------

/// Encodes `text` in alphanumeric mode and pads it to exactly `capacity_codewords` bytes.
pub fn encode_alphanumeric(text: &str, capacity_codewords: usize) -> QRResult<Vec<u8>> {
    encode_alphanumeric_bits(text, capacity_codewords).map(BitStream::into_bytes)
}

/// Same as [`encode_alphanumeric`] but keeps the padded bit stream.
pub fn encode_alphanumeric_bits(text: &str, capacity_codewords: usize) -> QRResult<BitStream> {
    let digits = alphanumeric_digits(text)?;

    let max_char_cnt = (1 << CHAR_CNT_BITS) - 1;
    if digits.len() > max_char_cnt {
        return Err(QRError::CharCountOverflow { count: digits.len(), max: max_char_cnt });
    }

    let bit_capacity = capacity_codewords << 3;
    let required = segment_bit_len(digits.len());
    if required > bit_capacity {
        return Err(QRError::CapacityExceeded { required, capacity: bit_capacity });
    }

    let mut bs = BitStream::new(bit_capacity);
    writer::push_segment(&digits, &mut bs);
    writer::push_terminator(&mut bs);
    writer::pad_remaining_capacity(&mut bs);
    Ok(bs)
}

// Header and payload length in bits, excluding terminator
pub fn segment_bit_len(char_cnt: usize) -> usize {
    MODE_BITS + CHAR_CNT_BITS + Mode::encoded_len(char_cnt)
}

fn alphanumeric_digits(text: &str) -> QRResult<Vec<u16>> {
    text.chars()
        .enumerate()
        .map(|(pos, ch)| {
            Mode::alphanumeric_digit(ch).ok_or(QRError::UnsupportedCharacter { ch, pos })
        })
        .collect()
}

// Writer for encoded data
//------------------------------------------------------------------------------

mod writer {
    use super::{BitStream, Mode, CHAR_CNT_BITS, MODE_BITS, PADDING_CODEWORDS, TERMINATOR_BITS};

    pub fn push_segment(digits: &[u16], out: &mut BitStream) {
        push_header(digits.len(), out);
        for chunk in digits.chunks(2) {
            let len = if chunk.len() == 2 { 11 } else { 6 };
            out.push_bits(Mode::encode_chunk(chunk), len);
        }
    }

    fn push_header(char_cnt: usize, out: &mut BitStream) {
        out.push_bits(Mode::Alphanumeric as u16, MODE_BITS);
        debug_assert!(
            char_cnt < (1 << CHAR_CNT_BITS),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {CHAR_CNT_BITS}"
        );
        out.push_bits(char_cnt as u16, CHAR_CNT_BITS);
    }

    // Terminator is truncated when fewer than 4 bits remain
    pub fn push_terminator(out: &mut BitStream) {
        let len = TERMINATOR_BITS.min(out.remaining());
        out.push_bits(Mode::Terminator as u16, len);
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            out.push_bits(0, 8 - offset);
        }

        let remaining_bytes = out.remaining() >> 3;
        for &pad in PADDING_CODEWORDS.iter().cycle().take(remaining_bytes) {
            out.push_bits(pad as u16, 8);
        }
    }
}
