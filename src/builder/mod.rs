mod qr;

pub use qr::{Module, QR};

use crate::common::{
    codec::encode_alphanumeric,
    ec::ReedSolomonEncoder,
    mask::{compute_total_penalty, MaskPattern},
    metadata::{DATA_CODEWORDS, EC_CODEWORDS, TOTAL_CODEWORDS},
    utils::{report, QRError, QRResult},
    BitStream,
};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum MaskSelection {
    Fixed(MaskPattern),
    // Lowest penalty score over all 8 patterns
    Best,
}

/// Builds a version 1, level H, alphanumeric QR symbol.
///
/// ```rust
/// use qrstamp::QRBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let qr = QRBuilder::new("ABCDE123").build()?;
/// assert_eq!(qr.width(), 21);
/// # Ok(())
/// # }
/// ```
pub struct QRBuilder<'a> {
    data: &'a str,
    mask: MaskSelection,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, mask: MaskSelection::Fixed(MaskPattern::default()) }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = MaskSelection::Fixed(mask);
        self
    }

    pub fn fixed_mask(&mut self) -> &mut Self {
        self.mask = MaskSelection::Fixed(MaskPattern::default());
        self
    }

    pub fn auto_mask(&mut self) -> &mut Self {
        self.mask = MaskSelection::Best;
        self
    }

    pub fn metadata(&self) -> String {
        match self.mask {
            MaskSelection::Fixed(m) => {
                format!("{{ Version: 1, Ec level: H, Mode: Alphanumeric, Mask: {} }}", *m)
            }
            MaskSelection::Best => {
                "{ Version: 1, Ec level: H, Mode: Alphanumeric, Mask: Best }".to_string()
            }
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        report!("\nGenerating QR {}...", self.metadata());
        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }

        report!("Encoding data...");
        let data_codewords = encode_alphanumeric(self.data, DATA_CODEWORDS)?;

        report!("Computing error correction codewords...");
        let ecc = ReedSolomonEncoder::new(EC_CODEWORDS).encode(&data_codewords);

        let mut payload = BitStream::new(TOTAL_CODEWORDS << 3);
        payload.extend(&data_codewords);
        payload.extend(&ecc);

        report!("Drawing functional patterns...");
        let mut qr = QR::new();
        qr.draw_all_function_patterns();

        let mask = match self.mask {
            MaskSelection::Fixed(m) => {
                report!("Drawing encoding region with mask {}...", *m);
                qr.draw_encoding_region(&payload, m)?;
                m
            }
            MaskSelection::Best => {
                report!("Finding & applying best mask...");
                apply_best_mask(&mut qr, &payload)?
            }
        };

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        report!("QR generated with mask {}", *mask);
        report!(
            "Dark Cells: {}, Light Cells: {}, Balance: {}%",
            dark_modules,
            total_modules - dark_modules,
            dark_modules * 100 / total_modules
        );

        Ok(qr)
    }
}

// Draws the encoding region once per mask on copies of the function pattern stage and
// keeps the copy with the lowest penalty
fn apply_best_mask(qr: &mut QR, payload: &BitStream) -> QRResult<MaskPattern> {
    let mut best: Option<(u32, QR)> = None;
    for m in MaskPattern::all() {
        let mut candidate = qr.clone();
        candidate.draw_encoding_region(payload, m)?;
        let score = compute_total_penalty(&candidate);
        report!("Mask {} penalty {score}", *m);
        if best.as_ref().map_or(true, |(s, _)| score < *s) {
            best = Some((score, candidate));
        }
    }

    let (_, best_qr) = best.expect("Should evaluate atleast 1 mask");
    *qr = best_qr;
    Ok(qr.mask().unwrap_or_default())
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::QRBuilder;
    use crate::common::{
        mask::{compute_total_penalty, format_info, MaskPattern},
        utils::QRError,
    };

    #[test]
    fn test_builder_abcde123() {
        let qr = QRBuilder::new("ABCDE123").build().unwrap();
        assert_eq!(qr.mask(), Some(MaskPattern::DIAGONAL));
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFMddDDFfffffff\n\
             fFFFFFfFMDDDDFfFFFFFf\n\
             fFfffFfFMDDdDFfFfffFf\n\
             fFfffFfFMddDDFfFfffFf\n\
             fFfffFfFmdDDdFfFfffFf\n\
             fFFFFFfFMDdddFfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFFmdDddFFFFFFFF\n\
             MMmmMMfmmDDddmmMmMMMM\n\
             dDdDdDFDDDdddDDdDdddD\n\
             ddddDdfDdDdddDDdddDdD\n\
             dDdDddFdddDDdddDDdDdD\n\
             DDdDDdfdDDDDDDdDddddd\n\
             FFFFFFFFmdDdDDDDDdDdd\n\
             fffffffFmdddDDDDdDddD\n\
             fFFFFFfFMDDdDdddDDDDD\n\
             fFfffFfFMdDDddDDdDDdd\n\
             fFfffFfFmdDdDDDDDdddD\n\
             fFfffFfFmdddDDDDdddDD\n\
             fFFFFFfFMDDDDDDDdDdDD\n\
             fffffffFMDdddddDdDDdD\n"
        );
    }

    #[test]
    fn test_builder_deterministic() {
        let a = QRBuilder::new("ABCDE123").build().unwrap();
        let b = QRBuilder::new("ABCDE123").build().unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_builder_empty_data() {
        assert!(matches!(QRBuilder::new("").build(), Err(QRError::EmptyData)));
    }

    #[test]
    fn test_builder_unsupported_character() {
        let res = QRBuilder::new("ABC?").build();
        assert!(matches!(res, Err(QRError::UnsupportedCharacter { ch: '?', pos: 3 })));
    }

    #[test]
    fn test_builder_data_overflow() {
        let res = QRBuilder::new("0123456789A").build();
        assert!(matches!(res, Err(QRError::CapacityExceeded { required: 74, capacity: 72 })));
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(3)]
    #[test_case(4)]
    #[test_case(5)]
    #[test_case(6)]
    #[test_case(7)]
    fn test_builder_mask_writes_format_info(mask: u8) {
        let mask = MaskPattern::new(mask);
        let qr = QRBuilder::new("HELLO123").mask(mask).build().unwrap();
        assert_eq!(qr.mask(), Some(mask));
        assert_eq!(qr.format_info(), format_info(mask));
    }

    #[test]
    fn test_auto_mask_has_lowest_penalty() {
        let best = QRBuilder::new("ABCDE123").auto_mask().build().unwrap();
        let best_score = compute_total_penalty(&best);
        for m in MaskPattern::all() {
            let qr = QRBuilder::new("ABCDE123").mask(m).build().unwrap();
            assert!(best_score <= compute_total_penalty(&qr), "Mask {m:?} beats best mask");
        }
    }
}
