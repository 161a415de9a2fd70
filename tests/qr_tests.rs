use qrstamp::QR;

// Decodes the rendered symbol with an independent reader
fn scan(qr: &QR) -> (rqrr::MetaData, String) {
    let img = qr.to_image(4);
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "Expected exactly one symbol");
    grids[0].decode().expect("Failed to read QR")
}

#[cfg(test)]
mod qr_proptests {
    use prop::string::string_regex;
    use proptest::prelude::*;

    use qrstamp::*;

    use super::scan;

    proptest! {
        #[test]
        fn proptest_alphanumeric(data in string_regex("[0-9A-Z]{1,10}").unwrap()) {
            let qr = QRBuilder::new(&data).build().unwrap();
            let (meta, decoded) = scan(&qr);
            prop_assert_eq!(meta.version.0, 1);
            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_codewords_fill_capacity(data in string_regex("[0-9A-Z]{0,10}").unwrap()) {
            let codewords = encode_alphanumeric(&data, metadata::DATA_CODEWORDS).unwrap();
            prop_assert_eq!(codewords.len(), metadata::DATA_CODEWORDS);
            prop_assert_eq!(codewords[0] >> 4, 0b0010);
        }

        #[test]
        fn proptest_unsupported_rejected(prefix in "[0-9A-Z]{0,4}", ch in "[a-z $%*+./:-]") {
            let data = format!("{prefix}{ch}");
            let res = QRBuilder::new(&data).build();
            let is_unsupported =
                matches!(res, Err(QRError::UnsupportedCharacter { pos, .. }) if pos == prefix.len());
            prop_assert!(is_unsupported);
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use rayon::prelude::*;
    use test_case::test_case;

    use qrstamp::{
        encode_alphanumeric, metadata::DATA_CODEWORDS, MaskPattern, QRBuilder, QRError,
        ReedSolomonEncoder,
    };

    use super::scan;

    #[test_case("ABCDE123"; "test_qr_1")]
    #[test_case("A"; "test_qr_2")]
    #[test_case("42"; "test_qr_3")]
    #[test_case("HELLO"; "test_qr_4")]
    #[test_case("0123456789"; "test_qr_5")]
    #[test_case("QRCODE2024"; "test_qr_6")]
    #[test_case("ZZZZZZZZZ"; "test_qr_7")]
    fn test_qr(data: &str) {
        let qr = QRBuilder::new(data).build().unwrap();
        let (meta, decoded) = scan(&qr);
        assert_eq!(meta.version.0, 1);
        assert_eq!(meta.mask, 3);
        assert_eq!(decoded, data);
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(4)]
    #[test_case(5)]
    #[test_case(6)]
    #[test_case(7)]
    fn test_qr_with_mask(mask: u8) {
        let qr = QRBuilder::new("MASK7").mask(MaskPattern::new(mask)).build().unwrap();
        let (meta, decoded) = scan(&qr);
        assert_eq!(meta.mask, mask as u16);
        assert_eq!(decoded, "MASK7");
    }

    #[test]
    fn test_qr_auto_mask() {
        let qr = QRBuilder::new("ABCDE123").auto_mask().build().unwrap();
        let (meta, decoded) = scan(&qr);
        assert_eq!(Some(meta.mask as u8), qr.mask().map(|m| *m));
        assert_eq!(decoded, "ABCDE123");
    }

    #[test]
    fn test_abcde123_codewords() {
        let data = encode_alphanumeric("ABCDE123", DATA_CODEWORDS).unwrap();
        assert_eq!(data, [0x20, 0x41, 0xcd, 0x45, 0x29, 0xdc, 0x2e, 0x80, 0xec]);

        let rs = ReedSolomonEncoder::new(17);
        let runs = (0..5).map(|_| rs.encode(&data)).collect::<Vec<_>>();
        assert!(runs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(
            runs[0],
            [
                0x2a, 0x9f, 0x4a, 0xdd, 0xf4, 0xa9, 0xef, 0x96, 0x8a, 0x46, 0xed, 0x55, 0xe0, 0x60,
                0x4a, 0xdb, 0x3d
            ]
        );
    }

    #[test]
    fn test_matrix_has_no_unset_modules() {
        let qr = QRBuilder::new("ABCDE123").build().unwrap();
        assert!(qr.grid().iter().all(|m| !matches!(m, qrstamp::builder::Module::Empty)));
        assert_eq!(qr.to_bool_matrix().len(), 21);
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let inputs = (0..64).map(|i| format!("BATCH{i}")).collect::<Vec<_>>();
        let sequential = inputs
            .iter()
            .map(|d| QRBuilder::new(d).build().unwrap().to_bool_matrix())
            .collect::<Vec<_>>();
        let parallel = inputs
            .par_iter()
            .map(|d| QRBuilder::new(d).build().unwrap().to_bool_matrix())
            .collect::<Vec<_>>();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_data_overflow() {
        let res = QRBuilder::new("ABCDEFGHIJK").build();
        assert_eq!(res.err(), Some(QRError::CapacityExceeded { required: 74, capacity: 72 }));
    }
}
