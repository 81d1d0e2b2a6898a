//! Integration tests for QR code encoding regression testing
//!
//! These tests read finished symbols back the way a scanner would (format
//! info, unmasking, zig-zag traversal) and check the recovered codewords,
//! version, EC level and mask against what was requested.

use qrweave::encoder::format::FormatInfo;
use qrweave::encoder::layout::LayoutDrawer;
use qrweave::encoder::placement::PayloadPlacer;
use qrweave::encoder::qr_encoder::QrEncoder;
use qrweave::encoder::version::VersionInfo;
use qrweave::models::ModuleMatrix;
use qrweave::{
    ECLevel, EncodeError, EncodeOptions, MaskPattern, Mode, QrCode, Version, encode, encode_batch,
    encode_bytes, encode_with_options,
};

/// Unmasked data bits of a finished symbol, in placement order
fn read_data_bits(qr: &QrCode) -> Vec<bool> {
    let mut layout = ModuleMatrix::square(qr.width());
    LayoutDrawer::draw(qr.version(), &mut layout).unwrap();
    let info = FormatInfo::read(qr.modules()).expect("format info should be readable");
    PayloadPlacer::zigzag_order(&layout)
        .into_iter()
        .map(|(x, y)| qr.get_masked_pixel(x, y) ^ info.mask_pattern.is_masked(y, x))
        .collect()
}

fn pack(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .filter(|c| c.len() == 8)
        .map(|c| c.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
        .collect()
}

#[test]
fn test_hello_world_version_1_m() {
    let qr = encode("HELLO WORLD", ECLevel::M).unwrap();
    assert_eq!(qr.version(), Version::MIN);
    assert_eq!(qr.ec_level(), ECLevel::M);
    assert_eq!((qr.width(), qr.height()), (21, 21));

    let codewords = pack(&read_data_bits(&qr));
    assert_eq!(
        codewords,
        vec![
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17, // data
            196, 35, 39, 119, 235, 215, 231, 226, 93, 23, // EC
        ]
    );
}

#[test]
fn test_symbol_bits_match_pipeline_for_multi_block_symbols() {
    let payloads = [
        ("https://example.com/a/somewhat/longer/path?with=query&and=more", ECLevel::H),
        ("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789", ECLevel::Q),
        ("31415926535897932384626433832795028841971693993751058209749445923", ECLevel::M),
    ];
    for (payload, ec) in payloads {
        let qr = encode(payload, ec).unwrap();
        let expected =
            QrEncoder::codeword_bits(payload.as_bytes(), qr.mode(), qr.version(), ec).unwrap();
        assert_eq!(read_data_bits(&qr), expected, "{}", payload);
    }
}

#[test]
fn test_format_info_round_trip() {
    for ec in ECLevel::ALL {
        for mask in MaskPattern::ALL {
            let options = EncodeOptions::new(ec).with_mask(mask);
            let qr = encode_with_options("format check", &options).unwrap();
            assert_eq!(qr.mask(), mask);
            let info = FormatInfo::read(qr.modules()).unwrap();
            assert_eq!((info.ec_level, info.mask_pattern), (ec, mask));
        }
    }
}

#[test]
fn test_version_info_written_from_version_7() {
    for n in [6u8, 7, 15, 40] {
        let options = EncodeOptions::new(ECLevel::L).with_min_version(Version::new(n).unwrap());
        let qr = encode_with_options("v", &options).unwrap();
        assert_eq!(qr.version().number(), n);
        let expected = (n >= 7).then_some(n);
        assert_eq!(VersionInfo::read(qr.modules()), expected);
    }
}

#[test]
fn test_dimensions_follow_version() {
    for n in [1u8, 2, 10, 27, 35, 36, 37, 39, 40] {
        let options = EncodeOptions::new(ECLevel::M).with_min_version(Version::new(n).unwrap());
        let qr = encode_with_options("12345", &options).unwrap();
        assert_eq!(qr.width(), 4 * n as usize + 17);
        assert_eq!(qr.height(), qr.width());
    }
}

#[test]
fn test_finder_patterns_are_intact() {
    let qr = encode("finder", ECLevel::Q).unwrap();
    let size = qr.width();
    for (ox, oy) in [(0, 0), (size - 7, 0), (0, size - 7)] {
        for d in 0..7 {
            assert!(qr.get_masked_pixel(ox + d, oy));
            assert!(qr.get_masked_pixel(ox, oy + d));
        }
        assert!(!qr.get_masked_pixel(ox + 1, oy + 1));
        assert!(qr.get_masked_pixel(ox + 3, oy + 3));
    }
    // Dark module
    assert!(qr.get_masked_pixel(8, size - 8));
}

#[test]
fn test_smallest_version_is_chosen() {
    // 1-L holds 17 bytes, 18 needs version 2
    let seventeen = "a".repeat(17);
    let eighteen = "a".repeat(18);
    assert_eq!(encode(&seventeen, ECLevel::L).unwrap().version().number(), 1);
    assert_eq!(encode(&eighteen, ECLevel::L).unwrap().version().number(), 2);
}

#[test]
fn test_payload_too_large() {
    let payload = "a".repeat(2954);
    assert_eq!(
        encode(&payload, ECLevel::L),
        Err(EncodeError::PayloadTooLarge {
            mode: Mode::Byte,
            ec_level: ECLevel::L,
            length: 2954,
        })
    );
    assert_eq!(encode(&payload[..2953], ECLevel::L).unwrap().version().number(), 40);

    let digits = "7".repeat(7090);
    assert!(matches!(
        encode(&digits, ECLevel::L),
        Err(EncodeError::PayloadTooLarge {
            mode: Mode::Numeric,
            ..
        })
    ));
}

#[test]
fn test_boost_ec_keeps_version() {
    let options = EncodeOptions::new(ECLevel::L).with_boost_ec(true);
    let qr = encode_with_options("HELLO WORLD", &options).unwrap();
    assert_eq!(qr.version(), Version::MIN);
    assert_eq!(qr.ec_level(), ECLevel::Q);
    assert_eq!(FormatInfo::read(qr.modules()).unwrap().ec_level, ECLevel::Q);
}

#[test]
fn test_binary_payload() {
    let data: Vec<u8> = (0..=255u8).collect();
    let qr = encode_bytes(&data, &EncodeOptions::new(ECLevel::M)).unwrap();
    assert_eq!(qr.mode(), Mode::Byte);
    let bits = read_data_bits(&qr);
    let expected = QrEncoder::codeword_bits(&data, Mode::Byte, qr.version(), ECLevel::M).unwrap();
    assert_eq!(bits, expected);
}

#[test]
fn test_encoding_is_deterministic() {
    let a = encode("same input, same symbol", ECLevel::H).unwrap();
    let b = encode("same input, same symbol", ECLevel::H).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_batch_preserves_order_and_errors() {
    let too_big = "x".repeat(3000);
    let payloads = ["first", too_big.as_str(), "THIRD"];
    let results = encode_batch(&payloads, ECLevel::L);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().mode(), Mode::Byte);
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().mode(), Mode::Alphanumeric);
}
