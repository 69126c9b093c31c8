use super::*;
use std::io::Cursor;

/// Build a minimal iNES header.
fn make_ines_header(prg_banks: u8, chr_banks: u8, flags6: u8, flags7: u8) -> Vec<u8> {
    let mut h = vec![0u8; 16];
    h[0..4].copy_from_slice(&INES_MAGIC);
    h[4] = prg_banks;
    h[5] = chr_banks;
    h[6] = flags6;
    h[7] = flags7;
    h
}

/// flags6/flags7 pair encoding `mapper`.
fn mapper_flags(mapper: u8) -> (u8, u8) {
    ((mapper & 0x0F) << 4, mapper & 0xF0)
}

fn plan_for(data: Vec<u8>) -> Option<HashPlan> {
    let size = data.len() as u64;
    let mut cursor = Cursor::new(data);
    NesHasher::new().plan(&mut cursor, size).unwrap()
}

#[test]
fn test_parse_basic_header() {
    let header = NesHeader::parse(&make_ines_header(2, 1, 0x00, 0x00)).unwrap();
    assert_eq!(header.prg_banks, 2);
    assert_eq!(header.chr_banks, 1);
    assert_eq!(header.mapper(), 0);
    assert!(!header.has_trainer());
    assert_eq!(header.data_offset(), 16);
}

#[test]
fn test_mapper_combines_high_nibbles() {
    // Mapper 4 (MMC3): low nibble in flags6, battery + vertical bits ignored
    let header = NesHeader::parse(&make_ines_header(16, 16, 0x43, 0x00)).unwrap();
    assert_eq!(header.mapper(), 4);

    // Low nibble of flags7 must not leak into the mapper number
    let header = NesHeader::parse(&make_ines_header(1, 0, 0x50, 0xC8)).unwrap();
    assert_eq!(header.mapper(), 0xC5);
}

#[test]
fn test_rom_size_rounds_up_for_ordinary_mapper() {
    let (f6, f7) = mapper_flags(1);
    let header = NesHeader::parse(&make_ines_header(3, 0, f6, f7)).unwrap();
    assert!(header.rounds_prg_size());
    assert_eq!(header.hashed_banks(), 4);
    assert_eq!(header.hash_window(), 0x4000 * 4);
}

#[test]
fn test_rom_size_not_rounded_for_exception_mappers() {
    for mapper in [53u8, 198, 228] {
        let (f6, f7) = mapper_flags(mapper);
        let header = NesHeader::parse(&make_ines_header(3, 0, f6, f7)).unwrap();
        assert_eq!(header.mapper(), mapper);
        assert!(!header.rounds_prg_size(), "mapper {mapper}");
        assert_eq!(header.hash_window(), 0x4000 * 3, "mapper {mapper}");
    }
}

#[test]
fn test_neighbouring_mappers_still_round() {
    for mapper in [52u8, 54, 197, 199, 227, 229] {
        let (f6, f7) = mapper_flags(mapper);
        let header = NesHeader::parse(&make_ines_header(3, 0, f6, f7)).unwrap();
        assert_eq!(header.hash_window(), 0x4000 * 4, "mapper {mapper}");
    }
}

#[test]
fn test_power_of_two_sizes_unchanged() {
    for banks in [1u8, 2, 4, 8, 16, 32, 64, 128] {
        let header = NesHeader::parse(&make_ines_header(banks, 0, 0, 0)).unwrap();
        assert_eq!(header.hashed_banks(), u64::from(banks));
    }
    let header = NesHeader::parse(&make_ines_header(255, 0, 0, 0)).unwrap();
    assert_eq!(header.hashed_banks(), 256);
}

#[test]
fn test_zero_banks_treated_as_256() {
    let header = NesHeader::parse(&make_ines_header(0, 0, 0, 0)).unwrap();
    assert_eq!(header.hashed_banks(), 256);
    assert_eq!(header.hash_window(), 0x4000 * 256);
}

#[test]
fn test_zero_banks_on_unrounded_mapper_has_no_plan() {
    let (f6, f7) = mapper_flags(53);
    let header = NesHeader::parse(&make_ines_header(0, 0, f6, f7)).unwrap();
    assert_eq!(header.hash_window(), 0);
    assert_eq!(header.hash_plan(), None);
}

#[test]
fn test_trainer_skips_one_header_length() {
    let header = NesHeader::parse(&make_ines_header(1, 1, 0x04, 0x00)).unwrap();
    assert!(header.has_trainer());
    assert_eq!(header.data_offset(), 32);
}

#[test]
fn test_plan_window_and_fill() {
    let mut data = make_ines_header(2, 0, 0, 0);
    data.extend(vec![0u8; 100]);
    let plan = plan_for(data).unwrap();
    assert_eq!(plan.range, ByteRange::new(16, 0x8000));
    assert_eq!(plan.padding, Some(PaddingSpec::new(0xFF, 0x8000)));
}

#[test]
fn test_bad_magic_rejected() {
    let mut data = make_ines_header(2, 0, 0, 0);
    data[3] = 0x00;
    data.extend(vec![0u8; 0x8000]);
    assert_eq!(plan_for(data.clone()), None);

    data[0..4].copy_from_slice(b"UNIF");
    assert_eq!(plan_for(data), None);
}

#[test]
fn test_parse_reports_invalid_magic() {
    let err = NesHeader::parse(&[0xDE, 0xAD, 0xBE, 0xEF, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        .unwrap_err();
    assert!(matches!(err, HashError::InvalidFormat(_)));
}

#[test]
fn test_short_file_rejected() {
    let data = INES_MAGIC.to_vec();
    assert_eq!(plan_for(data.clone()), None);
    assert!(matches!(
        NesHeader::parse(&data),
        Err(HashError::TooSmall {
            expected: 16,
            actual: 4
        })
    ));
    assert_eq!(plan_for(Vec::new()), None);
}

#[test]
fn test_hasher_metadata() {
    let hasher = NesHasher::new();
    assert_eq!(hasher.label(), "NES");
    assert_eq!(hasher.platform(), Some(Platform::Nes));
    assert!(hasher.file_extensions().is_empty());
}

/// Reader whose every read fails.
struct BrokenReader;

impl std::io::Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("device gone"))
    }
}

impl std::io::Seek for BrokenReader {
    fn seek(&mut self, _pos: SeekFrom) -> std::io::Result<u64> {
        Ok(0)
    }
}

#[test]
fn test_header_read_error_is_propagated() {
    let err = NesHasher::new().plan(&mut BrokenReader, 0x8010).unwrap_err();
    match err {
        HashError::Io(e) => assert_eq!(e.to_string(), "device gone"),
        other => panic!("expected Io error, got {other:?}"),
    }
}
