use crc8_smbus::crc::{CHECK, INITIAL, RESIDUE};
use crc8_smbus::{Error, check, checksum, update, verify};

#[test]
fn catalogue_check_value() -> anyhow::Result<()> {
    let crc = checksum(b"123456789");
    assert_eq!(crc, CHECK);
    verify(b"123456789", crc)?;
    Ok(())
}

#[test]
fn known_vectors() {
    let vectors: &[(u8, &[u8], u8)] = &[
        (0x00, b"", 0x00),
        (0x00, &[0x00], 0x00),
        (0x00, &[0xFF], 0xF3),
        (0x00, &[0x01], 0x07),
        (0x00, &[0xBE, 0xEF], 0x1A),
        (0x00, b"hello world", 0xA8),
        (0xFF, b"123456789", 0xFB),
        (0xAB, &[0x00], 0x58),
    ];
    for &(seed, bytes, expected) in vectors {
        assert_eq!(update(seed, bytes), expected, "seed {seed:#04x}, {bytes:02x?}");
    }
}

#[test]
fn every_byte_value() {
    let bytes: Vec<u8> = (0..=u8::MAX).collect();
    assert_eq!(update(INITIAL, &bytes), 0x14);
}

#[test]
fn appended_crc_passes_check() -> anyhow::Result<()> {
    let mut frame = b"hello world".to_vec();
    frame.push(checksum(&frame));
    check(&frame)?;
    assert_eq!(update(INITIAL, &frame), RESIDUE);
    Ok(())
}

#[test]
fn corrupted_frame_fails_check() {
    let mut frame = b"hello world".to_vec();
    frame.push(checksum(&frame));
    frame[3] ^= 0x10;
    match check(&frame) {
        Err(Error::ResidueMismatch(residue)) => assert_ne!(residue, RESIDUE),
        other => panic!("expected a residue mismatch, got {other:?}"),
    }
}

#[test]
fn mismatch_converts_to_anyhow() {
    let result: anyhow::Result<()> = verify(b"123456789", 0x00).map_err(Into::into);
    let message = result.unwrap_err().to_string();
    assert_eq!(message, "CRC mismatch: expected 0x00, computed 0xf4");
}
