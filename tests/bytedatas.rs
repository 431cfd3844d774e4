//! Integration tests for the typed accessors and raw byte helpers.
//!
//! These walk a single 100 byte buffer through the same sequence of writes and reads a caller
//! laying out a binary record would perform, checking that neighbouring fields never disturb
//! each other.

use bytedatas::prelude::*;

const TEST_BUFFER_LEN: usize = 100;

#[test]
fn test_uint8() -> Result<()> {
    let mut buffer = ByteBuffer::new(TEST_BUFFER_LEN);

    buffer[2] = 124;
    assert_eq!(buffer.read_uint8(2)?, 124);

    // Success to write
    assert!(buffer.write_uint8(3, 100)?);
    assert_eq!(buffer.read_uint8(3)?, 100);

    // Failed to write
    assert!(!buffer.write_uint8(40, 258)?);
    assert_eq!(buffer.read_uint8(40)?, 0);

    Ok(())
}

#[test]
fn test_int8() -> Result<()> {
    let mut buffer = ByteBuffer::new(TEST_BUFFER_LEN);

    buffer[5] = 124;
    assert_eq!(buffer.read_int8(5)?, 124);
    buffer[6] = (256 - 124) as u8;
    assert_eq!(buffer.read_int8(6)?, -124);

    // Success to write
    assert!(buffer.write_int8(7, 100)?);
    assert_eq!(buffer.read_int8(7)?, 100);
    assert!(buffer.write_int8(8, -100)?);
    assert_eq!(buffer.read_int8(8)?, -100);

    // Failed to write
    assert!(!buffer.write_int8(9, -230)?);
    assert!(!buffer.write_int8(10, 230)?);

    Ok(())
}

#[test]
fn test_int32() -> Result<()> {
    let mut buffer = ByteBuffer::new(TEST_BUFFER_LEN);

    // Success to write
    assert!(buffer.write_int32(19, 3241)?);
    assert_eq!(buffer.read_int32(19)?, 3241);
    assert!(buffer.write_int32(23, -3241)?);
    assert_eq!(buffer.read_int32(23)?, -3241);

    // Failed to write
    assert!(!buffer.write_int32(27, -(1 << 31) - 100)?);
    assert!(!buffer.write_int32(31, (1 << 31) + 100)?);
    assert!(!buffer.write_int32(31, 1 << 31)?);

    assert_eq!(buffer.read_bytes(27, 8), &[0; 8]);

    Ok(())
}

#[test]
fn test_series_bytes() -> Result<()> {
    let mut buffer = ByteBuffer::new(TEST_BUFFER_LEN);

    let series_bytes = b"bytes";
    assert_eq!(buffer.write_bytes(60, series_bytes, 8)?, series_bytes.len());

    let read = buffer.read_bytes(60, 8);
    let trimmed = &read[..read.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1)];
    assert_eq!(trimmed, series_bytes);

    // Text has to be turned into bytes explicitly
    assert_eq!(buffer.write_bytes(90, "it is failed".as_bytes(), 9)?, 9);
    assert_eq!(buffer.read_bytes(90, 20), b"it is fai\0");

    Ok(())
}

#[test]
fn test_record_layout() -> Result<()> {
    // A small header: magic (u32), version (u16), flags (u8), delta (i8), offset (i64), name
    let mut buffer = ByteBuffer::new(24);

    assert!(buffer.write_uint32(0, 0xCAFE_BABE)?);
    assert!(buffer.write_uint16(4, 3)?);
    assert!(buffer.write_uint8(6, 0b1010_0001)?);
    assert!(buffer.write_int8(7, -5)?);
    assert!(buffer.write_int64(8, -1_234_567_890_123)?);
    assert_eq!(buffer.write_bytes(16, b"hdr", 8)?, 3);

    assert_eq!(
        buffer.as_slice()[..8],
        [0xBE, 0xBA, 0xFE, 0xCA, 0x03, 0x00, 0xA1, 0xFB]
    );

    assert_eq!(buffer.read_uint32(0)?, 0xCAFE_BABE);
    assert_eq!(buffer.read_uint16(4)?, 3);
    assert_eq!(buffer.read_uint8(6)?, 0b1010_0001);
    assert_eq!(buffer.read_int8(7)?, -5);
    assert_eq!(buffer.read_int64(8)?, -1_234_567_890_123);
    assert_eq!(buffer.read_bytes(16, 8), b"hdr\0\0\0\0\0");

    // Reinterpreting the same bytes under another signedness
    assert_eq!(buffer.read_uint8(7)?, 251);
    assert_eq!(buffer.read_int32(0)?, 0xCAFE_BABE_u32 as i32);

    Ok(())
}

#[test]
fn test_runtime_width() -> Result<()> {
    let mut buffer = ByteBuffer::new(TEST_BUFFER_LEN);

    for bits in [8, 16, 32, 64] {
        let accessor = IntAccessor::new(bits, Signedness::Signed)?;
        assert!(accessor.write(&mut buffer, 0, -1)?);
        assert_eq!(accessor.read(&buffer, 0)?, -1);
        assert!(!accessor.write(&mut buffer, 0, accessor.domain().max() + 1)?);
    }

    for bits in [0, 4, 24, 128] {
        assert_eq!(
            IntAccessor::new(bits, Signedness::Unsigned),
            Err(Error::UnsupportedWidth(bits))
        );
    }

    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let mut buffer = ByteBuffer::new(TEST_BUFFER_LEN);

    assert_eq!(buffer.write_uint64(96, 1), Err(Error::OutOfBounds));
    assert_eq!(buffer.read_int16(99), Err(Error::OutOfBounds));
    assert_eq!(buffer.write_bytes(98, b"abc", 3), Err(Error::OutOfBounds));
    assert!(buffer.as_slice().iter().all(|b| *b == 0));

    assert_eq!(buffer.read_bytes(98, 8), &[0, 0]);
    assert!(buffer.read_bytes(TEST_BUFFER_LEN, 8).is_empty());
}
