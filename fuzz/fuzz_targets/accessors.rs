#![no_main]

use bytedatas::{ByteBuffer, IntAccessor, IntegerWidth, Signedness};
use libfuzzer_sys::fuzz_target;

const WIDTHS: [IntegerWidth; 4] = [
    IntegerWidth::W8,
    IntegerWidth::W16,
    IntegerWidth::W32,
    IntegerWidth::W64,
];

// Each 18 byte chunk is one operation: selector, seat, value (16 bytes LE).
fuzz_target!(|data: &[u8]| {
    let mut buffer = ByteBuffer::new(64);

    for op in data.chunks_exact(18) {
        let width = WIDTHS[usize::from(op[0] & 0x3)];
        let signedness = if op[0] & 0x4 == 0 {
            Signedness::Unsigned
        } else {
            Signedness::Signed
        };
        let accessor = IntAccessor::of(width, signedness);
        let seat = usize::from(op[1]);
        let mut value_bytes = [0_u8; 16];
        value_bytes.copy_from_slice(&op[2..]);
        let value = i128::from_le_bytes(value_bytes);

        let before = buffer.clone();
        match accessor.write(&mut buffer, seat, value) {
            Ok(true) => assert_eq!(accessor.read(&buffer, seat), Ok(value)),
            Ok(false) => {
                assert!(!accessor.domain().contains(value));
                assert_eq!(buffer, before);
            }
            Err(_) => assert_eq!(buffer, before),
        }
    }
});
