//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use lib8080::{disassemble, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
    hex_dump: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to the 16-bit address space
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        hex_dump: input.hex_dump,
    };

    let length = input.bytes.len().saturating_sub(input.start_address as usize);
    let listing = disassemble(&input.bytes, input.start_address, length);

    let mut covered: usize = 0;
    let mut expected_address = input.start_address;

    for line in listing.clone() {
        // Lines are contiguous
        assert_eq!(line.address, expected_address);

        // Size should be 1-3 bytes and never read past the snapshot (a full
        // 64 KiB snapshot wraps)
        let size = line.instruction.size_bytes as usize;
        assert!((1..=3).contains(&size));
        for offset in 0..size as u16 {
            assert!((line.address.wrapping_add(offset) as usize) < input.bytes.len());
        }

        let rendered = line.render(&options);
        assert!(rendered.starts_with(&format!("{:04X}: ", line.address)));
        assert!(rendered.ends_with(&line.text));

        covered += size;
        expected_address = expected_address.wrapping_add(size as u16);
    }

    // Every byte of the range is covered; only the last instruction may overhang
    assert!(covered >= length);
    assert!(covered < length + 3);

    // Restarting the listing yields the same lines
    assert!(listing.clone().eq(listing));
});
