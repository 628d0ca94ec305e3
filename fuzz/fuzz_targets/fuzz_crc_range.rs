#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkguard::{CrcEngine, CrcError, CrcParameters, compute_crc};

#[derive(Debug, Arbitrary)]
struct Input {
    polynomial: u16,
    initial_value: u16,
    final_xor: u16,
    reflect_input: bool,
    reflect_output: bool,
    start: usize,
    length: usize,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let params = CrcParameters::new(
        input.polynomial,
        input.initial_value,
        input.final_xor,
        input.reflect_input,
        input.reflect_output,
    );

    // Arbitrary ranges must never panic: either in bounds or a range error.
    let in_bounds = input
        .start
        .checked_add(input.length)
        .is_some_and(|end| end <= input.data.len());

    match compute_crc(&input.data, input.start, input.length, &params) {
        Ok(crc) => {
            if input.length == 0 {
                assert_eq!(crc, params.initial_value);
                return;
            }
            assert!(in_bounds);

            // Streaming over the same range agrees with the one-shot result.
            let range = &input.data[input.start..input.start + input.length];
            let mut engine = CrcEngine::new(params);
            let (head, tail) = range.split_at(range.len() / 2);
            engine.update_slice(head);
            engine.update_slice(tail);
            assert_eq!(engine.finalize(), crc);
        }
        Err(CrcError::RangeOutOfBounds { .. }) => assert!(!in_bounds && input.length != 0),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
