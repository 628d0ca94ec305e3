//! Kani verification harnesses for the CRC engine.
//!
//! ```bash
//! cargo kani --package linkguard-crc
//! ```

#[cfg(kani)]
mod verification {
    use crate::{CrcEngine, CrcParameters, Reflect, checksum, compute_crc};

    /// **Property:** reflecting a register twice is the identity.
    #[kani::proof]
    fn verify_reflect_u16_involution() {
        let value: u16 = kani::any();
        assert_eq!(value.reflect().reflect(), value);
    }

    /// **Property:** a zero-length range returns the initial value for any
    /// parameter set and any start.
    #[kani::proof]
    fn verify_zero_length_returns_initial_value() {
        let params = CrcParameters {
            polynomial: kani::any(),
            initial_value: kani::any(),
            final_xor: kani::any(),
            msb_mask: kani::any(),
            output_mask: kani::any(),
            reflect_input: kani::any(),
            reflect_output: kani::any(),
        };
        let start: usize = kani::any();
        let data = [0u8; 4];

        assert_eq!(compute_crc(&data, start, 0, &params), Ok(params.initial_value));
    }

    /// **Property:** streaming a single byte matches the one-shot result.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_single_byte_streaming_matches_oneshot() {
        let params = CrcParameters::new(
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
            kani::any(),
        );
        let byte: u8 = kani::any();

        let mut engine = CrcEngine::new(params);
        engine.update(byte);

        assert_eq!(engine.finalize(), checksum(&[byte], &params));
    }
}
