//! # linkguard-bench: Performance benchmarks for Linkguard
//!
//! ## Benchmarks
//!
//! - **crc**: One-shot, streaming and per-preset CRC-16 throughput
//! - **buffer**: Bounded buffer append/drain cycles, single and multi-threaded
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p linkguard-bench
//!
//! # Save baseline for comparison
//! cargo bench -p linkguard-bench --bench crc -- --save-baseline main
//!
//! # Compare against baseline
//! cargo bench -p linkguard-bench --bench crc -- --baseline main
//! ```

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Payload sizes shared by the throughput benchmarks.
pub const PAYLOAD_SIZES: [usize; 5] = [16, 256, 1024, 4096, 16384];

/// Deterministic pseudo-random payload so runs are comparable across baselines.
pub fn payload(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; size];
    rng.fill_bytes(&mut data);
    data
}

/// Splits `data` into `chunk`-sized pieces, the last one possibly shorter.
pub fn chunks(data: &[u8], chunk: usize) -> Vec<&[u8]> {
    data.chunks(chunk.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_deterministic() {
        assert_eq!(payload(64, 7), payload(64, 7));
        assert_ne!(payload(64, 7), payload(64, 8));
        assert_eq!(payload(0, 1).len(), 0);
    }

    #[test]
    fn chunks_cover_payload() {
        let data = payload(100, 1);
        let pieces = chunks(&data, 30);
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces.concat(), data);
    }
}
