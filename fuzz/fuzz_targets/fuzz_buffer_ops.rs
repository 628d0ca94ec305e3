#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkguard::{BoundedBuffer, BufferError};

#[derive(Debug, Arbitrary)]
enum Op {
    Add(Vec<u8>),
    Get(u16),
    Peek(u16),
    Remove(u16),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.capacity);
    let buffer = match BoundedBuffer::new(capacity) {
        Ok(buffer) => buffer,
        Err(BufferError::InvalidCapacity { .. }) => {
            assert_eq!(capacity, 0);
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    let mut model: Vec<u8> = Vec::new();

    for op in input.ops {
        match op {
            Op::Add(bytes) => {
                let fits = model.len() + bytes.len() <= capacity;
                assert_eq!(buffer.add_data(&bytes).is_ok(), fits);
                if fits {
                    model.extend_from_slice(&bytes);
                }
            }
            Op::Get(amount) => {
                let amount = usize::from(amount);
                match buffer.get_data(amount) {
                    Ok(taken) => {
                        let expected: Vec<u8> = model.drain(..amount).collect();
                        assert_eq!(taken, expected);
                    }
                    Err(_) => assert!(amount == 0 || amount > model.len()),
                }
            }
            Op::Peek(index) => {
                let index = usize::from(index);
                assert_eq!(buffer.peek(index).ok(), model.get(index).copied());
            }
            Op::Remove(amount) => {
                let amount = usize::from(amount);
                if buffer.remove(amount).is_ok() {
                    model.drain(..amount);
                } else {
                    assert!(amount > model.len());
                }
            }
            Op::Clear => {
                buffer.clear();
                model.clear();
            }
        }

        assert_eq!(buffer.count(), model.len());
        assert_eq!(buffer.available(), capacity - model.len());
        assert_eq!(buffer.is_full(), model.len() == capacity);
    }
});
