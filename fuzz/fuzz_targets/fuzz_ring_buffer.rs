#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use fixring::{ClearPolicy, RingBuffer, RingBufferOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Push(u16),
    TryPush(u16),
    Pop,
    PopInto,
    Peek,
    Get(u8),
    Clear,
    PushMultiple(Vec<u16>),
    PopMultiple(u8),
    PopIntoSlice(u8),
    Take,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    deferred_clear: bool,
    ops: Vec<Op>,
}

/// Replays the operations against a `VecDeque` that refuses to grow past
/// `capacity` and panics at the first divergence.
fn run(input: Input) {
    let clear_policy = if input.deferred_clear {
        ClearPolicy::Deferred
    } else {
        ClearPolicy::Eager
    };
    let Ok(mut buffer) =
        RingBuffer::with_options(usize::from(input.capacity), RingBufferOptions { clear_policy })
    else {
        assert_eq!(input.capacity, 0);
        return;
    };
    let mut capacity = usize::from(input.capacity);
    let mut model: VecDeque<u16> = VecDeque::with_capacity(capacity);

    for op in input.ops {
        match op {
            Op::Push(v) => {
                let fits = model.len() < capacity;
                if fits {
                    model.push_back(v);
                }
                assert_eq!(buffer.push(v), fits);
            }
            Op::TryPush(v) => {
                if model.len() < capacity {
                    model.push_back(v);
                    assert_eq!(buffer.try_push(v), Ok(()));
                } else {
                    assert_eq!(buffer.try_push(v), Err(v));
                }
            }
            Op::Pop => assert_eq!(buffer.pop(), model.pop_front()),
            Op::PopInto => {
                let mut out = u16::MAX;
                let expected = model.pop_front();
                assert_eq!(buffer.pop_into(&mut out), expected.is_some());
                assert_eq!(out, expected.unwrap_or(u16::MAX));
            }
            Op::Peek => assert_eq!(buffer.peek(), model.front()),
            Op::Get(i) => assert_eq!(buffer.get(usize::from(i)), model.get(usize::from(i))),
            Op::Clear => {
                buffer.clear();
                model.clear();
            }
            Op::PushMultiple(values) => {
                let fits = values.len().min(capacity - model.len());
                model.extend(&values[..fits]);
                assert_eq!(buffer.push_multiple(values), fits);
            }
            Op::PopMultiple(n) => {
                let take = usize::from(n).min(model.len());
                let expected: Vec<u16> = model.drain(..take).collect();
                assert_eq!(buffer.pop_multiple(usize::from(n)), expected);
            }
            Op::PopIntoSlice(n) => {
                let mut out = vec![0; usize::from(n)];
                let take = out.len().min(model.len());
                let expected: Vec<u16> = model.drain(..take).collect();
                assert_eq!(buffer.pop_into_slice(&mut out), take);
                assert_eq!(out[..take], expected[..]);
            }
            Op::Take => {
                let taken = std::mem::take(&mut buffer);
                assert!(taken.iter().eq(model.iter()));
                assert_eq!(buffer.capacity(), 0);
                buffer.assert_invariants();
                // Continue on the zero-capacity buffer left behind.
                capacity = 0;
                model.clear();
            }
        }

        buffer.assert_invariants();
        assert_eq!(buffer.len(), model.len());
        assert_eq!(buffer.is_full(), model.len() == capacity);
        assert!(buffer.iter().eq(model.iter()));
        assert!(buffer.iter().rev().eq(model.iter().rev()));
    }
}

fuzz_target!(|input: Input| run(input));
