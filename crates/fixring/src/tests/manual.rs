use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use rstest::rstest;

use crate::{RingBuffer, RingBufferError};

fn filled(capacity: usize, items: impl IntoIterator<Item = i32>) -> RingBuffer<i32> {
    let mut buffer = RingBuffer::new(capacity).unwrap();
    buffer.push_multiple(items);
    buffer
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
#[case(1024)]
fn fresh_buffer_is_empty(#[case] capacity: usize) {
    let buffer = RingBuffer::<u8>::new(capacity).unwrap();
    assert!(buffer.is_empty());
    assert!(!buffer.is_full());
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), capacity);
    assert_eq!(buffer.available(), capacity);
    assert_eq!(buffer.peek(), None);
    buffer.assert_invariants();
}

#[test]
fn zero_capacity_is_rejected() {
    let err = RingBuffer::<u8>::new(0).unwrap_err();
    assert!(matches!(err, RingBufferError::InvalidArgument(_)));
    assert_eq!(
        err.to_string(),
        "invalid argument: ring buffer capacity must be greater than zero"
    );
}

#[test]
fn wraps_around_after_partial_drain() {
    let mut buffer = RingBuffer::new(3).unwrap();
    assert!(buffer.push(1));
    assert!(buffer.push(2));
    assert!(buffer.push(3));
    assert!(!buffer.push(4));
    assert_eq!(buffer.pop(), Some(1));
    assert_eq!(buffer.pop(), Some(2));
    assert!(buffer.push(4));
    assert!(buffer.push(5));
    assert!(buffer.is_full());
    buffer.assert_invariants();

    assert_eq!(buffer.pop(), Some(3));
    assert_eq!(buffer.pop(), Some(4));
    assert_eq!(buffer.pop(), Some(5));
    assert!(buffer.is_empty());
    buffer.assert_invariants();
}

#[test]
fn rejected_push_hands_item_back() {
    let mut buffer = RingBuffer::new(1).unwrap();
    assert_eq!(buffer.try_push(String::from("kept")), Ok(()));
    assert_eq!(
        buffer.try_push(String::from("rejected")),
        Err(String::from("rejected"))
    );
    assert_eq!(buffer.len(), 1);
    assert_eq!(buffer.peek().map(String::as_str), Some("kept"));
}

#[test]
fn single_slot_buffer() {
    let mut buffer = RingBuffer::new(1).unwrap();
    assert!(buffer.push(10));
    assert!(!buffer.push(20));
    assert_eq!(buffer.pop(), Some(10));
    assert!(buffer.is_empty());
    buffer.assert_invariants();
}

#[test]
fn empty_pop_and_peek_leave_state_alone() {
    let mut buffer = RingBuffer::<i32>::new(4).unwrap();
    let mut out = 99;
    assert_eq!(buffer.pop(), None);
    assert!(!buffer.pop_into(&mut out));
    assert!(!buffer.peek_into(&mut out));
    assert_eq!(buffer.peek_cloned(), None);
    assert_eq!(out, 99);
    assert_eq!(buffer.len(), 0);
    buffer.assert_invariants();
}

#[test]
fn peek_does_not_consume() {
    let mut buffer = filled(5, [100, 200, 300]);
    assert_eq!(buffer.pop(), Some(100));

    let mut out = 0;
    assert!(buffer.peek_into(&mut out));
    assert_eq!(out, 200);
    assert_eq!(buffer.peek_cloned(), Some(200));
    assert_eq!(buffer.peek(), Some(&200));
    assert_eq!(buffer.len(), 2);

    assert!(buffer.pop_into(&mut out));
    assert_eq!(out, 200);
    assert_eq!(buffer.pop(), Some(300));
}

#[rstest]
#[case::exact_fit(5, vec![1, 2, 3, 4, 5], 5)]
#[case::overflow(5, vec![1, 2, 3, 4, 5, 6, 7], 5)]
#[case::underflow(5, vec![1, 2], 2)]
#[case::empty_input(3, vec![], 0)]
fn push_multiple_stops_when_full(
    #[case] capacity: usize,
    #[case] items: Vec<i32>,
    #[case] expected: usize,
) {
    let mut buffer = RingBuffer::new(capacity).unwrap();
    assert_eq!(buffer.push_multiple(items.iter().copied()), expected);
    assert_eq!(buffer.len(), expected);
    assert_eq!(buffer.pop_multiple(capacity), items[..expected]);
}

#[test]
fn push_multiple_keeps_earlier_successes() {
    let mut buffer = filled(4, [1, 2, 3]);
    assert_eq!(buffer.push_multiple([4, 5, 6]), 1);
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn push_multiple_leaves_remainder_in_iterator() {
    let mut buffer = RingBuffer::new(3).unwrap();
    let mut items = 1..=5;
    assert_eq!(buffer.push_multiple(items.by_ref()), 3);
    assert_eq!(items.collect::<Vec<_>>(), [4, 5]);
}

#[test]
fn push_slice_clones_prefix() {
    let source = [String::from("a"), String::from("b"), String::from("c")];
    let mut buffer = RingBuffer::new(2).unwrap();
    assert_eq!(buffer.push_slice(&source), 2);
    assert_eq!(buffer.pop_multiple(2), ["a", "b"]);
    assert_eq!(source.len(), 3);
}

#[rstest]
#[case(0, vec![])]
#[case(3, vec![1, 2, 3])]
#[case(5, vec![1, 2, 3, 4])]
#[case(usize::MAX, vec![1, 2, 3, 4])]
fn pop_multiple_stops_when_empty(#[case] n: usize, #[case] expected: Vec<i32>) {
    let mut buffer = filled(10, [1, 2, 3, 4]);
    assert_eq!(buffer.pop_multiple(n), expected);
    assert_eq!(buffer.len(), 4 - expected.len());
}

#[test]
fn pop_into_slice_fills_prefix() {
    let mut buffer = filled(10, [1, 2, 3, 4, 5]);
    let mut out = [0; 3];
    assert_eq!(buffer.pop_into_slice(&mut out), 3);
    assert_eq!(out, [1, 2, 3]);

    let mut out = [0; 4];
    assert_eq!(buffer.pop_into_slice(&mut out), 2);
    assert_eq!(out, [4, 5, 0, 0]);
    assert!(buffer.is_empty());
}

#[test]
fn get_follows_logical_order() {
    let mut buffer = filled(3, [1, 2, 3]);
    buffer.pop();
    buffer.push(4);
    assert_eq!(buffer.get(0), Some(&2));
    assert_eq!(buffer.get(2), Some(&4));
    assert_eq!(buffer.get(3), None);
}

#[test]
fn clear_behaves_like_fresh_buffer() {
    let mut buffer = filled(3, [1, 2, 3]);
    buffer.pop();
    buffer.push(4);
    buffer.clear();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), 3);
    buffer.assert_invariants();

    assert!(buffer.push(10));
    assert_eq!(buffer.pop(), Some(10));
    assert_eq!(buffer.push_multiple(1..10), 3);
    assert_eq!(buffer, filled(3, [1, 2, 3]));
}

#[test]
fn take_leaves_zero_capacity_source() {
    let mut source = filled(5, [1, 2, 3]);
    let mut moved = core::mem::take(&mut source);

    assert_eq!(moved.len(), 3);
    assert_eq!(moved.pop(), Some(1));

    assert_eq!(source.capacity(), 0);
    assert!(source.is_empty());
    assert!(source.is_full());
    assert!(!source.push(7));
    assert_eq!(source.pop(), None);
    assert_eq!(source.peek(), None);
    assert!(source.pop_multiple(3).is_empty());
    assert_eq!(source.iter().count(), 0);
    source.clear();
    source.assert_invariants();
}

#[test]
fn clone_is_independent() {
    let original = filled(4, [1, 2]);
    let mut copy = original.clone();
    copy.push(3);
    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 3);
}

#[test]
fn equality_ignores_physical_layout() {
    let mut rotated = filled(3, [0, 1, 2]);
    rotated.pop();
    rotated.push(3);
    let straight = filled(3, [1, 2, 3]);
    assert_eq!(rotated, straight);
    assert_ne!(straight, filled(4, [1, 2, 3]));
    assert_ne!(straight, filled(3, [1, 2]));
}

#[test]
fn debug_lists_elements_in_fifo_order() {
    let mut buffer = filled(3, [1, 2, 3]);
    buffer.pop();
    buffer.push(4);
    assert_eq!(
        alloc::format!("{buffer:?}"),
        "RingBuffer { capacity: 3, elements: [2, 3, 4] }"
    );
}

#[test]
fn strings_round_trip() {
    let mut buffer = RingBuffer::new(3).unwrap();
    buffer.push(String::from("Hello"));
    buffer.push(String::from("World"));
    buffer.push(String::from("ring"));
    assert_eq!(buffer.pop().as_deref(), Some("Hello"));
    buffer.push(String::from("buffer"));
    assert_eq!(buffer.into_iter().collect::<Vec<_>>(), ["World", "ring", "buffer"]);
}
