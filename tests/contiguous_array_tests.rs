//! Integration tests for GrowableArray and BlockGrowthArray.
//!
//! Both variants store elements in a contiguous prefix; they differ only in
//! how capacity grows once the prefix is full.

use rstest::rstest;
use seqbench::container::{BlockGrowthArray, Element, GrowableArray, SequenceContainer};

fn capacities<S: SequenceContainer>(mut container: S, inserts: Element) -> Vec<usize> {
    (0..inserts)
        .map(|value| {
            container.insert(value).unwrap();
            container.capacity()
        })
        .collect()
}

// =============================================================================
// Growth Triggers
// =============================================================================

#[rstest]
fn test_growable_array_doubles_on_fifth_insert() {
    let observed = capacities(GrowableArray::with_capacity(4).unwrap(), 9);
    assert_eq!(observed, vec![4, 4, 4, 4, 8, 8, 8, 8, 16]);
}

#[rstest]
fn test_growable_array_from_zero_capacity() {
    let observed = capacities(GrowableArray::with_capacity(0).unwrap(), 5);
    assert_eq!(observed, vec![1, 2, 4, 4, 8]);
}

#[rstest]
#[case(4, 4, vec![4, 4, 4, 4, 8, 8, 8, 8, 12])]
#[case(2, 3, vec![2, 2, 5, 5, 5, 8])]
#[case(0, 0, vec![1, 2, 3])]
fn test_block_growth_array_adds_block(
    #[case] capacity: usize,
    #[case] block_size: usize,
    #[case] expected: Vec<usize>,
) {
    let array = BlockGrowthArray::with_block_size(capacity, block_size).unwrap();
    let inserts = Element::try_from(expected.len()).unwrap();
    assert_eq!(capacities(array, inserts), expected);
}

#[rstest]
fn test_block_growth_reference_parameters() {
    let mut array = BlockGrowthArray::with_block_size(1000, 1000).unwrap();
    for value in 0..1000 {
        array.insert(value).unwrap();
    }
    assert_eq!(array.capacity(), 1000);
    array.insert(1000).unwrap();
    assert_eq!(array.capacity(), 2000);
    assert_eq!(array.as_slice()[1000], 1000);
}

// =============================================================================
// Order and Deletion
// =============================================================================

#[rstest]
fn test_growth_preserves_insertion_order() {
    let mut growable = GrowableArray::with_capacity(1).unwrap();
    let mut block = BlockGrowthArray::with_block_size(1, 2).unwrap();
    for value in [9, 3, 7, 1, 5] {
        growable.insert(value).unwrap();
        block.insert(value).unwrap();
    }
    assert_eq!(growable.as_slice(), &[9, 3, 7, 1, 5]);
    assert_eq!(block.as_slice(), &[9, 3, 7, 1, 5]);
}

#[rstest]
#[case(1, vec![2, 1, 3])]
#[case(2, vec![1, 1, 3])]
#[case(3, vec![1, 2, 1])]
fn test_delete_removes_first_match_only(#[case] target: Element, #[case] expected: Vec<Element>) {
    let mut array = GrowableArray::with_capacity(4).unwrap();
    for value in [1, 2, 1, 3] {
        array.insert(value).unwrap();
    }
    assert!(array.delete(target));
    assert_eq!(array.as_slice(), expected.as_slice());
    assert_eq!(array.capacity(), 4);
}

#[rstest]
fn test_delete_never_shrinks() {
    let mut array = BlockGrowthArray::with_block_size(2, 2).unwrap();
    for value in 0..5 {
        array.insert(value).unwrap();
    }
    for value in 0..5 {
        assert!(array.delete(value));
    }
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 6);
}

#[rstest]
fn test_display_uses_chain_format() {
    let mut array = GrowableArray::with_capacity(2).unwrap();
    assert_eq!(array.to_string(), "NULL");
    array.insert(1).unwrap();
    array.insert(2).unwrap();
    assert_eq!(array.to_string(), "1 -> 2 -> NULL");
}
