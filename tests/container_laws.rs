//! Property-based tests for the shared container contract.
//!
//! Every variant is checked against a `Vec` model: after any sequence of
//! inserts and deletes the elements, their logical order and the
//! `len <= capacity` bound must agree with the model.

use proptest::prelude::*;
use seqbench::container::{
    BlockGrowthArray, ContainerHandle, Element, GrowableArray, InsertPosition, LinkedChain,
    RingBuffer, SequenceContainer, VariantKind, VariantSpec,
};

// =============================================================================
// Operations and Model
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Operation {
    Insert(Element),
    Delete(Element),
}

/// Small value domain so deletes hit often.
fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0..16_i64).prop_map(Operation::Insert),
        2 => (0..16_i64).prop_map(Operation::Delete),
    ]
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(operation(), 0..120)
}

/// Applies an operation to the model. Front-inserting chains prepend.
fn apply_model(model: &mut Vec<Element>, operation: Operation, prepend: bool) -> bool {
    match operation {
        Operation::Insert(value) if prepend => {
            model.insert(0, value);
            true
        }
        Operation::Insert(value) => {
            model.push(value);
            true
        }
        Operation::Delete(value) => match model.iter().position(|&element| element == value) {
            Some(index) => {
                model.remove(index);
                true
            }
            None => false,
        },
    }
}

fn apply<S: SequenceContainer>(container: &mut S, operation: Operation) -> bool {
    match operation {
        Operation::Insert(value) => container.insert(value).is_ok(),
        Operation::Delete(value) => container.delete(value),
    }
}

// =============================================================================
// Laws per Variant
// =============================================================================

macro_rules! container_laws {
    ($name:ident, $build:expr, prepend = $prepend:expr) => {
        paste::paste! {
            proptest! {
                #[test]
                fn [<prop_ $name _matches_model>](operations in operations()) {
                    let mut container = $build;
                    let mut model = Vec::new();
                    for operation in operations {
                        let expected = apply_model(&mut model, operation, $prepend);
                        prop_assert_eq!(apply(&mut container, operation), expected);
                        prop_assert!(container.len() <= container.capacity());
                        prop_assert_eq!(container.len(), model.len());
                    }
                    prop_assert_eq!(container.iter().collect::<Vec<_>>(), model);
                }

                #[test]
                fn [<prop_ $name _absent_delete_is_noop>](
                    values in prop::collection::vec(0..16_i64, 0..60),
                    absent in 16..1000_i64,
                ) {
                    let mut container = $build;
                    for &value in &values {
                        container.insert(value).unwrap();
                    }
                    let before: Vec<Element> = container.iter().collect();
                    let capacity = container.capacity();

                    prop_assert!(!container.delete(absent));
                    prop_assert_eq!(container.len(), values.len());
                    prop_assert_eq!(container.capacity(), capacity);
                    prop_assert_eq!(container.iter().collect::<Vec<_>>(), before);
                }

                #[test]
                fn [<prop_ $name _forward_round_trip_empties>](count in 0..300_i64) {
                    let mut container = $build;
                    for value in 0..count {
                        container.insert(value).unwrap();
                    }
                    for value in 0..count {
                        prop_assert!(container.delete(value));
                    }
                    prop_assert!(container.is_empty());
                }

                #[test]
                fn [<prop_ $name _reverse_round_trip_empties>](count in 0..300_i64) {
                    let mut container = $build;
                    for value in 0..count {
                        container.insert(value).unwrap();
                    }
                    for value in (0..count).rev() {
                        prop_assert!(container.delete(value));
                    }
                    prop_assert!(container.is_empty());
                }

                #[test]
                fn [<prop_ $name _clear_resets_to_empty>](values in prop::collection::vec(any::<i64>(), 0..60)) {
                    let mut container = $build;
                    for &value in &values {
                        container.insert(value).unwrap();
                    }
                    container.clear();
                    prop_assert_eq!(container.len(), 0);
                    prop_assert_eq!(container.capacity(), 0);
                    prop_assert_eq!(container.iter().next(), None);

                    container.insert(42).unwrap();
                    prop_assert_eq!(container.iter().collect::<Vec<_>>(), vec![42]);
                }
            }
        }
    };
}

container_laws!(linked_chain, LinkedChain::new(), prepend = true);
container_laws!(
    tail_linked_chain,
    LinkedChain::with_position(InsertPosition::Back),
    prepend = false
);
container_laws!(growable_array, GrowableArray::with_capacity(4).unwrap(), prepend = false);
container_laws!(
    growable_array_from_zero,
    GrowableArray::with_capacity(0).unwrap(),
    prepend = false
);
container_laws!(ring_buffer, RingBuffer::with_capacity(4).unwrap(), prepend = false);
container_laws!(
    ring_buffer_from_zero,
    RingBuffer::with_capacity(0).unwrap(),
    prepend = false
);
container_laws!(
    block_growth_array,
    BlockGrowthArray::with_block_size(4, 3).unwrap(),
    prepend = false
);
container_laws!(
    block_growth_array_zero_block,
    BlockGrowthArray::with_block_size(1, 0).unwrap(),
    prepend = false
);
container_laws!(
    handle_ring_buffer,
    ContainerHandle::from(RingBuffer::with_capacity(3).unwrap()),
    prepend = false
);

// =============================================================================
// Handle Equivalence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_handle_behaves_like_wrapped_variant(operations in operations()) {
        for kind in VariantKind::ALL {
            let mut handle = VariantSpec::new(kind).initial_capacity(2).block_size(2).build().unwrap();
            let mut model = Vec::new();
            let prepend = kind == VariantKind::LinkedChain;
            for &operation in &operations {
                let expected = apply_model(&mut model, operation, prepend);
                prop_assert_eq!(apply(&mut handle, operation), expected);
            }
            prop_assert_eq!(handle.iter().collect::<Vec<_>>(), model);
        }
    }
}
