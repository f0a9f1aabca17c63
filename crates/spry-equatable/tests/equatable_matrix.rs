//! Comparison matrix for the public API: reflexivity, absence, sequences,
//! mappings, identity semantics and the three contract violations.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::json;
use spry_equatable::{
    is_equal, operands, spry_equatable, Capability, Comparator, FailureMode, SpryEquatable,
};

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

/// Class-like type without value equality.
struct Session {
    _user: String,
}

/// Class-like type with value equality that still compares by identity.
#[derive(PartialEq)]
struct Account {
    id: u32,
}

struct Opaque;

spry_equatable!(value => Point);
spry_equatable!(identity => Session);
spry_equatable!(value_and_identity => Account);
spry_equatable!(unsupported => Opaque);

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_scalars() {
    assert!(is_equal(&String::from("hello"), Some(&String::from("hello"))));
    assert!(is_equal(&"hello", Some(&"hello")));
    assert!(is_equal(&42_i64, Some(&42_i64)));
    assert!(is_equal(&4.25_f64, Some(&4.25_f64)));
    assert!(is_equal(&true, Some(&true)));
    assert!(is_equal(&'x', Some(&'x')));
    assert!(is_equal(&(), Some(&())));
}

#[test]
fn reflexivity_same_instance() {
    let point = Point { x: 1, y: 2 };
    let session = Session {
        _user: "ann".into(),
    };
    let list = vec![Some(1_u8), None];
    assert!(is_equal(&point, Some(&point)));
    assert!(is_equal(&session, Some(&session)));
    assert!(is_equal(&list, Some(&list)));
}

#[test]
fn reflexivity_json() {
    let doc = json!({"complex": [1, 2, {"nested": true}]});
    assert!(is_equal(&doc, Some(&doc.clone())));
    assert!(!is_equal(&doc, Some(&json!({"complex": [1, 2]}))));
}

// ---------------------------------------------------------------------------
// Absence
// ---------------------------------------------------------------------------

#[test]
fn absent_equals_absent() {
    assert!(is_equal(&None::<i32>, None));
    assert!(is_equal(&None::<i32>, Some(&None::<i32>)));
}

#[test]
fn absent_versus_present_is_false() {
    assert!(!is_equal(&None::<i32>, Some(&Some(3))));
    assert!(!is_equal(&Some(3), Some(&None::<i32>)));
    assert!(!is_equal(&Some(3), None));
}

#[test]
fn nested_optionals_unwrap() {
    assert!(is_equal(&Some(Some(5)), Some(&Some(Some(5)))));
    assert!(!is_equal(&Some(Some(5)), Some(&Some(None::<i32>))));
    assert!(is_equal(&Some(None::<i32>), Some(&Some(None::<i32>))));
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

#[test]
fn sequence_element_wise() {
    assert!(is_equal(&vec![1, 2, 3], Some(&vec![1, 2, 3])));
    assert!(!is_equal(&vec![1, 2, 3], Some(&vec![1, 2, 4])));
}

#[test]
fn sequence_length_sensitive() {
    assert!(!is_equal(&vec![1, 2], Some(&vec![1, 2, 3])));
    assert!(!is_equal(&vec![1, 2, 3], Some(&vec![1, 2])));
}

#[test]
fn sequence_kinds() {
    assert!(is_equal(&[1_u8, 2], Some(&[1_u8, 2])));
    let deque: VecDeque<u8> = (1..=3).collect();
    assert!(is_equal(&deque, Some(&VecDeque::from(vec![1_u8, 2, 3]))));
}

#[test]
fn heterogeneous_argument_lists() {
    let expected = operands![String::from("stubbed"), 3_i64, Some(Point { x: 0, y: 0 })];
    let same = operands![String::from("stubbed"), 3_i64, Some(Point { x: 0, y: 0 })];
    let other = operands![String::from("stubbed"), 3_i64, None::<Point>];
    assert!(is_equal(&expected, Some(&same)));
    assert!(!is_equal(&expected, Some(&other)));
    assert!(is_equal(&operands![], Some(&operands![])));
}

// ---------------------------------------------------------------------------
// Mappings
// ---------------------------------------------------------------------------

#[test]
fn mapping_order_independent() {
    let a = IndexMap::from([("a", 1_i32), ("b", 2)]);
    let b = IndexMap::from([("b", 2_i32), ("a", 1)]);
    assert!(is_equal(&a, Some(&b)));

    let a = HashMap::from([("a".to_string(), 1_i32), ("b".to_string(), 2)]);
    let b = HashMap::from([("b".to_string(), 2_i32), ("a".to_string(), 1)]);
    assert!(is_equal(&a, Some(&b)));
}

#[test]
fn mapping_size_and_key_sensitive() {
    let one = BTreeMap::from([("a", 1_i32)]);
    let two = BTreeMap::from([("a", 1_i32), ("b", 2)]);
    assert!(!is_equal(&one, Some(&two)));
    assert!(!is_equal(&two, Some(&one)));

    let renamed = BTreeMap::from([("z", 1_i32)]);
    assert!(!is_equal(&one, Some(&renamed)));

    let changed = BTreeMap::from([("a", 9_i32)]);
    assert!(!is_equal(&one, Some(&changed)));
}

#[test]
fn mapping_of_sequences() {
    let a = BTreeMap::from([(1_u8, vec!["x", "y"])]);
    let b = BTreeMap::from([(1_u8, vec!["x", "y"])]);
    let c = BTreeMap::from([(1_u8, vec!["x"])]);
    assert!(is_equal(&a, Some(&b)));
    assert!(!is_equal(&a, Some(&c)));
}

// ---------------------------------------------------------------------------
// Identity vs value semantics
// ---------------------------------------------------------------------------

#[test]
fn identity_distinct_instances_differ() {
    let a = Session {
        _user: "ann".into(),
    };
    let b = Session {
        _user: "ann".into(),
    };
    assert!(!is_equal(&a, Some(&b)));
    assert!(is_equal(&a, Some(&a)));
}

#[test]
fn value_and_identity_uses_identity() {
    let a = Account { id: 7 };
    let b = Account { id: 7 };
    assert!(a == b);
    assert_eq!(a.capability(), Capability::ValueAndIdentityEquatable);
    assert!(!is_equal(&a, Some(&b)));
    assert!(is_equal(&a, Some(&a)));
    assert_eq!(a.id, b.id);
}

#[test]
fn reference_counted_handles() {
    let rc = Rc::new(Point { x: 1, y: 1 });
    assert!(is_equal(&rc, Some(&Rc::clone(&rc))));
    assert!(!is_equal(&rc, Some(&Rc::new(Point { x: 1, y: 1 }))));

    let arc = Arc::new(String::from("shared"));
    assert!(is_equal(&arc, Some(&Arc::clone(&arc))));
    assert!(!is_equal(&arc, Some(&Arc::new(String::from("shared")))));
}

#[test]
fn identity_distinct_elements_of_one_sequence_differ() {
    let sessions = vec![
        Session {
            _user: "ann".into(),
        },
        Session {
            _user: "ann".into(),
        },
    ];
    assert!(!is_equal(&sessions[0], Some(&sessions[1])));
    assert!(is_equal(&sessions[1], Some(&sessions[1])));
}

#[test]
fn value_types_compare_by_value() {
    assert!(is_equal(&Point { x: 1, y: 2 }, Some(&Point { x: 1, y: 2 })));
    assert!(!is_equal(&Point { x: 1, y: 2 }, Some(&Point { x: 2, y: 1 })));
}

// ---------------------------------------------------------------------------
// Floats
// ---------------------------------------------------------------------------

#[test]
fn nan_is_never_equal_even_to_itself() {
    // Floats follow `PartialEq`, the one exception to reflexivity.
    let nan = f64::NAN;
    assert!(!is_equal(&nan, Some(&nan)));
    assert!(!is_equal(&f32::NAN, Some(&f32::NAN)));
    assert!(!is_equal(&vec![1.0, nan], Some(&vec![1.0, nan])));
    assert!(!is_equal(&Some(nan), Some(&Some(nan))));
    assert!(is_equal(&f64::INFINITY, Some(&f64::INFINITY)));
    assert!(is_equal(&0.0_f64, Some(&-0.0_f64)));
}

// ---------------------------------------------------------------------------
// Method form and comparator configuration
// ---------------------------------------------------------------------------

#[test]
fn method_form_matches_free_function() {
    assert!(5_u8.is_equal(Some(&5_u8)));
    assert!(!vec![1_u8].is_equal(Some(&vec![2_u8])));
    assert!(None::<u8>.is_equal(None));
}

#[test]
fn explicit_comparator() {
    let comparator = Comparator::new(FailureMode::Panic);
    assert!(comparator.is_equal(&"a", Some(&"a")));
    assert!(!comparator.is_equal(&"a", Some(&"b")));
}

// ---------------------------------------------------------------------------
// Contract violations
// ---------------------------------------------------------------------------

#[test]
#[should_panic(expected = "type mismatch: cannot compare `alloc::string::String` with `i64`")]
fn string_versus_integer_raises() {
    is_equal(&String::from("1"), Some(&1_i64));
}

#[test]
#[should_panic(expected = "type mismatch")]
fn absent_actual_for_plain_value_raises() {
    is_equal(&1_i64, None);
}

#[test]
#[should_panic(expected = "type mismatch")]
fn different_sequence_types_raise() {
    is_equal(&vec![1_i32], Some(&vec![1_i64]));
}

#[test]
#[should_panic(expected = "unsupported comparison: operand of type")]
fn unsupported_operand_raises() {
    is_equal(&Opaque, Some(&Opaque));
}

#[test]
#[should_panic(expected = "unsupported comparison: sequence element 1")]
fn unsupported_element_raises_even_after_mismatch() {
    is_equal(&operands![1_u8, Opaque], Some(&operands![2_u8, Opaque]));
}

#[test]
#[should_panic(expected = "unsupported comparison: sequence element 0")]
fn nested_unsupported_element_raises_after_earlier_mismatch() {
    is_equal(
        &operands![vec![1_u8], vec![Opaque]],
        Some(&operands![vec![2_u8], vec![Opaque]]),
    );
}

#[test]
#[should_panic(expected = "unsupported comparison: sequence element 0")]
fn nested_unsupported_element_raises_despite_length_mismatch() {
    is_equal(&vec![vec![Opaque]], Some(&vec![vec![Opaque], vec![]]));
}

#[test]
#[should_panic(expected = "unsupported comparison: optional payload")]
fn unsupported_payload_in_sequence_raises_despite_length_mismatch() {
    is_equal(&vec![Some(Opaque)], Some(&vec![Some(Opaque), None]));
}

#[test]
#[should_panic(expected = "unsupported comparison: optional payload")]
fn unsupported_payload_raises() {
    is_equal(&Some(Opaque), Some(&Some(Opaque)));
}

#[test]
#[should_panic(expected = "unsupported comparison: mapping value")]
fn unsupported_mapping_value_raises() {
    let map = BTreeMap::from([(1_u8, Opaque)]);
    is_equal(&map, Some(&map));
}
