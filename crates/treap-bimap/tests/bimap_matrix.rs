use treap_bimap::{BiMap, BiMapError, Handle, LeftCursor, Position, RightCursor};

mod common;
use common::*;

fn abc() -> BiMap<i32, String> {
    let mut map = BiMap::new();
    map.insert(1, "a".to_string());
    map.insert(2, "b".to_string());
    map.insert(3, "c".to_string());
    map
}

#[test]
fn int_string_scenario_matrix() {
    init_tracing();
    let mut map = abc();

    let mut seen = Vec::new();
    let mut it = map.begin_left();
    while it != map.end_left() {
        let (l, r) = map.entry(it).unwrap();
        seen.push((*l, r.clone()));
        it = map.next(it).unwrap();
    }
    assert_eq!(
        seen,
        vec![(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]
    );

    assert_eq!(map.at_left(&2), Ok(&"b".to_string()));
    assert!(map.erase_right_key(&"a".to_string()));
    assert_eq!(map.find_left(&1), map.end_left());
    assert_eq!(map.len(), 2);
    assert_consistent(&map);
}

#[test]
fn default_value_scenario_matrix() {
    init_tracing();
    let mut map: BiMap<i32, i32> = BiMap::new();
    assert_eq!(*map.at_left_or_default(5), 0);
    assert_eq!(pairs(&map), vec![(5, 0)]);

    // 0 is taken by 5, so the record is re-keyed rather than duplicated
    assert_eq!(*map.at_left_or_default(7), 0);
    assert_eq!(pairs(&map), vec![(7, 0)]);
    assert!(map.find_left(&5).is_end());

    // present keys just answer
    map.insert(8, 3);
    assert_eq!(*map.at_left_or_default(8), 3);
    assert_eq!(map.len(), 2);
    assert_consistent(&map);
}

#[test]
fn right_default_value_matrix() {
    let mut map: BiMap<String, i32> = BiMap::new();
    assert_eq!(map.at_right_or_default(4), "");
    assert_eq!(map.at_right_or_default(9), "");
    assert_eq!(pairs(&map), vec![(String::new(), 9)]);
    assert!(map.find_right(&4).is_end());

    map.insert("x".to_string(), 1);
    assert_eq!(map.at_right_or_default(1), "x");
    assert_consistent(&map);
}

#[test]
fn at_reports_missing_keys_matrix() {
    let map = abc();
    assert_eq!(map.at_left(&4), Err(BiMapError::KeyNotFound));
    assert_eq!(map.at_right(&"z".to_string()), Err(BiMapError::KeyNotFound));
    assert_eq!(BiMapError::KeyNotFound.to_string(), "key not found");
    assert_eq!(map.get_by_right(&"c".to_string()), Some(&3));
    assert!(map.contains_left(&1));
    assert!(!map.contains_right(&"q".to_string()));
}

#[test]
fn duplicates_rejected_matrix() {
    let mut map = abc();
    let before = map.clone();
    assert_eq!(map.insert(1, "z".to_string()), map.end_left());
    assert_eq!(map.insert(7, "b".to_string()), map.end_left());
    assert_eq!(map, before);
    assert_eq!(map.len(), 3);
}

#[test]
fn flip_round_trips_matrix() {
    let map = abc();
    for l in 1..=3 {
        let left: LeftCursor = map.find_left(&l);
        let right: RightCursor = left.flip();
        let r = map.value(right).unwrap().clone();
        assert_eq!(right, map.find_right(&r));
        assert_eq!(right.flip(), left);
        assert_eq!(map.value(right.flip()), Ok(&l));

        let Position::Real(handle) = left.position() else {
            panic!("found key {l} at end");
        };
        let same: Handle = handle;
        assert_eq!(right.position(), Position::Real(same));
    }
    assert_eq!(map.end_left().flip(), map.end_right());
}

#[test]
fn right_side_order_and_bounds_matrix() {
    let mut map = BiMap::new();
    for (l, r) in [(1, 40), (2, 10), (3, 30), (4, 20)] {
        map.insert(l, r);
    }
    let rights: Vec<_> = map.iter_right().map(|(_, r)| *r).collect();
    assert_eq!(rights, vec![10, 20, 30, 40]);
    let lefts: Vec<_> = map.iter_right().map(|(l, _)| *l).collect();
    assert_eq!(lefts, vec![2, 4, 3, 1]);
    let back: Vec<_> = map.iter_left().rev().map(|(l, _)| *l).collect();
    assert_eq!(back, vec![4, 3, 2, 1]);
    assert_eq!(map.iter_left().len(), 4);

    assert_eq!(map.value(map.lower_bound_right(&25)), Ok(&30));
    assert_eq!(map.value(map.upper_bound_right(&30)), Ok(&40));
    assert!(map.upper_bound_right(&40).is_end());
    assert_eq!(map.value(map.lower_bound_left(&0)), Ok(&1));
    assert_eq!(map.value(map.upper_bound_left(&2)), Ok(&3));
    assert!(map.lower_bound_left(&5).is_end());
}

#[test]
fn backward_walk_from_end_matrix() {
    let map = abc();
    let mut out = Vec::new();
    let mut it = map.end_right();
    while let Ok(prev) = map.prev(it) {
        out.push(map.value(prev).unwrap().clone());
        it = prev;
    }
    assert_eq!(out, vec!["c", "b", "a"]);
    assert_eq!(it, map.begin_right());
}

#[test]
fn erase_range_matrix() {
    init_tracing();
    let mut map: BiMap<i32, i32> = (0..10).map(|i| (i, 100 - i)).collect();

    let first = map.find_left(&2);
    let last = map.find_left(&6);
    let after = map.erase_left_range(first, last).unwrap();
    assert_eq!(after, last);
    assert_eq!(map.value(after), Ok(&6));
    assert_eq!(
        map.iter_left().map(|(l, _)| *l).collect::<Vec<_>>(),
        vec![0, 1, 6, 7, 8, 9]
    );

    // reversed bounds are rejected without erasing anything
    let first = map.find_left(&8);
    let last = map.find_left(&1);
    assert_eq!(
        map.erase_left_range(first, last),
        Err(BiMapError::InvalidRange { side: "left" })
    );
    assert_eq!(map.len(), 6);

    // right order runs opposite to left order here
    let first = map.begin_right();
    let last = map.find_right(&(100 - 6));
    map.erase_right_range(first, last).unwrap();
    assert_eq!(
        map.iter_left().map(|(l, _)| *l).collect::<Vec<_>>(),
        vec![0, 1, 6]
    );

    let end = map.end_left();
    let begin = map.begin_left();
    assert!(map.erase_left_range(begin, end).unwrap().is_end());
    assert!(map.is_empty());
    assert_consistent(&map);
}

#[test]
fn stale_cursor_after_slot_reuse_matrix() {
    let mut map = abc();
    let two = map.find_left(&2);
    assert!(map.erase_left_key(&2));
    map.insert(4, "d".to_string());
    assert_eq!(map.value(two), Err(BiMapError::StaleCursor { side: "left" }));
    assert_eq!(
        map.next(two.flip()),
        Err(BiMapError::StaleCursor { side: "right" })
    );
    assert_eq!(map.remove_left(&4), Some((4, "d".to_string())));
    assert_eq!(map.remove_left(&4), None);
}

#[test]
fn foreign_cursor_rejected_matrix() {
    let mut a: BiMap<i32, i32> = BiMap::new();
    a.insert(1, 10);
    let mut b: BiMap<i32, i32> = BiMap::new();
    b.insert(99, 990);
    b.insert(100, 1000);

    // same slot index is live in both maps
    let from_a = a.find_left(&1);
    assert_eq!(
        b.erase_left(from_a),
        Err(BiMapError::ForeignCursor { side: "left" })
    );
    assert_eq!(
        b.value(from_a.flip()),
        Err(BiMapError::ForeignCursor { side: "right" })
    );
    assert_eq!(
        b.prev(a.end_left()),
        Err(BiMapError::ForeignCursor { side: "left" })
    );
    assert_eq!(
        b.erase_left_range(b.begin_left(), a.end_left()),
        Err(BiMapError::ForeignCursor { side: "left" })
    );
    assert_eq!(b.len(), 2);
    assert_eq!(pairs(&b), vec![(99, 990), (100, 1000)]);

    // a clone hands out its own cursors
    let copy = a.clone();
    assert_eq!(
        copy.entry(from_a),
        Err(BiMapError::ForeignCursor { side: "left" })
    );
    assert_eq!(copy.value(copy.find_left(&1)), Ok(&1));
}

#[test]
fn cursors_follow_records_through_swap_matrix() {
    let mut a = abc();
    let mut b: BiMap<i32, String> = BiMap::new();
    let two = a.find_left(&2);
    a.swap(&mut b);
    assert_eq!(b.value(two), Ok(&2));
    assert_eq!(a.value(two), Err(BiMapError::ForeignCursor { side: "left" }));
    assert_eq!(b.erase_left(two).map(|c| *b.value(c).unwrap()), Ok(3));
}

#[test]
fn erase_right_cursor_matrix() {
    init_tracing();
    let mut map = BiMap::new();
    for (l, r) in [(1, 30), (2, 10), (3, 20)] {
        map.insert(l, r);
    }

    let ten = map.find_right(&10);
    let after = map.erase_right(ten).unwrap();
    assert_eq!(map.value(after), Ok(&20));
    assert_eq!(map.value(after.flip()), Ok(&3));
    assert!(map.find_left(&2).is_end());
    assert_eq!(
        map.erase_right(ten),
        Err(BiMapError::StaleCursor { side: "right" })
    );

    // erasing the last right entry yields the right end
    let last = map.find_right(&30);
    assert_eq!(map.erase_right(last), Ok(map.end_right()));
    assert!(map.find_left(&1).is_end());
    assert_eq!(pairs(&map), vec![(3, 20)]);
    assert_eq!(
        map.erase_right(map.end_right()),
        Err(BiMapError::EndCursor { side: "right" })
    );
    assert_consistent(&map);
}

#[test]
fn clone_is_independent_matrix() {
    let original = abc();
    let mut copy = original.clone();
    assert_eq!(original, copy);

    copy.insert(4, "d".to_string());
    copy.erase_left_key(&1);
    assert_eq!(original.len(), 3);
    assert_eq!(
        pairs(&original),
        vec![(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]
    );
    assert_ne!(original, copy);
    assert_consistent(&copy);
}

#[test]
fn equality_uses_comparators_matrix() {
    let lt = |x: &i32, y: &i32| x < y;
    let ci = |a: &String, b: &String| a.to_lowercase() < b.to_lowercase();
    let mut a = BiMap::with_comparators(lt, ci);
    let mut b = BiMap::with_comparators(lt, ci);
    a.insert(1, "Hello".to_string());
    b.insert(1, "hello".to_string());
    assert!(a == b);

    // case-insensitive right side rejects a case variant
    assert!(a.insert(2, "HELLO".to_string()).is_end());
    b.insert(2, "world".to_string());
    assert!(a != b);
}

#[test]
fn custom_order_and_seeded_shape_matrix() {
    let desc = |a: &i32, b: &i32| a > b;
    let mut map = BiMap::with_comparators_and_seed(desc, desc, 99);
    for i in 0..5 {
        map.insert(i, i * 10);
    }
    let lefts: Vec<_> = map.iter_left().map(|(l, _)| *l).collect();
    assert_eq!(lefts, vec![4, 3, 2, 1, 0]);
    assert_consistent(&map);

    let mut a: BiMap<i32, i32> = BiMap::with_seed(5);
    let mut b: BiMap<i32, i32> = BiMap::with_seed(5);
    for i in 0..20 {
        a.insert(i, -i);
        b.insert(i, -i);
    }
    assert_eq!(a, b);
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

#[test]
fn move_and_swap_matrix() {
    let mut a = abc();
    let mut b: BiMap<i32, String> = BiMap::new();
    a.swap(&mut b);
    assert!(a.is_empty());
    assert_eq!(b.len(), 3);

    let moved = b;
    assert_eq!(moved.at_left(&3), Ok(&"c".to_string()));
    assert_consistent(&moved);
}

#[test]
fn debug_and_into_iter_matrix() {
    let map: BiMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
    assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two"}"#);
    let mut n = 0;
    for (l, r) in &map {
        n += 1;
        assert_eq!(map.get_by_left(l), Some(r));
    }
    assert_eq!(n, 2);
}
