use slicekit::prelude::*;
use std::collections::VecDeque;

#[test]
fn test_element_at_bounds() {
    let data = vec![1, 2, 3, 4, 5];

    assert_eq!(element_at(&data, 0), Some(&1));
    assert_eq!(element_at(&data, 4), Some(&5));
    assert_eq!(element_at(&data, 5), None);
    assert_eq!(element_at(&data, 10), None);
}

#[test]
fn test_element_at_other_containers() {
    let deque: VecDeque<i32> = VecDeque::from(vec![7, 8, 9]);
    assert_eq!(element_at(&deque, 1), Some(&8));
    assert_eq!(element_at(&deque, 3), None);

    let arr = [10, 20, 30];
    assert_eq!(element_at(&arr, 2), Some(&30));
    assert_eq!(element_at(&arr, 3), None);
}

#[test]
fn test_slice_in_range_whole_span_or_nothing() {
    let data = vec!['a', 'b', 'c', 'd', 'e'];

    // In-bounds span.
    assert_eq!(slice_in_range(&data, 2..4), Some(vec!['c', 'd']));
    // Full container.
    assert_eq!(slice_in_range(&data, 0..5), Some(data.clone()));
    // Empty in-bounds span.
    assert_eq!(slice_in_range(&data, 3..3), Some(vec![]));

    // Entirely outside.
    assert_eq!(slice_in_range(&data, 6..11), None);
    // Partially outside: no best-effort truncation.
    assert_eq!(slice_in_range(&data, 3..9), None);
    // Inverted range.
    assert_eq!(slice_in_range(&data, 4..2), None);
}

#[test]
fn test_element_at_offset_signed() {
    let data = vec![1, 2, 3, 4, 5];

    assert_eq!(element_at_offset(&data, 0), Some(&1));
    assert_eq!(element_at_offset(&data, 1), Some(&2));
    assert_eq!(element_at_offset(&data, -1), Some(&5));
    assert_eq!(element_at_offset(&data, -2), Some(&4));
    assert_eq!(element_at_offset(&data, -5), Some(&1));

    assert_eq!(element_at_offset(&data, 5), None);
    assert_eq!(element_at_offset(&data, -6), None);

    let empty: Vec<i32> = vec![];
    assert_eq!(element_at_offset(&empty, 0), None);
    assert_eq!(element_at_offset(&empty, -1), None);
}

#[test]
fn test_try_swap() {
    let mut data = vec![1, 2, 3, 4, 5];

    assert!(try_swap(&mut data, 3, 0));
    assert_eq!(data, vec![4, 2, 3, 1, 5]);

    // Same index is valid and a no-op.
    assert!(try_swap(&mut data, 2, 2));
    assert_eq!(data, vec![4, 2, 3, 1, 5]);

    // Out of range: refused, slice untouched.
    assert!(!try_swap(&mut data, 1, 5));
    assert!(!try_swap(&mut data, 9, 1));
    assert_eq!(data, vec![4, 2, 3, 1, 5]);
}

#[test]
fn test_chunk_examples() {
    assert_eq!(
        chunk(&vec![0, 2, 4, 7], 2),
        Some(vec![vec![0, 2], vec![4, 7]])
    );
    assert_eq!(
        chunk(&vec![0, 2, 4, 7, 6], 2),
        Some(vec![vec![0, 2], vec![4, 7], vec![6]])
    );
}

#[test]
fn test_chunk_degenerate_inputs() {
    let data = vec![1, 2, 3];
    assert_eq!(chunk(&data, 0), None);

    let empty: Vec<i32> = vec![];
    assert_eq!(chunk(&empty, 3), None);
    assert_eq!(chunk(&empty, 0), None);
}

#[test]
fn test_chunk_coverage() {
    let data: Vec<u32> = (0..23).collect();

    for size in 1..=25 {
        let groups = chunk(&data, size).unwrap();

        // All groups but the last have exactly `size` elements; the last
        // holds the remainder.
        for g in &groups[..groups.len() - 1] {
            assert_eq!(g.len(), size);
        }
        let expected_last = if data.len() % size == 0 {
            size
        } else {
            data.len() % size
        };
        assert_eq!(groups.last().unwrap().len(), expected_last);

        // Concatenation reproduces the input exactly.
        let flat: Vec<u32> = groups.into_iter().flatten().collect();
        assert_eq!(flat, data);
    }
}

#[test]
fn test_for_each_chunk_matches_chunk() {
    let data = vec![0, 2, 4, 7, 6];

    let mut seen = Vec::new();
    for_each_chunk(&data, 2, |group| seen.push(group.to_vec()));
    assert_eq!(seen, chunk(&data, 2).unwrap());
}

#[test]
fn test_for_each_chunk_degenerate_never_invokes() {
    let data = vec![1, 2, 3];
    let mut calls = 0;

    for_each_chunk(&data, 0, |_| calls += 1);
    let empty: Vec<i32> = vec![];
    for_each_chunk(&empty, 2, |_| calls += 1);

    assert_eq!(calls, 0);
}

#[test]
fn test_partition_coverage_and_order() {
    let data = vec![1, 7, 1, 2, 4, 1, 8];
    let (ones, rest) = partition(&data, |&n| n == 1);

    assert_eq!(ones, vec![1, 1, 1]);
    assert_eq!(rest, vec![7, 2, 4, 8]);
    assert_eq!(ones.len() + rest.len(), data.len());
}

#[test]
fn test_partition_runs_predicate_once_per_element() {
    let data = vec![3, 1, 4, 1, 5];
    let mut calls = 0;
    let (_, _) = partition(&data, |&n| {
        calls += 1;
        n > 2
    });
    assert_eq!(calls, data.len());
}

#[test]
fn test_partition_empty_and_one_sided() {
    let empty: Vec<i32> = vec![];
    assert_eq!(partition(&empty, |_| true), (vec![], vec![]));

    let data = vec![2, 4, 6];
    let (even, odd) = partition(&data, |&n| n % 2 == 0);
    assert_eq!(even, data);
    assert!(odd.is_empty());
}

#[test]
fn test_dedup_by_value_first_occurrence() {
    assert_eq!(dedup_by_value(&vec![1, 2, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        dedup_by_value(&vec!["h", "e", "l", "l", "o"]),
        vec!["h", "e", "l", "o"]
    );
    // First occurrence wins, later duplicates dropped wherever they sit.
    assert_eq!(dedup_by_value(&vec![3, 1, 3, 2, 1, 3]), vec![3, 1, 2]);
}

#[test]
fn test_dedup_idempotent() {
    let data = vec![1, 1, 2, 2, 3, 3, 3, 4, 5];
    let once = dedup_by_value(&data);
    let twice = dedup_by_value(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_dedup_by_key_keeps_first_element_per_key() {
    let data = vec![(1, "a"), (2, "b"), (1, "c"), (3, "d"), (2, "e")];

    let by_eq = dedup_by_key(&data, |p| p.0);
    assert_eq!(by_eq, vec![(1, "a"), (2, "b"), (3, "d")]);

    // Hash variant must produce identical output.
    let by_hash = dedup_by_hash_key(&data, |p| p.0);
    assert_eq!(by_hash, by_eq);
}

#[test]
fn test_sorted_by_key_directions() {
    let data = vec![("b", 2), ("a", 1), ("c", 3)];

    assert_eq!(
        sorted_by_key(&data, |p| p.1, true),
        vec![("a", 1), ("b", 2), ("c", 3)]
    );
    assert_eq!(
        sorted_by_key(&data, |p| p.1, false),
        vec![("c", 3), ("b", 2), ("a", 1)]
    );
}

#[test]
fn test_sorted_by_key_stability_both_directions() {
    // Equal keys (the first tuple field) must keep input order in both
    // directions.
    let data = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];

    assert_eq!(
        sorted_by_key(&data, |p| p.0, true),
        vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]
    );
    assert_eq!(
        sorted_by_key(&data, |p| p.0, false),
        vec![(1, 'a'), (1, 'c'), (1, 'e'), (0, 'b'), (0, 'd')]
    );
}

#[test]
fn test_sort_by_key_mut_matches_sorted() {
    let data = vec![5, 3, 9, 1, 3];

    let sorted = sorted_by_key(&data, |&n| n, true);
    let mut in_place = data.clone();
    sort_by_key_mut(&mut in_place, |&n| n, true);

    assert_eq!(in_place, sorted);
    assert_eq!(in_place, vec![1, 3, 3, 5, 9]);
}

#[test]
fn test_sorted_by_optional_key_missing_sinks_last() {
    let data = vec![Some(3), None, Some(1), None, Some(2)];

    assert_eq!(
        sorted_by_optional_key(&data, |v| *v, true),
        vec![Some(1), Some(2), Some(3), None, None]
    );
    // Missing keys sink to the end in the descending direction too.
    assert_eq!(
        sorted_by_optional_key(&data, |v| *v, false),
        vec![Some(3), Some(2), Some(1), None, None]
    );
}

#[test]
fn test_sorted_like_reference_order() {
    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: u32,
    }

    let data = vec![Item { key: 1 }, Item { key: 2 }, Item { key: 3 }];
    let ordered = sorted_like(&data, &[3, 1, 2], |i| i.key);

    assert_eq!(
        ordered,
        vec![Item { key: 3 }, Item { key: 1 }, Item { key: 2 }]
    );
}

#[test]
fn test_sorted_like_missing_keys_go_last_in_input_order() {
    let data = vec![(40, 'a'), (10, 'b'), (50, 'c'), (20, 'd'), (60, 'e')];

    // 40 and 60 are absent from the reference: they follow all matched
    // elements and keep their relative input order.
    let ordered = sorted_like(&data, &[20, 10, 50], |p| p.0);
    assert_eq!(
        ordered,
        vec![(20, 'd'), (10, 'b'), (50, 'c'), (40, 'a'), (60, 'e')]
    );
}

#[test]
fn test_sorted_like_duplicate_reference_key_first_position_wins() {
    let data = vec![(2, 'x'), (1, 'y')];

    // The reference repeats key 1; its first position (index 0) decides.
    let ordered = sorted_like(&data, &[1, 2, 1], |p| p.0);
    assert_eq!(ordered, vec![(1, 'y'), (2, 'x')]);
}

#[test]
fn test_char_at() {
    assert_eq!(char_at("Hello World!", 3), Some('l'));
    assert_eq!(char_at("Hello World!", 20), None);
    assert_eq!(char_at("", 0), None);
}

#[test]
fn test_slice_chars() {
    assert_eq!(slice_chars("Hello World!", 6..11), Some("World"));
    assert_eq!(slice_chars("Hello World!", 21..110), None);
    assert_eq!(slice_chars("Hello World!", 6..20), None);
    assert_eq!(slice_chars("Hello World!", 0..0), Some(""));
}

#[test]
fn test_text_counts_characters_not_bytes() {
    // "héllo" is 6 bytes but 5 characters.
    let s = "héllo";

    assert_eq!(char_at(s, 1), Some('é'));
    assert_eq!(slice_chars(s, 1..3), Some("él"));
    assert_eq!(slice_chars(s, 0..5), Some(s));
    assert_eq!(slice_chars(s, 0..6), None);
}

#[test]
fn test_slicing_clamps_length_to_end() {
    assert_eq!(slicing("Hello World", 6, 5), Some("World"));
    assert_eq!(slicing("Hello World", 6, 50), Some("World"));
    assert_eq!(slicing("Hello World", 0, 0), Some(""));
    assert_eq!(slicing("Hello World", 11, 1), None);
    assert_eq!(slicing("Hello World", 50, 5), None);
}
