//! Cross-function properties of the collection utilities.

mod common;

use common::{create_test_i32_data, create_test_roster, employee};
use extkit_utils::{
    Selector, SliceExt, group_by, intersection, max_by, min_by, partition, without_duplicates,
    without_duplicates_by, zip,
};
use std::collections::HashSet;

#[test]
fn test_dedup_output_has_no_repeats() {
    let data = create_test_i32_data();
    let unique = without_duplicates(&data);

    let distinct: HashSet<_> = unique.iter().collect();
    assert_eq!(distinct.len(), unique.len());
    assert_eq!(unique, vec![5, 3, 1, 9, 0, 7, 2]);
}

#[test]
fn test_dedup_is_subsequence_in_first_occurrence_order() {
    let data = create_test_i32_data();
    let unique = without_duplicates(&data);

    for window in unique.windows(2) {
        let first = data.iter().position(|x| *x == window[0]).unwrap();
        let second = data.iter().position(|x| *x == window[1]).unwrap();
        assert!(first < second);
    }
}

#[test]
fn test_dedup_is_idempotent() {
    let data = create_test_i32_data();
    let once = without_duplicates(&data);
    let twice = without_duplicates(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_dedup_leaves_input_untouched() {
    let data = create_test_i32_data();
    let before = data.clone();
    let _ = without_duplicates(&data);
    assert_eq!(data, before);
}

#[test]
fn test_dedup_by_name_keeps_first_record() {
    let roster = create_test_roster();
    let unique = without_duplicates_by(&roster, |e| e.name.clone());

    assert_eq!(unique.len(), 5);
    assert_eq!(unique[0], employee("ada", "core", 3));
}

#[test]
fn test_groups_partition_the_input() {
    let roster = create_test_roster();
    let groups = group_by(&roster, "team").unwrap();

    assert_eq!(
        groups.keys().collect::<Vec<_>>(),
        vec!["core", "infra", "tools"]
    );

    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, roster.len());

    for (team, members) in groups.iter() {
        assert!(members.iter().all(|e| e.team == team));
    }
}

#[test]
fn test_group_by_property_and_function_agree() {
    let roster = create_test_roster();
    let by_property = group_by(&roster, "level").unwrap();
    let by_function =
        group_by(&roster, Selector::function(|e: &common::Employee| e.level.to_string())).unwrap();

    assert_eq!(by_property, by_function);
    assert_eq!(by_property.get("4").map(<[_]>::len), Some(2));
}

#[test]
fn test_group_by_through_extension_trait() {
    let roster = create_test_roster();
    let groups = roster.group_by(String::from("team")).unwrap();
    assert!(groups.contains_key("infra"));
}

#[test]
fn test_intersection_is_subset_of_both() {
    let left = create_test_i32_data();
    let right = vec![9, 1, 42];
    let common = intersection(&left, &right);

    assert_eq!(common, vec![1, 9, 1, 9]);
    assert!(common.iter().all(|x| left.contains(x) && right.contains(x)));
}

#[test]
fn test_zip_length_is_minimum() {
    let roster = create_test_roster();
    let ranks = [1, 2, 3];
    let zipped = zip(&roster, &ranks);

    assert_eq!(zipped.len(), 3);
    for (i, (person, rank, index)) in zipped.iter().enumerate() {
        assert_eq!(*index, i);
        assert_eq!(person, &roster[i]);
        assert_eq!(*rank, ranks[i]);
    }
}

#[test]
fn test_partition_preserves_every_element() {
    let data = create_test_i32_data();
    let (big, small) = partition(&data, |&x| x >= 5, |&x| x);

    assert_eq!(big.len() + small.len(), data.len());
    assert_eq!(big, vec![5, 5, 9, 7, 9]);
    assert_eq!(small, vec![3, 1, 3, 0, 1, 2]);
}

#[test]
fn test_min_and_max_by_level() {
    let roster = create_test_roster();

    let senior = max_by(&roster, |e, _| e.level).unwrap();
    assert_eq!(senior.name, "ada");
    assert_eq!(senior.level, 5);

    let junior = min_by(&roster, |e| e.level).unwrap();
    assert_eq!(junior.name, "barbara");

    let first_of_four = SliceExt::max_by(&roster[..5], |e, _| e.level).unwrap();
    assert_eq!(first_of_four.name, "grace");
}
