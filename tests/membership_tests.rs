
use job_lineage::error::LineageError;
use job_lineage::model::membership::resolve_with_label;
use job_lineage::model::{resolve, JsonConverter};
use test_harness::{child_uid, cronjob_uid, job, job_with_label, malformed, names};

#[test]
fn test_no_parent_uid_passes_everything_through() {
    let candidates = vec![
        job("nightly-1", Some("abc")),
        job("other-2", None),
        malformed("broken-3"),
    ];

    let out = resolve(candidates.clone(), None, "nightly", &JsonConverter).unwrap();
    assert_eq!(out, candidates);

    // An empty uid behaves like an absent one, even with an empty parent name
    let out = resolve(candidates.clone(), Some(""), "", &JsonConverter).unwrap();
    assert_eq!(out, candidates);
}

#[test]
fn test_zero_candidates() {
    let out = resolve(Vec::new(), Some("a-b-c"), "nightly", &JsonConverter).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_name_prefix_is_required() {
    let uid = "11111111-2222-owner-token";
    let candidates = vec![
        job("nightly-28391021", Some("abc-owner-token-xyz")),
        job("other-28391022", Some("abc-owner-token-xyz")),
    ];

    let out = resolve(candidates, Some(uid), "nightly", &JsonConverter).unwrap();
    assert_eq!(names(&out), vec!["nightly-28391021"]);
}

#[test]
fn test_controller_uid_is_substring_match() {
    let uid = "a-b-c-d-e";
    let candidates = vec![
        job("nightly-1", Some("xyz-c-d-e-123")),
        job("nightly-2", Some("c-d-f")),
        job("nightly-3", Some("c-d-e")),
    ];

    let out = resolve(candidates, Some(uid), "nightly", &JsonConverter).unwrap();
    assert_eq!(names(&out), vec!["nightly-1", "nightly-3"]);
}

#[test]
fn test_missing_controller_uid_is_excluded() {
    let uid = "a-b-c-d-e";
    let candidates = vec![job("nightly-1", None), job("nightly-2", Some("c-d-e"))];

    let out = resolve(candidates, Some(uid), "nightly", &JsonConverter).unwrap();
    assert_eq!(names(&out), vec!["nightly-2"]);
}

#[test]
fn test_job_without_spec_is_excluded() {
    let ar = test_harness::job_resource();
    let bare = kube::core::DynamicObject::new("nightly-1", &ar).within("jobs");

    let out = resolve(vec![bare], Some("a-b-c"), "nightly", &JsonConverter).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_result_is_ordered_subset() {
    let parent = cronjob_uid();
    let other = cronjob_uid();
    let candidates = vec![
        job("nightly-5", Some(&child_uid(&parent))),
        job("nightly-4", Some(&child_uid(&other))),
        job("hourly-3", Some(&child_uid(&parent))),
        job("nightly-2", Some(&child_uid(&parent))),
        job("nightly-1", None),
        job("nightly-0", Some(&child_uid(&parent))),
    ];

    let out = resolve(candidates.clone(), Some(&parent), "nightly", &JsonConverter).unwrap();

    assert_eq!(names(&out), vec!["nightly-5", "nightly-2", "nightly-0"]);
    let mut last = None;
    for obj in &out {
        let pos = candidates.iter().position(|c| c == obj).unwrap();
        assert!(last.map_or(true, |l| pos > l), "order not preserved");
        last = Some(pos);
    }
}

#[test]
fn test_empty_parent_name_matches_nothing() {
    let candidates = vec![
        job("nightly-1", Some("c-d-e")),
        job("hourly-1", Some("c-d-e")),
    ];

    let out = resolve(candidates, Some("a-b-c-d-e"), "", &JsonConverter).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_empty_first_token_matches_empty_parent_name() {
    let candidates = vec![job("-1", Some("c-d-e")), job("nightly-1", Some("c-d-e"))];

    let out = resolve(candidates, Some("a-b-c-d-e"), "", &JsonConverter).unwrap();
    assert_eq!(names(&out), vec!["-1"]);
}

#[test]
fn test_short_parent_uid_matches_any_labelled_job() {
    let candidates = vec![
        job("nightly-1", Some("anything")),
        job("nightly-2", None),
    ];

    let out = resolve(candidates, Some("solo"), "nightly", &JsonConverter).unwrap();
    assert_eq!(names(&out), vec!["nightly-1"]);
}

#[test]
fn test_conversion_failure_fails_the_batch() {
    let candidates = vec![
        job("nightly-1", Some("c-d-e")),
        malformed("nightly-2"),
        job("nightly-3", Some("c-d-e")),
    ];

    let err = resolve(candidates, Some("a-b-c-d-e"), "nightly", &JsonConverter).unwrap_err();
    match err {
        LineageError::Conversion { name, .. } => assert_eq!(name, "nightly-2"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_conversion_failure_on_non_matching_name_still_fails() {
    // Conversion happens before the name check
    let candidates = vec![malformed("other-1"), job("nightly-1", Some("c-d-e"))];

    let result = resolve(candidates, Some("a-b-c-d-e"), "nightly", &JsonConverter);
    assert!(matches!(result, Err(LineageError::Conversion { .. })));
}

#[test]
fn test_custom_selector_label() {
    let label = "batch.kubernetes.io/controller-uid";
    let candidates = vec![
        job_with_label("nightly-1", label, "xyz-c-d-e"),
        job("nightly-2", Some("xyz-c-d-e")),
    ];

    let out = resolve_with_label(
        candidates,
        Some("a-b-c-d-e"),
        "nightly",
        label,
        &JsonConverter,
    )
    .unwrap();
    assert_eq!(names(&out), vec!["nightly-1"]);
}
