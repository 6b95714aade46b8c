use candidate_sync::models::candidate::{Candidate, CandidateStatus};
use candidate_sync::services::filter::{filter_candidates, StatusFilter};
use chrono::{TimeZone, Utc};

fn candidate(id: i64, name: &str, status: CandidateStatus) -> Candidate {
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    Candidate {
        id,
        name: name.to_string(),
        position: "Engineer".to_string(),
        status,
        skills: Vec::new(),
        created_at: ts,
        updated_at: ts,
    }
}

fn sample() -> Vec<Candidate> {
    vec![
        candidate(1, "John Doe", CandidateStatus::Interview),
        candidate(2, "Jane Smith", CandidateStatus::Active),
        candidate(3, "Johnny Cash", CandidateStatus::Rejected),
    ]
}

#[test]
fn empty_collection_yields_empty_result() {
    let result = filter_candidates(&[], "john", StatusFilter::All);
    assert!(result.is_empty());
}

#[test]
fn query_matches_name_case_insensitively() {
    let candidates = vec![
        candidate(1, "John Doe", CandidateStatus::Interview),
        candidate(2, "Jane Smith", CandidateStatus::Active),
    ];

    let result = filter_candidates(&candidates, "john", StatusFilter::All);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);

    let upper = filter_candidates(&candidates, "JOHN", StatusFilter::All);
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].id, 1);
}

#[test]
fn empty_query_passes_every_name() {
    let result = filter_candidates(&sample(), "", StatusFilter::All);
    assert_eq!(result.len(), 3);
}

#[test]
fn status_filter_applies_independently_of_query() {
    let result = filter_candidates(
        &sample(),
        "",
        StatusFilter::Only(CandidateStatus::Interview),
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
    assert_eq!(result[0].status, CandidateStatus::Interview);
}

#[test]
fn query_and_status_combine_conjunctively() {
    let result = filter_candidates(
        &sample(),
        "john",
        StatusFilter::Only(CandidateStatus::Rejected),
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 3);
}

#[test]
fn output_preserves_input_order() {
    let candidates = vec![
        candidate(5, "John A", CandidateStatus::Active),
        candidate(2, "John B", CandidateStatus::Active),
        candidate(9, "John C", CandidateStatus::Active),
    ];

    let result = filter_candidates(&candidates, "john", StatusFilter::All);

    let ids: Vec<i64> = result.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![5, 2, 9]);
}

#[test]
fn no_trimming_is_applied_to_the_query() {
    let candidates = vec![candidate(1, "John Doe", CandidateStatus::Active)];

    // A padded query is taken literally and matches nothing.
    let result = filter_candidates(&candidates, " john ", StatusFilter::All);
    assert!(result.is_empty());
}

#[test]
fn status_filter_round_trips_from_str() {
    assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!(
        "interview".parse::<StatusFilter>().unwrap(),
        StatusFilter::Only(CandidateStatus::Interview)
    );
    assert!("archived".parse::<StatusFilter>().is_err());
}
