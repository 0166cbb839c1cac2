use voicegate::domain::JobStatus;

#[test]
fn given_status_strings_when_parsed_then_round_trip() {
    for status in [
        JobStatus::Queued,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Error,
    ] {
        let parsed: JobStatus = status.as_str().parse().unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn given_unknown_status_string_when_parsed_then_error() {
    assert!("cancelled".parse::<JobStatus>().is_err());
}

#[test]
fn given_statuses_when_checked_then_only_completed_and_error_are_terminal() {
    assert!(!JobStatus::Queued.is_terminal());
    assert!(!JobStatus::Processing.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Error.is_terminal());
}
