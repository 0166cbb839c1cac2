use voicegate::domain::{AudioPayload, ErrorKind};

#[test]
fn given_empty_payload_when_validated_then_invalid_input() {
    let payload = AudioPayload::new(Vec::new(), "audio/wav");

    let error = payload.validate(100).unwrap_err();

    assert_eq!(error.kind, ErrorKind::InvalidInput);
    assert!(!error.retryable);
}

#[test]
fn given_payload_below_minimum_when_validated_then_invalid_input_with_sizes() {
    let payload = AudioPayload::new(vec![0u8; 42], "audio/wav");

    let error = payload.validate(100).unwrap_err();

    assert_eq!(error.kind, ErrorKind::InvalidInput);
    assert!(error.message.contains("42"));
    assert!(error.message.contains("100"));
}

#[test]
fn given_payload_at_minimum_when_validated_then_accepted() {
    let payload = AudioPayload::new(vec![0u8; 100], "audio/wav");

    assert!(payload.validate(100).is_ok());
    assert_eq!(payload.content_type(), "audio/wav");
    assert_eq!(payload.len(), 100);
}
