use tawau::application::services::{Intake, IntakeError};

const TEN_MIB: usize = 10 * 1024 * 1024;

#[test]
fn given_file_under_limit_when_checked_then_passes() {
    let intake = Intake::new(TEN_MIB);

    assert!(intake.check(&vec![0u8; 1024]).is_ok());
}

#[test]
fn given_file_exactly_at_limit_when_checked_then_passes() {
    let intake = Intake::new(TEN_MIB);

    assert!(intake.check(&vec![0u8; TEN_MIB]).is_ok());
}

#[test]
fn given_file_over_limit_when_checked_then_rejects_with_file_too_large() {
    let intake = Intake::new(TEN_MIB);

    let error = intake.check(&vec![0u8; TEN_MIB + 1]).unwrap_err();

    assert!(matches!(error, IntakeError::FileTooLarge { .. }));
    assert_eq!(
        error.to_string(),
        "File too large! Please upload a file smaller than 10MB."
    );
}
