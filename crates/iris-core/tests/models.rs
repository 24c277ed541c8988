use iris_core::error::CoreError;
use iris_core::models::{Exam, ExamKind, ExamStatus};
use uuid::Uuid;

fn exam() -> Exam {
    Exam {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        kind: ExamKind::Adulte,
        status: ExamStatus::EnCours,
        date_examen: jiff::civil::date(2025, 3, 14),
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn complete_marks_exam_done() {
    let mut exam = exam();
    let at = jiff::Timestamp::UNIX_EPOCH + jiff::Span::new().hours(1);
    exam.complete(at).unwrap();
    assert_eq!(exam.status, ExamStatus::Termine);
    assert_eq!(exam.updated_at, at);
}

#[test]
fn completion_is_one_way() {
    let mut exam = exam();
    exam.complete(jiff::Timestamp::UNIX_EPOCH).unwrap();
    let err = exam.complete(jiff::Timestamp::UNIX_EPOCH).unwrap_err();
    assert!(matches!(err, CoreError::ExamAlreadyCompleted(id) if id == exam.id));
}
