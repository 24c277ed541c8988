use iris_forms::completion::ExamProgress;
use iris_forms::error::CompletionError;
use iris_forms::SectionId;

#[test]
fn fresh_exam_cannot_complete() {
    let progress = ExamProgress::new();
    assert!(!progress.can_complete());
    assert_eq!(
        progress.missing(),
        vec![
            SectionId::Technique,
            SectionId::Clinique,
            SectionId::Conclusion
        ]
    );
}

#[test]
fn all_mandatory_sections_saved_completes() {
    let mut progress = ExamProgress::new();
    progress.mark_saved(SectionId::Technique);
    progress.mark_saved(SectionId::Clinique);
    assert!(!progress.can_complete());

    progress.mark_saved(SectionId::Conclusion);
    assert!(progress.can_complete());
    assert!(progress.ensure_can_complete().is_ok());
}

#[test]
fn binoculaire_is_not_mandatory() {
    let mut progress = ExamProgress::new();
    for id in [
        SectionId::Technique,
        SectionId::Clinique,
        SectionId::Conclusion,
    ] {
        progress.mark_saved(id);
    }
    assert!(!progress.is_saved(SectionId::Binoculaire));
    assert!(progress.can_complete());
}

#[test]
fn ensure_can_complete_names_the_missing_sections() {
    let mut progress = ExamProgress::new();
    progress.mark_saved(SectionId::Technique);

    let err = progress.ensure_can_complete().unwrap_err();
    let CompletionError::MissingSections(missing) = err;
    assert_eq!(missing, vec![SectionId::Clinique, SectionId::Conclusion]);
}
