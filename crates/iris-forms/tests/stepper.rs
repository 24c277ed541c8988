use iris_forms::error::StepperError;
use iris_forms::stepper::{Step, Stepper};

#[test]
fn starts_at_general() {
    let stepper = Stepper::new();
    assert_eq!(stepper.current(), Step::General);
    assert!(stepper.is_first());
    assert!(!stepper.can_submit());
}

#[test]
fn previous_fails_on_first_step() {
    let mut stepper = Stepper::new();
    assert_eq!(stepper.previous(), Err(StepperError::AtFirstStep));
    assert_eq!(stepper.current(), Step::General);
}

#[test]
fn next_walks_the_steps_in_order() {
    let mut stepper = Stepper::new();
    assert_eq!(stepper.next(), Ok(Step::Technique));
    assert_eq!(stepper.next(), Ok(Step::Binoculaire));
    assert_eq!(stepper.next(), Ok(Step::Clinique));
    assert_eq!(stepper.next(), Ok(Step::Recapitulatif));
    assert!(stepper.is_last());
}

#[test]
fn next_fails_on_last_step() {
    let mut stepper = Stepper::new();
    for _ in 0..4 {
        stepper.next().unwrap();
    }
    assert_eq!(stepper.next(), Err(StepperError::AtLastStep));
    assert_eq!(stepper.current(), Step::Recapitulatif);
}

#[test]
fn submit_only_available_on_review_step() {
    let mut stepper = Stepper::new();
    for _ in 0..3 {
        stepper.next().unwrap();
        assert!(!stepper.can_submit());
    }
    stepper.next().unwrap();
    assert!(stepper.can_submit());
}

#[test]
fn previous_moves_back_one_step() {
    let mut stepper = Stepper::new();
    stepper.next().unwrap();
    stepper.next().unwrap();
    assert_eq!(stepper.previous(), Ok(Step::Technique));
    assert_eq!(stepper.previous(), Ok(Step::General));
    assert_eq!(stepper.previous(), Err(StepperError::AtFirstStep));
}
