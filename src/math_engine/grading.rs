use tracing::debug;

use crate::math_engine::{
    error::MathError,
    models::{DifficultyLevel, GradeResult, Question},
};

/// Points for a correct answer: `level * 10 + 10`.
pub fn points_for(level: DifficultyLevel) -> u32 {
    u32::from(level.get()) * 10 + 10
}

/// Grade `selected` against `question`. The selection must be one of the
/// question's options.
pub fn grade_answer(question: &Question, selected: u64) -> Result<GradeResult, MathError> {
    if !question.is_option(selected) {
        return Err(MathError::InvalidSelection { selected });
    }

    let is_correct = selected == question.correct_answer;
    let points_awarded = if is_correct { points_for(question.difficulty) } else { 0 };
    let mistake = question.distractor_for(selected).map(|d| d.pattern);

    debug!(
        question_id = %question.question_id, selected, is_correct, points_awarded,
        "graded answer"
    );

    Ok(GradeResult {
        is_correct,
        selected,
        correct_answer: question.correct_answer,
        points_awarded,
        mistake,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_engine::generator::generate_question;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn points_scale_with_level() {
        let pts: Vec<u32> = DifficultyLevel::all().map(points_for).collect();
        assert_eq!(pts, vec![20, 30, 40, 50, 60]);
    }

    #[test]
    fn correct_answer_earns_points() {
        let mut rng = StdRng::seed_from_u64(5);
        let q = generate_question(3, &mut rng).unwrap();
        let r = grade_answer(&q, q.correct_answer).unwrap();
        assert!(r.is_correct);
        assert_eq!(r.points_awarded, 40);
        assert_eq!(r.mistake, None);
        assert_eq!(r.correct_answer, q.correct_answer);
    }

    #[test]
    fn distractor_reports_its_mistake() {
        let mut rng = StdRng::seed_from_u64(6);
        let q = generate_question(2, &mut rng).unwrap();
        for d in &q.distractors {
            let r = grade_answer(&q, d.value).unwrap();
            assert!(!r.is_correct);
            assert_eq!(r.points_awarded, 0);
            assert_eq!(r.mistake, Some(d.pattern));
        }
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = generate_question(1, &mut rng).unwrap();
        let bogus = (0..).find(|v| !q.is_option(*v)).unwrap();
        assert_eq!(grade_answer(&q, bogus), Err(MathError::InvalidSelection { selected: bogus }));
    }
}
