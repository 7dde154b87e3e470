//! Exam scoring.
//!
//! Turns a completed answer sheet into an [`ExamResult`]: total score,
//! accuracy, per-topic performance, weak-area detection, and a feedback
//! message tiered by accuracy.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::ExamError;
use crate::generator::FALLBACK_TOPIC;
use crate::model::{Answer, Exam, ExamResult, ExamStatus, ExamType, TopicScore};

/// Topics scoring below this correctness ratio are reported as weak areas.
pub const WEAK_AREA_THRESHOLD: f64 = 0.6;

/// Fraction of points awarded for a substantive text answer. A length-based
/// proxy for human/AI grading; no semantic evaluation occurs.
pub const PARTIAL_CREDIT: f64 = 0.7;

/// Text answers must exceed this many characters to earn partial credit.
pub const MIN_TEXT_ANSWER_CHARS: usize = 20;

/// Per-topic running tally. `correct` is fractional because text answers
/// contribute 0.7 per question.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    correct: f64,
    total: u32,
}

/// Score a submitted exam.
///
/// The exam must be in-progress; scoring a pending or completed exam is a
/// caller error. Missing answers are treated as incorrect, not as errors.
pub fn score(exam: &Exam, answers: &HashMap<String, Answer>) -> Result<ExamResult, ExamError> {
    if exam.status != ExamStatus::InProgress {
        return Err(ExamError::invalid_state(
            ExamStatus::InProgress,
            exam.status,
        ));
    }

    let mut total_score = 0.0f64;
    let mut total_points = 0u32;
    // First-appearance order matters for weak-area reporting.
    let mut topic_order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for question in &exam.questions {
        total_points += question.points;
        let topic = question
            .topic
            .clone()
            .unwrap_or_else(|| FALLBACK_TOPIC.to_string());
        if !tallies.contains_key(&topic) {
            topic_order.push(topic.clone());
        }
        let tally = tallies.entry(topic).or_default();
        tally.total += 1;

        match question.exam_type {
            ExamType::Objective => {
                // Full credit iff the selected index matches exactly.
                if let Some(Answer::Choice(selected)) = answers.get(&question.id) {
                    if Some(*selected) == question.correct_option {
                        total_score += f64::from(question.points);
                        tally.correct += 1.0;
                    }
                }
            }
            ExamType::ShortAnswer | ExamType::Essay => {
                if let Some(Answer::Text(text)) = answers.get(&question.id) {
                    if text.chars().count() > MIN_TEXT_ANSWER_CHARS {
                        total_score += f64::from(question.points) * PARTIAL_CREDIT;
                        tally.correct += PARTIAL_CREDIT;
                    }
                }
            }
        }
    }

    let accuracy = if total_points == 0 {
        0
    } else {
        (total_score * 100.0 / f64::from(total_points)).round() as u32
    };

    let weak_areas: Vec<String> = topic_order
        .iter()
        .filter(|topic| {
            let tally = &tallies[*topic];
            tally.correct / f64::from(tally.total) < WEAK_AREA_THRESHOLD
        })
        .cloned()
        .collect();

    let topic_performance: Vec<TopicScore> = topic_order
        .iter()
        .map(|topic| {
            let tally = &tallies[topic];
            TopicScore {
                topic: topic.clone(),
                // Rounded for reporting only; accuracy uses the raw score.
                correct: tally.correct.round() as u32,
                total: tally.total,
            }
        })
        .collect();

    tracing::info!(
        exam_id = %exam.id,
        score = total_score,
        total_points,
        accuracy,
        weak_areas = weak_areas.len(),
        "scored exam"
    );

    Ok(ExamResult {
        exam_id: exam.id.clone(),
        score: total_score,
        total_points,
        accuracy,
        topic_performance,
        feedback: feedback_for(accuracy, &weak_areas),
        weak_areas,
        completed_at: Utc::now(),
    })
}

/// Select the feedback message for an accuracy percentage. Tier boundaries
/// are inclusive lower bounds at 90, 75, and 60.
pub fn feedback_for(accuracy: u32, _weak_areas: &[String]) -> String {
    if accuracy >= 90 {
        "Excellent work! You have demonstrated a strong understanding of the material.".to_string()
    } else if accuracy >= 75 {
        "Good job! You have a solid grasp of most concepts. Focus on the weak areas to improve further."
            .to_string()
    } else if accuracy >= 60 {
        "Fair performance. Review the material, especially in the weak areas, to strengthen your understanding."
            .to_string()
    } else {
        "You may need to review the course material more thoroughly. Focus on understanding the core concepts."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, ExamConfig, Question, TimeIntensity};

    fn objective_question(id: &str, correct: usize, topic: &str) -> Question {
        Question {
            id: id.into(),
            exam_type: ExamType::Objective,
            prompt: "?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option: Some(correct),
            points: 1,
            topic: Some(topic.into()),
        }
    }

    fn text_question(id: &str, exam_type: ExamType, topic: &str) -> Question {
        Question {
            id: id.into(),
            exam_type,
            prompt: "?".into(),
            options: vec![],
            correct_option: None,
            points: exam_type.points_per_question(),
            topic: Some(topic.into()),
        }
    }

    fn in_progress_exam(questions: Vec<Question>) -> Exam {
        let exam_type = questions
            .first()
            .map(|q| q.exam_type)
            .unwrap_or(ExamType::Objective);
        let mut exam = Exam {
            id: "exam-1".into(),
            title: "Test".into(),
            material_id: None,
            config: ExamConfig {
                exam_type,
                difficulty: Difficulty::Intermediate,
                time_intensity: TimeIntensity::Moderate,
                duration_minutes: 30,
                question_count: questions.len() as u32,
            },
            questions,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            status: ExamStatus::Pending,
        };
        exam.start(Utc::now()).unwrap();
        exam
    }

    #[test]
    fn objective_strict_equality() {
        let exam = in_progress_exam(vec![
            objective_question("q1", 0, "A"),
            objective_question("q2", 1, "A"),
            objective_question("q3", 2, "A"),
        ]);
        let mut answers = HashMap::new();
        answers.insert("q1".to_string(), Answer::Choice(0)); // correct
        answers.insert("q2".to_string(), Answer::Choice(3)); // wrong
        answers.insert("q3".to_string(), Answer::Choice(0)); // wrong

        let result = score(&exam, &answers).unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.total_points, 3);
        assert_eq!(result.accuracy, 33);
    }

    #[test]
    fn text_answer_partial_credit_by_length() {
        let exam = in_progress_exam(vec![
            text_question("q1", ExamType::ShortAnswer, "A"),
            text_question("q2", ExamType::ShortAnswer, "B"),
        ]);
        let mut answers = HashMap::new();
        // 25 characters: earns 2 × 0.7 = 1.4 points.
        answers.insert("q1".to_string(), Answer::Text("a".repeat(25)));
        // 10 characters: earns nothing.
        answers.insert("q2".to_string(), Answer::Text("a".repeat(10)));

        let result = score(&exam, &answers).unwrap();
        assert!((result.score - 1.4).abs() < f64::EPSILON);
        assert_eq!(result.total_points, 4);
        // Topic A tally: 0.7/1 → rounds to 1 for reporting.
        assert_eq!(
            result.topic_performance,
            vec![
                TopicScore {
                    topic: "A".into(),
                    correct: 1,
                    total: 1
                },
                TopicScore {
                    topic: "B".into(),
                    correct: 0,
                    total: 1
                },
            ]
        );
    }

    #[test]
    fn exactly_20_chars_earns_nothing() {
        let exam = in_progress_exam(vec![text_question("q1", ExamType::Essay, "A")]);
        let mut answers = HashMap::new();
        answers.insert("q1".to_string(), Answer::Text("a".repeat(20)));

        let result = score(&exam, &answers).unwrap();
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn missing_answers_are_incorrect_not_errors() {
        let exam = in_progress_exam(vec![
            objective_question("q1", 0, "A"),
            text_question("q2", ExamType::Essay, "A"),
        ]);
        let result = score(&exam, &HashMap::new()).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.total_points, 6);
        assert_eq!(result.accuracy, 0);
    }

    #[test]
    fn weak_area_threshold() {
        // Topic A: 1/2 correct (0.5) → weak. Topic B: 2/3 (0.667) → not weak.
        let exam = in_progress_exam(vec![
            objective_question("a1", 0, "A"),
            objective_question("a2", 0, "A"),
            objective_question("b1", 0, "B"),
            objective_question("b2", 0, "B"),
            objective_question("b3", 0, "B"),
        ]);
        let mut answers = HashMap::new();
        answers.insert("a1".to_string(), Answer::Choice(0));
        answers.insert("b1".to_string(), Answer::Choice(0));
        answers.insert("b2".to_string(), Answer::Choice(0));

        let result = score(&exam, &answers).unwrap();
        assert_eq!(result.weak_areas, vec!["A".to_string()]);
    }

    #[test]
    fn weak_areas_listed_in_first_appearance_order() {
        let exam = in_progress_exam(vec![
            objective_question("c1", 0, "C"),
            objective_question("a1", 0, "A"),
            objective_question("b1", 0, "B"),
        ]);
        let result = score(&exam, &HashMap::new()).unwrap();
        assert_eq!(
            result.weak_areas,
            vec!["C".to_string(), "A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn untagged_questions_tally_under_general() {
        let mut q = objective_question("q1", 0, "x");
        q.topic = None;
        let exam = in_progress_exam(vec![q]);
        let result = score(&exam, &HashMap::new()).unwrap();
        assert_eq!(result.topic_performance[0].topic, "General");
    }

    #[test]
    fn empty_exam_accuracy_is_zero() {
        let exam = in_progress_exam(vec![]);
        let result = score(&exam, &HashMap::new()).unwrap();
        assert_eq!(result.total_points, 0);
        assert_eq!(result.accuracy, 0);
    }

    #[test]
    fn scoring_requires_in_progress() {
        let mut exam = in_progress_exam(vec![objective_question("q1", 0, "A")]);
        exam.status = ExamStatus::Pending;
        assert!(matches!(
            score(&exam, &HashMap::new()),
            Err(ExamError::InvalidState { .. })
        ));

        exam.status = ExamStatus::Completed;
        assert!(matches!(
            score(&exam, &HashMap::new()),
            Err(ExamError::InvalidState { .. })
        ));
    }

    #[test]
    fn feedback_tiers() {
        let none: Vec<String> = vec![];
        assert!(feedback_for(95, &none).starts_with("Excellent work!"));
        assert!(feedback_for(80, &none).starts_with("Good job!"));
        assert!(feedback_for(65, &none).starts_with("Fair performance."));
        assert!(feedback_for(40, &none).starts_with("You may need to review"));
        // Boundaries are inclusive lower bounds.
        assert!(feedback_for(90, &none).starts_with("Excellent work!"));
        assert!(feedback_for(75, &none).starts_with("Good job!"));
        assert!(feedback_for(60, &none).starts_with("Fair performance."));
        assert!(feedback_for(59, &none).starts_with("You may need to review"));
    }
}
