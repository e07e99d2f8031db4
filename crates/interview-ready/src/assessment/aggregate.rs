use super::answers::Answers;
use super::domain::{AssessmentResult, Category, CategoryScore, ReadinessTier, MAX_SCORE};
use super::plan::generate_weekly_plan;
use super::rules::{rules_for, score_category};

/// Number of strengths and gaps surfaced on the summary.
pub const HIGHLIGHT_LIMIT: usize = 4;

/// Scores a complete set of answers.
///
/// Pure and total: identical answers always produce an identical result.
pub fn calculate_results(answers: &Answers) -> AssessmentResult {
    let [technical, resume, communication, portfolio] =
        Category::ordered().map(|category| score_category(rules_for(category), answers));

    let overall_score = overall_score([
        (Category::Technical, &technical),
        (Category::Resume, &resume),
        (Category::Communication, &communication),
        (Category::Portfolio, &portfolio),
    ]);
    let ordered = [&technical, &resume, &communication, &portfolio];

    let top_strengths = first_highlights(ordered.iter().map(|score| &score.strengths));
    let critical_gaps = first_highlights(ordered.iter().map(|score| &score.improvements));
    let weekly_plan = generate_weekly_plan(ordered);

    AssessmentResult {
        overall_score,
        readiness_level: ReadinessTier::from_score(overall_score),
        time_to_ready: time_to_ready(overall_score).to_string(),
        top_strengths,
        critical_gaps,
        weekly_plan,
        technical,
        resume,
        communication,
        portfolio,
    }
}

/// Weighted sum of the category percentages, rounded half up.
pub(crate) fn overall_score(scores: [(Category, &CategoryScore); 4]) -> u8 {
    let weighted = scores.iter().fold(0.0_f64, |total, (category, score)| {
        total + f64::from(score.percentage) * category.weight()
    });
    weighted.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// First entries in category order; this is truncation, not ranking.
fn first_highlights<'a, I>(lists: I) -> Vec<String>
where
    I: Iterator<Item = &'a Vec<String>>,
{
    lists.flatten().take(HIGHLIGHT_LIMIT).cloned().collect()
}

pub fn time_to_ready(overall_score: u8) -> &'static str {
    if overall_score >= 85 {
        "1-2 weeks of polish"
    } else if overall_score >= 70 {
        "2-4 weeks of focused preparation"
    } else if overall_score >= 50 {
        "1-2 months of dedicated effort"
    } else if overall_score >= 30 {
        "2-3 months of comprehensive preparation"
    } else {
        "3-4 months of intensive preparation"
    }
}
