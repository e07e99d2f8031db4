use crate::assessment::{
    ActionItem, Answers, CategoryScore, Priority, ProjectCount, Rating, ScoreLevel,
};

pub(super) fn rating(value: u8) -> Rating {
    Rating::new(value).expect("rating within scale")
}

pub(super) fn projects(value: u8) -> ProjectCount {
    ProjectCount::new(value).expect("project count within range")
}

pub(super) fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Lowest possible answers: every flag off, every rating at 1.
pub(super) fn blank_answers() -> Answers {
    Answers {
        programming_languages: Vec::new(),
        frameworks: Vec::new(),
        dsa_level: rating(1),
        system_design: rating(1),
        has_resume: false,
        resume_quality: rating(1),
        has_quantified_achievements: false,
        has_relevant_experience: false,
        is_one_page: false,
        communication_confidence: rating(1),
        can_explain_projects: false,
        has_prepped_stories: false,
        behavioral_ready: false,
        has_portfolio: false,
        has_github: false,
        github_activity: rating(1),
        project_count: projects(0),
        has_linkedin: false,
    }
}

/// Highest possible answers.
pub(super) fn strong_answers() -> Answers {
    Answers {
        programming_languages: names(&["Rust", "Python", "TypeScript", "Go"]),
        frameworks: names(&["React", "FastAPI", "Next.js", "Django"]),
        dsa_level: rating(5),
        system_design: rating(5),
        has_resume: true,
        resume_quality: rating(5),
        has_quantified_achievements: true,
        has_relevant_experience: true,
        is_one_page: true,
        communication_confidence: rating(5),
        can_explain_projects: true,
        has_prepped_stories: true,
        behavioral_ready: true,
        has_portfolio: true,
        has_github: true,
        github_activity: rating(5),
        project_count: projects(5),
        has_linkedin: true,
    }
}

pub(super) fn action(priority: Priority, task: &str) -> ActionItem {
    ActionItem {
        priority,
        task: task.to_string(),
        time_estimate: "1 hour".to_string(),
        resource: None,
    }
}

pub(super) fn score_with_actions(actions: Vec<ActionItem>) -> CategoryScore {
    CategoryScore {
        score: 50,
        max_score: 100,
        percentage: 50,
        level: ScoreLevel::Developing,
        strengths: Vec::new(),
        improvements: Vec::new(),
        actions,
    }
}

pub(super) fn tasks_of(actions: &[ActionItem]) -> Vec<&str> {
    actions.iter().map(|action| action.task.as_str()).collect()
}
