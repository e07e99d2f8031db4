use super::domain::{ActionItem, CategoryScore, Priority, WeeklyPlan};

const CRITICAL_FOUNDATIONS: &str = "Critical Foundations";
const BUILDING_STRENGTH: &str = "Building Strength";
const REFINEMENT: &str = "Refinement";
const INTERVIEW_PRACTICE: &str = "Interview Practice";

const INTERVIEW_PRACTICE_TASKS: [&str; 4] = [
    "Do 2-3 mock interviews",
    "Review and refine all materials",
    "Practice explaining your projects",
    "Research target companies",
];

/// Buckets every category's actions into the four-week plan.
///
/// Actions keep their category order within a priority tier. Weeks one to
/// three are only emitted when they would have tasks; the interview practice
/// week is always last.
pub(crate) fn generate_weekly_plan<'a, I>(scores: I) -> Vec<WeeklyPlan>
where
    I: IntoIterator<Item = &'a CategoryScore>,
{
    let mut actions: Vec<&ActionItem> = scores
        .into_iter()
        .flat_map(|score| score.actions.iter())
        .collect();
    actions.sort_by_key(|action| action.priority);

    let by_priority = |priority: Priority| -> Vec<&ActionItem> {
        actions
            .iter()
            .copied()
            .filter(|action| action.priority == priority)
            .collect()
    };
    let high = by_priority(Priority::High);
    let medium = by_priority(Priority::Medium);
    let low = by_priority(Priority::Low);

    let mut plan = Vec::with_capacity(4);

    if !high.is_empty() {
        plan.push(week(1, CRITICAL_FOUNDATIONS, tasks(&high, 0, 3)));
    }

    if high.len() > 3 || !medium.is_empty() {
        let mut week_tasks = tasks(&high, 3, 2);
        week_tasks.extend(tasks(&medium, 0, 2));
        plan.push(week(2, BUILDING_STRENGTH, week_tasks));
    }

    if medium.len() > 2 || !low.is_empty() {
        let mut week_tasks = tasks(&medium, 2, 2);
        week_tasks.extend(tasks(&low, 0, 2));
        plan.push(week(3, REFINEMENT, week_tasks));
    }

    plan.push(week(
        4,
        INTERVIEW_PRACTICE,
        INTERVIEW_PRACTICE_TASKS
            .iter()
            .map(|task| task.to_string())
            .collect(),
    ));

    plan
}

fn tasks(actions: &[&ActionItem], skip: usize, take: usize) -> Vec<String> {
    actions
        .iter()
        .skip(skip)
        .take(take)
        .map(|action| action.task.clone())
        .collect()
}

fn week(week: u8, focus: &str, tasks: Vec<String>) -> WeeklyPlan {
    WeeklyPlan {
        week,
        focus: focus.to_string(),
        tasks,
    }
}
