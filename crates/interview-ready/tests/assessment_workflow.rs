use chrono::{DateTime, Duration, TimeZone, Utc};
use interview_ready::assessment::{
    calculate_results, AnswerEdit, Answers, Category, Priority, ReadinessTier, SkillCatalog,
};
use interview_ready::config::WizardConfig;
use interview_ready::wizard::{Step, WizardController, WizardError, WizardEvent};

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_000_000, 0)
        .single()
        .expect("valid timestamp")
        + Duration::seconds(seconds)
}

fn edit(wizard: &mut WizardController, edit: AnswerEdit, seconds: i64) {
    wizard
        .dispatch(WizardEvent::Edit(edit), at(seconds))
        .expect("edit accepted");
}

#[test]
fn well_prepared_candidate_walks_the_wizard_to_interview_ready() {
    let mut wizard = WizardController::new(&WizardConfig::default());
    wizard.dispatch(WizardEvent::Start, at(0)).expect("start");

    for language in ["Rust", "TypeScript", "Python"] {
        edit(&mut wizard, AnswerEdit::ToggleLanguage(language.to_string()), 5);
    }
    for framework in ["React", "Next.js", "FastAPI"] {
        edit(&mut wizard, AnswerEdit::ToggleFramework(framework.to_string()), 10);
    }
    edit(&mut wizard, AnswerEdit::DsaLevel(4), 12);
    edit(&mut wizard, AnswerEdit::SystemDesign(5), 14);
    wizard.dispatch(WizardEvent::Next, at(20)).expect("to resume");

    edit(&mut wizard, AnswerEdit::ResumeQuality(5), 25);
    edit(&mut wizard, AnswerEdit::QuantifiedAchievements(true), 27);
    edit(&mut wizard, AnswerEdit::RelevantExperience(true), 29);
    wizard.dispatch(WizardEvent::Next, at(35)).expect("to communication");

    edit(&mut wizard, AnswerEdit::CommunicationConfidence(4), 40);
    edit(&mut wizard, AnswerEdit::CanExplainProjects(true), 42);
    edit(&mut wizard, AnswerEdit::PreppedStories(true), 44);
    edit(&mut wizard, AnswerEdit::BehavioralReady(true), 46);
    wizard.dispatch(WizardEvent::Next, at(50)).expect("to portfolio");

    edit(&mut wizard, AnswerEdit::HasPortfolio(true), 55);
    edit(&mut wizard, AnswerEdit::GithubActivity(4), 57);
    edit(&mut wizard, AnswerEdit::ProjectCount(4), 59);
    let state = wizard
        .dispatch(WizardEvent::Next, at(70))
        .expect("to results");

    assert_eq!(state.step(), Step::Results);
    let result = state.results().expect("scored").clone();
    assert_eq!(result, calculate_results(wizard.state().answers()));

    // 15 + 15 + 24 + 30 = 84 | 100 | 32 + 25 + 20 + 15 = 92 | 25 + 15 + 16 + 20 + 15 = 91
    assert_eq!(result.technical.score, 84);
    assert_eq!(result.resume.score, 100);
    assert_eq!(result.communication.score, 92);
    assert_eq!(result.portfolio.score, 91);
    // 29.4 + 20 + 23 + 18.2 = 90.6
    assert_eq!(result.overall_score, 91);
    assert_eq!(result.readiness_level, ReadinessTier::InterviewReady);
    assert_eq!(result.time_to_ready, "1-2 weeks of polish");
    assert!(result.critical_gaps.is_empty());
    assert_eq!(result.weekly_plan.len(), 1);

    assert_eq!(wizard.elapsed(at(600)).num_seconds(), 70);
    assert!(!wizard.pace_warning(at(600)));
}

#[test]
fn struggling_candidate_gets_a_front_loaded_plan() {
    let answers = Answers {
        has_resume: false,
        has_github: false,
        has_linkedin: false,
        ..Answers::default()
    };

    let result = calculate_results(&answers);

    assert_eq!(result.resume.score, 0);
    assert_eq!(result.readiness_level, ReadinessTier::NotReady);
    let first_week = &result.weekly_plan[0];
    assert_eq!(first_week.week, 1);
    assert_eq!(first_week.focus, "Critical Foundations");
    assert_eq!(first_week.tasks.len(), 3);

    let high_priority: usize = result
        .category_actions()
        .map(|(_, actions)| {
            actions
                .iter()
                .filter(|action| action.priority == Priority::High)
                .count()
        })
        .sum();
    assert!(high_priority >= 3);
    assert!(result
        .category_actions()
        .any(|(category, _)| category == Category::Resume));
}

#[test]
fn wizard_refuses_out_of_order_events_without_losing_answers() {
    let mut wizard = WizardController::new(&WizardConfig::default());
    wizard.dispatch(WizardEvent::Start, at(0)).expect("start");
    edit(&mut wizard, AnswerEdit::ToggleFramework("Django".to_string()), 3);

    let err = wizard
        .dispatch(WizardEvent::Edit(AnswerEdit::HasLinkedIn(false)), at(4))
        .expect_err("portfolio field on technical screen");
    assert!(matches!(err, WizardError::FieldNotOnScreen { .. }));
    assert_eq!(wizard.state().answers().frameworks, vec!["Django".to_string()]);

    wizard.dispatch(WizardEvent::Restart, at(5)).expect("restart");
    assert_eq!(wizard.state().step(), Step::Welcome);
    assert_eq!(wizard.state().answers(), &Answers::default());
}

#[test]
fn catalog_defaults_match_the_wizard_defaults() {
    let catalog = SkillCatalog::standard();
    assert_eq!(catalog.default_answers, Answers::default());
    assert_eq!(catalog.programming_languages.len(), 12);
    assert!(catalog.frameworks.contains(&"Ruby on Rails"));
    assert!(catalog.default_answers.validate().is_ok());
}
