//! Declarative scoring rubric.
//!
//! Each category is a table of rules over answer fields. A single calculator
//! walks the table, adding capped point contributions and sorting every
//! contribution into a strength or an improvement with a follow-up action.

use tracing::debug;

use super::answers::Answers;
use super::domain::{ActionItem, Category, CategoryScore, Priority, ScoreLevel, MAX_SCORE};

/// Numeric answer a scaled rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    LanguageCount,
    FrameworkCount,
    DsaLevel,
    SystemDesign,
    ResumeQuality,
    CommunicationConfidence,
    GithubActivity,
    ProjectCount,
}

impl Signal {
    fn read(self, answers: &Answers) -> u32 {
        match self {
            Self::LanguageCount => saturating_len(&answers.programming_languages),
            Self::FrameworkCount => saturating_len(&answers.frameworks),
            Self::DsaLevel => answers.dsa_level.get().into(),
            Self::SystemDesign => answers.system_design.get().into(),
            Self::ResumeQuality => answers.resume_quality.get().into(),
            Self::CommunicationConfidence => answers.communication_confidence.get().into(),
            Self::GithubActivity => answers.github_activity.get().into(),
            Self::ProjectCount => answers.project_count.get().into(),
        }
    }
}

fn saturating_len(items: &[String]) -> u32 {
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}

/// Yes/no answer a flag rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flag {
    HasResume,
    QuantifiedAchievements,
    RelevantExperience,
    OnePage,
    CanExplainProjects,
    PreppedStories,
    BehavioralReady,
    HasPortfolio,
    HasGithub,
    HasLinkedIn,
}

impl Flag {
    fn read(self, answers: &Answers) -> bool {
        match self {
            Self::HasResume => answers.has_resume,
            Self::QuantifiedAchievements => answers.has_quantified_achievements,
            Self::RelevantExperience => answers.has_relevant_experience,
            Self::OnePage => answers.is_one_page,
            Self::CanExplainProjects => answers.can_explain_projects,
            Self::PreppedStories => answers.has_prepped_stories,
            Self::BehavioralReady => answers.behavioral_ready,
            Self::HasPortfolio => answers.has_portfolio,
            Self::HasGithub => answers.has_github,
            Self::HasLinkedIn => answers.has_linkedin,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ActionTemplate {
    pub priority: Priority,
    pub task: &'static str,
    pub time_estimate: &'static str,
    pub resource: Option<&'static str>,
}

impl ActionTemplate {
    fn to_item(&self) -> ActionItem {
        ActionItem {
            priority: self.priority,
            task: self.task.to_string(),
            time_estimate: self.time_estimate.to_string(),
            resource: self.resource.map(str::to_string),
        }
    }
}

/// `value × per_unit` points capped at `cap`. Values at or above
/// `strong_from` are strengths, values at or below `weak_up_to` are gaps and
/// anything between is neutral. `{count}` in the strength is replaced by the
/// raw value.
#[derive(Debug)]
pub(crate) struct ScaledRule {
    pub signal: Signal,
    pub per_unit: u32,
    pub cap: u32,
    pub strong_from: u32,
    pub weak_up_to: u32,
    pub strength: &'static str,
    pub improvement: &'static str,
    pub action: ActionTemplate,
}

/// Fixed bonus when the flag is set, a gap otherwise.
#[derive(Debug)]
pub(crate) struct FlagRule {
    pub flag: Flag,
    pub points: u32,
    pub strength: &'static str,
    pub improvement: &'static str,
    pub action: ActionTemplate,
}

#[derive(Debug)]
pub(crate) enum Rule {
    Scaled(ScaledRule),
    Flag(FlagRule),
    /// Flag rule whose nested rules only count when the flag is set.
    Gate {
        rule: FlagRule,
        then: &'static [Rule],
    },
}

/// Flag that must hold before any other rule of the category is evaluated.
/// When it does not, the category scores zero with a single gap.
#[derive(Debug)]
pub(crate) struct Prerequisite {
    pub flag: Flag,
    pub points: u32,
    pub improvement: &'static str,
    pub action: ActionTemplate,
}

#[derive(Debug)]
pub(crate) struct CategoryRules {
    pub category: Category,
    pub prerequisite: Option<Prerequisite>,
    pub rules: &'static [Rule],
}

pub(crate) static TECHNICAL: CategoryRules = CategoryRules {
    category: Category::Technical,
    prerequisite: None,
    rules: &[
        Rule::Scaled(ScaledRule {
            signal: Signal::LanguageCount,
            per_unit: 5,
            cap: 20,
            strong_from: 2,
            weak_up_to: 1,
            strength: "Proficient in {count} programming languages",
            improvement: "Limited programming language exposure",
            action: ActionTemplate {
                priority: Priority::High,
                task: "Learn at least one more programming language relevant to your target role",
                time_estimate: "2-4 weeks",
                resource: Some("Codecademy, freeCodeCamp"),
            },
        }),
        Rule::Scaled(ScaledRule {
            signal: Signal::FrameworkCount,
            per_unit: 5,
            cap: 20,
            strong_from: 2,
            weak_up_to: 1,
            strength: "Experience with {count} frameworks/libraries",
            improvement: "Need more framework experience",
            action: ActionTemplate {
                priority: Priority::Medium,
                task: "Build a project using a popular framework in your domain",
                time_estimate: "1-2 weeks",
                resource: Some("Official documentation, YouTube tutorials"),
            },
        }),
        Rule::Scaled(ScaledRule {
            signal: Signal::DsaLevel,
            per_unit: 6,
            cap: 30,
            strong_from: 4,
            weak_up_to: 2,
            strength: "Strong DSA foundation",
            improvement: "Data Structures & Algorithms need work",
            action: ActionTemplate {
                priority: Priority::High,
                task: "Practice 2-3 LeetCode problems daily, focus on arrays, strings, and trees",
                time_estimate: "4-8 weeks for solid foundation",
                resource: Some("LeetCode, NeetCode 150, Striver's SDE Sheet"),
            },
        }),
        Rule::Scaled(ScaledRule {
            signal: Signal::SystemDesign,
            per_unit: 6,
            cap: 30,
            strong_from: 4,
            weak_up_to: 2,
            strength: "Good system design knowledge",
            improvement: "System design concepts need strengthening",
            action: ActionTemplate {
                priority: Priority::Medium,
                task: "Study common system design patterns and practice designing systems",
                time_estimate: "3-4 weeks",
                resource: Some("System Design Primer (GitHub), Gaurav Sen YouTube"),
            },
        }),
    ],
};

pub(crate) static RESUME: CategoryRules = CategoryRules {
    category: Category::Resume,
    prerequisite: Some(Prerequisite {
        flag: Flag::HasResume,
        points: 20,
        improvement: "No resume prepared",
        action: ActionTemplate {
            priority: Priority::High,
            task: "Create a professional resume immediately",
            time_estimate: "2-3 hours",
            resource: Some("Overleaf templates, Jake's Resume template"),
        },
    }),
    rules: &[
        Rule::Scaled(ScaledRule {
            signal: Signal::ResumeQuality,
            per_unit: 6,
            cap: 30,
            strong_from: 4,
            weak_up_to: 3,
            strength: "Well-crafted resume",
            improvement: "Resume needs polishing",
            action: ActionTemplate {
                priority: Priority::High,
                task: "Get resume reviewed by peers or use resume review services",
                time_estimate: "1-2 days",
                resource: Some("r/resumes subreddit, TopResume free review"),
            },
        }),
        Rule::Flag(FlagRule {
            flag: Flag::QuantifiedAchievements,
            points: 20,
            strength: "Quantified achievements showcase impact",
            improvement: "Missing quantified achievements",
            action: ActionTemplate {
                priority: Priority::High,
                task: "Add metrics to your achievements (%, $, time saved, users impacted)",
                time_estimate: "1 hour",
                resource: None,
            },
        }),
        Rule::Flag(FlagRule {
            flag: Flag::RelevantExperience,
            points: 15,
            strength: "Relevant experience highlighted",
            improvement: "Need more relevant experience/projects",
            action: ActionTemplate {
                priority: Priority::Medium,
                task: "Add relevant projects or internship experience",
                time_estimate: "1-2 weeks for a solid project",
                resource: None,
            },
        }),
        Rule::Flag(FlagRule {
            flag: Flag::OnePage,
            points: 15,
            strength: "Concise one-page format",
            improvement: "Resume too long",
            action: ActionTemplate {
                priority: Priority::Low,
                task: "Condense resume to one page, remove less relevant content",
                time_estimate: "30 minutes",
                resource: None,
            },
        }),
    ],
};

pub(crate) static COMMUNICATION: CategoryRules = CategoryRules {
    category: Category::Communication,
    prerequisite: None,
    rules: &[
        Rule::Scaled(ScaledRule {
            signal: Signal::CommunicationConfidence,
            per_unit: 8,
            cap: 40,
            strong_from: 4,
            weak_up_to: 2,
            strength: "Confident communicator",
            improvement: "Communication confidence needs work",
            action: ActionTemplate {
                priority: Priority::High,
                task: "Practice mock interviews with friends or use Pramp/interviewing.io",
                time_estimate: "2-3 sessions per week",
                resource: Some("Pramp (free), Interviewing.io"),
            },
        }),
        Rule::Flag(FlagRule {
            flag: Flag::CanExplainProjects,
            points: 25,
            strength: "Can articulate project details clearly",
            improvement: "Struggle to explain projects",
            action: ActionTemplate {
                priority: Priority::High,
                task: "Prepare 2-3 minute summaries for each project using STAR format",
                time_estimate: "2-3 hours",
                resource: None,
            },
        }),
        Rule::Flag(FlagRule {
            flag: Flag::PreppedStories,
            points: 20,
            strength: "Prepared behavioral stories",
            improvement: "No prepared behavioral stories",
            action: ActionTemplate {
                priority: Priority::Medium,
                task: "Prepare 5-7 STAR stories covering leadership, conflict, failure, success",
                time_estimate: "3-4 hours",
                resource: Some("Amazon Leadership Principles as guide"),
            },
        }),
        Rule::Flag(FlagRule {
            flag: Flag::BehavioralReady,
            points: 15,
            strength: "Ready for behavioral questions",
            improvement: "Not prepared for behavioral rounds",
            action: ActionTemplate {
                priority: Priority::Medium,
                task: "Practice common behavioral questions out loud",
                time_estimate: "1 hour daily for a week",
                resource: None,
            },
        }),
    ],
};

pub(crate) static PORTFOLIO: CategoryRules = CategoryRules {
    category: Category::Portfolio,
    prerequisite: None,
    rules: &[
        Rule::Flag(FlagRule {
            flag: Flag::HasPortfolio,
            points: 25,
            strength: "Personal portfolio website",
            improvement: "No portfolio website",
            action: ActionTemplate {
                priority: Priority::Medium,
                task: "Create a simple portfolio website showcasing your projects",
                time_estimate: "1-2 days",
                resource: Some("GitHub Pages, Vercel, Netlify (all free)"),
            },
        }),
        Rule::Gate {
            rule: FlagRule {
                flag: Flag::HasGithub,
                points: 15,
                strength: "Active GitHub presence",
                improvement: "No GitHub profile",
                action: ActionTemplate {
                    priority: Priority::High,
                    task: "Create GitHub profile and push your projects",
                    time_estimate: "1-2 hours",
                    resource: None,
                },
            },
            then: &[Rule::Scaled(ScaledRule {
                signal: Signal::GithubActivity,
                per_unit: 4,
                cap: 20,
                strong_from: 4,
                weak_up_to: 2,
                strength: "Strong GitHub contribution history",
                improvement: "Low GitHub activity",
                action: ActionTemplate {
                    priority: Priority::Medium,
                    task: "Commit code regularly, contribute to open source",
                    time_estimate: "Ongoing - aim for daily commits",
                    resource: Some("Good First Issues, Up For Grabs"),
                },
            })],
        },
        Rule::Scaled(ScaledRule {
            signal: Signal::ProjectCount,
            per_unit: 5,
            cap: 25,
            strong_from: 4,
            weak_up_to: 2,
            strength: "{count} showcase-worthy projects",
            improvement: "Need more portfolio projects",
            action: ActionTemplate {
                priority: Priority::High,
                task: "Build 2-3 substantial projects demonstrating different skills",
                time_estimate: "2-4 weeks per project",
                resource: Some("Project ideas: fullstackopen.com, roadmap.sh"),
            },
        }),
        Rule::Flag(FlagRule {
            flag: Flag::HasLinkedIn,
            points: 15,
            strength: "Professional LinkedIn presence",
            improvement: "No LinkedIn profile",
            action: ActionTemplate {
                priority: Priority::Medium,
                task: "Create and optimize LinkedIn profile",
                time_estimate: "2-3 hours",
                resource: None,
            },
        }),
    ],
};

pub(crate) fn rules_for(category: Category) -> &'static CategoryRules {
    match category {
        Category::Technical => &TECHNICAL,
        Category::Resume => &RESUME,
        Category::Communication => &COMMUNICATION,
        Category::Portfolio => &PORTFOLIO,
    }
}

#[derive(Default)]
struct Tally {
    score: u32,
    strengths: Vec<String>,
    improvements: Vec<String>,
    actions: Vec<ActionItem>,
}

impl Tally {
    fn gap(&mut self, improvement: &str, action: &ActionTemplate) {
        self.improvements.push(improvement.to_string());
        self.actions.push(action.to_item());
    }

    fn apply_all(&mut self, rules: &[Rule], answers: &Answers) {
        for rule in rules {
            self.apply(rule, answers);
        }
    }

    fn apply(&mut self, rule: &Rule, answers: &Answers) {
        match rule {
            Rule::Scaled(rule) => {
                let value = rule.signal.read(answers);
                self.score += value.saturating_mul(rule.per_unit).min(rule.cap);
                if value >= rule.strong_from {
                    self.strengths
                        .push(rule.strength.replace("{count}", &value.to_string()));
                } else if value <= rule.weak_up_to {
                    self.gap(rule.improvement, &rule.action);
                }
            }
            Rule::Flag(rule) => {
                self.apply_flag(rule, answers);
            }
            Rule::Gate { rule, then } => {
                if self.apply_flag(rule, answers) {
                    self.apply_all(then, answers);
                }
            }
        }
    }

    fn apply_flag(&mut self, rule: &FlagRule, answers: &Answers) -> bool {
        let set = rule.flag.read(answers);
        if set {
            self.score += rule.points;
            self.strengths.push(rule.strength.to_string());
        } else {
            self.gap(rule.improvement, &rule.action);
        }
        set
    }

    fn finish(self) -> CategoryScore {
        let score = self.score.min(u32::from(MAX_SCORE));
        let percentage = ((score as f64 / f64::from(MAX_SCORE)) * 100.0).round() as u8;
        CategoryScore {
            score: score as u8,
            max_score: MAX_SCORE,
            percentage,
            level: ScoreLevel::from_percentage(percentage),
            strengths: self.strengths,
            improvements: self.improvements,
            actions: self.actions,
        }
    }
}

/// Scores one category against its rubric.
pub(crate) fn score_category(rules: &CategoryRules, answers: &Answers) -> CategoryScore {
    let score = tally_rules(rules, answers).finish();
    debug!(
        category = rules.category.label(),
        score = score.score,
        gaps = score.improvements.len(),
        "category scored"
    );
    score
}

fn tally_rules(rules: &CategoryRules, answers: &Answers) -> Tally {
    let mut tally = Tally::default();

    if let Some(prerequisite) = &rules.prerequisite {
        if !prerequisite.flag.read(answers) {
            tally.gap(prerequisite.improvement, &prerequisite.action);
            return tally;
        }
        tally.score += prerequisite.points;
    }

    tally.apply_all(rules.rules, answers);
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap_total(rules: &[Rule]) -> u32 {
        rules
            .iter()
            .map(|rule| match rule {
                Rule::Scaled(rule) => rule.cap,
                Rule::Flag(rule) => rule.points,
                Rule::Gate { rule, then } => rule.points + cap_total(then),
            })
            .sum()
    }

    #[test]
    fn every_rubric_tops_out_at_the_maximum_score() {
        for category in Category::ordered() {
            let rules = rules_for(category);
            let prerequisite = rules.prerequisite.as_ref().map_or(0, |p| p.points);
            assert_eq!(
                prerequisite + cap_total(rules.rules),
                u32::from(MAX_SCORE),
                "{} rubric should total {MAX_SCORE}",
                category.label()
            );
        }
    }

    #[test]
    fn rules_table_is_keyed_by_its_own_category() {
        for category in Category::ordered() {
            assert_eq!(rules_for(category).category, category);
        }
    }

    #[test]
    fn scoring_a_rubric_matches_its_category_in_the_results() {
        let answers = Answers::default();
        let results = crate::assessment::calculate_results(&answers);
        for category in Category::ordered() {
            let rules = rules_for(category);
            assert_eq!(
                &score_category(rules, &answers),
                results.category(rules.category)
            );
        }
    }

    #[test]
    fn scaled_caps_equal_top_of_rating_scale() {
        for category in Category::ordered() {
            for rule in rules_for(category).rules {
                if let Rule::Scaled(rule) = rule {
                    if matches!(rule.signal, Signal::LanguageCount | Signal::FrameworkCount) {
                        continue;
                    }
                    assert!(rule.per_unit * 5 <= rule.cap);
                }
            }
        }
    }
}
