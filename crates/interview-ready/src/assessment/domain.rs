use serde::{Deserialize, Serialize};

/// Every category is scored out of the same maximum.
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Resume,
    Communication,
    Portfolio,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Technical,
            Self::Resume,
            Self::Communication,
            Self::Portfolio,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Resume => "Resume",
            Self::Communication => "Communication",
            Self::Portfolio => "Portfolio",
        }
    }

    /// Share of the overall score contributed by this category.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Technical => 0.35,
            Self::Resume => 0.20,
            Self::Communication => 0.25,
            Self::Portfolio => 0.20,
        }
    }
}

/// Declaration order is scheduling order: high before medium before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Weak,
    Developing,
    Strong,
    Excellent,
}

impl ScoreLevel {
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage < 40 {
            Self::Weak
        } else if percentage < 60 {
            Self::Developing
        } else if percentage < 80 {
            Self::Strong
        } else {
            Self::Excellent
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Developing => "developing",
            Self::Strong => "strong",
            Self::Excellent => "excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    NotReady,
    GettingThere,
    AlmostReady,
    InterviewReady,
}

impl ReadinessTier {
    pub const fn from_score(overall_score: u8) -> Self {
        if overall_score >= 80 {
            Self::InterviewReady
        } else if overall_score >= 60 {
            Self::AlmostReady
        } else if overall_score >= 40 {
            Self::GettingThere
        } else {
            Self::NotReady
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotReady => "Not Ready",
            Self::GettingThere => "Getting There",
            Self::AlmostReady => "Almost Ready",
            Self::InterviewReady => "Interview Ready",
        }
    }
}

/// Recommended remediation task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub priority: Priority,
    pub task: String,
    pub time_estimate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    pub max_score: u8,
    pub percentage: u8,
    pub level: ScoreLevel,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub actions: Vec<ActionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week: u8,
    pub focus: String,
    pub tasks: Vec<String>,
}

/// Complete scoring output for one set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub overall_score: u8,
    pub readiness_level: ReadinessTier,
    pub technical: CategoryScore,
    pub resume: CategoryScore,
    pub communication: CategoryScore,
    pub portfolio: CategoryScore,
    pub time_to_ready: String,
    pub top_strengths: Vec<String>,
    pub critical_gaps: Vec<String>,
    pub weekly_plan: Vec<WeeklyPlan>,
}

impl AssessmentResult {
    pub fn category(&self, category: Category) -> &CategoryScore {
        match category {
            Category::Technical => &self.technical,
            Category::Resume => &self.resume,
            Category::Communication => &self.communication,
            Category::Portfolio => &self.portfolio,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &CategoryScore)> + '_ {
        Category::ordered()
            .into_iter()
            .map(move |category| (category, self.category(category)))
    }

    /// Per-category action lists, skipping categories with nothing to do.
    pub fn category_actions(&self) -> impl Iterator<Item = (Category, &[ActionItem])> + '_ {
        self.categories()
            .filter(|(_, score)| !score.actions.is_empty())
            .map(|(category, score)| (category, score.actions.as_slice()))
    }

    /// Plain-text summary suitable for sharing.
    pub fn share_summary(&self) -> String {
        format!(
            "📊 My Interview Readiness Score: {}/{MAX_SCORE}\n\n🎯 Status: {}\n⏱️ Time to ready: {}\n\n✅ Try it yourself!",
            self.overall_score,
            self.readiness_level.label(),
            self.time_to_ready
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_buckets_are_closed_on_their_lower_bound() {
        assert_eq!(ScoreLevel::from_percentage(0), ScoreLevel::Weak);
        assert_eq!(ScoreLevel::from_percentage(39), ScoreLevel::Weak);
        assert_eq!(ScoreLevel::from_percentage(40), ScoreLevel::Developing);
        assert_eq!(ScoreLevel::from_percentage(59), ScoreLevel::Developing);
        assert_eq!(ScoreLevel::from_percentage(60), ScoreLevel::Strong);
        assert_eq!(ScoreLevel::from_percentage(79), ScoreLevel::Strong);
        assert_eq!(ScoreLevel::from_percentage(80), ScoreLevel::Excellent);
        assert_eq!(ScoreLevel::from_percentage(100), ScoreLevel::Excellent);
    }

    #[test]
    fn readiness_tiers_start_at_their_threshold() {
        assert_eq!(ReadinessTier::from_score(80), ReadinessTier::InterviewReady);
        assert_eq!(ReadinessTier::from_score(79), ReadinessTier::AlmostReady);
        assert_eq!(ReadinessTier::from_score(60), ReadinessTier::AlmostReady);
        assert_eq!(ReadinessTier::from_score(59), ReadinessTier::GettingThere);
        assert_eq!(ReadinessTier::from_score(40), ReadinessTier::GettingThere);
        assert_eq!(ReadinessTier::from_score(39), ReadinessTier::NotReady);
        assert_eq!(ReadinessTier::from_score(80).label(), "Interview Ready");
        assert_eq!(ReadinessTier::from_score(60).label(), "Almost Ready");
        assert_eq!(ReadinessTier::from_score(40).label(), "Getting There");
    }

    #[test]
    fn category_weights_sum_to_one() {
        let total: f64 = Category::ordered().iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn priorities_sort_high_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
    }
}
