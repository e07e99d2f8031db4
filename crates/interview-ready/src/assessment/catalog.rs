use serde::Serialize;

use super::answers::Answers;

/// Languages offered on the technical screen, in display order.
pub const PROGRAMMING_LANGUAGES: [&str; 12] = [
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "TypeScript",
    "Go",
    "Rust",
    "C#",
    "Ruby",
    "Swift",
    "Kotlin",
    "PHP",
];

/// Frameworks and libraries offered on the technical screen, in display order.
pub const FRAMEWORKS: [&str; 12] = [
    "React",
    "Node.js",
    "Django",
    "Spring Boot",
    "Vue.js",
    "Angular",
    "Express.js",
    "Flask",
    "Next.js",
    "FastAPI",
    "Laravel",
    "Ruby on Rails",
];

pub fn is_known_language(name: &str) -> bool {
    PROGRAMMING_LANGUAGES.contains(&name)
}

pub fn is_known_framework(name: &str) -> bool {
    FRAMEWORKS.contains(&name)
}

/// Everything a presentation layer needs to render the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCatalog {
    pub programming_languages: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub default_answers: Answers,
}

impl SkillCatalog {
    pub fn standard() -> Self {
        Self {
            programming_languages: &PROGRAMMING_LANGUAGES,
            frameworks: &FRAMEWORKS,
            default_answers: Answers::default(),
        }
    }
}
