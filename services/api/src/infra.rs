use interview_ready::assessment::Answers;
use interview_ready::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses an answers document. Missing fields fall back to the questionnaire
/// defaults; ratings and catalog names are checked before returning.
pub(crate) fn parse_answers(raw: &str) -> Result<Answers, AppError> {
    let answers: Answers = if raw.trim().is_empty() {
        Answers::default()
    } else {
        serde_json::from_str(raw)?
    };
    answers.validate()?;
    Ok(answers)
}

pub(crate) fn load_answers(path: Option<&Path>) -> Result<Answers, AppError> {
    match path {
        Some(path) => parse_answers(&std::fs::read_to_string(path)?),
        None => Ok(Answers::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_ready::assessment::AnswerError;

    #[test]
    fn partial_documents_keep_defaults() {
        let answers = parse_answers(r#"{"dsa_level": 5, "frameworks": ["Django"]}"#)
            .expect("valid answers");
        assert_eq!(answers.dsa_level.get(), 5);
        assert_eq!(answers.frameworks, vec!["Django".to_string()]);
        assert_eq!(answers.system_design, Answers::default().system_design);
        assert_eq!(
            answers.programming_languages,
            Answers::default().programming_languages
        );
    }

    #[test]
    fn empty_document_is_the_default_answers() {
        assert_eq!(parse_answers("  \n").expect("valid"), Answers::default());
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        let err = parse_answers(r#"{"github_activity": 7}"#).expect_err("invalid rating");
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn misnamed_fields_are_rejected() {
        let err = parse_answers(
            r#"{"dsaLevel": 5, "hasResume": false, "programmingLanguages": ["Rust", "Go"]}"#,
        )
        .expect_err("camelCase keys");
        assert!(matches!(err, AppError::Json(_)));
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_catalog_names_are_rejected() {
        let err = parse_answers(r#"{"programming_languages": ["Fortran"]}"#)
            .expect_err("unknown language");
        match err {
            AppError::Answers(inner) => {
                assert_eq!(inner, AnswerError::UnknownLanguage("Fortran".to_string()))
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_answers(Some(Path::new("/nonexistent/answers.json")))
            .expect_err("file missing");
        assert!(matches!(err, AppError::Io(_)));
    }
}
