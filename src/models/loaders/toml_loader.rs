use crate::error::LoadError;
use crate::models::question::QuestionRecord;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// TOML 题库文件结构
#[derive(Debug, Deserialize)]
struct TomlQuestionBank {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    ordinal: u32,
    prompt: String,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    explanation: String,
}

impl From<TomlQuestion> for QuestionRecord {
    fn from(q: TomlQuestion) -> Self {
        let options = q
            .options
            .into_iter()
            .map(|option| option.trim().to_string())
            .filter(|option| !option.is_empty())
            .collect();
        QuestionRecord::new(q.ordinal, q.prompt, options, q.correct_answer, q.explanation)
    }
}

/// 从 TOML 文件加载题目
pub fn load_toml(path: &Path) -> Result<Vec<QuestionRecord>, LoadError> {
    let bank = path.display().to_string();

    if !path.exists() {
        return Err(LoadError::NotFound { path: bank });
    }

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::read_failed(&bank, e))?;
    let questions = parse_toml(&content, &bank)?;

    info!("✓ 从 {} 加载了 {} 道题目", bank, questions.len());
    Ok(questions)
}

/// 解析 TOML 文本，`source` 只用于错误信息
pub fn parse_toml(content: &str, source: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let bank: TomlQuestionBank =
        toml::from_str(content).map_err(|e| LoadError::toml_parse_failed(source, e))?;

    Ok(bank.questions.into_iter().map(QuestionRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::PLACEHOLDER_OPTION;

    #[test]
    fn test_parse_toml_bank() {
        let content = r#"
[[questions]]
ordinal = 1
prompt = "What is 2 + 2?"
options = ["3", " 4 ", "5"]
correct_answer = "4"
explanation = "Basic arithmetic."

[[questions]]
ordinal = 2
prompt = "Free text question"
correct_answer = "anything"
"#;
        let questions = parse_toml(content, "bank.toml").unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].options(), &["3", "4", "5"]);
        assert_eq!(questions[0].explanation(), "Basic arithmetic.");
        assert_eq!(questions[1].options(), &[PLACEHOLDER_OPTION]);
        assert_eq!(questions[1].explanation(), "");
    }

    #[test]
    fn test_load_toml_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bank.toml");
        std::fs::write(
            &path,
            "[[questions]]\nordinal = 3\nprompt = \"Q\"\noptions = [\"a\", \"b\"]\ncorrect_answer = \"b\"\n",
        )
        .unwrap();

        let questions = load_toml(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].ordinal(), 3);

        let missing = load_toml(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_missing_required_field() {
        let content = r#"
[[questions]]
ordinal = 1
options = ["a"]
correct_answer = "a"
"#;
        let err = parse_toml(content, "bank.toml").unwrap_err();
        assert!(matches!(err, LoadError::TomlParseFailed { .. }));
    }
}
