use crate::utils::logging::truncate_text;

/// 没有选项时使用的占位选项
pub const PLACEHOLDER_OPTION: &str = "No options available";

/// 一道选择题
///
/// 加载后不再修改，所以字段只提供只读访问
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    ordinal: u32,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
}

impl QuestionRecord {
    /// 创建题目，选项为空时替换为单个占位选项
    pub fn new(
        ordinal: u32,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        let options = if options.is_empty() {
            vec![PLACEHOLDER_OPTION.to_string()]
        } else {
            options
        };

        Self {
            ordinal,
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// 题号
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// 题干
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// 选项列表（至少一项）
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// 只有占位选项时视为没有可选答案
    pub fn has_placeholder_options(&self) -> bool {
        self.options.len() == 1 && self.options[0] == PLACEHOLDER_OPTION
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便显示（最多80个字符）
        let prompt_preview = truncate_text(&self.prompt, 80);
        write!(f, "#{} {}", self.ordinal, prompt_preview)
    }
}
