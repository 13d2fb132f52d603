use crate::session::{MatchMode, QuestionOrder};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 启动时加载的题库文件
    pub question_bank: String,
    /// 出题顺序
    pub order: QuestionOrder,
    /// 答案比对方式
    pub match_mode: MatchMode,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_bank: "data/Enhanced_Question_Bank_with_Unique_Answers.csv".to_string(),
            order: QuestionOrder::Sequential,
            match_mode: MatchMode::Exact,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，无法解析的值回退到默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            question_bank: lookup("QUIZ_QUESTION_BANK").unwrap_or(default.question_bank),
            order: lookup("QUIZ_ORDER").and_then(|v| v.parse().ok()).unwrap_or(default.order),
            match_mode: lookup("QUIZ_MATCH_MODE").and_then(|v| v.parse().ok()).unwrap_or(default.match_mode),
            verbose_logging: lookup("QUIZ_VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
