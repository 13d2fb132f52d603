//! 答案比对

use std::str::FromStr;

/// 答案比对方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// 去掉首尾空白后忽略大小写完全相等
    #[default]
    Exact,
    /// 旧版行为：正确答案包含所选文本即算对。
    /// 内容被正确答案包含的错误选项也会判对，只在需要与旧题库行为一致时使用
    Contains,
}

impl MatchMode {
    /// 判断所选文本是否与正确答案匹配
    pub fn matches(self, selected: &str, correct: &str) -> bool {
        let selected = selected.trim().to_lowercase();
        let correct = correct.trim().to_lowercase();

        match self {
            MatchMode::Exact => selected == correct,
            // 空字符串会被任何答案包含
            MatchMode::Contains => !selected.is_empty() && correct.contains(&selected),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "contains" => Ok(MatchMode::Contains),
            other => Err(format!("未知的比对方式: {}", other)),
        }
    }
}
