use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库加载错误
    #[error("题库加载错误: {0}")]
    Load(#[from] LoadError),
    /// 答题会话错误
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
}

/// 题库加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    /// 文件不存在
    #[error("题库文件不存在: {path}")]
    NotFound { path: String },

    /// 读取文件失败
    #[error("读取题库文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 缺少必需的列
    #[error("题库文件缺少必需的列 ({path}): {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },

    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 答题会话错误
///
/// 全部属于调用方误用 API 的情况，不会改变会话状态
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// 会话已经开始过
    #[error("会话已经开始，不能重复开始")]
    AlreadyStarted,

    /// 没有正在作答的题目（未开始或已结束）
    #[error("当前没有可作答的题目")]
    NoActiveQuestion,

    /// 当前题目已经作答
    #[error("第 {ordinal} 题已经作答")]
    AlreadyAnswered { ordinal: u32 },

    /// 当前题目还未作答，不能前进
    #[error("第 {ordinal} 题还未作答")]
    NotAnswered { ordinal: u32 },

    /// 选项序号超出范围
    #[error("选项 {index} 超出范围 [0, {len})")]
    OptionOutOfRange { index: usize, len: usize },
}

// ========== 便捷构造函数 ==========

impl LoadError {
    /// 创建文件读取错误
    pub fn read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LoadError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LoadError::TomlParseFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
