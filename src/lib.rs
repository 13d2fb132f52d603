//! # Quiz App
//!
//! 一个从 CSV 题库读取选择题、在控制台逐题作答的单机答题程序
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目数据和题库加载
//! - `QuestionRecord` - 一道选择题，加载后不可修改
//! - `loaders` - CSV（两种列布局）和 TOML 题库加载器
//!
//! ### ② 会话层（Session）
//! - `session/` - 答题状态机，不关心界面
//! - `SessionState` - 游标、得分、错题队列，`NotStarted → Active → (RetryPass) → Completed`
//! - `MatchMode` - 答案比对方式
//! - `QuestionOrder` - 顺序或随机出题
//!
//! ### ③ 界面层（App）
//! - `app` - 控制台界面，持有唯一的 `SessionState`，只做展示和输入转发
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod utils;

// 重新导出常用类型
pub use app::{load_session, App};
pub use config::Config;
pub use error::{AppError, AppResult, LoadError, SessionError};
pub use models::{load_questions, QuestionRecord};
pub use session::{MatchMode, Phase, Progress, QuestionOrder, SessionState};
