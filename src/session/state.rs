//! 答题会话状态机
//!
//! ```text
//! NotStarted → Active → (RetryPass) → Completed
//! ```
//!
//! - `Active`：按顺序作答全部题目，答错的题进入错题队列
//! - `RetryPass`：第一轮结束后错题队列非空时，对错题重做一轮（只做一轮，不会再次入队）
//! - `Completed`：终止状态，只能读取最终得分

use crate::error::SessionError;
use crate::models::QuestionRecord;
use crate::session::matching::MatchMode;
use tracing::{debug, info};

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    RetryPass,
    Completed,
}

/// 一次作答的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub selected: String,
    pub correct_answer: String,
    pub explanation: String,
}

/// 最终得分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    /// 答对的题目数（错题重做答对也计入）
    pub score: usize,
    /// 题库中的题目总数
    pub total: usize,
    /// 两轮一共作答的次数
    pub answered: usize,
}

/// 当前轮次的统计，对应界面上的 "Total | Correct | Wrong"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// 本轮题目数
    pub pass_total: usize,
    /// 累计答对数
    pub correct: usize,
    /// 本轮答错数
    pub wrong: usize,
}

/// `advance()` 之后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// 进入本轮的下一题
    Next,
    /// 第一轮结束，开始重做错题
    RetryPassStarted,
    /// 全部结束
    Completed(FinalScore),
}

/// 一次答题的完整状态
///
/// 由界面层持有，所有操作都通过显式方法调用完成
#[derive(Debug, Clone)]
pub struct SessionState {
    questions: Vec<QuestionRecord>,
    cursor: usize,
    score: usize,
    incorrect_queue: Vec<QuestionRecord>,
    phase: Phase,
    answered: Option<AnswerOutcome>,
    answered_count: usize,
    wrong_in_pass: usize,
    total: usize,
    match_mode: MatchMode,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}

impl SessionState {
    /// 创建未开始的会话
    pub fn new(match_mode: MatchMode) -> Self {
        Self {
            questions: Vec::new(),
            cursor: 0,
            score: 0,
            incorrect_queue: Vec::new(),
            phase: Phase::NotStarted,
            answered: None,
            answered_count: 0,
            wrong_in_pass: 0,
            total: 0,
            match_mode,
        }
    }

    /// 开始答题
    ///
    /// 题目列表为空时直接进入 `Completed`
    pub fn start(&mut self, questions: Vec<QuestionRecord>) -> Result<(), SessionError> {
        if self.phase != Phase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        self.total = questions.len();
        self.questions = questions;
        self.cursor = 0;
        self.score = 0;
        self.incorrect_queue.clear();
        self.answered = None;
        self.answered_count = 0;
        self.wrong_in_pass = 0;

        self.phase = if self.questions.is_empty() {
            Phase::Completed
        } else {
            Phase::Active
        };

        info!("📝 开始答题，共 {} 道题", self.total);
        Ok(())
    }

    /// 当前题目
    pub fn current(&self) -> Result<&QuestionRecord, SessionError> {
        match self.phase {
            Phase::Active | Phase::RetryPass => self
                .questions
                .get(self.cursor)
                .ok_or(SessionError::NoActiveQuestion),
            Phase::NotStarted | Phase::Completed => Err(SessionError::NoActiveQuestion),
        }
    }

    /// 按文本作答
    ///
    /// 每道题只能作答一次；重复作答返回 `AlreadyAnswered`，状态不变
    pub fn answer(&mut self, selected: &str) -> Result<AnswerOutcome, SessionError> {
        let current = self.current()?.clone();
        if self.answered.is_some() {
            return Err(SessionError::AlreadyAnswered {
                ordinal: current.ordinal(),
            });
        }

        let correct = self.match_mode.matches(selected, current.correct_answer());
        let outcome = AnswerOutcome {
            correct,
            selected: selected.trim().to_string(),
            correct_answer: current.correct_answer().to_string(),
            explanation: current.explanation().to_string(),
        };
        debug!(
            "第 {} 题作答: {:?} -> {}",
            current.ordinal(),
            outcome.selected,
            if correct { "正确" } else { "错误" }
        );

        if correct {
            self.score += 1;
        } else {
            self.wrong_in_pass += 1;
            // 重做轮中答错的题不再入队
            if self.phase == Phase::Active {
                self.incorrect_queue.push(current);
            }
        }

        self.answered_count += 1;
        self.answered = Some(outcome.clone());
        Ok(outcome)
    }

    /// 按选项序号（从 0 开始）作答
    pub fn answer_option(&mut self, index: usize) -> Result<AnswerOutcome, SessionError> {
        let options = self.current()?.options();
        let selected = options
            .get(index)
            .ok_or(SessionError::OptionOutOfRange {
                index,
                len: options.len(),
            })?
            .clone();
        self.answer(&selected)
    }

    /// 进入下一题
    ///
    /// 当前题目必须已经作答
    pub fn advance(&mut self) -> Result<Progress, SessionError> {
        let current = self.current()?;
        if self.answered.is_none() {
            return Err(SessionError::NotAnswered {
                ordinal: current.ordinal(),
            });
        }

        self.answered = None;

        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            return Ok(Progress::Next);
        }

        if self.phase == Phase::Active && !self.incorrect_queue.is_empty() {
            self.questions = std::mem::take(&mut self.incorrect_queue);
            self.cursor = 0;
            self.wrong_in_pass = 0;
            self.phase = Phase::RetryPass;
            info!("🔁 第一轮结束，重做 {} 道错题", self.questions.len());
            return Ok(Progress::RetryPassStarted);
        }

        self.phase = Phase::Completed;
        let final_score = self.completed_score();
        info!(
            "🏁 答题结束: {}/{} (共作答 {} 次)",
            final_score.score, final_score.total, final_score.answered
        );
        Ok(Progress::Completed(final_score))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 当前题目是否已作答
    pub fn is_answered(&self) -> bool {
        self.answered.is_some()
    }

    /// 当前题目的作答结果
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.answered.as_ref()
    }

    /// 本轮中的位置，没有进行中的题目时为 `None`
    pub fn cursor(&self) -> Option<usize> {
        self.current().ok().map(|_| self.cursor)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    pub fn incorrect_queue(&self) -> &[QuestionRecord] {
        &self.incorrect_queue
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            pass_total: self.questions.len(),
            correct: self.score,
            wrong: self.wrong_in_pass,
        }
    }

    /// 最终得分，只在 `Completed` 后可用
    pub fn final_score(&self) -> Option<FinalScore> {
        (self.phase == Phase::Completed).then(|| self.completed_score())
    }

    fn completed_score(&self) -> FinalScore {
        FinalScore {
            score: self.score,
            total: self.total,
            answered: self.answered_count,
        }
    }
}
