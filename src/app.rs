//! 控制台答题界面
//!
//! 只负责展示和转发输入，所有答题逻辑都在 [`SessionState`] 中。
//! 输入输出以泛型传入，测试时可以用内存缓冲区驱动。

use crate::config::Config;
use crate::error::{AppError, AppResult, SessionError};
use crate::models::load_questions;
use crate::session::{AnswerOutcome, FinalScore, Progress, SessionState};
use crate::utils::logging::{log_bank_loaded, log_final_score, log_startup};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// 加载题库，按配置整理顺序并开始会话
pub fn load_session(path: &str, config: &Config) -> AppResult<SessionState> {
    let questions = load_questions(path)?;
    log_bank_loaded(path, questions.len());

    let questions = config.order.arrange(questions);
    let mut session = SessionState::new(config.match_mode);
    session.start(questions)?;
    Ok(session)
}

/// 用户输入的指令
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// 选择第 n 个选项（从 1 开始）
    Choose(usize),
    /// 进入下一题
    Next,
    /// 更换题库
    Open(String),
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();

        if let Some(path) = line
            .strip_prefix("open ")
            .or_else(|| line.strip_prefix("o "))
        {
            let path = path.trim();
            if !path.is_empty() {
                return Command::Open(path.to_string());
            }
        }

        match line {
            "" | "n" | "next" => Command::Next,
            "q" | "quit" => Command::Quit,
            _ => match line.parse::<usize>() {
                Ok(n) => Command::Choose(n),
                Err(_) => Command::Unknown(line.to_string()),
            },
        }
    }
}

/// 处理一条指令后是否继续
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Finished,
}

/// 应用主结构
pub struct App {
    config: Config,
    /// 没有成功加载过题库时为 `None`
    session: Option<SessionState>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// 运行答题主循环，直到答题结束、用户退出或输入结束
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        log_startup(&self.config);

        let default_bank = self.config.question_bank.clone();
        if self.open_bank(&default_bank, &mut output)? == Flow::Finished {
            return Ok(());
        }

        for line in input.lines() {
            let line = line.context("读取输入失败")?;
            let command = Command::parse(&line);
            debug!("收到指令: {:?}", command);

            let flow = match command {
                Command::Choose(n) => self.choose(n, &mut output)?,
                Command::Next => self.next(&mut output)?,
                Command::Open(path) => self.open_bank(&path, &mut output)?,
                Command::Quit => {
                    writeln!(output, "👋 已退出")?;
                    Flow::Finished
                }
                Command::Unknown(text) => {
                    writeln!(
                        output,
                        "⚠️ 无法识别的输入: {} (输入选项序号作答, 回车下一题, o <路径> 换题库, q 退出)",
                        text
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Finished {
                break;
            }
        }

        output.flush()?;
        Ok(())
    }

    /// 加载题库并开始新的会话，失败时保留原来的会话
    fn open_bank<W: Write>(&mut self, path: &str, output: &mut W) -> Result<Flow> {
        let session = match load_session(path, &self.config) {
            Ok(session) => session,
            Err(AppError::Load(e)) => {
                warn!("⚠️ 加载题库失败: {}", e);
                writeln!(output, "❌ 加载题库失败: {}", e)?;
                if self.session.is_none() {
                    writeln!(output, "请输入 o <路径> 打开其他题库, 或 q 退出")?;
                }
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e.into()),
        };

        self.session = Some(session);

        writeln!(output, "📚 已加载题库: {}", path)?;
        self.render(output)
    }

    fn choose<W: Write>(&mut self, n: usize, output: &mut W) -> Result<Flow> {
        let Some(session) = self.session.as_mut() else {
            writeln!(output, "请先输入 o <路径> 打开题库")?;
            return Ok(Flow::Continue);
        };

        if n == 0 {
            writeln!(output, "⚠️ 选项序号从 1 开始")?;
            return Ok(Flow::Continue);
        }

        match session.answer_option(n - 1) {
            Ok(outcome) => {
                write_outcome(output, &outcome)?;
                write_stats(output, session)?;
                writeln!(output, "按回车进入下一题")?;
            }
            Err(SessionError::OptionOutOfRange { len, .. }) => {
                writeln!(output, "⚠️ 请输入 1 到 {} 之间的序号", len)?;
            }
            Err(e) => {
                writeln!(output, "⚠️ {}", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn next<W: Write>(&mut self, output: &mut W) -> Result<Flow> {
        let Some(session) = self.session.as_mut() else {
            writeln!(output, "请先输入 o <路径> 打开题库")?;
            return Ok(Flow::Continue);
        };

        match session.advance() {
            Ok(Progress::Next) => {}
            Ok(Progress::RetryPassStarted) => {
                writeln!(output, "🔁 第一轮结束，开始重做错题")?;
            }
            Ok(Progress::Completed(_)) => {}
            Err(SessionError::NotAnswered { .. }) => {
                writeln!(output, "⚠️ 请先选择一个答案")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                writeln!(output, "⚠️ {}", e)?;
                return Ok(Flow::Continue);
            }
        }

        self.render(output)
    }

    /// 显示当前题目，会话结束时显示最终得分
    fn render<W: Write>(&self, output: &mut W) -> Result<Flow> {
        let Some(session) = self.session.as_ref() else {
            return Ok(Flow::Continue);
        };

        if let Some(final_score) = session.final_score() {
            write_final_score(output, &final_score)?;
            log_final_score(&final_score);
            return Ok(Flow::Finished);
        }

        let question = session.current()?;
        let position = session.cursor().map(|c| c + 1).unwrap_or_default();

        writeln!(output)?;
        write_stats(output, session)?;
        writeln!(
            output,
            "第 {}/{} 题 (#{})",
            position,
            session.stats().pass_total,
            question.ordinal()
        )?;
        writeln!(output, "{}", question.prompt())?;
        for (idx, option) in question.options().iter().enumerate() {
            writeln!(output, "  {}. {}", idx + 1, option)?;
        }
        if question.has_placeholder_options() {
            writeln!(output, "（本题缺少选项数据）")?;
        }
        writeln!(output, "请输入选项序号 (o <路径> 换题库, q 退出):")?;

        Ok(Flow::Continue)
    }
}

fn write_outcome<W: Write>(output: &mut W, outcome: &AnswerOutcome) -> Result<()> {
    if outcome.correct {
        writeln!(output, "✅ 回答正确！")?;
    } else {
        writeln!(output, "❌ 回答错误！正确答案: {}", outcome.correct_answer)?;
    }
    if !outcome.explanation.is_empty() {
        writeln!(output, "💡 解析: {}", outcome.explanation)?;
    }
    Ok(())
}

fn write_stats<W: Write>(output: &mut W, session: &SessionState) -> Result<()> {
    let stats = session.stats();
    writeln!(
        output,
        "Total Questions: {} | Correct: {} | Wrong: {}",
        stats.pass_total, stats.correct, stats.wrong
    )?;
    Ok(())
}

fn write_final_score<W: Write>(output: &mut W, final_score: &FinalScore) -> Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "🏁 答题完成！得分: {}/{}",
        final_score.score, final_score.total
    )?;
    Ok(())
}
