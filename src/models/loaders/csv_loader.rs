//! CSV 题库加载
//!
//! 支持两种列布局，根据表头自动识别：
//!
//! - 增强版：`QuestionNumber, FinalQuestion, GeneratedAnswerOptions, CorrectAnswer, Explanation`，
//!   选项之间用 `", "` 分隔
//! - 结构化版：`Question, Answer Options, Correct Answer & Explanation`（`Question Number` 可选），
//!   选项按行分隔，答案列在第一个 `.` 处拆分为正确答案和解析

use crate::error::LoadError;
use crate::models::question::QuestionRecord;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const ENHANCED_COLUMNS: [&str; 5] = [
    "QuestionNumber",
    "FinalQuestion",
    "GeneratedAnswerOptions",
    "CorrectAnswer",
    "Explanation",
];

const STRUCTURED_COLUMNS: [&str; 3] = ["Question", "Answer Options", "Correct Answer & Explanation"];
const STRUCTURED_NUMBER_COLUMN: &str = "Question Number";

/// 识别出的列布局，保存各列在表头中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Enhanced {
        number: usize,
        question: usize,
        options: usize,
        answer: usize,
        explanation: usize,
    },
    Structured {
        number: Option<usize>,
        question: usize,
        options: usize,
        answer_and_explanation: usize,
    },
}

/// 从 CSV 文件加载题目
pub fn load_csv(path: &Path) -> Result<Vec<QuestionRecord>, LoadError> {
    let bank = path.display().to_string();

    if !path.exists() {
        return Err(LoadError::NotFound { path: bank });
    }

    let file = std::fs::File::open(path).map_err(|e| LoadError::read_failed(&bank, e))?;
    let questions = load_csv_from_reader(file, &bank)?;

    info!("✓ 从 {} 加载了 {} 道题目", bank, questions.len());
    Ok(questions)
}

/// 从任意输入流解析 CSV 题库
///
/// `source` 只用于错误信息
pub fn load_csv_from_reader<R: Read>(reader: R, source: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LoadError::read_failed(source, e))?
        .clone();
    let layout = detect_layout(&headers, source)?;
    debug!("{} 的列布局: {:?}", source, layout);

    let mut questions = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| LoadError::read_failed(source, e))?;
        let row = idx + 1;
        questions.push(parse_row(&record, layout, row, source)?);
    }

    Ok(questions)
}

fn detect_layout(headers: &StringRecord, source: &str) -> Result<Layout, LoadError> {
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let enhanced: Vec<Option<usize>> = ENHANCED_COLUMNS.iter().map(|&c| position(c)).collect();
    if let [Some(number), Some(question), Some(options), Some(answer), Some(explanation)] = enhanced[..] {
        return Ok(Layout::Enhanced {
            number,
            question,
            options,
            answer,
            explanation,
        });
    }

    let structured: Vec<Option<usize>> = STRUCTURED_COLUMNS.iter().map(|&c| position(c)).collect();
    if let [Some(question), Some(options), Some(answer_and_explanation)] = structured[..] {
        return Ok(Layout::Structured {
            number: position(STRUCTURED_NUMBER_COLUMN),
            question,
            options,
            answer_and_explanation,
        });
    }

    // 两种布局都不完整时，报告缺列较少的那一种
    let missing_enhanced = missing_columns(&ENHANCED_COLUMNS, &enhanced);
    let missing_structured = missing_columns(&STRUCTURED_COLUMNS, &structured);
    let present_structured = STRUCTURED_COLUMNS.len() - missing_structured.len();
    let present_enhanced = ENHANCED_COLUMNS.len() - missing_enhanced.len();

    let columns = if present_structured > present_enhanced {
        missing_structured
    } else {
        missing_enhanced
    };

    Err(LoadError::MissingColumns {
        path: source.to_string(),
        columns,
    })
}

fn missing_columns(names: &[&str], found: &[Option<usize>]) -> Vec<String> {
    names
        .iter()
        .zip(found)
        .filter(|(_, pos)| pos.is_none())
        .map(|(name, _)| name.to_string())
        .collect()
}

fn parse_row(record: &StringRecord, layout: Layout, row: usize, source: &str) -> Result<QuestionRecord, LoadError> {
    // 列数不足的行按空字段处理
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    match layout {
        Layout::Enhanced {
            number,
            question,
            options,
            answer,
            explanation,
        } => {
            let ordinal = parse_ordinal(field(number), row, source);
            Ok(QuestionRecord::new(
                ordinal,
                field(question),
                split_options(field(options), ", "),
                field(answer),
                field(explanation),
            ))
        }
        Layout::Structured {
            number,
            question,
            options,
            answer_and_explanation,
        } => {
            let ordinal = match number {
                Some(idx) => parse_ordinal(field(idx), row, source),
                None => row as u32,
            };
            let (answer, explanation) = split_answer_and_explanation(field(answer_and_explanation));
            Ok(QuestionRecord::new(
                ordinal,
                field(question),
                split_options(field(options), "\n"),
                answer,
                explanation,
            ))
        }
    }
}

/// 解析题号
///
/// 接受 `1.0` 这类整数值的小数写法；空值或无法解析时使用行号
fn parse_ordinal(value: &str, row: usize, source: &str) -> u32 {
    if value.is_empty() {
        return row as u32;
    }

    if let Ok(ordinal) = value.parse::<u32>() {
        return ordinal;
    }

    match value.parse::<f64>() {
        Ok(n) if n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64 => n as u32,
        _ => {
            warn!(
                "⚠️ {} 第 {} 行的题号 '{}' 无法解析，改用行号",
                source, row, value
            );
            row as u32
        }
    }
}

/// 拆分选项字符串，去掉空白和空片段
fn split_options(raw: &str, delimiter: &str) -> Vec<String> {
    raw.split(delimiter)
        .map(|option| option.trim())
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}

/// 在第一个 `.` 处拆分为（正确答案, 解析）
fn split_answer_and_explanation(raw: &str) -> (String, String) {
    match raw.split_once('.') {
        Some((answer, explanation)) => (answer.trim().to_string(), explanation.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}
