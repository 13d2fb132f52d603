use quiz_app::{
    load_questions, load_session, logger, App, Config, LoadError, MatchMode, Phase, Progress,
    QuestionOrder,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BANK: &str = "\
QuestionNumber,FinalQuestion,GeneratedAnswerOptions,CorrectAnswer,Explanation
1,What is the capital of France?,\"Paris, London, Berlin, Madrid\",Paris,Paris is the capital of France.
2,Which planet is the largest?,\"Mars, Jupiter, Venus, Earth\",Jupiter,Jupiter is a gas giant.
3,What is 2 + 2?,\"3, 4, 5, 6\",4,Basic arithmetic.
";

/// 在临时目录里写入题库文件
fn write_bank(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("写入题库失败");
    path
}

fn config_for(path: &Path) -> Config {
    Config {
        question_bank: path.to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// 用脚本输入驱动控制台界面，返回全部输出
fn run_app(config: Config, script: &str) -> String {
    logger::init(false);

    let mut output = Vec::new();
    App::new(config)
        .run(script.as_bytes(), &mut output)
        .expect("运行失败");
    String::from_utf8(output).expect("输出不是 UTF-8")
}

#[test]
fn test_record_count_matches_data_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(&dir, "bank.csv", BANK);

    let questions = load_questions(&path).unwrap();
    assert_eq!(questions.len(), 3);
}

#[test]
fn test_loading_twice_gives_independent_equal_sequences() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(&dir, "bank.csv", BANK);

    let first = load_questions(&path).unwrap();
    let mut second = load_questions(&path).unwrap();
    assert_eq!(first, second);

    second.pop();
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 2);
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let err = load_questions(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
}

#[test]
fn test_toml_bank_dispatch() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(
        &dir,
        "bank.toml",
        r#"
[[questions]]
ordinal = 10
prompt = "Capital of Japan?"
options = ["Kyoto", "Tokyo"]
correct_answer = "Tokyo"
"#,
    );

    let questions = load_questions(&path).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].ordinal(), 10);
    assert_eq!(questions[0].options(), &["Kyoto", "Tokyo"]);
}

#[test]
fn test_load_session_shuffled_keeps_all_questions() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(&dir, "bank.csv", BANK);
    let config = Config {
        order: QuestionOrder::Shuffled,
        ..config_for(&path)
    };

    let mut session = load_session(&config.question_bank, &config).unwrap();
    let mut ordinals = Vec::new();
    while session.phase() != Phase::Completed {
        ordinals.push(session.current().unwrap().ordinal());
        let correct = session.current().unwrap().correct_answer().to_string();
        session.answer(&correct).unwrap();
        session.advance().unwrap();
    }

    ordinals.sort_unstable();
    assert_eq!(ordinals, vec![1, 2, 3]);
    assert_eq!(session.final_score().unwrap().score, 3);
}

#[test]
fn test_session_from_file_with_retry_pass() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(&dir, "bank.csv", BANK);
    let config = config_for(&path);
    let mut session = load_session(&config.question_bank, &config).unwrap();

    session.answer_option(1).unwrap(); // London，错
    session.advance().unwrap();
    session.answer_option(1).unwrap(); // Jupiter，对
    session.advance().unwrap();
    session.answer_option(0).unwrap(); // 3，错
    assert_eq!(session.advance(), Ok(Progress::RetryPassStarted));

    session.answer(" PARIS ").unwrap();
    session.advance().unwrap();
    session.answer("4").unwrap();

    match session.advance().unwrap() {
        Progress::Completed(final_score) => {
            assert_eq!(final_score.answered, 5);
            assert_eq!(final_score.score, 3);
            assert_eq!(final_score.total, 3);
        }
        other => panic!("unexpected progress: {other:?}"),
    }
}

#[test]
fn test_console_full_run() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(&dir, "bank.csv", BANK);

    // 第 1 题答错、第 2 题答对、第 3 题答错，然后重做两道错题
    let script = "\n2\n2\n\n2\n\n1\n\n1\n\n2\n\n";
    let output = run_app(config_for(&path), script);

    assert!(output.contains("📚 已加载题库"));
    assert!(output.contains("What is the capital of France?"));
    assert!(output.contains("  1. Paris"));
    assert!(output.contains("⚠️ 请先选择一个答案"));
    assert!(output.contains("❌ 回答错误！正确答案: Paris"));
    assert!(output.contains("💡 解析: Paris is the capital of France."));
    assert!(output.contains("⚠️ 第 1 题已经作答"));
    assert!(output.contains("✅ 回答正确！"));
    assert!(output.contains("Total Questions: 3 | Correct: 1 | Wrong: 2"));
    assert!(output.contains("🔁 第一轮结束，开始重做错题"));
    assert!(output.contains("🏁 答题完成！得分: 3/3"));
}

#[test]
fn test_console_recovers_from_missing_default_bank() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(&dir, "other.csv", BANK);
    let config = config_for(&dir.path().join("missing.csv"));

    let script = format!("1\no {}\n9\nq\n", path.display());
    let output = run_app(config, &script);

    assert!(output.contains("❌ 加载题库失败"));
    assert!(output.contains("请先输入 o <路径> 打开题库"));
    assert!(output.contains("📚 已加载题库"));
    assert!(output.contains("⚠️ 请输入 1 到 4 之间的序号"));
    assert!(output.contains("👋 已退出"));
}

#[test]
fn test_console_contains_mode() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(
        &dir,
        "bank.csv",
        "QuestionNumber,FinalQuestion,GeneratedAnswerOptions,CorrectAnswer,Explanation\n\
         1,Pick one,\"Paris, London\",Paris - the capital,\n",
    );
    let config = Config {
        match_mode: MatchMode::Contains,
        ..config_for(&path)
    };

    let output = run_app(config, "1\n\n");
    assert!(output.contains("✅ 回答正确！"));
    assert!(output.contains("🏁 答题完成！得分: 1/1"));
}

#[test]
fn test_console_empty_bank_finishes_immediately() {
    let dir = TempDir::new().unwrap();
    let path = write_bank(
        &dir,
        "empty.csv",
        "QuestionNumber,FinalQuestion,GeneratedAnswerOptions,CorrectAnswer,Explanation\n",
    );

    let output = run_app(config_for(&path), "1\n");
    assert!(output.contains("🏁 答题完成！得分: 0/0"));
}
