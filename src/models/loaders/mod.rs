pub mod csv_loader;
pub mod toml_loader;

pub use csv_loader::{load_csv, load_csv_from_reader};
pub use toml_loader::{load_toml, parse_toml};

use crate::error::LoadError;
use crate::models::question::QuestionRecord;
use std::path::Path;

/// 按扩展名选择加载器：`.toml` 走 TOML，其余按 CSV 处理
pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let is_toml = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        load_toml(path)
    } else {
        load_csv(path)
    }
}
