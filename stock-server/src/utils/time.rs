//! 时间工具函数
//!
//! 台账日期一律为自然日 (YYYY-MM-DD)，按服务器本地时区取值。

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 当前自然日 (本地时区)
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
