// ==========================================
// 酒店连锁运营管理 - 输入校验
// ==========================================
// 职责: 把一行原始输入解析为带类型的字段值
// 约束: 纯函数，不读输入流、不打印；失败返回 InputError，
//       由会话层决定重新提示
// ==========================================

use crate::domain::types::{Gender, TopK};
use chrono::NaiveDate;
use thiserror::Error;

/// 输入校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("不是有效的整数: '{0}'")]
    NotANumber(String),

    #[error("不能为负数: {0}")]
    Negative(i64),

    #[error("长度应在 {min}-{max} 个字符之间，实际 {actual}")]
    Length { min: usize, max: usize, actual: usize },

    #[error("日期格式无效: '{0}' (应为 MM/DD/YYYY 或 YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("性别无效: '{0}' (应为 Male/Female/Other)")]
    InvalidGender(String),

    #[error("应为 yes 或 no: '{0}'")]
    InvalidBool(String),

    #[error("价格无效: '{0}'")]
    InvalidPrice(String),
}

/// 接受的日期格式
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// 非负整数（ID、房间号、人数等）
pub fn parse_non_negative(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value < 0 {
        return Err(InputError::Negative(value));
    }
    Ok(value)
}

/// 限长文本（1..=max 个字符，不做裁剪）
pub fn parse_bounded_text(raw: &str, max: usize) -> Result<String, InputError> {
    let actual = raw.chars().count();
    if actual == 0 || actual > max {
        return Err(InputError::Length {
            min: 1,
            max,
            actual,
        });
    }
    Ok(raw.to_string())
}

/// 自由文本（地址、电话、描述等），原样接受
pub fn parse_free_text(raw: &str) -> Result<String, InputError> {
    Ok(raw.to_string())
}

/// 日期
pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| InputError::InvalidDate(trimmed.to_string()))
}

pub fn parse_gender(raw: &str) -> Result<Gender, InputError> {
    Gender::parse(raw).ok_or_else(|| InputError::InvalidGender(raw.trim().to_string()))
}

/// 是/否
pub fn parse_yes_no(raw: &str) -> Result<bool, InputError> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        other => Err(InputError::InvalidBool(other.to_string())),
    }
}

/// 价格（非负有限数）
pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(InputError::InvalidPrice(trimmed.to_string())),
    }
}

pub fn parse_top_k(raw: &str) -> Result<TopK, InputError> {
    let value = parse_non_negative(raw)?;
    u32::try_from(value)
        .map(TopK)
        .map_err(|_| InputError::NotANumber(raw.trim().to_string()))
}

/// 菜单选项
pub fn parse_choice(raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative(" 42 "), Ok(42));
        assert_eq!(parse_non_negative("0"), Ok(0));
        assert_eq!(parse_non_negative("-1"), Err(InputError::Negative(-1)));
        assert!(matches!(parse_non_negative("abc"), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_parse_bounded_text() {
        assert_eq!(parse_bounded_text("Ann", 30), Ok("Ann".to_string()));
        assert_eq!(
            parse_bounded_text("", 30),
            Err(InputError::Length { min: 1, max: 30, actual: 0 })
        );
        assert!(parse_bounded_text("ABCDEFGHIJK", 10).is_err());
        assert!(parse_bounded_text("ABCDEFGHIJ", 10).is_ok());
        // 按字符计数
        assert!(parse_bounded_text("豪华套房豪华套房豪华", 10).is_ok());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(parse_date("06/01/2024"), Ok(expected));
        assert_eq!(parse_date("2024-06-01"), Ok(expected));
        assert!(matches!(parse_date("2024/13/01"), Err(InputError::InvalidDate(_))));
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_yes_no_and_gender() {
        assert_eq!(parse_yes_no("YES"), Ok(true));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
        assert_eq!(parse_gender("female"), Ok(Gender::Female));
        assert!(parse_gender("x").is_err());
    }

    #[test]
    fn test_parse_price_and_top_k() {
        assert_eq!(parse_price("199.5"), Ok(199.5));
        assert!(parse_price("-3").is_err());
        assert!(parse_price("NaN").is_err());
        assert_eq!(parse_top_k("5"), Ok(TopK(5)));
        assert!(parse_top_k("-5").is_err());
        assert!(parse_top_k("99999999999").is_err());
    }
}
