use std::fmt;

use crate::utils::url_validator::UrlValidationError;

#[derive(Debug, Clone)]
pub enum ShortenerError {
    Validation(String),
    NotFound(String),
    GenerationExhausted(u32),
    UniquenessViolation(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Config(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::Validation(_) => "E001",
            ShortenerError::NotFound(_) => "E002",
            ShortenerError::GenerationExhausted(_) => "E003",
            ShortenerError::UniquenessViolation(_) => "E004",
            ShortenerError::DatabaseConfig(_) => "E005",
            ShortenerError::DatabaseConnection(_) => "E006",
            ShortenerError::DatabaseOperation(_) => "E007",
            ShortenerError::FileOperation(_) => "E008",
            ShortenerError::Config(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::Validation(_) => "Validation Error",
            ShortenerError::NotFound(_) => "Resource Not Found",
            ShortenerError::GenerationExhausted(_) => "Short Code Generation Exhausted",
            ShortenerError::UniquenessViolation(_) => "Uniqueness Violation",
            ShortenerError::DatabaseConfig(_) => "Database Configuration Error",
            ShortenerError::DatabaseConnection(_) => "Database Connection Error",
            ShortenerError::DatabaseOperation(_) => "Database Operation Error",
            ShortenerError::FileOperation(_) => "File Operation Error",
            ShortenerError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            ShortenerError::GenerationExhausted(attempts) => format!(
                "no free short code found after {} attempts",
                attempts
            ),
            ShortenerError::Validation(msg)
            | ShortenerError::NotFound(msg)
            | ShortenerError::UniquenessViolation(msg)
            | ShortenerError::DatabaseConfig(msg)
            | ShortenerError::DatabaseConnection(msg)
            | ShortenerError::DatabaseOperation(msg)
            | ShortenerError::FileOperation(msg)
            | ShortenerError::Config(msg) => msg.clone(),
        }
    }

    /// Races on insert are recovered by the service and never reach callers
    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(self, ShortenerError::UniquenessViolation(_))
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

// 便捷的构造函数
impl ShortenerError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortenerError::NotFound(msg.into())
    }

    pub fn generation_exhausted(attempts: u32) -> Self {
        ShortenerError::GenerationExhausted(attempts)
    }

    pub fn uniqueness_violation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::UniquenessViolation(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Config(msg.into())
    }
}

impl From<UrlValidationError> for ShortenerError {
    fn from(err: UrlValidationError) -> Self {
        ShortenerError::Validation(err.to_string())
    }
}

impl From<sea_orm::DbErr> for ShortenerError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                ShortenerError::UniquenessViolation(detail)
            }
            _ => ShortenerError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ShortenerError {
    fn from(err: std::io::Error) -> Self {
        ShortenerError::FileOperation(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortenerError {
    fn from(err: toml::ser::Error) -> Self {
        ShortenerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;
