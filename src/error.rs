//! # 统一错误处理模块
//!
//! 定义 SDFEater 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// SDFEater 统一错误类型
#[derive(Error, Debug)]
pub enum SdfError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// 输入流读取失败（非文件打开阶段）
    #[error("Error while reading input at line {line}")]
    InputError {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// 投影输出写入失败（stdout 或输出文件）
    #[error("Error while writing output")]
    OutputError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Error while parsing file at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    #[error("Failed to load periodic table data: {0}")]
    PeriodicTable(String),

    // ─────────────────────────────────────────────────────────────
    // RDF 图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid IRI '{iri}': {reason}")]
    InvalidIri { iri: String, reason: String },

    #[error("Failed to serialize RDF graph as {format}")]
    GraphSerialize {
        format: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SdfError {
    /// 进程退出码：参数错误为 2（与 clap 的用法错误一致），其余为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            SdfError::InvalidArgument(_) | SdfError::InvalidIri { .. } => 2,
            _ => 1,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(SdfError::InvalidArgument("x".into()).exit_code(), 2);
        let parse = SdfError::ParseError {
            line: 7,
            reason: "bad float".into(),
        };
        assert_eq!(parse.exit_code(), 1);
        assert_eq!(
            parse.to_string(),
            "Error while parsing file at line 7: bad float"
        );
    }
}
