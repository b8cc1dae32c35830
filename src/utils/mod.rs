//! # 工具函数模块
//!
//! 提供终端诊断输出和进度提示。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `parsers/` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
