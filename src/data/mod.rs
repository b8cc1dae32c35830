//! # 静态数据模块
//!
//! 随程序分发的参考数据。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `projectors/` 使用
//! - 子模块: periodic

pub mod periodic;

pub use periodic::PeriodicTable;
