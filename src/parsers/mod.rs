//! # 解析器模块
//!
//! SDF/molfile 的流式解析：逐行分类、链接改写和记录分派。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `projectors/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: classify, links, sdf

pub mod classify;
pub mod links;
pub mod sdf;

pub use sdf::{ErrorPolicy, ParseOptions, ParseStats, RecordHandler, SdfDispatcher};
