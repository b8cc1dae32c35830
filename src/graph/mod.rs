//! # RDF 图模块
//!
//! 外部图接收端：收集三元组并在流结束时序列化。
//!
//! ## 依赖关系
//! - 被 `projectors/` 使用
//! - 子模块: sink

pub mod sink;

pub use sink::{GraphSink, RdfGraph, RdfSyntax};
