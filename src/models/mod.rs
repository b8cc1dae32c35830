//! # 数据模型模块
//!
//! 定义 SDF 记录（分子、原子、键）和可识别属性名的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`projectors/` 和 `commands/` 使用
//! - 子模块: molecule, property

pub mod molecule;
pub mod property;

pub use molecule::{Atom, Bond, BondStereo, BondType, Molecule};
pub use property::PropertyKind;
