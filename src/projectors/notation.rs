//! # 线性标识投影（SMILES / InChI）
//!
//! 每条记录输出一行；记录缺少该属性时输出空行，保证行号与记录序号对应。
//!
//! ## 依赖关系
//! - 被 `projectors/mod.rs` 调用

use crate::models::{Molecule, PropertyKind};

/// 输出的标识类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Smiles,
    Inchi,
}

impl Notation {
    fn kind(self) -> PropertyKind {
        match self {
            Notation::Smiles => PropertyKind::Smiles,
            Notation::Inchi => PropertyKind::Inchi,
        }
    }
}

pub fn render(molecule: &Molecule, notation: Notation) -> String {
    let mut line = molecule
        .first_of(notation.kind())
        .unwrap_or_default()
        .to_string();
    line.push('\n');
    line
}
