//! # RDF 图投影
//!
//! 把记录加入外部图接收端：`rdf:type schema:MolecularEntity`
//! 加上每个 schema.org 属性一个字面量三元组。没有可识别属性的记录
//! 不产生三元组，也不占用主体编号。
//!
//! ## 依赖关系
//! - 被 `projectors/mod.rs` 调用
//! - 使用 `graph/sink.rs`、`projectors/{schema,subject}.rs`、`oxrdf`

use oxrdf::vocab::rdf;
use oxrdf::{Literal, NamedNode};

use crate::graph::sink::{GraphSink, SCHEMA_NS};
use crate::models::Molecule;

use super::schema::{schema_entries, MOLECULAR_ENTITY};
use super::subject::SubjectMinter;

/// 返回加入的三元组数量
pub fn project<S: GraphSink>(molecule: &Molecule, minter: &mut SubjectMinter, sink: &mut S) -> usize {
    let entries = schema_entries(molecule);
    // 没有 schema.org 属性的记录不分配主体，也不产生 rdf:type
    if entries.is_empty() {
        return 0;
    }

    let subject = minter.mint(molecule).to_rdf();
    sink.add(
        subject.clone(),
        rdf::TYPE.into_owned(),
        NamedNode::new_unchecked(MOLECULAR_ENTITY).into(),
    );
    for entry in &entries {
        sink.add(
            subject.clone(),
            NamedNode::new_unchecked(format!("{SCHEMA_NS}{}", entry.term)),
            Literal::new_simple_literal(entry.value.as_str()).into(),
        );
    }
    entries.len() + 1
}
