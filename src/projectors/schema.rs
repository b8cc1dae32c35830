//! # schema.org 属性映射
//!
//! RDF、JSON-LD、RDFa、Microdata 共用：按插入顺序取每个可识别属性的
//! 首个值，映射为 schema.org 术语。
//!
//! ## 依赖关系
//! - 被 `projectors/{rdf,jsonld,markup}.rs` 使用
//! - 使用 `models/property.rs`

use crate::models::{Molecule, PropertyKind};

pub const MOLECULAR_ENTITY: &str = "http://schema.org/MolecularEntity";

/// 一个 schema.org 属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub term: &'static str,
    pub value: String,
}

impl SchemaEntry {
    /// `url` 的值渲染为链接
    pub fn is_link(&self) -> bool {
        self.term == "url"
    }
}

pub fn schema_entries(molecule: &Molecule) -> Vec<SchemaEntry> {
    molecule
        .properties()
        .filter_map(|(name, values)| {
            let kind = PropertyKind::from_name(name)?;
            let term = kind.schema_term()?;
            let first = values.first()?;
            Some(SchemaEntry {
                term,
                value: kind.schema_value(first),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_insertion_order() {
        let mut mol = Molecule::new();
        mol.append_property_value("SMILES", "CCO");
        mol.append_property_value("Star", "3");
        mol.append_property_value("ChEBI ID", "CHEBI:16236");
        mol.append_property_value("Synonyms", "alcohol");
        mol.append_property_value("Synonyms", "ethyl alcohol");

        let entries = schema_entries(&mol);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].term, "smiles");
        assert_eq!(
            entries[1].value,
            "https://www.ebi.ac.uk/chebi/searchId.do?chebiId=CHEBI:16236"
        );
        assert!(entries[1].is_link());
        assert_eq!(entries[2].value, "alcohol");
    }
}
