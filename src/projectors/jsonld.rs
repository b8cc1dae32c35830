//! # JSON-LD 投影
//!
//! 整个输入生成一个 `@graph` 文档：先是生成者组织与数据集描述节点，
//! 然后每条记录一个 `MolecularEntity` 节点，最后是 `@context`。
//! 节点在会话中累积，流结束时一次写出；`html` 变体把文档嵌入
//! `<script type="application/ld+json">`。
//!
//! ## 依赖关系
//! - 被 `projectors/mod.rs` 调用
//! - 使用 `projectors/{render,schema,subject}.rs`

use crate::models::Molecule;

use super::render::{json_string, json_value};
use super::schema::{schema_entries, MOLECULAR_ENTITY};
use super::subject::SubjectMinter;

pub const CREATOR: &str = "https://github.com/lszeremeta/SDFEater";
pub const LICENSE: &str = "http://opendatacommons.org/licenses/pddl/1.0/";
pub const DATASET_DESCRIPTION: &str = "This is a dataset of molecules generated by SDFEater.";

/// `@context` 中声明的 schema.org 术语
const CONTEXT_TERMS: [&str; 15] = [
    "identifier",
    "name",
    "inChIKey",
    "inChI",
    "smiles",
    "url",
    "iupacName",
    "molecularFormula",
    "molecularWeight",
    "monoisotopicMolecularWeight",
    "description",
    "disambiguatingDescription",
    "image",
    "alternateName",
    "sameAs",
];

/// 一条记录的节点；没有可识别属性时返回 `None`
pub fn render_node(molecule: &Molecule, minter: &mut SubjectMinter) -> Option<String> {
    let entries = schema_entries(molecule);
    if entries.is_empty() {
        return None;
    }

    let subject = minter.mint(molecule);
    let mut members = vec![
        format!("      \"@id\" : {}", json_string(&subject.as_text())),
        format!("      \"@type\" : {}", json_string(MOLECULAR_ENTITY)),
    ];
    members.extend(
        entries
            .iter()
            .map(|e| format!("      \"{}\" : {}", e.term, json_value(&e.value))),
    );
    Some(format!("    {{\n{}\n    }}", members.join(",\n")))
}

/// 完整文档
pub fn render_document(nodes: &[String], year: i32, html: bool) -> String {
    let mut graph = vec![organization_node(), dataset_node(year)];
    graph.extend(nodes.iter().cloned());

    let context: Vec<String> = CONTEXT_TERMS
        .iter()
        .map(|term| {
            format!("    \"{term}\" : {{\n      \"@id\" : \"http://schema.org/{term}\"\n    }}")
        })
        .chain(std::iter::once(
            "    \"schema\" : \"http://schema.org/\"".to_string(),
        ))
        .collect();

    let document = format!(
        "{{\n  \"@graph\" : [\n{}\n  ],\n  \"@context\" : {{\n{}\n  }}\n}}",
        graph.join(",\n"),
        context.join(",\n")
    );

    let mut out = if html {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <title>Example Document</title>\n    \
             <script type=\"application/ld+json\">\n{document}\n    </script>\n  </head>\n</html>"
        )
    } else {
        document
    };
    out.push('\n');
    out
}

fn organization_node() -> String {
    format!(
        "    {{\n      \"@id\": \"{CREATOR}\",\n      \"@type\": \"http://schema.org/Organization\",\n      \
         \"http://schema.org/name\": \"SDFEater\"\n    }}"
    )
}

fn dataset_node(year: i32) -> String {
    [
        "    {".to_string(),
        "      \"@id\": \"#\",".to_string(),
        "      \"@type\": \"http://schema.org/Dataset\",".to_string(),
        "      \"http://schema.org/about\": {".to_string(),
        format!("        \"@id\": \"{CREATOR}\""),
        "      },".to_string(),
        format!("      \"http://schema.org/description\": \"{DATASET_DESCRIPTION}\","),
        "      \"http://schema.org/keywords\": [".to_string(),
        "        \"molecules\",".to_string(),
        "        \"cheminformatics\",".to_string(),
        "        \"chemical compounds\"".to_string(),
        "      ],".to_string(),
        "      \"http://schema.org/license\": {".to_string(),
        format!("        \"@id\": \"{LICENSE}\""),
        "      },".to_string(),
        "      \"http://schema.org/name\": \"Molecules\",".to_string(),
        "      \"http://schema.org/creator\": {".to_string(),
        format!("        \"@id\": \"{CREATOR}\""),
        "      },".to_string(),
        format!("      \"http://schema.org/temporal\": \"{year}\","),
        format!("      \"http://schema.org/url\": \"{CREATOR}\""),
        "    }".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projectors::subject::{SubjectMode, DEFAULT_SUBJECT_BASE};

    fn sample() -> Molecule {
        let mut mol = Molecule::new();
        mol.append_property_value("SMILES", "C\\C=C/C");
        mol.append_property_value("Mass", "56.10");
        mol
    }

    #[test]
    fn test_node_layout() {
        let mut minter = SubjectMinter::new(SubjectMode::Iri, DEFAULT_SUBJECT_BASE).unwrap();
        let node = render_node(&sample(), &mut minter).unwrap();
        assert_eq!(
            node,
            "    {\n      \"@id\" : \"https://example.com/molecule#entity0\",\n      \
             \"@type\" : \"http://schema.org/MolecularEntity\",\n      \
             \"smiles\" : \"C\\\\C=C/C\",\n      \"molecularWeight\" : 56.10\n    }"
        );
    }

    #[test]
    fn test_document_is_valid_json() {
        let mut minter = SubjectMinter::new(SubjectMode::Bnode, DEFAULT_SUBJECT_BASE).unwrap();
        let nodes: Vec<String> = (0..2)
            .filter_map(|_| render_node(&sample(), &mut minter))
            .collect();
        let doc = render_document(&nodes, 2026, false);

        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        let graph = parsed["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph[1]["http://schema.org/temporal"], "2026");
        assert_eq!(graph[3]["@id"], "_:b1");
        assert_eq!(graph[2]["smiles"], "C\\C=C/C");
        assert_eq!(parsed["@context"]["schema"], "http://schema.org/");
    }

    #[test]
    fn test_empty_document_and_html_wrapper() {
        let doc = render_document(&[], 2026, false);
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["@graph"].as_array().unwrap().len(), 2);

        let html = render_document(&[], 2026, true);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<script type=\"application/ld+json\">\n{\n"));
        assert!(html.ends_with("}\n    </script>\n  </head>\n</html>\n"));
    }

    #[test]
    fn test_record_without_schema_properties_has_no_node() {
        let mut minter = SubjectMinter::new(SubjectMode::Iri, DEFAULT_SUBJECT_BASE).unwrap();
        let mut mol = Molecule::new();
        mol.append_property_value("Star", "3");
        assert!(render_node(&mol, &mut minter).is_none());
    }
}
