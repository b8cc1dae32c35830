//! # CVME 投影
//!
//! 类 Turtle 的 CVME 方言（SKOS / DBpedia 词汇）。主体固定为
//! `<urn:uuid:…>`，可识别属性各写一行三元组，随后用 `skos:example`
//! 附上一段固定列宽的 molfile 原子/键块。
//!
//! ## molfile 块格式
//! ```text
//! <urn:uuid:U> skos:example """
//!
//!   CT
//!
//!   3  2  0  0  0  0            999 V2000
//!    -0.8660    0.2500    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
//!   1  2  1  0  0  0  0
//! M  END""" .
//! ```
//!
//! ## 依赖关系
//! - 被 `projectors/mod.rs` 调用
//! - 使用 `projectors/render.rs`

use crate::models::{Atom, Bond, Molecule, PropertyKind};

use super::render::{cvme_value, format_general};

/// 渲染一条记录（三元组 + 空行 + molfile 块）
pub fn render(molecule: &Molecule) -> String {
    let subject = format!("<urn:uuid:{}>", molecule.uuid());
    let mut out = String::new();

    for (name, values) in molecule.properties() {
        if let Some(line) = triple(&subject, name, values) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&molblock(&subject, molecule));
    out
}

/// 单个属性的三元组；不识别的属性返回 `None`
fn triple(subject: &str, name: &str, values: &[String]) -> Option<String> {
    use PropertyKind::*;

    let first = values.first()?;
    let kind = PropertyKind::from_name(name)?;
    let object = match kind {
        Smiles => ("skos:notation", typed(first, "^^chemskos:SMILES")),
        Formula => ("skos:hiddenLabel", typed(first, "@en")),
        Definition => ("skos:definition", typed(first, "@en")),
        InchiKey => ("dbp:inchikey", typed(first, "@en")),
        Inchi => ("dbo:inchi", typed(first, "@en")),
        Mass => ("dbo:molecularWeight", typed(first, "@en")),
        IupacName => ("skos:prefLabel", typed(first, "@en")),
        CasNumber => ("dbo:casNumber", typed(first, "@en")),
        Synonyms => (
            "skos:altLabel",
            values
                .iter()
                .map(|v| typed(v, "@en"))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        PubMedLinks | KnapsackLinks | LipidMapsLinks | UniProtLinks | RheaLinks => (
            "rdfs:seeAlso",
            values
                .iter()
                .map(|v| cvme_value(v))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        KeggCompoundLinks | PubChemMoleculeLinks | PubChemSubstanceLinks => {
            ("rdfs:seeAlso", cvme_value(first))
        }
        PatentLinks => ("cvme:patent", cvme_value(first)),
        ChebiId | DrugbankId | Name => return None,
    };
    Some(format!("{subject} {} {} .", object.0, object.1))
}

/// 语言标签/数据类型只加在带引号的字符串字面量上
fn typed(value: &str, annotation: &str) -> String {
    let literal = cvme_value(value);
    if literal.starts_with('\'') {
        format!("{literal}{annotation}")
    } else {
        literal
    }
}

// ─────────────────────────────────────────────────────────────
// 固定列宽 molfile 块
// ─────────────────────────────────────────────────────────────

fn molblock(subject: &str, molecule: &Molecule) -> String {
    let mut lines = vec![
        format!("{subject} skos:example \"\"\""),
        String::new(),
        "  CT".to_string(),
        String::new(),
        format!(
            "{}{}  0  0  0  0            999 V2000",
            pad_count(molecule.atoms().len() as i64),
            pad_count(molecule.bonds().len() as i64)
        ),
    ];
    lines.extend(molecule.atoms().iter().map(atom_line));
    lines.extend(molecule.bonds().iter().map(bond_line));
    lines.push("M  END\"\"\" .".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// 3 列右对齐；超过 3 位时原样输出
fn pad_count(n: i64) -> String {
    if n <= 9 {
        format!("  {n}")
    } else if n <= 99 {
        format!(" {n}")
    } else {
        n.to_string()
    }
}

fn atom_line(atom: &Atom) -> String {
    let mut line = String::new();
    for value in [atom.x, atom.y, atom.z] {
        line.push_str(&coordinate(value));
    }
    if atom.symbol.chars().count() == 1 {
        line.push_str(&format!(" {}   ", atom.symbol));
    } else {
        line.push_str(&format!(" {}  ", atom.symbol));
    }
    line.push_str("0  0  0  0  0  0  0  0  0  0  0  0");
    line
}

/// 4 位有效数字，按符号与长度补零后右对齐
fn coordinate(value: f32) -> String {
    let mut text = format_general(f64::from(value), 4);
    if value < 0.0 {
        match text.len() {
            6 => text.push('0'),
            5 => text.push_str("00"),
            _ => {}
        }
        format!("   {text}")
    } else {
        match text.len() {
            5 => text.push('0'),
            4 => text.push_str("00"),
            _ => {}
        }
        format!("    {text}")
    }
}

fn bond_line(bond: &Bond) -> String {
    format!(
        "{}{}  {}  {}  0  0  0",
        pad_count(i64::from(bond.atom1)),
        pad_count(i64::from(bond.atom2)),
        bond.bond_type.code(),
        bond.stereo
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Molecule {
        let mut mol = Molecule::new();
        mol.add_atom(Atom::new("C", -0.866, 0.25, 0.0));
        mol.add_atom(Atom::new("C", 0.0, -0.25, 0.0));
        mol.add_atom(Atom::new("Cl", 12.5, -1.5, 0.0));
        mol.add_bond(Bond::new(1, 2, 1, 0));
        mol.add_bond(Bond::new(2, 3, 1, 6));
        mol
    }

    #[test]
    fn test_counts_line_padding() {
        let out = render(&sample());
        assert!(out.contains("\n  3  2  0  0  0  0            999 V2000\n"));
        assert_eq!(pad_count(42), " 42");
        assert_eq!(pad_count(123), "123");
    }

    #[test]
    fn test_molblock_lines() {
        let mol = sample();
        let out = render(&mol);
        let lines: Vec<&str> = out.lines().collect();
        let uuid = mol.uuid();

        // 无属性时只有一个空行
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], format!("<urn:uuid:{uuid}> skos:example \"\"\""));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "  CT");
        assert_eq!(lines[4], "");
        assert_eq!(
            lines[6],
            "   -0.8660    0.2500    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0"
        );
        assert_eq!(
            lines[7],
            "    0.0000   -0.2500    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0"
        );
        assert_eq!(
            lines[8],
            "    12.500   -1.5000    0.0000 Cl  0  0  0  0  0  0  0  0  0  0  0  0"
        );
        assert_eq!(lines[9], "  1  2  1  0  0  0  0");
        assert_eq!(lines[10], "  2  3  1  6  0  0  0");
        assert_eq!(lines[11], "M  END\"\"\" .");
    }

    #[test]
    fn test_property_triples() {
        let mut mol = Molecule::new();
        mol.append_property_value("SMILES", "CCO");
        mol.append_property_value("Mass", "46.06840");
        mol.append_property_value("Synonyms", "alcohol");
        mol.append_property_value("Synonyms", "ethyl alcohol");
        mol.append_property_value(
            "UniProt Database Links",
            "https://www.uniprot.org/uniprot/P12345",
        );
        mol.append_property_value("Star", "3");
        let out = render(&mol);
        let u = format!("<urn:uuid:{}>", mol.uuid());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], format!("{u} skos:notation 'CCO'^^chemskos:SMILES ."));
        assert_eq!(lines[1], format!("{u} dbo:molecularWeight 46.06840 ."));
        assert_eq!(
            lines[2],
            format!("{u} skos:altLabel 'alcohol'@en, 'ethyl alcohol'@en .")
        );
        assert_eq!(
            lines[3],
            format!("{u} rdfs:seeAlso <https://www.uniprot.org/uniprot/P12345> .")
        );
        assert_eq!(lines[4], "");
    }
}
