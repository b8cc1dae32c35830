//! # Cypher 投影
//!
//! 把一条记录写成图数据库插入语句：
//! 一个 `Molecule` 节点（全部属性）、每个原子一个 `Atom` 节点、
//! `RELATED` 边连接分子与原子、`BOND_WITH` 边表示键，最后一行 `;`。
//!
//! 节点名为 `c_<uuid>` / `a<序号>_<uuid>`（`-` 换成 `_`），
//! 悬空的键引用照常输出节点名。
//!
//! ## 依赖关系
//! - 被 `projectors/mod.rs` 调用
//! - 使用 `projectors/render.rs`、`data/periodic.rs`

use crate::data::periodic::{value_text, PeriodicTable};
use crate::models::{Bond, BondStereo, Molecule, PropertyKind};

use super::render::{cypher_value, escape_single_quoted};

/// 渲染一条记录
pub fn render(molecule: &Molecule, periodic: Option<&PeriodicTable>) -> String {
    let suffix = molecule.node_suffix();
    let mut lines = vec![molecule_node(molecule, &suffix)];

    if !molecule.atoms().is_empty() {
        for (i, atom) in molecule.atoms().iter().enumerate() {
            let mut fields = vec![
                format!("symbol: '{}'", escape_single_quoted(&atom.symbol)),
                format!("x: {:?}", atom.x),
                format!("y: {:?}", atom.y),
                format!("z: {:?}", atom.z),
            ];
            if let Some(element) = periodic.and_then(|table| table.lookup(&atom.symbol)) {
                fields.extend(
                    element
                        .iter()
                        .map(|(key, value)| format!("{key}: {}", cypher_value(&value_text(value)))),
                );
            }
            lines.push(format!(
                "CREATE (a{}_{suffix}:Atom {{{}}})",
                i + 1,
                fields.join(", ")
            ));
        }

        let relations: Vec<String> = (1..=molecule.atoms().len())
            .map(|i| format!("(c_{suffix})-[:RELATED]->(a{i}_{suffix})"))
            .collect();
        lines.push(format!("CREATE\n{}", relations.join(",\n")));
    }

    if !molecule.bonds().is_empty() {
        let edges: Vec<String> = molecule
            .bonds()
            .iter()
            .map(|bond| bond_edge(bond, &suffix))
            .collect();
        lines.push(format!("CREATE\n{}", edges.join(",\n")));
    }

    lines.push(";".to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn molecule_node(molecule: &Molecule, suffix: &str) -> String {
    let fields: Vec<String> = molecule
        .properties()
        .map(|(name, values)| {
            let rendered = match values {
                [single] => cypher_value(single),
                many => format!(
                    "[{}]",
                    many.iter()
                        .map(|v| cypher_value(v))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            };
            format!("{}: {rendered}", property_key(name))
        })
        .collect();
    format!("CREATE (c_{suffix}:Molecule {{{}}})", fields.join(", "))
}

/// 属性名去掉空白和 `-`；CAS 号统一为 `CASNumber`
fn property_key(name: &str) -> String {
    if PropertyKind::from_name(name) == Some(PropertyKind::CasNumber) {
        return "CASNumber".to_string();
    }
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn bond_edge(bond: &Bond, suffix: &str) -> String {
    let mut fields = Vec::new();
    if let Some(label) = bond.bond_type.label() {
        fields.push(format!("type: \"{label}\""));
    }
    if let Some(stereo) = stereo_literal(bond.stereo()) {
        fields.push(format!("stereo: {stereo}"));
    }
    format!(
        "(a{}_{suffix})-[:BOND_WITH {{{}}}]->(a{}_{suffix})",
        bond.atom1,
        fields.join(", "),
        bond.atom2
    )
}

/// 不支持的组合返回 `None`（省略该字段）
fn stereo_literal(stereo: BondStereo) -> Option<&'static str> {
    match stereo {
        BondStereo::NotStereo => Some("false"),
        BondStereo::Up => Some("\"up\""),
        BondStereo::Either => Some("\"either\""),
        BondStereo::Down => Some("\"down\""),
        BondStereo::NotDetermined => Some("\"not determined\""),
        BondStereo::CisOrTrans => Some("\"cis or trans (either) double bond\""),
        BondStereo::Unsupported => None,
    }
}
