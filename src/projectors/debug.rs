//! # 调试输出
//!
//! 原样列出记录内容，包括不被结构化格式识别的属性：
//!
//! ```text
//! Title = Ethanol
//! Key = SMILES
//! Values = [CCO]
//! C (-0.866,0.25,0)
//! (C[1])--1--(C[2])
//! ```
//!
//! 悬空的键引用以 `?` 作为元素符号。
//!
//! ## 依赖关系
//! - 被 `projectors/mod.rs` 调用

use crate::models::Molecule;

pub fn render(molecule: &Molecule) -> String {
    let mut out = String::new();

    if let Some(title) = molecule.title() {
        out.push_str(&format!("Title = {title}\n"));
    }
    for (name, values) in molecule.properties() {
        out.push_str(&format!("Key = {name}\nValues = [{}]\n", values.join(", ")));
    }
    for atom in molecule.atoms() {
        out.push_str(&format!(
            "{} ({},{},{})\n",
            atom.symbol, atom.x, atom.y, atom.z
        ));
    }
    for bond in molecule.bonds() {
        out.push_str(&format!(
            "({}[{}])--{}--({}[{}])\n",
            symbol_at(molecule, bond.atom1),
            bond.atom1,
            bond.bond_type.code(),
            symbol_at(molecule, bond.atom2),
            bond.atom2
        ));
    }
    out.push_str("$$$$\n");
    out
}

fn symbol_at(molecule: &Molecule, index: i32) -> &str {
    molecule.atom(index).map_or("?", |atom| atom.symbol.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Bond};

    #[test]
    fn test_debug_dump() {
        let mut mol = Molecule::new();
        mol.set_title("Ethanol");
        mol.add_atom(Atom::new("C", -0.866, 0.25, 0.0));
        mol.add_atom(Atom::new("O", 0.5, 0.0, 0.0));
        mol.add_bond(Bond::new(1, 2, 1, 0));
        mol.add_bond(Bond::new(2, 5, 2, 0));
        mol.append_property_value("Star", "3");

        let out = render(&mol);
        assert_eq!(
            out,
            "Title = Ethanol\n\
             Key = Star\n\
             Values = [3]\n\
             C (-0.866,0.25,0)\n\
             O (0.5,0,0)\n\
             (C[1])--1--(O[2])\n\
             (O[2])--2--(?[5])\n\
             $$$$\n"
        );
    }
}
