// Standard Library Imports
use std::collections::hash_map::Entry;

// External Crate Imports
use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use knuffel::Decode;

// Local Crate Imports
use crate::{Backbone, FragmentTable, Residue, errors::TableError};

pub const DEFAULT_KDL: &str = include_str!("../data/fragment_table.kdl");

// Public API ==========================================================================================================

impl FragmentTable {
    pub fn new(file_name: impl AsRef<str>, kdl_text: impl AsRef<str>) -> Result<Self, TableError> {
        let parsed_table: FragmentTableKdl = knuffel::parse(file_name.as_ref(), kdl_text.as_ref())?;
        parsed_table.validate()
    }

    #[must_use]
    pub fn get(&self, code: char) -> Option<&Residue> {
        self.residues.get(&code)
    }

    #[must_use]
    pub fn contains(&self, code: char) -> bool {
        self.residues.contains_key(&code)
    }

    /// Residue codes in alphabetical order
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.residues.keys().copied().sorted_unstable()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl Default for FragmentTable {
    fn default() -> Self {
        // SAFETY: The bundled table is validated by the tests below, so this can't fail at runtime
        Self::new("fragment_table.kdl", DEFAULT_KDL).unwrap()
    }
}

impl Residue {
    #[must_use]
    pub const fn code(&self) -> char {
        self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn backbone(&self) -> &Backbone {
        &self.backbone
    }
}

// KDL File Schema =====================================================================================================

#[derive(Debug, Decode)]
struct FragmentTableKdl {
    #[knuffel(child, unwrap(children))]
    residues: Vec<ResidueKdl>,
}

#[derive(Debug, Decode)]
struct ResidueKdl {
    #[knuffel(node_name)]
    backbone: String,
    #[knuffel(argument)]
    code: String,
    #[knuffel(argument)]
    name: String,
    #[knuffel(property(name = "side-chain"))]
    side_chain: Option<String>,
}

// Validation ==========================================================================================================

impl FragmentTableKdl {
    fn validate(self) -> Result<FragmentTable, TableError> {
        let mut residues = HashMap::with_capacity(self.residues.len());
        for residue in self.residues {
            let residue = Residue::try_from(residue)?;
            match residues.entry(residue.code) {
                Entry::Occupied(_) => return Err(TableError::DuplicateResidue(residue.code)),
                Entry::Vacant(entry) => {
                    entry.insert(residue);
                }
            }
        }

        Ok(FragmentTable { residues })
    }
}

impl TryFrom<ResidueKdl> for Residue {
    type Error = TableError;

    fn try_from(
        ResidueKdl {
            backbone,
            code,
            name,
            side_chain,
        }: ResidueKdl,
    ) -> Result<Self, Self::Error> {
        let mut chars = code.chars();
        let (Some(code), None) = (chars.next(), chars.next()) else {
            return Err(TableError::ResidueCode(code, name));
        };

        let backbone = match (backbone.as_str(), side_chain) {
            ("standard", Some(side_chain)) if !side_chain.is_empty() => Backbone::Standard(side_chain),
            ("standard", _) => return Err(TableError::MissingSideChain(code)),
            ("unbranched", None) => Backbone::Unbranched,
            ("cyclic", None) => Backbone::Cyclic,
            (kind @ ("unbranched" | "cyclic"), Some(_)) => {
                return Err(TableError::UnexpectedSideChain(code, kind.to_owned()));
            }
            (kind, _) => return Err(TableError::Backbone(kind.to_owned(), code)),
        };

        Ok(Self {
            code,
            name,
            backbone,
        })
    }
}

// Module Tests ========================================================================================================
