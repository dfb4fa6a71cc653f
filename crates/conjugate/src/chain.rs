use crate::{Backbone, Residue, Sequence, Terminus};

// NOTE: Closes the final carbonyl of a C-terminal chain into a free carboxylic acid
const HYDROXYL: &str = "O";

impl Backbone {
    /// The fragment for a single residue in the middle of a chain, ending on its carbonyl
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Self::Standard(side_chain) => format!("N[CH]({side_chain})C(=O)"),
            Self::Unbranched => "NCC(=O)".to_owned(),
            Self::Cyclic => "N1CCC[CH]1C(=O)".to_owned(),
        }
    }
}

impl Residue {
    /// Renders this residue at position `index` of a `length`-residue chain
    #[must_use]
    pub fn fragment(&self, terminus: Terminus, index: usize, length: usize) -> String {
        let mut fragment = self.backbone.fragment();
        // Both ends of an N-terminal chain, and the start of a C-terminal one, use the same template as the interior
        if terminus == Terminus::C && index + 1 == length {
            fragment.push_str(HYDROXYL);
        }
        fragment
    }
}

impl Sequence<'_> {
    /// Renders the peptide chain that will sit on the `terminus` side of a linker
    #[must_use]
    pub fn render(&self, terminus: Terminus) -> String {
        let length = self.len();
        self.residues()
            .enumerate()
            .map(|(index, residue)| residue.fragment(terminus, index, length))
            .collect()
    }
}
