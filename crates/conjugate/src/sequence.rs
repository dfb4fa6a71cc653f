use itertools::Itertools;

use crate::{Error, FragmentTable, Residue, Result, Sequence};

/// Checks that every residue in `sequence` is known to `table` (an empty sequence is always valid)
pub fn validate(table: &FragmentTable, sequence: impl AsRef<str>) -> Result<()> {
    Sequence::new(table, sequence).map(drop)
}

impl<'t> Sequence<'t> {
    pub fn new(table: &'t FragmentTable, sequence: impl AsRef<str>) -> Result<Self> {
        let sequence = sequence.as_ref();
        let (residues, unknown): (Vec<_>, Vec<_>) = sequence
            .chars()
            .map(|code| table.get(code).ok_or(code))
            .partition_result();

        if unknown.is_empty() {
            Ok(Self { residues })
        } else {
            Err(Error::invalid_residue(sequence, unknown))
        }
    }

    pub fn residues(&self) -> impl Iterator<Item = &'t Residue> + '_ {
        self.residues.iter().copied()
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
