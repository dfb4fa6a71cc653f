const CARBOXYLIC_ACID: &str = "C(=O)O";
const AMIDE_NITROGEN: &str = "N";

/// Turns the last free acid, `C(=O)O`, in `smiles` into an amide, `C(=O)N`
///
/// Only that final hydroxyl oxygen is touched. Every other character, including any earlier acids, is left as-is, and a
/// string without an acid is returned unchanged. Note that this isn't idempotent when an earlier acid exists (from an
/// Asp or Glu side chain, for example), since a second pass will find and convert that one instead.
#[must_use]
pub fn amidate(smiles: impl Into<String>) -> String {
    let mut smiles = smiles.into();
    if let Some(start) = smiles.rfind(CARBOXYLIC_ACID) {
        let hydroxyl = start + CARBOXYLIC_ACID.len() - 1;
        smiles.replace_range(hydroxyl..=hydroxyl, AMIDE_NITROGEN);
    }
    smiles
}
