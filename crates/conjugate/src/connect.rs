use crate::{
    Attachments, Sequence, Terminus,
    attachments::{C_TERMINAL_MARKER, N_TERMINAL_MARKER},
};

const JUNCTION_NITROGEN: char = 'N';

/// Replaces the linker's attachment markers with rendered peptide chains
///
/// A marker whose peptide is empty is removed outright, so no detected marker survives into the result. When
/// `remove_duplicate_nitrogen` is set and the linker already supplies the C-terminal junction nitrogen (`N[*2]`), the
/// leading nitrogen of the C-terminal chain is dropped.
#[must_use]
pub fn substitute(
    n_terminal: &Sequence,
    attachments: &Attachments,
    c_terminal: &Sequence,
    remove_duplicate_nitrogen: bool,
) -> String {
    let linker = attachments.linker();
    let mut smiles = linker.to_owned();

    if attachments.has_n_terminal() {
        let n_chain = n_terminal.render(Terminus::N);
        smiles = smiles.replace(N_TERMINAL_MARKER, &n_chain);
    }

    if attachments.has_c_terminal() {
        let c_chain = c_terminal.render(Terminus::C);
        let junction = format!("{JUNCTION_NITROGEN}{C_TERMINAL_MARKER}");
        let c_chain = if remove_duplicate_nitrogen && linker.contains(&junction) {
            c_chain.strip_prefix(JUNCTION_NITROGEN).unwrap_or(c_chain.as_str())
        } else {
            c_chain.as_str()
        };
        smiles = smiles.replace(C_TERMINAL_MARKER, c_chain);
    }

    smiles
}

/// Places the linker, untouched, between the two rendered peptide chains
#[must_use]
pub fn concatenate(n_terminal: &Sequence, linker: &str, c_terminal: &Sequence) -> String {
    let n_chain = n_terminal.render(Terminus::N);
    let c_chain = c_terminal.render(Terminus::C);
    format!("{n_chain}{linker}{c_chain}")
}
