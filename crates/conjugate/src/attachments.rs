use crate::Attachments;

/// Where the N-terminal peptide joins the linker
pub const N_TERMINAL_MARKER: &str = "[*1]";
/// Where the C-terminal peptide joins the linker
pub const C_TERMINAL_MARKER: &str = "[*2]";

impl<'l> Attachments<'l> {
    // NOTE: This is a plain substring search, so a marker that happens to appear inside some unrelated bracket atom is
    // still treated as an attachment point
    #[must_use]
    pub fn parse(linker: &'l str) -> Self {
        Self {
            linker,
            n_terminal: linker.contains(N_TERMINAL_MARKER),
            c_terminal: linker.contains(C_TERMINAL_MARKER),
        }
    }

    #[must_use]
    pub const fn linker(&self) -> &'l str {
        self.linker
    }

    #[must_use]
    pub const fn has_n_terminal(&self) -> bool {
        self.n_terminal
    }

    #[must_use]
    pub const fn has_c_terminal(&self) -> bool {
        self.c_terminal
    }

    /// Whether peptides should be substituted into the linker's markers, rather than concatenated around it
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        self.n_terminal || self.c_terminal
    }
}
