use log::{debug, trace};

use crate::{
    Attachments, Conjugate, Conjugator, Connection, FragmentTable, Options, Result, Sequence, Strategy, amidate,
    concatenate, substitute,
};

impl Default for Options {
    fn default() -> Self {
        Self {
            amidate: true,
            remove_duplicate_nitrogen: true,
            strategy: Strategy::Auto,
        }
    }
}

impl<'t> Conjugator<'t> {
    #[must_use]
    pub const fn new(table: &'t FragmentTable, options: Options) -> Self {
        Self { table, options }
    }

    #[must_use]
    pub const fn table(&self) -> &'t FragmentTable {
        self.table
    }

    #[must_use]
    pub const fn options(&self) -> Options {
        self.options
    }

    /// Joins an N-terminal peptide, a linker, and a C-terminal peptide into a single SMILES string
    ///
    /// Every failure is returned as an `Err`, so one bad conjugate never takes down a whole batch.
    pub fn assemble(
        &self,
        n_terminal: impl AsRef<str>,
        linker: impl AsRef<str>,
        c_terminal: impl AsRef<str>,
    ) -> Result<Conjugate> {
        let (n_terminal, linker, c_terminal) = (n_terminal.as_ref(), linker.as_ref(), c_terminal.as_ref());
        let n_sequence = Sequence::new(self.table, n_terminal)?;
        let c_sequence = Sequence::new(self.table, c_terminal)?;

        let attachments = Attachments::parse(linker);
        // NOTE: Forcing an explicit connection onto a linker without any markers falls back to concatenation, so the
        // peptides are never silently dropped
        let connection = match self.options.strategy {
            Strategy::Auto | Strategy::Explicit if attachments.is_explicit() => Connection::Explicit,
            Strategy::Auto | Strategy::Explicit | Strategy::Direct => Connection::Direct,
        };
        debug!(
            "joining {n_terminal:?} and {c_terminal:?} with {linker:?} ({} strategy, {connection})",
            self.options.strategy
        );

        let mut smiles = match connection {
            Connection::Explicit => substitute(
                &n_sequence,
                &attachments,
                &c_sequence,
                self.options.remove_duplicate_nitrogen,
            ),
            Connection::Direct => concatenate(&n_sequence, linker, &c_sequence),
        };
        if self.options.amidate {
            smiles = amidate(smiles);
        }
        trace!("assembled {smiles}");

        Ok(Conjugate {
            n_terminal: n_terminal.to_owned(),
            linker: linker.to_owned(),
            c_terminal: c_terminal.to_owned(),
            smiles,
            connection,
            residue_count: n_sequence.len() + c_sequence.len(),
        })
    }
}

impl Conjugate {
    #[must_use]
    pub fn n_terminal(&self) -> &str {
        &self.n_terminal
    }

    #[must_use]
    pub fn linker(&self) -> &str {
        &self.linker
    }

    #[must_use]
    pub fn c_terminal(&self) -> &str {
        &self.c_terminal
    }

    #[must_use]
    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    #[must_use]
    pub const fn connection(&self) -> Connection {
        self.connection
    }

    #[must_use]
    pub const fn residue_count(&self) -> usize {
        self.residue_count
    }

    #[must_use]
    pub fn into_smiles(self) -> String {
        self.smiles
    }
}
