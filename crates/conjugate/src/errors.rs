use itertools::Itertools;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[diagnostic(help(
        "double-check for typos, only the one-letter codes of the 20 standard amino acids are recognised"
    ))]
    #[error(
        "the sequence {sequence:?} contains residues that could not be found in the fragment table: [{}]",
        .residues.iter().join(", ")
    )]
    InvalidResidue {
        sequence: String,
        residues: Vec<char>,
    },
}

impl Error {
    pub(crate) fn invalid_residue(sequence: &str, residues: impl IntoIterator<Item = char>) -> Self {
        let sequence = sequence.to_owned();
        let residues = residues.into_iter().unique().collect();

        Self::InvalidResidue { sequence, residues }
    }
}

// NOTE: `knuffel` reports its diagnostics against a different `miette` major version, so they're only wrapped as plain
// errors here
#[derive(Debug, Diagnostic, Error)]
pub enum TableError {
    #[error(transparent)]
    Kdl(#[from] knuffel::Error),

    #[diagnostic(help("residue codes must be exactly one character long, like \"A\""))]
    #[error("the residue code {0:?} ({1}) is not a single character")]
    ResidueCode(String, String),

    #[diagnostic(help("residues must be declared as one of `standard`, `unbranched`, or `cyclic`"))]
    #[error("the residue {1:?} has an unknown backbone type {0:?}")]
    Backbone(String, char),

    #[diagnostic(help("add a non-empty `side-chain=\"...\"` property to this residue"))]
    #[error("the standard residue {0:?} is missing a side chain")]
    MissingSideChain(char),

    #[diagnostic(help("remove the `side-chain` property, or declare the residue as `standard`"))]
    #[error("the {1} residue {0:?} has a fixed backbone and cannot take a side chain")]
    UnexpectedSideChain(char, String),

    #[error("the residue {0:?} is defined more than once")]
    DuplicateResidue(char),
}
