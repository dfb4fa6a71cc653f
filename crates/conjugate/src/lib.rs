//! Builds SMILES strings for peptide-linker-peptide conjugates by stitching per-residue fragments into a linker

mod amidation;
mod attachments;
mod chain;
mod connect;
mod conjugator;
pub mod errors;
mod fragment_table;
mod sequence;

// External Crate Imports
use ahash::HashMap;
use derive_more::Display;

pub use amidation::amidate;
pub use attachments::{C_TERMINAL_MARKER, N_TERMINAL_MARKER};
pub use connect::{concatenate, substitute};
pub use errors::{Error, Result, TableError};
pub use fragment_table::DEFAULT_KDL;
pub use sequence::validate;

// Residues ============================================================================================================

// NOTE: Built once at start-up and then only ever borrowed. Every `Sequence` and `Conjugator` holds a reference into
// this table
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FragmentTable {
    residues: HashMap<char, Residue>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Residue {
    code: char,
    name: String,
    backbone: Backbone,
}

/// How a residue's backbone is written out when it's rendered into a peptide chain
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Backbone {
    /// `N[CH](<side-chain>)C(=O)`
    Standard(SideChain),
    /// `NCC(=O)` (glycine)
    Unbranched,
    /// `N1CCC[CH]1C(=O)` (proline)
    Cyclic,
}

type SideChain = String;

// ---------------------------------------------------------------------------------------------------------------------

/// A peptide sequence whose residues have all been found in a [`FragmentTable`]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Sequence<'t> {
    residues: Vec<&'t Residue>,
}

/// Which side of the linker a peptide chain is being rendered for
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Terminus {
    /// Starts with a free amine and ends with a carbonyl carbon bonded to the linker
    #[display("N-terminal")]
    N,
    /// Starts with a nitrogen bonded to the linker and ends with a free carboxylic acid
    #[display("C-terminal")]
    C,
}

// Linkers =============================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attachments<'l> {
    linker: &'l str,
    n_terminal: bool,
    c_terminal: bool,
}

// Assembly ============================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display)]
pub enum Strategy {
    /// Substitute attachment markers when the linker has any, otherwise concatenate
    #[default]
    #[display("auto")]
    Auto,
    #[display("explicit")]
    Explicit,
    #[display("direct")]
    Direct,
}

/// The way peptide chains were actually joined to the linker
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Connection {
    #[display("explicit_attachment_preserved")]
    Explicit,
    #[display("direct_connection_preserved")]
    Direct,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Options {
    /// Convert the final C-terminal `C(=O)O` into `C(=O)N`
    pub amidate: bool,
    /// Drop the first nitrogen of the C-terminal chain when the linker already supplies it (`N[*2]`)
    pub remove_duplicate_nitrogen: bool,
    pub strategy: Strategy,
}

#[derive(Copy, Clone, Debug)]
pub struct Conjugator<'t> {
    table: &'t FragmentTable,
    options: Options,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Conjugate {
    n_terminal: String,
    linker: String,
    c_terminal: String,
    smiles: String,
    connection: Connection,
    residue_count: usize,
}
