use std::sync::LazyLock;

use conjugate::{Attachments, Conjugator, FragmentTable, Options, Sequence, Terminus};
use divan::{AllocProfiler, black_box};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

const FRAGMENT_KDL: &str = conjugate::DEFAULT_KDL;
const CONJUGATES: [(&str, &str, &str); 5] = [
    ("A", "[*1]CCOCC[*2]", "K"),
    ("KLAKLAK", "[*1]C(=O)CCOCCOCCN[*2]", "KLAKLAK"),
    ("GGGGS", "CCOCC", "PPG"),
    ("", "[*1]CCOCC[*2]", "ACDEFGHIKLMNPQRSTVWY"),
    ("ACDEFGHIKLMNPQRSTVWY", "OCCOCC", ""),
];

static TABLE: LazyLock<FragmentTable> = LazyLock::new(FragmentTable::default);

fn main() {
    LazyLock::force(&TABLE);
    divan::main();
}

#[divan::bench]
fn build_fragment_table() -> FragmentTable {
    FragmentTable::new("fragment_table.kdl", FRAGMENT_KDL).unwrap()
}

#[divan::bench]
fn validate_sequences() {
    for (n_terminal, _, c_terminal) in CONJUGATES {
        black_box(Sequence::new(&TABLE, n_terminal).unwrap());
        black_box(Sequence::new(&TABLE, c_terminal).unwrap());
    }
}

#[divan::bench]
fn render_chains() {
    for (n_terminal, _, c_terminal) in CONJUGATES {
        let n_terminal = Sequence::new(&TABLE, n_terminal).unwrap();
        let c_terminal = Sequence::new(&TABLE, c_terminal).unwrap();
        black_box(n_terminal.render(Terminus::N));
        black_box(c_terminal.render(Terminus::C));
    }
}

#[divan::bench]
fn parse_attachments() {
    for (_, linker, _) in CONJUGATES {
        black_box(Attachments::parse(linker));
    }
}

#[divan::bench]
fn assemble_conjugates() {
    let conjugator = Conjugator::new(&TABLE, Options::default());
    for (n_terminal, linker, c_terminal) in CONJUGATES {
        black_box(conjugator.assemble(n_terminal, linker, c_terminal).unwrap());
    }
}
