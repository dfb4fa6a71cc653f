//! Runs a whole table of conjugates through a [`Conjugator`], one CSV row at a time

use std::io::Cursor;

use conjugate::Conjugator;
use log::{info, warn};
use miette::Diagnostic;
use polars::prelude::*;
use thiserror::Error;

// Constants ===========================================================================================================

struct InputColumns;
impl InputColumns {
    const ALL: [&str; 3] = [Self::N_TERMINAL, Self::LINKER, Self::C_TERMINAL];
    const N_TERMINAL: &str = "Nterm";
    const LINKER: &str = "Linker";
    const C_TERMINAL: &str = "Cterm";
}

struct OutputColumns;
impl OutputColumns {
    const RESULT: &str = "Result";
}

// Public API ==========================================================================================================

#[derive(Debug, Diagnostic, Error)]
pub enum BatchError {
    #[diagnostic(help("the header row needs `Nterm`, `Linker`, and `Cterm` columns, spelled exactly like that"))]
    #[error("the input table is missing the required column(s): {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T, E = BatchError> = std::result::Result<T, E>;

/// Assembles every row of `csv`, returning the same table with an extra `Result` column
///
/// Each `Result` cell holds either the assembled SMILES or a description of why that row failed. Failed rows don't
/// affect any others, but a table missing one of the required columns is rejected before anything is assembled.
pub fn assemble_csv(conjugator: &Conjugator, csv: &str) -> Result<String> {
    let mut df = load_table(csv)?;
    check_columns(&df)?;

    let results = assemble_rows(conjugator, &df)?;
    df.with_column(Series::new(OutputColumns::RESULT.into(), results))?;

    into_csv(&mut df)
}

// Private Functions ===================================================================================================

fn load_table(csv: &str) -> Result<DataFrame> {
    // NOTE: An inference length of 0 reads every column as text, so sequences are never mistaken for numbers
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(csv))
        .finish()?;
    Ok(df)
}

fn check_columns(df: &DataFrame) -> Result<()> {
    let present = df.get_column_names();
    let columns: Vec<_> = InputColumns::ALL
        .into_iter()
        .filter(|&required| !present.iter().any(|column| column.as_str() == required))
        .map(str::to_owned)
        .collect();

    if columns.is_empty() {
        Ok(())
    } else {
        Err(BatchError::MissingColumns { columns })
    }
}

fn assemble_rows(conjugator: &Conjugator, df: &DataFrame) -> Result<Vec<String>> {
    let n_terminals = text_column(df, InputColumns::N_TERMINAL)?;
    let linkers = text_column(df, InputColumns::LINKER)?;
    let c_terminals = text_column(df, InputColumns::C_TERMINAL)?;

    let mut failures = 0;
    let results: Vec<_> = n_terminals
        .into_iter()
        .zip(linkers)
        .zip(c_terminals)
        .enumerate()
        .map(|(row, ((n_terminal, linker), c_terminal))| {
            // NOTE: Empty cells come through as nulls
            let (n_terminal, linker, c_terminal) = (
                n_terminal.unwrap_or_default(),
                linker.unwrap_or_default(),
                c_terminal.unwrap_or_default(),
            );
            conjugator
                .assemble(n_terminal, linker, c_terminal)
                .map_or_else(
                    |error| {
                        failures += 1;
                        warn!("row {}: {error}", row + 1);
                        error.to_string()
                    },
                    |conjugate| conjugate.into_smiles(),
                )
        })
        .collect();

    info!(
        "assembled {} of {} conjugates",
        results.len() - failures,
        results.len()
    );
    Ok(results)
}

fn text_column<'df>(df: &'df DataFrame, name: &str) -> Result<&'df StringChunked> {
    Ok(df.column(name)?.as_materialized_series().str()?)
}

fn into_csv(df: &mut DataFrame) -> Result<String> {
    let mut result = Vec::new();
    CsvWriter::new(&mut result).finish(df)?;
    // SAFETY: The `CsvWriter` should always return valid UTF-8
    Ok(String::from_utf8(result).unwrap())
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use conjugate::{FragmentTable, Options};
    use indoc::indoc;
    use insta::assert_snapshot;

    use super::*;

    static TABLE: LazyLock<FragmentTable> = LazyLock::new(FragmentTable::default);

    fn conjugator() -> Conjugator<'static> {
        Conjugator::new(&TABLE, Options::default())
    }

    #[test]
    fn assemble_table() {
        let csv = indoc! {"
            Nterm,Linker,Cterm
            A,[*1]CCOCC[*2],K
            ,[*1]CCOCC[*2],
            GS,CCOCC,PK
            G,[*1]CCOCCN[*2],G
        "};
        assert_snapshot!(assemble_csv(&conjugator(), csv).unwrap(), @r"
        Nterm,Linker,Cterm,Result
        A,[*1]CCOCC[*2],K,N[CH](C)C(=O)CCOCCN[CH](CCCCN)C(=O)N
        ,[*1]CCOCC[*2],,CCOCC
        GS,CCOCC,PK,NCC(=O)N[CH](CO)C(=O)CCOCCN1CCC[CH]1C(=O)N[CH](CCCCN)C(=O)N
        G,[*1]CCOCCN[*2],G,NCC(=O)CCOCCNCC(=O)N
        ");
    }

    #[test]
    fn failed_rows_are_isolated() {
        let csv = indoc! {"
            Nterm,Linker,Cterm
            AXA,[*1]CC[*2],K
            A,[*1]CC[*2],K
            B,CC,Z
        "};
        let output = assemble_csv(&conjugator(), csv).unwrap();
        let rows: Vec<_> = output.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "Nterm,Linker,Cterm,Result");

        assert!(rows[1].starts_with("AXA,[*1]CC[*2],K,"));
        assert!(rows[1].contains("could not be found in the fragment table: [X]"));

        assert_eq!(rows[2], "A,[*1]CC[*2],K,N[CH](C)C(=O)CCN[CH](CCCCN)C(=O)N");

        // Only the first invalid sequence is reported
        assert!(rows[3].starts_with("B,CC,Z,"));
        assert!(rows[3].contains("[B]"));
        assert!(!rows[3].contains("[Z]"));
    }

    #[test]
    fn extra_columns_are_kept() {
        let csv = indoc! {"
            Name,Cterm,Linker,Nterm
            first,K,[*1]CCOCC[*2],A
            second,,CC,
        "};
        assert_snapshot!(assemble_csv(&conjugator(), csv).unwrap(), @r"
        Name,Cterm,Linker,Nterm,Result
        first,K,[*1]CCOCC[*2],A,N[CH](C)C(=O)CCOCCN[CH](CCCCN)C(=O)N
        second,,CC,,CC
        ");
    }

    #[test]
    fn numeric_looking_cells_stay_text() {
        let csv = indoc! {"
            Nterm,Linker,Cterm
            G,1,G
        "};
        let output = assemble_csv(&conjugator(), csv).unwrap();
        assert_eq!(output.lines().nth(1), Some("G,1,G,NCC(=O)1NCC(=O)N"));
    }

    #[test]
    fn missing_columns() {
        let error = assemble_csv(&conjugator(), "Nterm,Cterm\nA,K\n").unwrap_err();
        assert!(matches!(&error, BatchError::MissingColumns { columns } if columns == &["Linker"]));
        assert_snapshot!(error, @"the input table is missing the required column(s): Linker");

        let error = assemble_csv(&conjugator(), "Sequence\nAK\n").unwrap_err();
        assert!(
            matches!(&error, BatchError::MissingColumns { columns } if columns == &["Nterm", "Linker", "Cterm"])
        );

        // Column names are matched exactly
        let error = assemble_csv(&conjugator(), "nterm,linker,cterm\nA,CC,K\n").unwrap_err();
        assert!(matches!(error, BatchError::MissingColumns { .. }));
    }

    #[test]
    fn empty_table() {
        let output = assemble_csv(&conjugator(), "Nterm,Linker,Cterm\n").unwrap();
        assert_eq!(output.lines().next(), Some("Nterm,Linker,Cterm,Result"));
        assert_eq!(output.lines().count(), 1);
    }
}
