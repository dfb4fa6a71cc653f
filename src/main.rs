use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser, Subcommand, ValueEnum, builder::BoolishValueParser};
use conjugate::{Conjugate, Conjugator, FragmentTable, Options, Strategy};
use itertools::Itertools;
use log::{LevelFilter, info};
use miette::{Context, Diagnostic, GraphicalReportHandler, GraphicalTheme, IntoDiagnostic, Result, miette};
use pretty_env_logger::env_logger::DEFAULT_FILTER_ENV;
use rustyline::DefaultEditor;

/// Assembles SMILES strings for peptide-linker-peptide conjugates
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Convert the C-terminal carboxylic acid into an amide
    #[arg(short = 'E', long, global = true, default_value_t = true, action = ArgAction::Set,
          value_parser = BoolishValueParser::new())]
    endpoint: bool,
    /// Drop the C-terminal peptide's first nitrogen when the linker already ends in `N[*2]`
    #[arg(short, long, global = true, default_value_t = true, action = ArgAction::Set,
          value_parser = BoolishValueParser::new())]
    remove_n: bool,
    /// How peptides are joined to the linker
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyArg::Auto)]
    strategy: StrategyArg,
    /// Verbose output. See more with e.g. RUST_LOG=trace
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble every row of a CSV file with `Nterm`, `Linker`, and `Cterm` columns
    Batch {
        #[arg(short, long, default_value = "example.csv")]
        input: PathBuf,
        #[arg(short, long, default_value = "result.csv")]
        output: PathBuf,
    },
    /// Assemble conjugates interactively, one `NTERM,LINKER,CTERM` line at a time
    Repl,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum StrategyArg {
    Auto,
    Explicit,
    Direct,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Explicit => Self::Explicit,
            StrategyArg::Direct => Self::Direct,
        }
    }
}

impl Args {
    fn options(&self) -> Options {
        Options {
            amidate: self.endpoint,
            remove_duplicate_nitrogen: self.remove_n,
            strategy: self.strategy.into(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let table = FragmentTable::default();
    let conjugator = Conjugator::new(&table, args.options());

    match args.command {
        Commands::Batch { input, output } => batch(&conjugator, &input, &output),
        Commands::Repl => repl(&conjugator),
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var(DEFAULT_FILTER_ENV) {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn batch(conjugator: &Conjugator, input: &Path, output: &Path) -> Result<()> {
    let csv = fs::read_to_string(input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", input.display()))?;

    let result = batch::assemble_csv(conjugator, &csv)?;

    fs::write(output, result)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    info!("results written to {}", output.display());
    Ok(())
}

fn repl(conjugator: &Conjugator) -> Result<()> {
    let mut rl = DefaultEditor::new().into_diagnostic()?;
    while let Ok(line) = rl.readline("Nterm,Linker,Cterm: ") {
        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(&line).into_diagnostic()?;

        let Some((n_terminal, linker, c_terminal)) = split_fields(&line) else {
            let report = miette!(
                help = "empty fields are allowed, but both commas are required, e.g. `A,[*1]CCOCC[*2],K`",
                "expected three comma-separated fields, but found {:?}",
                line
            );
            render_error(&*report);
            continue;
        };

        match conjugator.assemble(n_terminal, linker, c_terminal) {
            Ok(conjugate) => print!("{}", describe(&conjugate)),
            Err(error) => render_error(&error),
        }
    }
    Ok(())
}

fn split_fields(line: &str) -> Option<(&str, &str, &str)> {
    line.trim().splitn(3, ',').map(str::trim).collect_tuple()
}

fn describe(conjugate: &Conjugate) -> String {
    format!(
        "SMILES: {}\nConnection: {}\nResidues: {}\n\n",
        conjugate.smiles(),
        conjugate.connection(),
        conjugate.residue_count()
    )
}

fn render_error(diagnostic: &dyn Diagnostic) {
    let mut buf = String::new();
    // SAFETY: Rendering into a `String` never fails
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic)
        .unwrap();
    println!("{buf}");
}
