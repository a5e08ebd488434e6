use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use audioset_labels::data::loader::{load_label_column, load_segments};
use audioset_labels::ontology::DEFAULT_ONTOLOGY_PATH;
use audioset_labels::{
    LabelColumn, MatchMode, Ontology, contains_label, convert_id, convert_ids, count_labels,
    get_correlation, segments_to_column,
};

#[derive(Parser, Debug)]
#[command(name = "audioset-labels")]
#[command(about = "Convert AudioSet label ids and measure label co-occurrence")]
#[command(version)]
struct Cli {
    /// Path to the AudioSet ontology.json
    #[arg(long, global = true, default_value = DEFAULT_ONTOLOGY_PATH, env = "AUDIOSET_ONTOLOGY")]
    ontology: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the ids in a comma-separated label string
    Count { labels: String },
    /// Convert comma-separated ids to pipe-separated names
    Convert { labels: String },
    /// Print the rows of a label column that contain a label
    Filter {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long)]
        label: String,
    },
    /// Proportion of rows with LABEL_1 that also have LABEL_2
    Correlate {
        #[command(flatten)]
        table: TableArgs,
        label_1: String,
        label_2: String,
    },
    /// Correlation over an AudioSet segments CSV (ids are converted first)
    Segments {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        segment_match: bool,
        label_1: String,
        label_2: String,
    },
    /// Run the sample invocations
    Demo,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Table file (.csv, .json or .parquet)
    #[arg(long)]
    file: PathBuf,
    /// Column holding pipe-separated label names
    #[arg(long, default_value = "labels")]
    column: String,
    /// Match whole `|`-delimited names instead of substrings
    #[arg(long)]
    segment_match: bool,
}

fn match_mode(segment_match: bool) -> MatchMode {
    if segment_match { MatchMode::Segment } else { MatchMode::Substring }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Count { labels } => println!("{}", count_labels(&labels)),
        Command::Convert { labels } => {
            let ontology = Ontology::shared(&cli.ontology)?;
            println!("{}", convert_ids(ontology, &labels)?);
        }
        Command::Filter { table, label } => {
            let column = load_label_column(&table.file, &table.column)?;
            print!("{}", contains_label(&column, &label, match_mode(table.segment_match)));
        }
        Command::Correlate { table, label_1, label_2 } => {
            let column = load_label_column(&table.file, &table.column)?;
            let mode = match_mode(table.segment_match);
            println!("{}", get_correlation(&column, &label_1, &label_2, mode)?);
        }
        Command::Segments { file, segment_match, label_1, label_2 } => {
            let ontology = Ontology::shared(&cli.ontology)?;
            let column = segments_to_column(ontology, &load_segments(&file)?)?;
            let mode = match_mode(segment_match);
            println!("{}", get_correlation(&column, &label_1, &label_2, mode)?);
        }
        Command::Demo => demo(&cli.ontology)?,
    }
    Ok(())
}

fn demo(ontology_path: &std::path::Path) -> Result<()> {
    let ontology = Ontology::shared(ontology_path)?;

    println!("{}", count_labels("/m/04rlf,/m/06_fw,/m/09x0r"));
    println!("{}", convert_id(ontology, "/m/04rlf")?);
    println!("{}", convert_ids(ontology, "/m/04rlf,/m/06_fw,/m/09x0r")?);

    let series: LabelColumn = ["Music|Skateboard|Speech", "Voice|Speech", "Music|Piano"]
        .into_iter()
        .collect();
    print!("{}", contains_label(&series, "Music", MatchMode::Substring));
    println!("{}", get_correlation(&series, "Music", "Piano", MatchMode::Substring)?);
    Ok(())
}
