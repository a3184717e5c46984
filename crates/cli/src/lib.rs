use anyhow::{anyhow, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use report::QueryReport;
use social_graph::{PersonId, SocialGraph};
use std::io;
use std::path::PathBuf;

mod report;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "social-graph")]
#[command(about = "Connectivity queries over a social graph", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Person list, one id per line
    #[arg(long, global = true, env = "SOCIAL_GRAPH_PEOPLE")]
    people: Option<PathBuf>,

    /// Relationship list, one `a,b,label` triple per line
    #[arg(long, global = true, env = "SOCIAL_GRAPH_RELATIONS")]
    relations: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether two people are connected
    Connected(PairArgs),

    /// Shortest number of hops between two people (-1 when unreachable)
    Distance(PairArgs),

    /// List people exactly N hops away from a person
    #[command(name = "at-distance")]
    AtDistance(AtDistanceArgs),

    /// Count groups of mutually reachable people
    Groups(GroupsArgs),

    /// Summarize the loaded graph
    Stats,
}

#[derive(Args)]
struct PairArgs {
    #[arg(allow_negative_numbers = true)]
    from: PersonId,

    #[arg(allow_negative_numbers = true)]
    to: PersonId,

    /// Only follow relationships with this label
    #[arg(long)]
    relationship: Option<String>,
}

#[derive(Args)]
struct AtDistanceArgs {
    #[arg(allow_negative_numbers = true)]
    person: PersonId,

    /// Number of hops; negative values match nobody
    #[arg(allow_negative_numbers = true)]
    depth: i64,
}

#[derive(Args)]
struct GroupsArgs {
    /// Only follow relationships with this label (repeatable)
    #[arg(long = "relationship")]
    relationships: Vec<String>,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let people = cli
        .people
        .ok_or_else(|| anyhow!("--people (or SOCIAL_GRAPH_PEOPLE) is required"))?;
    let relations = cli
        .relations
        .ok_or_else(|| anyhow!("--relations (or SOCIAL_GRAPH_RELATIONS) is required"))?;

    let graph = SocialGraph::from_files(&people, &relations).with_context(|| {
        format!(
            "Failed to load graph from {} and {}",
            people.display(),
            relations.display()
        )
    })?;
    info!(
        "Loaded {} people and {} relations",
        graph.person_count(),
        graph.relation_count()
    );

    let report = run_query(&graph, cli.command);
    print_stdout(&serde_json::to_string_pretty(&report)?)
}

fn run_query(graph: &SocialGraph, command: Commands) -> QueryReport {
    match command {
        Commands::Connected(args) => {
            let result = match &args.relationship {
                Some(relationship) => graph.are_connected_via(args.from, args.to, relationship),
                None => graph.are_connected(args.from, args.to),
            };
            QueryReport::Connected {
                from: args.from,
                to: args.to,
                relationship: args.relationship,
                result,
            }
        }
        Commands::Distance(args) => {
            let distance = match &args.relationship {
                Some(relationship) => graph.distance_via(args.from, args.to, relationship),
                None => graph.distance(args.from, args.to),
            };
            QueryReport::Distance {
                from: args.from,
                to: args.to,
                relationship: args.relationship,
                result: distance.map_or(-1, |hops| hops as i64),
            }
        }
        Commands::AtDistance(args) => {
            let result = usize::try_from(args.depth)
                .map(|depth| graph.at_distance(args.person, depth))
                .unwrap_or_default();
            QueryReport::AtDistance {
                person: args.person,
                depth: args.depth,
                result,
            }
        }
        Commands::Groups(args) => {
            let result = match args.relationships.as_slice() {
                [] => graph.count_groups(),
                [relationship] => graph.count_groups_via(relationship),
                many => graph.count_groups_via_any(many.iter().map(String::as_str)),
            };
            QueryReport::Groups {
                relationships: args.relationships,
                result,
            }
        }
        Commands::Stats => QueryReport::Stats(graph.stats()),
    }
}
