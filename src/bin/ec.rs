//! Euler-circuit driver: reads graphs from a file or stdin, or generates
//! random ones, and prints the verdict and circuit for each.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use itertools::Itertools;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use RustECT::config::EcConfig;
use RustECT::graph::io::{self, GraphText};
use RustECT::graph::{Graph, VertexId};
use RustECT::report::CircuitReport;

fn make_options_parser() -> Command {
    Command::new("ec")
        .version("v0.1.0")
        .about("Euler circuit existence test and construction over adjacency matrices")
        .arg(Arg::new("input").value_name("FILE").help(
            "Whitespace-separated graphs: vertex count, then the matrix row by row; - for stdin",
        ))
        .arg(
            Arg::new("random")
                .long("random")
                .action(ArgAction::SetTrue)
                .help("Generate random graphs instead of reading input"),
        )
        .arg(
            Arg::new("vertices")
                .long("vertices")
                .value_parser(clap::value_parser!(usize))
                .help("Vertex count for random graphs"),
        )
        .arg(
            Arg::new("max-parallel")
                .long("max-parallel")
                .value_parser(clap::value_parser!(u64))
                .help("Largest multiplicity drawn for a vertex pair"),
        )
        .arg(
            Arg::new("rounds")
                .long("rounds")
                .value_parser(clap::value_parser!(usize))
                .help("Graphs generated per multiplicity step"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .help("Seed for reproducible random graphs"),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_parser(clap::value_parser!(u32))
                .help("Start vertex for the circuit"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("ec.toml"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the reports will be stored"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("json")
                .value_parser(["json", "ron"]),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .value_name("DIR")
                .help("Directory for Graphviz exports, one file per graph"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress the explanation lines"),
        )
}

fn main() -> Result<()> {
    if std::env::var("EC_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("EC_LOG")
            .write_style("EC_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let matches = make_options_parser().get_matches();

    let config = EcConfig::load_from_file(matches.get_one::<String>("config").unwrap())?;
    debug!("config: {:?}", config);

    let start = VertexId::new(
        matches
            .get_one::<u32>("start")
            .copied()
            .unwrap_or(config.start_vertex),
    );

    let graphs = if matches.get_flag("random") {
        generate_random(&matches, &config)?
    } else {
        read_graphs(matches.get_one::<String>("input"))?
    };
    info!("processing {} graphs", graphs.len());

    let quiet = matches.get_flag("quiet");
    let mut reports = Vec::with_capacity(graphs.len());
    for (index, graph) in graphs.iter().enumerate() {
        let report =
            CircuitReport::analyze(graph, start).with_context(|| format!("graph #{}", index))?;
        print_report(&report, quiet);

        if let Some(dir) = matches.get_one::<String>("dot") {
            let path = PathBuf::from(dir).join(format!("graph_{}.dot", index));
            graph
                .write_dot(&path)
                .with_context(|| format!("Failed to write dot file: {:?}", path))?;
        }
        reports.push(report);
    }

    if let Some(output) = matches.get_one::<String>("output") {
        match matches.get_one::<String>("format").map(String::as_str) {
            Some("ron") => io::write_ron(output, &reports)?,
            _ => io::write_json(output, &reports)?,
        }
        info!("reports written to {}", output);
    }

    Ok(())
}

fn read_graphs(input: Option<&String>) -> Result<Vec<Graph>> {
    let source = match input.map(String::as_str) {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read graphs from stdin")?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read graphs from {:?}", path))?,
    };
    let graphs = GraphText::parse_all(&source)?;
    Ok(graphs)
}

fn generate_random(matches: &ArgMatches, config: &EcConfig) -> Result<Vec<Graph>> {
    let vertices = matches
        .get_one::<usize>("vertices")
        .copied()
        .unwrap_or(config.random.vertices);
    let max_parallel = matches
        .get_one::<u64>("max-parallel")
        .copied()
        .unwrap_or(config.random.max_parallel);
    let rounds = matches
        .get_one::<usize>("rounds")
        .copied()
        .unwrap_or(config.random.rounds);

    let mut rng: StdRng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut graphs = Vec::with_capacity(max_parallel as usize * rounds);
    for max in 1..=max_parallel {
        for _ in 0..rounds {
            graphs.push(Graph::random_with_rng(vertices, max, &mut rng)?);
        }
    }
    debug!(
        "generated {} random graphs on {} vertices (multiplicities up to {})",
        graphs.len(),
        vertices,
        max_parallel
    );
    Ok(graphs)
}

fn print_report(report: &CircuitReport, quiet: bool) {
    if quiet {
        println!(
            "Graph has {} vertices, and {} edges.",
            report.vertices, report.edges
        );
        print!("{}", report.matrix);
        if let Some(circuit) = &report.circuit {
            println!("Graph has the following Euler Circuit:");
            println!("{}", circuit.iter().format(" -> "));
        }
    } else {
        print!("{}", report);
    }
    println!();
}
