//! Routes across the built-in five node demo graph
//!
//! Usage: reference_route [source] [target]

use std::process::ExitCode;

use reverse_astar::{NodeId, QueryConfig};
use tracing_subscriber::filter::LevelFilter;

fn parse_node(arg: Option<String>, default: NodeId) -> Result<NodeId, String> {
    match arg {
        Some(raw) => raw.parse().map_err(|_| format!("'{raw}' is not a node id")),
        None => Ok(default),
    }
}

fn main() -> ExitCode {
    // Library diagnostics go through `log`, the subscriber bridges them to stderr
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut config = QueryConfig::reference();
    let mut args = std::env::args().skip(1);

    let parsed = parse_node(args.next(), config.source)
        .and_then(|source| Ok((source, parse_node(args.next(), config.targets[0])?)));
    let (source, target) = match parsed {
        Ok(nodes) => nodes,
        Err(msg) => {
            eprintln!("{msg}\nusage: reference_route [source] [target]");
            return ExitCode::FAILURE;
        }
    };
    config.source = source;
    config.targets = vec![target];

    let graph = match config.build_graph() {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    print!("{graph}");

    match config.run_on(&graph) {
        Ok(reports) => {
            for report in reports {
                print!("{}", report.heuristic);
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
