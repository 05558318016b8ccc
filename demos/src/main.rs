//! streetpath: run one incremental search over a street map in the terminal.
//!
//! Loads an Overpass or prepared JSON map (or generates a street grid), then
//! drives a [`SearchSession`] one tick at a time the way a render loop would.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use streetpath_core::{kilometers_to_miles, meters_to_kilometers};
use streetpath_osm::{GridConfig, LoadError, MapData, StreetGridGen, load_graph};
use streetpath_paths::{Algorithm, DEFAULT_STEPS_PER_TICK, Delta, Graph, NO_PATH, NodeId, SearchSession};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "streetpath")]
#[command(about = "Step-by-step shortest path search over street maps")]
struct Args {
    /// Overpass or prepared JSON map; a synthetic grid is used when absent
    #[arg(short = 'm', long)]
    map: Option<PathBuf>,

    /// Origin node id (defaults to the first node)
    #[arg(long)]
    from: Option<i64>,

    /// Goal node id (defaults to the last node)
    #[arg(long)]
    to: Option<i64>,

    /// Algorithm name, e.g. "Dijkstra's Search"
    #[arg(short = 'a', long, default_value = Algorithm::AStar.name())]
    algorithm: String,

    /// Search steps per rendered tick
    #[arg(long, default_value_t = DEFAULT_STEPS_PER_TICK)]
    steps_per_tick: usize,

    /// Size of the synthetic grid
    #[arg(long, default_value = "20x20", value_parser = parse_grid)]
    grid: (usize, usize),

    /// Seed for the synthetic grid
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// List algorithm names and exit
    #[arg(long)]
    list_algorithms: bool,
}

fn parse_grid(s: &str) -> Result<(usize, usize), String> {
    let (r, c) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows: usize = r.trim().parse().map_err(|e| format!("rows: {e}"))?;
    let cols: usize = c.trim().parse().map_err(|e| format!("cols: {e}"))?;
    if rows == 0 || cols == 0 {
        return Err("grid must be at least 1x1".into());
    }
    Ok((rows, cols))
}

fn load_map(args: &Args) -> Result<MapData, LoadError> {
    match &args.map {
        Some(path) => {
            log::debug!("loading map {}", path.display());
            MapData::load_file(path)
        }
        None => {
            let (rows, cols) = args.grid;
            let config = GridConfig {
                rows,
                cols,
                ..GridConfig::default()
            };
            Ok(StreetGridGen::new(config, StdRng::seed_from_u64(args.seed)).generate())
        }
    }
}

/// Log level for `-v` count: warnings by default, then debug, then trace.
fn max_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Great-circle distance between the session's origin and goal, in km.
fn straight_line_km(session: &SearchSession<'_>) -> Option<f64> {
    let graph = session.graph()?;
    let origin = graph.vertex(session.origin()?)?.pos();
    let goal = graph.vertex(session.goal()?)?.pos();
    Some(origin.distance_km(goal))
}

fn main() -> ExitCode {
    let args = Args::parse();
    // The subscriber also bridges the `log` records the library crates emit.
    tracing_subscriber::fmt()
        .with_max_level(max_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    if args.list_algorithms {
        for alg in Algorithm::ALL {
            println!("{alg}");
        }
        return ExitCode::SUCCESS;
    }

    let data = match load_map(&args) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut graph = Graph::new();
    let stats = load_graph(&mut graph, &data);
    graph.set_steps_per_tick(args.steps_per_tick);
    println!(
        "map: {} vertices, {} edges ({} duplicate nodes, {} broken segments)",
        graph.vertex_count(),
        graph.edge_count(),
        stats.duplicate_vertices,
        stats.skipped_segments
    );

    let from = args.from.or_else(|| data.nodes.first().map(|n| n.id));
    let to = args.to.or_else(|| data.nodes.last().map(|n| n.id));
    let (Some(from), Some(to)) = (from, to) else {
        eprintln!("map has no nodes");
        return ExitCode::FAILURE;
    };

    let mut session = SearchSession::new();
    session.set_graph(&graph);
    session.set_origin(NodeId(from));
    session.set_goal(NodeId(to));
    if let Err(e) = session.start(&args.algorithm) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    if let Some(km) = straight_line_km(&session) {
        println!("straight line: {km:.3} km");
    }

    let mut ticks = 0usize;
    let mut edges_drawn = 0usize;
    while !session.is_finished() {
        let deltas = session.tick();
        ticks += 1;
        edges_drawn += deltas.iter().map(|d| d.edges().len()).sum::<usize>();
        log::debug!(
            "tick {ticks}: {} deltas, frontier {}",
            deltas.len(),
            session.frontier_len()
        );
        if let Some(Delta::Origin { id }) = deltas.first() {
            log::trace!("origin {id} settled");
        }
    }

    let name = session.algorithm().map_or("?", Algorithm::name);
    println!("{name}: {from} -> {to}");
    println!("ticks: {ticks}, steps: {}, edges drawn: {edges_drawn}", session.steps_taken());

    let distance = session.final_distance();
    if distance == NO_PATH {
        println!("no path");
        return ExitCode::SUCCESS;
    }
    let path = session.path();
    let km = meters_to_kilometers(distance);
    println!(
        "distance: {distance:.3} m ({km:.3} km, {:.3} mi), {} hops",
        kilometers_to_miles(km),
        path.len().saturating_sub(1)
    );
    let ids: Vec<String> = path.iter().map(NodeId::to_string).collect();
    println!("path: {}", ids.join(" "));
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_sizes() {
        assert_eq!(parse_grid("3x4"), Ok((3, 4)));
        assert_eq!(parse_grid("10X2"), Ok((10, 2)));
        assert!(parse_grid("0x4").is_err());
        assert!(parse_grid("34").is_err());
        assert!(parse_grid("ax4").is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(max_level(0), LevelFilter::WARN);
        assert_eq!(max_level(1), LevelFilter::DEBUG);
        assert_eq!(max_level(2), LevelFilter::TRACE);
        assert_eq!(max_level(9), LevelFilter::TRACE);
    }

    #[test]
    fn straight_line_needs_endpoints() {
        let mut g = Graph::new();
        g.add_vertex(NodeId(1), 0.0, 0.0);
        g.add_vertex(NodeId(2), 1.0, 0.0);

        let mut session = SearchSession::new();
        assert_eq!(straight_line_km(&session), None);
        session.set_graph(&g);
        session.set_origin(NodeId(1));
        assert_eq!(straight_line_km(&session), None);
        session.set_goal(NodeId(2));
        let km = straight_line_km(&session).unwrap();
        assert!((km - 111.195).abs() < 0.01, "got {km}");
        session.set_goal(NodeId(3));
        assert_eq!(straight_line_km(&session), None);
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from([
            "streetpath",
            "--grid",
            "5x6",
            "--algorithm",
            "Breadth-First Search",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.grid, (5, 6));
        assert_eq!(args.algorithm, "Breadth-First Search");
        assert_eq!(args.verbose, 2);
        assert_eq!(args.steps_per_tick, DEFAULT_STEPS_PER_TICK);
        assert!(args.map.is_none());
    }
}
