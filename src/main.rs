use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

use aco_path::config::Config;
use aco_path::graph_util::Topology;
use aco_path::read_topo_from_file;
use aco_path::routing_algos::{AntSystem, PathSearchEngine, SPF};

#[derive(Clone, Copy, ValueEnum)]
enum Algo {
    Aco,
    Spf,
}

#[derive(Parser)]
#[command(name = "aco_path")]
#[command(about = "Shortest path search with an ant system")]
struct Cli {
    /// JSON topology file
    topology: PathBuf,
    /// Source node
    src: usize,
    /// Destination node
    dst: usize,
    #[arg(long, value_enum, default_value = "aco")]
    algo: Algo,
    /// Ants released per iteration
    #[arg(long)]
    ants: Option<i64>,
    /// Number of iterations
    #[arg(long)]
    iterations: Option<i64>,
    #[arg(long)]
    seed: Option<u64>,
    /// Run the ants of one iteration in parallel
    #[arg(long)]
    parallel: bool,
    /// JSON config file, falls back to config.example.json
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);
    if cli.ants.is_some() || cli.iterations.is_some() {
        let ants = cli.ants.unwrap_or(config.ants as i64);
        let iterations = cli.iterations.unwrap_or(config.iterations as i64);
        config = config.with_counts(ants, iterations);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.parallel {
        config = config.with_parallel(true);
    }

    let (mut algo, g): (Box<dyn PathSearchEngine>, Topology) = match cli.algo {
        Algo::Aco => {
            let algo = AntSystem::from_file(&cli.topology, config);
            let g = algo.topology().clone();
            (Box::new(algo), g)
        }
        Algo::Spf => {
            let g = read_topo_from_file(&cli.topology).unwrap_or_else(|err| {
                tracing::warn!("{}: {}", cli.topology.display(), err);
                Topology::new()
            });
            (Box::new(SPF::new(g.clone())), g)
        }
    };

    let route = algo.find_path(cli.src, cli.dst);
    if route.is_empty() {
        println!("找不到 {} 到 {} 的路徑", cli.src, cli.dst);
        process::exit(1);
    }
    let route_str: Vec<String> = route.iter().map(|n| n.to_string()).collect();
    println!("{}", route_str.join(" "));
    println!(
        "length = {}, compute time = {} μs",
        g.get_dist(&route),
        algo.get_last_compute_time()
    );
}
