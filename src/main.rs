use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

// 导入库模块
use kpaths::config::Config;
use kpaths::core::error::{KspError, KspResult};
use kpaths::graph::GnpRandomGraph;
use kpaths::services::algorithm::YenKShortestPath;
use kpaths::storage::{load_graph, save_graph};
use kpaths::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "kpaths Contributors")]
enum Cli {
    /// Print the k shortest loopless paths between two vertices
    Paths {
        /// JSON graph file
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(short, long)]
        source: String,
        #[clap(short = 't', long)]
        sink: String,
        /// Number of paths, defaults to `search.k` from the config
        #[clap(short)]
        k: Option<usize>,
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Print the paths as JSON
        #[clap(long)]
        json: bool,
    },
    /// Write a random G(n, p) graph file
    Generate {
        #[clap(short = 'n', long)]
        vertices: usize,
        #[clap(short, long)]
        probability: f64,
        #[clap(long, default_value_t = 0)]
        seed: u64,
        #[clap(long)]
        undirected: bool,
        #[clap(short, long)]
        output: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> KspResult<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn run(cli: Cli) -> KspResult<()> {
    match cli {
        Cli::Paths {
            graph,
            source,
            sink,
            k,
            config,
            json,
        } => {
            let config = load_config(config.as_ref())?;
            logging::init(&config.log)?;

            let graph = load_graph(&graph)?;
            let k = k.unwrap_or(config.search.k);
            let paths = YenKShortestPath::new(&graph)
                .with_bulk_shortcut(config.search.bulk_shortcut)
                .get_paths(&source, &sink, k)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&paths)?);
            } else {
                for (rank, path) in paths.iter().enumerate() {
                    println!("{}\t{}\t{}", rank + 1, path.weight(), path.vertices().join(" -> "));
                }
            }
        }
        Cli::Generate {
            vertices,
            probability,
            seed,
            undirected,
            output,
        } => {
            logging::init(&Config::default().log)?;

            if !(0.0..=1.0).contains(&probability) {
                return Err(KspError::Config(format!("概率必须在 [0, 1] 内: {}", probability)));
            }
            let graph = GnpRandomGraph::new(vertices, probability, seed)
                .with_directed(!undirected)
                .generate();
            save_graph(&graph, &output)?;
            println!(
                "已写入 {}: 顶点数 {}, 边数 {}",
                output.display(),
                graph.vertex_count(),
                graph.edge_count()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let result = run(Cli::parse());
    logging::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误: {}", e);
            ExitCode::FAILURE
        }
    }
}
