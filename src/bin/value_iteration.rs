use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use sparse_value_iteration::graph::TransitionGraph;
use sparse_value_iteration::precision::PrecisionCriterion;
use sparse_value_iteration::progress::ProgressCounter;
use sparse_value_iteration::unbounded;

#[derive(Parser)]
#[command(name = "value_iteration")]
#[command(about = "Compute unbounded reachability values over an explicit transition list")]
struct Args {
    /// Path to a transition list file with one `source target weight` triple
    /// per line (`#` starts a comment)
    #[arg(value_name = "FILE")]
    file: String,

    /// Target states, seeded with value 1.0 (all others start at 0.0)
    #[arg(long, value_name = "STATE", value_delimiter = ',', required = true)]
    target: Vec<usize>,

    /// Iteration scheme
    #[arg(long, default_value = "gauss-seidel", require_equals = true)]
    method: Method,

    /// Convergence threshold
    #[arg(long, default_value_t = 1e-6, require_equals = true)]
    tolerance: f64,

    /// Measure convergence relative to the previous values instead of absolutely
    #[arg(long)]
    relative: bool,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum Method {
    Jacobi,
    #[value(name = "gauss-seidel")]
    GaussSeidel,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

/// Parse a transition list into per-state rows. States are numbered densely
/// from zero; the state count is one past the largest index mentioned.
fn parse_transitions<'a>(input: &'a str) -> Result<Vec<Vec<(usize, f64)>>, String> {
    let mut edges = Vec::new();
    let mut num_states = 0;
    for (line_nr, line) in input.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let parse = |part: Option<&'a str>| -> Result<&'a str, String> {
            part.ok_or_else(|| format!("line {}: expected `source target weight`", line_nr + 1))
        };
        let source: usize = parse(parts.next())?
            .parse()
            .map_err(|e| format!("line {}: {}", line_nr + 1, e))?;
        let target: usize = parse(parts.next())?
            .parse()
            .map_err(|e| format!("line {}: {}", line_nr + 1, e))?;
        let weight: f64 = parse(parts.next())?
            .parse()
            .map_err(|e| format!("line {}: {}", line_nr + 1, e))?;
        num_states = num_states.max(source + 1).max(target + 1);
        edges.push((source, target, weight));
    }

    let mut rows = vec![Vec::new(); num_states];
    for (source, target, weight) in edges {
        rows[source].push((target, weight));
    }
    Ok(rows)
}

fn main() {
    let args = Args::parse();

    // Configure logging:
    // Handle verbose flag: None = not specified, Some(None) = specified without value (defaults to info), Some(Some(level)) = specified with value
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let input = std::fs::read_to_string(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to read transition file {}: {}", args.file, e);
        std::process::exit(1);
    });

    let rows = parse_transitions(&input).unwrap_or_else(|e| {
        eprintln!("Failed to parse transition file {}: {}", args.file, e);
        std::process::exit(1);
    });

    let graph = TransitionGraph::from_rows(&rows);
    println!(
        "Loaded graph with {} states and {} transitions.",
        graph.num_states(),
        graph.num_transitions()
    );

    let mut values = vec![0.0; graph.num_states()];
    for &target in &args.target {
        if target >= graph.num_states() {
            eprintln!("Target state {} out of range.", target);
            std::process::exit(1);
        }
        values[target] = 1.0;
    }

    let criterion = if args.relative {
        PrecisionCriterion::relative(args.tolerance)
    } else {
        PrecisionCriterion::absolute(args.tolerance)
    };
    let progress = ProgressCounter::new();

    let result = match args.method {
        Method::Jacobi => unbounded::jacobi(&graph, &criterion, &mut values, &progress),
        Method::GaussSeidel => unbounded::gauss_seidel(&graph, &criterion, &mut values, &progress),
    };
    if let Err(e) = result {
        eprintln!("Iteration failed: {}", e);
        std::process::exit(1);
    }

    println!("Converged after {} iterations.", progress.get() + 1);
    for (state, value) in values.iter().enumerate() {
        println!("{state}: {value}");
    }
}
