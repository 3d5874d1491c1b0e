use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lgsched::api::*;
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "lgsched")]
#[command(about = "Loading-schedule search for learning-graph algorithms")]
#[command(version = lgsched::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the LP of one schedule and print its parameters
    Eval {
        #[command(flatten)]
        common: CommonArgs,
        /// Sample name (tri, assoc, five) or steps such as "1, 2, 1>2"
        #[arg(long)]
        schedule: String,
    },
    /// Score every admissible schedule
    Search {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Score only schedules that load all vertices before any edge
    SearchRestricted {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Sample name (triangle, assoc, dist, ...) or edges such as "1>2, 1>3, 2>3"
    #[arg(long)]
    graph: String,
    /// Which incident edges a vertex step constrains
    #[arg(long, value_enum, default_value_t = Incident::Loaded)]
    incident: Incident,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LimitArgs {
    /// Stop after this many seconds and report the best found so far
    #[arg(long)]
    time_limit_secs: Option<f64>,
    /// Stop after scoring this many schedules
    #[arg(long)]
    max_leaves: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Incident {
    Loaded,
    All,
}

impl From<Incident> for IncidentEdges {
    fn from(i: Incident) -> Self {
        match i {
            Incident::Loaded => IncidentEdges::Loaded,
            Incident::All => IncidentEdges::All,
        }
    }
}

fn main() -> Result<()> {
    // stdout carries the report (or JSON); logs go to stderr
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Eval { common, schedule } => eval(&common, &schedule),
        Action::Search { common, limits } => search(&common, &limits, Strategy::Full),
        Action::SearchRestricted { common, limits } => {
            search(&common, &limits, Strategy::Restricted)
        }
    }
}

fn resolve_graph(text: &str) -> Result<Graph> {
    match samples::graph(text) {
        Some(g) => g.with_context(|| format!("sample graph '{text}' is malformed")),
        None => text
            .parse::<Graph>()
            .with_context(|| format!("'{text}' is neither a sample name nor an edge list")),
    }
}

fn resolve_schedule(text: &str) -> Result<Schedule> {
    let steps = samples::schedule(text).unwrap_or(text);
    steps
        .parse::<Schedule>()
        .with_context(|| format!("'{text}' is neither a sample name nor a schedule"))
}

fn build_cfg(common: &CommonArgs) -> BuildCfg {
    BuildCfg {
        incident: common.incident.into(),
    }
}

fn search_cfg(common: &CommonArgs, limits: &LimitArgs) -> Result<SearchCfg> {
    let time_limit = limits
        .time_limit_secs
        .map(Duration::try_from_secs_f64)
        .transpose()
        .context("--time-limit-secs must be a non-negative number of seconds")?;
    Ok(SearchCfg {
        build: build_cfg(common),
        time_limit,
        max_leaves: limits.max_leaves,
        ..SearchCfg::default()
    })
}

fn eval(common: &CommonArgs, schedule: &str) -> Result<()> {
    let graph = resolve_graph(&common.graph)?;
    let schedule = resolve_schedule(schedule)?;
    tracing::info!(graph = %common.graph, %schedule, "eval");
    let eval = evaluate(&graph, &schedule, &MicroLp, build_cfg(common))
        .with_context(|| format!("evaluating {schedule}"))?;
    let report = ParameterReport::from_solution(&graph, &eval.values)?;
    if common.json {
        let doc = EvalJson {
            schedule: schedule.to_string(),
            report: ReportJson::from(&report),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Schedule {schedule}");
        print!("{report}");
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Strategy {
    Full,
    Restricted,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Full => "full",
            Strategy::Restricted => "restricted",
        }
    }
}

fn search(common: &CommonArgs, limits: &LimitArgs, strategy: Strategy) -> Result<()> {
    let graph = resolve_graph(&common.graph)?;
    let cfg = search_cfg(common, limits)?;
    tracing::info!(
        graph = %common.graph,
        strategy = strategy.name(),
        n = graph.num_vertices(),
        m = graph.num_edges(),
        "search"
    );
    let outcome = match strategy {
        Strategy::Full => search_full(&graph, &MicroLp, &cfg),
        Strategy::Restricted => search_restricted(&graph, &MicroLp, &cfg),
    }
    .with_context(|| format!("{} search on '{}'", strategy.name(), common.graph))?;
    if let Some(reason) = outcome.stopped {
        tracing::warn!(?reason, "search cut short; best is the best seen so far");
    }
    let best = evaluate(&graph, &outcome.schedule, &MicroLp, cfg.build)
        .context("re-solving the best schedule")?;
    let report = ParameterReport::from_solution(&graph, &best.values)?;

    if common.json {
        let doc = SearchJson::new(strategy, &outcome, &report);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }
    let trace: Vec<String> = outcome
        .tracker
        .best()
        .iter()
        .map(|c| format!("{c:.4}"))
        .collect();
    let schedules: Vec<String> = outcome
        .tracker
        .sbest()
        .iter()
        .map(Schedule::to_string)
        .collect();
    println!("progression of best objective values and accompanying schedule");
    println!("[{}]", trace.join(", "));
    println!("[{}]", schedules.join(", "));
    println!();
    if outcome.is_partial() {
        println!(
            "Search stopped early after {} schedules",
            outcome.stats.leaves
        );
    }
    println!("Best schedule found is {}", outcome.schedule);
    println!("Parameters for this schedule are");
    print!("{report}");
    Ok(())
}

#[derive(Serialize)]
struct EvalJson {
    schedule: String,
    report: ReportJson,
}

#[derive(Serialize)]
struct ReportJson {
    cost: f64,
    cost_fraction: Option<(i64, u32)>,
    set_sizes: Vec<SetSizeJson>,
    degrees: Vec<DegreeJson>,
}

#[derive(Serialize)]
struct SetSizeJson {
    vertex: u32,
    value: f64,
}

#[derive(Serialize)]
struct DegreeJson {
    from: u32,
    to: u32,
    value: f64,
}

impl From<&ParameterReport> for ReportJson {
    fn from(r: &ParameterReport) -> Self {
        Self {
            cost: r.cost,
            cost_fraction: r.cost_fraction(),
            set_sizes: r
                .set_sizes
                .iter()
                .map(|(v, value)| SetSizeJson {
                    vertex: v.0,
                    value: *value,
                })
                .collect(),
            degrees: r
                .degrees
                .iter()
                .map(|(e, value)| DegreeJson {
                    from: e.from.0,
                    to: e.to.0,
                    value: *value,
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct TraceJson {
    cost: f64,
    schedule: String,
}

#[derive(Serialize)]
struct SearchJson {
    strategy: &'static str,
    cost: f64,
    schedule: String,
    /// "time_limit" or "leaf_limit" when cut short
    stopped: Option<&'static str>,
    leaves: u64,
    solved: u64,
    infeasible: u64,
    unbounded: u64,
    failed: u64,
    elapsed_ms: f64,
    trace: Vec<TraceJson>,
    report: ReportJson,
}

impl SearchJson {
    fn new(strategy: Strategy, out: &SearchOutcome, report: &ParameterReport) -> Self {
        let s = out.stats;
        Self {
            strategy: strategy.name(),
            cost: out.cost,
            schedule: out.schedule.to_string(),
            stopped: out.stopped.map(|r| match r {
                StopReason::TimeLimit => "time_limit",
                StopReason::LeafLimit => "leaf_limit",
            }),
            leaves: s.leaves,
            solved: s.solved,
            infeasible: s.infeasible,
            unbounded: s.unbounded,
            failed: s.failed,
            elapsed_ms: s.elapsed.as_secs_f64() * 1e3,
            trace: out
                .tracker
                .best()
                .iter()
                .zip(out.tracker.sbest())
                .map(|(c, sched)| TraceJson {
                    cost: *c,
                    schedule: sched.to_string(),
                })
                .collect(),
            report: ReportJson::from(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_by_name_or_text() {
        let tri = resolve_graph("triangle").unwrap();
        assert_eq!((tri.num_vertices(), tri.num_edges()), (3, 3));
        let path = resolve_graph("1>2, 2>3").unwrap();
        assert_eq!(path.num_edges(), 2);
        assert!(resolve_graph("no-such-graph").is_err());
    }

    #[test]
    fn schedule_by_name_or_text() {
        let tri = resolve_schedule("tri").unwrap();
        assert_eq!(tri.len(), 6);
        let s = resolve_schedule("1, 2, 1>2").unwrap();
        assert_eq!(s.to_string(), "[1, 2, (1,2)]");
    }

    #[test]
    fn flags_map_to_cfg() {
        let cmd = Cmd::try_parse_from([
            "lgsched",
            "search-restricted",
            "--graph",
            "assoc",
            "--incident",
            "all",
            "--time-limit-secs",
            "1.5",
            "--max-leaves",
            "10",
        ])
        .unwrap();
        let Action::SearchRestricted { common, limits } = cmd.action else {
            panic!("wrong subcommand");
        };
        let cfg = search_cfg(&common, &limits).unwrap();
        assert_eq!(cfg.build.incident, IncidentEdges::All);
        assert_eq!(cfg.time_limit, Some(Duration::from_millis(1500)));
        assert_eq!(cfg.max_leaves, Some(10));
        assert!(!common.json);
    }

    #[test]
    fn negative_time_limit_is_rejected() {
        let common = CommonArgs {
            graph: "triangle".into(),
            incident: Incident::Loaded,
            json: false,
        };
        let limits = LimitArgs {
            time_limit_secs: Some(-1.0),
            max_leaves: None,
        };
        assert!(search_cfg(&common, &limits).is_err());
    }

    #[test]
    fn search_json_shape() {
        let g = resolve_graph("triangle").unwrap();
        let cfg = SearchCfg::default();
        let out = search_restricted(&g, &MicroLp, &cfg).unwrap();
        let best = evaluate(&g, &out.schedule, &MicroLp, cfg.build).unwrap();
        let report = ParameterReport::from_solution(&g, &best.values).unwrap();
        let doc = SearchJson::new(Strategy::Restricted, &out, &report);
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["strategy"], "restricted");
        assert_eq!(v["leaves"], 36);
        assert!(v["stopped"].is_null());
        assert_eq!(v["report"]["cost_fraction"], serde_json::json!([9, 7]));
        assert_eq!(v["trace"].as_array().unwrap().len(), out.tracker.len());
    }
}
