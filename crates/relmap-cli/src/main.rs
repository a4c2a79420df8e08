use relmap::layout::{LayoutOptions, RankDir, RenderEdge, RenderGraph, RenderNode};
use relmap::{GenerateRequest, ModelChoice, Status};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Response(relmap::Error),
    Pipeline(relmap::PipelineError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Response(err) => write!(f, "{err}"),
            CliError::Pipeline(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<relmap::Error> for CliError {
    fn from(value: relmap::Error) -> Self {
        Self::Response(value)
    }
}

impl From<relmap::PipelineError> for CliError {
    fn from(value: relmap::PipelineError) -> Self {
        Self::Pipeline(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Normalize,
    Layout,
    Request,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    strict: bool,
    model: ModelChoice,
    options_json: Option<String>,
    rankdir: Option<RankDir>,
    nodesep: Option<f64>,
    ranksep: Option<f64>,
}

impl Args {
    /// `--options` first, then the individual flags on top.
    fn layout_options(&self) -> Result<LayoutOptions, CliError> {
        let mut options = match &self.options_json {
            Some(raw) => serde_json::from_str::<LayoutOptions>(raw)?,
            None => LayoutOptions::default(),
        };
        if let Some(rankdir) = self.rankdir {
            options.rankdir = rankdir;
        }
        if let Some(nodesep) = self.nodesep {
            options.nodesep = nodesep;
        }
        if let Some(ranksep) = self.ranksep {
            options.ranksep = ranksep;
        }
        Ok(options)
    }
}

#[derive(Serialize)]
struct RenderOut<'a> {
    nodes: &'a [RenderNode],
    edges: &'a [RenderEdge],
    summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

fn usage() -> &'static str {
    "relmap-cli\n\
\n\
USAGE:\n\
  relmap-cli [render] [--pretty] [--strict] [LAYOUT] [<path>|-]\n\
  relmap-cli normalize [--pretty] [<path>|-]\n\
  relmap-cli layout [--pretty] [LAYOUT] [<path>|-]\n\
  relmap-cli request [--pretty] [--model 80Bmodel|7Bmodel|DeepSeek] [<path>|-]\n\
\n\
LAYOUT:\n\
  --rankdir TB|BT|LR|RL   --nodesep <n>   --ranksep <n>   --options <json>\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - normalize, layout and render read a service response: {\"relationships\": [...], \"summary\": \"...\"}.\n\
  - request reads source code and prints the request body for POST /generate-graph.\n\
  - render prints an empty graph with \"No relationships found.\" on any failure (unreadable\n\
    input, bad layout options, service error) unless --strict.\n\
  - Set RELMAP_LOG (e.g. RELMAP_LOG=debug) to control diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "normalize" => args.command = Command::Normalize,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "request" => args.command = Command::Request,
            "--pretty" => args.pretty = true,
            "--strict" => args.strict = true,
            "--model" => {
                let Some(model) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.model = model.parse()?;
            }
            "--rankdir" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.rankdir = Some(dir.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--nodesep" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.nodesep = Some(n.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--ranksep" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.ranksep = Some(n.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--options" => {
                let Some(raw) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.options_json = Some(raw.clone());
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_render(
    graph: &RenderGraph,
    summary: &str,
    status: Status,
    pretty: bool,
) -> Result<(), CliError> {
    write_json(
        &RenderOut {
            nodes: &graph.nodes,
            edges: &graph.edges,
            summary,
            message: status.message(),
        },
        pretty,
    )
}

/// Non-strict render: unreadable input or options degrade like a failed response.
fn render_lenient(args: &Args) -> relmap::Generated {
    let prepared = read_input(args.input.as_deref())
        .and_then(|text| Ok((text, args.layout_options()?)));
    match prepared {
        Ok((text, options)) => relmap::generate_from_body(&text, &options),
        Err(err) => {
            tracing::warn!(error = %err, "render input unusable");
            relmap::Generated::no_relationships(String::new())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if matches!(args.command, Command::Render) && !args.strict {
        let out = render_lenient(&args);
        return write_render(&out.graph, &out.summary, out.status, args.pretty);
    }

    let text = read_input(args.input.as_deref())?;

    match args.command {
        Command::Request => {
            let req = GenerateRequest::new(text, args.model);
            write_json(&req, args.pretty)
        }
        Command::Normalize => {
            let res = relmap::parse_response(&text)?;
            let graph = relmap::normalize(&res.relationships);
            write_json(&graph, args.pretty)
        }
        Command::Layout => {
            let options = args.layout_options()?;
            let res = relmap::parse_response(&text)?;
            let graph = relmap::normalize(&res.relationships);
            let laid_out = relmap::layout::layout_graph(&graph, &options)
                .map_err(relmap::PipelineError::from)?;
            write_json(&laid_out, args.pretty)
        }
        Command::Render => {
            let options = args.layout_options()?;
            let res = relmap::parse_response(&text)?;
            let graph = relmap::build(&res, &options)?;
            let status = if graph.nodes.is_empty() {
                Status::NoRelationships
            } else {
                Status::Ready
            };
            write_render(&graph, &res.summary, status, args.pretty)
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RELMAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    tracing::debug!(command = ?args.command, input = ?args.input, "relmap-cli");

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
