use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use sea_chart::api::{
    ChartSession, ExternalPositionProvider, JsonFileStore, ReadFailurePolicy, SessionSettings,
};
use sea_chart::core::{PixelPoint, WorldPosition};
use sea_chart::interaction::{InputEvent, PointerButton};
use sea_chart::{ChartError, ChartResult};
use serde::Deserialize;

#[derive(Debug)]
struct CliArgs {
    script: PathBuf,
    settings: Option<PathBuf>,
    store: Option<PathBuf>,
    read_failure_policy: ReadFailurePolicy,
}

#[derive(Debug, Clone, Deserialize)]
struct ReplayScript {
    #[serde(default)]
    client_running: bool,
    #[serde(default)]
    live_positions: Vec<Option<WorldPosition>>,
    steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplayStep {
    Click { button: PointerButton, x: i32, y: i32 },
    DoubleClick { x: i32, y: i32 },
    Key { key: char },
}

/// Feeds scripted positions to the controller as if a game client reported them.
#[derive(Debug)]
struct ScriptedClient {
    running: bool,
    positions: VecDeque<Option<WorldPosition>>,
}

impl ExternalPositionProvider for ScriptedClient {
    fn is_running(&mut self) -> bool {
        self.running
    }

    fn calibrate(&mut self) -> ChartResult<()> {
        Ok(())
    }

    fn find_location(&mut self) -> ChartResult<Option<WorldPosition>> {
        self.positions
            .pop_front()
            .ok_or_else(|| ChartError::PositionQuery("scripted client has no more positions".to_owned()))
    }
}

fn main() {
    let _ = sea_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut settings = match &args.settings {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            SessionSettings::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => SessionSettings::default(),
    };
    if let Some(store) = args.store {
        settings = settings.with_store_path(store);
    }

    let raw = fs::read_to_string(&args.script)
        .map_err(|err| format!("failed to read `{}`: {err}", args.script.display()))?;
    let script: ReplayScript =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let client = ScriptedClient {
        running: script.client_running,
        positions: script.live_positions.into_iter().collect(),
    };
    let policy = args.read_failure_policy;
    let start = ChartSession::open(settings, JsonFileStore, client, |err| {
        eprintln!("warning: {err}");
        policy
    })
    .map_err(|err| err.to_string())?;
    let Some(mut session) = start.ready() else {
        return Err("session aborted: marker store is unreadable".to_owned());
    };

    println!("{}", session.controller().title());
    for (index, step) in script.steps.into_iter().enumerate() {
        let Some(event) = resolve_step(&session, step) else {
            println!("step {index}: no marker under double-click");
            continue;
        };
        let outcome = session.handle(event);
        println!("step {index}: {outcome:?}");
    }
    println!("{}", session.controller().title());

    let report = session.close();
    match report.error {
        None => {
            println!("saved {} markers", report.markers_saved);
            Ok(())
        }
        Some(err) => Err(err.to_string()),
    }
}

fn resolve_step(
    session: &ChartSession<JsonFileStore, ScriptedClient>,
    step: ReplayStep,
) -> Option<InputEvent> {
    let controller = session.controller();
    match step {
        ReplayStep::Click { button, x, y } => {
            let position = PixelPoint::new(x, y);
            Some(InputEvent::Click {
                button,
                position,
                target: controller.target_at(position),
            })
        }
        ReplayStep::DoubleClick { x, y } => controller
            .target_at(PixelPoint::new(x, y))
            .map(|marker| InputEvent::DoubleClick { marker }),
        ReplayStep::Key { key } => Some(InputEvent::KeyPress { key }),
    }
}

const USAGE: &str = "usage: sea_chart_replay --script <path> [--settings <path>] [--store <path>] [--on-unreadable-store <abort|fresh>]";

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut script = None::<PathBuf>;
    let mut settings = None::<PathBuf>;
    let mut store = None::<PathBuf>;
    let mut read_failure_policy = ReadFailurePolicy::Abort;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--script" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --script".to_owned())?;
                script = Some(PathBuf::from(value));
            }
            "--settings" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --settings".to_owned())?;
                settings = Some(PathBuf::from(value));
            }
            "--store" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --store".to_owned())?;
                store = Some(PathBuf::from(value));
            }
            "--on-unreadable-store" => {
                read_failure_policy = match args.next().as_deref() {
                    Some("abort") => ReadFailurePolicy::Abort,
                    Some("fresh") => ReadFailurePolicy::StartFresh,
                    other => {
                        return Err(format!(
                            "invalid value for --on-unreadable-store: {other:?}"
                        ));
                    }
                };
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        script: script.ok_or_else(|| format!("missing --script\n{USAGE}"))?,
        settings,
        store,
        read_failure_policy,
    })
}
