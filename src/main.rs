mod engine;

use anyhow::Result;
use engine::EngineApp;
use orient::config::{VisualizerConfig, load_session};
use orient::control::InputCommand;
use orient::core::geometry::Operator;
use orient::input::{InputMode, MatrixInput, MatrixSlot};

fn main() -> Result<()> {
    init_tracing();

    // orientviz [config.ron] [session.ron]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };
    let script = match args.next() {
        Some(path) => load_session(path)?,
        None => demo_script(),
    };

    let mut app = EngineApp::new(config);
    app.run(script)
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

/// One pass through each input mode.
fn demo_script() -> Vec<InputCommand> {
    let half = std::f64::consts::FRAC_1_SQRT_2;
    vec![
        // 90° about z.
        InputCommand::SetQuaternion {
            w: half,
            x: 0.0,
            y: 0.0,
            z: half,
        },
        InputCommand::SelectMode(InputMode::Matrix),
        InputCommand::SetMatrix {
            slot: MatrixSlot::Matrix,
            rows: MatrixInput([[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]]),
        },
        InputCommand::SelectMode(InputMode::Compare),
        InputCommand::SetMatrix {
            slot: MatrixSlot::Lhs,
            rows: MatrixInput([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
        },
        InputCommand::SetOperator(Operator::Add),
        InputCommand::SetOperator(Operator::Subtract),
    ]
}
