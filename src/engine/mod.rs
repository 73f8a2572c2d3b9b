pub mod renderer;
pub mod scene;

use anyhow::Result;
use orient::config::VisualizerConfig;
use orient::control::{CommandQueue, InputCommand};
use orient::visualizer::{Session, Visualizer};
use renderer::Renderer;
use scene::SceneGraph;

pub struct EngineApp {
    config: VisualizerConfig,
    renderer: Renderer,
    scene: SceneGraph,
}

impl EngineApp {
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            config,
            renderer: Renderer::new(),
            scene: SceneGraph::default(),
        }
    }

    /// Feeds `script` to the engine one edit per frame, the way the input
    /// panel would, and draws after every edit.
    pub fn run(&mut self, script: Vec<InputCommand>) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            tolerance = self.config.tolerance.value(),
            edits = script.len(),
            "Engine starting"
        );

        let (queue, sender) = CommandQueue::new();
        let visualizer = Visualizer::from_config(&self.config);
        let mut session = Session::new(visualizer, self.config.initial, queue);

        self.tick(&mut session);
        for cmd in script {
            sender.send(cmd);
            self.tick(&mut session);
        }

        tracing::info!(
            target: "engine",
            frames = self.renderer.frame_count(),
            "Engine shutdown complete"
        );
        Ok(())
    }

    fn tick(&mut self, session: &mut Session) {
        self.renderer.begin_frame();
        let edits = session.pump();

        let mode = session.input.mode;
        if let Some(state) = session.slot().latest() {
            for node in self.scene.visible(mode) {
                self.renderer.draw(node, &state);
            }
            tracing::info!(
                target: "engine",
                edits,
                draws = self.renderer.uploads().len(),
                mode = ?mode,
                z_scalar = state.z_scalar(),
                "frame"
            );
        }
        self.renderer.end_frame();
    }
}
