//! Verlet Rope entry point
//!
//! Runs the rope headless: a seeded wandering pointer drags the head around
//! the view while frames are stepped at a fixed rate. Prints the final node
//! positions as JSON.
//!
//! Usage: `verlet-rope [settings.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use verlet_rope::consts::*;
    use verlet_rope::platform::HeadInput;
    use verlet_rope::renderer::MeshRenderer;
    use verlet_rope::{Result, RopeSettings, Simulation};

    const VIEW_WIDTH: f32 = 800.0;
    const VIEW_HEIGHT: f32 = 600.0;
    const DEMO_FRAMES: u32 = 600;
    /// Frame at which the view is resized
    const RESIZE_FRAME: u32 = 300;
    const RESIZED_WIDTH: f32 = 1024.0;
    const RESIZED_HEIGHT: f32 = 768.0;
    /// Pointer speed in screen pixels per second
    const POINTER_SPEED: f32 = 400.0;

    /// Pointer that drifts toward randomly chosen screen points
    struct PointerWander {
        rng: Pcg32,
        pos: Vec2,
        goal: Vec2,
    }

    impl PointerWander {
        fn new(seed: u64) -> Self {
            let center = Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
            Self {
                rng: Pcg32::seed_from_u64(seed),
                pos: center,
                goal: center,
            }
        }

        fn pick_goal(&mut self) -> Vec2 {
            Vec2::new(
                self.rng.random_range(0.0..VIEW_WIDTH),
                self.rng.random_range(0.0..VIEW_HEIGHT / 2.0),
            )
        }

        /// Move toward the current goal, choosing a new one on arrival
        fn step(&mut self, dt: f32) -> Vec2 {
            if self.pos.distance(self.goal) < 5.0 {
                self.goal = self.pick_goal();
            }
            self.pos += (self.goal - self.pos).clamp_length_max(POINTER_SPEED * dt);
            self.pos
        }

        /// Frame time with a little jitter, like a real display loop
        fn frame_time(&mut self) -> f32 {
            SIM_DT * self.rng.random_range(0.8..1.25)
        }
    }

    /// Headless host: input, simulation and renderer wired per frame
    struct Demo {
        sim: Simulation,
        input: HeadInput,
        renderer: MeshRenderer,
        accumulator: f32,
    }

    impl Demo {
        fn new(settings: &RopeSettings) -> Result<Self> {
            Ok(Self {
                sim: Simulation::new(settings)?,
                input: HeadInput::centered(VIEW_WIDTH, VIEW_HEIGHT),
                renderer: MeshRenderer::new(settings),
                accumulator: 0.0,
            })
        }

        /// Run simulation ticks for one display frame
        fn update(&mut self, frame_dt: f32) {
            let frame_dt = frame_dt.min(0.1);
            self.accumulator += frame_dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                if let Some(target) = self.input.sample_latest() {
                    self.sim.on_head_target_changed(target);
                }
                self.sim.tick(SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        fn render(&mut self) {
            self.sim.render_into(&mut self.renderer);
        }
    }

    pub fn run() -> Result<()> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let settings = match args.first() {
            Some(path) => RopeSettings::load_or_default(path),
            None => RopeSettings::default(),
        };
        let seed = args
            .get(1)
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(12345);
        log::info!("Seed: {}", seed);

        let mut demo = Demo::new(&settings)?;
        let mut pointer = PointerWander::new(seed);
        log::info!(
            "Rope: {} nodes, rest length {}, gravity {:?}",
            demo.sim.chain().len(),
            demo.sim.chain().rest_length(),
            demo.sim.gravity()
        );

        for frame in 0..DEMO_FRAMES {
            if frame == RESIZE_FRAME {
                // Pointer bounds stay at the old size
                demo.input.set_view_size(RESIZED_WIDTH, RESIZED_HEIGHT);
                log::info!("View resized to {}x{}", RESIZED_WIDTH, RESIZED_HEIGHT);
            }

            let frame_dt = pointer.frame_time();
            let screen = pointer.step(frame_dt);
            demo.input.on_pointer_moved(screen.x, screen.y);

            demo.update(frame_dt);
            demo.render();

            if frame % 60 == 0 {
                let chain = demo.sim.chain();
                log::info!(
                    "frame {}: ticks={} head={:?} length={:.1} stretch={:.3} vertices={}",
                    frame,
                    demo.sim.tick_count(),
                    chain.head().pos,
                    chain.total_length(),
                    chain.max_stretch(),
                    demo.renderer.vertices().len()
                );
            }
        }

        log::info!(
            "Done: {} ticks, {} bytes of vertex data in last frame",
            demo.sim.tick_count(),
            demo.renderer.vertex_bytes().len()
        );
        println!("{}", serde_json::to_string_pretty(&demo.sim.node_positions())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Verlet Rope (native) starting...");

    if let Err(e) = demo::run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
