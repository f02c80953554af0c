//! Petal Drift entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use petal_drift::renderer::CanvasSurface;
    use petal_drift::sim::Viewport;
    use petal_drift::{Animation, Error, Settings};

    /// Canvas element the background is drawn on
    const CANVAS_ID: &str = "bg-canvas";

    /// Everything the frame and resize callbacks share
    struct App {
        animation: Animation,
        surface: CanvasSurface,
    }

    impl App {
        /// Match the canvas backing store to the window and tell the scene
        fn fit_to_window(&mut self) {
            let (width, height) = window_size();
            self.surface.resize(width, height);
            self.animation.resize(width as f32, height as f32);
        }
    }

    fn window_size() -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub fn run() -> Result<(), Error> {
        console_error_panic_hook::set_once();
        // A second init (hot reload) keeps the existing logger
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Petal Drift starting...");

        let settings = Settings::load();
        let surface = CanvasSurface::from_element_id(CANVAS_ID)?;

        let (width, height) = window_size();
        surface.resize(width, height);
        log::info!("Canvas size: {}x{}", width, height);

        let animation = Animation::new(
            settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64),
            Viewport::new(width as f32, height as f32),
            &settings,
        );
        log::info!(
            "Scene initialized with seed {}: {} particles, {} flowers",
            animation.scene().seed,
            animation.scene().particles.len(),
            animation.scene().elements.len()
        );

        let app = Rc::new(RefCell::new(App { animation, surface }));

        setup_resize_handler(app.clone())?;

        // Start frame loop
        request_animation_frame(app);

        log::info!("Petal Drift running!");
        Ok(())
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) -> Result<(), Error> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().fit_to_window();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window disappeared, animation stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let App { animation, surface } = &mut *guard;
            animation.frame(surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run().map_err(|e| {
        log::error!("Startup failed: {e}");
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Petal Drift (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    preview::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run against a recording surface
#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use petal_drift::consts::{DEFAULT_SEED, WRAP_MARGIN};
    use petal_drift::renderer::Recorder;
    use petal_drift::sim::Viewport;
    use petal_drift::{Animation, Settings};

    const FRAMES: u64 = 600;
    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 720.0;

    pub fn run() {
        let settings = Settings::load();
        let mut animation = Animation::new(
            settings.seed.unwrap_or(DEFAULT_SEED),
            Viewport::new(WIDTH, HEIGHT),
            &settings,
        );
        let mut recorder = Recorder::new();
        let mut fills = 0;
        let mut strays = 0;

        log::info!(
            "Simulating {} frames at {}x{} with seed {}",
            FRAMES,
            WIDTH,
            HEIGHT,
            animation.scene().seed
        );

        for frame in 0..FRAMES {
            // Halfway through, pretend the window was resized
            if frame == FRAMES / 2 {
                animation.resize(WIDTH / 2.0, HEIGHT / 2.0);
            }

            recorder.clear();
            animation.frame(&mut recorder);
            fills += recorder.fill_count();

            let scene = animation.scene();
            let vp = scene.viewport;
            strays += scene
                .particles
                .iter()
                .filter(|p| !vp.contains(p.pos))
                .count();
            strays += scene
                .elements
                .iter()
                .filter(|e| {
                    e.pos.x < -WRAP_MARGIN
                        || e.pos.x > vp.width() + WRAP_MARGIN
                        || e.pos.y < -WRAP_MARGIN
                        || e.pos.y > vp.height() + WRAP_MARGIN
                })
                .count();
        }

        log::info!(
            "Rendered {} frames, {} filled shapes, {} out-of-bounds entities",
            animation.frames(),
            fills,
            strays
        );
        if strays > 0 {
            log::error!("Entities escaped the viewport");
        } else {
            log::info!("All entities stayed within the viewport");
        }
    }
}
