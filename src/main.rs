//! Brick Breaker entry point
//!
//! Native: headless runner driven by stdin key names or the autopilot.
//! Web: DOM runner driven by `setInterval` and `keydown`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, KeyboardEvent};

    use brick_breaker::present::Presenter;
    use brick_breaker::sim::{BallSnapshot, Boundary, PaddleSnapshot, SceneSnapshot};
    use brick_breaker::{GameConfig, Session};

    fn px(value: f32) -> String {
        format!("{}px", value)
    }

    /// Renders the game as absolutely positioned divs inside `#board`
    struct DomPresenter {
        document: Document,
        board: HtmlElement,
        ball: Option<HtmlElement>,
        paddle: Option<HtmlElement>,
        /// Board offset; children are positioned relative to the board
        origin: (f32, f32),
    }

    impl DomPresenter {
        fn new(document: Document) -> Result<Self, JsValue> {
            let board: HtmlElement = document
                .get_element_by_id("board")
                .ok_or_else(|| JsValue::from_str("no #board element"))?
                .dyn_into()?;
            Ok(Self {
                document,
                board,
                ball: None,
                paddle: None,
                origin: (0.0, 0.0),
            })
        }

        /// Fetch or create a child element of the board
        fn element(&self, id: &str, class: &str) -> Option<HtmlElement> {
            if let Some(el) = self.document.get_element_by_id(id) {
                return el.dyn_into().ok();
            }
            let el: HtmlElement = self.document.create_element("div").ok()?.dyn_into().ok()?;
            el.set_id(id);
            el.set_class_name(class);
            self.board.append_child(&el).ok()?;
            Some(el)
        }

        fn place(&self, el: &HtmlElement, x: f32, y: f32) {
            let style = el.style();
            let _ = style.set_property("left", &px(x - self.origin.0));
            let _ = style.set_property("top", &px(y - self.origin.1));
        }
    }

    impl Presenter for DomPresenter {
        fn draw_boundary(&mut self, boundary: &Boundary) {
            self.origin = (boundary.left(), boundary.top());
            let style = self.board.style();
            let _ = style.set_property("height", &px(boundary.height()));
            let _ = style.set_property("width", &px(boundary.width()));
            let _ = style.set_property("left", &px(boundary.left()));
            let _ = style.set_property("top", &px(boundary.top()));
        }

        fn draw_ball(&mut self, ball: &BallSnapshot) {
            if self.ball.is_none() {
                self.ball = self.element(&format!("ball-{}", ball.id), "ball");
                if let Some(el) = &self.ball {
                    let _ = el.style().set_property("width", &px(ball.diameter));
                    let _ = el.style().set_property("height", &px(ball.diameter));
                }
            }
            if let Some(el) = &self.ball {
                self.place(el, ball.pos.x, ball.pos.y);
            }
        }

        fn draw_paddle(&mut self, paddle: &PaddleSnapshot) {
            if self.paddle.is_none() {
                self.paddle = self.element("paddle", "paddle");
                if let Some(el) = &self.paddle {
                    let _ = el.style().set_property("width", &px(paddle.width));
                    let _ = el.style().set_property("height", &px(paddle.height));
                }
            }
            if let Some(el) = &self.paddle {
                self.place(el, paddle.pos.x, paddle.pos.y);
            }
        }

        fn game_over(&mut self, scene: &SceneSnapshot) {
            log::info!("Game over after {} ticks", scene.tick);
            let Ok(prompt) = self.document.create_element("h2") else {
                return;
            };
            prompt.set_id("game-over");
            prompt.set_text_content(Some("Game Over"));
            let _ = self.board.append_child(&prompt);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = GameConfig::default();
        let presenter = DomPresenter::new(document)?;
        let session = Session::new(&config, presenter)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let session = Rc::new(RefCell::new(session));
        let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        // Keyboard
        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut s = session.borrow_mut();
                if !s.is_over() {
                    s.handle_key(&event.code());
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Tick loop
        {
            let session = session.clone();
            let interval_id = interval_id.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if !session.borrow_mut().tick() {
                    if let (Some(window), Some(id)) = (web_sys::window(), interval_id.take()) {
                        window.clear_interval_with_handle(id);
                    }
                }
            });
            let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                config.tick_interval_ms as i32,
            )?;
            interval_id.set(Some(id));
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::io::BufRead;
    use std::process::ExitCode;

    use brick_breaker::autopilot::{Autopilot, DEFAULT_SEED};
    use brick_breaker::present::LogPresenter;
    use brick_breaker::session::driver::{self, SessionEnd};
    use brick_breaker::{GameConfig, Session};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker (native) starting...");

    let mut autopilot = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--autopilot" => autopilot = true,
            "-h" | "--help" => {
                println!("usage: brick-breaker [CONFIG.json] [--autopilot]");
                println!("without --autopilot, type a/d or ArrowLeft/ArrowRight + Enter to steer");
                return ExitCode::SUCCESS;
            }
            path => config_path = Some(path.to_string()),
        }
    }

    let config = match config_path {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut session = match Session::new(&config, LogPresenter::new()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (handle, commands) = driver::channel();
    let pilot = if autopilot {
        drop(handle);
        Some(Autopilot::new(config.autopilot_seed.unwrap_or(DEFAULT_SEED)))
    } else {
        // Stdin reader: one key name per line
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim() == "q" {
                    handle.shutdown();
                    break;
                }
                if !handle.key(&line) {
                    break;
                }
            }
        });
        None
    };

    match driver::run(&mut session, &commands, pilot) {
        SessionEnd::GameOver { ticks } => {
            println!("Game Over after {} ticks", ticks);
        }
        SessionEnd::Shutdown { ticks } => {
            println!("Stopped after {} ticks", ticks);
        }
    }
    log::info!("{} frames drawn", session.presenter().frames());
    ExitCode::SUCCESS
}
