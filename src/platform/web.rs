//! Browser host
//!
//! Wires the canvas 2D context, `<img>` loading, DOM input events, window
//! resizing and `requestAnimationFrame` to the platform-free game core.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent,
    MouseEvent, TouchEvent, Window,
};

use crate::Size;
use crate::assets::{AssetError, AssetSet, Image, ImageLoader};
use crate::consts::{HEIGHT, WIDTH};
use crate::frame::{DrawCommand, FrameDriver, FrameScheduler, Surface, run_loop};
use crate::input::{Control, InputRouter};
use crate::sim::GameState;
use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// A decoded `<img>` element
#[derive(Debug, Clone)]
pub struct HtmlImage(HtmlImageElement);

impl Image for HtmlImage {
    fn size(&self) -> Size {
        Size::new(self.0.natural_width() as f32, self.0.natural_height() as f32)
    }
}

/// Loads images by pointing fresh `<img>` elements at their URLs
pub struct BrowserImageLoader;

impl ImageLoader for BrowserImageLoader {
    type Image = HtmlImage;

    async fn load(&self, path: &str) -> Result<HtmlImage, AssetError> {
        let load_err = || AssetError::Load {
            path: path.to_string(),
        };
        let img = HtmlImageElement::new().map_err(|_| load_err())?;

        let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
            img.set_onload(Some(&resolve));
            img.set_onerror(Some(&reject));
        });
        img.set_src(path);

        let result = JsFuture::from(promise).await;
        img.set_onload(None);
        img.set_onerror(None);
        result.map_err(|_| load_err())?;

        Ok(HtmlImage(img))
    }
}

/// Canvas 2D backend
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    assets: AssetSet<HtmlImage>,
    scale: f64,
}

impl CanvasSurface {
    fn blit(&self, cmd: &DrawCommand) -> Result<(), JsValue> {
        let img = &self.assets.get(cmd.sprite).0;
        let r = cmd.rect;
        let (x, y, w, h) = (r.x as f64, r.y as f64, r.width as f64, r.height as f64);

        if cmd.mirrored {
            self.ctx.save();
            self.ctx.translate(x + w, y)?;
            self.ctx.scale(-1.0, 1.0)?;
            let drawn = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w, h);
            self.ctx.restore();
            drawn
        } else {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)
        }
    }
}

impl Surface for CanvasSurface {
    fn begin_frame(&mut self) {
        self.ctx.save();
        if let Err(e) = self.ctx.scale(self.scale, self.scale) {
            log::warn!("Canvas scale failed: {:?}", e);
        }
    }

    fn draw(&mut self, cmd: &DrawCommand) {
        if let Err(e) = self.blit(cmd) {
            log::warn!("Draw {:?} failed: {:?}", cmd.sprite, e);
        }
    }

    fn end_frame(&mut self) {
        self.ctx.restore();
    }
}

/// `requestAnimationFrame` as a frame scheduler
pub struct AnimationFrameScheduler {
    window: Window,
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce(f64)>) {
        let closure = Closure::once(move |time: f64| callback(time));
        if let Err(e) = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

/// Game instance holding all state
struct Game {
    driver: FrameDriver,
    router: InputRouter,
    surface: CanvasSurface,
}

impl Game {
    fn frame(&mut self, now_ms: f64) {
        let summary = self.driver.frame(now_ms, &mut self.surface);
        if summary.caught > 0 {
            log::debug!("Caught {} (total {})", summary.caught, self.driver.state.caught);
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.router.set_viewport(viewport);
        self.surface.scale = viewport.scale as f64;
    }
}

/// Browser entry point: load everything, then start the loop
pub async fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Niku Catch starting...");

    if let Err(e) = start().await {
        log::error!("Startup failed: {}", e);
        show_error(&e);
    }
}

async fn start() -> Result<(), AssetError> {
    let window = web_sys::window().ok_or_else(|| AssetError::Platform("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| AssetError::Platform("no document".into()))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("gameCanvas")
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| AssetError::Platform("no #gameCanvas element".into()))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into().ok())
        .ok_or_else(|| AssetError::Platform("no 2d context".into()))?;

    let tuning = Tuning::load();
    let assets = AssetSet::load(&BrowserImageLoader, &tuning.image_path).await?;
    let metrics = assets.metrics();

    let seed = js_sys::Date::now() as u64;
    log::info!("Game initialized with seed: {}", seed);

    let game = Rc::new(RefCell::new(Game {
        driver: FrameDriver::new(GameState::new(seed, metrics, tuning)),
        router: InputRouter::default(),
        surface: CanvasSurface {
            ctx,
            assets,
            scale: 1.0,
        },
    }));

    apply_viewport(&window, &canvas, &game);
    setup_resize(&window, &canvas, game.clone());
    setup_input_handlers(&window, &canvas, game.clone());

    if let Some(loading) = document.get_element_by_id("loading") {
        let _ = loading.set_attribute("class", "hidden");
    }

    let scheduler = Rc::new(AnimationFrameScheduler {
        window: window.clone(),
    });
    run_loop(scheduler, move |_time| {
        game.borrow_mut().frame(js_sys::Date::now());
    });

    log::info!("Niku Catch running!");
    Ok(())
}

/// Fit the canvas into the window and hand the new mapping to the game
fn apply_viewport(window: &Window, canvas: &HtmlCanvasElement, game: &Rc<RefCell<Game>>) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    let Some(viewport) = width
        .zip(height)
        .and_then(|(w, h)| Viewport::compute(w as f32, h as f32))
    else {
        log::debug!("Skipping viewport update for degenerate window size");
        return;
    };

    // Resizing the backing store also resets the context transform
    let size = viewport.surface_size();
    canvas.set_width(size.width as u32);
    canvas.set_height(size.height as u32);
    let style = canvas.style();
    let _ = style.set_property("position", "absolute");
    let origin = viewport.to_physical(Vec2::ZERO);
    let _ = style.set_property("left", &format!("{}px", origin.x));
    let _ = style.set_property("top", &format!("{}px", origin.y));

    log::debug!(
        "Viewport scale {:.3}, offset ({:.1}, {:.1}) for {}x{} playfield",
        viewport.scale,
        viewport.offset_x,
        viewport.offset_y,
        WIDTH,
        HEIGHT
    );
    game.borrow_mut().set_viewport(viewport);
}

fn setup_resize(window: &Window, canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
    let window_clone = window.clone();
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        apply_viewport(&window_clone, &canvas_clone, &game);
    });
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_input_handlers(window: &Window, canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
    // Mouse press
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.router.press(
                &mut g.driver.state,
                event.client_x() as f32,
                event.client_y() as f32,
            );
        });
        let _ = canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch start (first finger only)
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                let mut g = game.borrow_mut();
                let g = &mut *g;
                g.router.press(
                    &mut g.driver.state,
                    touch.client_x() as f32,
                    touch.client_y() as f32,
                );
            }
        });
        let _ = canvas
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Mouse release
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.router.release(&mut g.driver.state);
        });
        let _ =
            canvas.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch end
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.router.release(&mut g.driver.state);
        });
        let _ =
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Keyboard
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.repeat() {
                return;
            }
            if let Some(control) = key_control(&event.key()) {
                InputRouter::press_control(&mut game.borrow_mut().driver.state, control);
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(control) = key_control(&event.key()) {
                InputRouter::release_control(&mut game.borrow_mut().driver.state, control);
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn key_control(key: &str) -> Option<Control> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Control::Left),
        "ArrowRight" | "d" | "D" => Some(Control::Right),
        _ => None,
    }
}

/// Put a startup failure on the page instead of leaving a blank canvas
fn show_error(error: &AssetError) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let message = format!("Failed to start: {}", error);

    if let Some(el) = document.get_element_by_id("error") {
        el.set_text_content(Some(&message));
        let _ = el.set_attribute("class", "");
    } else if let Some(body) = document.body() {
        append_message(&document, &body, &message);
    }
}

fn append_message(document: &Document, parent: &web_sys::HtmlElement, message: &str) {
    if let Ok(el) = document.create_element("p") {
        el.set_text_content(Some(message));
        let _ = el.set_attribute("id", "error");
        let _ = parent.append_child(&el);
    }
}
