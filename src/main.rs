//! Niku Catch entry point
//!
//! On the web this loads the images and starts the animation-frame loop. The
//! native build runs a headless session and reports what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    niku_catch::platform::web::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use niku_catch::Tuning;
    use niku_catch::platform::run_headless;

    env_logger::init();
    log::info!("Niku Catch (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345);
    let ticks = 60 * 60;

    let (state, surface) = run_headless(seed, ticks, Tuning::load());
    log::info!(
        "Ran {} ticks (seed {}): caught {}, missed {}, {} falling, {} draw calls, heart shown {} frames",
        state.time_ticks,
        state.seed,
        state.caught,
        state.missed,
        state.objects.len(),
        surface.draws,
        surface.hearts
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
