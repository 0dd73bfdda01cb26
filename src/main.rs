//! Constellation Backdrop entry point
//!
//! On the web, mounts onto `<canvas id="backdrop">` when the module starts.
//! Natively, runs a short headless simulation and logs what it drew.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "backdrop";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Constellation backdrop starting...");

    match constellation_backdrop::platform::web::mount_backdrop(CANVAS_ID, None) {
        // The auto-mounted backdrop lives as long as the page
        Ok(handle) => std::mem::forget(handle),
        Err(e) => log::error!("No backdrop mounted: {:?}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Constellation backdrop (native) starting...");
    log::info!("Native mode renders headless - serve the wasm build for the real canvas");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use constellation_backdrop::platform::ManualHost;
    use constellation_backdrop::renderer::RecordingCanvas;
    use constellation_backdrop::{Backdrop, FieldConfig, Viewport};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut host = ManualHost::new(Viewport::new(1920.0, 1080.0, 1.0));
    let mut backdrop = Backdrop::new(RecordingCanvas::new(), FieldConfig::two_tone());
    if let Err(e) = backdrop.mount(&mut host, &mut rng) {
        log::error!("Mount failed: {}", e);
        return;
    }

    let fired = host.pump(&mut backdrop, 300);
    let stats = backdrop.last_stats();
    println!(
        "{} frames @1920x1080: {} points, {} links in last frame",
        fired, stats.points, stats.links
    );
    backdrop.canvas_mut().take();

    host.set_viewport(Viewport::new(800.0, 600.0, 2.0));
    backdrop.on_resize(&host);
    let fired = host.pump(&mut backdrop, 300);
    let stats = backdrop.last_stats();
    println!(
        "{} frames @800x600 (dpr 2): {} points, {} links in last frame",
        fired, stats.points, stats.links
    );

    backdrop.canvas_mut().take();
    backdrop.unmount(&mut host);
    println!("Unmounted after {} frames", backdrop.clock().ticks());
}
