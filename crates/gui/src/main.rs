mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::scene`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use prism_gui_lib::fixtures;
pub use prism_gui_lib::geometry;
pub use prism_gui_lib::graph;
pub use prism_gui_lib::scene;
pub use prism_gui_lib::state;

use app::EditorApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prism_gui=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Prism — Primitive Tree Editor")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "prism-gui",
        native_options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
