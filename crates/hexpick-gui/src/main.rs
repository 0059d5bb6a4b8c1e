mod app;
mod config;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = config::from_args();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Hexpick"),
        ..Default::default()
    };

    eframe::run_native(
        "Hexpick",
        options,
        Box::new(move |cc| Ok(Box::new(app::HexpickApp::new(&cc.egui_ctx, config)))),
    )
}
