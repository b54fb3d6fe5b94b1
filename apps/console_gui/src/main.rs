mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use backend_bridge::worker::spawn_backend_thread;
use config::StartupConfig;
use controller::events::UiEvent;
use ui::app::ConsoleApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop console for the keyword-search backend")]
struct Args {
    /// Backend base URL; overrides console.toml and CONSOLE_SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let startup = StartupConfig::load(args.server_url);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    spawn_backend_thread(startup.server_url.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Keyword Search Console")
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([560.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Keyword Search Console",
        options,
        Box::new(move |_cc| Ok(Box::new(ConsoleApp::new(startup, cmd_tx, ui_rx)))),
    )
}
