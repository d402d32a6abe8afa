#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Base URL of the generation server, set from the command line
static SERVER_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Get the generation server base URL (set from command line or default)
pub fn server_url() -> String {
    SERVER_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}

/// Card Forge - creature trading card studio
#[derive(Parser, Debug)]
#[command(name = "cardforge-desktop")]
#[command(about = "Card Forge - generate creature trading cards from a short description")]
struct Args {
    /// Base URL of the card generation server
    #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
    server_url: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let _ = SERVER_URL.set(args.server_url.trim_end_matches('/').to_string());

    tracing::info!("Starting Card Forge against {}", server_url());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Card Forge")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
