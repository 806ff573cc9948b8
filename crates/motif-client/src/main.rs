//! Motif Designer Client
//!
//! Yew WASM frontend application.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "motif-client only supports wasm32 target. Use: cargo check -p motif-client --target wasm32-unknown-unknown"
);

mod app;
mod components;
mod hooks;
mod pages;
mod routes;
mod storage;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info,motif_core=debug,motif_client=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
