mod app;
mod audio;
mod config;
mod library;
mod queue;
mod runtime;
mod session;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
