use diff_canvas::config::load_config;
use diff_canvas::job;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let report = job::run(&config)?;
    println!("Saved as {}", report.output_path.display());
    Ok(())
}

fn usage() -> String {
    "Usage: diff-canvas <config.json>".to_string()
}
