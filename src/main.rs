use anyhow::Context;

use modelview_rs::replay::{self, FrameReport};
use modelview_rs::{ViewerSession, ViewerSettings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let script_path = args
        .get(1)
        .context("usage: modelview-rs <gesture-script.json> [--all]")?;
    let print_all = args.iter().skip(2).any(|a| a == "--all");

    let settings = ViewerSettings::load();
    let gestures = replay::load_script(script_path)
        .with_context(|| format!("failed to load gesture script '{}'", script_path))?;

    let mut session = ViewerSession::new(&settings);
    session.set_viewport(settings.viewport_width, settings.viewport_height);

    let reports = replay::replay(&mut session, &gestures);
    let output = if print_all {
        serde_json::to_string_pretty(&reports)?
    } else {
        let last = reports
            .last()
            .cloned()
            .unwrap_or_else(|| FrameReport::capture(&session, None));
        serde_json::to_string_pretty(&last)?
    };
    println!("{}", output);

    Ok(())
}
