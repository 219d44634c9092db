use std::process::ExitCode;

use clap::Parser;
use scene_editor::config::EditorConfig;
use scene_editor::editor::Editor;
use scene_editor::host;

fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = EditorConfig::parse();
    let editor = match Editor::new(config) {
        Ok(editor) => editor,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("scene-editor: {e}");
            return ExitCode::FAILURE;
        }
    };

    host::run(editor);
    ExitCode::SUCCESS
}
