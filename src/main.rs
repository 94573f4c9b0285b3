//! PhotoMotion
//!
//! Headless driver for the editor core: builds a short project, plays it back
//! on a single-threaded runtime and walks the undo history.

use std::time::Instant;

use photomotion::core::generation::{GenerationKind, GenerationRequest};
use photomotion::core::preview::{MainLayer, PreviewFrame};
use photomotion::state::{MediaAsset, MediaKind, Track};
use photomotion::timeline::format_time;
use photomotion::{Editor, EditorSettings};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = EditorSettings::load_or_default(EditorSettings::path_from_env().as_deref());
    let mut editor = Editor::new(settings);

    let still = editor.add_asset(MediaAsset::new(MediaKind::Image, "file://still.png"));
    let request = GenerationRequest::new(GenerationKind::GenerateVideo, "waves at dusk");
    let video = editor.finish_generation(request, Ok("file://waves.mp4".to_string()))?;

    editor.drop_asset_by_id(still, 0.0, Track::Main.index());
    editor.drop_asset_by_id(video, 3.0, Track::Main.index());
    editor.add_text("PhotoMotion", "#ffffff", Some("transparent"));
    editor.add_marker(3.0);

    tracing::info!(
        "Project: {} clips, {} markers, {}",
        editor.project().clips.len(),
        editor.project().markers.len(),
        format_time(editor.project().duration)
    );

    play_through(&mut editor).await;

    while editor.undo() {}
    tracing::info!("Undone to {} clips", editor.project().clips.len());
    while editor.redo() {}
    tracing::info!("Redone to {} clips", editor.project().clips.len());

    Ok(())
}

/// Drive the playback clock until it stops on its own.
async fn play_through(editor: &mut Editor) {
    let mut interval = tokio::time::interval(editor.settings().tick_interval());
    let mut last_frame: Option<PreviewFrame> = None;

    editor.play();
    loop {
        interval.tick().await;
        if editor.tick(Instant::now()) {
            break;
        }
        let frame = editor.preview();
        if last_frame.as_ref().map_or(true, |f| !same_clip(&f.main, &frame.main)) {
            tracing::info!(
                "{} main: {}",
                format_time(editor.playback().current_time()),
                describe(&frame.main)
            );
        }
        last_frame = Some(frame);
    }
    tracing::info!("Playback finished");
}

fn same_clip(a: &MainLayer, b: &MainLayer) -> bool {
    match (a, b) {
        (MainLayer::Media { clip_id: a, .. }, MainLayer::Media { clip_id: b, .. }) => a == b,
        (MainLayer::MissingAsset { clip_id: a }, MainLayer::MissingAsset { clip_id: b }) => a == b,
        (MainLayer::Empty { .. }, MainLayer::Empty { .. }) => true,
        _ => false,
    }
}

fn describe(layer: &MainLayer) -> String {
    match layer {
        MainLayer::Empty { time } => format!("no media at {:.1}s", time),
        MainLayer::MissingAsset { clip_id } => format!("missing asset for clip {}", clip_id),
        MainLayer::Media { kind, url, .. } => format!("{:?} {}", kind, url),
    }
}
