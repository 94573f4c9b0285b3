//! Editing session
//!
//! `Editor` is what the view layer talks to. It owns the undoable project
//! history plus the state that is deliberately kept out of it: the asset
//! library and the playhead. Every timeline intent derives a full new
//! snapshot from the current one and commits it in one step.

use std::time::Instant;

use uuid::Uuid;

use crate::config::EditorSettings;
use crate::core::generation::{complete_generation, GenerationError, GenerationRequest};
use crate::core::preview::{resolve_frame, PreviewFrame};
use crate::history::History;
use crate::hotkeys::HotkeyAction;
use crate::state::{AssetLibrary, MediaAsset, PlaybackClock, ProjectState, Track};
use crate::timeline::{classify_click, TimelineClick};

#[derive(Debug, Clone)]
pub struct Editor {
    history: History<ProjectState>,
    assets: AssetLibrary,
    playback: PlaybackClock,
    settings: EditorSettings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Editor {
    pub fn new(settings: EditorSettings) -> Self {
        let initial = ProjectState::with_duration(settings.initial_duration_seconds);
        tracing::info!(
            "Editor: new session ({:.1}s timeline, history limit {:?})",
            initial.duration,
            settings.history_limit
        );
        Self {
            history: History::with_limit(initial, settings.history_limit),
            assets: AssetLibrary::default(),
            playback: PlaybackClock::default(),
            settings,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn project(&self) -> &ProjectState {
        self.history.state()
    }

    pub fn assets(&self) -> &AssetLibrary {
        &self.assets
    }

    pub fn playback(&self) -> &PlaybackClock {
        &self.playback
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    fn commit(&mut self, next: ProjectState, intent: &str) {
        if !self.history.commit(next) {
            tracing::debug!("Editor: {} left the project unchanged", intent);
            return;
        }
        tracing::debug!(
            "Editor: {} (undo depth {}, {} clips, {:.2}s)",
            intent,
            self.history.past_len(),
            self.project().clips.len(),
            self.project().duration
        );
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            tracing::debug!("Editor: undo (undo depth {})", self.history.past_len());
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            tracing::debug!("Editor: redo (redo depth {})", self.history.future_len());
        }
        moved
    }

    // -----------------------------------------------------------------------
    // Timeline intents
    // -----------------------------------------------------------------------

    /// Place an asset on a track. Negative drop positions clamp to 0.
    ///
    /// Returns `false` without touching the project when `track_index` is not
    /// one of the fixed tracks.
    pub fn drop_asset(&mut self, asset: &MediaAsset, time: f64, track_index: usize) -> bool {
        let Some(track) = Track::from_index(track_index) else {
            tracing::warn!("Editor: cannot drop onto unknown track {}", track_index);
            return false;
        };
        let next = self.project().drop_asset(asset, time.max(0.0), track.index());
        self.commit(next, "drop asset");
        true
    }

    /// Place a library asset by id. Returns `false` if the library has no
    /// such asset or the track does not exist.
    pub fn drop_asset_by_id(&mut self, asset_id: Uuid, time: f64, track_index: usize) -> bool {
        let Some(asset) = self.assets.find(asset_id).cloned() else {
            tracing::warn!("Editor: cannot drop unknown asset {}", asset_id);
            return false;
        };
        self.drop_asset(&asset, time, track_index)
    }

    /// Add a text overlay at the playhead.
    pub fn add_text(&mut self, text: &str, color: &str, background: Option<&str>) {
        let next = self.project().add_text_clip(
            text,
            color,
            background.map(str::to_string),
            self.playback.current_time(),
        );
        self.commit(next, "add text");
    }

    pub fn delete_clip(&mut self, clip_id: Uuid) {
        let next = self.project().delete_clip(clip_id);
        self.commit(next, "delete clip");
    }

    pub fn add_marker(&mut self, time: f64) {
        let next = self.project().add_marker(time);
        self.commit(next, "add marker");
    }

    pub fn add_marker_at_playhead(&mut self) {
        self.add_marker(self.playback.current_time());
    }

    pub fn delete_marker(&mut self, marker_id: Uuid) {
        let next = self.project().delete_marker(marker_id);
        self.commit(next, "delete marker");
    }

    /// Handle a click on the timeline area, in pixels relative to its
    /// top-left corner.
    pub fn click_timeline(&mut self, x: f64, y: f64, scroll_left: f64) -> TimelineClick {
        let click = classify_click(x, y, scroll_left, self.settings.timeline_zoom);
        match click {
            TimelineClick::AddMarker(time) => self.add_marker(time),
            TimelineClick::Seek(time) => self.playback.seek(time),
        }
        click
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    pub fn add_asset(&mut self, asset: MediaAsset) -> Uuid {
        tracing::debug!("Editor: add {:?} asset {}", asset.kind, asset.id);
        self.assets.add(asset)
    }

    /// Remove an asset from the library. Clips that use it stay on the
    /// timeline and preview as missing.
    pub fn remove_asset(&mut self, asset_id: Uuid) -> bool {
        self.assets.remove(asset_id)
    }

    /// Record the outcome of a provider call.
    ///
    /// Success adds the asset to the library. Failure is logged and returned
    /// for the caller to show; the project is not touched either way.
    pub fn finish_generation(
        &mut self,
        request: GenerationRequest,
        result: Result<String, GenerationError>,
    ) -> Result<Uuid, GenerationError> {
        let kind = request.kind;
        match complete_generation(request, result) {
            Ok(asset) => Ok(self.add_asset(asset)),
            Err(err) => {
                tracing::warn!("Editor: {:?} failed: {}", kind, err);
                Err(err)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Playback
    // -----------------------------------------------------------------------

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn toggle_playback(&mut self) {
        self.playback.toggle();
    }

    pub fn seek(&mut self, time: f64) {
        self.playback.seek(time);
    }

    pub fn seek_to_start(&mut self) {
        self.playback.seek_to_start();
    }

    pub fn seek_to_end(&mut self) {
        let duration = self.project().duration;
        self.playback.seek_to_end(duration);
    }

    /// Frame callback for the playback driver. Returns `true` when playback
    /// stopped on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let duration = self.history.state().duration;
        self.playback.tick(now, duration)
    }

    // -----------------------------------------------------------------------
    // View queries
    // -----------------------------------------------------------------------

    /// What the preview canvas shows at the playhead.
    pub fn preview(&self) -> PreviewFrame {
        resolve_frame(self.project(), &self.assets, self.playback.current_time())
    }

    pub fn apply_hotkey(&mut self, action: HotkeyAction) {
        match action {
            HotkeyAction::Undo => {
                self.undo();
            }
            HotkeyAction::Redo => {
                self.redo();
            }
            HotkeyAction::PlayPause => self.toggle_playback(),
            HotkeyAction::AddMarker => self.add_marker_at_playhead(),
        }
    }
}
