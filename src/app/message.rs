// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::LoadedImage;
use crate::portfolio::Portfolio;
use iced::widget::scrollable;
use iced::{keyboard, Point, Rectangle, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The controllers under
/// `crate::ui` are plain state machines, so most variants carry the raw
/// interaction and the update loop translates it into controller calls.
#[derive(Debug, Clone)]
pub enum Message {
    /// The page scrollable moved; drives the reveal controller.
    PageScrolled(scrollable::Viewport),
    /// The window was resized; may cross the layout breakpoint.
    WindowResized(Size),
    /// Cursor moved anywhere in the window; drives the hero tilt.
    CursorMoved(Point),
    /// Cursor left the window.
    CursorLeft,

    /// The hero rotation interval fired.
    HeroTick(Instant),
    /// Fast animation tick, active only while reveal deadlines or a hero
    /// cross-fade are pending.
    MotionTick(Instant),

    /// A key press that no widget captured.
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    },

    /// A touch press began (potential lightbox swipe).
    TouchStarted(Point),
    /// A touch press lifted (potential lightbox swipe).
    TouchEnded(Point),

    /// A filter chip was pressed.
    ChipPressed(usize),
    /// Bounds response for an indicator measurement, tagged with the epoch
    /// token that scheduled it.
    ChipBoundsMeasured {
        epoch: u64,
        row: Option<Rectangle>,
        chip: Option<Rectangle>,
    },

    /// A photo card was clicked (keyboard activation arrives as `KeyPressed`).
    CardActivated(usize),

    /// The lightbox close control was pressed.
    LightboxClose,
    /// A lightbox step control was pressed (`-1` previous, `+1` next).
    LightboxStep(i32),
    /// A thumbnail strip entry was pressed.
    ThumbPressed(usize),
    /// A press landed on the backdrop outside the modal content.
    BackdropPressed,
    /// A press landed on the modal stage (starts a potential swipe).
    StagePressed,
    /// A release on the modal stage (finishes a potential swipe).
    StageReleased,

    /// A background image fetch completed.
    MediaLoaded {
        source: String,
        result: Result<LoadedImage, Error>,
    },

    /// Open the native manifest picker.
    OpenManifestDialog,
    /// Result from the manifest picker.
    ManifestDialogResult(Option<PathBuf>),
    /// Result from loading a picked manifest.
    ManifestLoaded(Result<Portfolio, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `nl`, `en`).
    pub lang: Option<String>,
    /// Optional portfolio manifest to load instead of the embedded one.
    pub manifest_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
