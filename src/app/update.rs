// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The controllers under `crate::ui` are pure state machines; this module
//! is the only place that turns messages into controller calls and side
//! effects (image fetches, bounds measurements, file dialogs).

use super::{App, Message};
use crate::portfolio::{self, Portfolio};
use crate::ui::layout::{self, Breakpoint, SectionId};
use crate::ui::{filters, lightbox};
use iced::{keyboard, Rectangle, Size, Task};
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageScrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                self.viewport_height = viewport.bounds().height;
                self.reveal.handle_scroll(
                    self.scroll_offset,
                    self.viewport_height,
                    Instant::now(),
                );
                Task::none()
            }
            Message::WindowResized(size) => self.handle_resize(size),
            Message::CursorMoved(position) => {
                self.cursor = position;
                let stage = self.hero_stage_bounds();
                if stage.contains(position) {
                    self.hero.pointer_moved(position, stage, self.breakpoint);
                } else {
                    self.hero.pointer_left();
                }
                Task::none()
            }
            Message::CursorLeft => {
                self.hero.pointer_left();
                Task::none()
            }

            Message::HeroTick(now) => {
                self.hero.rotate(now);
                Task::none()
            }
            Message::MotionTick(now) => {
                self.reveal.tick(now);
                self.hero.tick(now);
                Task::none()
            }

            Message::KeyPressed { key, modifiers } => self.handle_key(key, modifiers),

            Message::TouchStarted(position) => {
                self.lightbox.drag_started(position.x);
                Task::none()
            }
            Message::TouchEnded(position) => {
                self.lightbox.drag_finished(position.x);
                self.fetch_full_size()
            }
            Message::StagePressed => {
                self.lightbox.drag_started(self.cursor.x);
                Task::none()
            }
            Message::StageReleased => {
                self.lightbox.drag_finished(self.cursor.x);
                self.fetch_full_size()
            }

            Message::ChipPressed(index) => match self.filters.select(index) {
                filters::Effect::Selected(filter) => {
                    self.gallery.apply_filter(&filter);
                    // The visible-card set changed; an open session would be
                    // stale.
                    if self.lightbox.is_open() {
                        self.close_lightbox();
                    }
                    self.measure_chips()
                }
                filters::Effect::None => Task::none(),
            },
            Message::ChipBoundsMeasured { epoch, row, chip } => {
                self.filters.apply_measure(epoch, row, chip);
                Task::none()
            }

            Message::CardActivated(photo) => {
                if self.gallery.is_interactive() {
                    self.open_lightbox(photo)
                } else {
                    Task::none()
                }
            }

            Message::LightboxClose | Message::BackdropPressed => {
                self.close_lightbox();
                Task::none()
            }
            Message::LightboxStep(direction) => self.step_lightbox(direction),
            Message::ThumbPressed(position) => {
                self.lightbox.jump(position);
                self.lightbox
                    .set_focus(lightbox::FocusTarget::Thumb(position));
                self.fetch_full_size()
            }

            Message::MediaLoaded { source, result } => {
                self.media.complete_fetch(&source, result);
                Task::none()
            }

            Message::OpenManifestDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("Portfolio manifest", &["toml"])
                        .pick_file()
                        .await
                        .map(|file| file.path().to_path_buf())
                },
                Message::ManifestDialogResult,
            ),
            Message::ManifestDialogResult(Some(path)) => Task::perform(
                async move { Portfolio::load_from_path(&path) },
                Message::ManifestLoaded,
            ),
            Message::ManifestDialogResult(None) => Task::none(),
            Message::ManifestLoaded(Ok(loaded)) => {
                self.load_warning = None;
                self.install_portfolio(loaded);
                Task::batch([self.startup_fetches(), self.measure_chips()])
            }
            Message::ManifestLoaded(Err(err)) => {
                self.load_warning =
                    Some(format!("{}: {err}", self.i18n.tr("portfolio-load-error")));
                Task::none()
            }
        }
    }

    fn handle_resize(&mut self, size: Size) -> Task<Message> {
        self.window_size = size;
        let breakpoint = Breakpoint::from_width(size.width);
        if breakpoint != self.breakpoint {
            self.breakpoint = breakpoint;
            self.hero.sync(breakpoint);
            self.gallery.set_interactive(!breakpoint.is_compact());
            if breakpoint.is_compact() {
                // The single-column grid scrolls past the nominal spans, so
                // the gallery reveals unconditionally there.
                self.reveal.force_reveal(SectionId::Gallery);
                if self.lightbox.is_open() {
                    self.close_lightbox();
                }
                self.hero.pointer_left();
            }
        }
        // Chip geometry shifts with every layout pass.
        self.measure_chips()
    }

    fn handle_key(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        use keyboard::key::Named;

        let keyboard::Key::Named(named) = key else {
            return Task::none();
        };

        if self.lightbox.is_open() {
            match named {
                Named::Escape => self.close_lightbox(),
                Named::Tab if modifiers.shift() => self.lightbox.focus_previous(),
                Named::Tab => self.lightbox.focus_next(),
                Named::ArrowRight => return self.step_lightbox(1),
                Named::ArrowLeft => return self.step_lightbox(-1),
                Named::Enter | Named::Space => {
                    if let Some(action) = self.lightbox.activate_focus() {
                        return self.apply_lightbox_action(action);
                    }
                }
                _ => {}
            }
            return Task::none();
        }

        if self.gallery.is_interactive() {
            match named {
                Named::Tab if modifiers.shift() => self.gallery.focus_previous(),
                Named::Tab => self.gallery.focus_next(),
                Named::Enter | Named::Space => {
                    if let Some(card) = self.gallery.focused_card() {
                        return self.open_lightbox(card);
                    }
                }
                _ => {}
            }
        }
        Task::none()
    }

    fn open_lightbox(&mut self, card: usize) -> Task<Message> {
        if self.breakpoint.is_compact() {
            return Task::none();
        }
        let visible = self.gallery.visible_cards();
        let restore = self.gallery.focus();
        self.lightbox.open(card, visible, restore);
        self.fetch_full_size()
    }

    fn close_lightbox(&mut self) {
        let restore = self.lightbox.close();
        self.gallery.restore_focus(restore);
    }

    fn step_lightbox(&mut self, direction: i32) -> Task<Message> {
        self.lightbox.step(direction);
        self.fetch_full_size()
    }

    fn apply_lightbox_action(&mut self, action: lightbox::Action) -> Task<Message> {
        match action {
            lightbox::Action::Close => {
                self.close_lightbox();
                Task::none()
            }
            lightbox::Action::Step(direction) => self.step_lightbox(direction),
            lightbox::Action::Jump(position) => {
                self.lightbox.jump(position);
                self.fetch_full_size()
            }
        }
    }

    /// Starts fetching the full-resolution rendition of the active lightbox
    /// card, if one is open and not yet cached.
    fn fetch_full_size(&mut self) -> Task<Message> {
        let Some(source) = self
            .lightbox
            .session()
            .and_then(|session| self.portfolio.photos.get(session.current_card()))
            .map(|photo| portfolio::full_size_source(&photo.source))
        else {
            return Task::none();
        };
        self.fetch_source(source)
    }

    /// Hero stage bounds in window coordinates, derived from the nominal
    /// page span and the live scroll offset.
    fn hero_stage_bounds(&self) -> Rectangle {
        Rectangle {
            x: layout::PAGE_PADDING,
            y: self.metrics.hero.top - self.scroll_offset,
            width: (self.window_size.width - layout::PAGE_PADDING * 2.0).max(0.0),
            height: self.metrics.hero.height,
        }
    }
}
