// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page controllers.
//!
//! The `App` struct wires together the domains (portfolio, media cache,
//! localization) and the UI controllers (reveal, hero, filters, gallery,
//! lightbox), and translates messages into controller calls and side effects
//! like image fetches or bounds measurements. This file intentionally keeps
//! policy decisions (window sizing, startup warnings, what gets prefetched)
//! close to the main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::app::config::Config;
use crate::i18n::I18n;
use crate::media::{self, MediaCache};
use crate::portfolio::Portfolio;
use crate::ui::layout::{Breakpoint, PageMetrics, SectionId};
use crate::ui::theming::ThemeMode;
use crate::ui::{filters, gallery, hero, lightbox, reveal};
use iced::widget::selector;
use iced::{window, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Staggered reveal children per static section: the hero has its kicker
/// and headline, the intro its heading and two paragraphs, the contact its
/// heading and body. The gallery's children are its cards.
pub(crate) const HERO_CHILDREN: usize = 2;
pub(crate) const INTRO_CHILDREN: usize = 3;
pub(crate) const CONTACT_CHILDREN: usize = 2;

/// Root Iced application state that bridges the portfolio data, media
/// cache, localization, and the page controllers.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    portfolio: Portfolio,
    media: MediaCache,
    breakpoint: Breakpoint,
    window_size: Size,
    /// Last cursor position in window coordinates, for the hero tilt and
    /// for resolving stage presses into swipe coordinates.
    cursor: Point,
    scroll_offset: f32,
    viewport_height: f32,
    metrics: PageMetrics,
    reveal: reveal::State,
    hero: hero::State,
    filters: filters::State,
    gallery: gallery::State,
    lightbox: lightbox::State,
    /// Non-fatal startup problem (corrupt config, unreadable manifest),
    /// surfaced at the bottom of the page instead of blocking launch.
    load_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("breakpoint", &self.breakpoint)
            .field("photos", &self.portfolio.photos.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let (portfolio, manifest_warning) = match flags.manifest_path.as_deref() {
            Some(path) => match Portfolio::load_from_path(Path::new(path)) {
                Ok(loaded) => (loaded, None),
                Err(err) => (
                    Portfolio::embedded_default(),
                    Some(format!("{}: {err}", i18n.tr("portfolio-load-error"))),
                ),
            },
            None => (Portfolio::embedded_default(), None),
        };

        let theme_mode = config.general.theme_mode;
        let reduce = config.motion.reduce;
        let mut app = Self {
            i18n,
            config,
            theme_mode,
            portfolio: Portfolio {
                slides: Vec::new(),
                photos: Vec::new(),
            },
            media: MediaCache::new(),
            breakpoint: Breakpoint::from_width(WINDOW_DEFAULT_WIDTH as f32),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            cursor: Point::ORIGIN,
            scroll_offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            metrics: PageMetrics::new(0),
            reveal: reveal::State::new(reduce),
            hero: hero::State::new(Vec::new(), Duration::from_millis(0), reduce),
            filters: filters::State::new(&[]),
            gallery: gallery::State::new(&[]),
            lightbox: lightbox::State::new(),
            load_warning: manifest_warning.or(config_warning),
        };
        app.install_portfolio(portfolio);

        let tasks = Task::batch([app.startup_fetches(), app.measure_chips()]);
        (app, tasks)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Replaces the current portfolio and rebuilds every controller that
    /// derives from it. Used at startup and after loading a new manifest.
    fn install_portfolio(&mut self, portfolio: Portfolio) {
        let reduce = self.config.motion.reduce;
        let interval = Duration::from_millis(self.config.motion.hero_interval_ms());

        self.metrics = PageMetrics::new(portfolio.photos.len());
        self.filters = filters::State::new(&portfolio.categories());
        self.gallery = gallery::State::new(&portfolio.photos);
        self.lightbox = lightbox::State::new();
        self.hero = hero::State::new(portfolio.slides.clone(), interval, reduce);
        self.hero.sync(self.breakpoint);

        self.reveal = reveal::State::new(reduce);
        self.register_sections(portfolio.photos.len());
        self.portfolio = portfolio;

        self.gallery.set_interactive(!self.breakpoint.is_compact());
        if self.breakpoint.is_compact() {
            self.reveal.force_reveal(SectionId::Gallery);
        }

        // Sections already on screen reveal without waiting for a scroll.
        self.reveal
            .handle_scroll(self.scroll_offset, self.viewport_height, Instant::now());
    }

    fn register_sections(&mut self, photo_count: usize) {
        self.reveal.reset();
        self.reveal
            .register(SectionId::Hero, self.metrics.hero, HERO_CHILDREN);
        self.reveal
            .register(SectionId::Intro, self.metrics.intro, INTRO_CHILDREN);
        self.reveal
            .register(SectionId::Gallery, self.metrics.gallery, photo_count);
        self.reveal
            .register(SectionId::Contact, self.metrics.contact, CONTACT_CHILDREN);
    }

    /// Starts a background fetch for one source unless it is already cached
    /// or in flight.
    fn fetch_source(&mut self, source: String) -> Task<Message> {
        if !self.media.begin_fetch(&source) {
            return Task::none();
        }
        let loading = source.clone();
        Task::perform(media::load(loading), move |result| Message::MediaLoaded {
            source: source.clone(),
            result,
        })
    }

    /// Eagerly fetches the current hero slide, the remaining slides, and
    /// every gallery thumbnail. Full-size lightbox renditions are fetched
    /// on demand instead.
    fn startup_fetches(&mut self) -> Task<Message> {
        let mut sources: Vec<String> = Vec::new();
        if let Some(slide) = self.hero.current_slide() {
            sources.push(slide.source.clone());
        }
        sources.extend(self.hero.preload_sources());
        sources.extend(self.portfolio.photos.iter().map(|p| p.source.clone()));

        Task::batch(sources.into_iter().map(|source| self.fetch_source(source)))
    }

    /// Schedules a bounds measurement for the active filter chip. The epoch
    /// token invalidates any response still in flight from an earlier
    /// schedule.
    fn measure_chips(&mut self) -> Task<Message> {
        let epoch = self.filters.schedule_measure();
        let chip_id = filters::State::chip_id(self.filters.active());

        selector::find(selector::id(filters::State::row_id())).then(move |row| {
            let row = row.and_then(|target| target.visible_bounds());
            selector::find(selector::id(chip_id.clone())).map(move |chip| {
                Message::ChipBoundsMeasured {
                    epoch,
                    row,
                    chip: chip.and_then(|target| target.visible_bounds()),
                }
            })
        })
    }
}
