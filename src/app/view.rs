// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one vertical scrollable with four sections (hero, intro,
//! gallery, contact); the lightbox is stacked on top of it as a modal
//! layer. Everything renders from controller state; unrevealed elements
//! are drawn fully transparent so the layout never shifts when they come
//! in.

use super::{App, Message};
use crate::portfolio::full_size_source;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::filters::{self, Filter};
use crate::ui::layout::{self, SectionId};
use crate::ui::lightbox::{FocusTarget, Session};
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, scrollable, stack, text,
    Space,
};
use iced::{Alignment, Border, Color, ContentFit, Element, Length};
use std::time::Instant;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let scheme = self.theme_mode.scheme();
        let page = page(self, scheme);

        match self.lightbox.session() {
            Some(session) => stack![page, lightbox_overlay(self, session, scheme)].into(),
            None => page,
        }
    }
}

fn page(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let content = column![
        hero_section(app, scheme),
        intro_section(app, scheme),
        gallery_section(app, scheme),
        contact_section(app, scheme),
    ]
    .spacing(layout::SECTION_GAP)
    .padding(layout::PAGE_PADDING)
    .width(Length::Fill);

    container(
        scrollable(content)
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .style(move |_theme| container::Style {
        background: Some(scheme.surface_primary.into()),
        text_color: Some(scheme.text_primary),
        ..container::Style::default()
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn reveal_alpha(revealed: bool) -> f32 {
    if revealed {
        opacity::OPAQUE
    } else {
        opacity::HIDDEN_CHILD
    }
}

fn faded(color: Color, revealed: bool) -> Color {
    Color {
        a: color.a * reveal_alpha(revealed),
        ..color
    }
}

fn hero_section(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let kicker_in = app.reveal.is_child_in(SectionId::Hero, 0);
    let title_in = app.reveal.is_child_in(SectionId::Hero, 1);
    let word = app
        .hero
        .current_slide()
        .map_or(String::new(), |slide| slide.word.clone());

    let copy = column![
        text(app.i18n.tr("hero-kicker"))
            .size(typography::CAPTION)
            .color(faded(scheme.text_secondary, kicker_in)),
        text(app.i18n.tr("hero-title"))
            .size(typography::DISPLAY)
            .color(faded(scheme.text_primary, title_in)),
        text(word).size(typography::KINETIC).color(scheme.accent),
    ]
    .spacing(spacing::MD)
    .width(Length::FillPortion(2));

    let stage = hero_stage(app, scheme);
    let body: Element<'_, Message> = if app.breakpoint.is_compact() {
        column![copy, stage].spacing(spacing::LG).into()
    } else {
        row![copy, stage]
            .spacing(spacing::XL)
            .align_y(Alignment::Center)
            .into()
    };

    container(body)
        .height(layout::HERO_HEIGHT)
        .width(Length::Fill)
        .into()
}

fn hero_stage(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let progress = app.hero.fade_progress(Instant::now());
    let (tilt_x, _) = app.hero.tilt();

    let mut layers = stack![];
    if let (Some(progress), Some(back)) = (progress, app.hero.back_slide()) {
        layers = layers.push(slide_image(
            app,
            &back.source,
            &back.alt,
            1.0 - progress,
            0.0,
            scheme,
        ));
    }
    if let Some(front) = app.hero.front_slide() {
        layers = layers.push(slide_image(
            app,
            &front.source,
            &front.alt,
            progress.unwrap_or(opacity::OPAQUE),
            tilt_x,
            scheme,
        ));
    }

    container(layers)
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .into()
}

fn slide_image<'a>(
    app: &'a App,
    source: &str,
    alt: &str,
    alpha: f32,
    tilt_deg: f32,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    match app.media.peek(source) {
        Some(loaded) => {
            let mut visual = image(loaded.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(alpha);
            if tilt_deg != 0.0 {
                visual = visual.rotation(iced::Radians(tilt_deg.to_radians()));
            }
            visual.into()
        }
        None => placeholder(alt.to_string(), scheme),
    }
}

/// Neutral box with the alt text, shown until a source finishes loading
/// (and kept when its fetch failed).
fn placeholder<'a>(alt: String, scheme: ColorScheme) -> Element<'a, Message> {
    container(
        text(alt)
            .size(typography::CAPTION)
            .color(scheme.text_secondary),
    )
    .style(move |_theme| container::Style {
        background: Some(scheme.surface_secondary.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn intro_section(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let child = |index| app.reveal.is_child_in(SectionId::Intro, index);

    container(
        column![
            text(app.i18n.tr("intro-title"))
                .size(typography::TITLE)
                .color(faded(scheme.text_primary, child(0))),
            text(app.i18n.tr("intro-lede"))
                .size(typography::BODY)
                .color(faded(scheme.text_secondary, child(1))),
            text(app.i18n.tr("intro-body"))
                .size(typography::BODY)
                .color(faded(scheme.text_secondary, child(2))),
        ]
        .spacing(spacing::MD)
        .max_width(720),
    )
    .height(layout::INTRO_HEIGHT)
    .width(Length::Fill)
    .into()
}

fn gallery_section(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let header = row![
        column![
            text(app.i18n.tr("gallery-title"))
                .size(typography::TITLE)
                .color(scheme.text_primary),
            text(app.i18n.tr("gallery-hint"))
                .size(typography::CAPTION)
                .color(scheme.text_secondary),
        ]
        .spacing(spacing::XXS)
        .width(Length::Fill),
        button(text(app.i18n.tr("open-portfolio")).size(typography::CAPTION))
            .on_press(Message::OpenManifestDialog)
            .padding([spacing::XS, spacing::MD])
            .style(move |_theme, status| chip_style(scheme, false, status)),
    ]
    .spacing(spacing::LG)
    .align_y(Alignment::Center);

    column![header, chip_row(app, scheme), gallery_grid(app, scheme)]
        .spacing(spacing::LG)
        .into()
}

fn chip_row(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let mut chips = row![].spacing(spacing::XS);
    for (index, filter) in app.filters.chips().iter().enumerate() {
        let label = match filter {
            Filter::All => app.i18n.tr("chip-all"),
            Filter::Category(name) => name.clone(),
        };
        let active = index == app.filters.active();
        let chip = button(text(label).size(typography::CAPTION))
            .on_press(Message::ChipPressed(index))
            .padding([spacing::XS, spacing::MD])
            .height(sizing::CHIP_HEIGHT)
            .style(move |_theme, status| chip_style(scheme, active, status));
        chips = chips.push(container(chip).id(filters::State::chip_id(index)));
    }

    let indicator: Element<'_, Message> = match app.filters.indicator() {
        Some(indicator) => row![
            Space::new().width(indicator.left),
            container(Space::new().height(sizing::INDICATOR_HEIGHT))
                .width(indicator.width)
                .style(move |_theme| container::Style {
                    background: Some(scheme.accent.into()),
                    ..container::Style::default()
                }),
        ]
        .into(),
        None => Space::new().height(sizing::INDICATOR_HEIGHT).into(),
    };

    column![container(chips).id(filters::State::row_id()), indicator]
        .spacing(spacing::XXS)
        .into()
}

fn chip_style(
    scheme: ColorScheme,
    active: bool,
    status: iced::widget::button::Status,
) -> button::Style {
    use iced::widget::button::Status;

    let background = if active {
        scheme.accent
    } else if matches!(status, Status::Hovered | Status::Pressed) {
        scheme.surface_secondary
    } else {
        Color::TRANSPARENT
    };

    button::Style {
        background: Some(background.into()),
        text_color: if active {
            scheme.surface_primary
        } else {
            scheme.text_primary
        },
        border: Border {
            radius: radius::FULL.into(),
            width: 1.0,
            color: scheme.text_secondary,
        },
        ..button::Style::default()
    }
}

fn gallery_grid(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let columns = if app.breakpoint.is_compact() {
        1
    } else {
        layout::GALLERY_COLUMNS
    };
    let focused = app.gallery.focused_card();
    let cards = app.gallery.visible_cards();

    let mut grid = column![].spacing(layout::GALLERY_ROW_GAP);
    for chunk in cards.chunks(columns) {
        let mut grid_row = row![].spacing(layout::GALLERY_ROW_GAP);
        for &photo_index in chunk {
            grid_row = grid_row.push(gallery_card(
                app,
                photo_index,
                focused == Some(photo_index),
                scheme,
            ));
        }
        // Pad the last row so its cards keep the column width.
        for _ in chunk.len()..columns {
            grid_row = grid_row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(grid_row.height(layout::GALLERY_ROW_HEIGHT));
    }
    grid.into()
}

fn gallery_card(
    app: &App,
    photo_index: usize,
    focused: bool,
    scheme: ColorScheme,
) -> Element<'_, Message> {
    let photo = &app.portfolio.photos[photo_index];
    let revealed = app.reveal.is_child_in(SectionId::Gallery, photo_index);

    let visual: Element<'_, Message> = match app.media.peek(&photo.source) {
        Some(loaded) => image(loaded.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(reveal_alpha(revealed))
            .into(),
        None => placeholder(photo.alt.clone(), scheme),
    };

    let framed = container(visual)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(scheme.surface_secondary.into()),
            border: Border {
                radius: radius::MD.into(),
                width: if focused { 2.0 } else { 0.0 },
                color: scheme.accent,
            },
            ..container::Style::default()
        });

    if app.gallery.is_interactive() {
        mouse_area(framed)
            .on_press(Message::CardActivated(photo_index))
            .into()
    } else {
        framed.into()
    }
}

fn contact_section(app: &App, scheme: ColorScheme) -> Element<'_, Message> {
    let child = |index| app.reveal.is_child_in(SectionId::Contact, index);

    let mut body = column![
        text(app.i18n.tr("contact-title"))
            .size(typography::TITLE)
            .color(faded(scheme.text_primary, child(0))),
        text(app.i18n.tr("contact-body"))
            .size(typography::BODY)
            .color(faded(scheme.text_secondary, child(1))),
    ]
    .spacing(spacing::MD);

    if let Some(warning) = &app.load_warning {
        body = body.push(
            text(warning.as_str())
                .size(typography::CAPTION)
                .color(scheme.error),
        );
    }

    container(body)
        .height(layout::CONTACT_HEIGHT)
        .width(Length::Fill)
        .into()
}

fn lightbox_overlay<'a>(
    app: &'a App,
    session: &'a Session,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    let focus = session.focus();
    let photo = &app.portfolio.photos[session.current_card()];
    let caption = photo
        .caption()
        .map_or_else(|| app.i18n.tr("lightbox-caption-fallback"), String::from);

    let header = row![
        text(caption)
            .size(typography::BODY)
            .color(scheme.text_primary)
            .width(Length::Fill),
        control_button(
            app.i18n.tr("lightbox-close"),
            Message::LightboxClose,
            focus == FocusTarget::Close,
            scheme,
        ),
    ]
    .spacing(spacing::LG)
    .align_y(Alignment::Center);

    // Full-size rendition when cached, thumbnail while it loads.
    let full = full_size_source(&photo.source);
    let stage_visual: Element<'a, Message> = match app
        .media
        .peek(&full)
        .or_else(|| app.media.peek(&photo.source))
    {
        Some(loaded) => image(loaded.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => placeholder(photo.alt.clone(), scheme),
    };

    let stage = row![
        control_button(
            app.i18n.tr("lightbox-previous"),
            Message::LightboxStep(-1),
            focus == FocusTarget::Previous,
            scheme,
        ),
        container(stage_visual).width(Length::Fill).height(Length::Fill),
        control_button(
            app.i18n.tr("lightbox-next"),
            Message::LightboxStep(1),
            focus == FocusTarget::Next,
            scheme,
        ),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center)
    .height(Length::Fill);

    let mut thumbs = row![].spacing(spacing::XS);
    for (position, &card) in session.cards().iter().enumerate() {
        thumbs = thumbs.push(thumb(app, session, position, card, scheme));
    }
    let thumb_strip = scrollable(thumbs)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill);

    let panel = mouse_area(
        container(
            column![header, stage, thumb_strip]
                .spacing(spacing::LG)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .max_width(980)
        .padding(spacing::LG)
        .style(move |_theme| container::Style {
            background: Some(scheme.surface_primary.into()),
            text_color: Some(scheme.text_primary),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }),
    )
    .on_press(Message::StagePressed)
    .on_release(Message::StageReleased);

    opaque(
        mouse_area(
            center(opaque(panel))
                .padding(spacing::XL)
                .style(move |_theme| container::Style {
                    background: Some(scheme.overlay_background.into()),
                    ..container::Style::default()
                }),
        )
        .on_press(Message::BackdropPressed),
    )
}

fn thumb<'a>(
    app: &'a App,
    session: &Session,
    position: usize,
    card: usize,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    let photo = &app.portfolio.photos[card];
    let active = position == session.index();
    let focused = session.focus() == FocusTarget::Thumb(position);

    let visual: Element<'a, Message> = match app.media.peek(&photo.source) {
        Some(loaded) => image(loaded.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => placeholder(photo.alt.clone(), scheme),
    };

    mouse_area(
        container(visual)
            .width(sizing::THUMB_WIDTH)
            .height(sizing::THUMB_HEIGHT)
            .style(move |_theme| container::Style {
                border: Border {
                    radius: radius::SM.into(),
                    width: if active || focused { 2.0 } else { 1.0 },
                    color: if focused {
                        scheme.accent_strong
                    } else if active {
                        scheme.accent
                    } else {
                        scheme.text_secondary
                    },
                },
                ..container::Style::default()
            }),
    )
    .on_press(Message::ThumbPressed(position))
    .into()
}

fn control_button<'a>(
    label: String,
    message: Message,
    focused: bool,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    button(text(label).size(typography::CAPTION))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .height(sizing::CONTROL_SIZE)
        .style(move |_theme, status| {
            use iced::widget::button::Status;
            let hovered = matches!(status, Status::Hovered | Status::Pressed);
            button::Style {
                background: Some(
                    if hovered {
                        scheme.surface_secondary
                    } else {
                        Color::TRANSPARENT
                    }
                    .into(),
                ),
                text_color: scheme.text_primary,
                border: Border {
                    radius: radius::SM.into(),
                    width: if focused { 2.0 } else { 1.0 },
                    color: if focused {
                        scheme.accent
                    } else {
                        scheme.text_secondary
                    },
                },
                ..button::Style::default()
            }
        })
        .into()
}
