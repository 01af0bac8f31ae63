//! UI rendering for the InfoSpace library screens.
//!
//! Renders the current [`App`] state: the library grid with its filter
//! bar and trailing loading row, the item-detail view, the planet view,
//! the gallery, and the alert popup.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Screen};
use crate::models::{MediaType, SpaceItem};

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selected row
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Color for image items
pub const COLOR_IMAGE: Color = Color::LightCyan;

/// Color for video items
pub const COLOR_VIDEO: Color = Color::LightMagenta;

/// Color for audio items
pub const COLOR_AUDIO: Color = Color::LightYellow;

/// Alert border color
pub const COLOR_ALERT: Color = Color::LightRed;

const SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Render the whole frame for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Library => render_library(frame, app),
        Screen::ItemDetail => render_item_detail(frame, app),
        Screen::PlanetDetail => render_planet_detail(frame, app),
        Screen::Gallery => render_gallery(frame, app),
    }

    if let Some(alert) = &app.alert {
        render_alert(frame, alert);
    }
}

fn render_library(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_filter_bar(frame, app, chunks[1]);
    render_item_grid(frame, app, chunks[2]);
    render_keybinds(
        frame,
        chunks[3],
        "j/k move  Enter detail  g gallery  / search  y years  f media  r reset  p planets  q quit",
    );
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.loading {
        let spinner = SPINNER_FRAMES[app.tick_count as usize % SPINNER_FRAMES.len()];
        format!(" Space Library {} ", spinner)
    } else {
        " Space Library ".to_string()
    };

    let mode = if app.library.is_filtered() {
        Span::styled("filtered", Style::default().fg(COLOR_ACCENT))
    } else {
        Span::styled("default", Style::default().fg(COLOR_DIM))
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} items", app.library.item_count()),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw("  "),
        mode,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(title),
    );

    frame.render_widget(header, area);
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    match app.input_mode {
        InputMode::Search => {
            spans.push(Span::styled("search: ", Style::default().fg(COLOR_ACCENT)));
            spans.push(Span::raw(app.input_buffer.clone()));
            spans.push(Span::styled("_", Style::default().fg(COLOR_ACCENT)));
        }
        InputMode::Years => {
            spans.push(Span::styled(
                "years (start-end): ",
                Style::default().fg(COLOR_ACCENT),
            ));
            spans.push(Span::raw(app.input_buffer.clone()));
            spans.push(Span::styled("_", Style::default().fg(COLOR_ACCENT)));
        }
        InputMode::Normal => {
            let bar = &app.filter_bar;
            let search = bar.search_text.as_deref().unwrap_or("-");
            let years = match (&bar.year_start, &bar.year_end) {
                (None, None) => "-".to_string(),
                (start, end) => format!(
                    "{}-{}",
                    start.as_deref().unwrap_or(""),
                    end.as_deref().unwrap_or("")
                ),
            };
            let media = if bar.media_types.is_empty() {
                "all".to_string()
            } else {
                bar.media_types
                    .iter()
                    .map(MediaType::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            };

            spans.push(Span::styled("q: ", Style::default().fg(COLOR_DIM)));
            spans.push(Span::raw(search.to_string()));
            spans.push(Span::styled("   years: ", Style::default().fg(COLOR_DIM)));
            spans.push(Span::raw(years));
            spans.push(Span::styled("   media: ", Style::default().fg(COLOR_DIM)));
            spans.push(Span::raw(media));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" Filters "),
    );

    frame.render_widget(bar, area);
}

fn render_item_grid(frame: &mut Frame, app: &App, area: Rect) {
    let mut rows: Vec<ListItem> = app.library.items().iter().map(item_row).collect();

    // trailing placeholder row while the next page loads
    if app.library.reload_pending() {
        let spinner = SPINNER_FRAMES[app.tick_count as usize % SPINNER_FRAMES.len()];
        rows.push(ListItem::new(Line::from(Span::styled(
            format!("  {} loading more...", spinner),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))));
    }

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    if app.library.item_count() > 0 {
        state.select(Some(app.selected.min(app.library.item_count() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn item_row(item: &SpaceItem) -> ListItem<'static> {
    let tag_color = match item.data.media_type {
        MediaType::Image => COLOR_IMAGE,
        MediaType::Video => COLOR_VIDEO,
        MediaType::Audio => COLOR_AUDIO,
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("[{}] ", item.data.media_type),
            Style::default().fg(tag_color),
        ),
        Span::raw(item.data.title.clone()),
        Span::styled(
            format!("  {}", item.data.date_created.format("%Y-%m-%d")),
            Style::default().fg(COLOR_DIM),
        ),
    ]))
}

fn render_item_detail(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let Some(item) = app.library.item(app.selected) else {
        return;
    };
    let data = &item.data;

    let mut lines = vec![
        Line::from(Span::styled(
            data.title.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        detail_line("nasa id", &data.nasa_id),
        detail_line("media", data.media_type.as_str()),
        detail_line("created", &data.date_created.format("%Y-%m-%d %H:%M UTC").to_string()),
    ];

    if let Some(center) = &data.center {
        lines.push(detail_line("center", center));
    }
    if let Some(photographer) = &data.photographer {
        lines.push(detail_line("photographer", photographer));
    }
    if let Some(creator) = &data.secondary_creator {
        lines.push(detail_line("creator", creator));
    }
    if let Some(location) = &data.location {
        lines.push(detail_line("location", location));
    }
    if let Some(keywords) = &data.keywords {
        lines.push(detail_line("keywords", &keywords.join(", ")));
    }
    if let Some(album) = &data.album {
        lines.push(detail_line("album", &album.join(", ")));
    }
    if let Some(description) = &data.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.clone()));
    }
    if !item.links.is_empty() {
        lines.push(Line::from(""));
        for link in &item.links {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", link.rel), Style::default().fg(COLOR_DIM)),
                Span::raw(link.href.clone()),
            ]));
        }
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" Item Detail "),
    );

    frame.render_widget(detail, chunks[0]);
    render_keybinds(frame, chunks[1], "g gallery  Esc back  q quit");
}

fn render_planet_detail(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let Some(planet) = app.planets.get(app.planet_index) else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            planet.title.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(planet.description.clone()),
        Line::from(""),
        detail_line("satellites", &planet.satellites.unwrap_or(0).to_string()),
        detail_line("header image", &planet.header_image_url),
    ];

    if !planet.images.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "gallery",
            Style::default().fg(COLOR_DIM),
        )));
        for image in &planet.images {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::raw(image.title.clone().unwrap_or_default()),
                Span::styled(format!("  {}", image.image_url), Style::default().fg(COLOR_DIM)),
            ]));
        }
    }

    let title = format!(
        " Planets ({}/{}) ",
        app.planet_index + 1,
        app.planets.len()
    );
    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(title),
    );

    frame.render_widget(detail, chunks[0]);
    render_keybinds(frame, chunks[1], "j/k next/prev planet  Esc back  q quit");
}

fn render_gallery(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let rows: Vec<ListItem> = app
        .gallery_urls
        .iter()
        .map(|url| ListItem::new(Line::from(url.clone())))
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" Gallery "),
        )
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::REVERSED),
        );

    let mut state = ListState::default();
    if !app.gallery_urls.is_empty() {
        state.select(Some(app.gallery_index.min(app.gallery_urls.len() - 1)));
    }

    frame.render_stateful_widget(list, chunks[0], &mut state);
    render_keybinds(frame, chunks[1], "j/k move  Esc back  q quit");
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let alert = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_ALERT))
                .title(" Error "),
        );

    frame.render_widget(alert, area);
}

fn render_keybinds(frame: &mut Frame, area: Rect, hints: &str) {
    let line = Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM)));
    frame.render_widget(line, area);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(COLOR_DIM)),
        Span::raw(value.to_string()),
    ])
}

/// Centered popup rect as a percentage of the containing area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
