use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use xylene_core::{AreaType, FloorFilter};

use super::app::{DialogApp, Focus};

pub fn render(frame: &mut Frame, app: &DialogApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Selector columns
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_columns(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("xyl dialog - asset location").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, area);
}

fn render_columns(frame: &mut Frame, app: &DialogApp, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_list(
        frame,
        app,
        columns[0],
        Focus::Campus,
        "Campus",
        app.options
            .campuses
            .iter()
            .map(|c| entry(&c.name, app.selection.campus_id.as_ref() == Some(&c.id)))
            .collect(),
    );

    render_list(
        frame,
        app,
        columns[1],
        Focus::AreaType,
        "Area type",
        vec![
            entry("Indoor", app.selection.area_type == AreaType::Building),
            entry("Outdoor", app.selection.area_type == AreaType::Outdoor),
        ],
    );

    render_list(
        frame,
        app,
        columns[2],
        Focus::Building,
        "Building",
        app.options
            .buildings
            .iter()
            .map(|b| {
                entry(
                    &b.name,
                    app.selection.building_id.as_ref() == Some(&b.id),
                )
            })
            .collect(),
    );

    render_list(
        frame,
        app,
        columns[3],
        Focus::Floor,
        "Floor",
        app.floor_choices()
            .iter()
            .map(|f| {
                let label = match f {
                    FloorFilter::All => "All floors".to_string(),
                    FloorFilter::Floor(n) => format!("Floor {}", n),
                };
                entry(&label, app.selection.floor_filter == Some(*f))
            })
            .collect(),
    );

    let (leaf_title, leaf_items) = match app.selection.area_type {
        AreaType::Outdoor => (
            "Outdoor area",
            app.options
                .outdoor_areas
                .iter()
                .map(|a| {
                    entry(
                        &a.name,
                        app.selection.outdoor_area_id.as_ref() == Some(&a.id),
                    )
                })
                .collect(),
        ),
        _ => (
            "Zone",
            app.options
                .zones
                .iter()
                .map(|z| entry(&z.name, app.selection.zone_id.as_ref() == Some(&z.id)))
                .collect(),
        ),
    };
    render_list(frame, app, columns[4], Focus::Leaf, leaf_title, leaf_items);
}

fn entry(label: &str, chosen: bool) -> String {
    if chosen {
        format!("* {}", label)
    } else {
        format!("  {}", label)
    }
}

fn render_list(
    frame: &mut Frame,
    app: &DialogApp,
    area: Rect,
    focus: Focus,
    title: &str,
    labels: Vec<String>,
) {
    let focused = app.focus == focus;
    let enabled = app.focus_enabled(focus);

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let mut style = if enabled {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if focused && i == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(label).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style),
    );
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, app: &DialogApp, area: Rect) {
    let text = match app.warnings.last() {
        Some(warning) => warning.clone(),
        None => "Tab: next level  Enter: select  s: submit  Esc: cancel".to_string(),
    };
    let style = if app.warnings.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}
