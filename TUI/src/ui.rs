use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::backend::InputMode;
use crate::chart::{legend_lines, PieChart};
use crate::config::KEY_HINTS;
use crate::controller::Phase;
use crate::ui_state::Screen;
use crate::view::{ChartSection, ResultView};

// Copper Sapphire Morning color palette
const BG_DARK: Color = Color::Rgb(12, 12, 16);           // Deep background
const BG_PANEL: Color = Color::Rgb(18, 18, 24);          // Slightly lighter for panels

// Sapphire blues
const SAPPHIRE: Color = Color::Rgb(101, 150, 243);       // #6596F3 - Primary accent
const CYAN_LIGHT: Color = Color::Rgb(178, 220, 226);     // #B2DCE2 - Light cyan

// Copper/warm tones
const COPPER: Color = Color::Rgb(138, 72, 38);           // #8A4826 - Copper
const PALE_YELLOW: Color = Color::Rgb(234, 208, 148);    // #EAD094 - Pale yellow

// Accent colors
const BURGUNDY: Color = Color::Rgb(204, 92, 68);         // #CC5C44 - Warnings/errors
const OLIVE: Color = Color::Rgb(131, 179, 102);          // #83B366 - Success/green

// Text colors
const TEXT_PRIMARY: Color = Color::Rgb(240, 240, 245);   // Near white
const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 190); // Light gray
const TEXT_MUTED: Color = Color::Rgb(105, 116, 133);     // #697485 - Medium gray

// Border colors (subtle)
const BORDER_DIM: Color = Color::Rgb(45, 50, 60);        // Dim border
const BORDER_ACCENT: Color = Color::Rgb(70, 85, 110);    // Accent border

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SIDEBAR_WIDTH: u16 = 26;
const RESULT_TEXT_ROWS: usize = 4;

const URL_PLACEHOLDER: &str = "Enter Tweet URL (e.g., https://x.com/user/status/123)";
const TEXT_PLACEHOLDER: &str = "Paste tweet text here";

/// Longest suffix of `s` that fits in `width` columns.
fn tail_fit(s: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

/// Rows `text` occupies when hard-wrapped at `width` columns.
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    text.split('\n')
        .map(|line| line.width().max(1).div_ceil(width))
        .sum()
}

/// Furthest the tweet text in the results panel can scroll.
fn max_text_scroll(text: &str, width: usize) -> u16 {
    let rows = wrapped_rows(text, width);
    rows.saturating_sub(rows.clamp(1, RESULT_TEXT_ROWS)) as u16
}

/// Scroll limit for the current result on a terminal `terminal_width` wide.
pub fn results_scroll_limit(app: &App, terminal_width: u16) -> u16 {
    let Some(result) = &app.controller.state().result else {
        return 0;
    };
    // Outer padding, sidebar, gap, results border
    let width = terminal_width.saturating_sub(2 + SIDEBAR_WIDTH + 1 + 2);
    max_text_scroll(&result.text, width as usize)
}

pub fn draw(frame: &mut Frame, app: &App) {
    // Fill entire background
    let bg = Block::default().style(Style::default().bg(BG_DARK));
    frame.render_widget(bg, frame.area());

    match app.ui.screen {
        Screen::Home => draw_home(frame, app),
        Screen::Analyze => draw_analyze(frame, app),
    }
}

fn draw_home(frame: &mut Frame, app: &App) {
    let area = frame.area();

    draw_background_pattern(frame, area, app.animation_frame);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(5),   // Title container
            Constraint::Length(2),   // Subtitle
            Constraint::Length(3),   // Hint
            Constraint::Min(0),
        ])
        .split(area);

    let title_width = 48.min(area.width);
    let h_padding = (area.width.saturating_sub(title_width)) / 2;
    let title_area = Rect {
        x: area.x + h_padding,
        y: v_chunks[1].y,
        width: title_width,
        height: v_chunks[1].height,
    };
    draw_glass_border(frame, title_area, "", app.animation_frame, true);

    let inner = Rect {
        x: title_area.x + 1,
        y: title_area.y + 1,
        width: title_area.width.saturating_sub(2),
        height: title_area.height.saturating_sub(2),
    };
    draw_title(frame, inner, app.animation_frame);

    let subtitle = Paragraph::new("Powered by Local & Gemini Model")
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_SECONDARY));
    frame.render_widget(subtitle, v_chunks[2]);

    // Press any key hint with copper glow
    let glow = (app.animation_frame as f64 / 45.0).sin().abs() * 0.5 + 0.5;
    let r = (138.0 + (216.0 - 138.0) * glow) as u8;
    let g = (72.0 + (180.0 - 72.0) * glow) as u8;
    let b = (38.0 + (169.0 - 38.0) * glow) as u8;
    let hint = Paragraph::new("[ Press any key to start ]")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Rgb(r, g, b)));
    frame.render_widget(hint, v_chunks[3]);

    let version_area = Rect {
        x: area.x,
        y: area.height.saturating_sub(2),
        width: area.width,
        height: 1,
    };
    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_MUTED));
    frame.render_widget(version, version_area);
}

fn draw_background_pattern(frame: &mut Frame, area: Rect, anim_frame: usize) {
    let pattern_offset = (anim_frame / 30) % 4;

    let mut lines: Vec<Line> = Vec::new();
    for y in 0..area.height as usize {
        let mut spans: Vec<Span> = Vec::new();
        for x in 0..area.width as usize {
            let show_star = ((x + pattern_offset) % 12 == 0) && ((y + pattern_offset) % 6 == 0);
            if show_star {
                let brightness = 25 + ((anim_frame as f64 / 60.0 + (x as f64 / 12.0)).sin().abs() * 15.0) as u8;
                let color = Color::Rgb(brightness, brightness + 2, brightness + 5);
                spans.push(Span::styled(".", Style::default().fg(color)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(BG_DARK)), area);
}

fn draw_glass_border(frame: &mut Frame, area: Rect, title: &str, anim_frame: usize, glow: bool) {
    // Animated border - cycles between sapphire and copper
    let border_color = if glow {
        let t = (anim_frame as f64 / 120.0).sin() * 0.5 + 0.5;
        let r = (84.0 + (138.0 - 84.0) * t) as u8;
        let g = (112.0 + (72.0 - 112.0) * t) as u8;
        let b = (156.0 + (38.0 - 156.0) * t) as u8;
        Color::Rgb(r, g, b)
    } else {
        BORDER_DIM
    };

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(SAPPHIRE).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(block, area);
}

fn draw_title(frame: &mut Frame, area: Rect, anim_frame: usize) {
    let title = "X  SENTIMENT  ANALYZER";
    let spans: Vec<Span> = title
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            // Wave between sapphire and cyan
            let wave = ((anim_frame as f64 / 25.0) + (idx as f64 / 4.0)).sin() * 0.5 + 0.5;
            let r = (101.0 + (178.0 - 101.0) * wave) as u8;
            let g = (150.0 + (220.0 - 150.0) * wave) as u8;
            let b = (243.0 + (226.0 - 243.0) * wave) as u8;
            Span::styled(
                ch.to_string(),
                Style::default().fg(Color::Rgb(r, g, b)).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let logo = Paragraph::new(vec![Line::from(""), Line::from(spans)]).alignment(Alignment::Center);
    frame.render_widget(logo, area);
}

fn draw_analyze(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let padded = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Length(1),   // Gap
            Constraint::Min(40),     // Form and results
        ])
        .split(padded);

    draw_sidebar(frame, app, main_chunks[0]);
    draw_main(frame, app, main_chunks[2]);

    if app.ui.debug_mode {
        draw_debug_overlay(frame, app, area);
    }
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),                          // Session info
            Constraint::Length(1),                          // Gap
            Constraint::Min(0),                             // Spacer
            Constraint::Length(KEY_HINTS.len() as u16 + 2), // Keyboard hints
        ])
        .split(area);

    draw_session_info(frame, app, chunks[0]);
    draw_keyboard_hints(frame, chunks[3]);
}

fn draw_session_info(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Session ", Style::default().fg(COPPER).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_ACCENT));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (phase_icon, phase_text, phase_color) = match app.controller.phase() {
        Phase::Idle => ("o", "Ready", TEXT_MUTED),
        Phase::Loading => (SPINNER[(app.animation_frame / 4) % SPINNER.len()], "Analyzing", SAPPHIRE),
        Phase::Succeeded => ("*", "Done", OLIVE),
        Phase::Failed => ("!", "Failed", BURGUNDY),
    };

    let host = app
        .api_base_url
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    let last = app
        .last_completed
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", phase_icon), Style::default().fg(phase_color)),
            Span::styled(phase_text, Style::default().fg(phase_color)),
        ]),
        Line::from(vec![
            Span::styled(" @ ", Style::default().fg(CYAN_LIGHT)),
            Span::styled(tail_fit(host, inner.width.saturating_sub(3) as usize).to_string(), Style::default().fg(TEXT_SECONDARY)),
        ]),
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(SAPPHIRE)),
            Span::styled(app.controller.state().mode.label(), Style::default().fg(TEXT_PRIMARY)),
        ]),
        Line::from(vec![
            Span::styled(" ~ ", Style::default().fg(COPPER)),
            Span::styled(format!("Last: {}", last), Style::default().fg(TEXT_SECONDARY)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_keyboard_hints(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_DIM));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hints: Vec<Line> = KEY_HINTS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<7}", key), Style::default().fg(SAPPHIRE).add_modifier(Modifier::BOLD)),
                Span::styled(*desc, Style::default().fg(TEXT_MUTED)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(hints), inner);
}

fn draw_main(frame: &mut Frame, app: &App, area: Rect) {
    let input_height = match app.controller.state().mode {
        InputMode::Url => 3,
        InputMode::Text => 8,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Header
            Constraint::Length(1),            // Mode tabs
            Constraint::Length(input_height), // Input
            Constraint::Length(1),            // Submit button
            Constraint::Length(1),            // Gap
            Constraint::Min(6),               // Results / error
            Constraint::Length(1),            // Status line
        ])
        .split(area);

    draw_header(frame, chunks[0]);
    draw_mode_tabs(frame, app, chunks[1]);
    draw_input(frame, app, chunks[2]);
    draw_submit_button(frame, app, chunks[3]);
    draw_outcome(frame, app, chunks[5]);
    draw_status_line(frame, app, chunks[6]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "X Sentiment Analyzer",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Powered by Local & Gemini Model", Style::default().fg(TEXT_MUTED))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_mode_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.controller.state().mode;
    let tab = |mode: InputMode| {
        let style = if mode == active {
            Style::default().fg(BG_DARK).bg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED).bg(BG_PANEL)
        };
        Span::styled(format!(" {} ", mode.label()), style)
    };

    let tabs = Line::from(vec![tab(InputMode::Url), Span::raw("   "), tab(InputMode::Text)]);
    frame.render_widget(Paragraph::new(tabs).alignment(Alignment::Center), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();

    // Pulsing border while editable, dim while a request is in flight
    let border_color = if state.is_loading {
        BORDER_DIM
    } else {
        let glow = (app.animation_frame as f64 / 90.0).sin() * 0.3 + 0.7;
        Color::Rgb((101.0 * glow) as u8, (150.0 * glow) as u8, (243.0 * glow) as u8)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = state.active_value();
    if value.is_empty() {
        let placeholder = match state.mode {
            InputMode::Url => URL_PLACEHOLDER,
            InputMode::Text => TEXT_PLACEHOLDER,
        };
        frame.render_widget(
            Paragraph::new(format!(" {}", placeholder)).style(Style::default().fg(TEXT_MUTED)),
            inner,
        );
        return;
    }

    let cursor = if !state.is_loading && app.animation_frame % 30 < 15 { "|" } else { " " };
    match state.mode {
        InputMode::Url => {
            let room = (inner.width as usize).saturating_sub(3);
            let shown = format!(" {}{}", tail_fit(value, room), cursor);
            frame.render_widget(Paragraph::new(shown).style(Style::default().fg(TEXT_PRIMARY)), inner);
        }
        InputMode::Text => {
            let text = format!("{}{}", value, cursor);
            let rows = wrapped_rows(&text, inner.width as usize);
            let scroll = rows.saturating_sub(inner.height as usize) as u16;
            let input = Paragraph::new(text)
                .style(Style::default().fg(TEXT_PRIMARY))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0));
            frame.render_widget(input, inner);
        }
    }
}

fn draw_submit_button(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let (label, style) = if state.is_loading {
        let spin = SPINNER[(app.animation_frame / 4) % SPINNER.len()];
        (format!("[ {} Analyzing... ]", spin), Style::default().fg(SAPPHIRE))
    } else if app.controller.can_submit() {
        (
            "[ Analyze Sentiment ]".to_string(),
            Style::default().fg(BG_DARK).bg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ Analyze Sentiment ]".to_string(), Style::default().fg(TEXT_MUTED))
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center), area);
}

fn draw_outcome(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();

    match app.controller.phase() {
        Phase::Idle => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Enter a tweet URL or switch to text with Tab",
                    Style::default().fg(TEXT_MUTED),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(hint, area);
        }
        Phase::Loading => {
            let spin = SPINNER[(app.animation_frame / 4) % SPINNER.len()];
            let elapsed = app
                .request_started
                .map(|s| format!(" ({:.0}s)", s.elapsed().as_secs_f64()))
                .unwrap_or_default();
            let msg = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} Analyzing sentiment{}", spin, elapsed),
                    Style::default().fg(SAPPHIRE),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(msg, area);
        }
        Phase::Failed => {
            let message = state.error_message.as_deref().unwrap_or_default();
            let err = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(message, Style::default().fg(BURGUNDY).add_modifier(Modifier::BOLD))),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(err, area);
        }
        Phase::Succeeded => {
            if let Some(result) = &state.result {
                draw_results(frame, app, &ResultView::from_result(result), area);
            }
        }
    }
}

fn draw_results(frame: &mut Frame, app: &App, view: &ResultView, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Analysis Results ", Style::default().fg(CYAN_LIGHT).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_ACCENT));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_rows = wrapped_rows(&view.text, inner.width as usize).clamp(1, RESULT_TEXT_ROWS) as u16;
    let scroll = app.ui.results_scroll.min(max_text_scroll(&view.text, inner.width as usize));
    let notice_rows = if view.notice.is_some() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(text_rows),   // Tweet text
            Constraint::Length(1),           // Gap
            Constraint::Min(4),              // Charts
            Constraint::Length(notice_rows), // Unavailability notice
            Constraint::Length(1),           // Next hint
        ])
        .split(inner);

    let text = Paragraph::new(view.text.as_str())
        .style(Style::default().fg(TEXT_SECONDARY))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(text, chunks[0]);

    if !view.sections.is_empty() {
        let constraints = vec![Constraint::Ratio(1, view.sections.len() as u32); view.sections.len()];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[2]);
        for (section, column) in view.sections.iter().zip(columns.iter()) {
            draw_chart_section(frame, section, *column);
        }
    }

    if let Some(notice) = &view.notice {
        let notice = Paragraph::new(Span::styled(notice.as_str(), Style::default().fg(PALE_YELLOW)))
            .alignment(Alignment::Center);
        frame.render_widget(notice, chunks[3]);
    }

    let next = Paragraph::new(Span::styled("[ Enter: Next ]", Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center);
    frame.render_widget(next, chunks[4]);
}

fn draw_chart_section(frame: &mut Frame, section: &ChartSection, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Overall label
            Constraint::Min(3),    // Pie
            Constraint::Length(3), // Legend
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        section.provider.title(),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if let Some(label) = section.overall_label() {
        let overall = Paragraph::new(Span::styled(label, Style::default().fg(PALE_YELLOW).add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center);
        frame.render_widget(overall, chunks[1]);
    }

    frame.render_widget(
        PieChart::new(&section.triple).empty_style(Style::default().fg(TEXT_MUTED)),
        chunks[2],
    );

    let legend_width = 20.min(chunks[3].width);
    let legend_area = Rect {
        x: chunks[3].x + (chunks[3].width - legend_width) / 2,
        y: chunks[3].y,
        width: legend_width,
        height: chunks[3].height,
    };
    frame.render_widget(
        Paragraph::new(legend_lines(&section.triple, Style::default().fg(TEXT_SECONDARY))),
        legend_area,
    );
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = &app.ui.status_message {
        let status = Paragraph::new(Span::styled(msg.as_str(), Style::default().fg(TEXT_MUTED)))
            .alignment(Alignment::Right);
        frame.render_widget(status, area);
    }
}

fn draw_debug_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_width = 40.min(area.width.saturating_sub(8));
    let overlay_height = 10.min(area.height.saturating_sub(4));
    let overlay_area = Rect {
        x: area.x + area.width.saturating_sub(overlay_width + 2),
        y: area.y + 2,
        width: overlay_width,
        height: overlay_height,
    };

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(Span::styled(
            " DEBUG ",
            Style::default().fg(Color::Rgb(255, 180, 100)).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(CYAN_LIGHT))
        .style(Style::default().bg(Color::Rgb(20, 24, 35)));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let state = app.controller.state();
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", label), Style::default().fg(TEXT_MUTED)),
            Span::styled(value, Style::default().fg(CYAN_LIGHT)),
        ])
    };
    let lines = vec![
        row("phase", format!("{:?}", app.controller.phase())),
        row("in-flight", format!("{:?}", app.controller.in_flight())),
        row("mode", format!("{:?}", state.mode)),
        row("url", format!("{} bytes", state.url_value.len())),
        row("text", format!("{} bytes", state.text_value.len())),
        row("tick", app.animation_tick.to_string()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
