use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, transcript, input line, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, transcript_area, input_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("binfo – Bradford bin collection assistant")
        .block(Block::default().borders(Borders::ALL).title("Binfo"));
    frame.render_widget(header, *header_area);

    draw_transcript(frame, app, *transcript_area);

    // Input line
    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().borders(Borders::ALL).title(
            "Ask about your bins (postcode district or area name, Enter to send)",
        ))
        .wrap(Wrap { trim: true });
    frame.render_widget(input, *input_area);

    // Status bar
    let nav_hint = "Type to edit · Enter ask · ↑/↓ scroll · Esc/Ctrl-C quit";

    let status_text = if app.is_loading {
        format!("Thinking… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_transcript(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines: Vec<Line<'_>> = Vec::new();

    if app.transcript.is_empty() {
        lines.push(Line::from(
            "No questions yet. Try a postcode district (e.g. BD7) or an area name.",
        ));
    }

    for exchange in &app.transcript {
        lines.push(Line::from(vec![
            Span::styled("You: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(exchange.question.as_str()),
        ]));
        for answer_line in exchange.answer.lines() {
            lines.push(Line::from(answer_line));
        }
        lines.push(Line::default());
    }

    // Keep the newest exchange visible: scroll counts up from the bottom.
    let inner_height = area.height.saturating_sub(2);
    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_offset = total_lines.saturating_sub(inner_height);
    let offset = max_offset.saturating_sub(app.scroll.min(max_offset));

    let transcript = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Conversation (↑/↓ to scroll)"),
        )
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));

    frame.render_widget(transcript, area);
}
