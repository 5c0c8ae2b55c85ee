use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table};

use crate::tui::app::{App, InputMode};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 6 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Table(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // Button table
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "hopboard",
        Style::default().fg(theme::TITLE_COLOR).bold(),
    )];

    let count_text = format!("{} buttons", app.buttons.len());
    let left_len = "hopboard".len();
    let padding_len = (area.width as usize).saturating_sub(left_len + count_text.len());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(count_text, Style::default().fg(theme::MUTED)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    // Remember where the table landed so clicks can be mapped back to rows.
    app.table_area = Some(area);

    if app.buttons.is_empty() {
        let empty_msg = Paragraph::new("No buttons configured. Run `hopboard init`.")
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let label_width = (area.width as usize).saturating_sub(4 + 2).max(10) / 2;

    let rows: Vec<Row> = app
        .buttons
        .iter()
        .enumerate()
        .map(|(idx, button)| {
            let index = format!("{}.", idx + 1);
            let label = truncate(button.display_label(), label_width);
            let destination = button.target().to_string();

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(index).style(Style::default().fg(theme::INDEX_COLOR)),
                Cell::from(label),
                Cell::from(destination).style(Style::default().fg(theme::URL_COLOR)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4), // Index: "99."
        Constraint::Fill(1),   // Label
        Constraint::Fill(2),   // Destination URL
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["#", "Button", "Destination"])
                .style(theme::HEADER_STYLE)
                .bottom_margin(1),
        )
        .row_highlight_style(theme::ROW_SELECTED);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some(msg) = app.status.text() {
        let msg_color = if msg.starts_with("Failed") {
            theme::FLASH_ERROR
        } else {
            theme::REDIRECT_COLOR
        };
        Line::from(Span::styled(
            msg.to_string(),
            Style::default().fg(msg_color),
        ))
    } else {
        // Key hints with colored shortcut keys
        let hints = [
            ("j", "/", "k", ":nav "),
            ("Enter", "", "", ":open "),
            ("click", "", "", ":open "),
            ("?", "", "", ":help "),
            ("q", "", "", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key1, sep, key2, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key1,
                Style::default().fg(theme::STATUS_KEY_COLOR),
            ));
            if !sep.is_empty() {
                spans.push(Span::raw(*sep));
                spans.push(Span::styled(
                    *key2,
                    Style::default().fg(theme::STATUS_KEY_COLOR),
                ));
            }
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(46, 10, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("j / Down      ", key_style),
            Span::raw("Move down"),
        ]),
        Line::from(vec![
            Span::styled("k / Up        ", key_style),
            Span::raw("Move up"),
        ]),
        Line::from(vec![
            Span::styled("Enter / o     ", key_style),
            Span::raw("Redirect to selected button"),
        ]),
        Line::from(vec![
            Span::styled("left click    ", key_style),
            Span::raw("Redirect to clicked button"),
        ]),
        Line::from(vec![
            Span::styled("?             ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c    ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Posts", 10), "Posts");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate("a very long button label", 10), "a very ...");
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(46, 10, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
