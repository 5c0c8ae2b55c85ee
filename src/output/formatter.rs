use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::config::Button;

/// Format the button board as one numbered line per button, matching the
/// indices `hopboard open` accepts.
pub fn format_button_list(buttons: &[Button], use_colors: bool) -> String {
    if buttons.is_empty() {
        return "No buttons configured. Run `hopboard init` to create a board.".to_string();
    }

    let width = get_terminal_width();
    buttons
        .iter()
        .enumerate()
        .map(|(idx, button)| format_button_line(idx + 1, button, use_colors, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single button as one line: "{index}. {label} -> {url}"
fn format_button_line(
    index: usize,
    button: &Button,
    use_colors: bool,
    width: Option<usize>,
) -> String {
    let label = match width {
        // "N. " prefix, " -> " separator, and room for the URL.
        Some(w) => truncate_label(button.display_label(), w.saturating_sub(30).max(12)),
        None => button.display_label().to_string(),
    };

    if use_colors {
        format!(
            "{}. {} -> {}",
            index,
            label.bold(),
            button.target().underline()
        )
    } else {
        format!("{}. {} -> {}", index, label, button.target())
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(label: Option<&str>, url: Option<&str>) -> Button {
        Button {
            label: label.map(String::from),
            url: url.map(String::from),
        }
    }

    #[test]
    fn test_empty_board_message() {
        let out = format_button_list(&[], false);
        assert!(out.contains("No buttons configured"));
    }

    #[test]
    fn test_lines_are_one_based() {
        let buttons = vec![
            button(Some("Posts"), Some("http://localhost:3002/posts")),
            button(Some("Todos"), Some("http://localhost:3001/todos")),
        ];
        let out = format_button_list(&buttons, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. Posts"));
        assert!(lines[1].starts_with("2. Todos"));
    }

    #[test]
    fn test_plain_line_format() {
        let out = format_button_line(
            3,
            &button(Some("Food"), Some("http://localhost:3003/food")),
            false,
            None,
        );
        assert_eq!(out, "3. Food -> http://localhost:3003/food");
    }

    #[test]
    fn test_missing_url_prints_undefined() {
        let out = format_button_line(1, &button(Some("Broken"), None), false, None);
        assert_eq!(out, "1. Broken -> undefined");
    }

    #[test]
    fn test_truncate_label_unicode_safe() {
        assert_eq!(truncate_label("périphérique réseau", 10), "périphé...");
        assert_eq!(truncate_label("short", 10), "short");
    }
}
