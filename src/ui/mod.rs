mod components;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Field};
use crate::theme::Theme;

pub fn draw(f: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1), // Info line
            Constraint::Length(3), // Text input
            Constraint::Length(3), // Delimiter input
            Constraint::Min(3),    // Rendered list
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_info_line(f, app, theme, chunks[0]);
    draw_input(f, app, theme, Field::Text, chunks[1]);
    draw_input(f, app, theme, Field::Delimiter, chunks[2]);
    draw_list(f, app, theme, chunks[3]);
    draw_footer(f, theme, chunks[4]);
}

fn draw_info_line(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = match app.status_message {
        Some(ref status) if status.starts_with("Error") => {
            Line::from(Span::styled(status.as_str(), Style::default().fg(theme.danger)))
        }
        Some(ref status) => Line::from(Span::styled(status.as_str(), Style::default().fg(theme.accent))),
        None => Line::from(Span::styled("Ready", Style::default().fg(theme.text_dim))),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_input(f: &mut Frame, app: &App, theme: &Theme, field: Field, area: Rect) {
    let is_active = app.field == field;
    let border_color = if is_active { theme.accent } else { theme.inactive };
    let title_style = if is_active {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.inactive)
    };

    let (title, value, placeholder) = match field {
        Field::Text => (" Text ", app.props.text.as_str(), ""),
        Field::Delimiter => (" Delimiter ", app.delimiter_input(), "(default ,)"),
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = if value.is_empty() && !is_active {
        vec![Span::styled(placeholder, Style::default().fg(theme.text_dim))]
    } else {
        vec![Span::styled(value, Style::default().fg(theme.text))]
    };
    if is_active {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }

    // Keep the end of long input visible
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = value.chars().count().saturating_add(1).saturating_sub(inner_width);

    let input = Paragraph::new(Line::from(spans))
        .block(block)
        .scroll((0, scroll.min(u16::MAX as usize) as u16));
    f.render_widget(input, area);
}

fn draw_list(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Items ", Style::default().fg(theme.header).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("{} split on \"{}\" ", app.list.len(), app.list.separator),
            Style::default().fg(theme.text_dim),
        ),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.inactive));

    let list = components::segment_list_in(&app.list, theme, app.config.show_index, block);
    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(f: &mut Frame, theme: &Theme, area: Rect) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, Style::default().fg(theme.accent)),
            Span::styled(label, Style::default().fg(theme.text_dim)),
        ]
    };

    let spans: Vec<Span> = [
        hint("Tab", " field  "),
        hint("↑/↓", " select  "),
        hint("^U", " clear  "),
        hint("^S", " save delimiter  "),
        hint("Esc", " quit"),
    ]
    .into_iter()
    .flatten()
    .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::render::Props;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 14)).unwrap();
        terminal.draw(|f| draw(f, app, &Theme::default())).unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_inputs_and_items() {
        let app = App::new(Props::new("red,green,blue"), AppConfig::default(), None);
        let out = screen(&app);

        assert!(out.contains("red,green,blue"));
        assert!(out.contains("(default ,)"));
        assert!(out.contains("3 split on \",\""));
        assert!(out.contains("› red"));
        assert!(out.contains("  green"));
    }

    #[test]
    fn test_status_message_replaces_ready() {
        let mut app = App::new(Props::new(""), AppConfig::default(), None);
        assert!(screen(&app).contains("Ready"));
        app.set_status("Default delimiter saved");
        let out = screen(&app);
        assert!(out.contains("Default delimiter saved"));
        assert!(!out.contains("Ready"));
    }
}
