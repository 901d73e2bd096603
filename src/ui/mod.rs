use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Terminal,
};
use std::io;
use std::time::Duration;

use crate::frame::Frame;

pub struct App {
    pub frame: Frame,
    pub source: String,
    pub scroll: u16,
}

impl App {
    pub fn new(frame: Frame, source: String) -> Self {
        Self {
            frame,
            source,
            scroll: 0,
        }
    }

    fn scroll_down(&mut self, lines: u16) {
        let max = self.frame.height().saturating_sub(1) as u16;
        self.scroll = (self.scroll + lines).min(max);
    }

    fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

pub fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    // Clear the terminal once at the start
    terminal.clear()?;

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        return Ok(());
                    }
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                    KeyCode::PageUp => app.scroll_up(10),
                    KeyCode::PageDown => app.scroll_down(10),
                    _ => {}
                }
            }
        }
    }
}

fn ui(f: &mut ratatui::Frame, app: &App) {
    // Clear the entire area first
    f.render_widget(Clear, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(0),    // ASCII art
        ])
        .split(f.area());

    let title_spans = vec![
        Span::styled(
            "picascii",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} ({}x{})",
                app.source,
                app.frame.width(),
                app.frame.height()
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            "  q to quit, j/k to scroll",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let title = Paragraph::new(Line::from(title_spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(title, chunks[0]);

    // One styled span per cell, one line per frame row
    let mut lines = Vec::with_capacity(app.frame.rows.len());
    for row in &app.frame.rows {
        let spans: Vec<Span> = row
            .iter()
            .map(|cell| {
                let (r, g, b) = cell.rgb;
                Span::styled(cell.ch.to_string(), Style::default().fg(Color::Rgb(r, g, b)))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let art = Paragraph::new(lines).scroll((app.scroll, 0));
    f.render_widget(art, chunks[1]);
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Cell;

    fn app_with_height(height: usize) -> App {
        let cell = Cell {
            ch: '@',
            rgb: (1, 2, 3),
        };
        let frame = Frame {
            width: 2,
            rows: vec![vec![cell; 2]; height],
        };
        App::new(frame, "test.png".to_string())
    }

    #[test]
    fn test_scroll_clamps_to_frame() {
        let mut app = app_with_height(5);

        app.scroll_up(3);
        assert_eq!(app.scroll, 0);

        app.scroll_down(2);
        assert_eq!(app.scroll, 2);

        // Cannot scroll past the last row
        app.scroll_down(100);
        assert_eq!(app.scroll, 4);

        app.scroll_up(1);
        assert_eq!(app.scroll, 3);
    }

    #[test]
    fn test_scroll_on_single_row_frame() {
        let mut app = app_with_height(1);
        app.scroll_down(10);
        assert_eq!(app.scroll, 0);
    }
}
