//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::time::Duration;

use super::app::App;
use super::components::{StatusBar, Toast};
use super::events::handle_key;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::constants::{DEMO_HELP, DEMO_TITLE};

/// Run the toast demo until the user quits
pub async fn run_app(config: &Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.process_signals();
        terminal.draw(|f| render_ui(f, app))?;

        // Poll with a timeout so dismiss timers show up without a key press
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app);
                }
            }
        }

        if app.should_quit {
            break;
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}

/// Render the whole screen
pub fn render_ui(f: &mut Frame, app: &App) {
    let (canvas, status_area) = LayoutManager::main_layout(f.area());

    let intro = Paragraph::new(vec![
        Line::from(DEMO_TITLE).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(DEMO_HELP).style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));
    f.render_widget(intro, centered_band(canvas, 3));

    for notification in app.visible_toasts() {
        let toast = Toast::new(&notification, &app.icons);
        let area = toast.area(canvas, app.toast_width);
        f.render_widget(toast, area);
    }

    StatusBar::render(f, status_area, app);
}

fn centered_band(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect::new(area.x, area.y + (area.height - height) / 2, area.width, height)
}
