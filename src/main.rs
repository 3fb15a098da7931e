use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use typemaster::app::{App, StatusKind};
use typemaster::config::{self, Config};
use typemaster::event::{AppEvent, EventHandler};
use typemaster::generator::PassageSource;
use typemaster::generator::passage::PassageGenerator;
use typemaster::logging;
use typemaster::store::ResultRepository;
use typemaster::store::json_store::JsonStore;
use typemaster::store::memory::MemoryStore;
use typemaster::ui::components::chart::WpmChart;
use typemaster::ui::components::dashboard::Dashboard;
use typemaster::ui::components::duration_prompt::DurationPrompt;
use typemaster::ui::components::personal_best::PersonalBest;
use typemaster::ui::components::stats_bar::StatsBar;
use typemaster::ui::components::typing_area::TypingArea;
use typemaster::ui::layout::{AppLayout, centered_rect, pack_hint_lines};

type TuiApp = App<PassageGenerator, Box<dyn ResultRepository>>;

#[derive(Parser)]
#[command(name = "typemaster", version, about = "Timed typing speed test with progress history")]
struct Cli {
    #[arg(short, long, value_parser = config::parse_duration, help = "Test duration in seconds")]
    duration: Option<u32>,

    #[arg(long, help = "Directory for result history and logs")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Log level or filter directive (overridden by RUST_LOG)")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_result = Config::load();
    let mut config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    if let Some(secs) = cli.duration {
        config.duration_secs = secs;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    let data_dir = config.data_path();
    // Without a log file the app still runs, just silently.
    let _ = logging::init_logging(&logging::log_path(&data_dir), &config.log_level);
    if let Err(err) = &config_result {
        tracing::warn!(path = %Config::config_path().display(), error = %err, "config unreadable, using defaults");
    }

    let repo: Box<dyn ResultRepository> = match JsonStore::with_base_dir(&data_dir) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(path = %data_dir.display(), error = %err, "data directory unavailable, results kept in memory only");
            Box::new(MemoryStore::new())
        }
    };

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app =
        App::new(PassageGenerator::new(), repo, config).with_config_path(Config::config_path());
    tracing::info!(duration_secs = app.session.duration_secs(), history = app.history().len(), "typemaster started");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "exiting after error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Paste(text) => {
                if app.duration_prompt.is_none() {
                    app.paste(&text, Instant::now());
                }
            }
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key<S: PassageSource, R: ResultRepository>(app: &mut App<S, R>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.should_quit = true;
        return;
    }

    if app.duration_prompt.is_some() {
        app.handle_prompt_key(key);
        return;
    }

    let now = Instant::now();
    match key.code {
        KeyCode::Esc => app.reset(),
        KeyCode::Tab => app.cycle_duration(),
        KeyCode::Backspace => app.backspace(now),
        KeyCode::Char('t') if ctrl => app.open_duration_prompt(),
        KeyCode::Char('g') if ctrl => app.toggle_chart(),
        KeyCode::Char('b') if ctrl => app.toggle_best(),
        KeyCode::Char(ch) if !ctrl => app.type_char(ch, now),
        _ => {}
    }
}

fn render<S: PassageSource, R: ResultRepository>(frame: &mut Frame, app: &App<S, R>) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let hints = [
        "[Esc] Restart",
        "[Tab] Duration",
        "[Ctrl+T] Custom time",
        "[Ctrl+G] Chart",
        "[Ctrl+B] Best",
        "[Ctrl+Q] Quit",
    ];
    let hint_lines = pack_hint_lines(&hints, area.width as usize);
    let footer_height = hint_lines.len() as u16 + u16::from(app.status.is_some());

    let layout = AppLayout::new(area, footer_height, app.show_panels());
    let session = &app.session;

    frame.render_widget(
        StatsBar::new(
            session.phase(),
            session.time_remaining(),
            session.duration_secs(),
            session.metrics(),
            &app.theme,
        ),
        layout.header,
    );

    frame.render_widget(
        TypingArea::new(session.diff(), !app.is_finished(), &app.theme),
        layout.main,
    );

    if app.is_finished() {
        let popup = centered_rect(52, 12, layout.main);
        frame.render_widget(
            Dashboard::new(
                session.metrics(),
                session.duration_secs(),
                app.new_personal_best,
                &app.theme,
            ),
            popup,
        );
    }

    if let Some(panels) = layout.panels {
        let history = app.history();
        match (app.show_chart, app.show_best) {
            (true, true) => {
                let split = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(panels);
                frame.render_widget(WpmChart::new(history, &app.theme), split[0]);
                frame.render_widget(PersonalBest::new(history, &app.theme), split[1]);
            }
            (true, false) => frame.render_widget(WpmChart::new(history, &app.theme), panels),
            _ => frame.render_widget(PersonalBest::new(history, &app.theme), panels),
        }
    }

    let mut footer: Vec<Line> = Vec::new();
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => colors.accent,
            StatusKind::Warning => colors.warning,
        };
        footer.push(Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color),
        )));
    }
    footer.extend(
        hint_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_pending)))),
    );
    frame.render_widget(Paragraph::new(footer), layout.footer);

    if let Some(prompt) = &app.duration_prompt {
        let popup = centered_rect(44, 5, area);
        frame.render_widget(
            DurationPrompt::new(&prompt.input, prompt.error.as_deref(), &app.theme),
            popup,
        );
    }
}
