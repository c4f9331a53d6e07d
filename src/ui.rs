//! Terminal UI for the calculator
//!
//! A single-screen form: unit toggle, body measurements, gender, target BAC,
//! and the drink list, with the estimates recomputed on every key event. The
//! session itself is immutable; each action replaces it with an updated copy.

use std::io;

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use bacalc::models::{DrinkKind, Gender, UnitSystem, BAC_LEVELS};
use bacalc::session::Session;

const SAFETY_NOTICE: &str = "This tool is for educational purposes only. Never drink and drive. \
    If you need help, call 800-662-4357 (SAMHSA's National Helpline). \
    You must be of legal drinking age to consume alcohol.";

const ESTIMATE_DISCLAIMER: &str = "This is an estimate only. Actual BAC can vary based on many \
    factors including metabolism, time since last meal, medications, and overall health.";

const TARGET_WARNING: &str = "Warning: these are estimates for total drinks. Consuming this many \
    drinks quickly is dangerous. Always drink slowly and responsibly.";

/// Form field focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
    Gender,
    Target,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Weight => Field::Height,
            Field::Height => Field::Gender,
            Field::Gender => Field::Target,
            Field::Target => Field::Weight,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Weight => Field::Target,
            Field::Height => Field::Weight,
            Field::Gender => Field::Height,
            Field::Target => Field::Gender,
        }
    }
}

pub struct App {
    pub session: Session,
    pub weight_input: String,
    pub height_input: String,
    pub focus: Field,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            weight_input: String::new(),
            height_input: String::new(),
            focus: Field::Weight,
        }
    }

    /// Push a character into the focused numeric input
    ///
    /// Invalid numerics are rejected here, before the session sees them:
    /// only digits and a single decimal point are accepted.
    pub fn type_char(&mut self, c: char) {
        let buffer = match self.focus {
            Field::Weight => &mut self.weight_input,
            Field::Height => &mut self.height_input,
            _ => return,
        };
        if c.is_ascii_digit() || (c == '.' && !buffer.contains('.')) {
            buffer.push(c);
            self.sync_session();
        }
    }

    /// Delete the last character of the focused numeric input
    pub fn delete_char(&mut self) {
        let buffer = match self.focus {
            Field::Weight => &mut self.weight_input,
            Field::Height => &mut self.height_input,
            _ => return,
        };
        buffer.pop();
        self.sync_session();
    }

    /// Re-parse both input buffers into the session
    fn sync_session(&mut self) {
        let weight = self.weight_input.parse::<f64>().ok();
        let height = self.height_input.parse::<f64>().ok();
        self.session = self
            .session
            .clone()
            .with_weight(weight)
            .with_height(height);
    }

    /// Cycle the gender selection
    pub fn cycle_gender(&mut self) {
        let next = match self.session.gender {
            None => Some(Gender::Male),
            Some(Gender::Male) => Some(Gender::Female),
            Some(Gender::Female) => Some(Gender::Male),
        };
        self.session = self.session.clone().with_gender(next);
    }

    /// Step the target BAC through the catalog
    pub fn cycle_target(&mut self, forward: bool) {
        let current = self.target_index();
        let next = if forward {
            (current + 1).min(BAC_LEVELS.len() - 1)
        } else {
            current.saturating_sub(1)
        };
        self.session = self.session.clone().with_target(BAC_LEVELS[next].bac);
    }

    fn target_index(&self) -> usize {
        BAC_LEVELS
            .iter()
            .position(|l| l.bac == self.session.target_bac)
            .unwrap_or(0)
    }

    /// Toggle unit systems and rewrite the input buffers to match
    pub fn toggle_units(&mut self) {
        let units = self.session.units.toggled();
        self.session = self.session.clone().with_units(units);
        self.weight_input = self
            .session
            .weight
            .map(|w| format!("{:.1}", w))
            .unwrap_or_default();
        self.height_input = self
            .session
            .height
            .map(|h| format!("{:.1}", h))
            .unwrap_or_default();
    }

    pub fn add_drink(&mut self, kind: DrinkKind) {
        self.session = self.session.clone().add_drink(kind);
    }

    /// Remove the most recently added drink
    pub fn remove_last_drink(&mut self) {
        let len = self.session.drinks.len();
        if len > 0 {
            self.session = self.session.clone().remove_drink(len - 1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
                KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.previous(),
                KeyCode::Backspace => app.delete_char(),
                KeyCode::Left => match app.focus {
                    Field::Gender => app.cycle_gender(),
                    Field::Target => app.cycle_target(false),
                    _ => {}
                },
                KeyCode::Right | KeyCode::Enter => match app.focus {
                    Field::Gender => app.cycle_gender(),
                    Field::Target => app.cycle_target(true),
                    _ => {}
                },
                KeyCode::Char('u') => app.toggle_units(),
                KeyCode::Char('b') => app.add_drink(DrinkKind::Beer),
                KeyCode::Char('w') => app.add_drink(DrinkKind::Wine),
                KeyCode::Char('s') => app.add_drink(DrinkKind::Shot),
                KeyCode::Char('x') | KeyCode::Delete => app.remove_last_drink(),
                KeyCode::Char(' ') if app.focus == Field::Gender => app.cycle_gender(),
                KeyCode::Char(c) => app.type_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header with unit toggle
            Constraint::Length(6),  // Input form
            Constraint::Min(5),     // Drink list
            Constraint::Length(9),  // Results
            Constraint::Length(4),  // Safety notice + key hints
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_form(f, chunks[1], app);
    render_drinks(f, chunks[2], app);
    render_results(f, chunks[3], app);
    render_footer(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Responsible Drinking Calculator",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  │  "));
    for (i, units) in [UnitSystem::Imperial, UnitSystem::Metric].iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" / "));
        }
        let style = if *units == app.session.units {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(units.display_name(), style));
    }
    spans.push(Span::styled(
        "  (u to toggle)",
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn field_line<'a>(label: String, value: String, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if focused { "> " } else { "  " };
    Line::from(vec![
        Span::styled(format!("{}{:<22}", marker, label), label_style),
        Span::raw(value),
    ])
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let target = BAC_LEVELS
        .iter()
        .find(|l| l.bac == session.target_bac)
        .map(|l| l.label())
        .unwrap_or_else(|| format!("{:.2}%", session.target_bac));

    let lines = vec![
        field_line(
            format!("Weight ({})", session.units.weight_label()),
            app.weight_input.clone(),
            app.focus == Field::Weight,
        ),
        field_line(
            format!("Height ({})", session.units.height_label()),
            app.height_input.clone(),
            app.focus == Field::Height,
        ),
        field_line(
            "Gender".to_string(),
            session
                .gender
                .map(|g| g.display_name().to_string())
                .unwrap_or_else(|| "Select Gender".to_string()),
            app.focus == Field::Gender,
        ),
        field_line("Target BAC Level".to_string(), target, app.focus == Field::Target),
    ];

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Your Info"));
    f.render_widget(form, area);
}

fn render_drinks(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .session
        .drinks
        .iter()
        .enumerate()
        .map(|(i, drink)| {
            ListItem::new(format!(
                "{:>2}. {} ({})",
                i + 1,
                drink.kind.display_name(),
                drink.kind.serving_label()
            ))
        })
        .collect();

    let title = format!(
        "Your Drinks ({}) — b: add beer, w: add wine, s: add shot, x: remove last",
        app.session.drinks.len()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let mut lines: Vec<Line> = Vec::new();

    match session.current_bac() {
        Some(bac) => {
            lines.push(Line::from(Span::styled(
                format!("Current BAC: {:.3}%", bac),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                ESTIMATE_DISCLAIMER,
                Style::default().fg(Color::DarkGray),
            )));
            if let Some(est) = session.drinks_for_target() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Estimated drinks to reach {:.2}% BAC:", session.target_bac),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!(
                    "  Beers ({}): {}   Wine ({}): {}   Shots ({}): {}",
                    DrinkKind::Beer.serving_label(),
                    est.beers,
                    DrinkKind::Wine.serving_label(),
                    est.wines,
                    DrinkKind::Shot.serving_label(),
                    est.shots,
                )));
                lines.push(Line::from(Span::styled(
                    TARGET_WARNING,
                    Style::default().fg(Color::Red),
                )));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Enter weight, height, and gender to see estimates.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Estimates"));
    f.render_widget(results, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            SAFETY_NOTICE,
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "Tab/arrows: move  │  Left/Right: change selection  │  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let footer = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
