//! Interactive TUI exercise carousel.
//!
//! A ratatui track of exercise cards with the active card centered. Selecting
//! the active card opens the hero view: the overlay is painted over the
//! card's rectangle first, then grows to the enlarged two-column layout.
//!
//! Keybindings: Left/Right (h/l) move, 1-9 pick a card, Enter expands the
//! active card, Esc closes the hero or quits, q quits.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use tracing::debug;

use aura_core::carousel::hero::{HeroExpander, HeroPhase};
use aura_core::carousel::{CardState, Carousel, Selection};
use aura_types::layout::{GridColumns, Rect as LayoutRect};
use aura_types::session::Page;

use crate::state::AppState;

use super::auth;
use super::status::today;

/// Terminal columns one card occupies on the track.
const CARD_CELLS: u16 = 26;
/// Terminal rows one card occupies on the track.
const CARD_ROWS: u16 = 12;

const POLL_IDLE: Duration = Duration::from_millis(100);
const POLL_ANIMATING: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

struct BrowserState {
    carousel: Carousel,
    hero: HeroExpander,
    /// How long the hero takes to grow after the snapshot paint.
    open_duration: Duration,
    /// When the expanded layout was applied.
    expanded_at: Option<Instant>,
    /// Track area from the last draw.
    track: Rect,
    quit: bool,
}

impl BrowserState {
    fn new(carousel: Carousel, animation: Duration) -> Self {
        Self {
            carousel,
            hero: HeroExpander::new(animation),
            open_duration: animation,
            expanded_at: None,
            track: Rect::default(),
            quit: false,
        }
    }

    /// Terminal columns per configured card-width unit.
    fn scale(&self) -> f64 {
        let width = self.carousel.card_width();
        if width > 0.0 {
            f64::from(CARD_CELLS) / width
        } else {
            1.0
        }
    }

    /// Left edge of card `i`, in terminal columns. May be off screen.
    fn card_left(&self, i: usize) -> i32 {
        let scale = self.scale();
        let container = f64::from(self.track.width) / scale;
        let offset = self.carousel.offset(container) * scale;
        i32::from(self.track.x) + (offset + i as f64 * f64::from(CARD_CELLS)).round() as i32
    }

    /// Unclipped rectangle of card `i` on the track.
    fn card_rect(&self, i: usize) -> LayoutRect {
        let height = CARD_ROWS.min(self.track.height);
        let top = self.track.y + (self.track.height - height) / 2;
        LayoutRect::new(
            f64::from(self.card_left(i)),
            f64::from(top),
            f64::from(CARD_CELLS),
            f64::from(height),
        )
    }

    fn select(&mut self, i: usize) {
        match self.carousel.select(i) {
            Selection::Expand(i) => {
                let rect = self.card_rect(i);
                self.hero.open(&self.carousel.cards()[i], rect);
                self.expanded_at = None;
                debug!(card = i, "hero opened");
            }
            Selection::Moved(i) => debug!(card = i, "carousel moved"),
            Selection::Ignored => {}
        }
    }

    /// Called after each paint: schedules the expanded layout and clears
    /// the hero once its close animation is over.
    fn after_paint(&mut self, now: Instant) {
        if self.hero.next_frame().is_some() {
            self.expanded_at = Some(now);
        }
        if self.hero.tick(now) {
            self.expanded_at = None;
            debug!("hero overrides cleared");
        }
    }

    /// Progress through the current hero animation.
    fn hero_progress(&self, now: Instant) -> f64 {
        match self.hero.phase() {
            HeroPhase::Expanded => match self.expanded_at {
                Some(start) if !self.open_duration.is_zero() => {
                    let elapsed = now.saturating_duration_since(start).as_secs_f64();
                    (elapsed / self.open_duration.as_secs_f64()).min(1.0)
                }
                _ => 1.0,
            },
            HeroPhase::Closing { .. } => self.hero.close_progress(now).unwrap_or(1.0),
            _ => 0.0,
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        match self.hero.phase() {
            HeroPhase::Snapshot | HeroPhase::Closing { .. } => true,
            HeroPhase::Expanded => self.hero_progress(now) < 1.0,
            HeroPhase::Hidden => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Show the workouts page.
pub async fn run_browser(state: &AppState, json: bool) -> Result<()> {
    if !auth::enter(state, Page::Workouts, json).await {
        return Ok(());
    }

    let Some(carousel) = state.carousel() else {
        debug!("no exercise cards, carousel disabled");
        return Ok(());
    };

    if json {
        let result = serde_json::json!({
            "index": carousel.index(),
            "card_width": carousel.card_width(),
            "cards": carousel.cards(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let animation = Duration::from_millis(state.config.carousel.hero_close_ms);
    let mut browser = BrowserState::new(carousel, animation);

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(&mut terminal, &mut browser);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

// ---------------------------------------------------------------------------
// TUI loop
// ---------------------------------------------------------------------------

fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BrowserState,
) -> Result<()> {
    let date = today();
    loop {
        terminal.draw(|frame| draw(frame, state, &date))?;
        let now = Instant::now();
        state.after_paint(now);

        if state.quit {
            break;
        }

        let timeout = if state.is_animating(now) {
            POLL_ANIMATING
        } else {
            POLL_IDLE
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(key.code, state, Instant::now());
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Key handling
// ---------------------------------------------------------------------------

fn handle_key(code: KeyCode, state: &mut BrowserState, now: Instant) {
    if state.hero.is_overlay_active() {
        match code {
            KeyCode::Char('q') => state.quit = true,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => state.hero.close(now),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Left | KeyCode::Char('h') => {
            state.carousel.previous();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.carousel.next();
        }
        KeyCode::Enter | KeyCode::Char(' ') => state.select(state.carousel.index()),
        KeyCode::Char(c @ '1'..='9') => state.select(c as usize - '1' as usize),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &mut BrowserState, date: &str) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // track
            Constraint::Length(3), // footer
        ])
        .split(area);

    state.track = main_layout[1];

    draw_header(frame, main_layout[0], state, date);
    draw_track(frame, main_layout[1], state);
    draw_footer(frame, main_layout[2], state);
    draw_hero(frame, area, state);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &BrowserState, date: &str) {
    let title = format!(
        " Workouts  |  {}  |  {} / {} ",
        date,
        state.carousel.index() + 1,
        state.carousel.len()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, area);
}

fn draw_track(frame: &mut Frame, area: Rect, state: &BrowserState) {
    for (i, card_state) in state.carousel.card_states().into_iter().enumerate() {
        let cell = to_cells(&state.card_rect(i), area);
        if cell.width < 4 || cell.height < 3 {
            continue;
        }

        let card = &state.carousel.cards()[i];
        let (border_color, title_style) = match card_state {
            CardState::Active => (Color::Cyan, Style::default().fg(Color::White).bold()),
            CardState::Inactive => (Color::DarkGray, Style::default().fg(Color::Gray)),
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::raw(card.icon.as_str())).centered(),
            Line::from(""),
            Line::from(Span::styled(card.title.as_str(), title_style)).centered(),
            Line::from(Span::styled(
                card.badge.as_str(),
                Style::default().fg(Color::Yellow),
            ))
            .centered(),
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", i + 1))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(widget, cell);
    }
}

fn draw_hero(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let now = Instant::now();
    let viewport = LayoutRect::new(
        f64::from(area.x),
        f64::from(area.y),
        f64::from(area.width),
        f64::from(area.height),
    );
    let Some(rect) = state.hero.frame_at(state.hero_progress(now), &viewport) else {
        return;
    };
    let Some(content) = state.hero.content() else {
        return;
    };

    let cell = to_cells(&rect, area);
    if cell.width < 4 || cell.height < 3 {
        return;
    }

    let block = Block::default()
        .title(format!(" {} ", content.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(cell);
    frame.render_widget(Clear, cell);
    frame.render_widget(block, cell);

    let columns = match (state.hero.is_overlay_active(), state.hero.style()) {
        (true, Some(style)) => style.columns,
        _ => GridColumns::Single,
    };

    let visual = vec![
        Line::from(""),
        Line::from(Span::raw(content.visual.as_str())).centered(),
        Line::from(""),
        Line::from(Span::styled(
            content.title.as_str(),
            Style::default().fg(Color::White).bold(),
        ))
        .centered(),
    ];

    match columns {
        GridColumns::Single => {
            frame.render_widget(Paragraph::new(visual), inner);
        }
        GridColumns::Split { left, right } => {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(left.round() as u16),
                    Constraint::Percentage(right.round() as u16),
                ])
                .split(inner);

            frame.render_widget(Paragraph::new(visual), split[0]);

            let detail = vec![
                Line::from(""),
                Line::from(Span::styled(
                    content.badge.as_str(),
                    Style::default().fg(Color::Yellow).bold(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    content.summary.as_str(),
                    Style::default().fg(Color::White),
                )),
            ];
            let detail = Paragraph::new(detail).wrap(Wrap { trim: true });
            frame.render_widget(detail, split[1]);
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let help = if state.hero.is_overlay_active() {
        " Esc/Enter close | q quit "
    } else {
        " Left/Right move | 1-9 pick | Enter expand | q/Esc quit "
    };

    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(footer, area);
}

/// Round `rect` to terminal cells and clip it to `bounds`.
fn to_cells(rect: &LayoutRect, bounds: Rect) -> Rect {
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.right());
    let min_y = i32::from(bounds.y);
    let max_y = i32::from(bounds.bottom());

    let left = (rect.left.round() as i32).clamp(min_x, max_x);
    let top = (rect.top.round() as i32).clamp(min_y, max_y);
    let right = ((rect.left + rect.width).round() as i32).clamp(left, max_x);
    let bottom = ((rect.top + rect.height).round() as i32).clamp(top, max_y);

    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::carousel::catalog::default_catalog;

    fn browser() -> BrowserState {
        let carousel = Carousel::new(default_catalog(), 340.0).unwrap();
        let mut state = BrowserState::new(carousel, Duration::from_millis(500));
        state.track = Rect::new(0, 3, 100, 20);
        state
    }

    #[test]
    fn test_active_card_is_centered() {
        let mut state = browser();
        assert_eq!(state.card_left(0), 37);

        handle_key(KeyCode::Right, &mut state, Instant::now());
        handle_key(KeyCode::Right, &mut state, Instant::now());
        assert_eq!(state.carousel.index(), 2);
        assert_eq!(state.card_left(2), 37);
        assert_eq!(state.card_left(0), 37 - 2 * i32::from(CARD_CELLS));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = browser();
        handle_key(KeyCode::Left, &mut state, Instant::now());
        assert_eq!(state.carousel.index(), 0);

        for _ in 0..20 {
            handle_key(KeyCode::Char('l'), &mut state, Instant::now());
        }
        assert_eq!(state.carousel.index(), state.carousel.len() - 1);
    }

    #[test]
    fn test_digit_moves_then_expands() {
        let mut state = browser();
        handle_key(KeyCode::Char('3'), &mut state, Instant::now());
        assert_eq!(state.carousel.index(), 2);
        assert_eq!(state.hero.phase(), HeroPhase::Hidden);

        handle_key(KeyCode::Char('3'), &mut state, Instant::now());
        assert_eq!(state.hero.phase(), HeroPhase::Snapshot);
        assert_eq!(state.hero.origin(), Some(state.card_rect(2)));
    }

    #[test]
    fn test_enter_opens_then_paint_expands() {
        let mut state = browser();
        handle_key(KeyCode::Enter, &mut state, Instant::now());
        assert_eq!(state.hero.phase(), HeroPhase::Snapshot);
        assert!(state.is_animating(Instant::now()));

        let painted = Instant::now();
        state.after_paint(painted);
        assert_eq!(state.hero.phase(), HeroPhase::Expanded);
        assert_eq!(state.hero_progress(painted), 0.0);
        assert_eq!(state.hero_progress(painted + Duration::from_millis(250)), 0.5);
        assert!(!state.is_animating(painted + Duration::from_secs(1)));
    }

    #[test]
    fn test_escape_closes_hero_before_quitting() {
        let mut state = browser();
        handle_key(KeyCode::Enter, &mut state, Instant::now());
        let now = Instant::now();
        state.after_paint(now);

        handle_key(KeyCode::Esc, &mut state, now);
        assert!(matches!(state.hero.phase(), HeroPhase::Closing { .. }));
        assert!(!state.quit);

        state.after_paint(now + Duration::from_millis(500));
        assert_eq!(state.hero.phase(), HeroPhase::Hidden);
        assert!(state.hero.style().is_none());

        handle_key(KeyCode::Esc, &mut state, now);
        assert!(state.quit);
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let carousel = Carousel::new(default_catalog().into_iter().take(2).collect(), 340.0).unwrap();
        let mut state = BrowserState::new(carousel, Duration::from_millis(500));
        state.track = Rect::new(0, 0, 80, 20);
        handle_key(KeyCode::Char('9'), &mut state, Instant::now());
        assert_eq!(state.carousel.index(), 0);
        assert_eq!(state.hero.phase(), HeroPhase::Hidden);
    }

    #[test]
    fn test_to_cells_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 80, 20);
        let cell = to_cells(&LayoutRect::new(-10.0, 2.0, 26.0, 12.0), bounds);
        assert_eq!(cell, Rect::new(0, 2, 16, 12));

        let offscreen = to_cells(&LayoutRect::new(100.0, 2.0, 26.0, 12.0), bounds);
        assert_eq!(offscreen.width, 0);
    }
}
