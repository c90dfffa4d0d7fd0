use std::{io, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use giftbook_core::{GiftOutcome, RemainingGifts, StoreError, Tracker};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::{info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_INPUT_LEN: usize = 32;

const BANNER: &str = r#"  ___  __  ____  ____    ____   __    __  _  _
 / __)(  )(  __)(_  _)  (  _ \ /  \  /  \( )/ )
( (_ \ )(  ) _)   )(     ) _ ((  O )(  O ))  (
 \___/(__)(__)   (__)   (____/ \__/  \__/(_)\_)"#;

const TAGLINE: &str = "Seasonal gift tracker";

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            warning: Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Remaining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Gift,
    EditCount,
    ChangeSeason,
    Remaining,
    IncrementDay,
    ResetWeek,
    Exit,
}

impl MenuOption {
    const ALL: [MenuOption; 7] = [
        MenuOption::Gift,
        MenuOption::EditCount,
        MenuOption::ChangeSeason,
        MenuOption::Remaining,
        MenuOption::IncrementDay,
        MenuOption::ResetWeek,
        MenuOption::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuOption::Gift => "Gift Given",
            MenuOption::EditCount => "Edit Count",
            MenuOption::ChangeSeason => "Change Season",
            MenuOption::Remaining => "Remaining NPCs",
            MenuOption::IncrementDay => "Increment Day",
            MenuOption::ResetWeek => "Reset Week",
            MenuOption::Exit => "Exit",
        }
    }

    fn hotkey(&self) -> char {
        match self {
            MenuOption::Gift => '1',
            MenuOption::EditCount => '2',
            MenuOption::ChangeSeason => '3',
            MenuOption::Remaining => '4',
            MenuOption::IncrementDay => '5',
            MenuOption::ResetWeek => '6',
            MenuOption::Exit => '0',
        }
    }

    fn from_hotkey(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.hotkey() == ch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptKind {
    GiftNpc,
    CountNpc,
    CountValue { npc: String },
    SeasonName,
}

#[derive(Debug, Clone)]
struct InputPrompt {
    kind: PromptKind,
    title: String,
    input: String,
    cursor: usize,
}

impl InputPrompt {
    fn new(kind: PromptKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            input: String::new(),
            cursor: 0,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.input.len() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, len) as usize;
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    fn insert(&mut self, ch: char) {
        if self.input.len() >= MAX_INPUT_LEN {
            return;
        }
        if ch.is_ascii() && !ch.is_ascii_control() {
            self.input.insert(self.cursor, ch);
            self.cursor += ch.len_utf8();
        }
    }

    fn backspace(&mut self) {
        if self.cursor > 0 && self.cursor <= self.input.len() {
            self.cursor -= 1;
            self.input.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    fn value(&self) -> String {
        self.input.trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    IncrementDay,
    ResetWeek,
}

impl Confirm {
    fn question(&self) -> &'static str {
        match self {
            Confirm::IncrementDay => "Are you sure you want to increment the day? [y/n]",
            Confirm::ResetWeek => "Are you sure you want to reset the week? [y/n]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Warning,
}

struct UiState {
    status: String,
    status_kind: StatusKind,
    should_quit: bool,
    menu_cursor: usize,
    remaining: Vec<RemainingGifts>,
    remaining_offset: usize,
    list_height: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            status_kind: StatusKind::Info,
            should_quit: false,
            menu_cursor: 0,
            remaining: Vec::new(),
            remaining_offset: 0,
            list_height: 1,
        }
    }
}

impl UiState {
    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_kind = StatusKind::Info;
    }

    fn set_warning(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_kind = StatusKind::Warning;
    }
}

/// Full-screen menu shell around a [`Tracker`].
pub struct GiftbookApp {
    tracker: Tracker,
    state: UiState,
    theme: Theme,
    screen: Screen,
    prompt: Option<InputPrompt>,
    confirm: Option<Confirm>,
}

impl GiftbookApp {
    pub fn new(tracker: Tracker) -> Self {
        let mut state = UiState::default();
        state.set_status(format!(
            "Loaded {} items and {} NPCs",
            tracker.catalog.total_items(),
            tracker.store.len()
        ));
        Self {
            tracker,
            state,
            theme: Theme::default(),
            screen: Screen::Menu,
            prompt: None,
            confirm: None,
        }
    }

    /// Replace the initial status line, e.g. with a catalog-load warning.
    pub fn set_startup_note(&mut self, note: String) {
        self.state.set_warning(note);
    }

    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.state.should_quit {
                info!("Exiting at user request");
                break;
            }

            if event::poll(TICK_RATE).context("failed to poll terminal events")? {
                if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return;
        }

        if self.confirm.is_some() {
            self.handle_confirm_key(key);
        } else if self.prompt.is_some() {
            self.handle_prompt_key(key);
        } else {
            match self.screen {
                Screen::Menu => self.handle_menu_key(key),
                Screen::Remaining => self.handle_remaining_key(key),
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.state.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.menu_cursor = (self.state.menu_cursor + 1) % MenuOption::ALL.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.menu_cursor = self
                    .state
                    .menu_cursor
                    .checked_sub(1)
                    .unwrap_or(MenuOption::ALL.len() - 1);
            }
            KeyCode::Enter => self.activate(MenuOption::ALL[self.state.menu_cursor]),
            KeyCode::Char(ch @ '0'..='9') => match MenuOption::from_hotkey(ch) {
                Some(option) => self.activate(option),
                None => self.state.set_warning("Invalid option. Please try again."),
            },
            _ => {}
        }
    }

    fn activate(&mut self, option: MenuOption) {
        match option {
            MenuOption::Gift => {
                self.prompt = Some(InputPrompt::new(PromptKind::GiftNpc, "Which NPC?"));
            }
            MenuOption::EditCount => {
                self.prompt = Some(InputPrompt::new(PromptKind::CountNpc, "Edit count for who?"));
            }
            MenuOption::ChangeSeason => {
                self.prompt = Some(InputPrompt::new(
                    PromptKind::SeasonName,
                    "Change to which season?",
                ));
            }
            MenuOption::Remaining => {
                self.state.remaining = self.tracker.remaining();
                self.state.remaining_offset = 0;
                self.screen = Screen::Remaining;
                self.state.set_status(format!(
                    "{} NPC(s) still giftable today",
                    self.state.remaining.len()
                ));
            }
            MenuOption::IncrementDay => self.confirm = Some(Confirm::IncrementDay),
            MenuOption::ResetWeek => self.confirm = Some(Confirm::ResetWeek),
            MenuOption::Exit => self.state.should_quit = true,
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.state.set_status("Cancelled.");
            }
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Left => prompt.move_cursor(-1),
            KeyCode::Right => prompt.move_cursor(1),
            KeyCode::Home => prompt.move_home(),
            KeyCode::End => prompt.move_end(),
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Delete => prompt.delete(),
            KeyCode::Char(ch) => prompt.insert(ch),
            _ => {}
        }
    }

    fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let value = prompt.value();
        match prompt.kind {
            PromptKind::GiftNpc => self.give_gift(&value),
            PromptKind::CountNpc => self.start_count_edit(&value),
            PromptKind::CountValue { npc } => self.apply_count(&npc, &value),
            PromptKind::SeasonName => self.change_season(&value),
        }
    }

    fn give_gift(&mut self, name: &str) {
        let display_name = name.to_uppercase();
        match self.tracker.record_gift(name) {
            Ok(GiftOutcome::Recorded { weekly_count }) => {
                info!(npc = %display_name, weekly_count, "Gift recorded");
                self.state.set_status(format!(
                    "Gift given to {display_name} ({weekly_count}/2 this week)."
                ));
            }
            Ok(GiftOutcome::WeeklyLimitReached) => self.state.set_warning(format!(
                "{display_name} has already received two gifts this week."
            )),
            Ok(GiftOutcome::AlreadyGiftedToday) => self
                .state
                .set_warning(format!("{display_name} has already received a gift today.")),
            Err(err @ StoreError::NotFound(_)) => {
                self.state.set_warning(format!("{err}. Please try again!"));
            }
            Err(err) => self.state.set_warning(err.to_string()),
        }
    }

    fn start_count_edit(&mut self, name: &str) {
        match self.tracker.store.get(name) {
            Some(record) => {
                let title = format!(
                    "{} has received {} gift(s) this week. Enter new count (0-2):",
                    record.name, record.weekly_count
                );
                self.prompt = Some(InputPrompt::new(
                    PromptKind::CountValue {
                        npc: record.name.clone(),
                    },
                    title,
                ));
            }
            None => self.state.set_warning(format!(
                "NPC named '{}' not found. Please try again!",
                name.to_uppercase()
            )),
        }
    }

    fn apply_count(&mut self, npc: &str, value: &str) {
        let Ok(count) = value.parse::<i64>() else {
            self.state
                .set_warning("Invalid count. Please enter a number between 0 and 2.");
            return;
        };
        match self.tracker.set_count(npc, count) {
            Ok(stored) => {
                info!(npc, count = stored, "Weekly count overwritten");
                self.state
                    .set_status(format!("Updated count for {npc} to {stored}."));
            }
            Err(StoreError::InvalidCount(_)) => self
                .state
                .set_warning("Invalid count. Please enter a number between 0 and 2."),
            Err(err) => self.state.set_warning(format!("{err}.")),
        }
    }

    fn change_season(&mut self, input: &str) {
        let change = self.tracker.change_season(input);
        let message = format!(
            "It is now a {}, of {}.",
            self.tracker.clock.weekday_name(),
            change.season
        );
        if change.recognized {
            self.state.set_status(message);
        } else {
            warn!(input, "Unrecognised season name; defaulting to Spring");
            self.state
                .set_warning(format!("{message} (Unrecognised season; using Spring.)"));
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Some(confirm) = self.confirm else {
            return;
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.confirm = None;
                match confirm {
                    Confirm::IncrementDay => {
                        let day = self.tracker.advance_day();
                        self.state.set_status(format!("It is now {day}."));
                    }
                    Confirm::ResetWeek => {
                        self.tracker.reset_week();
                        self.state.set_status("Week reset!");
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm = None;
                self.state.set_status(match confirm {
                    Confirm::IncrementDay => "Day unchanged.",
                    Confirm::ResetWeek => "Week unchanged.",
                });
            }
            _ => {}
        }
    }

    fn handle_remaining_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.screen = Screen::Menu;
                self.state.set_status("Ready");
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let total = self.remaining_line_count();
                let max_offset = total.saturating_sub(self.state.list_height);
                if self.state.remaining_offset < max_offset {
                    self.state.remaining_offset += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.remaining_offset = self.state.remaining_offset.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn remaining_line_count(&self) -> usize {
        if self.state.remaining.is_empty() {
            1
        } else {
            self.state.remaining.len() * 4
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::Menu => self.draw_menu(frame),
            Screen::Remaining => self.draw_remaining(frame),
        }
        if let Some(prompt) = &self.prompt {
            self.render_prompt(frame, prompt);
        } else if let Some(confirm) = self.confirm {
            self.render_confirm(frame, confirm);
        }
    }

    fn draw_menu(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let banner_lines: Vec<&str> = BANNER.lines().collect();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((banner_lines.len() as u16 + 2).min(area.height)),
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(4),
            ])
            .split(area);

        let mut banner_content: Vec<Line> = banner_lines
            .into_iter()
            .map(|line| {
                Line::from(Span::styled(
                    line,
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        banner_content.push(Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(self.theme.muted),
        )));
        let banner = Paragraph::new(banner_content).alignment(Alignment::Center);
        frame.render_widget(banner, layout[0]);

        let header = Paragraph::new(Line::from(Span::styled(
            format!(
                "It is currently a {}, of {}.",
                self.tracker.clock.weekday_name(),
                self.tracker.clock.season()
            ),
            Style::default().fg(self.theme.primary_fg),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(header, layout[1]);

        let menu_height = (MenuOption::ALL.len() as u16 + 2).min(layout[2].height);
        let menu_width = 28.min(layout[2].width.max(1));
        let menu_area = centered_rect(menu_width, menu_height, layout[2]);

        let menu_lines: Vec<Line> = MenuOption::ALL
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let label = format!("{}. {}", option.hotkey(), option.label());
                if idx == self.state.menu_cursor {
                    Line::from(Span::styled(
                        format!("▶ {label}"),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {label}"),
                        Style::default().fg(self.theme.primary_fg),
                    ))
                }
            })
            .collect();

        let menu = Paragraph::new(menu_lines)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .alignment(Alignment::Left);
        frame.render_widget(menu, menu_area);

        self.render_status(frame, layout[3]);
    }

    fn draw_remaining(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(4)])
            .split(area);

        self.state.list_height = layout[0].height.saturating_sub(2) as usize;

        let mut lines: Vec<Line> = Vec::new();
        if self.state.remaining.is_empty() {
            lines.push(Line::from(Span::styled(
                "Everyone has been gifted for today.",
                Style::default().fg(self.theme.muted),
            )));
        }
        for entry in &self.state.remaining {
            lines.push(Line::from(Span::styled(
                entry.name.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(preference_line("Loves", &entry.loves, &self.theme));
            lines.push(preference_line("Likes", &entry.likes, &self.theme));
            lines.push(Line::default());
        }

        let title = format!("Remaining NPCs · {}", self.tracker.clock.season());
        let list = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((self.state.remaining_offset as u16, 0));
        frame.render_widget(list, layout[0]);

        self.render_status(frame, layout[1]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status_style = match self.state.status_kind {
            StatusKind::Info => Style::default().fg(self.theme.primary_fg),
            StatusKind::Warning => Style::default().fg(self.theme.warning),
        };

        let mut context = format!(
            "{} · {} · {} items · {} NPCs",
            self.tracker.clock.weekday_name(),
            self.tracker.clock.season(),
            self.tracker.catalog.total_items(),
            self.tracker.store.len()
        );
        if let Some(loaded_at) = self.tracker.catalog.loaded_at() {
            context.push_str(&format!(
                " · catalog loaded {}",
                loaded_at.format("%H:%M UTC")
            ));
        }
        let hint = match self.screen {
            Screen::Menu => "1-6/0 select · j/k move · Enter confirm · q quit",
            Screen::Remaining => "j/k scroll · Esc back",
        };

        let status = Paragraph::new(vec![
            Line::from(Span::styled(self.state.status.clone(), status_style)),
            Line::from(vec![
                Span::styled(context, Style::default().fg(self.theme.muted)),
                Span::styled(format!("  ({hint})"), Style::default().fg(self.theme.muted)),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    fn render_prompt(&self, frame: &mut Frame, prompt: &InputPrompt) {
        let width = (prompt.title.len() as u16 + 4)
            .max(MAX_INPUT_LEN as u16 + 4)
            .min(frame.size().width);
        let area = centered_rect(width, 4, frame.size());
        frame.render_widget(Clear, area);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                prompt.title.clone(),
                Style::default().fg(self.theme.primary_fg),
            )),
            Line::from(Span::styled(
                prompt.input.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Input (Enter to confirm, Esc to cancel)"),
        );
        frame.render_widget(body, area);
        frame.set_cursor(area.x + 1 + prompt.cursor as u16, area.y + 2);
    }

    fn render_confirm(&self, frame: &mut Frame, confirm: Confirm) {
        let question = confirm.question();
        let width = (question.len() as u16 + 4).min(frame.size().width);
        let area = centered_rect(width, 3, frame.size());
        frame.render_widget(Clear, area);

        let body = Paragraph::new(Line::from(Span::styled(
            question,
            Style::default().fg(self.theme.warning),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Confirm"));
        frame.render_widget(body, area);
    }
}

fn preference_line(label: &str, items: &[String], theme: &Theme) -> Line<'static> {
    let text = if items.is_empty() {
        "(nothing this season)".to_string()
    } else {
        items.join(", ")
    };
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(theme.muted)),
        Span::styled(text, Style::default().fg(theme.primary_fg)),
    ])
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_match_the_menu_layout() {
        assert_eq!(MenuOption::from_hotkey('1'), Some(MenuOption::Gift));
        assert_eq!(MenuOption::from_hotkey('4'), Some(MenuOption::Remaining));
        assert_eq!(MenuOption::from_hotkey('0'), Some(MenuOption::Exit));
        assert_eq!(MenuOption::from_hotkey('7'), None);
    }

    #[test]
    fn prompt_editing_moves_the_cursor_sanely() {
        let mut prompt = InputPrompt::new(PromptKind::GiftNpc, "Which NPC?");
        for ch in "MIRA".chars() {
            prompt.insert(ch);
        }
        assert_eq!(prompt.value(), "MIRA");

        prompt.move_cursor(-2);
        prompt.backspace();
        assert_eq!(prompt.input, "MRA");
        prompt.delete();
        assert_eq!(prompt.input, "MA");
        prompt.move_home();
        prompt.insert('G');
        assert_eq!(prompt.input, "GMA");
        prompt.move_end();
        assert_eq!(prompt.cursor, 3);
    }

    #[test]
    fn prompt_value_is_trimmed() {
        let mut prompt = InputPrompt::new(PromptKind::SeasonName, "Change to which season?");
        for ch in "  fall ".chars() {
            prompt.insert(ch);
        }
        assert_eq!(prompt.value(), "fall");
    }
}
