//! Interactive converter form using ratatui
//!
//! A full-screen form with a temperature field, two scale selectors and
//! Convert / Reset buttons. The form's state lives in [`FormState`]; key
//! handling is a pure function of that state so it can be exercised without
//! a terminal.

use std::io::{stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::converter::{convert_display, Scale};

/// Default source scale after a reset
pub const DEFAULT_FROM: Scale = Scale::Celsius;
/// Default target scale after a reset
pub const DEFAULT_TO: Scale = Scale::Fahrenheit;

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Value,
    From,
    To,
    Convert,
    Reset,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Value,
        FormField::From,
        FormField::To,
        FormField::Convert,
        FormField::Reset,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> FormField {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Transient state of the converter form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Raw text of the temperature field
    pub input: String,
    pub from: Scale,
    pub to: Scale,
    /// Last displayed result or validation message
    pub result: Option<String>,
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            input: String::new(),
            from: DEFAULT_FROM,
            to: DEFAULT_TO,
            result: None,
            focus: FormField::Value,
        }
    }
}

impl FormState {
    /// Create a form pre-filled with the given input and scales
    pub fn new(input: impl Into<String>, from: Scale, to: Scale) -> Self {
        Self {
            input: input.into(),
            from,
            to,
            ..Default::default()
        }
    }

    /// Convert the current input and store the formatted result or validation message
    pub fn submit(&mut self) {
        self.result = Some(convert_display(&self.input, self.from, self.to));
    }

    /// Clear the input and result, and restore the default scales
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Stay,
    Quit,
}

/// Characters accepted by the temperature field
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

fn scale_shortcut(c: char) -> Option<Scale> {
    match c.to_ascii_lowercase() {
        'c' => Some(Scale::Celsius),
        'f' => Some(Scale::Fahrenheit),
        'k' => Some(Scale::Kelvin),
        _ => None,
    }
}

/// Apply a key press to the form state
pub fn handle_key(state: &mut FormState, key: KeyEvent) -> FormAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return FormAction::Quit,
            KeyCode::Char('r') => {
                state.reset();
                return FormAction::Stay;
            }
            _ => return FormAction::Stay,
        }
    }

    match key.code {
        KeyCode::Esc => return FormAction::Quit,
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            return FormAction::Stay;
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            return FormAction::Stay;
        }
        _ => {}
    }

    match state.focus {
        FormField::Value => match key.code {
            KeyCode::Enter => state.submit(),
            KeyCode::Backspace => {
                state.input.pop();
            }
            KeyCode::Char(c) if is_numeric_char(c) => state.input.push(c),
            _ => {}
        },
        FormField::From | FormField::To if key.code == KeyCode::Enter => state.submit(),
        FormField::From | FormField::To => {
            let scale = if state.focus == FormField::From {
                &mut state.from
            } else {
                &mut state.to
            };
            match key.code {
                KeyCode::Left => *scale = scale.prev(),
                KeyCode::Right | KeyCode::Char(' ') => *scale = scale.next(),
                KeyCode::Char(c) => {
                    if let Some(s) = scale_shortcut(c) {
                        *scale = s;
                    }
                }
                _ => {}
            }
        }
        FormField::Convert => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.submit();
            }
        }
        FormField::Reset => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.reset();
            }
        }
    }

    FormAction::Stay
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    cleanup_on_err(stdout().execute(EnterAlternateScreen), teardown_terminal)
        .context("Failed to enter alternate screen")?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = cleanup_on_err(Terminal::new(backend), teardown_terminal)
        .context("Failed to create terminal")?;
    Ok(terminal)
}

/// Run `cleanup` if `result` is an error, then pass the result through
fn cleanup_on_err<T, E>(result: Result<T, E>, cleanup: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        cleanup();
    }
    result
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

/// Run the interactive form until the user quits
pub fn run_form(state: FormState) -> Result<FormState> {
    let mut terminal = setup_terminal()?;
    let result = run_form_loop(&mut terminal, state);
    teardown_terminal();
    result
}

fn run_form_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut state: FormState,
) -> Result<FormState> {
    loop {
        terminal.draw(|frame| draw_form(frame, &state))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not release
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(&mut state, key) == FormAction::Quit {
                return Ok(state);
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).bold())
}

fn draw_form(frame: &mut Frame, state: &FormState) {
    let area = frame.area();

    let form_width = 60u16;
    let form_height = 24u16;
    let x = area.width.saturating_sub(form_width) / 2;
    let y = area.height.saturating_sub(form_height) / 2;
    let form_area = Rect::new(
        x,
        y,
        form_width.min(area.width),
        form_height.min(area.height),
    );

    frame.render_widget(Clear, form_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Thermo-phi ")
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = outer_block.inner(form_area);
    frame.render_widget(outer_block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + description
            Constraint::Length(3), // Temperature
            Constraint::Length(3), // From
            Constraint::Length(3), // To
            Constraint::Length(3), // Buttons
            Constraint::Length(3), // Result
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("🌡  ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "Temperature Converter",
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(Span::styled(
            "Convert between Celsius, Fahrenheit, and Kelvin with precision",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    // Temperature field
    let value_focused = state.focus == FormField::Value;
    let cursor = if value_focused { "▌" } else { "" };
    let value_line = if state.input.is_empty() {
        Line::from(vec![
            Span::styled("Enter temperature", Style::default().fg(Color::DarkGray)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::styled(state.input.as_str(), Style::default().fg(Color::White)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };
    frame.render_widget(
        Paragraph::new(value_line).block(field_block("Temperature", value_focused)),
        chunks[1],
    );

    draw_scale_selector(
        frame,
        chunks[2],
        "From Unit",
        state.from,
        state.focus == FormField::From,
    );
    draw_scale_selector(
        frame,
        chunks[3],
        "To Unit",
        state.to,
        state.focus == FormField::To,
    );

    // Buttons
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[4]);
    draw_button(
        frame,
        button_chunks[0],
        "Convert",
        state.focus == FormField::Convert,
        Color::Green,
    );
    draw_button(
        frame,
        button_chunks[1],
        "Reset",
        state.focus == FormField::Reset,
        Color::Yellow,
    );

    // Result panel is only shown once something has been converted
    if let Some(result) = &state.result {
        let result_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let result_para = Paragraph::new(Line::from(Span::styled(
            result.as_str(),
            Style::default().fg(Color::Green).bold(),
        )))
        .alignment(Alignment::Center)
        .block(result_block);
        frame.render_widget(result_para, chunks[5]);
    }

    let help_text = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" next  ", Style::default().fg(Color::DarkGray)),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::styled(" scale  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" convert  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Ctrl+R", Style::default().fg(Color::Cyan)),
        Span::styled(" reset  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(help_text).alignment(Alignment::Center),
        chunks[7],
    );
}

fn draw_scale_selector(frame: &mut Frame, area: Rect, title: &str, scale: Scale, focused: bool) {
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(scale.label(), Style::default().fg(Color::White).bold()),
        Span::styled(" ▶", arrow_style),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(field_block(title, focused)),
        area,
    );
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, color: Color) {
    let style = if focused {
        Style::default().fg(Color::Black).bg(color).bold()
    } else {
        Style::default().fg(color)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
