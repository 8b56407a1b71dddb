use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, execute, queue, terminal, ExecutableCommand};
use log::debug;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, UiState, ViewportState};
use runpick_core::error::Result;
use runpick_core::session::{Choice, Prompt, PromptAnswer, SearchRequest};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Picker drawn on the terminal's alternate screen with crossterm.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn search(&mut self, request: &SearchRequest<'_>) -> Result<PromptAnswer> {
        let mut stdout = stdout();

        stdout.execute(EnterAlternateScreen)?;
        let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled

        enable_raw_mode()?;
        stdout.execute(EnableMouseCapture)?;

        let (width, height) = terminal::size()?;
        let mut ui_state = UiState::seeded(request.seed, ViewportState::for_terminal(width, height));
        let mut choices = request.choices(&ui_state.filter_text);

        redraw_ui(request.message, &ui_state, &choices)?;

        let mut down_row: Option<u16> = None;

        loop {
            if !event::poll(Duration::from_millis(500))? {
                continue;
            }

            let mut new_ui_state: Option<UiState> = None;
            let mut index_change_direction: Option<CycleDirection> = None;

            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if key_event.code == KeyCode::Enter && choices.is_empty() {
                        execute!(stdout, Print("\x07"))?;
                        continue;
                    }

                    let (answer, new_state, new_direction) =
                        handle_key_event(key_event, &ui_state, &choices);

                    if let Some(answer) = answer {
                        return Ok(answer);
                    }

                    new_ui_state = new_state;
                    index_change_direction = new_direction;
                }
                Event::Mouse(MouseEvent {
                    kind,
                    row,
                    modifiers,
                    ..
                }) if modifiers == KeyModifiers::NONE => match kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        down_row = Some(row);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        if let Some(index) = down_row
                            .take()
                            .and_then(|down_row| clicked_choice_index(down_row, &ui_state, choices.len()))
                        {
                            return Ok(PromptAnswer::Selected(choices[index].value.clone()));
                        }
                    }
                    MouseEventKind::ScrollDown => index_change_direction = Some(Down),
                    MouseEventKind::ScrollUp => index_change_direction = Some(Up),
                    _ => {}
                },
                Event::Resize(width, height) => {
                    new_ui_state = Some(handle_resize(width, height, &ui_state, choices.len()));
                }
                _ => {}
            }

            if let Some(direction) = index_change_direction {
                let current = new_ui_state.as_ref().unwrap_or(&ui_state);
                new_ui_state = Some(move_selected_index(current, choices.len(), direction));
            }

            if let Some(new_state) = new_ui_state {
                if new_state == ui_state {
                    continue;
                }

                if new_state.filter_text != ui_state.filter_text {
                    choices = request.choices(&new_state.filter_text);
                    debug!(
                        "Filter `{}` matches {} scripts",
                        new_state.filter_text,
                        choices.len()
                    );
                }

                ui_state = new_state;
                redraw_ui(request.message, &ui_state, &choices)?;
            }
        }
    }
}

/// Handle keyboard events in the picker
fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    choices: &[Choice],
) -> (
    Option<PromptAnswer>,
    Option<UiState>,
    Option<CycleDirection>,
) {
    match key_event.code {
        KeyCode::Up => (None, None, Some(Up)),
        KeyCode::Down => (None, None, Some(Down)),
        KeyCode::Enter => {
            let answer = choices
                .get(ui_state.selected_index)
                .map(|choice| PromptAnswer::Selected(choice.value.clone()));
            (answer, None, None)
        }
        KeyCode::Esc => (Some(PromptAnswer::Cancelled), None, None),
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            (Some(PromptAnswer::Cancelled), None, None)
        }
        KeyCode::Backspace if !ui_state.filter_text.is_empty() => {
            let mut filter_text = ui_state.filter_text.clone();
            filter_text.pop();
            (None, Some(ui_state.with_filter(filter_text)), None)
        }
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut filter_text = ui_state.filter_text.clone();
            filter_text.push(c);
            (None, Some(ui_state.with_filter(filter_text)), None)
        }
        _ => (None, None, None),
    }
}

/// Handle window resize events
fn handle_resize(width: u16, height: u16, ui_state: &UiState, choice_count: usize) -> UiState {
    let new_height = height.saturating_sub(2);
    let mut ui_state = ui_state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: ui_state.viewport.offset,
    };

    // If growing taller, try to show more items above current selection
    match new_height.cmp(&ui_state.viewport.height) {
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if ui_state.selected_index >= new_viewport.offset + new_height as usize =>
        {
            new_viewport.offset = ui_state
                .selected_index
                .saturating_sub((new_height as usize).saturating_sub(1));

            if new_viewport.offset + new_height as usize > choice_count {
                new_viewport.offset = choice_count.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}

/// Move the selected index in the given direction, wrapping at both ends
fn move_selected_index(
    ui_state: &UiState,
    choice_count: usize,
    direction: CycleDirection,
) -> UiState {
    if choice_count == 0 {
        return ui_state.clone();
    }

    let mut ui_state = ui_state.clone();
    let visible_rows = (ui_state.viewport.height as usize).max(1);

    let new_index = match direction {
        Up if ui_state.selected_index == 0 => {
            let last = choice_count - 1;
            ui_state.viewport.offset = last.saturating_sub(visible_rows - 1);
            last
        }
        Up => {
            let new_index = ui_state.selected_index - 1;
            if new_index < ui_state.viewport.offset {
                ui_state.viewport.offset = new_index;
            }
            new_index
        }
        Down => {
            let new_index = (ui_state.selected_index + 1) % choice_count;
            if new_index < ui_state.selected_index {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + visible_rows {
                ui_state.viewport.offset = new_index + 1 - visible_rows;
            }
            new_index
        }
    };

    ui_state.selected_index = new_index;
    ui_state
}

/// Index of the choice drawn on `row`, if any. Row 0 is the header.
fn clicked_choice_index(row: u16, ui_state: &UiState, choice_count: usize) -> Option<usize> {
    let list_row = row.checked_sub(1)?;
    if list_row >= ui_state.viewport.height {
        return None;
    }

    let index = list_row as usize + ui_state.viewport.offset;
    (index < choice_count).then_some(index)
}

fn redraw_ui(message: &str, ui_state: &UiState, choices: &[Choice]) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(message, ui_state, choices.len())?;

    if choices.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Red),
            Print("No matching scripts!"),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Reset)
        )?;
    } else {
        print_choices_with_selection(ui_state, choices)?;
    }

    queue!(
        stdout,
        MoveTo(0, ui_state.viewport.height + 1),
        SetAttribute(Attribute::Bold),
        Print(format!("Filter: {}", ui_state.filter_text)),
        SetAttribute(Attribute::Reset)
    )?;

    stdout.flush()?;
    Ok(())
}

/// Print the header for the picker
fn print_header(message: &str, ui_state: &UiState, choice_count: usize) -> Result<()> {
    let mut stdout = stdout();

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(header_line(message, ui_state, choice_count)),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Header text cut and padded to exactly the terminal width, so it never wraps
fn header_line(message: &str, ui_state: &UiState, choice_count: usize) -> String {
    let width = ui_state.viewport.width as usize;

    let position = if choice_count == 0 {
        0
    } else {
        ui_state.selected_index + 1
    };

    let header: String = format!(
        "  {message}   |   {}/{}   |   <esc>: Cancel",
        pad_to_width_of(position, choice_count),
        choice_count
    )
    .chars()
    .take(width)
    .collect();

    let padding = " ".repeat(width.saturating_sub(header.chars().count()));
    format!("{header}{padding}")
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Clear and write a single choice row
fn write_choice_row(
    row: u16,
    position: usize,
    choice_count: usize,
    choice: &Choice,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let content: String = format!(
        "[{}] {}",
        pad_to_width_of(position + 1, choice_count),
        choice.display_name
    )
    .chars()
    .take(terminal_width as usize)
    .collect();

    let padding = " ".repeat((terminal_width as usize).saturating_sub(content.chars().count()));

    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    }

    queue!(
        stdout,
        Print(content),
        Print(padding),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print the visible choices with the selected one highlighted
fn print_choices_with_selection(ui_state: &UiState, choices: &[Choice]) -> Result<()> {
    let viewport = &ui_state.viewport;

    let visible_choices = choices
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (row, (position, choice)) in (1u16..).zip(visible_choices) {
        write_choice_row(
            row,
            position,
            choices.len(),
            choice,
            position == ui_state.selected_index,
            viewport.width,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(values: &[&str]) -> Vec<Choice> {
        values
            .iter()
            .map(|value| Choice {
                value: (*value).to_string(),
                display_name: (*value).to_string(),
            })
            .collect()
    }

    fn state(selected_index: usize, offset: usize, height: u16, filter_text: &str) -> UiState {
        UiState {
            selected_index,
            viewport: ViewportState {
                offset,
                height,
                width: 80,
            },
            filter_text: filter_text.to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_extends_filter_and_resets_selection() {
        let ui_state = state(2, 1, 10, "t");
        let (answer, new_state, direction) =
            handle_key_event(key(KeyCode::Char('e')), &ui_state, &choices(&["test"]));

        assert!(answer.is_none());
        assert!(direction.is_none());
        assert_eq!(new_state, Some(state(0, 0, 10, "te")));
    }

    #[test]
    fn test_q_is_a_filter_character() {
        let ui_state = state(0, 0, 10, "");
        let (answer, new_state, _) =
            handle_key_event(key(KeyCode::Char('q')), &ui_state, &choices(&["test"]));

        assert!(answer.is_none());
        assert_eq!(new_state.unwrap().filter_text, "q");
    }

    #[test]
    fn test_backspace() {
        let (_, new_state, _) =
            handle_key_event(key(KeyCode::Backspace), &state(0, 0, 10, "lin"), &[]);
        assert_eq!(new_state.unwrap().filter_text, "li");

        let (answer, new_state, _) =
            handle_key_event(key(KeyCode::Backspace), &state(0, 0, 10, ""), &[]);
        assert!(answer.is_none());
        assert!(new_state.is_none());
    }

    #[test]
    fn test_enter_selects_highlighted_choice() {
        let (answer, _, _) = handle_key_event(
            key(KeyCode::Enter),
            &state(1, 0, 10, "t"),
            &choices(&["start", "test", "lint"]),
        );
        assert_eq!(answer, Some(PromptAnswer::Selected("test".to_string())));
    }

    #[test]
    fn test_enter_without_choices_does_nothing() {
        let (answer, new_state, direction) =
            handle_key_event(key(KeyCode::Enter), &state(0, 0, 10, "zzz"), &[]);
        assert!(answer.is_none());
        assert!(new_state.is_none());
        assert!(direction.is_none());
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        let ui_state = state(0, 0, 10, "");
        let (answer, _, _) = handle_key_event(key(KeyCode::Esc), &ui_state, &choices(&["a"]));
        assert_eq!(answer, Some(PromptAnswer::Cancelled));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let (answer, _, _) = handle_key_event(ctrl_c, &ui_state, &choices(&["a"]));
        assert_eq!(answer, Some(PromptAnswer::Cancelled));
    }

    #[test]
    fn test_other_control_chords_are_ignored() {
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        let (answer, new_state, direction) =
            handle_key_event(ctrl_x, &state(0, 0, 10, ""), &choices(&["a"]));
        assert!(answer.is_none());
        assert!(new_state.is_none());
        assert!(direction.is_none());
    }

    #[test]
    fn test_shifted_characters_are_typed() {
        let shift_b = KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT);
        let (_, new_state, _) = handle_key_event(shift_b, &state(0, 0, 10, ""), &[]);
        assert_eq!(new_state.unwrap().filter_text, "B");
    }

    #[test]
    fn test_arrow_keys_give_direction() {
        let ui_state = state(0, 0, 10, "");
        assert_eq!(handle_key_event(key(KeyCode::Up), &ui_state, &[]).2, Some(Up));
        assert_eq!(handle_key_event(key(KeyCode::Down), &ui_state, &[]).2, Some(Down));
    }

    #[test]
    fn test_move_down_scrolls_and_wraps() {
        // 5 choices, 2 visible rows
        let moved = move_selected_index(&state(1, 0, 2, ""), 5, Down);
        assert_eq!(moved.selected_index, 2);
        assert_eq!(moved.viewport.offset, 1);

        let wrapped = move_selected_index(&state(4, 3, 2, ""), 5, Down);
        assert_eq!(wrapped.selected_index, 0);
        assert_eq!(wrapped.viewport.offset, 0);
    }

    #[test]
    fn test_move_up_scrolls_and_wraps() {
        let moved = move_selected_index(&state(3, 3, 2, ""), 5, Up);
        assert_eq!(moved.selected_index, 2);
        assert_eq!(moved.viewport.offset, 2);

        let wrapped = move_selected_index(&state(0, 0, 2, ""), 5, Up);
        assert_eq!(wrapped.selected_index, 4);
        assert_eq!(wrapped.viewport.offset, 3);
    }

    #[test]
    fn test_move_without_choices_keeps_state() {
        let ui_state = state(0, 0, 2, "zzz");
        assert_eq!(move_selected_index(&ui_state, 0, Down), ui_state);
    }

    #[test]
    fn test_clicked_choice_index() {
        let ui_state = state(0, 2, 3, "");

        assert_eq!(clicked_choice_index(0, &ui_state, 10), None);
        assert_eq!(clicked_choice_index(1, &ui_state, 10), Some(2));
        assert_eq!(clicked_choice_index(3, &ui_state, 10), Some(4));
        // Filter line below the list
        assert_eq!(clicked_choice_index(4, &ui_state, 10), None);
        // Past the last choice
        assert_eq!(clicked_choice_index(2, &ui_state, 3), None);
    }

    #[test]
    fn test_resize_shrinking_keeps_selection_visible() {
        let resized = handle_resize(80, 5, &state(8, 0, 20, ""), 10);
        assert_eq!(resized.viewport.height, 3);
        assert_eq!(resized.viewport.offset, 6);
    }

    #[test]
    fn test_resize_growing_shows_more_above() {
        let resized = handle_resize(100, 12, &state(6, 5, 4, ""), 10);
        assert_eq!(resized.viewport.height, 10);
        assert_eq!(resized.viewport.width, 100);
        assert_eq!(resized.viewport.offset, 0);
    }

    #[test]
    fn test_header_line_fills_terminal_width() {
        let header = header_line("Select a script to run:", &state(1, 0, 10, ""), 12);

        assert_eq!(header.chars().count(), 80);
        assert!(header.starts_with("  Select a script to run:   |    2/12   |   <esc>: Cancel"));
        assert!(header.ends_with(' '));
    }

    #[test]
    fn test_header_line_is_cut_on_narrow_terminal() {
        let mut ui_state = state(0, 0, 10, "");
        ui_state.viewport.width = 20;

        let header = header_line("Select a script to run:", &ui_state, 0);

        assert_eq!(header, "  Select a script to");
    }

    #[test]
    fn test_pad_to_width_of() {
        assert_eq!(pad_to_width_of(3, 120), "  3");
        assert_eq!(pad_to_width_of(12, 12), "12");
    }
}
