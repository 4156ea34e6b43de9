//! The authentication screen.
//!
//! Composes the full form out of the shared components: title, email and
//! password fields, the requirement list (sign-up only), the submit button,
//! and the mode-toggle prompt. A failed attempt draws a modal error dialog
//! on top of the form.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::auth::AuthMode;
use crate::ui::components::{
    render_dialog_frame, render_input_field, render_requirement_list, render_status_indicator,
    DialogFrameConfig, InputFieldConfig, StatusIndicator, INPUT_FIELD_HEIGHT,
    REQUIREMENT_LIST_HEIGHT,
};
use crate::ui::layout::{is_terminal_too_small, LayoutContext, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crate::ui::strings::{resolve, MessageId};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Height of the bordered submit button.
const SUBMIT_BUTTON_HEIGHT: u16 = 3;

/// Render the whole authentication screen.
pub fn render_auth_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    if is_terminal_too_small(area.width, area.height) {
        render_too_small(frame, area);
        return;
    }

    let state = app.state();

    // Centered form column.
    let form_width = ctx.bounded_width(60, 30, 46);
    let form_x = area.x + (area.width.saturating_sub(form_width)) / 2;
    let mut y = area.y + ctx.form_top_padding();

    // Title
    let title = Paragraph::new(Line::from(Span::styled(
        resolve(state.mode.title()),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect::new(form_x, y, form_width, 1));
    y += 2;

    // Email field
    let email_config = InputFieldConfig::new(
        resolve(MessageId::EmailLabel),
        state.email.as_deref().unwrap_or_default(),
    )
    .focused(app.focus == Focus::Email)
    .placeholder(resolve(MessageId::EmailPlaceholder));
    render_input_field(frame, Rect::new(form_x, y, form_width, INPUT_FIELD_HEIGHT), &email_config);
    y += INPUT_FIELD_HEIGHT;

    // Password field
    let password_config = InputFieldConfig::new(
        resolve(MessageId::PasswordLabel),
        state.password.as_deref().unwrap_or_default(),
    )
    .focused(app.focus == Focus::Password)
    .password(true)
    .placeholder(resolve(MessageId::PasswordPlaceholder));
    render_input_field(
        frame,
        Rect::new(form_x, y, form_width, INPUT_FIELD_HEIGHT),
        &password_config,
    );
    y += INPUT_FIELD_HEIGHT;

    // Requirement list, sign-up only
    if state.mode == AuthMode::SignUp {
        let lines = render_requirement_list(state);
        let list = Paragraph::new(lines);
        frame.render_widget(list, Rect::new(form_x, y, form_width, REQUIREMENT_LIST_HEIGHT));
        y += REQUIREMENT_LIST_HEIGHT + 1;
    } else {
        y += 1;
    }

    // Submit button (or spinner while loading)
    render_submit(frame, Rect::new(form_x, y, form_width, SUBMIT_BUTTON_HEIGHT), app);
    y += SUBMIT_BUTTON_HEIGHT + 1;

    // Mode-toggle prompt
    let toggle_style = if app.focus == Focus::ModeToggle {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let toggle = Paragraph::new(Line::from(Span::styled(
        resolve(state.mode.toggle_prompt()),
        toggle_style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(toggle, Rect::new(form_x, y, form_width, 1));

    // Error dialog overlay
    if let Some(failure) = state.error {
        let indicator = StatusIndicator::error(
            resolve(failure.message()),
            Some(resolve(MessageId::ErrorDismissHint).to_string()),
        );
        let lines = render_status_indicator(&indicator);
        let config = DialogFrameConfig::new(
            resolve(MessageId::ErrorDialogTitle),
            lines.len() as u16 + 2,
        );
        let inner = render_dialog_frame(frame, area, &ctx, &config);
        let body = Paragraph::new(lines).alignment(Alignment::Center);
        let body_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height.saturating_sub(1),
        };
        frame.render_widget(body, body_area);
    }
}

/// Render the submit button: disabled styling when the form is invalid,
/// spinner while an attempt is in flight.
fn render_submit(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let enabled = state.is_form_valid() && !state.is_loading;
    let focused = app.focus == Focus::Submit;

    let border_color = if focused && enabled {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let line = if state.is_loading {
        let indicator = StatusIndicator::spinner(
            resolve(MessageId::AuthenticatingSpinner),
            app.spinner_frame,
        );
        render_status_indicator(&indicator).remove(0)
    } else {
        let label_style = if enabled {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        Line::from(Span::styled(
            resolve(state.mode.submit_label()),
            label_style,
        ))
    };

    let button = Paragraph::new(line).alignment(Alignment::Center).block(block);
    frame.render_widget(button, area);
}

/// Guard screen for terminals below the minimum renderable size.
fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small\nNeed at least {}x{}",
        MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
    );
    let para = Paragraph::new(message)
        .style(Style::default().fg(COLOR_DIM))
        .alignment(Alignment::Center);
    frame.render_widget(para, area);
}
