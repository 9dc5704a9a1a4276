//! Rendering of the playfield, status bar and info panel.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
    split_layout,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skyward::core::constants::{UNITS_PER_COL, UNITS_PER_ROW};
use skyward::core::physics::tilt_degrees;
use skyward::{GamePhase, Playfield, SessionView};

const CONTROLS_RUNNING: [(&str, &str); 2] = [("[Space/Click]", "Flap"), ("[Q]", "Quit")];
const CONTROLS_OVER: [(&str, &str); 2] = [("[R]", "Restart"), ("[Q]", "Quit")];

/// Logical playfield covered by the play area of a terminal this size.
pub fn playfield_for(size: Rect) -> Playfield {
    let content = split_layout(size).content;
    Playfield::new(
        content.width as f64 * UNITS_PER_COL,
        content.height as f64 * UNITS_PER_ROW,
    )
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let layout = create_game_layout(frame, area, " Skyward ", Color::Cyan);

    render_play_area(frame, layout.content, view);
    render_status(frame, layout.status_bar, view);
    render_info_panel(frame, layout.info_panel, view);

    if view.phase == GamePhase::Over {
        render_game_over_banner(
            frame,
            layout.content,
            "CRASH!",
            &format!("You passed {} pipes.", view.score),
        );
    }
}

/// Bird glyph by tilt: nose up, level, nose down.
fn bird_glyph(tilt: f64) -> &'static str {
    if tilt < -15.0 {
        "▲"
    } else if tilt > 15.0 {
        "▼"
    } else {
        "►"
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = view.config;

    let bird_col = ((view.bird.x + config.bird_width / 2.0) / UNITS_PER_COL) as usize;
    let bird_row = ((view.bird.y + config.bird_height / 2.0) / UNITS_PER_ROW) as usize;
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let tilt = tilt_degrees(view.bird.velocity, config.max_tilt_degrees);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let cell_y = (row as f64 + 0.5) * UNITS_PER_ROW;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            if row == bird_row && col == bird_col {
                spans.push(Span::styled(bird_glyph(tilt), bird_style));
                continue;
            }

            let cell_x = (col as f64 + 0.5) * UNITS_PER_COL;
            let is_pipe = view.pipes.iter().any(|pipe| {
                cell_x >= pipe.x
                    && cell_x < pipe.x + config.pipe_width
                    && (cell_y < pipe.top_height || cell_y > pipe.top_height + config.gap_size)
            });

            if is_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    match view.phase {
        GamePhase::Idle => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &CONTROLS_RUNNING,
        ),
        GamePhase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", view.score),
            Color::Green,
            &CONTROLS_RUNNING,
        ),
        GamePhase::Over => render_status_bar(
            frame,
            area,
            &format!("Game over - score {}", view.score),
            Color::Red,
            &CONTROLS_OVER,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(view.high_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(view.phase.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::raw(view.pipes.len().to_string()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
