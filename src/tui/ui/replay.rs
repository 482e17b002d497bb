use crate::replay::{layout, Token, PLAY_STEP, ROUNDS_PER_ROW, SEAT_STEP};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;

// Round block geometry: three seat columns wide, three play rows tall.
const BLOCK_W: u16 = 3 * SEAT_STEP + 2;
const BLOCK_H: u16 = 3 * PLAY_STEP + 2;

pub(super) fn draw_replay(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(size);

    let Some(contract) = app.selected_contract() else {
        return;
    };
    let title = format!("Replay — {contract}");
    let block = Block::default().title(title).borders(Borders::ALL);
    let grid = inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    match app.sim.replay(contract) {
        Some(progression) => {
            let tokens = layout(progression);
            draw_round_frames(f, grid, progression.rounds().len());
            for token in &tokens {
                draw_token(f, grid, token);
            }
        }
        None => {
            let para = Paragraph::new("No winning trace for this contract.")
                .alignment(Alignment::Center);
            f.render_widget(para, grid);
        }
    }

    let hint = Paragraph::new("Columns: player, opponent A, opponent B • rows: play order • Esc back")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hint, chunks[1]);
}

fn draw_round_frames(f: &mut Frame, grid: Rect, rounds: usize) {
    for r in 0..rounds {
        let row = (r / ROUNDS_PER_ROW) as u16;
        let col = (r % ROUNDS_PER_ROW) as u16;
        let area = Rect {
            x: grid.x + col * (BLOCK_W + 1),
            y: grid.y + row * (BLOCK_H + 1),
            width: BLOCK_W,
            height: BLOCK_H,
        };
        if area.right() > grid.right() || area.bottom() > grid.bottom() {
            continue;
        }
        let block = Block::default()
            .title(format!("R{}", r + 1))
            .borders(Borders::ALL)
            .border_style(Style::default().add_modifier(Modifier::DIM));
        f.render_widget(block, area);
    }
}

fn draw_token(f: &mut Frame, grid: Rect, token: &Token) {
    let cell = Rect {
        x: grid.x + token.col * (BLOCK_W + 1) + 1 + token.dx,
        y: grid.y + token.row * (BLOCK_H + 1) + 1 + token.dy,
        width: SEAT_STEP.min(4),
        height: 1,
    };
    if cell.right() > grid.right() || cell.bottom() > grid.bottom() {
        return;
    }
    let style = match token.seat.index() {
        0 => Style::default().fg(Color::Green),
        1 => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Cyan),
    };
    let para = Paragraph::new(Span::styled(token.card.to_string(), style));
    f.render_widget(para, cell);
}
