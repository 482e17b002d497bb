use crate::cards::{Card, Rank, Suit, RANK_COUNT, SUIT_COUNT};
use crate::sim::VariantStatus;
use crate::table::{Seat, Slot, HAND_CAPACITY};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                    // header
            Constraint::Length(2 + SUIT_COUNT as u16 * 3), // deck tray
            Constraint::Length(6),                    // hands
            Constraint::Min(4),                       // contracts
            Constraint::Length(4),                    // status bar
        ])
        .split(size);

    draw_header(f, chunks[0], app);
    draw_tray(f, chunks[1], app);
    draw_hands(f, chunks[2], app);
    draw_contracts(f, chunks[3], app);
    draw_status(f, chunks[4], app);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let trump = app.table.active_trump();
    let mut trump_spans: Vec<Span> = vec![Span::raw("Trump: ")];
    for (i, &s) in Suit::ALL.iter().enumerate() {
        if i > 0 {
            trump_spans.push(Span::raw("  "));
        }
        let style = if s == trump {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM)
        };
        trump_spans.push(Span::styled(s.name(), style));
    }
    let lines = vec![
        Line::from(trump_spans),
        Line::from(format!(
            "Active hand: {}   Cursor: {}",
            app.table.active_seat().label(),
            app.cursor_card()
        )),
    ];
    let header =
        Paragraph::new(lines).block(Block::default().title("ulti-rs").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_tray(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Deck").borders(Borders::ALL);
    let tray_inner = inner(area);
    f.render_widget(block, area);

    let cell_w = (tray_inner.width / RANK_COUNT as u16).max(4);
    for (row, &suit) in Suit::ALL.iter().enumerate() {
        for (col, &rank) in Rank::ALL.iter().enumerate() {
            let card = Card::new(suit, rank);
            let cell = Rect {
                x: tray_inner.x + col as u16 * cell_w,
                y: tray_inner.y + row as u16 * 3,
                width: cell_w,
                height: 3,
            };
            if cell.right() > tray_inner.right() || cell.bottom() > tray_inner.bottom() {
                continue;
            }
            render_card_cell(f, cell, app, card);
        }
    }
}

fn render_card_cell(f: &mut Frame, area: Rect, app: &AppState, card: Card) {
    let mut block = Block::default().borders(Borders::ALL);
    if card.home_slot() == app.cursor {
        block = block.border_style(Style::default().fg(Color::Magenta));
    }
    f.render_widget(block, area);
    let content = match app.table.slot(card) {
        Slot::Home => Line::from(card.to_string()),
        Slot::Hand(seat) => Line::from(Span::styled(
            format!("{}·{}", card, seat.index() + 1),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner(area));
}

fn draw_hands(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);
    for (i, seat) in Seat::ALL.iter().enumerate() {
        let active = *seat == app.table.active_seat();
        let hand = app.table.hand(*seat);
        let title = format!("{} {}/{} [{}]", seat.label(), hand.len(), HAND_CAPACITY, i + 1);
        // Active hand is white, the rest yellow.
        let border = if active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let block = Block::default().title(title).borders(Borders::ALL).border_style(border);
        let cards = hand.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
        let para = Paragraph::new(cards).wrap(Wrap { trim: true }).block(block);
        f.render_widget(para, cols[i]);
    }
}

fn draw_contracts(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Contracts").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::with_capacity(app.sim.runs().len());
    for (i, run) in app.sim.runs().iter().enumerate() {
        let marker = if i == app.selected_run { "> " } else { "  " };
        let style = match run.status() {
            VariantStatus::Pending => Style::default().add_modifier(Modifier::DIM),
            VariantStatus::Running => Style::default().fg(Color::Cyan),
            VariantStatus::Won => Style::default().fg(Color::Green),
            VariantStatus::Lost => Style::default().fg(Color::Red),
            VariantStatus::Failed => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        };
        let mut text = format!("{marker}{} — {}", run.contract(), AppState::status_label(run.status()));
        if run.contract().is_no_trump() {
            text.push_str("  [no trump]");
        }
        if run.progression().is_some() {
            text.push_str("  (P to replay)");
        }
        lines.push(Line::from(Span::styled(text, style)));
    }
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let mut lines = vec![Line::from(
        "Space toggle • 1-3 hand • T trump • S simulate • R random • C clear • [/] select • P replay • ? help • Q quit",
    )];
    if app.sim.is_running() {
        lines.push(Line::from(Span::styled(
            "Simulating…",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(msg) = app.toast() {
        lines.push(Line::from(Span::styled(
            msg.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, status_inner);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Deal building:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Arrows: move the tray cursor"),
        Line::from("- Space / Enter: toggle card between tray and active hand"),
        Line::from("- 1 / 2 / 3: choose the active hand"),
        Line::from("- T: cycle the trump marker"),
        Line::from("- R: random 10/10/10 deal"),
        Line::from("- C: return every card to the tray"),
        Line::from(""),
        Line::from(Span::styled("Simulation:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- S: simulate all configured contracts"),
        Line::from("- [ / ]: select a contract row"),
        Line::from("- P: replay the selected winning trace"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
