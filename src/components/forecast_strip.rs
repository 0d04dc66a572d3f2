use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::forecast::weekday_label;
use crate::state::{ForecastEntry, TempUnit};

/// Horizontal row of forecast cards, scrolled by `offset`
pub struct ForecastStrip;

pub struct ForecastStripProps<'a> {
    pub entries: &'a [ForecastEntry],
    pub offset: usize,
    pub unit: TempUnit,
}

pub const CARD_WIDTH: u16 = 15;
pub const CARD_GAP: u16 = 1;
/// Border + day + icon + temperature + condition + border
pub const STRIP_HEIGHT: u16 = 6;

/// How many whole cards fit in `width` columns.
pub fn visible_cards(width: u16) -> usize {
    (width.saturating_add(CARD_GAP) / (CARD_WIDTH + CARD_GAP)) as usize
}

fn card_lines<Tz: TimeZone>(entry: &ForecastEntry, unit: TempUnit, tz: &Tz) -> Vec<Line<'static>>
where
    Tz::Offset: std::fmt::Display,
{
    let day = weekday_label(entry.timestamp, tz).unwrap_or_else(|| "-".to_string());
    vec![
        Line::from(Span::styled(day, Style::default().fg(Color::White))),
        Line::from(entry.category().emoji()),
        Line::from(Span::styled(
            unit.format(entry.temperature_celsius),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            entry.condition_main.clone(),
            Style::default().fg(Color::Rgb(225, 225, 225)),
        )),
    ]
}

impl Component<Action> for ForecastStrip {
    type Props<'a> = ForecastStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.entries.is_empty() || area.height < STRIP_HEIGHT {
            return;
        }

        let offset = props.offset.min(props.entries.len() - 1);
        let shown = &props.entries[offset..];
        let count = visible_cards(area.width).min(shown.len()).max(1);

        // Center the run of cards
        let used = count as u16 * CARD_WIDTH + (count as u16).saturating_sub(1) * CARD_GAP;
        let mut x = area.x + area.width.saturating_sub(used) / 2;

        for entry in shown.iter().take(count) {
            let width = CARD_WIDTH.min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let card = Rect {
                x,
                y: area.y,
                width,
                height: STRIP_HEIGHT,
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(200, 200, 210)));
            let body = Paragraph::new(card_lines(entry, props.unit, &Local))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(body, card);
            x += CARD_WIDTH + CARD_GAP;
        }

        // Overflow markers
        let marker = Style::default().fg(Color::White);
        if offset > 0 && area.width > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled("\u{2039}", marker)),
                Rect {
                    x: area.x,
                    y: area.y + STRIP_HEIGHT / 2,
                    width: 1,
                    height: 1,
                },
            );
        }
        if offset + count < props.entries.len() && area.width > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled("\u{203a}", marker)),
                Rect {
                    x: area.right() - 1,
                    y: area.y + STRIP_HEIGHT / 2,
                    width: 1,
                    height: 1,
                },
            );
        }
    }
}
