use artbox::{
    integrations::ratatui::ArtBox, fonts, Alignment as ArtAlignment, Color as ArtColor, Fill,
    LinearGradient, Renderer,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::backdrop::Rgb;
use crate::state::{CurrentWeather, TempUnit};

/// Location name, big temperature and description
pub struct CurrentConditions;

pub struct CurrentConditionsProps<'a> {
    pub weather: &'a CurrentWeather,
    pub unit: TempUnit,
    /// Bottom backdrop color; the temperature gradient fades towards it
    pub accent: Rgb,
}

/// Name, at least one temperature row, description.
pub const MIN_HEIGHT: u16 = 3;
const TEMP_MAX_ROWS: u16 = 6;

fn temperature_fill(accent: Rgb) -> Fill {
    let white = ArtColor::rgb(255, 255, 255);
    let tint = white.interpolate(ArtColor::rgb(accent.0, accent.1, accent.2), 0.35);
    Fill::Linear(LinearGradient::horizontal(white, tint))
}

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1),          // Location name
            Constraint::Max(TEMP_MAX_ROWS), // Temperature (FIGlet)
            Constraint::Length(1),          // Description
        ])
        .split(area);

        let name = Line::from(vec![Span::styled(
            props.weather.location_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(name), chunks[0]);

        let temp_text = format!(
            "{}{}",
            props.unit.format(props.weather.temperature_celsius),
            props.unit.suffix()
        );
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_fill(props.accent));
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[1]);

        let desc = Line::from(vec![Span::styled(
            props.weather.condition_description.clone(),
            Style::default().fg(Color::Rgb(235, 235, 235)),
        )])
        .centered();
        frame.render_widget(Paragraph::new(desc), chunks[2]);
    }
}
