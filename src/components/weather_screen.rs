use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::current_conditions::MIN_HEIGHT;
use super::forecast_strip::STRIP_HEIGHT;
use super::{
    BackdropLayer, BackdropLayerProps, Component, CurrentConditions, CurrentConditionsProps,
    ForecastStrip, ForecastStripProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Shown until the first successful fetch, whatever happened before it
pub const PLACEHOLDER: &str = "Loading...";

/// Props for WeatherScreen - read-only view of state
pub struct WeatherScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: backdrop, current conditions, forecast strip, help bar
#[derive(Default)]
pub struct WeatherScreen;

impl Component<Action> for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Left | KeyCode::Char('h') => Some(Action::UiForecastPrev),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::UiForecastNext),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherScreenProps<'_>) {
        let state = props.state;
        let backdrop = state.backdrop.current();

        BackdropLayer.render(frame, area, BackdropLayerProps { backdrop });

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        match &state.current {
            Some(weather) => {
                let body = Layout::vertical([
                    Constraint::Min(MIN_HEIGHT),      // Current conditions
                    Constraint::Length(1),            // Spacer
                    Constraint::Length(STRIP_HEIGHT), // Forecast
                ])
                .flex(Flex::Center)
                .split(chunks[0]);

                CurrentConditions.render(
                    frame,
                    body[0],
                    CurrentConditionsProps {
                        weather,
                        unit: state.unit,
                        accent: backdrop.bottom,
                    },
                );
                ForecastStrip.render(
                    frame,
                    body[2],
                    ForecastStripProps {
                        entries: &state.forecast,
                        offset: state.forecast_offset,
                        unit: state.unit,
                    },
                );
            }
            None => {
                let msg = Line::from(vec![Span::styled(
                    PLACEHOLDER,
                    Style::default().fg(Color::Rgb(210, 210, 210)),
                )])
                .centered();
                let [middle] = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .areas(chunks[0]);
                frame.render_widget(Paragraph::new(msg), middle);
            }
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("\u{2190}\u{2192}", "scroll"),
                    StatusBarHint::new("u", "units"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
