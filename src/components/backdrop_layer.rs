use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::backdrop::Backdrop;

/// Paints a vertical gradient, one row at a time
pub struct BackdropLayer;

pub struct BackdropLayerProps {
    pub backdrop: Backdrop,
}

impl Component<Action> for BackdropLayer {
    type Props<'a> = BackdropLayerProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        for row in 0..area.height {
            let color: Color = props.backdrop.row_color(row, area.height).into();
            let line = Rect {
                x: area.x,
                y: area.y + row,
                width: area.width,
                height: 1,
            };
            frame.render_widget(Block::default().style(Style::default().bg(color)), line);
        }
    }
}
