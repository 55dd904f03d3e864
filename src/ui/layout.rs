use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const INSTRUCTIONS_COLLAPSED_HEIGHT: u16 = 3;
pub const INSTRUCTIONS_EXPANDED_HEIGHT: u16 = 9;
pub const TIMER_WIDTH: u16 = 8;

pub struct TopicsLayout {
    pub header_area: Rect,
    pub instructions_area: Rect,
    pub list_area: Rect,
    pub footer_area: Rect,
    pub help_area: Rect,
}

pub struct LayersLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

pub struct QuestionLayout {
    pub header_area: Rect,
    pub card_area: Rect,
    pub controls_area: Rect,
    pub help_area: Rect,
    // Sub-layout for the controls row
    pub timer_left: Rect,
    pub button_area: Rect,
    pub timer_right: Rect,
}

pub fn calculate_topics_chunks(area: Rect, instructions_expanded: bool) -> TopicsLayout {
    let instructions_height = if instructions_expanded {
        INSTRUCTIONS_EXPANDED_HEIGHT
    } else {
        INSTRUCTIONS_COLLAPSED_HEIGHT
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(instructions_height),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    TopicsLayout {
        header_area: chunks[0],
        instructions_area: chunks[1],
        list_area: chunks[2],
        footer_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_layers_chunks(area: Rect) -> LayersLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    LayersLayout {
        header_area: chunks[0],
        list_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_question_chunks(area: Rect) -> QuestionLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(TIMER_WIDTH),
            Constraint::Min(10),
            Constraint::Length(TIMER_WIDTH),
        ])
        .split(chunks[2]);

    QuestionLayout {
        header_area: chunks[0],
        card_area: chunks[1],
        controls_area: chunks[2],
        help_area: chunks[3],
        timer_left: controls[0],
        button_area: controls[1],
        timer_right: controls[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_layout_collapsed() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = calculate_topics_chunks(area, false);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.instructions_area.height, INSTRUCTIONS_COLLAPSED_HEIGHT);
        assert_eq!(layout.footer_area.height, 1);
        assert_eq!(layout.help_area.height, 3);
        // Margin 1 leaves 38 rows; the list takes what the fixed rows don't.
        assert_eq!(layout.list_area.height, 38 - 3 - 3 - 1 - 3);
    }

    #[test]
    fn test_topics_layout_expanded_shrinks_list() {
        let area = Rect::new(0, 0, 80, 40);
        let collapsed = calculate_topics_chunks(area, false);
        let expanded = calculate_topics_chunks(area, true);

        assert_eq!(expanded.instructions_area.height, INSTRUCTIONS_EXPANDED_HEIGHT);
        assert_eq!(
            collapsed.list_area.height - expanded.list_area.height,
            INSTRUCTIONS_EXPANDED_HEIGHT - INSTRUCTIONS_COLLAPSED_HEIGHT
        );
    }

    #[test]
    fn test_layers_layout() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = calculate_layers_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.list_area.height, 28 - 6);
    }

    #[test]
    fn test_question_layout() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = calculate_question_chunks(area);

        assert_eq!(layout.header_area.height, 4);
        assert_eq!(layout.controls_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.card_area.height, 28 - 10);

        // Controls row: timers flank the button symmetrically
        assert_eq!(layout.timer_left.width, TIMER_WIDTH);
        assert_eq!(layout.timer_right.width, TIMER_WIDTH);
        assert_eq!(layout.button_area.width, 98 - 2 * TIMER_WIDTH);
        assert_eq!(layout.timer_left.y, layout.button_area.y);
    }
}
