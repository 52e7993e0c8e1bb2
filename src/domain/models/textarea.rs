use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn new(title: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        TextArea::set_focus(&mut textarea, title, false);

        return textarea;
    }

    pub fn with_text(title: &str, text: &str) -> tui_textarea::TextArea<'a> {
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();
        let mut textarea = tui_textarea::TextArea::new(lines);
        TextArea::set_focus(&mut textarea, title, false);

        return textarea;
    }

    pub fn text(textarea: &tui_textarea::TextArea<'a>) -> String {
        return textarea.lines().join("\n");
    }

    pub fn set_focus(textarea: &mut tui_textarea::TextArea<'a>, title: &str, focused: bool) {
        let mut border_style = Style::default();
        let mut cursor_style = Style::default();
        if focused {
            border_style = border_style.fg(Color::Yellow);
            cursor_style = cursor_style.bg(Color::White);
        }

        textarea.set_cursor_style(cursor_style);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(border_style)
                .title(title.to_string())
                .padding(Padding::new(1, 1, 0, 0)),
        );
    }
}
