use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App, clock::Clock, config::PreferenceStore, scorer::Classification, theme::Palette,
};

const HORIZONTAL_MARGIN: u16 = 5;
const SUMMARY_HEIGHT: u16 = 4;

pub fn draw<C: Clock, S: PreferenceStore>(app: &App<C, S>, f: &mut Frame) {
    f.render_widget(app, f.area());
}

fn visible(c: char) -> String {
    match c {
        ' ' => "·".to_owned(),
        c => c.to_string(),
    }
}

fn prompt_spans<C: Clock, S: PreferenceStore>(
    app: &App<C, S>,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let correct = bold.fg(palette.correct);
    let wrong = bold.fg(palette.wrong);
    let untyped = bold.fg(palette.untyped);
    let cursor_style = untyped.add_modifier(Modifier::UNDERLINED);

    let reference = app.session.reference().chars();
    let cursor = app.readout.cursor();

    let mut spans = reference
        .iter()
        .enumerate()
        .map(|(idx, &c)| match app.readout.classification(idx) {
            Classification::Correct => Span::styled(c.to_string(), correct),
            Classification::Wrong => Span::styled(visible(c), wrong),
            Classification::Untyped if cursor == Some(idx) => {
                Span::styled(c.to_string(), cursor_style)
            }
            Classification::Untyped => Span::styled(c.to_string(), untyped),
        })
        .collect::<Vec<_>>();

    // input past the end of the reference has nothing to line up with
    let overflow: String = app
        .session
        .input()
        .chars()
        .skip(reference.len())
        .map(visible)
        .collect();
    if !overflow.is_empty() {
        spans.push(Span::styled(
            overflow,
            wrong.add_modifier(Modifier::CROSSED_OUT),
        ));
    }

    spans
}

impl<C: Clock, S: PreferenceStore> Widget for &App<C, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();
        let base = Style::default().bg(palette.background).fg(palette.foreground);
        let bold_style = base.add_modifier(Modifier::BOLD);
        let accent_style = bold_style.fg(palette.accent);
        let italic_style = base.add_modifier(Modifier::ITALIC);

        Block::default().style(base).render(area, buf);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_width = self.session.reference().to_string().width()
            + self.session.input().chars().count().saturating_sub(self.session.reference().len());
        let prompt_occupied_lines = if prompt_width <= max_chars_per_line as usize {
            1
        } else {
            ((prompt_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16
        };

        let completion = self.readout.completion;
        let summary_lines = if completion.is_some() { SUMMARY_HEIGHT } else { 0 };
        let content_height = 2 + prompt_occupied_lines + 1 + summary_lines;
        let pad = area.height.saturating_sub(content_height + 1) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(pad),
                Constraint::Length(1), // live readout
                Constraint::Length(1),
                Constraint::Length(prompt_occupied_lines),
                Constraint::Length(1),
                Constraint::Length(summary_lines),
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(area);

        let readout = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} wpm", self.readout.words_per_minute), accent_style),
            Span::styled("   ", base),
            Span::styled(format!("{}% acc", self.readout.accuracy_percent), bold_style),
        ]))
        .alignment(Alignment::Center);
        readout.render(chunks[1], buf);

        let prompt = Paragraph::new(Line::from(prompt_spans(self, &palette)))
            .style(base)
            .alignment(if prompt_occupied_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true });
        prompt.render(chunks[3], buf);

        if let Some(result) = completion {
            let summary = Paragraph::new(Text::from(vec![
                Line::from(Span::styled(
                    format!("WPM: {}", result.words_per_minute),
                    bold_style,
                )),
                Line::from(Span::styled(
                    format!("Accuracy: {}%", result.accuracy_percent),
                    bold_style,
                )),
            ]))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(Line::from(" Typing Complete! ").centered())
                    .border_style(accent_style)
                    .style(base),
            );
            summary.render(chunks[5], buf);
        }

        let legend = Paragraph::new(Span::styled(
            if completion.is_some() {
                "(r)estart / (ctrl+d) dark mode / (esc)ape"
            } else {
                "(tab) restart / (ctrl+d) dark mode / (esc)ape"
            },
            italic_style,
        ));
        legend.render(chunks[7], buf);
    }
}
