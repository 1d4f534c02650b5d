//! Ratatui widgets for rendered lists

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem},
};

use crate::render::SegmentList;
use crate::theme::Theme;

/// One `ListItem` per display node, in list order
pub fn segment_list<'a>(list: &'a SegmentList, theme: &Theme, show_index: bool) -> List<'a> {
    let width = list.len().saturating_sub(1).to_string().len();

    let items: Vec<ListItem> = list
        .iter()
        .map(|node| {
            let mut spans = Vec::with_capacity(2);
            if show_index {
                spans.push(Span::styled(
                    format!("{:>width$} ", node.index(), width = width),
                    Style::default().fg(theme.text_dim),
                ));
            }
            spans.push(Span::styled(node.content.as_str(), Style::default().fg(theme.text)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme.bg_selected)
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
}

/// Same list wrapped in a block
pub fn segment_list_in<'a>(
    list: &'a SegmentList,
    theme: &Theme,
    show_index: bool,
    block: Block<'a>,
) -> List<'a> {
    segment_list(list, theme, show_index).block(block)
}
