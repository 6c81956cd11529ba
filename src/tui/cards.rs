// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Card gallery rendering.
//!
//! Every frame rebuilds the visible cards from the active sequence, so a
//! re-render after filtering replaces the grid rather than patching it.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Profile;

use super::{CARD_BORDER_COLOR, FOCUS_COLOR};

pub(crate) const CARD_WIDTH: u16 = 36;
pub(crate) const CARD_HEIGHT: u16 = 5;

/// Cards per row for a given gallery width; never zero, narrow terminals get
/// clipped cards instead of none.
pub(crate) fn grid_columns(width: u16) -> usize {
    usize::from(width / CARD_WIDTH).max(1)
}

/// Fully visible card rows for a given gallery height.
pub(crate) fn visible_rows(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT).max(1)
}

pub(crate) fn render_gallery(
    frame: &mut Frame<'_>,
    area: Rect,
    profiles: &[Profile],
    cursor: usize,
    scroll_row: usize,
) {
    let columns = grid_columns(area.width);
    let first_visible = scroll_row * columns;

    for (position, profile) in profiles.iter().enumerate().skip(first_visible) {
        let cell = position - first_visible;
        let row = (cell / columns) as u16;
        let col = (cell % columns) as u16;

        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }
        let x = area.x + col * CARD_WIDTH;
        let width = CARD_WIDTH.min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }

        let rect = Rect { x, y, width, height: CARD_HEIGHT };
        render_card(frame, rect, profile, position == cursor);
    }
}

fn render_card(frame: &mut Frame<'_>, rect: Rect, profile: &Profile, selected: bool) {
    let border_color = if selected { FOCUS_COLOR } else { CARD_BORDER_COLOR };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", profile.initials()))
        .border_style(Style::default().fg(border_color));

    let lines = vec![
        Line::from(Span::styled(
            profile.full_name(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(profile.email().to_owned()),
        Line::from(format!("{}, {}", profile.city(), profile.state())),
    ];

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), rect);
}
