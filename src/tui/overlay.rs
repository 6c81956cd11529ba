// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Single-profile detail overlay with boundary-aware paging.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::Profile;

use super::{centered_rect, FOOTER_KEY_COLOR, FOOTER_LABEL_COLOR, OVERLAY_BORDER_COLOR};

const OVERLAY_WIDTH_PERCENT: u16 = 54;
const OVERLAY_HEIGHT_PERCENT: u16 = 62;

/// Which paging controls exist for a given position.
///
/// A hidden control is neither rendered nor bound to a key, so stepping past
/// either end of the sequence cannot happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavVisibility {
    prev: bool,
    next: bool,
}

impl NavVisibility {
    pub fn for_position(index: usize, len: usize) -> Self {
        if len <= 1 {
            Self { prev: false, next: false }
        } else if index == 0 {
            Self { prev: false, next: true }
        } else if index == len - 1 {
            Self { prev: true, next: false }
        } else {
            Self { prev: true, next: true }
        }
    }

    pub fn prev(&self) -> bool {
        self.prev
    }

    pub fn next(&self) -> bool {
        self.next
    }
}

/// Detail view of one profile, opened from a card.
///
/// The overlay owns the sequence it was opened against, so the index it holds
/// keeps meaning something even while the gallery is being re-filtered; the
/// app closes the overlay on filter submission, and owning the pairing keeps
/// it explicit rather than ambient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    index: usize,
    profiles: Vec<Profile>,
    nav: NavVisibility,
}

impl DetailOverlay {
    /// Opens the overlay at `index` into `profiles`.
    ///
    /// `profiles` must be non-empty and `index` in range; both entry points
    /// (card selection, paging) guarantee it.
    pub fn open(index: usize, profiles: Vec<Profile>) -> Self {
        debug_assert!(index < profiles.len());
        let nav = NavVisibility::for_position(index, profiles.len());
        Self { index, profiles, nav }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profile(&self) -> &Profile {
        &self.profiles[self.index]
    }

    pub fn nav(&self) -> NavVisibility {
        self.nav
    }

    /// Replaces this overlay with one opened at the next position against the
    /// same sequence. With the "next" control hidden this is a no-op.
    pub fn next(self) -> Self {
        if self.nav.next {
            Self::open(self.index + 1, self.profiles)
        } else {
            self
        }
    }

    /// Counterpart of [`DetailOverlay::next`].
    pub fn prev(self) -> Self {
        if self.nav.prev {
            Self::open(self.index - 1, self.profiles)
        } else {
            self
        }
    }
}

pub(crate) fn render_detail(frame: &mut Frame<'_>, area: Rect, overlay: &DetailOverlay) {
    let popup = centered_rect(OVERLAY_WIDTH_PERCENT, OVERLAY_HEIGHT_PERCENT, area);
    frame.render_widget(Clear, popup);

    let profile = overlay.profile();
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", profile.initials()), dim),
            Span::styled(profile.full_name(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(profile.email().to_owned()),
        Line::from(profile.city().to_owned()),
        Line::from(Span::styled("─".repeat(28), dim)),
        Line::from(profile.cell().to_owned()),
        Line::from(format!("{}, {}, {}", profile.street(), profile.state(), profile.postcode())),
        Line::from(format!("Birthday: {}", profile.birth_date_day())),
        Line::from(""),
        Line::from(Span::styled(profile.thumbnail().to_owned(), dim)),
        Line::from(""),
    ];
    lines.push(nav_hint_line(overlay.nav()));

    let title = format!("─ Profile {}/{} ", overlay.index() + 1, overlay.len());
    let detail = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(OVERLAY_BORDER_COLOR)),
    );
    frame.render_widget(detail, popup);
}

fn nav_hint_line(nav: NavVisibility) -> Line<'static> {
    let key_style = Style::default().fg(FOOTER_KEY_COLOR);
    let label_style = Style::default().fg(FOOTER_LABEL_COLOR);

    let mut spans = Vec::<Span<'static>>::new();
    if nav.prev() {
        spans.push(Span::styled("←/p", key_style));
        spans.push(Span::styled(" prev  ", label_style));
    }
    if nav.next() {
        spans.push(Span::styled("→/n", key_style));
        spans.push(Span::styled(" next  ", label_style));
    }
    spans.push(Span::styled("Esc", key_style));
    spans.push(Span::styled(" close", label_style));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DetailOverlay, NavVisibility};
    use crate::model::fixtures::profile_trio;

    #[rstest]
    #[case(0, 1, false, false)]
    #[case(0, 2, false, true)]
    #[case(1, 2, true, false)]
    #[case(0, 3, false, true)]
    #[case(1, 3, true, true)]
    #[case(2, 3, true, false)]
    #[case(5, 12, true, true)]
    fn visibility_truth_table(
        #[case] index: usize,
        #[case] len: usize,
        #[case] prev: bool,
        #[case] next: bool,
    ) {
        let nav = NavVisibility::for_position(index, len);
        assert_eq!(nav.prev(), prev);
        assert_eq!(nav.next(), next);
    }

    #[test]
    fn open_snapshots_the_sequence_and_position() {
        let overlay = DetailOverlay::open(1, profile_trio());
        assert_eq!(overlay.index(), 1);
        assert_eq!(overlay.len(), 3);
        assert_eq!(overlay.profile().first_name(), "Bob");
    }

    #[test]
    fn next_then_prev_round_trips_to_the_same_profile() {
        let overlay = DetailOverlay::open(1, profile_trio());
        let original = overlay.profile().clone();

        let overlay = overlay.next();
        assert_eq!(overlay.index(), 2);

        let overlay = overlay.prev();
        assert_eq!(overlay.index(), 1);
        assert_eq!(overlay.profile(), &original);
    }

    #[test]
    fn paging_reevaluates_visibility() {
        let overlay = DetailOverlay::open(1, profile_trio());
        assert!(overlay.nav().prev());
        assert!(overlay.nav().next());

        let overlay = overlay.next();
        assert!(overlay.nav().prev());
        assert!(!overlay.nav().next());
    }

    #[test]
    fn hidden_controls_make_paging_a_noop() {
        let overlay = DetailOverlay::open(0, profile_trio());
        let overlay = overlay.prev();
        assert_eq!(overlay.index(), 0);

        let overlay = DetailOverlay::open(2, profile_trio());
        let overlay = overlay.next();
        assert_eq!(overlay.index(), 2);

        let single = vec![profile_trio().remove(0)];
        let overlay = DetailOverlay::open(0, single);
        let overlay = overlay.next().prev();
        assert_eq!(overlay.index(), 0);
    }
}
