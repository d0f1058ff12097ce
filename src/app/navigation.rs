//! Navigation orchestration methods
//!
//! Methods for moving around the page:
//! - Line, half-page and page scrolling
//! - Jumping to the top, the bottom or a section (smooth)
//! - The collapsed navigation menu

use tracing::debug;

use super::App;
use crate::logic::document::SectionId;
use crate::logic::navigation::{
    active_section, max_scroll, next_selection, prev_selection, scroll_by, scroll_target,
    SMOOTH_SCROLL_DURATION,
};
use crate::scheduler::Clock;

impl<C: Clock + Clone> App<C> {
    pub fn max_scroll(&self) -> usize {
        max_scroll(self.document.height(), self.model.ui.viewport.height)
    }

    /// Section highlighted in the navbar
    pub fn active_section(&self) -> Option<SectionId> {
        active_section(&self.document.sections, self.scroll_position())
    }

    /// Scroll by `delta` rows, cancelling any smooth scroll
    pub fn scroll_lines(&mut self, delta: isize) {
        let position = scroll_by(
            self.scroll_position(),
            delta,
            self.document.height(),
            self.model.ui.viewport.height,
        );
        self.model.page.scroll.jump(position);
        self.observe_viewport();
    }

    pub fn page_down(&mut self) {
        let page = self.model.ui.viewport.height.saturating_sub(1).max(1);
        self.scroll_lines(page as isize);
    }

    pub fn page_up(&mut self) {
        let page = self.model.ui.viewport.height.saturating_sub(1).max(1);
        self.scroll_lines(-(page as isize));
    }

    pub fn half_page_down(&mut self) {
        let half = (self.model.ui.viewport.height / 2).max(1);
        self.scroll_lines(half as isize);
    }

    pub fn half_page_up(&mut self) {
        let half = (self.model.ui.viewport.height / 2).max(1);
        self.scroll_lines(-(half as isize));
    }

    pub fn scroll_to_top(&mut self) {
        self.model.page.scroll.jump(0);
        self.observe_viewport();
    }

    pub fn scroll_to_bottom(&mut self) {
        let max = self.max_scroll();
        self.model.page.scroll.jump(max);
        self.observe_viewport();
    }

    /// Smooth-scroll so the section sits just below the navbar
    pub fn jump_to_section(&mut self, id: SectionId) {
        let Some(span) = self.document.section(id) else {
            return;
        };
        let target = scroll_target(span.top).min(self.max_scroll());
        let now = self.now();
        self.model
            .page
            .scroll
            .animate_to(target, now, SMOOTH_SCROLL_DURATION);
        debug!(section = id.title(), target, "scrolling to section");
    }

    pub fn next_section(&mut self) {
        let current = self.active_section().map(SectionId::index);
        let target = next_selection(current, SectionId::ALL.len()).and_then(SectionId::from_index);
        if let Some(id) = target {
            self.jump_to_section(id);
        }
    }

    pub fn prev_section(&mut self) {
        let current = self.active_section().map(SectionId::index);
        let target = prev_selection(current, SectionId::ALL.len()).and_then(SectionId::from_index);
        if let Some(id) = target {
            self.jump_to_section(id);
        }
    }

    // ============================================
    // COLLAPSED MENU
    // ============================================

    /// Open or close the menu. Only available on narrow terminals.
    pub fn toggle_menu(&mut self) -> bool {
        if self.model.ui.menu_open() {
            self.model.ui.close_menu();
            return true;
        }
        if !self.model.ui.is_narrow() {
            return false;
        }
        let current = self.active_section();
        self.model.ui.open_menu(current);
        true
    }

    pub fn menu_next(&mut self) {
        self.model.ui.menu_selection =
            next_selection(self.model.ui.menu_selection, SectionId::ALL.len());
    }

    pub fn menu_prev(&mut self) {
        self.model.ui.menu_selection =
            prev_selection(self.model.ui.menu_selection, SectionId::ALL.len());
    }

    /// Follow the highlighted menu link and close the menu
    pub fn menu_select(&mut self) {
        let selected = self
            .model
            .ui
            .menu_selection
            .and_then(SectionId::from_index);
        self.model.ui.close_menu();
        if let Some(id) = selected {
            self.jump_to_section(id);
        }
    }
}
