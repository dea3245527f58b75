//! Cursor and visible window over a list of rows.
//!
//! [`PageWindow`] tracks a cursor and the first visible row for a collection
//! of `count` rows shown `size` at a time. The window always contains the
//! cursor and never extends past the end of the collection when the
//! collection is at least one page long.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    cursor: usize,
    offset: usize,
    count: usize,
    size: usize,
}

impl PageWindow {
    pub fn new(count: usize, size: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            count,
            size,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn size(&self) -> usize {
        self.size
    }

    /// Indices of the rows currently visible.
    pub fn visible(&self) -> Range<usize> {
        self.offset..(self.offset + self.size).min(self.count)
    }

    /// Change the number of rows, clamping the cursor into range.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
        self.settle();
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
        self.settle();
    }

    /// Move the cursor and the window back to the first row.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// Move up one row, wrapping from the first row to the last.
    pub fn move_up(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = (self.cursor + self.count - 1) % self.count;
        self.settle();
    }

    /// Move down one row, wrapping from the last row to the first.
    pub fn move_down(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % self.count;
        self.settle();
    }

    pub fn page_up(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_sub(self.size.max(1));
        self.settle();
    }

    pub fn page_down(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = (self.cursor + self.size.max(1)).min(self.count - 1);
        self.settle();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
        self.settle();
    }

    pub fn end(&mut self) {
        self.cursor = self.count.saturating_sub(1);
        self.settle();
    }

    /// Put the cursor on `index`, clamped to the last row.
    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.cursor = index.min(self.count - 1);
        self.settle();
    }

    /// Scroll the least amount that brings the cursor into view, then pull
    /// the window back if it hangs past the last row.
    fn settle(&mut self) {
        if self.count == 0 || self.size == 0 {
            self.offset = 0;
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.size {
            self.offset = self.cursor + 1 - self.size;
        }
        self.offset = self.offset.min(self.count.saturating_sub(self.size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contains_cursor(w: &PageWindow) {
        assert!(w.visible().contains(&w.cursor()), "{w:?}");
    }

    #[test]
    fn seven_moves_down_return_to_start() {
        let mut w = PageWindow::new(7, 5);
        for _ in 0..7 {
            w.move_down();
            assert_contains_cursor(&w);
        }
        assert_eq!(w.cursor(), 0);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn move_up_wraps_to_last_page() {
        let mut w = PageWindow::new(12, 5);
        w.move_up();
        assert_eq!(w.cursor(), 11);
        assert_eq!(w.visible(), 7..12);
    }

    #[test]
    fn single_move_scrolls_one_row() {
        let mut w = PageWindow::new(10, 3);
        w.move_down();
        w.move_down();
        assert_eq!(w.offset(), 0);
        w.move_down();
        assert_eq!(w.offset(), 1);
        w.move_down();
        assert_eq!(w.offset(), 2);
        w.move_up();
        w.move_up();
        assert_eq!(w.offset(), 2);
        w.move_up();
        assert_eq!(w.offset(), 1);
    }

    #[test]
    fn page_moves_clamp() {
        let mut w = PageWindow::new(20, 5);
        w.page_down();
        assert_eq!(w.cursor(), 5);
        w.select(18);
        w.page_down();
        assert_eq!(w.cursor(), 19);
        w.select(2);
        w.page_up();
        assert_eq!(w.cursor(), 0);
        assert_contains_cursor(&w);
    }

    #[test]
    fn home_and_end() {
        let mut w = PageWindow::new(10, 4);
        w.end();
        assert_eq!(w.cursor(), 9);
        assert_eq!(w.visible(), 6..10);
        w.home();
        assert_eq!(w.visible(), 0..4);
    }

    #[test]
    fn empty_window_ignores_moves() {
        let mut w = PageWindow::new(0, 5);
        w.move_down();
        w.move_up();
        w.page_down();
        assert_eq!(w.cursor(), 0);
        assert_eq!(w.visible(), 0..0);
    }

    #[test]
    fn shrinking_count_clamps_cursor_and_window() {
        let mut w = PageWindow::new(20, 5);
        w.select(15);
        w.set_count(8);
        assert_eq!(w.cursor(), 7);
        assert_eq!(w.visible(), 3..8);
    }

    #[test]
    fn short_list_shows_everything() {
        let w = PageWindow::new(3, 5);
        assert_eq!(w.visible(), 0..3);
    }

    #[test]
    fn every_position_is_visible() {
        for count in 1..12 {
            let mut w = PageWindow::new(count, 4);
            for _ in 0..count * 2 {
                w.move_down();
                assert_contains_cursor(&w);
            }
            for _ in 0..count * 2 {
                w.move_up();
                assert_contains_cursor(&w);
            }
        }
    }
}
