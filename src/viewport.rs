#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header_rows: u16,
    pub footer_rows: u16,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            header_rows: 2,
            footer_rows: 2,
        }
    }
}

impl ScreenLayout {
    pub fn content_rows(self, total_rows: u16) -> usize {
        let reserved = self.header_rows.saturating_add(self.footer_rows);
        usize::from(total_rows.saturating_sub(reserved)).max(1)
    }
}

/// After every operation `selected < max(entry_count, 1)` and, for a non-empty
/// listing, `visible_start <= selected < visible_start + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionViewport {
    selected: usize,
    visible_start: usize,
    entry_count: usize,
    height: usize,
}

impl SelectionViewport {
    pub fn new(entry_count: usize, height: usize) -> Self {
        Self {
            selected: 0,
            visible_start: 0,
            entry_count,
            height: height.max(1),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn visible_start(&self) -> usize {
        self.visible_start
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = self
            .visible_start
            .saturating_add(self.height)
            .min(self.entry_count);
        self.visible_start.min(end)..end
    }

    pub fn rebind(&mut self, entry_count: usize, height: usize) {
        self.entry_count = entry_count;
        self.height = height.max(1);

        if entry_count == 0 {
            self.selected = 0;
            self.visible_start = 0;
            return;
        }
        if self.selected >= entry_count {
            self.selected = entry_count - 1;
            self.visible_start = entry_count.saturating_sub(self.height);
            return;
        }
        self.scroll_into_view();
    }

    pub fn reset(&mut self, entry_count: usize) {
        self.selected = 0;
        self.visible_start = 0;
        self.rebind(entry_count, self.height);
    }

    pub fn move_by(&mut self, delta: isize) {
        if self.entry_count == 0 {
            return;
        }
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(self.entry_count - 1);
        self.scroll_into_view();
    }

    fn scroll_into_view(&mut self) {
        if self.selected < self.visible_start {
            self.visible_start = self.selected;
        } else if self.selected >= self.visible_start + self.height {
            self.visible_start = self.selected + 1 - self.height;
        }
    }
}
