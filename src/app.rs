use crate::cursor::PathCursor;
use crate::domain::{DirectoryListing, FileEntry, InputEvent};
use crate::error::BrowseError;
use crate::infra::FileSystem;
use crate::terminal::TerminalDriver;
use crate::viewport::{ScreenLayout, SelectionViewport};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct BrowserView<'a> {
    pub cursor: &'a PathCursor,
    pub listing: &'a DirectoryListing,
    pub viewport: &'a SelectionViewport,
    pub status: Option<&'a str>,
}

pub struct NavigationController {
    fs: Box<dyn FileSystem>,
    layout: ScreenLayout,
    cursor: PathCursor,
    listing: DirectoryListing,
    viewport: SelectionViewport,
    status: Option<String>,
    should_quit: bool,
}

impl NavigationController {
    pub fn open(
        fs: Box<dyn FileSystem>,
        cursor: PathCursor,
        layout: ScreenLayout,
        screen_rows: u16,
    ) -> Result<Self, BrowseError> {
        let listing = DirectoryListing::load(fs.as_ref(), cursor.current())?;
        let viewport = SelectionViewport::new(listing.len(), layout.content_rows(screen_rows));
        info!(path = %cursor.current().display(), entries = listing.len(), "session opened");
        Ok(Self {
            fs,
            layout,
            cursor,
            listing,
            viewport,
            status: None,
            should_quit: false,
        })
    }

    pub fn cursor(&self) -> &PathCursor {
        &self.cursor
    }

    pub fn listing(&self) -> &DirectoryListing {
        &self.listing
    }

    pub fn viewport(&self) -> &SelectionViewport {
        &self.viewport
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> BrowserView<'_> {
        BrowserView {
            cursor: &self.cursor,
            listing: &self.listing,
            viewport: &self.viewport,
            status: self.status(),
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.listing.get(self.viewport.selected())
    }

    /// Applies one input event. A failed directory read leaves path, listing
    /// and selection exactly as they were and is returned to the caller.
    pub fn apply(&mut self, event: InputEvent) -> Result<(), BrowseError> {
        self.status = None;
        let page = self.viewport.height() as isize;

        match event {
            InputEvent::MoveDown => self.viewport.move_by(1),
            InputEvent::MoveUp => self.viewport.move_by(-1),
            InputEvent::PageDown => self.viewport.move_by(page),
            InputEvent::PageUp => self.viewport.move_by(-page),
            InputEvent::Ascend => {
                let mut next = self.cursor.clone();
                next.ascend();
                self.enter(next)?;
            }
            InputEvent::Descend => {
                let Some(entry) = self.selected_entry() else {
                    return Ok(());
                };
                if !entry.is_dir {
                    debug!(name = %entry.name, "descend ignored for non-directory");
                    return Ok(());
                }
                let name = entry.name.clone();
                let mut next = self.cursor.clone();
                if next.descend(&name, &self.listing) {
                    self.enter(next)?;
                }
            }
            InputEvent::JumpHome => {
                let home = match self.cursor.home_target() {
                    Ok(home) => home.to_path_buf(),
                    Err(err) => {
                        debug!(error = %err, "jump ignored");
                        return Ok(());
                    }
                };
                let mut next = self.cursor.clone();
                if next.jump_to(&home) {
                    self.enter(next)?;
                }
            }
            InputEvent::JumpInitial => {
                let mut next = self.cursor.clone();
                if next.jump_initial() {
                    self.enter(next)?;
                }
            }
            InputEvent::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                self.viewport
                    .rebind(self.listing.len(), self.layout.content_rows(height));
            }
            InputEvent::Quit => self.should_quit = true,
        }

        Ok(())
    }

    fn enter(&mut self, next: PathCursor) -> Result<(), BrowseError> {
        let listing = match DirectoryListing::load(self.fs.as_ref(), next.current()) {
            Ok(listing) => listing,
            Err(err) => {
                self.status = Some(err.to_string());
                return Err(err);
            }
        };

        debug!(
            from = %self.cursor.current().display(),
            to = %next.current().display(),
            entries = listing.len(),
            "navigated"
        );
        self.cursor = next;
        self.listing = listing;
        self.viewport.reset(self.listing.len());
        Ok(())
    }
}

pub fn run(
    driver: &mut dyn TerminalDriver,
    controller: &mut NavigationController,
) -> Result<(), BrowseError> {
    driver.render(&controller.view())?;

    while !controller.should_quit() {
        let event = driver.poll_event()?;
        if let Err(err) = controller.apply(event) {
            if err.is_fatal() {
                return Err(err);
            }
            warn!(error = %err, ?event, "navigation rejected");
        }
        driver.render(&controller.view())?;
    }

    info!(path = %controller.cursor().current().display(), "session closed");
    Ok(())
}
