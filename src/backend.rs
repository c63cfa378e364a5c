//! The seam between the viewer and whatever library decodes and displays
//! images.

use std::{fmt, time::Duration};

use crate::error::BackendError;

/// Array shape of a decoded image, printed the way `(rows, cols, channels)`
/// tuples usually are. Single-channel images still print all three fields,
/// e.g. `(h, w, 1)`, so the report always has the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub height: i32,
    pub width: i32,
    pub channels: i32,
}

impl Shape {
    pub const fn new(height: i32, width: i32, channels: i32) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

pub trait Frame {
    fn shape(&self) -> Shape;
}

pub trait Backend {
    type Image: Frame;

    /// `Ok(None)` means the file exists but could not be turned into pixels.
    fn decode(&mut self, path: &str) -> Result<Option<Self::Image>, BackendError>;

    fn show(&mut self, window_name: &str, image: &Self::Image) -> Result<(), BackendError>;

    /// Blocks for one key event. `None` waits forever; a finite timeout that
    /// elapses yields `Ok(None)`.
    fn wait_key(&mut self, timeout: Option<Duration>) -> Result<Option<i32>, BackendError>;

    fn close_all(&mut self) -> Result<(), BackendError>;
}

/// Windows opened through a backend. They are released exactly once, either
/// by [`Windows::close`] or, on any early exit, when the guard is dropped.
#[must_use = "`Windows` closes its windows when dropped"]
pub struct Windows<'a, B: Backend> {
    backend: &'a mut B,
    open: bool,
}

impl<'a, B: Backend> Windows<'a, B> {
    pub fn open(backend: &'a mut B, window_name: &str, image: &B::Image) -> Result<Self, BackendError> {
        // Armed before `show` so a half-created window is still torn down.
        let mut windows = Self {
            backend,
            open: true,
        };
        windows.backend.show(window_name, image)?;

        Ok(windows)
    }

    pub fn wait_key(&mut self, timeout: Option<Duration>) -> Result<Option<i32>, BackendError> {
        self.backend.wait_key(timeout)
    }

    pub fn close(mut self) -> Result<(), BackendError> {
        self.open = false;
        self.backend.close_all()
    }
}

impl<B: Backend> Drop for Windows<'_, B> {
    fn drop(&mut self) {
        if !self.open {
            return;
        }

        self.open = false;
        if let Err(err) = self.backend.close_all() {
            log::error!("failed to close windows: {err}");
        }
    }
}
