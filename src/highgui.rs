use std::time::Duration;

use opencv::{
    core::{Mat, MatTraitConst},
    highgui::{self, WINDOW_AUTOSIZE},
    imgcodecs,
};

use crate::{
    backend::{Backend, Frame, Shape},
    error::BackendError,
};

impl Frame for Mat {
    fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols(), self.channels())
    }
}

/// OpenCV's `imgcodecs` + `highgui` pair.
#[derive(Debug, Clone, Copy)]
pub struct HighGui {
    read_flags: i32,
    window_flags: i32,
}

impl Default for HighGui {
    fn default() -> Self {
        Self {
            read_flags: imgcodecs::IMREAD_COLOR,
            window_flags: WINDOW_AUTOSIZE,
        }
    }
}

impl HighGui {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_read_flags(mut self, read_flags: i32) -> Self {
        self.read_flags = read_flags;
        self
    }

    pub const fn with_window_flags(mut self, window_flags: i32) -> Self {
        self.window_flags = window_flags;
        self
    }
}

/// `wait_key(0)` is OpenCV's "forever", so a finite timeout is at least 1ms.
fn delay_ms(timeout: Option<Duration>) -> i32 {
    match timeout {
        None => 0,
        Some(timeout) => i32::try_from(timeout.as_millis())
            .unwrap_or(i32::MAX)
            .max(1),
    }
}

impl Backend for HighGui {
    type Image = Mat;

    fn decode(&mut self, path: &str) -> Result<Option<Mat>, BackendError> {
        // imread reports unreadable files with an empty Mat, not an error.
        let image = imgcodecs::imread(path, self.read_flags)?;
        if image.empty() {
            return Ok(None);
        }

        Ok(Some(image))
    }

    fn show(&mut self, window_name: &str, image: &Mat) -> Result<(), BackendError> {
        highgui::named_window(window_name, self.window_flags)?;
        highgui::imshow(window_name, image)?;

        Ok(())
    }

    fn wait_key(&mut self, timeout: Option<Duration>) -> Result<Option<i32>, BackendError> {
        let key = highgui::wait_key(delay_ms(timeout))?;

        Ok((key >= 0).then_some(key))
    }

    fn close_all(&mut self) -> Result<(), BackendError> {
        highgui::destroy_all_windows()?;

        Ok(())
    }
}
