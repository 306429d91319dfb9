//! Gallery image-list state.
//!
//! DESIGN
//! ======
//! Successful mutations reconcile the local list directly (prepend, filter,
//! merge) instead of re-fetching. `in_flight` counts outstanding operations so
//! one that finishes early cannot clear the loading flag of another.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::net::types::Image;

pub const FETCH_FAILED: &str = "Error fetching images";
pub const UPLOAD_FAILED: &str = "Error uploading image";
pub const DELETE_FAILED: &str = "Error deleting image";
pub const UPDATE_FAILED: &str = "Error updating image";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImagesState {
    pub items: Vec<Image>,
    pub in_flight: usize,
    pub error: Option<String>,
}

impl ImagesState {
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Start an operation: mark it in flight and clear the previous error.
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    /// Record a failed operation.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.settle();
    }

    pub fn finish_fetch(&mut self, items: Vec<Image>) {
        self.items = items;
        self.settle();
    }

    /// A new upload goes to the front of the list.
    pub fn finish_upload(&mut self, image: Image) {
        self.items.retain(|i| i.id != image.id);
        self.items.insert(0, image);
        self.settle();
    }

    pub fn finish_delete(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
        self.settle();
    }

    /// Replace the matching entry in place; unknown ids are ignored.
    pub fn finish_update(&mut self, image: Image) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == image.id) {
            *slot = image;
        }
        self.settle();
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
