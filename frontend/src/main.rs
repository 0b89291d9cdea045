//! Creator gallery entry point

use shared::GalleryError;
use std::sync::OnceLock;
use zoon::*;

/// Keeps the application alive for the lifetime of the page.
static MAIN_APP: OnceLock<SendWrapper<app::GalleryApp>> = OnceLock::new();

const ROOT_ID: &str = "app";

mod app;
mod collation;
mod controller;
mod data_loader;
mod dataflow;
mod views;

pub fn main() {
    if let Err(error) = check_mount_point(ROOT_ID) {
        zoon::eprintln!("[APP] {}", error);
        if error.is_fatal() {
            return;
        }
    }

    let app = app::GalleryApp::new();
    let root_element = app.root();
    let _ = MAIN_APP.set(SendWrapper::new(app));
    start_app(ROOT_ID, move || root_element);
}

fn check_mount_point(id: &str) -> Result<(), GalleryError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .map(|_| ())
        .ok_or_else(|| GalleryError::RenderPrecondition {
            target: id.to_string(),
        })
}
