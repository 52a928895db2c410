//! Save dialog handling for exporting the QR code as a PNG.
//!
//! This module provides trait-based abstractions for the save dialog,
//! enabling mock implementations for testing without relying on system
//! dialogs.
//!
//! # Architecture
//!
//! The dialog is a message-passing boundary: the shortcut spawns the native
//! dialog on its own thread, and a chosen path is posted back through a
//! `flume` channel that the frame loop drains. Viewer state is never touched
//! from outside the frame loop, and the dialog never blocks a frame.
//! Cancelling the dialog simply produces no message.

use std::path::PathBuf;

/// Trait for requesting a save destination, enabling mock implementations
/// for testing.
pub trait SaveDialogHandler {
    /// Open the dialog and eventually post the chosen path through `sender`.
    ///
    /// Must return immediately; the result arrives asynchronously, if at all.
    fn request_save(&self, ctx: &egui::Context, sender: flume::Sender<PathBuf>);
}

/// Default handler using the native save dialog.
#[derive(Default)]
pub struct SystemSaveDialogHandler;

impl SaveDialogHandler for SystemSaveDialogHandler {
    fn request_save(&self, ctx: &egui::Context, sender: flume::Sender<PathBuf>) {
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let picked = rfd::FileDialog::new()
                .add_filter("PNG image", &["png"])
                .set_file_name("qr.png")
                .set_title("Save QR code")
                .save_file();

            match picked {
                Some(path) => {
                    log::info!("user chose save path: {}", path.display());
                    if sender.send(path).is_err() {
                        log::warn!("save-path receiver dropped before the dialog closed");
                    }
                    // Wake the frame loop so the export runs promptly.
                    ctx.request_repaint();
                }
                None => log::debug!("save dialog cancelled"),
            }
        });
    }
}

/// Whether the save shortcut (Ctrl+S / Cmd+S) was pressed this frame.
pub fn save_shortcut_pressed(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.key_pressed(egui::Key::S) && i.modifiers.command_only())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock handler that never produces a path (dialog cancelled).
    struct MockSaveDialogCancelled;

    impl SaveDialogHandler for MockSaveDialogCancelled {
        fn request_save(&self, _ctx: &egui::Context, _sender: flume::Sender<PathBuf>) {}
    }

    /// Mock handler that immediately posts a fixed path.
    struct MockSaveDialogWithPath {
        path: PathBuf,
    }

    impl SaveDialogHandler for MockSaveDialogWithPath {
        fn request_save(&self, _ctx: &egui::Context, sender: flume::Sender<PathBuf>) {
            sender.send(self.path.clone()).expect("receiver alive");
        }
    }

    #[test]
    fn test_cancelled_dialog_sends_nothing() {
        let (sender, receiver) = flume::unbounded();
        let ctx = egui::Context::default();
        MockSaveDialogCancelled.request_save(&ctx, sender);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_confirmed_dialog_posts_the_path() {
        let (sender, receiver) = flume::unbounded();
        let ctx = egui::Context::default();
        let handler = MockSaveDialogWithPath {
            path: PathBuf::from("/tmp/qr.png"),
        };
        handler.request_save(&ctx, sender);
        assert_eq!(receiver.try_recv().unwrap(), PathBuf::from("/tmp/qr.png"));
    }

    #[test]
    fn test_handler_trait_is_object_safe() {
        fn _accept_handler(_handler: &dyn SaveDialogHandler) {}
        _accept_handler(&MockSaveDialogCancelled);
    }
}
