use std::path::PathBuf;

use qrview_business::ViewerState;

use crate::utils::save_dialog::{SaveDialogHandler, SystemSaveDialogHandler};

/// Sender half of the save-path channel; handed to the dialog thread.
pub type SavePathSender = flume::Sender<PathBuf>;

/// Receiver half of the save-path channel; drained by the frame loop.
pub type SavePathReceiver = flume::Receiver<PathBuf>;

/// Create the channel that carries chosen save paths back into the frame
/// loop. Unbounded: at most one dialog result is ever in flight.
pub fn create_save_channel() -> (SavePathSender, SavePathReceiver) {
    flume::unbounded()
}

/// The main application state.
///
/// Wraps the GUI-free [`ViewerState`] together with the UI-only resources:
/// the save-path channel and the save-dialog handler. We manually implement
/// Default because the channel halves don't implement it.
pub struct State {
    /// The viewer's core state (parameters, colors, grid, pixels, layout).
    pub viewer: ViewerState,
    /// Sender for save dialog results.
    pub save_path_sender: SavePathSender,
    /// Receiver for save dialog results.
    pub save_path_receiver: SavePathReceiver,
    /// The save dialog implementation; swapped for a mock in tests.
    pub save_dialog: Box<dyn SaveDialogHandler>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_dialog(Box::new(SystemSaveDialogHandler))
    }
}

impl State {
    /// Build a state with a specific dialog handler. Tests use this to avoid
    /// touching the system file dialog.
    pub fn with_dialog(save_dialog: Box<dyn SaveDialogHandler>) -> Self {
        let (save_path_sender, save_path_receiver) = create_save_channel();
        Self {
            viewer: ViewerState::new(),
            save_path_sender,
            save_path_receiver,
            save_dialog,
        }
    }
}
