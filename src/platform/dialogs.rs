// toolcase - platform/dialogs.rs
//
// Native dialog wrappers over `rfd`. All dialogs are modal and blocking;
// callers decide what to do with the answer. Nothing here touches the
// filesystem.

use crate::util::constants;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

/// Outcome of [`confirm_with_cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Cancel,
}

/// Modal information box.
pub fn show_info(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(constants::CRATE_NAME)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Modal warning box.
pub fn show_warning(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(constants::CRATE_NAME)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Modal error box.
pub fn show_error(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(constants::CRATE_NAME)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Yes/No question. Returns true only on an explicit Yes.
pub fn confirm(message: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(constants::QUESTION_DIALOG_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(answer, MessageDialogResult::Yes)
}

/// Yes/No/Cancel question. Closing the dialog counts as Cancel.
pub fn confirm_with_cancel(message: &str) -> Choice {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(constants::QUESTION_DIALOG_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::YesNoCancel)
        .show();
    match answer {
        MessageDialogResult::Yes => Choice::Yes,
        MessageDialogResult::No => Choice::No,
        _ => Choice::Cancel,
    }
}

/// Multi-folder selection. Returns an empty list when the user cancels.
pub fn pick_folders(title: &str) -> Vec<PathBuf> {
    FileDialog::new()
        .set_title(title)
        .pick_folders()
        .unwrap_or_default()
}
