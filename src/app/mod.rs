mod options;
mod prechat_ui;

pub use options::{
    FormOptions, HEADER_MESSAGE, JOB_SEEKER_MESSAGE, PARTNERSHIP_MESSAGE, SUBMIT_LABEL,
    SUBMITTING_LABEL,
};
pub use prechat_ui::PreChatUI;
