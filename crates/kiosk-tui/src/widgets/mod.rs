//! Custom widget components, one per kiosk panel plus the shared frame

mod are_you_ready;
mod feedback;
mod form;
mod header;
mod home;
mod status_bar;
mod thank_you;
mod video_selection;

pub use are_you_ready::AreYouReadyPanel;
pub use feedback::FeedbackPanel;
pub use form::FormPanel;
pub use header::MainHeader;
pub use home::HomePanel;
pub use status_bar::StatusBar;
pub use thank_you::ThankYouPanel;
pub use video_selection::VideoSelectionPanel;
