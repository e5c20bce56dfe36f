//! Display surfaces the controller reads from and writes to.
//!
//! A surface stands in for the handful of page elements a generation cycle
//! touches: three input fields, the trigger control, the result panel with its
//! caption and image, and a way to alert the user. Handles are shared, so every
//! method takes `&self`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::constants::TRIGGER_LABEL;

/// Handles to the elements a generation cycle works with.
pub trait DisplaySurface {
    /// Current value of the topic field.
    fn topic_value(&self) -> String;
    /// Current value of the top text field.
    fn top_text_value(&self) -> String;
    /// Current value of the bottom text field.
    fn bottom_text_value(&self) -> String;

    /// Whether the trigger control can be activated.
    fn is_trigger_enabled(&self) -> bool;
    /// Enables or disables the trigger control.
    fn set_trigger_enabled(&self, enabled: bool);
    /// Label currently on the trigger control.
    fn trigger_label(&self) -> String;
    /// Replaces the label on the trigger control.
    fn set_trigger_label(&self, label: &str);

    /// Writes the caption display.
    fn set_caption(&self, caption: &str);
    /// Source of the image display.
    fn image_source(&self) -> String;
    /// Points the image display at a new source.
    fn set_image_source(&self, source: &str);
    /// Makes the result container visible.
    fn reveal_result(&self);

    /// Shows a message the user has to acknowledge.
    fn alert(&self, message: &str);
}

#[derive(Debug)]
struct ConsoleState {
    topic: String,
    top_text: String,
    bottom_text: String,
    trigger_enabled: bool,
    trigger_label: String,
    caption: String,
    image_source: String,
    result_visible: bool,
    alerts: Vec<String>,
}

/// In-memory surface for terminals and tests.
///
/// Alerts go to stderr and are kept so callers can inspect them afterwards.
#[derive(Debug)]
pub struct ConsoleSurface {
    state: Mutex<ConsoleState>,
}

impl ConsoleSurface {
    /// A surface with the given field values and nothing rendered yet.
    pub fn new(topic: &str, top_text: &str, bottom_text: &str) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                topic: topic.to_string(),
                top_text: top_text.to_string(),
                bottom_text: bottom_text.to_string(),
                trigger_enabled: true,
                trigger_label: TRIGGER_LABEL.to_string(),
                caption: String::new(),
                image_source: String::new(),
                result_visible: false,
                alerts: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Types a new value into the topic field.
    pub fn set_topic(&self, topic: &str) {
        self.lock().topic = topic.to_string();
    }

    /// Types a new value into the top text field.
    pub fn set_top_text(&self, top_text: &str) {
        self.lock().top_text = top_text.to_string();
    }

    /// Types a new value into the bottom text field.
    pub fn set_bottom_text(&self, bottom_text: &str) {
        self.lock().bottom_text = bottom_text.to_string();
    }

    /// What the caption display shows.
    pub fn caption(&self) -> String {
        self.lock().caption.clone()
    }

    /// Whether the result container has been revealed.
    pub fn is_result_visible(&self) -> bool {
        self.lock().result_visible
    }

    /// Every alert shown so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }
}

impl DisplaySurface for ConsoleSurface {
    fn topic_value(&self) -> String {
        self.lock().topic.clone()
    }

    fn top_text_value(&self) -> String {
        self.lock().top_text.clone()
    }

    fn bottom_text_value(&self) -> String {
        self.lock().bottom_text.clone()
    }

    fn is_trigger_enabled(&self) -> bool {
        self.lock().trigger_enabled
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        debug!("Trigger enabled: {enabled}");
        self.lock().trigger_enabled = enabled;
    }

    fn trigger_label(&self) -> String {
        self.lock().trigger_label.clone()
    }

    fn set_trigger_label(&self, label: &str) {
        info!("{label}");
        self.lock().trigger_label = label.to_string();
    }

    fn set_caption(&self, caption: &str) {
        self.lock().caption = caption.to_string();
    }

    fn image_source(&self) -> String {
        self.lock().image_source.clone()
    }

    fn set_image_source(&self, source: &str) {
        debug!("Image source set ({} chars)", source.len());
        self.lock().image_source = source.to_string();
    }

    fn reveal_result(&self) {
        self.lock().result_visible = true;
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
        self.lock().alerts.push(message.to_string());
    }
}
