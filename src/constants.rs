//! Shared constants/setters for things
//!

/// Where the generation service listens unless told otherwise.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000/generate";

/// Prefix turning a base64 PNG payload into something an image display can show.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Filename used when exporting the displayed image.
pub const EXPORT_FILENAME: &str = "meme.png";

/// Resting label of the trigger control.
pub const TRIGGER_LABEL: &str = "Generate Meme";

/// Label shown while a generation request is outstanding.
pub const TRIGGER_BUSY_LABEL: &str = "Generating... (this may take a few seconds)";

/// Notice shown when the topic is missing.
pub const EMPTY_TOPIC_NOTICE: &str = "Enter a topic.";

/// Last-resort failure message when neither the server nor the transport gives one.
pub const GENERIC_FAILURE_MESSAGE: &str = "Generation failed";
