/// Options for [`super::Draggable`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct DraggableOptions {
    /// Quiescence window (in seconds) after the last drag sample before `pause` fires.
    pub pause_delay: f64,

    /// Class added to the dragged element between pointer-down and pointer-up.
    pub dragging_class: String,

    /// If true, record lifecycle events in a small ring buffer, see
    /// [`super::Draggable::debug_log_text`].
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for DraggableOptions {
    fn default() -> Self {
        Self {
            pause_delay: 0.35,
            dragging_class: "dragging".to_owned(),
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

#[cfg(feature = "serde")]
impl DraggableOptions {
    /// Parse options from RON. Missing fields keep their defaults.
    ///
    /// # Errors
    /// If `text` is not valid RON for this type, or `pause_delay` is negative or not finite.
    pub fn from_ron(text: &str) -> Result<Self, OptionsError> {
        let options: Self = ron::from_str(text)?;
        if !options.pause_delay.is_finite() || options.pause_delay < 0.0 {
            return Err(OptionsError::InvalidPauseDelay(options.pause_delay));
        }
        Ok(options)
    }

    /// # Errors
    /// If serialization fails.
    pub fn to_ron(&self) -> Result<String, OptionsError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[derive(Debug)]
pub enum OptionsError {
    InvalidPauseDelay(f64),
    #[cfg(feature = "serde")]
    RonSerialize(ron::Error),
    #[cfg(feature = "serde")]
    RonDeserialize(ron::error::SpannedError),
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPauseDelay(delay) => {
                write!(
                    f,
                    "pause delay must be a non-negative number of seconds, got {delay}"
                )
            }
            #[cfg(feature = "serde")]
            Self::RonSerialize(err) => write!(f, "ron serialize error: {err}"),
            #[cfg(feature = "serde")]
            Self::RonDeserialize(err) => write!(f, "ron deserialize error: {err}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPauseDelay(_) => None,
            #[cfg(feature = "serde")]
            Self::RonSerialize(err) => Some(err),
            #[cfg(feature = "serde")]
            Self::RonDeserialize(err) => Some(err),
        }
    }
}

#[cfg(feature = "serde")]
impl From<ron::Error> for OptionsError {
    fn from(err: ron::Error) -> Self {
        Self::RonSerialize(err)
    }
}

#[cfg(feature = "serde")]
impl From<ron::error::SpannedError> for OptionsError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonDeserialize(err)
    }
}
