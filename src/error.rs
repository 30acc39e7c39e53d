//! Error types delivered through the error callback.
//!
//! No public operation of this crate returns an error to its caller:
//! `request`, `cancel` and `subscribe_all` never fail. Every failure is
//! reported to the consumer through [`Consume::on_error`](crate::Consume::on_error)
//! as a [`StreamError`].
//!
//! [`StreamError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics, and [`StreamError::position`] to find the failing element.

use thiserror::Error;

/// Boxed error returned by element callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors reported to a consumer.
///
/// Element failures (`Element`, `Panicked`) are isolated: the stream keeps
/// going with the next element. `InvalidDemand` is a protocol violation by
/// the consumer itself.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StreamError {
    /// The element callback returned an error for one element.
    #[error("element {position} failed: {source}")]
    Element {
        /// Source position of the failing element.
        position: u64,
        /// The error returned by the callback.
        #[source]
        source: BoxError,
    },

    /// The element callback panicked while handling one element.
    #[error("element {position} panicked: {message}")]
    Panicked {
        /// Source position of the failing element.
        position: u64,
        /// Panic payload, if it was a string.
        message: String,
    },

    /// Demand must be positive; `request(0)` is a protocol violation.
    #[error("invalid demand {requested}: must be positive")]
    InvalidDemand {
        /// The rejected demand value.
        requested: u64,
    },
}

impl StreamError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use demandflow::StreamError;
    ///
    /// let err = StreamError::InvalidDemand { requested: 0 };
    /// assert_eq!(err.as_label(), "stream_invalid_demand");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StreamError::Element { .. } => "stream_element_failed",
            StreamError::Panicked { .. } => "stream_element_panicked",
            StreamError::InvalidDemand { .. } => "stream_invalid_demand",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StreamError::Element { position, source } => {
                format!("error at position {position}: {source}")
            }
            StreamError::Panicked { position, message } => {
                format!("panic at position {position}: {message}")
            }
            StreamError::InvalidDemand { requested } => {
                format!("invalid demand: {requested}")
            }
        }
    }

    /// Returns the source position of the failing element, if any.
    ///
    /// # Example
    /// ```
    /// use demandflow::StreamError;
    ///
    /// let err = StreamError::Panicked { position: 3, message: "boom".into() };
    /// assert_eq!(err.position(), Some(3));
    /// assert_eq!(StreamError::InvalidDemand { requested: 0 }.position(), None);
    /// ```
    pub fn position(&self) -> Option<u64> {
        match self {
            StreamError::Element { position, .. } | StreamError::Panicked { position, .. } => {
                Some(*position)
            }
            StreamError::InvalidDemand { .. } => None,
        }
    }

    /// Indicates whether the error concerns a single element only.
    ///
    /// Element failures never terminate the stream.
    pub fn is_element_failure(&self) -> bool {
        matches!(
            self,
            StreamError::Element { .. } | StreamError::Panicked { .. }
        )
    }

    /// Builds a [`StreamError::Panicked`] from a caught panic payload.
    pub(crate) fn from_panic(position: u64, payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        StreamError::Panicked { position, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let element = StreamError::Element {
            position: 1,
            source: "bad".into(),
        };
        let panicked = StreamError::Panicked {
            position: 2,
            message: "boom".into(),
        };
        let invalid = StreamError::InvalidDemand { requested: 0 };

        assert_eq!(element.as_label(), "stream_element_failed");
        assert_eq!(panicked.as_label(), "stream_element_panicked");
        assert_eq!(invalid.as_label(), "stream_invalid_demand");
    }

    #[test]
    fn test_display_includes_position_and_source() {
        let err = StreamError::Element {
            position: 7,
            source: "parse failure".into(),
        };
        assert_eq!(err.to_string(), "element 7 failed: parse failure");
        assert_eq!(err.as_message(), "error at position 7: parse failure");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_panic_extracts_messages() {
        let static_str: Box<dyn std::any::Any + Send> = Box::new("static");
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        let other: Box<dyn std::any::Any + Send> = Box::new(42u8);

        match StreamError::from_panic(0, static_str.as_ref()) {
            StreamError::Panicked { message, .. } => assert_eq!(message, "static"),
            e => panic!("unexpected {e:?}"),
        }
        match StreamError::from_panic(1, owned.as_ref()) {
            StreamError::Panicked { message, .. } => assert_eq!(message, "owned"),
            e => panic!("unexpected {e:?}"),
        }
        match StreamError::from_panic(2, other.as_ref()) {
            StreamError::Panicked { position, message } => {
                assert_eq!(position, 2);
                assert_eq!(message, "non-string panic payload");
            }
            e => panic!("unexpected {e:?}"),
        }
    }

    #[test]
    fn test_element_failure_classification() {
        assert!(
            StreamError::Panicked {
                position: 0,
                message: String::new()
            }
            .is_element_failure()
        );
        assert!(!StreamError::InvalidDemand { requested: 0 }.is_element_failure());
    }
}
