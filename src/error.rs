use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("reference text must contain at least one character")]
    EmptyReference,
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("unable to encode or decode preferences. Cause : {0}")]
    Json(#[from] ::serde_json::Error),
    #[error("terminal event source disconnected")]
    EventSourceClosed,
    #[error("unable to initialise logging. Cause : {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_message_covers_both_directions() {
        let err: Error = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err
            .to_string()
            .starts_with("unable to encode or decode preferences"));
    }

    #[test]
    fn closed_event_source_message() {
        assert_eq!(
            Error::EventSourceClosed.to_string(),
            "terminal event source disconnected"
        );
    }
}
