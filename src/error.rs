use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("NaN has no place in a total order and cannot be used as a priority")]
    IncomparablePriority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_nan() {
        let msg = HeapError::IncomparablePriority.to_string();
        assert!(msg.contains("NaN"));
    }
}
