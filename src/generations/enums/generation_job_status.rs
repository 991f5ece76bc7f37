#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationJobStatus {
    Starting,
    Queued,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl GenerationJobStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Starting => "starting",
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
        }
    }

    /// Unrecognized provider statuses map to None and are treated as
    /// in-flight by the poller.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "starting" => Some(Self::Starting),
            "queued" => Some(Self::Queued),
            "processing" => Some(Self::Processing),
            "succeeded" => Some(Self::Succeeded),
            "failed" => Some(Self::Failed),
            "canceled" => Some(Self::Canceled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(*self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(GenerationJobStatus::Succeeded.is_terminal());
        assert!(GenerationJobStatus::Failed.is_terminal());
        assert!(GenerationJobStatus::Canceled.is_terminal());
        assert!(!GenerationJobStatus::Starting.is_terminal());
        assert!(!GenerationJobStatus::Queued.is_terminal());
        assert!(!GenerationJobStatus::Processing.is_terminal());
    }

    #[test]
    fn round_trips_known_values() {
        for value in ["starting", "queued", "processing", "succeeded", "failed", "canceled"] {
            let status = GenerationJobStatus::from_value(value).unwrap();
            assert_eq!(status.value(), value);
        }

        assert_eq!(GenerationJobStatus::from_value("warming_up"), None);
    }
}
