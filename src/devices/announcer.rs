//! Confirmation messages emitted by appliances.
//!
//! Appliances never print on their own. They hand each confirmation to an
//! [`Announcer`], and the caller decides where the lines end up.

use parking_lot::Mutex;

/// Receives device confirmation messages in emission order.
pub trait Announcer: Send + Sync {
    fn announce(&self, message: String);
}

/// Announcer that keeps every message in memory.
#[derive(Default)]
pub struct Transcript {
    messages: Mutex<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Drain the recorded messages.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl Announcer for Transcript {
    fn announce(&self, message: String) {
        log::debug!("[Device] {}", message);
        self.messages.lock().push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_keeps_order() {
        let transcript = Transcript::new();
        transcript.announce("first".to_string());
        transcript.announce("second".to_string());
        assert_eq!(transcript.messages(), vec!["first", "second"]);

        assert_eq!(transcript.take().len(), 2);
        assert!(transcript.messages().is_empty());
    }
}
