use std::sync::Mutex;

use tokio::time::Instant;

use super::OutputSink;
use crate::MidiError;

/// One message captured by [`MockSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// When it was sent, on tokio's clock (so paused-time tests see virtual time)
    pub at: Instant,
    pub bytes: Vec<u8>,
}

/// A sink that records everything instead of talking to a device
#[derive(Debug, Default)]
pub struct MockSink {
    sent: Mutex<Vec<SentMessage>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn sent(&self) -> std::sync::MutexGuard<'_, Vec<SentMessage>> {
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every message so far, in send order
    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent().clone()
    }

    /// Just the bytes of every message so far, in send order
    pub fn bytes(&self) -> Vec<Vec<u8>> {
        self.sent().iter().map(|message| message.bytes.clone()).collect()
    }

    /// The messages grouped into runs that were sent at the same instant
    pub fn frames(&self) -> Vec<Vec<SentMessage>> {
        let mut frames: Vec<Vec<SentMessage>> = Vec::new();
        for message in self.sent().iter() {
            match frames.last_mut() {
                Some(frame) if frame[0].at == message.at => frame.push(message.clone()),
                _ => frames.push(vec![message.clone()]),
            }
        }
        frames
    }

    pub fn len(&self) -> usize {
        self.sent().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent().is_empty()
    }

    pub fn clear(&self) {
        self.sent().clear();
    }
}

impl OutputSink for MockSink {
    fn send(&self, bytes: &[u8]) -> Result<(), MidiError> {
        self.sent().push(SentMessage {
            at: Instant::now(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn groups_messages_by_instant() {
        let sink = MockSink::new();
        sink.send(&[1]).unwrap();
        sink.send(&[2]).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        sink.send(&[3]).unwrap();

        assert_eq!(sink.bytes(), vec![vec![1], vec![2], vec![3]]);
        let frames = sink.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 2);
        assert_eq!(frames[1][0].bytes, vec![3]);

        sink.clear();
        assert!(sink.is_empty());
    }
}
