use std::collections::VecDeque;

use super::message::ChatMessage;

/// Maximum number of messages retained per conversation.
pub const MAX_HISTORY: usize = 20;

/// Ordered, bounded message buffer.
///
/// Insertion order is meaning order. After every push the buffer holds at
/// most `capacity` entries; the oldest are evicted first.
#[derive(Debug, Clone)]
pub struct History {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer retaining at most `capacity` messages (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends a message and evicts from the front until within capacity.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Returns every non-system message in order.
    pub fn visible(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_system())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::MessageRole;

    #[test]
    fn test_push_within_capacity() {
        let mut history = History::new();
        history.push(ChatMessage::user("a"));
        history.push(ChatMessage::assistant("b"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.capacity(), MAX_HISTORY);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut history = History::new();
        for i in 0..25 {
            history.push(ChatMessage::user(format!("m{}", i)));
        }

        assert_eq!(history.len(), MAX_HISTORY);
        let contents: Vec<_> = history.iter().map(|m| m.content.clone()).collect();
        let expected: Vec<_> = (5..25).map(|i| format!("m{}", i)).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_visible_hides_system_messages() {
        let mut history = History::new();
        history.push(ChatMessage::system("prime"));
        history.push(ChatMessage::user("hi"));
        history.push(ChatMessage::assistant("hello"));

        let visible = history.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|m| m.role != MessageRole::System));
        // System entries still count towards retention
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = History::with_capacity(0);
        history.push(ChatMessage::user("a"));
        history.push(ChatMessage::user("b"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.iter().next().unwrap().content, "b");
    }
}
