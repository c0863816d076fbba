//! Conversation history (Entity)

use super::entities::Message;

/// Ordered, append-only record of a single conversation.
///
/// Messages are never reordered, deduplicated or edited after they are
/// pushed. There is no size bound: a session keeps growing for as long as
/// it lives, and every turn is sent back to the model as context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl<'a> IntoIterator for &'a ConversationHistory {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;

    #[test]
    fn test_insertion_order_preserved() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("a"));
        history.push(Message::assistant("b"));
        history.push(Message::user("a"));

        let roles: Vec<Role> = history.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        // Duplicates are kept
        assert_eq!(history.len(), 3);
        assert_eq!(history.last(), Some(&Message::user("a")));
    }

    #[test]
    fn test_clear() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("a"));
        history.clear();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }
}
