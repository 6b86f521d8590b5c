#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
            Self::Info => "notification-info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_dismiss_removes_one() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Success, "Sent");
        let second = queue.push(NotificationKind::Error, "Oops");
        assert!(second > first);

        assert!(queue.dismiss(first));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].kind.class(), "notification-error");
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let mut queue = NotificationQueue::default();
        queue.push(NotificationKind::Info, "Hi");
        assert!(!queue.dismiss(42));
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Info, "a");
        queue.dismiss(first);
        assert_ne!(queue.push(NotificationKind::Info, "b"), first);
    }
}
