/*
 * Responsibility
 * - Handler から見える「誰がリクエストしているか」の型
 * - middleware が解決して request extensions に格納する (以降は読み取り専用)
 */
use crate::services::users::UserId;

/// Request-scoped identity. Fields are private so an attached actor can't be
/// altered by downstream handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    uid: UserId,
    authenticated: bool,
}

impl Actor {
    pub fn from_uid(uid: UserId) -> Self {
        Self {
            uid,
            authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            uid: 0,
            authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// `None` for anonymous actors.
    pub fn uid(&self) -> Option<UserId> {
        self.authenticated.then_some(self.uid)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_uid() {
        let actor = Actor::default();
        assert!(!actor.is_authenticated());
        assert_eq!(actor.uid(), None);
    }

    #[test]
    fn authenticated_actor_exposes_uid() {
        let actor = Actor::from_uid(42);
        assert!(actor.is_authenticated());
        assert_eq!(actor.uid(), Some(42));
    }
}
