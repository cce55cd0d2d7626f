//! Two-step confirmation for destructive actions
//!
//! Instead of blocking on a synchronous dialog, the presentation layer
//! stages the action first, shows its own dialog, and hands the token
//! back to proceed. Tokens are single-use;
//! an unknown or reused token confirms nothing.

use std::collections::HashMap;
use uuid::Uuid;

/// An action staged for user confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteAccount { email: String },
    DeleteEmployee { id: String },
    ResetPassword { email: String },
}

/// Registry of actions awaiting confirmation
#[derive(Debug, Default)]
pub struct Confirmations {
    pending: HashMap<Uuid, PendingAction>,
}

impl Confirmations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an action; returns the token the UI must echo back
    pub fn begin(&mut self, action: PendingAction) -> Uuid {
        let token = Uuid::new_v4();
        tracing::debug!(token = %token, action = ?action, "Confirmation requested");
        self.pending.insert(token, action);
        token
    }

    /// Redeem a token. Returns the staged action exactly once; later
    /// calls with the same token return `None`.
    pub fn take(&mut self, token: Uuid) -> Option<PendingAction> {
        self.pending.remove(&token)
    }

    /// Drop a staged action without executing it
    pub fn cancel(&mut self, token: Uuid) {
        self.pending.remove(&token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_single_use() {
        let mut confirmations = Confirmations::new();
        let token = confirmations.begin(PendingAction::DeleteEmployee {
            id: "E-1".to_string(),
        });

        assert_eq!(
            confirmations.take(token),
            Some(PendingAction::DeleteEmployee {
                id: "E-1".to_string()
            })
        );
        assert_eq!(confirmations.take(token), None);
    }

    #[test]
    fn test_unknown_token_confirms_nothing() {
        let mut confirmations = Confirmations::new();
        assert_eq!(confirmations.take(Uuid::new_v4()), None);
    }

    #[test]
    fn test_cancel_discards_action() {
        let mut confirmations = Confirmations::new();
        let token = confirmations.begin(PendingAction::DeleteAccount {
            email: "bob@x.com".to_string(),
        });

        confirmations.cancel(token);
        assert_eq!(confirmations.take(token), None);
    }
}
