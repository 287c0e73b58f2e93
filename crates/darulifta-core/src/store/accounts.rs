use crate::models::{MuftiAccount, UserAccount};

/// Something that can be registered and logged in: a primary key plus a
/// shared secret, both compared by exact string equality.
pub trait Credentialed {
    fn key(&self) -> &str;
    fn secret(&self) -> &str;
}

impl Credentialed for UserAccount {
    fn key(&self) -> &str {
        &self.email
    }

    fn secret(&self) -> &str {
        &self.password
    }
}

impl Credentialed for MuftiAccount {
    fn key(&self) -> &str {
        &self.username
    }

    fn secret(&self) -> &str {
        &self.password
    }
}

/// Single-session in-memory registry. There is exactly one "current"
/// identity per registry; login and registration overwrite it rather
/// than queueing. Key uniqueness is checked at registration only.
#[derive(Debug, Default)]
pub struct AccountRegistry<A> {
    accounts: Vec<A>,
    current: Option<usize>,
}

impl<A: Credentialed> AccountRegistry<A> {
    #[must_use]
    pub fn new(seed: Vec<A>) -> Self {
        Self {
            accounts: seed,
            current: None,
        }
    }

    /// Inserts the candidate and makes it the current session (signup
    /// logs the new account in). Returns `false`, with nothing inserted
    /// and the session untouched, when the key is taken.
    pub fn register(&mut self, candidate: A) -> bool {
        if self
            .accounts
            .iter()
            .any(|existing| existing.key() == candidate.key())
        {
            return false;
        }
        self.accounts.push(candidate);
        self.current = Some(self.accounts.len() - 1);
        true
    }

    /// Exact-match, case-sensitive credential scan. Which of the two
    /// fields was wrong is never revealed.
    pub fn login(&mut self, key: &str, secret: &str) -> bool {
        let found = self
            .accounts
            .iter()
            .position(|account| account.key() == key && account.secret() == secret);
        match found {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    /// Unconditional and idempotent.
    pub fn logout(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&A> {
        self.current.and_then(|index| self.accounts.get(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
