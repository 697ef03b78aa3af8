use std::fmt;

/// Username used for anonymous SteamCMD logins.
pub const ANONYMOUS_USER: &str = "anonymous";

/// SteamCMD login credentials.
///
/// Partial credentials are never kept: if either field is empty, both
/// collapse to anonymous.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    pass: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        let user = user.into();
        let pass = pass.into();

        if user.is_empty() || pass.is_empty() {
            return Self::anonymous();
        }

        Self { user, pass }
    }

    pub fn anonymous() -> Self {
        Self {
            user: ANONYMOUS_USER.into(),
            pass: String::new(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Returns `true` if a login with these credentials is anonymous.
    pub fn is_anonymous(&self) -> bool {
        self.user.is_empty() || self.user == ANONYMOUS_USER || self.pass.is_empty()
    }

    /// Builds the `+login` clause.
    pub fn login_args(&self) -> Vec<String> {
        if self.is_anonymous() {
            vec!["+login".into(), ANONYMOUS_USER.into()]
        } else {
            vec!["+login".into(), self.user.clone(), self.pass.clone()]
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("pass", &if self.pass.is_empty() { "" } else { "***" })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_collapse_to_anonymous() {
        for (user, pass) in [("", ""), ("alice", ""), ("", "secret")] {
            let creds = Credentials::new(user, pass);
            assert_eq!(creds.user(), "anonymous", "user={user:?} pass={pass:?}");
            assert_eq!(creds.pass(), "");
            assert!(creds.is_anonymous());
        }
    }

    #[test]
    fn full_credentials_kept() {
        let creds = Credentials::new("alice", "secret");
        assert_eq!(creds.user(), "alice");
        assert_eq!(creds.pass(), "secret");
        assert!(!creds.is_anonymous());
    }

    #[test]
    fn anonymous_user_with_password_logs_in_anonymously() {
        let creds = Credentials::new("anonymous", "ignored");
        assert_eq!(creds.pass(), "ignored");
        assert!(creds.is_anonymous());
        assert_eq!(creds.login_args(), vec!["+login", "anonymous"]);
    }

    #[test]
    fn login_args_with_account() {
        let creds = Credentials::new("alice", "secret");
        assert_eq!(creds.login_args(), vec!["+login", "alice", "secret"]);
    }

    #[test]
    fn debug_redacts_password() {
        let out = format!("{:?}", Credentials::new("alice", "secret"));
        assert!(out.contains("alice"));
        assert!(!out.contains("secret"));
    }
}
