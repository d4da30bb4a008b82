/// Local user preferences.
///
/// The admin flag is a local toggle, not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrefs {
    pub nickname: String,
    pub notifications_enabled: bool,
    pub is_admin: bool,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            nickname: "Escaper".into(),
            notifications_enabled: true,
            is_admin: false,
        }
    }
}
