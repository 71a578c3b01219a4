//! Voice-join notice text

use std::fmt;

/// Announcement posted when a member joins a monitored voice channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinNotice {
    /// Member's display name
    pub display_name: String,
    /// Voice channel name (or a mention when the name is unavailable)
    pub channel_name: String,
    /// Jump link to the member's introduction, if they posted one
    pub introduction_link: Option<String>,
}

impl fmt::Display for JoinNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} joined `{}`!", self.display_name, self.channel_name)?;
        match &self.introduction_link {
            Some(link) => write!(f, "📌 Introduction: {link}"),
            None => f.write_str("⚠️ This member has not posted an introduction yet."),
        }
    }
}
