//! The `patch` use case: splice gnome-keyring entries into a PAM login
//! configuration.
//!
//! Pure text transform over stdin-shaped input: the keyring auth line goes
//! after the last `auth` entry, the keyring session line after the last
//! `session` entry that follows it. The input is never modified in place;
//! the patched text is returned for the caller to write out.

use thiserror::Error;

const KEYRING_AUTH_LINE: &str = "auth       optional   pam_gnome_keyring.so";
const KEYRING_SESSION_LINE: &str = "session    optional   pam_gnome_keyring.so auto_start";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    /// Hard precondition: without an anchor the splice point is undefined.
    #[error("unable to find any auth lines")]
    MissingAuthAnchor,
    #[error("unable to find any session lines")]
    MissingSessionAnchor,
}

pub fn patch_login_config(input: &str) -> Result<String, PatchError> {
    let lines: Vec<&str> = input.lines().collect();

    let last_auth = lines
        .iter()
        .rposition(|line| line.starts_with("auth"))
        .ok_or(PatchError::MissingAuthAnchor)?;

    let after_auth = &lines[last_auth + 1..];
    let last_session = after_auth
        .iter()
        .rposition(|line| line.starts_with("session"))
        .ok_or(PatchError::MissingSessionAnchor)?;

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    out.extend_from_slice(&lines[..=last_auth]);
    out.push(KEYRING_AUTH_LINE);
    out.extend_from_slice(&after_auth[..=last_session]);
    out.push(KEYRING_SESSION_LINE);
    out.extend_from_slice(&after_auth[last_session + 1..]);

    let mut text = out.join("\n");
    text.push('\n');
    Ok(text)
}
