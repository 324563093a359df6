use tokio::process::Command;
use tracing::info;

use crate::error::{BotError, Result};
use crate::profile::Profile;

const TAGGR_CANISTER_ID: &str = "6qfxa-ryaaa-aaaai-qbhsq-cai";

/// Escapes a string for embedding in a Candid text literal. The message is
/// passed to dfx as a single argv element, so there is no shell in the path
/// and no shell quoting to worry about; only the Candid syntax itself needs
/// escaping.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

/// Renders the `add_post` argument tuple: the message text and an empty blob
/// list.
pub fn candid_args(message: &str) -> String {
    format!("(\"{}\", vec{{}})", escape_text(message))
}

/// Publishes a post to Taggr by shelling out to dfx with the profile's
/// identity. Awaits completion and surfaces stdout/stderr in the logs.
pub async fn publish(profile: Profile, message: &str) -> Result<()> {
    let args = candid_args(message);
    let output = Command::new("dfx")
        .args([
            "--identity",
            profile.identity(),
            "canister",
            "--network",
            "ic",
            "call",
            TAGGR_CANISTER_ID,
            "add_post",
            &args,
        ])
        .output()
        .await
        .map_err(|err| BotError::Publish(format!("couldn't run dfx: {}", err)))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(BotError::Publish(format!(
            "dfx exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    if !stderr.trim().is_empty() {
        return Err(BotError::Publish(format!("stderr: {}", stderr.trim())));
    }

    info!("Response: {}", stdout.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_is_wrapped_in_a_tuple() {
        assert_eq!(candid_args("hello"), r#"("hello", vec{})"#);
    }

    #[test]
    fn double_quotes_and_backslashes_are_escaped() {
        assert_eq!(candid_args(r#"a "b" c\d"#), r#"("a \"b\" c\\d", vec{})"#);
    }

    #[test]
    fn newlines_become_candid_escapes() {
        assert_eq!(candid_args("line one\nline two"), r#"("line one\nline two", vec{})"#);
    }

    #[test]
    fn single_quotes_need_no_escaping() {
        // No shell interpolation means an apostrophe is just a character.
        assert_eq!(candid_args("it's fine"), r#"("it's fine", vec{})"#);
    }
}
