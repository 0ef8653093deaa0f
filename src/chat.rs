use google_chat1::api::{Group, Membership};
use tracing::debug;

use crate::client::get_chat_client;
use crate::WorkspaceError;

/// Placeholder resource names. Replace SPACE_NAME and GROUP_NAME with real
/// ids before running the snippet, or override them with CLI flags.
pub const DEFAULT_SPACE: &str = "spaces/SPACE_NAME";
pub const DEFAULT_GROUP: &str = "groups/GROUP_NAME";

pub const MEMBERSHIP_SCOPE: &str = "https://www.googleapis.com/auth/chat.memberships";

pub fn group_membership(group: &str) -> Membership {
    Membership {
        group_member: Some(Group {
            name: Some(group.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Creates a membership for a Google Group in a Chat space using user
/// credentials and prints the raw response. The membership is real server-side
/// state and is deliberately not cleaned up; any API failure propagates to the
/// caller as-is.
pub async fn create_membership_for_group(
    access_token: &str,
    space: &str,
    group: &str,
) -> Result<Membership, WorkspaceError> {
    let chat = get_chat_client(access_token);

    let membership = group_membership(group);
    debug!("Creating membership in {space} for {group}");

    let (_, response) = chat
        .spaces()
        .members_create(membership, space)
        .doit()
        .await
        .map_err(|e| WorkspaceError::GoogleApi(e.to_string()))?;

    println!("{response:#?}");
    Ok(response)
}
