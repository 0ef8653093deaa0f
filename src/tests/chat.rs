use crate::chat::{create_membership_for_group, group_membership, DEFAULT_GROUP};
use dotenv::dotenv;
use std::env;

#[test]
fn group_membership_targets_the_group() {
    let membership = group_membership(DEFAULT_GROUP);

    let group = membership.group_member.as_ref().unwrap();
    assert_eq!(group.name.as_deref(), Some("groups/GROUP_NAME"));
    // A group membership names no individual user.
    assert!(membership.member.is_none());
}

#[tokio::test]
#[ignore = "requires GOOGLE_ACCESS_TOKEN with chat.memberships scope and real space/group ids"]
async fn create_membership_in_space() -> anyhow::Result<()> {
    dotenv().ok();
    let access_token = env::var("GOOGLE_ACCESS_TOKEN")?;
    let space = env::var("GOOGLE_CHAT_SPACE")?;
    let group = env::var("GOOGLE_CHAT_GROUP")?;

    let membership = create_membership_for_group(&access_token, &space, &group).await?;
    println!("Created membership: {:?}", membership.name);

    Ok(())
}
