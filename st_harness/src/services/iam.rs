use aws_sdk_iam::Client;
use aws_sdk_iam::types::User;
use types::ResourceName;

use crate::error::{Error, Result, sdk};
use crate::wait::{WaitPolicy, wait_until};

/// # Errors
///
/// If the request fails or the response has no user.
pub async fn create_user(client: &Client, name: &ResourceName) -> Result<User> {
    let output = client
        .create_user()
        .user_name(name.as_str())
        .send()
        .await
        .map_err(sdk("CreateUser"))?;

    output.user.ok_or(Error::MissingField {
        operation: "CreateUser",
        field: "User",
    })
}

/// Users on the first `ListUsers` page whose name is `name`.
///
/// # Errors
///
/// If the request fails.
pub async fn first_page_users_named(
    client: &Client,
    name: &ResourceName,
) -> Result<Vec<User>> {
    let output = client
        .list_users()
        .send()
        .await
        .map_err(sdk("ListUsers"))?;

    Ok(users_named(output.users(), name))
}

fn users_named(users: &[User], name: &ResourceName) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.user_name() == name.as_str())
        .cloned()
        .collect()
}

/// Stream every user across all `ListUsers` pages into `on_user`.
///
/// Returns how many users were delivered.
///
/// # Errors
///
/// If a page request fails. Users delivered before the failure stay
/// delivered.
pub async fn for_each_user<F>(client: &Client, mut on_user: F) -> Result<usize>
where
    F: FnMut(&User),
{
    let mut users = client.list_users().into_paginator().items().send();
    let mut delivered = 0;

    while let Some(user) = users.next().await {
        let user = user.map_err(sdk("ListUsers"))?;
        on_user(&user);
        delivered += 1;
    }

    Ok(delivered)
}

/// Wait until a full paginated listing includes `name`.
///
/// Each attempt re-reads every page, so a user that becomes visible late is
/// still picked up within the window.
///
/// # Errors
///
/// [`Error::Timeout`] if no listing within the window included the user,
/// or the first failed page request.
pub async fn wait_for_listed_user(
    client: &Client,
    name: &ResourceName,
    policy: &WaitPolicy,
) -> Result<u32> {
    let what = "user to appear in ListUsers pages";

    wait_until(policy, what, move || async move {
        let mut found = false;
        let seen = for_each_user(client, |user| {
            if user.user_name() == name.as_str() {
                found = true;
            }
        })
        .await?;

        tracing::debug!(seen, found, "scanned users");
        Ok(found)
    })
    .await
}

/// # Errors
///
/// If the request fails.
pub async fn delete_user(client: &Client, name: &ResourceName) -> Result<()> {
    client
        .delete_user()
        .user_name(name.as_str())
        .send()
        .await
        .map_err(sdk("DeleteUser"))?;

    Ok(())
}
