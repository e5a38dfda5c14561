use anyhow::{bail, Result};
use async_seq::prelude::*;
use async_seq::sparse;
use async_seq::task::yield_now;

/// Pretends to ask a remote service whether a user may sign in.
async fn is_active(user: &str) -> Result<bool> {
    yield_now().await;
    if user.is_empty() {
        bail!("empty user name");
    }
    Ok(!user.starts_with('_'))
}

#[async_seq::main]
async fn main() -> Result<()> {
    let users = vec!["ana", "_bot", "lin", "mo"];

    let active = users.filter_async(|user, _, _| is_active(user)).await?;
    println!("active users: {active:?}");

    let all_active = users.every_async(|user, _, _| is_active(user)).await?;
    println!("everyone active: {all_active}");

    let first_bot = users
        .find_index_async(|user, _, _| async move {
            Ok::<_, anyhow::Error>(user.is_some_and(|user| user.starts_with('_')))
        })
        .await?;
    println!("first bot at: {first_bot:?}");

    let slots = sparse!["ana", _, "lin"];
    let lengths = slots
        .map_async(|user, _, _| async move {
            yield_now().await;
            Ok::<_, anyhow::Error>(user.len())
        })
        .await?;
    println!("name lengths: {:?}", lengths.into_slots());

    users
        .for_each_async(|user, index, _| async move {
            println!("{index}: {user}");
            Ok::<_, anyhow::Error>(())
        })
        .await?;

    Ok(())
}
