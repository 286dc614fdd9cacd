//! Batched author lookup shared by the post and comment services

use std::collections::BTreeSet;

use blog_core::Snowflake;

use crate::dto::mappers::AuthorMap;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Load every distinct author in `ids` with one repository call
pub(crate) async fn load_authors(
    ctx: &ServiceContext,
    ids: impl IntoIterator<Item = Snowflake>,
) -> ServiceResult<AuthorMap> {
    let unique: Vec<Snowflake> = ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    let users = ctx.user_repo().find_by_ids(&unique).await?;
    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}
