use crate::models::{Post, PostDraft, PostId, PostPatch, SeiyuuId, SortOrder};
use sqlx::{PgExecutor, PgPool};

const POST_COLUMNS: &str =
    r#""id", "title", "user", "seiyuu", "content", "image", "video", "created_at", "upvotes""#;

/// All posts in the requested order. Ties break on id so pages are stable.
pub async fn list_posts(pool: &PgPool, sort: SortOrder) -> Result<Vec<Post>, sqlx::Error> {
    let order_by = match sort {
        SortOrder::Newest => r#""created_at" DESC, "id" DESC"#,
        SortOrder::Oldest => r#""created_at" ASC, "id" ASC"#,
        SortOrder::Upvotes => r#""upvotes" DESC, "id" DESC"#,
    };

    sqlx::query_as::<_, Post>(&format!(
        r#"SELECT {} FROM "Posts" ORDER BY {}"#,
        POST_COLUMNS, order_by
    ))
    .fetch_all(pool)
    .await
}

/// Posts about one voice actor, newest first
pub async fn list_posts_by_seiyuu(
    pool: &PgPool,
    seiyuu: SeiyuuId,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"SELECT {} FROM "Posts" WHERE "seiyuu" = $1 ORDER BY "created_at" DESC, "id" DESC"#,
        POST_COLUMNS
    ))
    .bind(seiyuu)
    .fetch_all(pool)
    .await
}

pub async fn find_post_by_id(pool: &PgPool, id: PostId) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"SELECT {} FROM "Posts" WHERE "id" = $1"#,
        POST_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a new post; `upvotes` and `created_at` come from column defaults
pub async fn create_post(pool: &PgPool, draft: &PostDraft) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        INSERT INTO "Posts" ("title", "user", "seiyuu", "content", "image", "video")
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        POST_COLUMNS
    ))
    .bind(&draft.title)
    .bind(&draft.user)
    .bind(draft.seiyuu)
    .bind(&draft.content)
    .bind(&draft.image)
    .bind(&draft.video)
    .fetch_one(pool)
    .await
}

/// Partial update. A NULL parameter keeps the column; an empty string clears it.
pub async fn update_post(
    pool: &PgPool,
    id: PostId,
    patch: &PostPatch,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        UPDATE "Posts"
        SET "title" = COALESCE($2, "title"),
            "content" = CASE WHEN $3::TEXT IS NULL THEN "content" ELSE NULLIF($3, '') END,
            "image" = CASE WHEN $4::TEXT IS NULL THEN "image" ELSE NULLIF($4, '') END,
            "video" = CASE WHEN $5::TEXT IS NULL THEN "video" ELSE NULLIF($5, '') END
        WHERE "id" = $1
        RETURNING {}
        "#,
        POST_COLUMNS
    ))
    .bind(id)
    .bind(&patch.title)
    .bind(&patch.content)
    .bind(&patch.image)
    .bind(&patch.video)
    .fetch_optional(pool)
    .await
}

/// Server-side increment; concurrent calls never lose an update
pub async fn increment_upvotes(pool: &PgPool, id: PostId) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"UPDATE "Posts" SET "upvotes" = "upvotes" + 1 WHERE "id" = $1 RETURNING "upvotes""#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_post<'e, E>(executor: E, id: PostId) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(r#"DELETE FROM "Posts" WHERE "id" = $1"#)
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
