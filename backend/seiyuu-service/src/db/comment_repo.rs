use crate::models::{Comment, PostId};
use sqlx::{PgExecutor, PgPool};

/// Comments of a post, oldest first
pub async fn list_comments(pool: &PgPool, post_id: PostId) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT "id", "post_Id", "content", "created_at"
        FROM "Comments"
        WHERE "post_Id" = $1
        ORDER BY "created_at" ASC, "id" ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Fails with a foreign-key violation when the post is gone
pub async fn create_comment(
    pool: &PgPool,
    post_id: PostId,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO "Comments" ("post_Id", "content")
        VALUES ($1, $2)
        RETURNING "id", "post_Id", "content", "created_at"
        "#,
    )
    .bind(post_id)
    .bind(content)
    .fetch_one(pool)
    .await
}

/// Returns the number of removed comments
pub async fn delete_comments_by_post<'e, E>(executor: E, post_id: PostId) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(r#"DELETE FROM "Comments" WHERE "post_Id" = $1"#)
        .bind(post_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
