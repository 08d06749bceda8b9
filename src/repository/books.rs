//! Books repository: CRUD plus the catalog search query

use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, AuthorDto, Book, BookRequest, PageQuery},
};

const BOOK_SELECT: &str = r#"
    SELECT b.id, b.title, b.price, b.genre_id, g.name AS genre_name,
           b.created_on, b.updated_on
    FROM book b
    JOIN genre g ON g.id = b.genre_id
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Get a book with its genre and authors
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!("{} WHERE b.id = $1", BOOK_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match book {
            Some(mut book) => {
                book.authors = self.book_authors(book.id).await?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// List books, paged, with their total count
    pub async fn find_all(&self, page: &PageQuery) -> AppResult<(Vec<Book>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await?;

        let mut books = sqlx::query_as::<_, Book>(&format!(
            "{} ORDER BY b.title, b.id LIMIT $1 OFFSET $2",
            BOOK_SELECT
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        for book in &mut books {
            book.authors = self.book_authors(book.id).await?;
        }

        Ok((books, total))
    }

    /// Check whether a book row exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM book WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Load all authors for a book via the book_authors junction table
    async fn book_authors(&self, book_id: Uuid) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT a.id, a.name
            FROM book_authors ba
            JOIN author a ON a.id = ba.author_id
            WHERE ba.book_id = $1
            ORDER BY a.name
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Case-insensitive substring search across title, author name and genre
    /// name, paged. DISTINCT because the author join multiplies rows.
    pub async fn search(&self, criteria: &str, page: &PageQuery) -> AppResult<(Vec<Book>, i64)> {
        let pattern = format!("%{}%", criteria);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT b.id)
            FROM book b
            JOIN genre g ON g.id = b.genre_id
            JOIN book_authors ba ON ba.book_id = b.id
            JOIN author a ON a.id = ba.author_id
            WHERE b.title ILIKE $1 OR g.name ILIKE $1 OR a.name ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let mut books = sqlx::query_as::<_, Book>(
            r#"
            SELECT DISTINCT b.id, b.title, b.price, b.genre_id, g.name AS genre_name,
                   b.created_on, b.updated_on
            FROM book b
            JOIN genre g ON g.id = b.genre_id
            JOIN book_authors ba ON ba.book_id = b.id
            JOIN author a ON a.id = ba.author_id
            WHERE b.title ILIKE $1 OR g.name ILIKE $1 OR a.name ILIKE $1
            ORDER BY b.title, b.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        for book in &mut books {
            book.authors = self.book_authors(book.id).await?;
        }

        Ok((books, total))
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a new book; the store assigns the id and timestamps.
    ///
    /// Embedded author/genre rows are written as provided when their ids are
    /// new; existing ids keep their stored names (no existence check first).
    pub async fn insert(&self, book: &BookRequest) -> AppResult<Uuid> {
        let mut tx = self.pool.begin().await?;

        self.ensure_genre(&mut tx, book).await?;

        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO book (title, price, genre_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&book.title)
        .bind(book.price)
        .bind(book.genre.id)
        .fetch_one(&mut *tx)
        .await?;

        self.sync_book_authors(&mut tx, id, &book.authors).await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Persist a replacement record under an existing id
    pub async fn replace(&self, id: Uuid, book: &BookRequest) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        self.ensure_genre(&mut tx, book).await?;

        sqlx::query(
            "UPDATE book SET title = $1, price = $2, genre_id = $3, updated_on = now() WHERE id = $4",
        )
        .bind(&book.title)
        .bind(book.price)
        .bind(book.genre.id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        self.sync_book_authors(&mut tx, id, &book.authors).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a book and its junction rows
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn ensure_genre(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: &BookRequest,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO genre (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(book.genre.id)
            .bind(&book.genre.name)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Replace all authors for a book: delete existing junction rows, insert
    /// author rows that are new, then relink.
    async fn sync_book_authors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book_id: Uuid,
        authors: &[AuthorDto],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
            .bind(book_id)
            .execute(&mut **tx)
            .await?;

        for author in authors {
            sqlx::query("INSERT INTO author (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
                .bind(author.id)
                .bind(&author.name)
                .execute(&mut **tx)
                .await?;

            sqlx::query(
                "INSERT INTO book_authors (book_id, author_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(book_id)
            .bind(author.id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
