//! Database operations for the index module

use async_trait::async_trait;
use chrono::NaiveDateTime;
use libsql::{params, Connection, Row, Rows};
use std::path::Path;
use tracing::{debug, instrument};

use crate::analysis::Category;
use crate::index::error::DbError;
use crate::index::schema;
use crate::index::store::PageStore;
use crate::index::{CategoryScore, KeywordOccurrence, MetadataRecord, Page, DATE_FORMAT};

/// Database manager for the page store
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new database manager
    #[instrument(skip(conn))]
    pub async fn new(conn: Connection) -> Result<Self, DbError> {
        // Initialize schema
        schema::initialize_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Create a new database manager from a path
    pub async fn new_from_path(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let db = libsql::Builder::new_local(path.as_ref())
            .build()
            .await
            .map_err(|e| DbError::Connection(format!("Failed to open database: {}", e)))?;

        let conn = db
            .connect()
            .map_err(|e| DbError::Connection(format!("Failed to connect to database: {}", e)))?;

        Self::new(conn).await
    }

    /// Execute a custom query with parameters
    pub async fn execute_query<P>(&self, sql: &str, params: P) -> Result<Rows, DbError>
    where
        P: libsql::params::IntoParams,
    {
        self.conn
            .query(sql, params)
            .await
            .map_err(|e| DbError::Query(format!("Failed to execute query: {}", e)))
    }

    /// Collect the first column of every row as a string
    async fn collect_strings(mut rows: Rows) -> Result<Vec<String>, DbError> {
        let mut values = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DbError::Data(format!("Failed to read row: {}", e)))?
        {
            values.push(Self::text(&row, 0)?);
        }
        Ok(values)
    }

    /// Fetch the first row of a result set, if any
    async fn first_row(mut rows: Rows) -> Result<Option<Row>, DbError> {
        rows.next()
            .await
            .map_err(|e| DbError::Data(format!("Failed to read row: {}", e)))
    }

    fn text(row: &Row, idx: i32) -> Result<String, DbError> {
        row.get::<String>(idx)
            .map_err(|e| DbError::Data(format!("Failed to read column {}: {}", idx, e)))
    }

    fn integer(row: &Row, idx: i32) -> Result<i64, DbError> {
        row.get::<i64>(idx)
            .map_err(|e| DbError::Data(format!("Failed to read column {}: {}", idx, e)))
    }

    fn row_to_metadata(row: &Row) -> Result<MetadataRecord, DbError> {
        let date = Self::text(row, 4)?;
        let indexed_at = NaiveDateTime::parse_from_str(&date, DATE_FORMAT)
            .map_err(|e| DbError::Data(format!("Invalid date '{}': {}", date, e)))?;

        Ok(MetadataRecord {
            url: Self::text(row, 0)?,
            owner: Self::text(row, 1)?,
            headings: Self::text(row, 2)?,
            paragraphs: Self::text(row, 3)?,
            indexed_at,
        })
    }
}

#[async_trait]
impl PageStore for Database {
    async fn exists(&self, url: &str) -> Result<bool, DbError> {
        Ok(self.get_id(url).await?.is_some())
    }

    async fn id_exists(&self, web_id: &str) -> Result<bool, DbError> {
        let rows = self
            .execute_query(
                "SELECT webpage_ID FROM webpage WHERE webpage_ID = ?",
                params![web_id],
            )
            .await?;
        Ok(Self::first_row(rows).await?.is_some())
    }

    async fn get_id(&self, url: &str) -> Result<Option<String>, DbError> {
        let rows = self
            .execute_query(
                "SELECT webpage_ID FROM webpage WHERE url = ?",
                params![url],
            )
            .await?;

        match Self::first_row(rows).await? {
            Some(row) => Ok(Some(Self::text(&row, 0)?)),
            None => Ok(None),
        }
    }

    async fn get_summary(&self, url: &str) -> Result<Option<String>, DbError> {
        let rows = self
            .execute_query("SELECT summary FROM webpage WHERE url = ?", params![url])
            .await?;

        match Self::first_row(rows).await? {
            Some(row) => Ok(Some(Self::text(&row, 0)?)),
            None => Ok(None),
        }
    }

    async fn get_metadata(&self, url: &str) -> Result<Option<MetadataRecord>, DbError> {
        let rows = self
            .execute_query(
                "SELECT url, owner, heading, paragraph, date FROM Metadata WHERE url = ?",
                params![url],
            )
            .await?;

        match Self::first_row(rows).await? {
            Some(row) => Ok(Some(Self::row_to_metadata(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_keywords(&self, url: &str) -> Result<Vec<KeywordOccurrence>, DbError> {
        let Some(web_id) = self.get_id(url).await? else {
            return Ok(Vec::new());
        };

        let mut rows = self
            .execute_query(
                "SELECT keyword, keyword_count FROM Keywords
                 WHERE webpage_ID = ?
                 ORDER BY keyword_count DESC",
                params![web_id.clone()],
            )
            .await?;

        let mut keywords = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DbError::Data(format!("Failed to read keyword row: {}", e)))?
        {
            keywords.push(KeywordOccurrence {
                keyword: Self::text(&row, 0)?,
                count: Self::integer(&row, 1)?,
                web_id: web_id.clone(),
            });
        }
        Ok(keywords)
    }

    async fn get_categories(&self, url: &str) -> Result<Vec<CategoryScore>, DbError> {
        let Some(web_id) = self.get_id(url).await? else {
            return Ok(Vec::new());
        };

        let mut rows = self
            .execute_query(
                "SELECT category, category_count FROM Category
                 WHERE webpage_ID = ?
                 ORDER BY category_count DESC",
                params![web_id.clone()],
            )
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DbError::Data(format!("Failed to read category row: {}", e)))?
        {
            categories.push(CategoryScore {
                category: Self::text(&row, 0)?,
                count: Self::integer(&row, 1)?,
                web_id: web_id.clone(),
            });
        }
        Ok(categories)
    }

    async fn get_urls_by_category(&self, category: Category) -> Result<Vec<String>, DbError> {
        let rows = self
            .execute_query(
                "SELECT w.url
                 FROM webpage w
                 JOIN Category c ON w.webpage_ID = c.webpage_ID
                 WHERE c.category = ?
                 ORDER BY c.category_count DESC",
                params![category.as_str()],
            )
            .await?;
        Self::collect_strings(rows).await
    }

    async fn recent_urls(&self, limit: usize) -> Result<Vec<String>, DbError> {
        let rows = self
            .execute_query(
                "SELECT url FROM Metadata ORDER BY date ASC LIMIT ?",
                params![limit as i64],
            )
            .await?;
        Self::collect_strings(rows).await
    }

    async fn insert_metadata(&self, record: &MetadataRecord) -> Result<(), DbError> {
        self.conn
            .execute(
                "INSERT INTO Metadata (url, owner, heading, paragraph, date) VALUES (?, ?, ?, ?, ?)",
                params![
                    record.url.as_str(),
                    record.owner.as_str(),
                    record.headings.as_str(),
                    record.paragraphs.as_str(),
                    record.indexed_at.format(DATE_FORMAT).to_string(),
                ],
            )
            .await
            .map_err(|e| DbError::Query(format!("Failed to add metadata: {}", e)))?;
        Ok(())
    }

    async fn insert_page(&self, page: &Page) -> Result<(), DbError> {
        self.conn
            .execute(
                "INSERT INTO webpage (webpage_ID, url, summary) VALUES (?, ?, ?)",
                params![
                    page.web_id.as_str(),
                    page.url.as_str(),
                    page.summary.as_str()
                ],
            )
            .await
            .map_err(|e| DbError::Query(format!("Failed to add page: {}", e)))?;
        debug!("Stored page {} for {}", page.web_id, page.url);
        Ok(())
    }

    async fn insert_keyword(&self, keyword: &KeywordOccurrence) -> Result<(), DbError> {
        self.conn
            .execute(
                "INSERT INTO Keywords (keyword, keyword_count, webpage_ID) VALUES (?, ?, ?)",
                params![
                    keyword.keyword.as_str(),
                    keyword.count,
                    keyword.web_id.as_str()
                ],
            )
            .await
            .map_err(|e| DbError::Query(format!("Failed to add keyword: {}", e)))?;
        Ok(())
    }

    async fn insert_category(&self, score: &CategoryScore) -> Result<(), DbError> {
        self.conn
            .execute(
                "INSERT INTO Category (category, category_count, webpage_ID) VALUES (?, ?, ?)",
                params![score.category.as_str(), score.count, score.web_id.as_str()],
            )
            .await
            .map_err(|e| DbError::Query(format!("Failed to add category: {}", e)))?;
        Ok(())
    }

    async fn update_metadata(
        &self,
        url: &str,
        headings: &str,
        paragraphs: &str,
    ) -> Result<u64, DbError> {
        self.conn
            .execute(
                "UPDATE Metadata SET heading = ?, paragraph = ? WHERE url = ?",
                params![headings, paragraphs, url],
            )
            .await
            .map_err(|e| DbError::Query(format!("Failed to update metadata: {}", e)))
    }
}
