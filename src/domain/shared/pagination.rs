/// A validated page window. `page` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    size: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Invalid page number: {0}, page must be at least 1")]
    InvalidPage(i64),
    #[error("Invalid page size: {0}, size must be at least 1")]
    InvalidSize(i64),
    #[error("Page {page} with size {size} is out of range")]
    OutOfRange { page: i64, size: i64 },
}

impl Pagination {
    pub fn new(page: i64, size: i64) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::InvalidPage(page));
        }

        if size < 1 {
            return Err(PaginationError::InvalidSize(size));
        }

        // Offset is bound as a signed 64 bit value by the database
        (page - 1)
            .checked_mul(size)
            .ok_or(PaginationError::OutOfRange { page, size })?;

        Ok(Self { page, size })
    }

    /// The first row only
    pub const fn single() -> Self {
        Self { page: 1, size: 1 }
    }

    pub const fn page(&self) -> i64 {
        self.page
    }

    pub const fn size(&self) -> i64 {
        self.size
    }

    pub const fn offset(&self) -> u64 {
        ((self.page - 1) * self.size).unsigned_abs()
    }

    pub const fn limit(&self) -> u64 {
        self.size.unsigned_abs()
    }
}
