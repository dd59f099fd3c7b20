//! Player-facing read services: the cumulative win/loss/draw ranking.

use sea_orm::ConnectionTrait;

use crate::error::AppError;
use crate::repos::players::{self, Player};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 50;

/// One page of the ranking, ordered by wins desc, draws desc, losses asc.
#[derive(Debug, Clone)]
pub struct RankingPage {
    pub players: Vec<Player>,
    pub total: u64,
    /// 1-based page actually served (after clamping).
    pub page: u64,
    pub page_size: u64,
}

/// Fetch a ranking page. The page number is 1-based and clamped to the last
/// page; the page size is bounded by [`MAX_PAGE_SIZE`].
pub async fn ranking<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Option<u64>,
    page_size: Option<u64>,
) -> Result<RankingPage, AppError> {
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let mut page = page.unwrap_or(1).max(1);

    let (mut players, total) =
        players::ranking_page(conn, (page - 1) * page_size, page_size).await?;

    // Past-the-end pages clamp back to the last page (page 1 when empty).
    let last_page = total.div_ceil(page_size).max(1);
    if page > last_page {
        page = last_page;
        let refetched = players::ranking_page(conn, (page - 1) * page_size, page_size).await?;
        players = refetched.0;
    }

    Ok(RankingPage {
        players,
        total,
        page,
        page_size,
    })
}
