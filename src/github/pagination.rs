//! Exhaustive pagination over GitHub list endpoints.
//!
//! List endpoints return at most [`PAGE_SIZE`] records per page. The fetcher
//! walks pages sequentially from 1, accumulating records until a partial page
//! proves the listing is complete. A full page always triggers one more fetch,
//! even when the next page turns out empty; completeness costs one extra round
//! trip in the exact-multiple case.

use std::future::Future;

use super::error::CreditsError;

/// Fixed number of records requested per page.
pub const PAGE_SIZE: usize = 100;

/// Outcome of fetching a single page from a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome<T> {
    /// The endpoint returned a page of records.
    Records(Vec<T>),
    /// The endpoint responded with a non-success status; pagination stops and
    /// the records accumulated so far become the final result.
    Halt,
}

/// Fetches every page of a list endpoint, in server order.
///
/// `fetch_page` is invoked with page numbers counting up from 1; each page's
/// fetch waits for the prior page's response, because the termination
/// condition depends on the previous page's size. A [`PageOutcome::Halt`]
/// ends pagination with the partial result rather than an error; this is the
/// deliberate silent partial-result policy, with no retry at this layer.
///
/// # Errors
///
/// Propagates transport-level failures from `fetch_page` unchanged.
pub async fn fetch_exhaustively<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, CreditsError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PageOutcome<T>, CreditsError>>,
{
    let mut records = Vec::new();
    let mut page = 1_u32;

    loop {
        match fetch_page(page).await? {
            PageOutcome::Halt => {
                tracing::debug!(page, collected = records.len(), "pagination halted early");
                return Ok(records);
            }
            PageOutcome::Records(batch) => {
                let last_page = batch.len() < PAGE_SIZE;
                records.extend(batch);
                if last_page {
                    tracing::debug!(page, collected = records.len(), "pagination complete");
                    return Ok(records);
                }
                page = page.saturating_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{PAGE_SIZE, PageOutcome, fetch_exhaustively};
    use crate::github::error::CreditsError;

    fn full_page(start: usize) -> Vec<usize> {
        (start..start.saturating_add(PAGE_SIZE)).collect()
    }

    #[tokio::test]
    async fn returns_single_partial_page_after_one_request() {
        let calls = RefCell::new(0_u32);
        let records = fetch_exhaustively(|page| {
            *calls.borrow_mut() += 1;
            assert_eq!(page, 1);
            async { Ok(PageOutcome::Records(vec![10_usize, 20, 30])) }
        })
        .await
        .expect("pagination should succeed");

        assert_eq!(records, vec![10, 20, 30]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn full_page_triggers_exactly_one_more_fetch() {
        let calls = RefCell::new(0_u32);
        let records = fetch_exhaustively(|page| {
            *calls.borrow_mut() += 1;
            async move {
                match page {
                    1 => Ok(PageOutcome::Records(full_page(0))),
                    _ => Ok(PageOutcome::Records(Vec::new())),
                }
            }
        })
        .await
        .expect("pagination should succeed");

        assert_eq!(records.len(), PAGE_SIZE);
        assert_eq!(*calls.borrow(), 2, "a full page must be re-checked");
    }

    #[tokio::test]
    async fn accumulates_pages_in_server_order() {
        let records = fetch_exhaustively(|page| async move {
            match page {
                1 => Ok(PageOutcome::Records(full_page(0))),
                2 => Ok(PageOutcome::Records(full_page(PAGE_SIZE))),
                _ => Ok(PageOutcome::Records(vec![usize::MAX])),
            }
        })
        .await
        .expect("pagination should succeed");

        assert_eq!(records.len(), PAGE_SIZE * 2 + 1);
        let expected: Vec<usize> = (0..PAGE_SIZE * 2).chain([usize::MAX]).collect();
        assert_eq!(records, expected);
    }

    #[tokio::test]
    async fn halt_keeps_previously_accumulated_records() {
        let records = fetch_exhaustively(|page| async move {
            match page {
                1 => Ok(PageOutcome::Records(full_page(0))),
                _ => Ok(PageOutcome::Halt),
            }
        })
        .await
        .expect("pagination should succeed");

        assert_eq!(records, full_page(0));
    }

    #[tokio::test]
    async fn halt_on_first_page_yields_empty_result() {
        let records = fetch_exhaustively(|_page| async {
            Ok(PageOutcome::<usize>::Halt)
        })
        .await
        .expect("pagination should succeed");

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let error = fetch_exhaustively(|_page| async {
            Err::<PageOutcome<usize>, _>(CreditsError::Network {
                message: "connection reset".to_owned(),
            })
        })
        .await
        .expect_err("pagination should fail");

        assert!(matches!(error, CreditsError::Network { .. }));
    }
}
