use crate::error::{DataError, Result};
use std::future::Future;
use tracing::debug;

/// Drive a cursor-paginated listing to completion.
///
/// `fetch` receives the cursor of the previous page (`None` for the first one) and
/// returns the page items plus the next cursor. Pages are requested strictly one
/// after another and concatenated in request order. The loop ends on the first page
/// without a cursor; an empty cursor counts as absent. Any failure aborts the whole
/// listing and the items gathered so far are dropped.
///
/// With `max_pages` set, a page that still carries a cursor once the cap is reached
/// fails with [`DataError::PageLimitExceeded`]. The cap counts fetched pages,
/// including the first, and the first page is always fetched, so `Some(0)`
/// behaves like `Some(1)`.
pub async fn collect_pages<T, F, Fut>(max_pages: Option<usize>, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<String>)>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let (page, next) = fetch(cursor.take()).await?;
        pages += 1;
        debug!("Fetched page {} with {} items", pages, page.len());
        items.extend(page);

        match next.filter(|c| !c.is_empty()) {
            None => break,
            Some(_) if max_pages.is_some_and(|max| pages >= max) => {
                return Err(DataError::PageLimitExceeded(pages));
            }
            Some(next) => cursor = Some(next),
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_concatenates_pages_until_cursor_missing() {
        let seen = Mutex::new(Vec::new());

        let items = collect_pages(None, |cursor| {
            seen.lock().unwrap().push(cursor.clone());
            async move {
                match cursor.as_deref() {
                    None => Ok((vec![1, 2], Some("abc".to_string()))),
                    Some("abc") => Ok((vec![3], None)),
                    Some(other) => panic!("unexpected cursor {}", other),
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(*seen.lock().unwrap(), vec![None, Some("abc".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_cursor_terminates() {
        let calls = AtomicUsize::new(0);

        let items = collect_pages(None, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok((vec!["a"], Some(String::new()))) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["a"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_discards_partial_results() {
        let calls = AtomicUsize::new(0);

        let result: Result<Vec<u32>> = collect_pages(None, |cursor| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                match cursor {
                    None => Ok((vec![1], Some("next".to_string()))),
                    Some(_) => Err(DataError::network("connection reset")),
                }
            }
        })
        .await;

        assert_eq!(result, Err(DataError::network("connection reset")));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_page_cap() {
        let calls = AtomicUsize::new(0);

        let result: Result<Vec<u32>> = collect_pages(Some(3), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok((vec![0], Some("again".to_string()))) }
        })
        .await;

        assert_eq!(result, Err(DataError::PageLimitExceeded(3)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_cap_still_fetches_first_page() {
        let items = collect_pages(Some(0), |_| async { Ok((vec![1], None)) })
            .await
            .unwrap();
        assert_eq!(items, vec![1]);

        let result: Result<Vec<u32>> =
            collect_pages(Some(0), |_| async { Ok((vec![1], Some("more".to_string()))) }).await;
        assert_eq!(result, Err(DataError::PageLimitExceeded(1)));
    }

    #[tokio::test]
    async fn test_page_cap_not_hit_when_last_page_fits() {
        let items = collect_pages(Some(2), |cursor| async move {
            match cursor {
                None => Ok((vec![1], Some("p2".to_string()))),
                Some(_) => Ok((vec![2], None)),
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2]);
    }
}
