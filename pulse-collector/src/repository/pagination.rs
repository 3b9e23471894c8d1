//! Token-based pagination

use std::future::Future;

use crate::error::UpstreamError;

/// Fetch pages until the service stops returning a continuation token
///
/// `fetch` receives the token of the previous page (`None` for the first)
/// and returns the page's items together with the next token. An empty
/// token ends pagination like an absent one. A token identical to the one
/// just sent would loop forever and is reported as a malformed response.
pub async fn collect_pages<T, F, Fut>(
    service: &'static str,
    operation: &'static str,
    mut fetch: F,
) -> Result<Vec<T>, UpstreamError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<String>), UpstreamError>>,
{
    let mut items = Vec::new();
    let mut token: Option<String> = None;

    loop {
        let (page, next) = fetch(token.clone()).await?;
        items.extend(page);

        match next.filter(|next| !next.is_empty()) {
            Some(next) if token.as_deref() == Some(next.as_str()) => {
                return Err(UpstreamError::malformed(
                    service,
                    operation,
                    "pagination token repeated",
                ));
            }
            Some(next) => token = Some(next),
            None => return Ok(items),
        }
    }
}
