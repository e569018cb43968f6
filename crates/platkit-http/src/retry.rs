//! Refresh-once replay for authenticated calls.
//!
//! An access token can expire between calls. When the wrapped operation
//! fails with an unauthorized error, the token is refreshed and the same
//! operation is replayed exactly once. There is no backoff and no second
//! refresh: a replay that fails again is the final answer.
//!
//! The operation runs twice in that case, so it must be safe to repeat.

use std::future::Future;

/// Run `op`; on an error matching `is_unauthorized`, await `refresh` and run
/// `op` once more.
///
/// Any other error from the first attempt, a failed refresh, or the replay's
/// error is returned unchanged.
pub async fn with_token_refresh<T, E, Op, Fut, Refresh, RefreshFut, P>(
    mut op: Op,
    refresh: Refresh,
    is_unauthorized: P,
) -> Result<T, E>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    Refresh: FnOnce() -> RefreshFut,
    RefreshFut: Future<Output = Result<(), E>>,
    P: Fn(&E) -> bool,
{
    match op().await {
        Err(e) if is_unauthorized(&e) => {
            tracing::warn!("unauthorized response, refreshing access token and replaying once");
            refresh().await?;
            op().await
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HttpError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn unauthorized() -> HttpError {
        HttpError::Status {
            status: 401,
            body:   serde_json::json!({ "message": "invalid oauth token" }),
        }
    }

    #[tokio::test]
    async fn test_success_passes_through_without_refresh() {
        let calls = &AtomicU32::new(0);
        let refreshes = &AtomicU32::new(0);

        let result = with_token_refresh(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, HttpError>("ok")
            },
            move || async move {
                refreshes.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
            HttpError::is_unauthorized,
        )
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unauthorized_then_success_refreshes_once() {
        let calls = &AtomicU32::new(0);
        let refreshes = &AtomicU32::new(0);

        let result = with_token_refresh(
            move || async move {
                match calls.fetch_add(1, Ordering::SeqCst) {
                    0 => Err(unauthorized()),
                    _ => Ok("second"),
                }
            },
            move || async move {
                refreshes.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
            HttpError::is_unauthorized,
        )
        .await;

        assert_eq!(result.unwrap(), "second");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_twice_surfaces_replay_error() {
        let calls = &AtomicU32::new(0);
        let refreshes = &AtomicU32::new(0);

        let result: Result<(), HttpError> = with_token_refresh(
            move || async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                Err(HttpError::Status {
                    status: 401,
                    body:   serde_json::json!({ "attempt": n }),
                })
            },
            move || async move {
                refreshes.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
            HttpError::is_unauthorized,
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.body().unwrap()["attempt"], 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_other_failure_is_not_retried() {
        let calls = &AtomicU32::new(0);
        let refreshes = &AtomicU32::new(0);

        let result: Result<(), HttpError> = with_token_refresh(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(HttpError::Status {
                    status: 500,
                    body:   serde_json::Value::Null,
                })
            },
            move || async move {
                refreshes.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
            HttpError::is_unauthorized,
        )
        .await;

        assert_eq!(result.unwrap_err().status(), Some(500));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_refresh_skips_replay() {
        let calls = &AtomicU32::new(0);

        let result: Result<(), HttpError> = with_token_refresh(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(unauthorized())
            },
            move || async move { Err(HttpError::Refresh("refresh token revoked".into())) },
            HttpError::is_unauthorized,
        )
        .await;

        assert!(matches!(result.unwrap_err(), HttpError::Refresh(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_custom_predicate() {
        let calls = &AtomicU32::new(0);

        let result = with_token_refresh(
            move || async move {
                match calls.fetch_add(1, Ordering::SeqCst) {
                    0 => Err("expired"),
                    _ => Ok(7),
                }
            },
            move || async move { Ok(()) },
            |e: &&str| *e == "expired",
        )
        .await;

        assert_eq!(result.unwrap(), 7);
    }
}
