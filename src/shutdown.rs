use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;

/// Install a handler that cancels in-flight listing on SIGTERM or SIGINT.
///
/// Returns a `CancellationToken` that is cancelled when either signal is
/// received. Pass it to [`JobModel::list`](crate::model::JobModel::list).
pub fn install_shutdown_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(term), Ok(int)) => (term, int),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "Failed to install signal handlers");
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, cancelling");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT, cancelling");
            }
        }

        token_clone.cancel();
    });

    token
}
