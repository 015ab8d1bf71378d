//! gui/update/util.rs
use iced::futures::channel::oneshot;

/// Run a blocking function on a helper thread and await the result.
///
/// Keeps file IO (tag reads, image decode) off the UI thread.
/// `None` means the worker panicked before returning.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> T + Send + 'static) -> Option<T>
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<T>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await.ok()
}
