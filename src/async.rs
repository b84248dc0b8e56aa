/// Async utilities.
use std::future::Future;

use itertools::Itertools;
use tokio::task::JoinSet;

use crate::error::LuminaErr;

/// Upper bound of futures in flight at once.
const CHUNK_SIZE: usize = 50;

/// try_for_each spawns a future for each item in the iterator and waits for all of them to complete.
/// If any of the futures return an error, try_for_each will return that error.
/// The futures are spawned in chunks of [`CHUNK_SIZE`].
pub async fn try_for_each<T, I, F, Fut>(input: I, f: F) -> Result<(), LuminaErr>
where
    I: IntoIterator<Item = T>,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<(), LuminaErr>> + Send + 'static,
    T: Send + 'static,
{
    for chunk in &input.into_iter().chunks(CHUNK_SIZE) {
        let mut set = JoinSet::new();
        for item in chunk {
            set.spawn(f(item));
        }
        while let Some(res) = set.join_next().await {
            res??;
        }
    }

    Ok(())
}
