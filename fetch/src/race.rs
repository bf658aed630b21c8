//! First-to-complete race between a unit of work and a deadline.
//!
//! The loser is dropped before [`race`] returns. For a `reqwest` send future
//! that means the connection is torn down and no response can be delivered
//! afterwards, so a late arrival cannot produce a second outcome.

use futures_util::future::{Either, select};
use std::future::Future;
use std::pin::pin;

/// Which side of the race completed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raced<T> {
    Finished(T),
    Expired,
}

/// Poll `work` and `deadline` together and resolve with whichever finishes first.
///
/// When both are ready on the same poll, `work` wins.
pub async fn race<W, D>(work: W, deadline: D) -> Raced<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    let work = pin!(work);
    let deadline = pin!(deadline);
    match select(work, deadline).await {
        Either::Left((value, _deadline)) => Raced::Finished(value),
        Either::Right(((), _work)) => Raced::Expired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;
    use tokio::time::sleep;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn work_first_wins() {
        let result = race(
            async {
                sleep(Duration::from_millis(10)).await;
                "done"
            },
            sleep(Duration::from_millis(50)),
        )
        .await;
        assert_eq!(result, Raced::Finished("done"));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_first_expires() {
        let result = race(
            async {
                sleep(Duration::from_secs(10)).await;
                "late"
            },
            sleep(Duration::from_millis(50)),
        )
        .await;
        assert_eq!(result, Raced::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn losing_work_never_runs_its_tail() {
        let delivered = Rc::new(Cell::new(false));
        let flag = Rc::clone(&delivered);

        let result = race(
            async move {
                sleep(Duration::from_millis(60)).await;
                flag.set(true);
            },
            sleep(Duration::from_millis(50)),
        )
        .await;
        assert_eq!(result, Raced::Expired);

        // Give the abandoned work more than enough time to have finished.
        sleep(Duration::from_secs(1)).await;
        assert!(!delivered.get());
    }

    #[tokio::test(start_paused = true)]
    async fn loser_is_dropped_before_return() {
        let dropped = Rc::new(Cell::new(false));
        let guard = DropFlag(Rc::clone(&dropped));

        let result = race(
            async move {
                let _guard = guard;
                sleep(Duration::from_secs(10)).await;
            },
            sleep(Duration::from_millis(1)),
        )
        .await;
        assert_eq!(result, Raced::Expired);
        assert!(dropped.get());
    }

    #[tokio::test(start_paused = true)]
    async fn ready_work_beats_ready_deadline() {
        let result = race(async { 7 }, async {}).await;
        assert_eq!(result, Raced::Finished(7));
    }
}
