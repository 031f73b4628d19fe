//! Handing work back to the UI thread.
//!
//! The adapter never calls a subscriber from its worker thread. Instead it
//! posts a [`UiTask`] through a [`UiDispatcher`] supplied by the host's
//! windowing layer, which runs it on the thread that owns the UI.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use webview_logger_common::DispatchError;

/// A unit of work to run on the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Posts tasks to the UI-owning thread.
pub trait UiDispatcher: Send + Sync {
    fn dispatch(&self, task: UiTask) -> Result<(), DispatchError>;
}

/// Create a channel-backed dispatcher and the queue the UI thread drains.
///
/// For hosts without an event loop proxy, and for tests.
pub fn ui_queue() -> (UiQueueSender, UiQueue) {
    let (sender, receiver) = mpsc::channel();
    (UiQueueSender { sender }, UiQueue { receiver })
}

#[derive(Clone)]
pub struct UiQueueSender {
    sender: mpsc::Sender<UiTask>,
}

impl UiDispatcher for UiQueueSender {
    fn dispatch(&self, task: UiTask) -> Result<(), DispatchError> {
        self.sender.send(task).map_err(|_| DispatchError::Closed)
    }
}

/// Receiving end of [`ui_queue`]. Owned by the UI thread.
pub struct UiQueue {
    receiver: mpsc::Receiver<UiTask>,
}

impl UiQueue {
    /// Run every task queued so far without blocking. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            ran += 1;
        }
        ran
    }

    /// Run tasks as they arrive until `done` returns true or `timeout` elapses.
    ///
    /// Returns the final value of `done`.
    pub fn run_until(&self, timeout: Duration, mut done: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if done() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            match self.receiver.recv_timeout(deadline - now) {
                Ok(task) => task(),
                Err(_) => return done(),
            }
        }
    }
}

#[cfg(feature = "winit")]
mod winit_proxy {
    use std::fmt;

    use winit::event_loop::EventLoopProxy;

    use super::{DispatchError, UiDispatcher, UiTask};

    /// User event carrying a [`UiTask`] through a winit event loop.
    ///
    /// Run it from `ApplicationHandler::user_event`.
    pub struct UiEvent(UiTask);

    impl UiEvent {
        pub fn run(self) {
            (self.0)()
        }
    }

    impl fmt::Debug for UiEvent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("UiEvent")
        }
    }

    impl UiDispatcher for EventLoopProxy<UiEvent> {
        fn dispatch(&self, task: UiTask) -> Result<(), DispatchError> {
            self.send_event(UiEvent(task))
                .map_err(|_| DispatchError::Closed)
        }
    }
}

#[cfg(feature = "winit")]
pub use winit_proxy::UiEvent;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[test]
    fn tasks_run_on_the_draining_thread() {
        let (sender, queue) = ui_queue();
        let ran_on = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&ran_on);
        thread::spawn(move || {
            sender
                .dispatch(Box::new(move || {
                    *slot.lock().unwrap() = Some(thread::current().id());
                }))
                .unwrap();
        })
        .join()
        .unwrap();

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*ran_on.lock().unwrap(), Some(thread::current().id()));
    }

    #[test]
    fn tasks_run_in_dispatch_order() {
        let (sender, queue) = ui_queue();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for i in 0..5 {
            let seen = Arc::clone(&seen);
            sender
                .dispatch(Box::new(move || seen.lock().unwrap().push(i)))
                .unwrap();
        }
        assert_eq!(queue.run_pending(), 5);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn run_until_times_out() {
        let (_sender, queue) = ui_queue();
        assert!(!queue.run_until(Duration::from_millis(20), || false));
    }

    #[test]
    fn run_until_stops_when_done() {
        let (sender, queue) = ui_queue();
        let flag = Arc::new(Mutex::new(false));
        let set = Arc::clone(&flag);
        sender
            .dispatch(Box::new(move || *set.lock().unwrap() = true))
            .unwrap();
        assert!(queue.run_until(Duration::from_secs(5), || *flag.lock().unwrap()));
    }

    #[test]
    fn dispatch_fails_once_queue_is_gone() {
        let (sender, queue) = ui_queue();
        drop(queue);
        let err = sender.dispatch(Box::new(|| {})).unwrap_err();
        assert!(matches!(err, DispatchError::Closed));
    }
}
