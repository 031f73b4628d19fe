//! The capture adapter.
//!
//! `CaptureAdapter` is a cheap, clonable handle. Clones share one worker
//! thread, one subscriber slot and one configuration, so a clone can be moved
//! into each webview callback.

use std::sync::{Arc, Mutex, Weak};

use tracing::debug;
use webview_logger_common::{CaptureEvent, Result};
use webview_logger_config::{validation, LoggerConfig};

use crate::dispatch::UiDispatcher;
use crate::serial::SerialQueue;
use crate::subscriber::{StatusSubscriber, SubscriberSlot};

#[cfg(feature = "wry")]
mod binding;
mod handlers;
mod pipeline;


use pipeline::Pipeline;

#[derive(Clone)]
pub struct CaptureAdapter {
    inner: Arc<Inner>,
}

struct Inner {
    /// Shared with worker jobs. Jobs never hold `Inner` itself, so the last
    /// adapter handle is never dropped on the worker.
    pipeline: Arc<Pipeline>,
    queue: SerialQueue,
}

impl CaptureAdapter {
    /// Start building an adapter that delivers through `dispatcher`.
    pub fn builder(dispatcher: impl UiDispatcher + 'static) -> CaptureAdapterBuilder {
        CaptureAdapterBuilder {
            config: LoggerConfig::default(),
            dispatcher: Arc::new(dispatcher),
            subscriber: None,
            record_events: false,
        }
    }

    /// An adapter with default configuration and no subscriber yet.
    pub fn new(dispatcher: impl UiDispatcher + 'static) -> Result<Self> {
        Self::builder(dispatcher).build()
    }

    /// Register the observer for captured statuses, replacing any previous one.
    ///
    /// Only a weak reference is kept: dropping the last `Arc` unsubscribes.
    pub fn subscribe<S>(&self, subscriber: &Arc<S>)
    where
        S: StatusSubscriber + 'static,
    {
        self.inner.pipeline.subscriber.set(downgrade(subscriber));
    }

    pub fn unsubscribe(&self) {
        self.inner.pipeline.subscriber.clear();
    }

    pub fn has_subscriber(&self) -> bool {
        self.inner.pipeline.subscriber.get().is_some()
    }

    /// The message channel page script posts to.
    pub fn channel(&self) -> &str {
        &self.inner.pipeline.config.capture.channel
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.inner.pipeline.config
    }

    /// Take the capture events recorded so far.
    ///
    /// Always empty unless the adapter was built with
    /// [`CaptureAdapterBuilder::record_events`].
    pub fn drain_events(&self) -> Vec<CaptureEvent> {
        match &self.inner.pipeline.events {
            Some(events) => events
                .lock()
                .map(|mut events| std::mem::take(&mut *events))
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }
}

pub struct CaptureAdapterBuilder {
    config: LoggerConfig,
    dispatcher: Arc<dyn UiDispatcher>,
    subscriber: Option<Weak<dyn StatusSubscriber>>,
    record_events: bool,
}

impl CaptureAdapterBuilder {
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Register the subscriber up front. Same semantics as
    /// [`CaptureAdapter::subscribe`].
    pub fn subscriber<S>(mut self, subscriber: &Arc<S>) -> Self
    where
        S: StatusSubscriber + 'static,
    {
        self.subscriber = Some(downgrade(subscriber));
        self
    }

    /// Keep a log of [`CaptureEvent`]s for [`CaptureAdapter::drain_events`].
    ///
    /// The log grows until drained.
    pub fn record_events(mut self, record: bool) -> Self {
        self.record_events = record;
        self
    }

    /// Validate the config, spawn the worker thread and return the adapter.
    pub fn build(self) -> Result<CaptureAdapter> {
        validation::validate(&self.config)?;
        let queue = SerialQueue::spawn(self.config.worker.thread_name.clone())?;

        let subscriber = SubscriberSlot::default();
        if let Some(weak) = self.subscriber {
            subscriber.set(weak);
        }

        debug!(
            channel = %self.config.capture.channel,
            record_events = self.record_events,
            "capture adapter created"
        );

        let pipeline = Pipeline {
            config: self.config,
            dispatcher: self.dispatcher,
            subscriber: Arc::new(subscriber),
            events: self.record_events.then(|| Arc::new(Mutex::new(Vec::new()))),
        };

        Ok(CaptureAdapter {
            inner: Arc::new(Inner {
                pipeline: Arc::new(pipeline),
                queue,
            }),
        })
    }
}

fn downgrade<S>(subscriber: &Arc<S>) -> Weak<dyn StatusSubscriber>
where
    S: StatusSubscriber + 'static,
{
    let subscriber: Arc<dyn StatusSubscriber> = subscriber.clone();
    Arc::downgrade(&subscriber)
}
