// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log;

/// A thread-safe, unbounded channel for one kind of engine event.
///
/// Producers hold a cloned sender; the owner of the bus consumes. Publishing
/// never blocks, so a frame can report its summary without waiting on
/// whoever reads the telemetry.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new bus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::info!("Event bus initialized.");
        Self { sender, receiver }
    }

    /// Attempts to send an event, logging an error if the receiver is disconnected.
    ///
    /// The event type carries no `Debug` bound, so only the failure is logged,
    /// not the payload.
    pub fn publish(&self, event: T) {
        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to publish event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    ///
    /// Hand these out to the parts of the system that report events.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    /// Intended for the owner of the bus to process events.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }

    /// Drains every event currently queued, in publish order.
    ///
    /// Non-blocking; returns an empty vector when nothing is pending. The
    /// runtime calls this once per tick to collect the frame summaries that
    /// accumulated since the last drain.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::{SendError, TryRecvError};
    use std::{thread, time::Duration};

    /// A local, self-contained event enum mirroring the kind of telemetry
    /// the frame pipeline emits, without depending on higher crates.
    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        FrameCompleted { frame: u64, jobs: usize },
        ActorRemoved { name: String },
        ShutdownRequested,
    }

    fn dummy_frame_event() -> TestEvent {
        TestEvent::FrameCompleted { frame: 1, jobs: 3 }
    }

    #[test]
    fn bus_starts_empty() {
        let bus = EventBus::<TestEvent>::new();
        let _sender = bus.sender();
        assert!(bus.receiver().is_empty());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn publish_then_receive() {
        let bus = EventBus::<TestEvent>::new();
        let event = dummy_frame_event();

        bus.publish(event.clone());

        match bus.receiver().recv_timeout(Duration::from_millis(100)) {
            Ok(received) => assert_eq!(received, event),
            Err(e) => panic!("Failed to receive event: {e:?}"),
        }
    }

    #[test]
    fn try_receive_empty() {
        let bus = EventBus::<TestEvent>::new();

        match bus.receiver().try_recv() {
            Err(TryRecvError::Empty) => { /* This is the expected outcome */ }
            Ok(event) => panic!("Received unexpected event: {event:?}"),
            Err(e) => panic!("Received unexpected error: {e:?}"),
        }
    }

    #[test]
    fn drain_preserves_publish_order() {
        let bus = EventBus::<TestEvent>::new();
        let events = [
            TestEvent::FrameCompleted { frame: 1, jobs: 4 },
            TestEvent::ActorRemoved {
                name: "bot_01".to_string(),
            },
            TestEvent::FrameCompleted { frame: 2, jobs: 3 },
            TestEvent::ShutdownRequested,
        ];

        for event in &events {
            bus.publish(event.clone());
        }

        let drained = bus.drain();
        assert_eq!(drained, events);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn publish_from_multiple_senders() {
        let bus = EventBus::<TestEvent>::new();
        let sender1 = bus.sender();
        let sender2 = bus.sender();

        let event1 = dummy_frame_event();
        let event2 = TestEvent::ShutdownRequested;

        sender1.send(event1.clone()).expect("Send 1 should succeed");
        sender2.send(event2.clone()).expect("Send 2 should succeed");

        let drained = bus.drain();
        assert_eq!(drained.len(), 2);
        assert!(drained.contains(&event1));
        assert!(drained.contains(&event2));
    }

    #[test]
    fn publish_from_worker_thread() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();
        let event = dummy_frame_event();
        let event_clone = event.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            sender.send(event_clone).expect("Send from thread failed");
        });

        match bus.receiver().recv_timeout(Duration::from_secs(1)) {
            Ok(received) => assert_eq!(received, event),
            Err(e) => panic!("Failed to receive event from thread: {e:?}"),
        }

        handle.join().expect("Thread join failed");
    }

    #[test]
    fn send_error_on_receiver_drop() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();

        drop(bus);

        match sender.send(dummy_frame_event()) {
            Err(SendError(_)) => { /* This is the expected outcome */ }
            Ok(()) => panic!("Send unexpectedly succeeded after receiver drop"),
        }
    }
}
