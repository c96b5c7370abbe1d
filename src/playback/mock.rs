//! Recording media output for controller tests.

use super::media::{EventSink, MediaError, MediaEvent, MediaOutput};
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub struct MockState {
    pub sinks: Vec<EventSink>,
    pub loads: Vec<String>,
    pub positions: Vec<f64>,
    pub plays: usize,
    pub pauses: usize,
    /// What the next `play()` resolves to
    pub play_result: Result<(), MediaError>,
}

impl MockState {
    /// Deliver `event` to every bound sink, like a DOM dispatching to each listener.
    pub fn emit(state: &Rc<RefCell<MockState>>, event: MediaEvent) {
        let sinks = state.borrow().sinks.clone();
        for sink in sinks {
            sink(event);
        }
    }
}

pub struct MockMedia {
    state: Rc<RefCell<MockState>>,
}

impl MockMedia {
    pub fn new() -> (Self, Rc<RefCell<MockState>>) {
        let state = Rc::new(RefCell::new(MockState {
            sinks: Vec::new(),
            loads: Vec::new(),
            positions: Vec::new(),
            plays: 0,
            pauses: 0,
            play_result: Ok(()),
        }));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl MediaOutput for MockMedia {
    fn bind_events(&mut self, sink: EventSink) {
        self.state.borrow_mut().sinks.push(sink);
    }

    fn load(&mut self, uri: &str) {
        self.state.borrow_mut().loads.push(uri.to_string());
    }

    fn play(&mut self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        let mut state = self.state.borrow_mut();
        state.plays += 1;
        future::ready(state.play_result.clone()).boxed_local()
    }

    fn pause(&mut self) {
        self.state.borrow_mut().pauses += 1;
    }

    fn set_position(&mut self, seconds: f64) {
        self.state.borrow_mut().positions.push(seconds);
    }
}

/// A sink that queues events so tests can pump them into the controller.
pub fn event_queue() -> (EventSink, Rc<RefCell<VecDeque<MediaEvent>>>) {
    let queue = Rc::new(RefCell::new(VecDeque::new()));
    let sink_queue = queue.clone();
    let sink: EventSink =
        Rc::new(move |event: MediaEvent| sink_queue.borrow_mut().push_back(event));
    (sink, queue)
}
