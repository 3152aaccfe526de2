//! Viewport width classification as an injected, subscribable capability.
//!
//! A [`ViewportObserver`] reports the current [`ViewportClass`] and lets a
//! caller subscribe to changes. Subscribing hands back a
//! [`ViewportSubscription`] guard; dropping the guard releases the listener.
//!
//! Implementations:
//! - [`FixedViewport`]: never changes (SSR, tests, fixed-size windows)
//! - [`ViewportChannel`]: fed by the host (desktop window resize events)
//! - `MediaQueryViewport` (wasm32 only): a `matchMedia` query in the browser

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_util::StreamExt;

use super::layout::ViewportClass;

pub type ViewportCallback = Rc<dyn Fn(ViewportClass)>;

pub trait ViewportObserver {
    fn current(&self) -> ViewportClass;

    /// `on_change` fires only when the class actually changes.
    fn subscribe(&self, on_change: ViewportCallback) -> ViewportSubscription;
}

/// Scoped listener registration; releases on drop.
#[must_use = "dropping the subscription immediately releases the listener"]
pub struct ViewportSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ViewportSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Nothing to release (the source never changes).
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub ViewportClass);

impl ViewportObserver for FixedViewport {
    fn current(&self) -> ViewportClass {
        self.0
    }

    fn subscribe(&self, _on_change: ViewportCallback) -> ViewportSubscription {
        ViewportSubscription::detached()
    }
}

/// Host-driven observer: the owner pushes widths in with [`Self::set_width`].
#[derive(Clone)]
pub struct ViewportChannel {
    inner: Rc<RefCell<ChannelInner>>,
}

struct ChannelInner {
    breakpoint_px: f64,
    class: ViewportClass,
    next_id: u64,
    listeners: Vec<(u64, ViewportCallback)>,
}

impl ViewportChannel {
    pub fn new(width_px: f64, breakpoint_px: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                breakpoint_px,
                class: ViewportClass::from_width(width_px, breakpoint_px),
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn set_width(&self, width_px: f64) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            let next = ViewportClass::from_width(width_px, inner.breakpoint_px);
            if next == inner.class {
                return;
            }
            inner.class = next;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect::<Vec<_>>()
        };

        let class = self.current();
        debug!(?class, width_px, "viewport: class changed");
        // Borrow released above so listeners may (un)subscribe re-entrantly.
        for listener in listeners {
            listener(class);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ViewportObserver for ViewportChannel {
    fn current(&self) -> ViewportClass {
        self.inner.borrow().class
    }

    fn subscribe(&self, on_change: ViewportCallback) -> ViewportSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, on_change));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        ViewportSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::MediaQueryViewport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{MediaQueryList, MediaQueryListEvent};

    use super::{ViewportCallback, ViewportClass, ViewportObserver, ViewportSubscription};

    /// `window.matchMedia("(min-width: <breakpoint>px)")`.
    pub struct MediaQueryViewport {
        query: MediaQueryList,
    }

    impl MediaQueryViewport {
        pub fn new(breakpoint_px: f64) -> Option<Self> {
            let media = ViewportClass::wide_media_query(breakpoint_px);
            let query = web_sys::window()?.match_media(&media).ok().flatten()?;
            Some(Self { query })
        }
    }

    fn class_of(matches: bool) -> ViewportClass {
        if matches {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }

    impl ViewportObserver for MediaQueryViewport {
        fn current(&self) -> ViewportClass {
            class_of(self.query.matches())
        }

        fn subscribe(&self, on_change: ViewportCallback) -> ViewportSubscription {
            let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                on_change(class_of(event.matches()));
            });

            if let Err(err) = self
                .query
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            {
                warn!("viewport: media query listener rejected ({err:?}); layout will not follow resizes");
                return ViewportSubscription::detached();
            }

            let query = self.query.clone();
            ViewportSubscription::new(move || {
                let _ = query.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
                drop(closure);
            })
        }
    }
}

/// Track the viewport class for the calling component.
///
/// The subscription is taken once per component instance and released when
/// the component unmounts. Changes are queued and applied from a task in this
/// scope so the signal write always happens inside the Dioxus runtime.
pub fn use_viewport_class(observer: Rc<dyn ViewportObserver>) -> ReadOnlySignal<ViewportClass> {
    let mut class = use_signal(|| observer.current());

    let subscription = use_hook(move || {
        let (tx, mut rx) = futures_channel::mpsc::unbounded::<ViewportClass>();
        let guard = observer.subscribe(Rc::new(move |next: ViewportClass| {
            let _ = tx.unbounded_send(next);
        }));

        spawn(async move {
            while let Some(next) = rx.next().await {
                if *class.peek() != next {
                    class.set(next);
                }
            }
        });

        Rc::new(RefCell::new(Some(guard)))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    ReadOnlySignal::new(class)
}
