//! Layout decisions for the navigation bar, kept free of any rendering.
//!
//! The component asks [`render_state`] what to draw and then draws exactly
//! that. Two independent axes feed the decision:
//!
//! - the viewport class (wide vs narrow, recomputed on resize)
//! - the component-local [`MenuState`] (mobile menu open/closed)
//!
//! giving three reachable configurations: `Wide`, `Narrow + closed` and
//! `Narrow + open`. The menu state survives viewport changes; it is only
//! ever *acted on* while narrow.

/// Width (logical px) at and above which the wide layout is used.
pub const DEFAULT_BREAKPOINT_PX: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Wide,
    Narrow,
}

impl ViewportClass {
    pub fn from_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px >= breakpoint_px {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }

    pub fn is_wide(self) -> bool {
        self == ViewportClass::Wide
    }

    /// Media query matching the wide class, e.g. `(min-width: 1000px)`.
    pub fn wide_media_query(breakpoint_px: f64) -> String {
        format!("(min-width: {breakpoint_px}px)")
    }
}

/// Mobile menu toggle owned by a single navbar instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click. Ignored while wide since the button is not rendered.
    pub fn toggle(&mut self, viewport: ViewportClass) {
        if viewport == ViewportClass::Narrow {
            self.open = !self.open;
        }
    }

    /// Close-icon click.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Where the icon cluster (theme toggle, messages, notifications, help,
/// user menu) is drawn, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterPlacement {
    /// Inline row on the right side of the bar.
    Toolbar,
    /// Vertical stack inside the overlay panel.
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor {
    pub viewport: ViewportClass,
    pub search_box: bool,
    pub hamburger: bool,
    pub overlay: bool,
    pub cluster: Option<ClusterPlacement>,
}

pub fn render_state(viewport: ViewportClass, menu_open: bool) -> LayoutDescriptor {
    match viewport {
        ViewportClass::Wide => LayoutDescriptor {
            viewport,
            search_box: true,
            hamburger: false,
            overlay: false,
            cluster: Some(ClusterPlacement::Toolbar),
        },
        ViewportClass::Narrow => LayoutDescriptor {
            viewport,
            search_box: false,
            hamburger: true,
            overlay: menu_open,
            cluster: menu_open.then_some(ClusterPlacement::Overlay),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: &[f64] = &[0.0, 320.0, 768.0, 999.0, 999.5, 1000.0, 1001.0, 1920.0];

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(
            ViewportClass::from_width(999.99, DEFAULT_BREAKPOINT_PX),
            ViewportClass::Narrow
        );
        assert_eq!(
            ViewportClass::from_width(1000.0, DEFAULT_BREAKPOINT_PX),
            ViewportClass::Wide
        );
        assert_eq!(
            ViewportClass::wide_media_query(DEFAULT_BREAKPOINT_PX),
            "(min-width: 1000px)"
        );
    }

    #[test]
    fn wide_shows_search_and_toolbar_without_hamburger() {
        for &width in WIDTHS.iter().filter(|w| **w >= 1000.0) {
            let viewport = ViewportClass::from_width(width, DEFAULT_BREAKPOINT_PX);
            for menu_open in [false, true] {
                let layout = render_state(viewport, menu_open);
                assert!(layout.search_box, "width {width}");
                assert_eq!(layout.cluster, Some(ClusterPlacement::Toolbar));
                assert!(!layout.hamburger);
                assert!(!layout.overlay);
            }
        }
    }

    #[test]
    fn narrow_shows_hamburger_and_hides_search() {
        for &width in WIDTHS.iter().filter(|w| **w < 1000.0) {
            let viewport = ViewportClass::from_width(width, DEFAULT_BREAKPOINT_PX);
            let closed = render_state(viewport, false);
            assert!(closed.hamburger, "width {width}");
            assert!(!closed.search_box);
            assert!(!closed.overlay);
            assert_eq!(closed.cluster, None);

            let open = render_state(viewport, true);
            assert!(open.hamburger);
            assert!(!open.search_box);
            assert!(open.overlay);
            assert_eq!(open.cluster, Some(ClusterPlacement::Overlay));
        }
    }

    #[test]
    fn hamburger_opens_and_close_hides_overlay() {
        let mut menu = MenuState::default();
        assert!(!render_state(ViewportClass::Narrow, menu.is_open()).overlay);

        menu.toggle(ViewportClass::Narrow);
        assert!(render_state(ViewportClass::Narrow, menu.is_open()).overlay);

        menu.close();
        assert!(!menu.is_open());
        assert!(!render_state(ViewportClass::Narrow, menu.is_open()).overlay);
    }

    #[test]
    fn hamburger_toggles_back_closed() {
        let mut menu = MenuState::default();
        menu.toggle(ViewportClass::Narrow);
        menu.toggle(ViewportClass::Narrow);
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_is_ignored_while_wide() {
        let mut menu = MenuState::default();
        menu.toggle(ViewportClass::Wide);
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_keeps_menu_state() {
        let mut menu = MenuState::default();
        menu.toggle(ViewportClass::Narrow);

        // Grow past the breakpoint: overlay hidden, state kept.
        assert!(!render_state(ViewportClass::Wide, menu.is_open()).overlay);
        assert!(menu.is_open());

        // Shrink again: overlay comes back without another click.
        assert!(render_state(ViewportClass::Narrow, menu.is_open()).overlay);
    }
}
