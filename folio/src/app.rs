//! Page state: the document, its reveal controllers, the nav bar, and the
//! element tree built from them.

use std::time::Instant;

use log::{debug, info, trace};
use pagedom::{
    AnimationState, Document, Element, Event, Frame, Key, LayoutResult, Modifiers, MouseButton,
    Rect, Rgb, Size, find_element, hit_test, layout,
};

use crate::config::Config;
use crate::nav::NavBar;
use crate::page::{
    self, NAV_BAR_ID, NAV_TOGGLE_ID, OVERLAY_BACKDROP_ID, OVERLAY_PANEL_ID, Viewport, about, blog,
    footer, hero, projects, timeline,
};
use crate::reveal::RevealController;
use crate::theme::Theme;

/// Rebuilds allowed per frame. A reveal or a new bar height changes the
/// tree, which is then laid out again.
const MAX_PASSES: usize = 3;

/// Rows moved per arrow key or wheel notch.
const SCROLL_STEP: i32 = 1;

/// Something the page wants done outside itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    OpenExternal(String),
}

pub struct Portfolio {
    config: Config,
    theme: Theme,
    document: Document,
    animation: AnimationState,
    nav: NavBar,
    about: RevealController,
    timeline: RevealController,
    projects: RevealController,
    blog: RevealController,
    root: Element,
    layout: LayoutResult,
    year: i32,
}

impl Portfolio {
    /// Mount the page in a `width` x `height` viewport and lay out the
    /// first frame.
    pub fn new(config: Config, width: u16, height: u16, year: i32, now: Instant) -> Self {
        let document = Document::new(width, height);
        let mut animation = AnimationState::new();
        animation.set_reduced_motion(config.motion.reduced);

        let nav = NavBar::new(&config.nav, document.scroll_behavior(), now);
        let content = &config.content;

        let about =
            RevealController::single(&config.reveal, about::SECTION_ID, about::HIDDEN_OFFSET);
        let mut timeline = RevealController::new(&config.reveal, timeline::HIDDEN_OFFSET);
        timeline.register_all(content.timeline.len(), timeline::item_id);
        let mut projects = RevealController::new(&config.reveal, projects::HIDDEN_OFFSET);
        projects.register_all(content.projects.len(), projects::card_id);
        let mut blog = RevealController::new(&config.reveal, blog::HIDDEN_OFFSET);
        blog.register_all(content.posts.len(), blog::post_id);

        let mut portfolio = Self {
            config,
            theme: Theme::default(),
            document,
            animation,
            nav,
            about,
            timeline,
            projects,
            blog,
            root: Element::col(),
            layout: LayoutResult::new(),
            year,
        };
        info!("page mounted at {width}x{height}");
        portfolio.frame(now);
        portfolio
    }

    fn viewport_class(&self) -> Viewport {
        let (width, _) = self.document.viewport_size();
        Viewport::classify(width, self.nav.breakpoint())
    }

    fn view(&self) -> Element {
        let (width, height) = self.document.viewport_size();
        let viewport = self.viewport_class();
        let content = &self.config.content;
        let theme = &self.theme;

        let mut root = Element::col()
            .id("page")
            .width(Size::Fill)
            .foreground(theme.foreground)
            .child(page::nav::bar(
                &self.nav,
                &content.nav,
                &content.profile,
                theme,
                viewport,
            ))
            .child(hero::view(&content.profile, theme, height))
            .child(about::view(&content.about, &self.about, theme, viewport))
            .child(timeline::view(&content.timeline, &self.timeline, theme))
            .child(projects::view(&content.projects, &self.projects, theme, viewport))
            .child(blog::view(&content.posts, &self.blog, theme, viewport))
            .child(footer::view(&content.profile, theme, viewport, self.year));

        if let Some(geometry) = self.nav.overlay_geometry(height) {
            root = root.children(page::nav::overlay(geometry, &content.nav, theme, width));
        }
        root
    }

    /// Build, lay out, and observe until nothing new is revealed and the
    /// bar height is stable. The stored tree always reflects the state left
    /// by the last observation.
    pub fn frame(&mut self, now: Instant) {
        self.rebuild(now);
        for pass in 0..MAX_PASSES {
            if !self.observe(now) {
                return;
            }
            trace!("frame pass {pass} changed the page, rebuilding");
            self.rebuild(now);
        }
        debug!("page still changing after {MAX_PASSES} passes");
    }

    fn rebuild(&mut self, now: Instant) {
        let root = self.view();
        let (width, height) = self.document.viewport_size();
        let layout = layout(&root, Rect::new(0, 0, width, height));

        let scroll_before = self.document.scroll_y();
        self.document.set_content_height(layout.document_height());
        if self.document.scroll_y() != scroll_before {
            self.nav.on_scroll(self.document.scroll_y(), now);
        }

        self.animation.update(&root, now);
        self.root = root;
        self.layout = layout;
    }

    /// Deliver intersections and take a due bar measurement against the
    /// stored layout. Returns true if either changed what the view renders.
    fn observe(&mut self, now: Instant) -> bool {
        let viewport = self.document.viewport();
        let mut changed = false;
        for reveal in [
            &mut self.about,
            &mut self.timeline,
            &mut self.projects,
            &mut self.blog,
        ] {
            changed |= reveal.observe_layout(&self.root, &self.layout, viewport);
        }

        if self.nav.measure_due(now) {
            if let Some(rect) = self.document.bounding_client_rect(&self.layout, NAV_BAR_ID) {
                changed |= self.nav.apply_measurement(rect.height);
            }
        }
        changed
    }

    /// React to an input event and bring the frame up to date.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Option<Action> {
        let action = match event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers, now),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y, now),
            Event::Click { .. } => None,
            Event::Scroll { delta_y, .. } => {
                self.scroll_by(delta_y as i32 * SCROLL_STEP, now);
                None
            }
            Event::Resize { width, height } => {
                self.resize(width, height, now);
                None
            }
        };
        self.frame(now);
        action
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers, now: Instant) -> Option<Action> {
        let page = self.page_rows();
        match key {
            Key::Char('q') => return Some(Action::Quit),
            Key::Char('c') if modifiers.ctrl => return Some(Action::Quit),
            Key::Char('m') => {
                self.nav.toggle(now);
            }
            Key::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                let href = self.config.content.nav.get(index)?.href.clone();
                let in_overlay = self.nav.is_open();
                return self.activate(&href, in_overlay, now);
            }
            Key::Up | Key::Char('k') => self.scroll_by(-SCROLL_STEP, now),
            Key::Down | Key::Char('j') => self.scroll_by(SCROLL_STEP, now),
            Key::PageUp => self.scroll_by(-page, now),
            Key::PageDown | Key::Char(' ') => self.scroll_by(page, now),
            Key::Home => self.scroll_to(0, now),
            Key::End => self.scroll_to(self.document.max_scroll(), now),
            _ => {}
        }
        None
    }

    fn handle_click(&mut self, x: u16, y: u16, now: Instant) -> Option<Action> {
        let id = hit_test(&self.layout, &self.root, self.document.scroll_y(), x, y)?;
        debug!("click at ({x}, {y}) hit {id}");
        match id.as_str() {
            NAV_TOGGLE_ID => {
                self.nav.toggle(now);
                None
            }
            OVERLAY_BACKDROP_ID => {
                self.nav.click_backdrop(now);
                None
            }
            OVERLAY_PANEL_ID => None,
            _ => {
                let href = find_element(&self.root, &id)?.href.clone()?;
                let in_overlay = id.starts_with("overlay-link-");
                self.activate(&href, in_overlay, now)
            }
        }
    }

    /// Follow a link. Overlay links close the menu before scrolling so the
    /// scroll lock is already released.
    pub fn activate(&mut self, href: &str, in_overlay: bool, now: Instant) -> Option<Action> {
        self.nav.activate_link(in_overlay, now);
        match href.strip_prefix('#') {
            Some(anchor) => {
                self.scroll_to_anchor(anchor, now);
                None
            }
            None => {
                info!("opening {href}");
                Some(Action::OpenExternal(href.to_string()))
            }
        }
    }

    /// Scroll so the anchor's section starts just under the bar. An empty
    /// anchor goes to the top.
    fn scroll_to_anchor(&mut self, anchor: &str, now: Instant) {
        if anchor.is_empty() {
            self.jump_to(0, now);
            return;
        }
        let Some(rect) = self.layout.get(anchor) else {
            debug!("no element for anchor #{anchor}");
            return;
        };
        let target = rect.y.saturating_sub(self.nav.measured_height());
        self.jump_to(target, now);
    }

    // Anchor jumps move the page even while the menu holds the scroll lock.
    fn jump_to(&mut self, y: u16, now: Instant) {
        if self.document.jump_to(y) {
            self.nav.on_scroll(self.document.scroll_y(), now);
        }
    }

    fn scroll_by(&mut self, dy: i32, now: Instant) {
        if self.document.scroll_by(dy) {
            self.nav.on_scroll(self.document.scroll_y(), now);
        }
    }

    fn scroll_to(&mut self, y: u16, now: Instant) {
        if self.document.scroll_to(y) {
            self.nav.on_scroll(self.document.scroll_y(), now);
        }
    }

    fn resize(&mut self, width: u16, height: u16, now: Instant) {
        debug!("resize to {width}x{height}");
        self.document.resize(width, height);
        self.nav.on_resize(now);
    }

    /// Rows moved by a page key: the viewport below the bar.
    fn page_rows(&self) -> i32 {
        let (_, height) = self.document.viewport_size();
        height.saturating_sub(self.nav.measured_height()).max(1) as i32
    }

    /// Next time the page needs a frame without any input.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.nav.next_deadline()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_animating(now)
    }

    pub fn render_frame(&self, now: Instant) -> Frame<'_> {
        Frame {
            layout: &self.layout,
            animation: &self.animation,
            now,
            scroll_y: self.document.scroll_y(),
        }
    }

    pub fn background(&self) -> Rgb {
        self.theme.clear_color()
    }

    /// Close the menu and stop observing.
    pub fn teardown(&mut self) {
        self.nav.teardown();
        for reveal in [
            &mut self.about,
            &mut self.timeline,
            &mut self.projects,
            &mut self.blog,
        ] {
            reveal.unmount();
        }
        info!("page unmounted");
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn about(&self) -> &RevealController {
        &self.about
    }

    pub fn timeline(&self) -> &RevealController {
        &self.timeline
    }

    pub fn projects(&self) -> &RevealController {
        &self.projects
    }

    pub fn blog(&self) -> &RevealController {
        &self.blog
    }
}
