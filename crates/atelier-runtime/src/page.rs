#![forbid(unsafe_code)]

//! The page shell: every interactive component of the studio page, wired to
//! one theme context and one set of page-global resources.
//!
//! The host owns the viewport observer and the clock. It calls
//! [`PageShell::mount`] once, forwards every input through
//! [`PageShell::dispatch`], calls [`PageShell::tick`] whenever
//! [`PageShell::next_deadline`] passes, and calls [`PageShell::teardown`]
//! before discarding the shell.
//!
//! # Routing
//!
//! Events reach components in a fixed order and stop at the first consumer:
//!
//! 1. Overlays, gated by the listener registry. Keys reach every overlay
//!    with an attached keyboard listener, so Escape closes all of them;
//!    pointer starts outside a panel reach overlays with an attached
//!    outside-pointer listener. Touches on a panel, and the rest of a drag,
//!    go to that panel's overlay.
//! 2. Header (scroll), reveals (intersections).
//! 3. FAQ paging keys, then carousel arrow keys.

use atelier_core::animation::RevealOnScroll;
use atelier_core::event::{Event, KeyEvent, PointerPhase, PointerTarget, SurfaceId};
use atelier_core::listener::{ListenerKind, ListenerRegistry};
use atelier_core::viewport::ViewportObserver;
use atelier_style::Section;
use atelier_widgets::shuffle::{MarqueeItem, marquee_items, shuffled};
use atelier_widgets::{
    Carousel, CloseReason, DisclosureItem, DisclosureList, DismissibleOverlay, HeaderChrome,
    OverlayEnv, RelayOutcome, ScrollDirection, ScrollLock, SubmissionTicket, SubmissionTracker,
};
use rand::Rng;
use web_time::Instant;

use crate::config::PageConfig;
use crate::content::{LookbookImage, PageContent};
use crate::theme_context::ThemeContext;

/// Overlay showing one service in full.
pub const SERVICE_DETAIL: SurfaceId = SurfaceId(100);
/// Overlay showing one lookbook image enlarged.
pub const LOOKBOOK_VIEWER: SurfaceId = SurfaceId(101);

/// Anchor the "Start a Project" call to action leads to.
pub const CONTACT_ANCHOR: &str = "contact";

/// Viewport-width at which the mobile menu is hidden.
const DESKTOP_MIN_WIDTH: f32 = 1024.0;

/// Surface observed for a section's reveal.
#[must_use]
pub const fn section_surface(section: Section) -> SurfaceId {
    SurfaceId(match section {
        Section::About => 10,
        Section::Services => 11,
        Section::Lookbook => 12,
        Section::Faq => 13,
        Section::Contact => 14,
        Section::Marquee => 15,
    })
}

/// Something the host should do on the page's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Scroll to the element with this anchor id.
    NavigateTo(String),
}

/// What changed during one [`PageShell::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Newly visible `(section, child index)` pairs, in reveal order per
    /// section.
    pub revealed: Vec<(Section, usize)>,
    /// Overlays that finished closing.
    pub closed: Vec<SurfaceId>,
}

impl TickReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty() && self.closed.is_empty()
    }
}

/// Composition of all page components.
#[derive(Debug)]
pub struct PageShell {
    config: PageConfig,
    theme: ThemeContext,
    env: OverlayEnv,
    header: HeaderChrome,
    reveals: Vec<(Section, RevealOnScroll)>,
    faq: DisclosureList,
    services: DisclosureList,
    service_detail: DismissibleOverlay<usize>,
    lookbook: Vec<LookbookImage>,
    carousel: Carousel,
    lookbook_viewer: DismissibleOverlay<usize>,
    marquee: Vec<MarqueeItem>,
    contact: SubmissionTracker,
    mounted: bool,
}

impl PageShell {
    /// Assemble the page. `rng` decides the per-visit lookbook and marquee
    /// order.
    pub fn new<R: Rng + ?Sized>(
        config: PageConfig,
        content: PageContent,
        theme: ThemeContext,
        rng: &mut R,
    ) -> Self {
        let env = OverlayEnv {
            listeners: ListenerRegistry::new(),
            scroll_lock: ScrollLock::new(config.scrollbar_width),
        };
        let overlay_config = config.overlay.to_config();

        let faq = DisclosureList::paginated(
            content
                .faq
                .iter()
                .enumerate()
                .map(|(i, e)| DisclosureItem::new(i, e.title.clone(), e.description.clone())),
            config.faq_window,
        );
        let services = DisclosureList::new(
            content
                .services
                .iter()
                .enumerate()
                .map(|(i, e)| DisclosureItem::new(i, e.title.clone(), e.description.clone())),
        );

        let reveal = config.reveal.to_config();
        let reveals = vec![
            (Section::About, RevealOnScroll::new(section_surface(Section::About), 5, reveal)),
            (
                Section::Services,
                RevealOnScroll::new(
                    section_surface(Section::Services),
                    1 + content.services.len(),
                    config.services_reveal.to_config(),
                ),
            ),
            (
                Section::Lookbook,
                RevealOnScroll::new(section_surface(Section::Lookbook), 2, reveal),
            ),
            (
                Section::Faq,
                RevealOnScroll::new(section_surface(Section::Faq), 1 + content.faq.len(), reveal),
            ),
            (
                Section::Contact,
                RevealOnScroll::new(
                    section_surface(Section::Contact),
                    3,
                    config.contact_reveal.to_config(),
                ),
            ),
        ];

        let lookbook = shuffled(&content.lookbook, rng);
        let texts: Vec<&str> = content.marquee.iter().map(String::as_str).collect();
        let icons: Vec<&str> = content.marquee_icons.iter().map(String::as_str).collect();
        let marquee = marquee_items(&texts, &icons, rng);

        tracing::debug!(
            message = "page.new",
            theme = theme.mode().as_str(),
            faq = faq.len(),
            services = services.len(),
            lookbook = lookbook.len()
        );

        Self {
            carousel: Carousel::new(config.carousel_step),
            service_detail: DismissibleOverlay::new(SERVICE_DETAIL, env.clone())
                .with_config(overlay_config),
            lookbook_viewer: DismissibleOverlay::new(LOOKBOOK_VIEWER, env.clone())
                .with_config(overlay_config),
            config,
            theme,
            env,
            header: HeaderChrome::new(),
            reveals,
            faq,
            services,
            lookbook,
            marquee,
            contact: SubmissionTracker::new(),
            mounted: false,
        }
    }

    /// Start observing every revealable section. Returns how many
    /// observations began.
    pub fn mount(&mut self, observer: &mut dyn ViewportObserver) -> usize {
        if self.mounted {
            return 0;
        }
        self.mounted = true;
        let mut started = 0;
        for (_, reveal) in &mut self.reveals {
            if reveal.mount(observer) {
                started += 1;
            }
        }
        tracing::debug!(message = "page.mount", observations = started);
        started
    }

    /// Route one input event. Returns `true` if some component consumed it.
    pub fn dispatch(
        &mut self,
        event: &Event,
        now: Instant,
        observer: &mut dyn ViewportObserver,
    ) -> bool {
        let targets = self.overlay_targets(event);
        let mut consumed = false;
        for overlay in [&mut self.lookbook_viewer, &mut self.service_detail] {
            if targets.contains(&overlay.surface()) {
                consumed |= overlay.handle_event(event, now);
            }
        }
        if consumed {
            return true;
        }
        match event {
            Event::Scroll(_) => self.header.handle_event(event),
            Event::Intersection(entry) => self
                .reveals
                .iter_mut()
                .any(|(_, reveal)| reveal.on_intersection(entry, now, observer)),
            Event::Key(key) => self.handle_key(key),
            Event::Resize { width, .. } => *width >= DESKTOP_MIN_WIDTH && self.header.close_menu(),
            Event::Pointer(_) => false,
        }
    }

    /// Overlays that should see `event`.
    fn overlay_targets(&self, event: &Event) -> Vec<SurfaceId> {
        let listeners = &self.env.listeners;
        match event {
            Event::Key(_) => listeners.owners(ListenerKind::Keyboard),
            Event::Pointer(pointer) => match (pointer.phase, pointer.target) {
                (PointerPhase::Down, PointerTarget::Backdrop(_) | PointerTarget::Page) => {
                    listeners.owners(ListenerKind::OutsidePointer)
                }
                (_, target) => [&self.lookbook_viewer, &self.service_detail]
                    .into_iter()
                    .filter(|o| o.is_dragging() || target == PointerTarget::Surface(o.surface()))
                    .map(DismissibleOverlay::surface)
                    .collect(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        self.faq.handle_key(key, None) || self.carousel.handle_key(key)
    }

    /// Fire everything due at `now`.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();
        for (section, reveal) in &mut self.reveals {
            report
                .revealed
                .extend(reveal.tick(now).into_iter().map(|i| (*section, i)));
        }
        for overlay in [&mut self.service_detail, &mut self.lookbook_viewer] {
            if overlay.tick(now) {
                report.closed.push(overlay.surface());
            }
        }
        report
    }

    /// Earliest time [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.reveals
            .iter()
            .filter_map(|(_, reveal)| reveal.next_due())
            .chain(self.service_detail.next_deadline())
            .chain(self.lookbook_viewer.next_deadline())
            .min()
    }

    /// Release observations, timers and page-global resources.
    pub fn teardown(&mut self, observer: &mut dyn ViewportObserver) {
        for (_, reveal) in &mut self.reveals {
            reveal.teardown(observer);
        }
        self.service_detail.teardown();
        self.lookbook_viewer.teardown();
        self.mounted = false;
        tracing::debug!(message = "page.teardown");
    }

    // --- user intents -------------------------------------------------

    /// Header theme button.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Follow a navigation link; closes the mobile menu.
    pub fn navigate(&mut self, anchor: &str) -> PageAction {
        self.header.close_menu();
        PageAction::NavigateTo(anchor.to_owned())
    }

    /// Open the detail overlay for service `index`.
    pub fn open_service(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.services.len() {
            return false;
        }
        self.service_detail.open(index, now);
        true
    }

    /// Service detail call to action: close the overlay and head to the
    /// contact form.
    pub fn start_project(&mut self, now: Instant) -> Option<PageAction> {
        self.service_detail
            .request_close(CloseReason::CloseButton, now)
            .then(|| PageAction::NavigateTo(CONTACT_ANCHOR.to_owned()))
    }

    /// Open the viewer on lookbook image `index` (in shuffled order).
    pub fn open_image(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.lookbook.len() {
            return false;
        }
        self.lookbook_viewer.open(index, now);
        true
    }

    /// Lookbook arrow buttons.
    pub fn scroll_lookbook(&mut self, direction: ScrollDirection) -> bool {
        self.carousel.scroll(direction)
    }

    /// Contact form submit.
    pub fn submit_contact(&mut self) -> Option<SubmissionTicket> {
        self.contact.begin()
    }

    /// Relay result for a contact submission.
    pub fn resolve_contact(&mut self, ticket: SubmissionTicket, outcome: RelayOutcome) -> bool {
        self.contact.resolve(ticket, outcome)
    }

    // --- state --------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    #[must_use]
    pub fn env(&self) -> &OverlayEnv {
        &self.env
    }

    #[must_use]
    pub fn header(&self) -> &HeaderChrome {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderChrome {
        &mut self.header
    }

    #[must_use]
    pub fn reveal(&self, section: Section) -> Option<&RevealOnScroll> {
        self.reveals
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, reveal)| reveal)
    }

    #[must_use]
    pub fn faq(&self) -> &DisclosureList {
        &self.faq
    }

    pub fn faq_mut(&mut self) -> &mut DisclosureList {
        &mut self.faq
    }

    #[must_use]
    pub fn services(&self) -> &DisclosureList {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut DisclosureList {
        &mut self.services
    }

    #[must_use]
    pub fn service_detail(&self) -> &DismissibleOverlay<usize> {
        &self.service_detail
    }

    pub fn service_detail_mut(&mut self) -> &mut DismissibleOverlay<usize> {
        &mut self.service_detail
    }

    #[must_use]
    pub fn lookbook(&self) -> &[LookbookImage] {
        &self.lookbook
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    #[must_use]
    pub fn lookbook_viewer(&self) -> &DismissibleOverlay<usize> {
        &self.lookbook_viewer
    }

    pub fn lookbook_viewer_mut(&mut self) -> &mut DismissibleOverlay<usize> {
        &mut self.lookbook_viewer
    }

    #[must_use]
    pub fn marquee(&self) -> &[MarqueeItem] {
        &self.marquee
    }

    #[must_use]
    pub fn contact(&self) -> &SubmissionTracker {
        &self.contact
    }
}
