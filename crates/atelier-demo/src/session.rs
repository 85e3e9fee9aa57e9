//! The scripted visitor journey.

use atelier::prelude::*;
use atelier::runtime::TickReport;
use atelier::runtime::page::{LOOKBOOK_VIEWER, SERVICE_DETAIL, section_surface};
use atelier::widgets::{RelayOutcome, ScrollDirection};
use serde::Serialize;
use serde_json::{Value, json};

/// One scripted step and what it produced.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// Session time when the step ran.
    pub at_ms: u128,
    pub step: &'static str,
    pub detail: Value,
}

/// Everything the session observed.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub initial_theme: ThemeMode,
    pub theme_source: String,
    pub final_theme: ThemeMode,
    /// Raw value read back from the state file, when one was used.
    pub persisted_theme: Option<String>,
    pub lookbook_order: Vec<String>,
    pub actions: Vec<String>,
    pub steps: Vec<StepRecord>,
}

/// A page plus the host pieces a browser would provide.
pub struct Session {
    page: PageShell,
    clock: ManualClock,
    observer: RecordingObserver,
    steps: Vec<StepRecord>,
    actions: Vec<String>,
}

impl Session {
    #[must_use]
    pub fn new(page: PageShell) -> Self {
        Self {
            page,
            clock: ManualClock::new(),
            observer: RecordingObserver::new(),
            steps: Vec::new(),
            actions: Vec::new(),
        }
    }

    fn record(&mut self, step: &'static str, detail: Value) {
        tracing::debug!(message = "session.step", step, %detail);
        self.steps.push(StepRecord {
            at_ms: self.clock.elapsed().as_millis(),
            step,
            detail,
        });
    }

    fn dispatch(&mut self, event: Event) -> bool {
        self.page
            .dispatch(&event, self.clock.now(), &mut self.observer)
    }

    /// Advance time deadline by deadline until nothing is pending.
    fn settle(&mut self) -> TickReport {
        let mut total = TickReport::default();
        while let Some(due) = self.page.next_deadline() {
            let now = self.clock.now();
            if due > now {
                self.clock.advance(due - now);
            }
            let report = self.page.tick(self.clock.now());
            total.revealed.extend(report.revealed);
            total.closed.extend(report.closed);
        }
        total
    }

    fn action(&mut self, action: PageAction) {
        let PageAction::NavigateTo(anchor) = action;
        self.actions.push(format!("navigate:#{anchor}"));
    }

    /// Play the whole journey and tear the page down.
    pub fn play(mut self) -> SessionReport {
        let initial_theme = self.page.theme().mode();
        let theme_source = format!("{:?}", self.page.theme().source());
        let lookbook_order = self.page.lookbook().iter().map(|i| i.alt.clone()).collect();

        self.arrive();
        self.browse_about();
        self.switch_theme();
        self.browse_lookbook();
        self.read_service();
        self.read_faq();
        self.send_message();

        self.page.teardown(&mut self.observer);
        let released = !self.page.env().scroll_lock.is_locked()
            && self.page.env().listeners.is_empty()
            && self.observer.active().is_empty();
        self.record("teardown", json!({ "released": released }));

        SessionReport {
            initial_theme,
            theme_source,
            final_theme: self.page.theme().mode(),
            persisted_theme: None,
            lookbook_order,
            actions: self.actions,
            steps: self.steps,
        }
    }

    fn arrive(&mut self) {
        let observing = self.page.mount(&mut self.observer);
        self.record("mount", json!({ "observing": observing }));
        self.clock.advance_ms(400);
        self.dispatch(Event::Scroll(ScrollEvent {
            scroll_y: 120.0,
            viewport_height: 900.0,
        }));
        let header = self.page.header();
        let detail = json!({
            "has_scrolled": header.has_scrolled(),
            "past_hero": header.past_hero(),
        });
        self.record("scroll", detail);
    }

    fn browse_about(&mut self) {
        self.clock.advance_ms(600);
        self.dispatch(Event::Scroll(ScrollEvent {
            scroll_y: 900.0,
            viewport_height: 900.0,
        }));
        let about = section_surface(Section::About);
        self.dispatch(Event::Intersection(IntersectionEntry::new(about, 0.05)));
        self.dispatch(Event::Intersection(IntersectionEntry::new(about, 0.4)));
        self.dispatch(Event::Intersection(IntersectionEntry::new(about, 0.9)));
        let revealed = self.settle().revealed;
        let detail = json!({
            "past_hero": self.page.header().past_hero(),
            "revealed": revealed.iter().map(|(_, i)| i).collect::<Vec<_>>(),
        });
        self.record("reveal_about", detail);
    }

    fn switch_theme(&mut self) {
        let palette = self.page.theme().reader().palette(Section::Services);
        let before = palette.get().background.to_string();
        self.page.toggle_theme();
        let detail = json!({
            "mode": self.page.theme().mode().as_str(),
            "services_background": { "before": before, "after": palette.get().background.to_string() },
        });
        self.record("toggle_theme", detail);
    }

    fn browse_lookbook(&mut self) {
        let lookbook = section_surface(Section::Lookbook);
        self.dispatch(Event::Intersection(IntersectionEntry::new(lookbook, 0.3)));
        self.settle();

        let count = self.page.lookbook().len() as f32;
        self.page.carousel_mut().set_extent(count * 320.0, 1200.0);
        self.page.scroll_lookbook(ScrollDirection::Right);
        self.page.scroll_lookbook(ScrollDirection::Right);
        let offset = self.page.carousel().offset();
        self.record("carousel", json!({ "offset": offset }));

        let now = self.clock.now();
        self.page.open_image(0, now);
        self.record("open_image", json!({ "locked": self.page.env().scroll_lock.is_locked() }));

        // Short drag: eases back.
        self.touch(PointerPhase::Down, 300.0, PointerTarget::Surface(LOOKBOOK_VIEWER));
        self.touch(PointerPhase::Move, 360.0, PointerTarget::Page);
        self.touch(PointerPhase::Up, 360.0, PointerTarget::Page);
        self.settle();
        let open = self.page.lookbook_viewer().state().is_open();
        self.record("drag_short", json!({ "travel": 60, "still_open": open }));

        // Long drag: dismisses through the grace period.
        self.touch(PointerPhase::Down, 300.0, PointerTarget::Surface(LOOKBOOK_VIEWER));
        self.touch(PointerPhase::Move, 440.0, PointerTarget::Page);
        self.touch(PointerPhase::Up, 440.0, PointerTarget::Page);
        let closing = self.page.lookbook_viewer().state().is_closing();
        let closed = self.settle().closed.contains(&LOOKBOOK_VIEWER);
        let detail = json!({
            "travel": 140,
            "closing": closing,
            "closed": closed,
            "padding_right": self.page.env().scroll_lock.body_style().padding_right,
        });
        self.record("drag_long", detail);
    }

    fn touch(&mut self, phase: PointerPhase, y: f32, target: PointerTarget) {
        self.dispatch(Event::Pointer(PointerEvent::touch(phase, y, target)));
    }

    fn read_service(&mut self) {
        let services = section_surface(Section::Services);
        self.dispatch(Event::Intersection(IntersectionEntry::new(services, 0.12)));
        self.settle();

        self.page.services_mut().toggle(2);
        let now = self.clock.now();
        self.page.open_service(2, now);
        let title = self
            .page
            .services()
            .open_item()
            .map(|item| item.summary.clone());
        self.record("open_service", json!({ "service": title }));

        let now = self.clock.now();
        if let Some(action) = self.page.start_project(now) {
            self.action(action);
        }
        let closed = self.settle().closed.contains(&SERVICE_DETAIL);
        self.record("start_project", json!({ "closed": closed }));
    }

    fn read_faq(&mut self) {
        let faq = section_surface(Section::Faq);
        self.dispatch(Event::Intersection(IntersectionEntry::new(faq, 0.5)));
        self.settle();
        let paged = self.dispatch(Event::Key(KeyEvent::press(KeyCode::PageDown)));
        self.page.faq_mut().toggle(1);
        let detail = json!({
            "paged": paged,
            "window_start": self.page.faq().window_start(),
            "open": self.page.faq().open_item().map(|item| item.summary.clone()),
        });
        self.record("faq", detail);
    }

    fn send_message(&mut self) {
        let action = self.page.navigate("contact");
        self.action(action);
        let Some(ticket) = self.page.submit_contact() else {
            return;
        };
        let refused = self.page.submit_contact().is_none();
        self.clock.advance_ms(750);
        self.page.resolve_contact(ticket, RelayOutcome::Accepted);
        let contact = self.page.contact();
        let detail = json!({
            "double_submit_refused": refused,
            "status": contact.status().as_str(),
            "message": contact.message(),
        });
        self.record("contact", detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn page(pref: FixedPreference) -> PageShell {
        let theme = ThemeContext::load("darkMode", Box::new(MemoryStore::new()), &pref);
        PageShell::new(
            PageConfig::default(),
            PageContent::studio(),
            theme,
            &mut StdRng::seed_from_u64(7),
        )
    }

    fn step<'a>(report: &'a SessionReport, name: &str) -> &'a Value {
        &report
            .steps
            .iter()
            .find(|s| s.step == name)
            .unwrap_or_else(|| panic!("missing step {name}"))
            .detail
    }

    #[test]
    fn journey_toggles_theme_once() {
        let report = Session::new(page(FixedPreference::LIGHT)).play();
        assert_eq!(report.initial_theme, ThemeMode::Light);
        assert_eq!(report.final_theme, ThemeMode::Dark);
        assert_eq!(report.theme_source, "System");
    }

    #[test]
    fn short_drag_keeps_viewer_open_long_drag_closes_it() {
        let report = Session::new(page(FixedPreference::UNKNOWN)).play();
        assert_eq!(step(&report, "drag_short")["still_open"], true);
        assert_eq!(step(&report, "drag_long")["closing"], true);
        assert_eq!(step(&report, "drag_long")["closed"], true);
        assert_eq!(step(&report, "drag_long")["padding_right"], 0.0);
    }

    #[test]
    fn about_children_reveal_in_order() {
        let report = Session::new(page(FixedPreference::UNKNOWN)).play();
        assert_eq!(
            step(&report, "reveal_about")["revealed"],
            json!([0, 1, 2, 3, 4])
        );
    }

    #[test]
    fn start_project_navigates_to_contact() {
        let report = Session::new(page(FixedPreference::UNKNOWN)).play();
        assert_eq!(step(&report, "start_project")["closed"], true);
        assert_eq!(report.actions, ["navigate:#contact", "navigate:#contact"]);
    }

    #[test]
    fn contact_refuses_double_submit() {
        let report = Session::new(page(FixedPreference::UNKNOWN)).play();
        let contact = step(&report, "contact");
        assert_eq!(contact["double_submit_refused"], true);
        assert_eq!(contact["status"], "success");
    }

    #[test]
    fn teardown_releases_everything() {
        let report = Session::new(page(FixedPreference::DARK)).play();
        assert_eq!(step(&report, "teardown")["released"], true);
        assert_eq!(report.final_theme, ThemeMode::Light);
    }
}
