use playbill::construct::Dataset;
use playbill::filter::{FilterControls, FilterMode, FilterTarget};
use playbill::interface::{Controller, Renderer};

// Records adapter calls so the notification order can be asserted.
#[derive(Default)]
struct RecordingRenderer {
    events: Vec<String>,
}
impl Renderer for RecordingRenderer {
    fn reset_data(&mut self) {
        self.events.push(String::from("reset_data"));
    }
    fn create_graph(&mut self) {
        self.events.push(String::from("create_graph"));
    }
    fn set_layout(&mut self) {
        self.events.push(String::from("set_layout"));
    }
    fn toggle_view_mode(&mut self) {
        self.events.push(String::from("toggle_view_mode"));
    }
    fn change_layout_mode(&mut self, mode_index: usize) {
        self.events.push(format!("change_layout_mode({mode_index})"));
    }
}

fn setup() -> Controller<RecordingRenderer> {
    let mut dataset = Dataset::new();
    dataset.add_person(1, String::from("Alice"));
    dataset.add_person(2, String::from("Bob"));
    dataset.add_show(10, String::from("ShowA"));
    dataset.add_show(11, String::from("ShowB"));
    dataset.add_credit(1, 10);
    dataset.add_credit(2, 11);
    Controller::new(
        dataset,
        FilterControls::default(),
        RecordingRenderer::default(),
    )
}

#[test]
fn construction_does_not_touch_the_renderer() {
    let controller = setup();
    assert!(controller.renderer().events.is_empty());
    assert_eq!(controller.working_set().people().len(), 2);
    assert_eq!(controller.working_set().shows().len(), 2);
}

#[test]
fn filter_text_triggers_a_full_rebuild() {
    let mut controller = setup();
    controller.set_filter_text("alice");
    assert_eq!(
        controller.renderer().events,
        vec!["reset_data", "create_graph", "set_layout"]
    );
    let names: Vec<&str> = controller
        .working_set()
        .people()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, vec!["Alice"]);
}

#[test]
fn mode_toggle_refilters() {
    let mut controller = setup();
    controller.set_filter_text("alice");
    controller.set_filter_mode(FilterMode::Exclude);
    let names: Vec<&str> = controller
        .working_set()
        .people()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, vec!["Bob"]);
    assert_eq!(controller.renderer().events.len(), 6, "two rebuilds");
}

#[test]
fn view_toggle_notifies_before_refiltering() {
    let mut controller = setup();
    controller.set_target(FilterTarget::Shows);
    assert_eq!(
        controller.renderer().events,
        vec!["toggle_view_mode", "reset_data", "create_graph", "set_layout"]
    );
}

#[test]
fn retargeting_moves_the_predicate_to_the_other_collection() {
    let mut controller = setup();
    controller.set_filter_text("ShowA");
    // in people view the text matches no names, so people empty out
    assert!(controller.working_set().people().is_empty());
    assert_eq!(controller.working_set().shows().len(), 2);
    controller.set_target(FilterTarget::Shows);
    // in show view the same text narrows shows and releases people
    assert_eq!(controller.working_set().people().len(), 2);
    let titles: Vec<&str> = controller
        .working_set()
        .shows()
        .iter()
        .map(|s| s.title())
        .collect();
    assert_eq!(titles, vec!["ShowA"]);
}

#[test]
fn arrangement_changes_do_not_refilter() {
    let mut controller = setup();
    controller.set_arrangement(2);
    assert_eq!(controller.renderer().events, vec!["change_layout_mode(2)"]);
    assert_eq!(controller.working_set().people().len(), 2);
}

#[test]
fn clearing_the_text_restores_the_full_working_set() {
    let mut controller = setup();
    controller.set_filter_text("alice");
    controller.set_filter_text("");
    assert_eq!(controller.working_set().people().len(), 2);
    assert_eq!(controller.working_set().shows().len(), 2);
}
