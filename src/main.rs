use tracing::info;
use tracing_subscriber::EnvFilter;

use playbill::construct::Dataset;
use playbill::filter::{FilterMode, FilterTarget};
use playbill::interface::{Controller, LogRenderer};
use playbill::search::Engine;
use playbill::settings::Settings;

// A small panel-show dataset to demonstrate the engine with. Ids are
// arbitrary but stable so credits can refer to them below.
fn seed() -> Dataset {
    let mut dataset = Dataset::new();
    dataset.add_person(1, String::from("Steve Coogan"));
    dataset.add_person(2, String::from("Rebecca Front"));
    dataset.add_person(3, String::from("Chris Morris"));
    dataset.add_person(4, String::from("Armando Iannucci"));
    dataset.add_person(5, String::from("Doon Mackichan"));
    dataset.add_person(6, String::from("Patrick Marber"));
    dataset.add_show(10, String::from("On the Hour"));
    dataset.add_show(11, String::from("The Day Today"));
    dataset.add_show(12, String::from("Knowing Me, Knowing You"));
    dataset.add_show(13, String::from("I'm Alan Partridge"));
    dataset.add_show(14, String::from("Brass Eye"));
    dataset.add_credit(1, 10);
    dataset.add_credit(1, 11);
    dataset.add_credit(1, 12);
    dataset.add_credit(1, 13);
    dataset.add_credit(2, 10);
    dataset.add_credit(2, 11);
    dataset.add_credit(2, 12);
    dataset.add_credit(2, 13);
    dataset.add_credit(3, 10);
    dataset.add_credit(3, 11);
    dataset.add_credit(3, 14);
    dataset.add_credit(4, 10);
    dataset.add_credit(5, 11);
    dataset.add_credit(5, 14);
    dataset.add_credit(6, 10);
    dataset.add_credit(6, 11);
    dataset.add_credit(6, 12);
    dataset
}

fn main() {
    let settings = match Settings::load("playbill") {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log.level.clone())),
        )
        .init();

    let dataset = seed();
    if let Err(error) = dataset.verify_references() {
        eprintln!("{error}");
        std::process::exit(1);
    }
    info!(
        people = dataset.people().len(),
        shows = dataset.shows().len(),
        credits = dataset.credits().len(),
        "dataset loaded"
    );

    let engine = Engine::new(&dataset);
    for show in engine.shows_with_person("Coogan") {
        info!(%show, "credited to Coogan");
    }
    for person in engine.people_in_show("Day") {
        info!(%person, "appeared in a matching show");
    }

    let mut controller = Controller::new(dataset, settings.filter.controls(), LogRenderer);
    controller.set_arrangement(settings.filter.arrangement);

    controller.set_filter_text("morris");
    for person in controller.working_set().people() {
        info!(%person, "visible after include filter");
    }

    controller.set_filter_mode(FilterMode::Exclude);
    for person in controller.working_set().people() {
        info!(%person, "visible after exclude filter");
    }

    controller.set_target(FilterTarget::Shows);
    controller.set_filter_text("the");
    for show in controller.working_set().shows() {
        info!(%show, "visible after show filter");
    }
}
