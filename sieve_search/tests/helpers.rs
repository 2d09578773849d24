//! Shared test helpers for sieve_search tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use sieve_core::{Catalog, CategorySpec, Filter, Nature, TokenMeta, ValueType};
use sieve_search::{CatalogProvider, FilterSink, InteractionController, SearchConfig};

/// Every filter list handed to the sink, in order.
pub type Applied = Arc<Mutex<Vec<Vec<Filter>>>>;

/// A sink recording what it receives.
pub fn recording_sink() -> (impl FilterSink, Applied) {
    let applied: Applied = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&applied);
    let sink = move |filters: Vec<Filter>| {
        recorded.lock().unwrap().push(filters);
    };
    (sink, applied)
}

pub fn applied_count(applied: &Applied) -> usize {
    applied.lock().unwrap().len()
}

pub fn last_applied(applied: &Applied) -> Option<Vec<Filter>> {
    applied.lock().unwrap().last().cloned()
}

/// Small job catalog used across tests.
pub fn test_catalog() -> Catalog {
    Catalog::new()
        .with_category(
            CategorySpec::new("Status", ValueType::String)
                .with_values(&["Running", "Received", "Done"]),
        )
        .with_category(CategorySpec::new("UserPriority", ValueType::Number))
        .with_category(CategorySpec::new("SubmissionTime", ValueType::Date))
        .with_category(CategorySpec::new("Rescheduled", ValueType::Boolean))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Controller over [`test_catalog`] with a recording sink.
pub fn create_controller(config: SearchConfig) -> (InteractionController<CatalogProvider>, Applied) {
    init_logging();
    let (sink, applied) = recording_sink();
    let controller = InteractionController::new(CatalogProvider::new(test_catalog()), sink, config);
    (controller, applied)
}

pub fn meta(nature: Nature, value_type: ValueType) -> Option<TokenMeta> {
    Some(TokenMeta::new(nature, value_type))
}

/// Type `Status = Running` token by token.
pub fn build_status_running(controller: &mut InteractionController<CatalogProvider>) {
    controller.create_token("Status", meta(Nature::Category, ValueType::String));
    controller.create_token("=", meta(Nature::Operator, ValueType::String));
    controller.create_token("Running", meta(Nature::Value, ValueType::String));
}
