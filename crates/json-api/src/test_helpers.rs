//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog::products::{NewProduct, ProductId, ProductRecord};
use catalog_app::{
    context::AppContext,
    domain::products::{MemoryProductStore, MockProductStore, ProductStore},
};

use crate::state::State;

pub(crate) fn make_draft(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("{name} description"),
        price: Decimal::new(1999, 2),
        category: "Maison".to_string(),
        image_url: None,
    }
}

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord::from_draft(id, make_draft("Lampe"))
}

pub(crate) fn state_with_store(store: Arc<dyn ProductStore>) -> Arc<State> {
    State::from_app_context(AppContext::with_store(store))
}

fn service_with_store(store: Arc<dyn ProductStore>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_store(store)))
            .push(route),
    )
}

/// Serve `route` against a mock store; any call without an expectation fails the test.
pub(crate) fn products_service(store: MockProductStore, route: Router) -> Service {
    service_with_store(Arc::new(store), route)
}

/// Serve `route` against an in-memory store the test keeps a handle on.
pub(crate) fn memory_service(store: Arc<MemoryProductStore>, route: Router) -> Service {
    service_with_store(store, route)
}
