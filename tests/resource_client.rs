mod common;

use std::sync::Arc;

use crm_console::model::{Car, CarPayload, Customer, Lease, Page};
use crm_console::remote::{ApiError, ErrorKind};
use crm_console::resource::ResourceApi;
use crm_console::session::StaticToken;

use common::{car_json, lease_json, spawn_fake_crm};

fn list<R: crm_console::resource::Resource>(
    api: &dyn ResourceApi<R>,
    page: u32,
    size: u32,
) -> Result<Page<R>, ApiError> {
    api.list(page, size)
}

#[test]
fn lists_one_page_with_the_server_total() {
    let crm = spawn_fake_crm();
    crm.seed_cars(12);
    let client = crm.client();

    let page = list::<Car>(&client, 2, 5).unwrap();
    let ids: Vec<i64> = page.records.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    assert_eq!(page.total_count, 12);

    let calls = crm.backend().list_calls.clone();
    assert_eq!(calls, vec![("cars".to_string(), 2, 5)]);
}

#[test]
fn nothing_to_list_is_an_empty_page() {
    let crm = spawn_fake_crm();
    let client = crm.client();

    let page = list::<Customer>(&client, 1, 10).unwrap();
    assert!(page.records.is_empty());
    assert_eq!(page.total_count, 0);
}

#[test]
fn create_returns_the_stored_record() {
    let crm = spawn_fake_crm();
    let client = crm.client();

    let payload = CarPayload {
        brand: Some("Mazda".to_string()),
        model: Some("3".to_string()),
        year: Some(2022),
        total_available_number: Some(2),
        ..Default::default()
    };
    let car = <_ as ResourceApi<Car>>::create(&client, &payload).unwrap();
    assert!(car.id > 1000);
    assert_eq!(car.brand.as_deref(), Some("Mazda"));
    assert_eq!(car.is_still_in_stock, Some(true));
    assert_eq!(crm.backend().table("cars").len(), 1);
}

#[test]
fn rejected_create_carries_field_errors() {
    let crm = spawn_fake_crm();
    let client = crm.client();

    let err = <_ as ResourceApi<Car>>::create(&client, &CarPayload::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationError);
    match err {
        ApiError::Validation(fields) => {
            assert_eq!(fields.get("brand").to_vec(), vec!["This field is required.".to_string()]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn update_sends_only_the_filled_fields() {
    let crm = spawn_fake_crm();
    crm.backend().table("cars").push(car_json(7, "Kia", "Rio", 2019));
    let client = crm.client();

    let payload = CarPayload {
        color: Some("Red".to_string()),
        ..Default::default()
    };
    let car = <_ as ResourceApi<Car>>::update(&client, 7, &payload).unwrap();
    assert_eq!(car.color.as_deref(), Some("Red"));
    assert_eq!(car.brand.as_deref(), Some("Kia"));
}

#[test]
fn deleting_a_missing_record_is_not_found() {
    let crm = spawn_fake_crm();
    crm.seed_cars(1);
    let client = crm.client();

    <_ as ResourceApi<Car>>::delete(&client, 1).unwrap();
    let err = <_ as ResourceApi<Car>>::delete(&client, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn server_failure_is_network_or_server() {
    let crm = spawn_fake_crm();
    crm.seed_cars(1);
    crm.backend().failing_deletes.insert(1);
    let client = crm.client();

    let err = <_ as ResourceApi<Car>>::delete(&client, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkOrServerError);
    assert!(err.to_string().contains("database is locked"), "{}", err);
}

#[test]
fn no_token_fails_before_sending() {
    let crm = spawn_fake_crm();
    let client = crm.client_with(Arc::new(StaticToken(None)));

    let err = list::<Car>(&client, 1, 10).unwrap_err();
    assert!(err.is_unauthenticated());
    assert!(crm.backend().list_calls.is_empty());
}

#[test]
fn rejected_token_is_unauthenticated() {
    let crm = spawn_fake_crm();
    let client = crm.client_with(Arc::new(StaticToken::new("expired")));

    let err = list::<Car>(&client, 1, 10).unwrap_err();
    assert!(err.is_unauthenticated());
}

#[test]
fn leases_read_bare_ids_and_can_be_returned() {
    let crm = spawn_fake_crm();
    crm.backend().table("leases").push(lease_json(3, 11, 22));
    let client = crm.client();

    let page = list::<Lease>(&client, 1, 10).unwrap();
    assert_eq!(page.records[0].customer.id(), 11);
    assert_eq!(page.records[0].car.id(), 22);
    assert!(!page.records[0].is_returned());

    client.mark_lease_returned(3).unwrap();
    let page = list::<Lease>(&client, 1, 10).unwrap();
    assert!(page.records[0].is_returned());

    let err = client.mark_lease_returned(99).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
