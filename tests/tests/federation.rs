use ontoquery::{schema::DatabaseKind, OntologyQuery};
use pretty_assertions::assert_eq;
use tests::{Fleet, Value};

#[tokio::test]
async fn catalog_registers_reachable_object_types() {
    let fleet = Fleet::new();
    let db = fleet.db().await;
    let catalog = db.catalog();

    let tables: Vec<_> = catalog
        .tables()
        .map(|(name, table)| (name, table.kind(), table.mapping().table.as_str()))
        .collect();
    assert_eq!(
        tables,
        [
            ("Vehicle", DatabaseKind::Sqlite, "vehicles"),
            ("Trip", DatabaseKind::Sqlite, "trips"),
            ("Depot", DatabaseKind::Sqlite, "depots"),
        ]
    );
}

#[tokio::test]
async fn failing_sources_only_exclude_their_object_types() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let failures: Vec<_> = db.catalog().failures().collect();
    assert_eq!(failures.len(), 2);

    let (id, err) = failures[0];
    assert_eq!(id, "warehouse");
    assert!(err.is_unsupported_data_source_type(), "{err}");

    let (id, err) = failures[1];
    assert_eq!(id, "billing_db");
    assert!(err.is_connection_failure(), "{err}");

    for name in ["Shipment", "Invoice"] {
        let err = db.query(&OntologyQuery::new(name)).await.unwrap_err();
        assert!(err.is_unresolved_mapping(), "{name}: {err}");
    }

    // Sources that connected keep working
    let result = db.query(&OntologyQuery::new("Depot")).await.unwrap();
    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn errors_surface_before_any_sql() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let err = db.query(&OntologyQuery::new("Unknown")).await.unwrap_err();
    assert!(err.is_not_found());

    let err = db.query(&OntologyQuery::new("Driver")).await.unwrap_err();
    assert!(err.is_unresolved_mapping());

    let err = OntologyQuery::from_json(r#"{"select": ["plate"]}"#)
        .and_then(|query| db.plan(&query))
        .unwrap_err();
    assert!(err.is_invalid_query());

    assert!(fleet.log().is_empty());
}

#[tokio::test]
async fn object_types_on_one_source_share_a_connection() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let vehicles = db.catalog().resolve_connection("Vehicle").unwrap();
    let trips = db.catalog().resolve_connection("Trip").unwrap();
    let depots = db.catalog().resolve_connection("Depot").unwrap();

    assert_eq!(vehicles.source_id(), "fleet_db");
    assert_eq!(trips.source_id(), "fleet_db");
    assert_eq!(depots.source_id(), "depot_db");

    let plates = OntologyQuery::new("Vehicle").select(["plate"]);
    let distances = OntologyQuery::new("Trip").select(["distance"]);
    let (a, b) = tokio::join!(db.query(&plates), db.query(&distances));
    assert_eq!(a.unwrap().len(), 5);
    assert_eq!(b.unwrap().len(), 3);
    assert_eq!(fleet.log().statements().len(), 2);
}

#[tokio::test]
async fn source_identifier_case_applies_per_source() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let result = db
        .query(&OntologyQuery::new("Depot").filter("city", "Hamburg"))
        .await
        .unwrap();

    assert_eq!(
        fleet.log().pop().0,
        r#"SELECT "did", "city_name" FROM "depots" WHERE "city_name" = ?1;"#
    );
    assert_eq!(result.columns, ["id", "city"]);
    assert_eq!(result.rows, [vec![Value::I64(2), Value::from("Hamburg")]]);
}

#[tokio::test]
async fn close_releases_connections() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let connection = db.catalog().resolve_connection("Vehicle").unwrap();
    db.close().await;

    assert!(connection.is_closed().await);
    assert!(connection.query("SELECT 1;", &[]).await.is_err());
}
