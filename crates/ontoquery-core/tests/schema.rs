use ontoquery_core::{
    schema::{resolve_env_with, DataSourceConfig, DatabaseKind, IdentCase, ResolveMapping},
    stmt::Type,
    Schema,
};
use pretty_assertions::assert_eq;

const FLEET: &str = r#"{
    "object_types": [
        {
            "name": "Vehicle",
            "properties": [
                {"name": "plate", "type": "string"},
                {"name": "model", "type": "text"},
                {"name": "mileage", "type": "int"},
                {"name": "color", "type": "string"}
            ],
            "data_source": {
                "connection_id": "fleet_db",
                "table": "vehicles",
                "id_column": "vid",
                "field_mapping": {"plate": "plate_no", "model": "model_name", "mileage": "km"}
            }
        },
        {
            "name": "Driver",
            "properties": [{"name": "name", "type": "string"}]
        }
    ],
    "data_sources": [
        {"id": "fleet_db", "type": "postgres", "jdbc_url": "jdbc:postgresql://db:5432/fleet", "username": "${FLEET_USER}"}
    ]
}"#;

fn schema_with(object_type: &str) -> String {
    format!(r#"{{"object_types": [{object_type}], "data_sources": []}}"#)
}

#[test]
fn load_fleet_schema() {
    let schema = Schema::from_json(FLEET).unwrap();

    let vehicle = schema.object_type("Vehicle").unwrap();
    assert_eq!(vehicle.properties.len(), 4);
    assert_eq!(vehicle.properties[1].ty, Type::String);
    assert_eq!(vehicle.properties[2].ty, Type::Integer);

    let names: Vec<_> = vehicle.fields().map(|field| field.name).collect();
    assert_eq!(names, ["id", "plate", "model", "mileage", "color"]);

    assert_eq!(vehicle.field_position("id"), Some(0));
    assert_eq!(vehicle.field_position("mileage"), Some(3));
    assert_eq!(vehicle.field_position("nope"), None);

    let source = schema.data_source("fleet_db").unwrap();
    assert_eq!(source.kind().unwrap(), DatabaseKind::Postgresql);
    assert_eq!(source.identifier_case, IdentCase::Upper);
}

#[test]
fn column_lookup_round_trips() {
    let schema = Schema::from_json(FLEET).unwrap();
    let mapping = schema.resolve_mapping("Vehicle").unwrap();

    for (property, _) in &mapping.field_mapping {
        let column = mapping.column_name(property).unwrap();
        assert_eq!(mapping.property_name(column), Some(property.as_str()));
    }

    assert_eq!(mapping.column_name("color"), None);
    assert_eq!(mapping.property_name("vid"), None);
    assert_eq!(mapping.property_name_ignore_case("PLATE_NO"), Some("plate"));
}

#[test]
fn unconfigured_mapping_is_not_resolved() {
    let schema = Schema::from_json(&schema_with(
        r#"{"name": "Thing", "properties": [], "data_source": {"connection_id": "db", "table": "", "id_column": "id"}}"#,
    ))
    .unwrap();

    assert!(schema.object_type("Thing").unwrap().data_source.is_some());
    assert!(schema.resolve_mapping("Thing").is_none());
    assert!(schema.resolve_mapping("Driver").is_none());
}

#[test]
fn duplicate_object_type_is_rejected() {
    let err = Schema::from_json(
        r#"{"object_types": [{"name": "A"}, {"name": "A"}]}"#,
    )
    .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn reserved_id_property_is_rejected() {
    let err = Schema::from_json(&schema_with(
        r#"{"name": "A", "properties": [{"name": "id", "type": "integer"}]}"#,
    ))
    .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn duplicate_mapped_column_is_rejected() {
    let err = Schema::from_json(&schema_with(
        r#"{
            "name": "A",
            "properties": [{"name": "x", "type": "string"}, {"name": "y", "type": "string"}],
            "data_source": {"connection_id": "db", "table": "t", "id_column": "pk", "field_mapping": {"x": "COL", "y": "col"}}
        }"#,
    ))
    .unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("mapped more than once"), "{err}");
}

#[test]
fn columns_differing_in_non_ascii_case_are_rejected() {
    let err = Schema::from_json(&schema_with(
        r#"{
            "name": "Item",
            "properties": [{"name": "a", "type": "string"}, {"name": "b", "type": "string"}],
            "data_source": {"connection_id": "db", "table": "items", "id_column": "item_id", "field_mapping": {"a": "émail", "b": "ÉMAIL"}}
        }"#,
    ))
    .unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("`ÉMAIL`"), "{err}");
}

#[test]
fn column_shared_with_id_is_rejected() {
    let err = Schema::from_json(&schema_with(
        r#"{
            "name": "A",
            "properties": [{"name": "x", "type": "string"}],
            "data_source": {"connection_id": "db", "table": "t", "id_column": "pk", "field_mapping": {"x": "PK"}}
        }"#,
    ))
    .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn mapping_of_undeclared_property_is_rejected() {
    let err = Schema::from_json(&schema_with(
        r#"{
            "name": "A",
            "properties": [],
            "data_source": {"connection_id": "db", "table": "t", "id_column": "pk", "field_mapping": {"ghost": "G"}}
        }"#,
    ))
    .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn unknown_property_type_is_rejected() {
    let err = Schema::from_json(&schema_with(
        r#"{"name": "A", "properties": [{"name": "x", "type": "blob"}]}"#,
    ))
    .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn explicit_url_strips_jdbc_prefix() {
    let source = DataSourceConfig::new("db", "mysql").url("jdbc:mysql://localhost:3306/app");
    assert_eq!(source.connection_url().unwrap(), "mysql://localhost:3306/app");
}

#[test]
fn synthesized_urls() {
    let mut source = DataSourceConfig::new("db", "postgresql");
    source.host = Some("db.internal".to_string());
    source.database = Some("fleet".to_string());
    source.params.insert("sslmode".to_string(), "disable".to_string());
    source.params.insert("application_name".to_string(), "ontoquery".to_string());
    assert_eq!(
        source.connection_url().unwrap(),
        "postgresql://db.internal:5432/fleet?sslmode=disable&application_name=ontoquery"
    );

    let mut source = DataSourceConfig::new("db", "MySQL");
    source.host = Some("localhost".to_string());
    source.port = Some(3307);
    assert_eq!(source.connection_url().unwrap(), "mysql://localhost:3307");

    let mut source = DataSourceConfig::new("db", "sqlite");
    assert_eq!(source.connection_url().unwrap(), "sqlite::memory:");
    source.database = Some("/tmp/fleet.db".to_string());
    assert_eq!(source.connection_url().unwrap(), "sqlite:/tmp/fleet.db");
}

#[test]
fn missing_host_is_an_invalid_url() {
    let err = DataSourceConfig::new("db", "postgres")
        .connection_url()
        .unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn unsupported_type() {
    let source = DataSourceConfig::new("warehouse", "db2");
    let err = source.kind().unwrap_err();
    assert!(err.is_unsupported_data_source_type());
    assert!(source.connection_url().unwrap_err().is_unsupported_data_source_type());
}

#[test]
fn env_indirection() {
    let lookup = |name: &str| (name == "FLEET_USER").then(|| "svc_fleet".to_string());

    assert_eq!(resolve_env_with("${FLEET_USER}", lookup), "svc_fleet");
    assert_eq!(resolve_env_with("${MISSING}", lookup), "${MISSING}");
    assert_eq!(resolve_env_with("plain", lookup), "plain");
    assert_eq!(resolve_env_with("${FLEET_USER", lookup), "${FLEET_USER");
}

#[test]
fn ident_case() {
    assert_eq!(IdentCase::Upper.apply("plate_no"), "PLATE_NO");
    assert_eq!(IdentCase::Lower.apply("Plate_No"), "plate_no");
    assert_eq!(IdentCase::Preserve.apply("Plate_No"), "Plate_No");
}
