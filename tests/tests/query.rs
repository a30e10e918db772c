use ontoquery::{query::Direction, OntologyQuery};
use pretty_assertions::assert_eq;
use tests::{Fleet, Value};

const ALL_COLUMNS: &str =
    r#""VID", "PLATE_NO", "MODEL_NAME", "KM", "ACTIVE_FLAG", "WEIGHT_T", "BOUGHT_ON""#;

fn ids(result: &ontoquery::QueryResult) -> Vec<i64> {
    (0..result.len())
        .map(|row| result.get(row, "id").and_then(Value::as_i64).unwrap())
        .collect()
}

#[tokio::test]
async fn filter_by_plate_with_limit() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let query = OntologyQuery::from_json(
        r#"{"from": "Vehicle", "where": {"plate": "B-FL 101"}, "limit": 10}"#,
    )
    .unwrap();
    let result = db.query(&query).await.unwrap();

    let (sql, params) = fleet.log().pop();
    assert_eq!(
        sql,
        format!(r#"SELECT {ALL_COLUMNS} FROM "VEHICLES" WHERE "PLATE_NO" = ?1 LIMIT 10;"#)
    );
    assert_eq!(params, [Value::from("B-FL 101")]);

    // Logical names never reach the database
    for logical in [r#""Vehicle""#, r#""plate""#, r#""mileage""#] {
        assert!(!sql.contains(logical), "{sql}");
    }

    assert_eq!(
        result.columns,
        ["id", "plate", "model", "mileage", "active", "weight", "boughtOn"]
    );
    assert_eq!(
        result.rows,
        [vec![
            Value::I64(1),
            Value::from("B-FL 101"),
            Value::from("Transit"),
            Value::I64(120500),
            Value::I64(1),
            Value::F64(2.8),
            Value::from("2019-03-01"),
        ]]
    );
}

#[tokio::test]
async fn select_filter_and_sort() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let query = OntologyQuery::new("Vehicle")
        .select(["plate", "mileage"])
        .filter("model", "Transit")
        .order_by("mileage", Direction::Asc);
    let result = db.query(&query).await.unwrap();

    assert_eq!(
        fleet.log().pop().0,
        r#"SELECT "PLATE_NO", "KM" FROM "VEHICLES" WHERE "MODEL_NAME" = ?1 ORDER BY "KM" ASC;"#
    );
    assert_eq!(result.columns, ["plate", "mileage"]);
    assert_eq!(
        result.rows,
        [
            vec![Value::from("B-FL 102"), Value::I64(80400)],
            vec![Value::from("B-FL 101"), Value::I64(120500)],
        ]
    );
}

#[tokio::test]
async fn limit_and_offset_page_through_rows() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let query = OntologyQuery::new("Vehicle")
        .order_by("id", Direction::Desc)
        .limit(2)
        .offset(1);
    let result = db.query(&query).await.unwrap();

    assert_eq!(
        fleet.log().pop().0,
        format!(r#"SELECT {ALL_COLUMNS} FROM "VEHICLES" ORDER BY "VID" DESC LIMIT 2 OFFSET 1;"#)
    );
    assert_eq!(ids(&result), [4, 3]);
}

#[tokio::test]
async fn filter_values_take_the_property_type() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    // Numeric text against an integer property
    let result = db
        .query(&OntologyQuery::new("Vehicle").filter("mileage", "5200"))
        .await
        .unwrap();
    assert_eq!(fleet.log().pop().1, [Value::I64(5200)]);
    assert_eq!(ids(&result), [4]);

    let result = db
        .query(&OntologyQuery::new("Vehicle").filter("active", false))
        .await
        .unwrap();
    assert_eq!(fleet.log().pop().1, [Value::Bool(false)]);
    assert_eq!(ids(&result), [3]);

    let result = db
        .query(&OntologyQuery::new("Vehicle").filter("boughtOn", "2024-02-29"))
        .await
        .unwrap();
    assert_eq!(ids(&result), [4]);

    let result = db
        .query(&OntologyQuery::new("Vehicle").filter("weight", 3))
        .await
        .unwrap();
    assert_eq!(fleet.log().pop().1, [Value::F64(3.0)]);
    assert_eq!(ids(&result), [4]);
}

#[tokio::test]
async fn null_filter_matches_missing_values() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let query = OntologyQuery::from_json(r#"{"from": "Vehicle", "where": {"model": null}}"#).unwrap();
    let result = db.query(&query).await.unwrap();

    let (sql, params) = fleet.log().pop();
    assert!(sql.ends_with(r#"WHERE "MODEL_NAME" IS NULL;"#), "{sql}");
    assert!(params.is_empty());

    assert_eq!(ids(&result), [5]);
    assert_eq!(result.get(0, "model"), Some(&Value::Null));
    assert_eq!(result.get(0, "weight"), Some(&Value::Null));
}

#[tokio::test]
async fn unknown_fields_are_skipped() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let query = OntologyQuery::from_json(
        r#"{
            "from": "Vehicle",
            "select": ["wheels", "plate"],
            "where": {"wheels": 4, "plate": "M-XY 7"},
            "orderBy": [{"field": "wheels"}],
            "hint": "ignored"
        }"#,
    )
    .unwrap();
    let result = db.query(&query).await.unwrap();

    assert_eq!(
        fleet.log().pop().0,
        r#"SELECT "PLATE_NO" FROM "VEHICLES" WHERE "PLATE_NO" = ?1;"#
    );
    assert_eq!(result.columns, ["plate"]);
    assert_eq!(result.rows, [vec![Value::from("M-XY 7")]]);
}

#[tokio::test]
async fn selecting_nothing_known_returns_every_mapped_field() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let query = OntologyQuery::new("Vehicle")
        .select(["wheels", "doors"])
        .filter("plate", "B-FL 103");
    let result = db.query(&query).await.unwrap();

    assert_eq!(
        fleet.log().pop().0,
        format!(r#"SELECT {ALL_COLUMNS} FROM "VEHICLES" WHERE "PLATE_NO" = ?1;"#)
    );
    assert_eq!(result.columns.len(), 7);
    assert_eq!(ids(&result), [3]);
}

#[tokio::test]
async fn unmapped_property_cannot_be_filtered() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let err = db
        .query(&OntologyQuery::new("Vehicle").filter("color", "red"))
        .await
        .unwrap_err();

    assert!(err.is_unresolved_mapping(), "{err}");
    assert!(fleet.log().is_empty());
}

#[tokio::test]
async fn query_result_serializes_to_json() {
    let fleet = Fleet::new();
    let db = fleet.db().await;

    let result = db
        .query(&OntologyQuery::new("Trip").filter("vehicle", 1).order_by("distance", Direction::Desc))
        .await
        .unwrap();

    assert_eq!(
        result.to_json(),
        serde_json::json!({
            "columns": ["id", "vehicle", "distance"],
            "rows": [
                {"id": 11, "vehicle": 1, "distance": 310.0},
                {"id": 10, "vehicle": 1, "distance": 12.5}
            ]
        })
    );
}
